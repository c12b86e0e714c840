pub mod engine_state;
pub mod frame_deltas;
pub mod sliders;
