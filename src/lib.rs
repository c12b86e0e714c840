pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use crate::config::{ConfigError, EngineArgs, GuiArgs, MapChoice, RenderArgs};
pub use crate::controllers::cli::render_image::{RenderImageController, RenderImageError};
pub use crate::controllers::engine::engine_state::EngineState;
pub use crate::controllers::engine::frame_deltas::FrameDeltas;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, Deadline, NeverCancel};
pub use crate::core::actions::render_frame::frame_snapshot::FrameSnapshot;
pub use crate::core::actions::render_frame::render_frame::{
    render_frame, render_frame_cancelable, RenderFrameError,
};
pub use crate::core::actions::render_frame::render_frame_parallel::{
    render_frame_parallel, render_frame_parallel_cancelable,
};
pub use crate::core::data::camera::Camera;
pub use crate::core::data::complex::Complex;
pub use crate::core::dynamics::colour_mapping::map::FatouColourMap;
pub use crate::core::dynamics::fatou::{FatouKind, FatouResult};
pub use crate::core::dynamics::maps::kinds::MapKinds;
pub use crate::core::dynamics::params::{ParameterSet, SliderId};
pub use crate::core::dynamics::system::FatouSystem;
pub use crate::core::dynamics::thresholds::Thresholds;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::presenter::PixelsPresenter;
