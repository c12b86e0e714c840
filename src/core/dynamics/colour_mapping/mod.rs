pub mod map;
pub mod palette;
