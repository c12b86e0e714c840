pub mod actions;
pub mod data;
pub mod dynamics;
pub mod util;
