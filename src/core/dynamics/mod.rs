pub mod colour_mapping;
pub mod fatou;
pub mod map;
pub mod maps;
pub mod orbit;
pub mod params;
pub mod system;
pub mod thresholds;
