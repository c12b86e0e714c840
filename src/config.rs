use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, ValueEnum};
use log::warn;
use thiserror::Error;

use crate::controllers::engine::engine_state::EngineState;
use crate::core::data::camera::Camera;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::dynamics::maps::kinds::MapKinds;
use crate::core::dynamics::params::{ParameterSet, ParameterSetError};
use crate::core::dynamics::thresholds::{ThresholdError, Thresholds};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("zoom must be finite and positive, got {0}")]
    InvalidZoom(f64),
    #[error("time limit must be a non-negative number of seconds, got {0}")]
    InvalidTimeLimit(f64),
    #[error(transparent)]
    Viewport(#[from] PixelRectError),
    #[error(transparent)]
    Params(#[from] ParameterSetError),
    #[error(transparent)]
    Thresholds(#[from] ThresholdError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MapChoice {
    /// z² − p1·tan(p0)
    #[default]
    TangentQuadratic,
    /// z² + p0
    Quadratic,
}

impl From<MapChoice> for MapKinds {
    fn from(choice: MapChoice) -> Self {
        match choice {
            MapChoice::TangentQuadratic => MapKinds::TangentQuadratic,
            MapChoice::Quadratic => MapKinds::Quadratic,
        }
    }
}

/// View, parameters and thresholds shared by every front-end.
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Plane point at the centre of the view, as `re,im`.
    #[arg(long, default_value = "0,4", allow_hyphen_values = true)]
    pub center: Complex,

    /// Plane units spanned by the view height.
    #[arg(long, default_value_t = 10.0)]
    pub zoom: f64,

    #[arg(long, default_value_t = 50, allow_hyphen_values = true)]
    pub max_iterations: i64,

    /// Squared escape radius.
    #[arg(long, default_value_t = 100.0)]
    pub infinity: f64,

    /// Squared convergence distance.
    #[arg(long, default_value_t = 0.01)]
    pub zero: f64,

    #[arg(long, value_enum, default_value_t = MapChoice::TangentQuadratic)]
    pub map: MapChoice,

    /// Free parameter p1, p2, ... as `re,im`; repeat for each.
    #[arg(
        long = "param",
        default_values = ["0,-1.5", "-1,0"],
        allow_hyphen_values = true
    )]
    pub params: Vec<Complex>,

    /// Starting point of every orbit, as `re,im`.
    #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
    pub seed: Complex,
}

impl EngineArgs {
    pub fn engine_state(&self) -> Result<EngineState, ConfigError> {
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(ConfigError::InvalidZoom(self.zoom));
        }

        let camera = Camera::new(self.center, self.zoom, self.width, self.height)?;
        let params = ParameterSet::new(&self.params, self.seed)?;
        let thresholds = Thresholds::new(self.max_iterations, self.infinity, self.zero)?;

        if thresholds.max_iterations() as i64 != self.max_iterations {
            warn!(
                "max iterations {} clamped to {}",
                self.max_iterations,
                thresholds.max_iterations()
            );
        }
        if thresholds.infinity() != self.infinity || thresholds.zero() != self.zero {
            warn!(
                "thresholds clamped to infinity {} zero {}",
                thresholds.infinity(),
                thresholds.zero()
            );
        }

        Ok(EngineState::new(camera, params, thresholds))
    }
}

/// Renders one frame to a PPM file.
#[derive(Parser, Debug, Clone)]
#[command(name = "fatou_explorer", version, about = "Render the Fatou classification of a complex dynamical system")]
pub struct RenderArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    #[arg(long, default_value = "output/fatou.ppm")]
    pub output: PathBuf,

    /// Render on the calling thread only.
    #[arg(long, default_value_t = false)]
    pub serial: bool,

    /// Abandon the render after this many seconds.
    #[arg(long)]
    pub time_limit: Option<f64>,
}

impl RenderArgs {
    pub fn time_limit(&self) -> Result<Option<Duration>, ConfigError> {
        self.time_limit
            .map(|secs| Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidTimeLimit(secs)))
            .transpose()
    }
}

/// Interactive explorer.
#[derive(Parser, Debug, Clone)]
#[command(name = "gui", version, about = "Explore a complex dynamical system interactively")]
pub struct GuiArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
}
