use std::path::Path;
use std::time::{Duration, Instant};

use log::{error, info, warn};
use thiserror::Error;

use crate::controllers::engine::engine_state::EngineState;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::{CancelToken, Deadline, NeverCancel};
use crate::core::actions::render_frame::render_frame::{render_frame_cancelable, RenderFrameError};
use crate::core::actions::render_frame::render_frame_parallel::render_frame_parallel_cancelable;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::dynamics::colour_mapping::map::FatouColourMap;
use crate::core::dynamics::maps::kinds::MapKinds;
use crate::core::dynamics::system::FatouSystem;

#[derive(Debug, Error)]
pub enum RenderImageError {
    #[error("nothing rendered yet")]
    NothingRendered,
    #[error(transparent)]
    Render(#[from] RenderFrameError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders a single frame headlessly and hands it to a file presenter.
pub struct RenderImageController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderImageController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Renders the state's current view. With a `time_limit` the frame is
    /// abandoned once the budget runs out and the previous buffer is kept.
    pub fn render(
        &mut self,
        state: &EngineState,
        map: MapKinds,
        parallel: bool,
        time_limit: Option<Duration>,
    ) -> Result<(), RenderImageError> {
        match time_limit {
            Some(limit) => self.render_with(state, map, parallel, &Deadline::after(limit)),
            None => self.render_with(state, map, parallel, &NeverCancel),
        }
        .inspect_err(|err| {
            if let (RenderImageError::Render(RenderFrameError::Cancelled(_)), Some(limit)) = (err, time_limit) {
                warn!("Gave up after the {:?} time limit", limit);
            }
        })
    }

    fn render_with<C: CancelToken>(
        &mut self,
        state: &EngineState,
        map: MapKinds,
        parallel: bool,
        cancel: &C,
    ) -> Result<(), RenderImageError> {
        let snapshot = state.snapshot();
        let camera = snapshot.camera;
        let (width, height) = (camera.width(), camera.height());
        let system = FatouSystem::new(map);
        let colour_map = FatouColourMap;
        let mut buffer = PixelBuffer::new(camera.viewport());

        info!(
            "Rendering {} at {}x{}, centre {} zoom {}, max iterations {}",
            map,
            width,
            height,
            camera.center(),
            camera.zoom(),
            snapshot.thresholds.max_iterations()
        );

        let start = Instant::now();
        let pixels = buffer.buffer_mut();
        if parallel {
            render_frame_parallel_cancelable(pixels, width, height, &snapshot, &system, &colour_map, cancel)?;
        } else {
            render_frame_cancelable(pixels, width, height, &snapshot, &system, &colour_map, cancel)?;
        }
        info!("Rendered in {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), RenderImageError> {
        let filepath = filepath.as_ref();
        let buffer = self.buffer.as_ref().ok_or(RenderImageError::NothingRendered)?;

        self.presenter.present(buffer, filepath).map_err(|err| {
            error!("Writing {} failed: {}", filepath.display(), err);
            RenderImageError::Io(err)
        })?;
        info!("Wrote {}", filepath.display());

        Ok(())
    }
}
