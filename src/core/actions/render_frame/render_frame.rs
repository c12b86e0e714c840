use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::render_frame::frame_snapshot::FrameSnapshot;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::point::Point;
use crate::core::dynamics::fatou::FatouResult;
use crate::core::dynamics::map::DynamicalMap;
use crate::core::dynamics::system::FatouSystem;
use crate::core::util::screen_to_plane::screen_to_plane;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderFrameError {
    #[error("buffer holds {actual} bytes but a {width}x{height} frame needs {expected}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("frame is {width}x{height} but the camera viewport is {viewport_width}x{viewport_height}")]
    ViewportMismatch {
        width: u32,
        height: u32,
        viewport_width: u32,
        viewport_height: u32,
    },
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

pub(crate) fn validate_frame(
    buffer: &[u8],
    width: u32,
    height: u32,
    snapshot: &FrameSnapshot,
) -> Result<(), RenderFrameError> {
    let camera = &snapshot.camera;
    if camera.width() != width || camera.height() != height {
        return Err(RenderFrameError::ViewportMismatch {
            width,
            height,
            viewport_width: camera.width(),
            viewport_height: camera.height(),
        });
    }

    let expected = width as usize * height as usize * BYTES_PER_PIXEL;
    if buffer.len() != expected {
        return Err(RenderFrameError::BufferSizeMismatch {
            width,
            height,
            expected,
            actual: buffer.len(),
        });
    }

    Ok(())
}

/// Classifies and colours one pixel. The pixel's plane point becomes the
/// live input, the orbit always starts from the seed.
#[inline]
pub(crate) fn render_pixel<M, CMap>(
    pixel: Point,
    snapshot: &FrameSnapshot,
    system: &FatouSystem<M>,
    colour_map: &CMap,
) -> Colour
where
    M: DynamicalMap,
    CMap: ColourMap<FatouResult>,
{
    let params = snapshot
        .params
        .with_live_input(screen_to_plane(pixel, &snapshot.camera));
    let result = system.iterate(params.seed(), &params, &snapshot.thresholds);

    colour_map.map(result)
}

#[inline]
pub(crate) fn write_colour(bytes: &mut [u8], Colour { r, g, b }: Colour) {
    bytes[0] = r;
    bytes[1] = g;
    bytes[2] = b;
}

/// Fills `buffer` with `3 · width · height` row-major RGB bytes.
///
/// This is the single-threaded reference path; the parallel renderer must
/// produce the same bytes.
pub fn render_frame<M, CMap>(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    snapshot: &FrameSnapshot,
    system: &FatouSystem<M>,
    colour_map: &CMap,
) -> Result<(), RenderFrameError>
where
    M: DynamicalMap,
    CMap: ColourMap<FatouResult>,
{
    render_frame_cancelable(buffer, width, height, snapshot, system, colour_map, &NeverCancel)
}

/// Serial render that polls `cancel` on the same schedule as the parallel
/// renderer. A cancelled buffer is partially written.
pub fn render_frame_cancelable<M, CMap, C>(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    snapshot: &FrameSnapshot,
    system: &FatouSystem<M>,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(), RenderFrameError>
where
    M: DynamicalMap,
    CMap: ColourMap<FatouResult>,
    C: CancelToken,
{
    validate_frame(buffer, width, height, snapshot)?;

    let row_bytes = width as usize * BYTES_PER_PIXEL;
    for (y, row) in buffer.chunks_exact_mut(row_bytes).enumerate() {
        for (x, bytes) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(Cancelled.into());
            }

            let pixel = Point {
                x: x as i32,
                y: y as i32,
            };
            write_colour(bytes, render_pixel(pixel, snapshot, system, colour_map));
        }
    }

    Ok(())
}
