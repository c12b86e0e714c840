use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::render_frame::frame_snapshot::FrameSnapshot;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::render_frame::{
    render_pixel, validate_frame, write_colour, RenderFrameError,
};
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::point::Point;
use crate::core::dynamics::fatou::FatouResult;
use crate::core::dynamics::map::DynamicalMap;
use crate::core::dynamics::system::FatouSystem;

/// Renders rows in parallel on rayon's work-stealing pool.
///
/// Output is byte-identical to [`render_frame`](super::render_frame::render_frame).
/// For cancel-aware rendering, use [`render_frame_parallel_cancelable`].
pub fn render_frame_parallel<M, CMap>(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    snapshot: &FrameSnapshot,
    system: &FatouSystem<M>,
    colour_map: &CMap,
) -> Result<(), RenderFrameError>
where
    M: DynamicalMap + Sync,
    CMap: ColourMap<FatouResult> + Sync,
{
    render_frame_parallel_cancelable(buffer, width, height, snapshot, system, colour_map, &NeverCancel)
}

/// Like [`render_frame_parallel`], but polls `cancel` at the start of every
/// row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// On [`RenderFrameError::Cancelled`] the buffer is partially written and
/// should be discarded.
pub fn render_frame_parallel_cancelable<M, CMap, C>(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    snapshot: &FrameSnapshot,
    system: &FatouSystem<M>,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(), RenderFrameError>
where
    M: DynamicalMap + Sync,
    CMap: ColourMap<FatouResult> + Sync,
    C: CancelToken,
{
    validate_frame(buffer, width, height, snapshot)?;

    let row_bytes = width as usize * BYTES_PER_PIXEL;

    buffer
        .par_chunks_mut(row_bytes)
        .enumerate()
        .try_for_each(|(y, row)| {
            for (x, bytes) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                let pixel = Point {
                    x: x as i32,
                    y: y as i32,
                };
                write_colour(bytes, render_pixel(pixel, snapshot, system, colour_map));
            }

            Ok(())
        })?;

    Ok(())
}
