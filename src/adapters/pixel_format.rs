//! Framebuffer helpers for RGBA presentation targets.

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::pixel_rect::PixelRect;

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Copies RGB pixels into an RGBA frame with opaque alpha.
///
/// # Panics
/// Panics if `src` is not whole RGB pixels or `dst` does not hold the same
/// number of RGBA pixels.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % BYTES_PER_PIXEL == 0,
        "src length {} is not a multiple of {}",
        src.len(),
        BYTES_PER_PIXEL
    );
    let expected_dst_len = src.len() / BYTES_PER_PIXEL * RGBA_BYTES_PER_PIXEL;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (rgb, rgba) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        rgba[3] = 255;
    }
}

/// Fills the part of `rect` that lies inside a `width` x `height` RGBA frame.
pub fn fill_rect_rgba(dst: &mut [u8], width: u32, height: u32, rect: PixelRect, colour: Colour) {
    let clip_x = |x: i32| x.clamp(0, width as i32) as usize;
    let clip_y = |y: i32| y.clamp(0, height as i32) as usize;

    let x_start = clip_x(rect.top_left().x);
    let x_end = clip_x(rect.bottom_right().x.saturating_add(1));
    let y_start = clip_y(rect.top_left().y);
    let y_end = clip_y(rect.bottom_right().y.saturating_add(1));
    let stride = width as usize * RGBA_BYTES_PER_PIXEL;

    for row in dst.chunks_exact_mut(stride).take(y_end).skip(y_start) {
        let span = &mut row[x_start * RGBA_BYTES_PER_PIXEL..x_end * RGBA_BYTES_PER_PIXEL];
        for pixel in span.chunks_exact_mut(RGBA_BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
        }
    }
}
