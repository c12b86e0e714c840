use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `buffer` as a binary (`P6`) PPM image.
pub fn write_ppm(buffer: &PixelBuffer, mut writer: impl Write) -> std::io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // P6 header: magic, width height, max colour value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        write_ppm(buffer, BufWriter::new(File::create(filepath)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    #[test]
    fn test_write_ppm_emits_header_then_pixels() {
        let mut buffer = PixelBuffer::new(PixelRect::from_size(2, 2).unwrap());
        buffer
            .set_pixel(Point { x: 1, y: 0 }, Colour { r: 9, g: 8, b: 7 })
            .unwrap();
        let mut out = Vec::new();

        write_ppm(&buffer, &mut out).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[0, 0, 0, 9, 8, 7, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_present_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("fatou_explorer_ppm_{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let buffer = PixelBuffer::new(PixelRect::from_size(3, 2).unwrap());

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
