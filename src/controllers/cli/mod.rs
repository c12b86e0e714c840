pub mod render_image;
