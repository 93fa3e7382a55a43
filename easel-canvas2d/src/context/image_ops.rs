//! Image drawing, pixel data and encoding operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::geometry::CanvasImageDataRef;
use image::codecs::jpeg::JpegEncoder;

impl Canvas2dContext {
    /// Draw non-premultiplied RGBA image data scaled into the destination rectangle.
    pub fn draw_image_data_scaled(
        &mut self,
        image: &CanvasImageDataRef<'_>,
        dx: f32,
        dy: f32,
        dw: f32,
        dh: f32,
    ) {
        log::debug!(target: "canvas", "drawImage {}x{} -> {} {} {} {}", image.width, image.height, dx, dy, dw, dh);
        if dw == 0.0 || dh == 0.0 {
            return;
        }
        let Some(source) = premultiplied_pixmap(image) else {
            return;
        };

        let paint = tiny_skia::PixmapPaint {
            opacity: self.state.global_alpha,
            blend_mode: self.state.global_composite_operation,
            quality: tiny_skia::FilterQuality::Bilinear,
        };

        let scale_x = dw / image.width as f32;
        let scale_y = dh / image.height as f32;
        let transform = self
            .state
            .transform
            .pre_translate(dx, dy)
            .pre_scale(scale_x, scale_y);

        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
    }

    /// Get non-premultiplied RGBA data for a region of the canvas.
    ///
    /// Pixels outside the canvas read as transparent black.
    pub fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
        let src = self.pixmap.data();

        for dy in 0..height {
            let src_y = y + dy as i32;
            if src_y < 0 || src_y >= self.height as i32 {
                continue;
            }
            for dx in 0..width {
                let src_x = x + dx as i32;
                if src_x < 0 || src_x >= self.width as i32 {
                    continue;
                }

                let src_idx = (src_y as usize * self.width as usize + src_x as usize) * 4;
                let dst_idx = (dy as usize * width as usize + dx as usize) * 4;
                let pixel = &src[src_idx..src_idx + 4];

                // Convert from premultiplied alpha to straight alpha
                let a = pixel[3];
                match a {
                    0 => {}
                    255 => data[dst_idx..dst_idx + 4].copy_from_slice(pixel),
                    _ => {
                        let alpha_f = a as f32 / 255.0;
                        data[dst_idx] = (pixel[0] as f32 / alpha_f).round().min(255.0) as u8;
                        data[dst_idx + 1] = (pixel[1] as f32 / alpha_f).round().min(255.0) as u8;
                        data[dst_idx + 2] = (pixel[2] as f32 / alpha_f).round().min(255.0) as u8;
                        data[dst_idx + 3] = a;
                    }
                }
            }
        }

        data
    }

    /// Write non-premultiplied RGBA data to the canvas at (dx, dy).
    ///
    /// This bypasses compositing and the current transform. Pixels outside
    /// the canvas are silently ignored.
    pub fn put_image_data(&mut self, data: &[u8], width: u32, height: u32, dx: i32, dy: i32) {
        log::debug!(target: "canvas", "putImageData {}x{} at {} {}", width, height, dx, dy);
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() < expected {
            log::warn!(
                "putImageData ignored: {} bytes supplied for a {}x{} region",
                data.len(),
                width,
                height
            );
            return;
        }

        let canvas_width = self.width as i32;
        let canvas_height = self.height as i32;
        let pixmap_data = self.pixmap.data_mut();

        for sy in 0..height as i32 {
            let dst_row = dy + sy;
            if dst_row < 0 || dst_row >= canvas_height {
                continue;
            }
            for sx in 0..width as i32 {
                let dst_col = dx + sx;
                if dst_col < 0 || dst_col >= canvas_width {
                    continue;
                }

                let src_idx = (sy as usize * width as usize + sx as usize) * 4;
                let dst_idx = (dst_row as usize * canvas_width as usize + dst_col as usize) * 4;
                let [pr, pg, pb, a] = premultiply(&data[src_idx..src_idx + 4]);
                pixmap_data[dst_idx] = pr;
                pixmap_data[dst_idx + 1] = pg;
                pixmap_data[dst_idx + 2] = pb;
                pixmap_data[dst_idx + 3] = a;
            }
        }
    }

    /// Export the canvas as PNG data.
    pub fn to_png(&self) -> Canvas2dResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;

            // Convert from premultiplied to straight alpha for PNG
            let data = self.get_image_data(0, 0, self.width, self.height);
            writer.write_image_data(&data)?;
        }
        Ok(buf)
    }

    /// Export the canvas as JPEG data with `quality` in 1..=100.
    ///
    /// JPEG has no alpha channel; pixels are composited over black, which is
    /// exactly the premultiplied color.
    pub fn to_jpeg(&self, quality: u8) -> Canvas2dResult<Vec<u8>> {
        if !(1..=100).contains(&quality) {
            return Err(Canvas2dError::InvalidArgument(format!(
                "JPEG quality must be in 1..=100, got {}",
                quality
            )));
        }
        let rgb: Vec<u8> = self
            .pixmap
            .data()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();

        let mut buf = Vec::new();
        JpegEncoder::new_with_quality(&mut buf, quality).encode(
            &rgb,
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )?;
        Ok(buf)
    }
}

fn premultiply(px: &[u8]) -> [u8; 4] {
    let a = px[3];
    match a {
        255 => [px[0], px[1], px[2], 255],
        0 => [0, 0, 0, 0],
        _ => {
            // (color * alpha + 127) / 255 for proper rounding
            let a16 = a as u16;
            [
                ((px[0] as u16 * a16 + 127) / 255) as u8,
                ((px[1] as u16 * a16 + 127) / 255) as u8,
                ((px[2] as u16 * a16 + 127) / 255) as u8,
                a,
            ]
        }
    }
}

fn premultiplied_pixmap(image: &CanvasImageDataRef<'_>) -> Option<tiny_skia::Pixmap> {
    let expected = (image.width as usize) * (image.height as usize) * 4;
    if image.data.len() < expected {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(image.width, image.height)?;
    for (dst, src) in pixmap
        .data_mut()
        .chunks_exact_mut(4)
        .zip(image.data.chunks_exact(4))
    {
        dst.copy_from_slice(&premultiply(src));
    }
    Some(pixmap)
}
