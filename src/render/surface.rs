use crate::{assets::decode::PreparedFrame, foundation::core::SurfaceSize};

/// Fixed-size drawing surface holding premultiplied RGBA8 pixels.
///
/// The render pipeline is the only writer; hosts read the pixels out for
/// compositing. Draws fully replace the previous contents (clear-then-draw,
/// never compositing over stale pixels).
#[derive(Clone, Debug)]
pub struct Surface {
    size: SurfaceSize,
    pixels: Vec<u8>,
}

impl Surface {
    /// Allocate a transparent-black surface at `size`.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            pixels: vec![0; size.pixel_count() * 4],
        }
    }

    /// The fixed output resolution.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Premultiplied RGBA8, row-major, tightly packed.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Clear, then draw `frame` scaled to cover the full surface.
    ///
    /// Nearest-neighbor sampling; playback is discrete-stepped, so there is
    /// no blending between adjacent frames either. A frame whose pixel
    /// buffer is shorter than its stated dimensions is skipped, leaving the
    /// previous contents in place.
    pub fn draw_frame(&mut self, frame: &PreparedFrame) {
        let src_w = frame.width as usize;
        let src_h = frame.height as usize;
        let src = frame.rgba8_premul.as_slice();
        if src.len() < src_w.saturating_mul(src_h).saturating_mul(4) {
            return;
        }

        self.clear();
        if src_w == 0 || src_h == 0 {
            return;
        }

        let dst_w = self.size.width as usize;
        let dst_h = self.size.height as usize;

        for y in 0..dst_h {
            let sy = y * src_h / dst_h;
            let src_row = sy * src_w * 4;
            let dst_row = y * dst_w * 4;
            for x in 0..dst_w {
                let s = src_row + (x * src_w / dst_w) * 4;
                let d = dst_row + x * 4;
                self.pixels[d..d + 4].copy_from_slice(&src[s..s + 4]);
            }
        }
    }
}
