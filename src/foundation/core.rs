/// Normalized scroll progress in `[0, 1]`.
///
/// Progress is monotonic within its source region but not in time (scroll can
/// reverse). Only the latest value matters; no history is retained anywhere.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// The start of the tracked region.
    pub const ZERO: Self = Self(0.0);
    /// The end of the tracked region.
    pub const ONE: Self = Self(1.0);

    /// Sanitize a raw value at the boundary: NaN maps to 0, everything else
    /// clamps into `[0, 1]`. Invalid input never propagates downstream.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::ZERO;
        }
        Self(raw.clamp(0.0, 1.0))
    }

    /// The sanitized value in `[0, 1]`.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Zero-based position of one frame within a sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

impl FrameIndex {
    /// Map progress onto one frame of an `n`-frame sequence.
    ///
    /// `floor(p * n)` keeps progress 0 on frame 0 and approaches the last
    /// frame without overshoot; the clamp guards the exact `p = 1.0`
    /// boundary, which would otherwise compute `n`. Non-decreasing in `p`.
    pub fn from_progress(p: Progress, frame_count: usize) -> Self {
        debug_assert!(frame_count > 0, "frame_count is validated at construction");
        let raw = (p.value() * frame_count as f64).floor() as usize;
        Self(raw.min(frame_count.saturating_sub(1)))
    }
}

/// Logical output resolution of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Number of pixels covered by this resolution.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}
