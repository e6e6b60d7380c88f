use crate::foundation::error::{ScrublineError, ScrublineResult};

/// Deterministic address rule for the frames of a sequence.
///
/// Frame `i` resolves to `"{base}/frame_{i:0pad$}_{suffix}"`, e.g.
/// `hero-sequence/frame_007_delay-0.04s.png`. The frame count and suffix are
/// configuration, not protocol.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameAddress {
    /// Directory or URI prefix, without trailing slash.
    pub base: String,
    /// Trailing part after the zero-padded sequence number.
    pub suffix: String,
    /// Zero-pad width of the sequence number.
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
}

fn default_pad_width() -> usize {
    3
}

impl FrameAddress {
    /// Build an address rule with the default pad width of 3.
    pub fn new(base: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            suffix: suffix.into(),
            pad_width: default_pad_width(),
        }
    }

    /// Resolve the URI of frame `index`.
    pub fn uri_for(&self, index: usize) -> String {
        format!(
            "{}/frame_{:0w$}_{}",
            self.base,
            index,
            self.suffix,
            w = self.pad_width
        )
    }

    /// Check that both address parts are non-empty.
    pub fn validate(&self) -> ScrublineResult<()> {
        if self.base.is_empty() {
            return Err(ScrublineError::validation("address base must be non-empty"));
        }
        if self.suffix.is_empty() {
            return Err(ScrublineError::validation(
                "address suffix must be non-empty",
            ));
        }
        Ok(())
    }
}
