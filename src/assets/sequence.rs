use crate::{
    assets::decode::PreparedFrame,
    foundation::core::FrameIndex,
    foundation::error::{ScrublineError, ScrublineResult},
};

/// Final outcome of one frame load.
#[derive(Clone, Debug)]
pub enum SettleOutcome {
    /// The frame fetched and decoded successfully.
    Loaded(PreparedFrame),
    /// The load failed, with a human-readable reason.
    Failed(String),
}

/// One settlement notification from the preloader.
///
/// Settlement order between frames is unspecified; any frame may settle
/// before or after any other.
#[derive(Clone, Debug)]
pub struct SettleEvent {
    /// Sequence index of the frame that settled.
    pub index: usize,
    /// Final outcome of that frame's load.
    pub outcome: SettleOutcome,
}

#[derive(Clone, Debug)]
enum FrameSlot {
    Pending,
    Loaded(PreparedFrame),
    Failed,
}

/// Aggregate load counts over a [`FrameSequence`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadState {
    /// Frames that loaded successfully.
    pub loaded: usize,
    /// Frames whose load failed.
    pub failed: usize,
    /// Frames still awaiting an outcome.
    pub pending: usize,
}

impl LoadState {
    /// True once every slot has a final outcome, successful or not.
    pub fn settled(self) -> bool {
        self.pending == 0
    }

    /// True only for the strict all-loaded case; a single failure keeps the
    /// sequence unusable for scrubbing. No retries, no reduced-set fallback.
    pub fn ready_for_drawing(self) -> bool {
        self.pending == 0 && self.failed == 0
    }
}

/// Fixed-length ordered frame sequence with per-slot load lifecycle.
///
/// Slots are contiguous `0..frame_count` in display order and each moves
/// `Pending -> Loaded | Failed` at most once. The settlement tally is owned
/// instance state; concurrent sequences never share counters.
pub struct FrameSequence {
    slots: Vec<FrameSlot>,
    loaded: usize,
    failed: usize,
    settle_fired: bool,
}

impl FrameSequence {
    /// Build an all-pending sequence of `frame_count` slots.
    pub fn new(frame_count: usize) -> ScrublineResult<Self> {
        if frame_count == 0 {
            return Err(ScrublineError::validation("frame_count must be >= 1"));
        }
        Ok(Self {
            slots: vec![FrameSlot::Pending; frame_count],
            loaded: 0,
            failed: 0,
            settle_fired: false,
        })
    }

    /// Number of slots (`N`).
    pub fn frame_count(&self) -> usize {
        self.slots.len()
    }

    /// Current aggregate load counts.
    pub fn load_state(&self) -> LoadState {
        LoadState {
            loaded: self.loaded,
            failed: self.failed,
            pending: self.slots.len() - self.loaded - self.failed,
        }
    }

    /// Record one settlement.
    ///
    /// The first outcome per slot wins; duplicate or out-of-range events are
    /// ignored. Returns the aggregate state exactly once, on the settlement
    /// that resolves the last pending slot, regardless of arrival order.
    pub fn apply(&mut self, event: SettleEvent) -> Option<LoadState> {
        let Some(slot) = self.slots.get_mut(event.index) else {
            return None;
        };
        if !matches!(slot, FrameSlot::Pending) {
            return None;
        }

        match event.outcome {
            SettleOutcome::Loaded(frame) => {
                *slot = FrameSlot::Loaded(frame);
                self.loaded += 1;
            }
            SettleOutcome::Failed(reason) => {
                tracing::warn!(index = event.index, %reason, "frame load failed");
                *slot = FrameSlot::Failed;
                self.failed += 1;
            }
        }

        if !self.settle_fired && self.loaded + self.failed == self.slots.len() {
            self.settle_fired = true;
            return Some(self.load_state());
        }
        None
    }

    /// True once the one-shot settlement has fired.
    pub fn is_settled(&self) -> bool {
        self.settle_fired
    }

    /// True only when every slot settled and none failed; see
    /// [`LoadState::ready_for_drawing`].
    pub fn ready_for_drawing(&self) -> bool {
        self.settle_fired && self.failed == 0
    }

    /// Frame pixels for `index`, if that slot has loaded.
    pub fn frame(&self, index: FrameIndex) -> Option<&PreparedFrame> {
        match self.slots.get(index.0) {
            Some(FrameSlot::Loaded(frame)) => Some(frame),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sequence.rs"]
mod tests;
