use crate::{
    foundation::core::Progress,
    foundation::error::{ScrublineError, ScrublineResult},
};

/// Raw scroll extent that maps onto `[0, 1]` progress.
///
/// `start` and `end` are offsets in the host's own units (typically pixels
/// of scroll within the tracked region). Offsets outside the region clamp to
/// the nearest boundary, so elastic overscroll never produces out-of-range
/// progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRegion {
    /// Offset mapping to progress 0.
    pub start: f64,
    /// Offset mapping to progress 1.
    pub end: f64,
}

impl ScrollRegion {
    /// Build a region; bounds must be finite with `start < end`.
    pub fn new(start: f64, end: f64) -> ScrublineResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrublineError::validation(
                "scroll region bounds must be finite",
            ));
        }
        if start >= end {
            return Err(ScrublineError::validation(
                "scroll region start must be < end",
            ));
        }
        Ok(Self { start, end })
    }

    /// Normalize a raw offset into the region. NaN and overshoot are
    /// sanitized here and never propagate downstream.
    pub fn progress_for_offset(&self, raw_offset: f64) -> Progress {
        Progress::new((raw_offset - self.start) / (self.end - self.start))
    }
}

/// Identifier handed out by [`ProgressSource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Fan-out hub turning raw scroll offsets into progress notifications.
///
/// Subscribers are plain callbacks with an explicit subscribe/unsubscribe
/// contract; there is no implicit re-render graph. Notifications fire on
/// every offset update at the input's native rate, with no debouncing at
/// this layer. After [`ProgressSource::detach`] the hook into the external
/// signal is released: offset changes are silently dropped and every
/// subscriber is gone.
pub struct ProgressSource {
    region: ScrollRegion,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(Progress)>)>,
    next_id: u64,
    detached: bool,
}

impl ProgressSource {
    /// Build a source for `region` with no subscribers yet.
    pub fn new(region: ScrollRegion) -> Self {
        Self {
            region,
            subscribers: Vec::new(),
            next_id: 0,
            detached: false,
        }
    }

    /// The tracked scroll region.
    pub fn region(&self) -> ScrollRegion {
        self.region
    }

    /// Register a callback for every future progress notification.
    pub fn subscribe(&mut self, callback: impl FnMut(Progress) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove one subscriber. Returns whether it was still registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Normalize one raw offset and notify every live subscriber, in
    /// subscription order. No-op once detached.
    pub fn offset_changed(&mut self, raw_offset: f64) {
        if self.detached {
            return;
        }
        let p = self.region.progress_for_offset(raw_offset);
        for (_, callback) in &mut self.subscribers {
            callback(p);
        }
    }

    /// Drop every subscriber and stop reacting to offset changes.
    pub fn detach(&mut self) {
        self.detached = true;
        self.subscribers.clear();
    }

    /// True once [`ProgressSource::detach`] has run.
    pub fn is_detached(&self) -> bool {
        self.detached
    }
}
