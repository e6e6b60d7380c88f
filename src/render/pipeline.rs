use crate::{
    assets::sequence::FrameSequence,
    foundation::core::{FrameIndex, Progress, SurfaceSize},
    render::surface::Surface,
};

/// Observable lifecycle of the pipeline's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing drawn yet.
    Idle,
    /// Frame 0 drawn once as a static first paint; scrubbing not yet live.
    FirstPainted,
    /// Sequence fully settled with no failures; scrubbing live.
    Ready,
}

/// Draws exactly one frame per visual update; the latest progress wins.
///
/// Progress notifications overwrite a single pending cell, so a burst of
/// updates between two [`RenderPipeline::draw_pending`] calls costs one draw
/// and stale frames are discarded rather than queued. Draws are idempotent
/// for the same progress and asset set.
pub struct RenderPipeline {
    surface: Surface,
    phase: Phase,
    pending: Option<Progress>,
    last_drawn: Option<FrameIndex>,
    detached: bool,
}

impl RenderPipeline {
    /// Build an idle pipeline with a fresh surface at `size`.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            surface: Surface::new(size),
            phase: Phase::Idle,
            pending: None,
            last_drawn: None,
            detached: false,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The output surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Index of the frame currently on the surface, if any.
    pub fn last_drawn(&self) -> Option<FrameIndex> {
        self.last_drawn
    }

    /// True once [`RenderPipeline::detach`] has run.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Record the most recent progress. Superseded values are discarded
    /// undrawn; the value is held until scrubbing goes live.
    pub fn set_progress(&mut self, p: Progress) {
        if self.detached {
            return;
        }
        self.pending = Some(p);
    }

    /// Advance the phase machine against the sequence's current load state.
    ///
    /// The first paint of frame 0 happens at most once, as soon as that slot
    /// is loaded and before settlement; `Ready` requires settlement with
    /// zero failures. Transitions only ever move forward.
    pub fn sync_phase(&mut self, seq: &FrameSequence) {
        if self.detached {
            return;
        }

        if self.phase == Phase::Idle
            && let Some(frame) = seq.frame(FrameIndex(0))
        {
            self.surface.draw_frame(frame);
            self.last_drawn = Some(FrameIndex(0));
            self.phase = Phase::FirstPainted;
            tracing::debug!("first paint of frame 0");
        }

        if self.phase == Phase::FirstPainted && seq.ready_for_drawing() {
            self.phase = Phase::Ready;
            tracing::debug!("pipeline ready for scrubbing");
        }
    }

    /// Draw the mapped frame for the latest pending progress.
    ///
    /// Returns the index drawn by this call, if any. Draws are skipped, not
    /// errored, while the pipeline is not `Ready`, after detach, or when the
    /// target slot never loaded; in every skip case the surface keeps its
    /// last good contents.
    pub fn draw_pending(&mut self, seq: &FrameSequence) -> Option<FrameIndex> {
        if self.detached || self.phase != Phase::Ready {
            return None;
        }
        let p = self.pending.take()?;
        let index = FrameIndex::from_progress(p, seq.frame_count());
        let frame = seq.frame(index)?;
        self.surface.draw_frame(frame);
        self.last_drawn = Some(index);
        Some(index)
    }

    /// Tear down the output. Subsequent progress updates, phase syncs, and
    /// draws are all no-ops against the torn-down surface.
    pub fn detach(&mut self) {
        self.detached = true;
        self.pending = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
