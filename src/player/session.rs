use std::sync::Arc;

use crate::{
    assets::preload::{FrameFetcher, Preloader},
    assets::sequence::{FrameSequence, LoadState},
    foundation::core::{FrameIndex, Progress},
    foundation::error::ScrublineResult,
    parallax::curve::{ParallaxRig, ParallaxState},
    player::config::PlayerConfig,
    render::pipeline::{Phase, RenderPipeline},
    render::surface::Surface,
};

/// What one [`ScrubPlayer::tick`] did.
#[derive(Clone, Debug)]
pub struct TickReport {
    /// Pipeline phase after this tick.
    pub phase: Phase,
    /// Frame drawn during this tick, if any.
    pub drawn: Option<FrameIndex>,
    /// Parallax outputs for the latest progress; the host applies these to
    /// its own compositing layers.
    pub parallax: ParallaxState,
}

/// Session tying preload, progress coalescing, parallax, and drawing
/// together behind one cooperative, single-threaded API.
///
/// Construction spawns the preloader once; the host then forwards progress
/// at its input's native rate via [`ScrubPlayer::on_progress`] and calls
/// [`ScrubPlayer::tick`] once per visual refresh. Each tick drains load
/// settlements, advances the phase machine, performs at most one draw, and
/// evaluates the parallax rig.
pub struct ScrubPlayer {
    sequence: FrameSequence,
    preloader: Preloader,
    pipeline: RenderPipeline,
    rig: ParallaxRig,
    latest: Progress,
}

impl ScrubPlayer {
    /// Validate `config` and start the session; every frame load is issued
    /// here, once.
    pub fn new(config: &PlayerConfig, fetcher: Arc<dyn FrameFetcher>) -> ScrublineResult<Self> {
        config.validate()?;
        let rig = config.rig()?;
        let sequence = FrameSequence::new(config.frame_count)?;
        let preloader = Preloader::spawn(&config.address, config.frame_count, fetcher)?;
        Ok(Self {
            sequence,
            preloader,
            pipeline: RenderPipeline::new(config.surface),
            rig,
            latest: Progress::ZERO,
        })
    }

    /// Feed one normalized progress sample; only the latest survives until
    /// the next tick. Wire this as the callback of a
    /// [`crate::ProgressSource`] subscription.
    pub fn on_progress(&mut self, p: Progress) {
        self.latest = p;
        self.pipeline.set_progress(p);
    }

    /// Feed one raw (unsanitized) progress value.
    pub fn set_progress(&mut self, raw: f64) {
        self.on_progress(Progress::new(raw));
    }

    /// Pump settlements, advance the pipeline, draw at most once, and
    /// evaluate the parallax rig for the latest progress.
    pub fn tick(&mut self) -> TickReport {
        if let Some(state) = self.preloader.drain_into(&mut self.sequence) {
            tracing::debug!(
                loaded = state.loaded,
                failed = state.failed,
                "frame sequence settled"
            );
        }
        self.pipeline.sync_phase(&self.sequence);
        let drawn = self.pipeline.draw_pending(&self.sequence);
        TickReport {
            phase: self.pipeline.phase(),
            drawn,
            parallax: self.rig.evaluate(self.latest),
        }
    }

    /// Block until every frame load settles, then advance the phase machine.
    ///
    /// Intended for tests and offline hosts; interactive hosts should rely
    /// on [`ScrubPlayer::tick`] alone.
    pub fn wait_settled(&mut self) -> ScrublineResult<LoadState> {
        let state = self.preloader.wait_settled(&mut self.sequence)?;
        self.pipeline.sync_phase(&self.sequence);
        Ok(state)
    }

    /// Current pipeline phase.
    pub fn phase(&self) -> Phase {
        self.pipeline.phase()
    }

    /// Current aggregate load counts of the frame sequence.
    pub fn load_state(&self) -> LoadState {
        self.sequence.load_state()
    }

    /// The drawing surface; hosts read the pixels out for compositing.
    pub fn surface(&self) -> &Surface {
        self.pipeline.surface()
    }

    /// Tear down the session. Further progress and ticks are no-ops;
    /// in-flight loads may still complete but their results are never drawn.
    pub fn detach(&mut self) {
        self.pipeline.detach();
    }

    /// True once [`ScrubPlayer::detach`] has run.
    pub fn is_detached(&self) -> bool {
        self.pipeline.is_detached()
    }
}
