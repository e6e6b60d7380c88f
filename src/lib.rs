//! Scrubline is a scroll-synchronized frame-sequence player.
//!
//! It turns a continuous scroll progress signal into scrubbed playback of a
//! pre-rendered image sequence on a CPU drawing surface, together with
//! parallax transforms derived from the same signal.
//!
//! # Pipeline overview
//!
//! 1. **Preload**: [`Preloader`] issues every frame load of a [`FrameSequence`]
//!    concurrently and reports settlements back serialized.
//! 2. **Progress**: [`ProgressSource`] normalizes raw scroll offsets to
//!    [`Progress`] in `[0, 1]` and fans them out to subscribers.
//! 3. **Map**: [`FrameIndex::from_progress`] picks the frame to show;
//!    [`ParallaxRig::evaluate`] derives the parallax record.
//! 4. **Draw**: [`RenderPipeline`] draws exactly one frame per update onto a
//!    [`Surface`], latest progress wins.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic mapping**: frame index and parallax outputs are pure
//!   functions of progress and static configuration.
//! - **Serialized mutation**: load completions run concurrently but are
//!   applied to shared state on a single thread, in arrival order.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod parallax;
mod player;
mod progress;
mod render;

pub use assets::address::FrameAddress;
pub use assets::decode::{PreparedFrame, decode_frame};
pub use assets::preload::{FrameFetcher, FsFetcher, Preloader, normalize_rel_path};
pub use assets::sequence::{FrameSequence, LoadState, SettleEvent, SettleOutcome};
pub use foundation::core::{FrameIndex, Progress, SurfaceSize};
pub use foundation::error::{ScrublineError, ScrublineResult};
pub use parallax::curve::{CurvePoint, CurveSample, ParallaxCurve, ParallaxRig, ParallaxState};
pub use player::config::{CurveSpec, PlayerConfig};
pub use player::session::{ScrubPlayer, TickReport};
pub use progress::source::{ProgressSource, ScrollRegion, SubscriptionId};
pub use render::pipeline::{Phase, RenderPipeline};
pub use render::surface::Surface;
