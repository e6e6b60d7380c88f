use std::{
    path::{Path, PathBuf},
    sync::{Arc, mpsc},
};

use anyhow::Context;

use crate::{
    assets::address::FrameAddress,
    assets::decode,
    assets::sequence::{FrameSequence, LoadState, SettleEvent, SettleOutcome},
    foundation::error::{ScrublineError, ScrublineResult},
};

/// Source of raw frame bytes, keyed by sequence index and resolved URI.
///
/// This is the seam between the preloader and the outside world: hosts plug
/// in filesystem or network fetchers, tests plug in synthetic ones.
pub trait FrameFetcher: Send + Sync {
    /// Fetch the raw encoded bytes of frame `index` at `uri`.
    fn fetch(&self, index: usize, uri: &str) -> ScrublineResult<Vec<u8>>;
}

/// Filesystem-backed fetcher resolving frame URIs relative to a root directory.
#[derive(Clone, Debug)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    /// Build a fetcher rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FrameFetcher for FsFetcher {
    fn fetch(&self, _index: usize, uri: &str) -> ScrublineResult<Vec<u8>> {
        let rel = normalize_rel_path(uri)?;
        let path = self.root.join(Path::new(&rel));
        std::fs::read(&path)
            .with_context(|| format!("read frame bytes from '{}'", path.display()))
            .map_err(ScrublineError::from)
    }
}

/// Normalize and validate sequence-relative frame paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and
/// rejects absolute paths or parent traversals (`..`).
pub fn normalize_rel_path(uri: &str) -> ScrublineResult<String> {
    let s = uri.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ScrublineError::validation("frame paths must be relative"));
    }
    if s.is_empty() {
        return Err(ScrublineError::validation("frame path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ScrublineError::validation(
                "frame paths must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ScrublineError::validation(
            "frame path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

/// Issues every frame load of a sequence concurrently, once, at startup.
///
/// Each of the N loads runs on the rayon pool, suspends independently, and
/// settles exactly once with [`SettleOutcome::Loaded`] or
/// [`SettleOutcome::Failed`]. Settlements cross back over a channel and are
/// applied serialized on the caller's thread, so no locks guard the sequence.
/// No retries and no timeouts: a fetch that never returns keeps the sequence
/// from ever settling.
///
/// Dropping the preloader lets in-flight loads complete; their results are
/// discarded, not errored.
pub struct Preloader {
    rx: mpsc::Receiver<SettleEvent>,
}

impl Preloader {
    /// Validate the inputs and issue one load per frame on the rayon pool.
    #[tracing::instrument(skip(fetcher))]
    pub fn spawn(
        address: &FrameAddress,
        frame_count: usize,
        fetcher: Arc<dyn FrameFetcher>,
    ) -> ScrublineResult<Self> {
        address.validate()?;
        if frame_count == 0 {
            return Err(ScrublineError::validation("frame_count must be >= 1"));
        }

        let (tx, rx) = mpsc::channel();
        for index in 0..frame_count {
            let uri = address.uri_for(index);
            let fetcher = Arc::clone(&fetcher);
            let tx = tx.clone();
            rayon::spawn(move || {
                let outcome = match fetcher
                    .fetch(index, &uri)
                    .and_then(|bytes| decode::decode_frame(&bytes))
                {
                    Ok(frame) => SettleOutcome::Loaded(frame),
                    Err(e) => SettleOutcome::Failed(e.to_string()),
                };
                // The receiver may be gone if the player detached mid-load;
                // that result is simply discarded.
                let _ = tx.send(SettleEvent { index, outcome });
            });
        }

        Ok(Self { rx })
    }

    /// Apply every settlement that has arrived so far.
    ///
    /// Returns the aggregate state if the sequence fully settled during this
    /// drain, mirroring the one-shot contract of [`FrameSequence::apply`].
    pub fn drain_into(&self, seq: &mut FrameSequence) -> Option<LoadState> {
        let mut settled = None;
        while let Ok(event) = self.rx.try_recv() {
            if let Some(state) = seq.apply(event) {
                settled = Some(state);
            }
        }
        settled
    }

    /// Block until the sequence settles, applying events as they arrive.
    ///
    /// Intended for offline hosts and tests; interactive hosts should pump
    /// [`Preloader::drain_into`] from their refresh loop instead.
    pub fn wait_settled(&self, seq: &mut FrameSequence) -> ScrublineResult<LoadState> {
        if seq.is_settled() {
            return Ok(seq.load_state());
        }
        loop {
            let event = self.rx.recv().map_err(|_| {
                ScrublineError::asset("preload workers disconnected before the sequence settled")
            })?;
            if let Some(state) = seq.apply(event) {
                return Ok(state);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/preload.rs"]
mod tests;
