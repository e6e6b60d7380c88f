use std::sync::Arc;

use super::*;
use crate::assets::{
    decode::PreparedFrame,
    sequence::{SettleEvent, SettleOutcome},
};

fn size() -> SurfaceSize {
    SurfaceSize {
        width: 2,
        height: 2,
    }
}

fn settle_loaded(seq: &mut FrameSequence, index: usize) {
    seq.apply(SettleEvent {
        index,
        outcome: SettleOutcome::Loaded(PreparedFrame {
            width: 1,
            height: 1,
            rgba8_premul: Arc::new(vec![index as u8 + 1, 0, 0, 255]),
        }),
    });
}

fn settle_failed(seq: &mut FrameSequence, index: usize) {
    seq.apply(SettleEvent {
        index,
        outcome: SettleOutcome::Failed("synthetic failure".to_string()),
    });
}

fn settled_sequence(n: usize) -> FrameSequence {
    let mut seq = FrameSequence::new(n).unwrap();
    for i in 0..n {
        settle_loaded(&mut seq, i);
    }
    seq
}

#[test]
fn holds_draws_until_ready() {
    let mut seq = FrameSequence::new(4).unwrap();
    let mut pipeline = RenderPipeline::new(size());

    pipeline.set_progress(Progress::new(0.9));
    assert_eq!(pipeline.draw_pending(&seq), None);
    assert_eq!(pipeline.phase(), Phase::Idle);

    for i in 0..4 {
        settle_loaded(&mut seq, i);
    }
    pipeline.sync_phase(&seq);
    assert_eq!(pipeline.phase(), Phase::Ready);

    // The progress recorded before readiness is honored now.
    assert_eq!(pipeline.draw_pending(&seq), Some(FrameIndex(3)));
}

#[test]
fn first_paint_happens_once_before_settlement() {
    let mut seq = FrameSequence::new(3).unwrap();
    let mut pipeline = RenderPipeline::new(size());

    settle_loaded(&mut seq, 0);
    pipeline.sync_phase(&seq);
    assert_eq!(pipeline.phase(), Phase::FirstPainted);
    assert_eq!(pipeline.last_drawn(), Some(FrameIndex(0)));
    let first_paint = pipeline.surface().pixels().to_vec();

    // Repeated syncs before settlement neither repaint nor advance.
    pipeline.sync_phase(&seq);
    assert_eq!(pipeline.phase(), Phase::FirstPainted);
    assert_eq!(pipeline.surface().pixels(), first_paint.as_slice());

    settle_loaded(&mut seq, 1);
    settle_loaded(&mut seq, 2);
    pipeline.sync_phase(&seq);
    assert_eq!(pipeline.phase(), Phase::Ready);
}

#[test]
fn latest_progress_wins_over_a_burst() {
    let seq = settled_sequence(10);
    let mut pipeline = RenderPipeline::new(size());
    pipeline.sync_phase(&seq);

    pipeline.set_progress(Progress::new(0.1));
    pipeline.set_progress(Progress::new(0.5));
    pipeline.set_progress(Progress::new(0.95));

    assert_eq!(pipeline.draw_pending(&seq), Some(FrameIndex(9)));
    // The burst collapsed to one draw; nothing is queued behind it.
    assert_eq!(pipeline.draw_pending(&seq), None);
}

#[test]
fn draws_are_idempotent_for_the_same_progress() {
    let seq = settled_sequence(4);
    let mut pipeline = RenderPipeline::new(size());
    pipeline.sync_phase(&seq);

    pipeline.set_progress(Progress::new(0.6));
    pipeline.draw_pending(&seq);
    let once = pipeline.surface().pixels().to_vec();

    pipeline.set_progress(Progress::new(0.6));
    pipeline.draw_pending(&seq);
    assert_eq!(pipeline.surface().pixels(), once.as_slice());
}

#[test]
fn failed_sequence_suppresses_scrubbing() {
    let mut seq = FrameSequence::new(3).unwrap();
    settle_loaded(&mut seq, 0);
    settle_failed(&mut seq, 1);
    settle_loaded(&mut seq, 2);

    let mut pipeline = RenderPipeline::new(size());
    pipeline.sync_phase(&seq);
    // Settled with a failure: first paint happened, Ready never does.
    assert_eq!(pipeline.phase(), Phase::FirstPainted);

    pipeline.set_progress(Progress::ONE);
    assert_eq!(pipeline.draw_pending(&seq), None);
    assert_eq!(pipeline.last_drawn(), Some(FrameIndex(0)));
}

#[test]
fn detach_makes_everything_a_noop() {
    let seq = settled_sequence(2);
    let mut pipeline = RenderPipeline::new(size());
    pipeline.sync_phase(&seq);
    pipeline.set_progress(Progress::ONE);
    pipeline.draw_pending(&seq);
    let before = pipeline.surface().pixels().to_vec();

    pipeline.detach();
    assert!(pipeline.is_detached());
    pipeline.set_progress(Progress::ZERO);
    pipeline.sync_phase(&seq);
    assert_eq!(pipeline.draw_pending(&seq), None);
    assert_eq!(pipeline.surface().pixels(), before.as_slice());
}
