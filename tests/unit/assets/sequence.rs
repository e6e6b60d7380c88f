use std::sync::Arc;

use super::*;

fn loaded(index: usize) -> SettleEvent {
    SettleEvent {
        index,
        outcome: SettleOutcome::Loaded(PreparedFrame {
            width: 1,
            height: 1,
            rgba8_premul: Arc::new(vec![index as u8, 0, 0, 255]),
        }),
    }
}

fn failed(index: usize) -> SettleEvent {
    SettleEvent {
        index,
        outcome: SettleOutcome::Failed("synthetic failure".to_string()),
    }
}

#[test]
fn settlement_fires_once_regardless_of_order() {
    let orders: [[usize; 4]; 3] = [[0, 1, 2, 3], [3, 2, 1, 0], [2, 0, 3, 1]];
    for order in orders {
        let mut seq = FrameSequence::new(4).unwrap();
        let mut fired = 0;
        for (n, index) in order.into_iter().enumerate() {
            let out = seq.apply(loaded(index));
            if n + 1 < order.len() {
                assert!(out.is_none());
            } else {
                let state = out.expect("last settlement must fire");
                assert_eq!(
                    state,
                    LoadState {
                        loaded: 4,
                        failed: 0,
                        pending: 0
                    }
                );
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(seq.is_settled());
        assert!(seq.ready_for_drawing());
    }
}

#[test]
fn duplicate_settlements_are_ignored() {
    let mut seq = FrameSequence::new(2).unwrap();
    assert!(seq.apply(loaded(0)).is_none());
    // A second outcome for slot 0 must not count toward settlement.
    assert!(seq.apply(failed(0)).is_none());
    assert_eq!(
        seq.load_state(),
        LoadState {
            loaded: 1,
            failed: 0,
            pending: 1
        }
    );
    assert!(seq.apply(loaded(1)).is_some());
    assert!(seq.frame(FrameIndex(0)).is_some());
}

#[test]
fn out_of_range_settlements_are_ignored() {
    let mut seq = FrameSequence::new(1).unwrap();
    assert!(seq.apply(loaded(5)).is_none());
    assert_eq!(seq.load_state().pending, 1);
}

#[test]
fn one_failure_settles_but_never_becomes_ready() {
    let mut seq = FrameSequence::new(3).unwrap();
    assert!(seq.apply(loaded(0)).is_none());
    assert!(seq.apply(failed(1)).is_none());
    let state = seq.apply(loaded(2)).expect("settles with failures present");
    assert_eq!(
        state,
        LoadState {
            loaded: 2,
            failed: 1,
            pending: 0
        }
    );
    assert!(state.settled());
    assert!(!state.ready_for_drawing());
    assert!(seq.is_settled());
    assert!(!seq.ready_for_drawing());
    assert!(seq.frame(FrameIndex(1)).is_none());
    assert!(seq.frame(FrameIndex(2)).is_some());
}

#[test]
fn zero_length_sequences_are_rejected() {
    assert!(FrameSequence::new(0).is_err());
}
