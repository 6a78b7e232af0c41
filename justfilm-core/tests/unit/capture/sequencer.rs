use super::*;

use std::time::Instant;

use crate::capture::source::{SourceFrame, TestPatternSource};
use crate::foundation::geometry::SHUTTER_FLASH;

struct FailingSource;

impl FrameSource for FailingSource {
    fn grab(&mut self) -> BoothResult<SourceFrame> {
        Err(BoothError::capture("camera unavailable"))
    }
}

fn run_one_cycle(seq: &mut CaptureSequencer, source: &mut TestPatternSource) -> TickEvent {
    let now = Instant::now();
    for expected in [3u8, 2, 1] {
        assert_eq!(
            seq.tick(now, source).unwrap(),
            TickEvent::Countdown(expected)
        );
        assert_eq!(seq.countdown(), Some(expected - 1));
    }
    seq.tick(now, source).unwrap()
}

#[test]
fn four_cycles_capture_four_photos_in_slot_order() {
    let mut seq = CaptureSequencer::new();
    let mut source = TestPatternSource::new();
    seq.start().unwrap();

    for cycle in 0..PHOTO_COUNT {
        let event = run_one_cycle(&mut seq, &mut source);
        let done = cycle == PHOTO_COUNT - 1;
        assert_eq!(
            event,
            TickEvent::Captured {
                slot: SlotIndex::new(cycle).unwrap(),
                sequence_done: done,
            }
        );
    }

    assert!(seq.is_done());
    assert_eq!(seq.countdown(), None, "countdown hidden after completion");
    assert_eq!(seq.shots().len(), PHOTO_COUNT);
    for (i, shot) in seq.shots().iter().enumerate() {
        assert_eq!(shot.slot(), SlotIndex::new(i).unwrap());
    }
}

#[test]
fn countdown_strictly_decreases_before_every_capture() {
    let mut seq = CaptureSequencer::new();
    let mut source = TestPatternSource::new();
    seq.start().unwrap();

    let now = Instant::now();
    let mut observed = Vec::new();
    loop {
        match seq.tick(now, &mut source).unwrap() {
            TickEvent::Countdown(n) => observed.push(n),
            TickEvent::Captured { sequence_done, .. } => {
                assert_eq!(observed, vec![3, 2, 1], "per-cycle countdown values");
                observed.clear();
                if sequence_done {
                    break;
                }
            }
        }
    }
}

#[test]
fn tick_outside_a_running_sequence_is_loud() {
    let mut seq = CaptureSequencer::new();
    let mut source = TestPatternSource::new();

    // Idle: a timer that was never cancelled.
    assert!(matches!(
        seq.tick(Instant::now(), &mut source),
        Err(BoothError::Sequence(_))
    ));

    seq.start().unwrap();
    while !seq.is_done() {
        seq.tick(Instant::now(), &mut source).unwrap();
    }

    // Done: the schedule should have stopped with the 4th capture.
    assert!(matches!(
        seq.tick(Instant::now(), &mut source),
        Err(BoothError::Sequence(_))
    ));
}

#[test]
fn start_mid_run_is_rejected_and_restart_clears_shots() {
    let mut seq = CaptureSequencer::new();
    let mut source = TestPatternSource::new();

    seq.start().unwrap();
    assert!(seq.start().is_err());

    while !seq.is_done() {
        seq.tick(Instant::now(), &mut source).unwrap();
    }
    assert_eq!(seq.shots().len(), PHOTO_COUNT);

    // A new session from Done starts clean.
    seq.start().unwrap();
    assert!(seq.shots().is_empty());
    assert_eq!(seq.countdown(), Some(COUNTDOWN_START));
}

#[test]
fn reset_returns_to_idle_and_is_idempotent() {
    let mut seq = CaptureSequencer::new();
    let mut source = TestPatternSource::new();

    seq.start().unwrap();
    let now = Instant::now();
    for _ in 0..5 {
        seq.tick(now, &mut source).unwrap();
    }
    assert!(!seq.shots().is_empty());

    seq.reset();
    assert_eq!(seq.state(), SequencerState::Idle);
    assert!(seq.shots().is_empty());

    seq.reset();
    assert_eq!(seq.state(), SequencerState::Idle);
    assert!(seq.shots().is_empty());
}

#[test]
fn failed_grab_aborts_the_sequence() {
    let mut seq = CaptureSequencer::new();
    let mut source = FailingSource;

    seq.start().unwrap();
    let now = Instant::now();
    for _ in 0..3 {
        seq.tick(now, &mut source).unwrap();
    }
    assert!(matches!(
        seq.tick(now, &mut source),
        Err(BoothError::Capture(_))
    ));
    assert_eq!(seq.state(), SequencerState::Idle);
    assert!(seq.shots().is_empty());
}

#[test]
fn shutter_cue_fires_on_capture() {
    let mut seq = CaptureSequencer::new();
    let mut source = TestPatternSource::new();
    seq.start().unwrap();

    let now = Instant::now();
    for _ in 0..3 {
        seq.tick(now, &mut source).unwrap();
        assert!(!seq.shutter_active(now));
    }
    seq.tick(now, &mut source).unwrap();
    assert!(seq.shutter_active(now));
    assert!(!seq.shutter_active(now + SHUTTER_FLASH));
    assert_eq!(seq.shots()[0].captured_at(), now);
}
