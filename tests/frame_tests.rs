// Host-side tests for the frame loop stop flag.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod gate {
    include!("../src/core/gate.rs");
}

use gate::*;
use std::cell::Cell;

#[test]
fn running_gate_runs_frame_and_reschedules() {
    let gate = StopGate::new();
    let frames = Cell::new(0);
    for _ in 0..3 {
        assert!(gate.run_frame(|| frames.set(frames.get() + 1)));
    }
    assert_eq!(frames.get(), 3);
}

#[test]
fn stopped_gate_skips_frame_and_reschedule() {
    let gate = StopGate::new();
    gate.stop();
    let ran = Cell::new(false);
    assert!(!gate.run_frame(|| ran.set(true)));
    assert!(!ran.get());
}

#[test]
fn stop_raised_during_frame_blocks_reschedule() {
    let gate = StopGate::new();
    let owner = gate.clone();
    // Teardown triggered from inside the frame body
    assert!(!gate.run_frame(|| owner.stop()));
    assert!(gate.is_stopped());
    assert!(!gate.run_frame(|| panic!("frame ran after stop")));
}

#[test]
fn clones_share_one_flag() {
    let gate = StopGate::new();
    let tick_side = gate.clone();
    assert!(!tick_side.is_stopped());
    gate.stop();
    assert!(tick_side.is_stopped());
}
