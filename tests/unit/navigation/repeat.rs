use super::*;

fn step_frames(rep: &mut AutoRepeat, axis: i32, frames: usize) -> Vec<usize> {
    let cfg = CursorConfig::default();
    let mut hits = Vec::new();
    for frame in 1..=frames {
        let steps = rep.step(axis, &cfg);
        assert!(steps.abs() <= 1);
        if steps != 0 {
            hits.push(frame);
        }
    }
    hits
}

#[test]
fn held_direction_repeats_after_delay_then_faster() {
    let mut rep = AutoRepeat::default();
    let hits = step_frames(&mut rep, 1, 48);
    assert_eq!(hits, [1, 26, 33, 40, 47]);
}

#[test]
fn release_resets_without_stepping() {
    let cfg = CursorConfig::default();
    let mut rep = AutoRepeat::default();
    assert_eq!(rep.step(-1, &cfg), -1);
    assert_eq!(rep.step(-1, &cfg), 0);
    assert_eq!(rep.step(0, &cfg), 0);
    assert_eq!(rep.timer(), 0);
    assert_eq!(rep.step(-1, &cfg), -1);
}

#[test]
fn reversing_direction_steps_immediately() {
    let cfg = CursorConfig::default();
    let mut rep = AutoRepeat::default();
    assert_eq!(rep.step(1, &cfg), 1);
    assert_eq!(rep.step(1, &cfg), 0);
    assert_eq!(rep.step(-1, &cfg), -1);
}

#[test]
fn analog_magnitude_steps_one_at_a_time() {
    let cfg = CursorConfig::default();
    let mut rep = AutoRepeat::default();
    assert_eq!(rep.step(100, &cfg), 1);
    assert_eq!(rep.step(-75, &cfg), -1);
}
