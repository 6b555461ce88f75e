//! End-to-end scenarios: boot, ON, OFF, unknown input, resume.

use siren::app::alarm::AlarmState;

use super::mock_hw::{Call, Rig};

#[test]
fn boot_outputs_are_idle() {
    let rig = Rig::boot();
    assert_eq!(
        rig.t.calls_since(0),
        vec![Call::NoTone, Call::Green(true), Call::Red(false), Call::Amber(false)]
    );
    assert_eq!(rig.app.alarm(), AlarmState::Idle);
}

#[test]
fn on_turns_red_blinks_amber_and_starts_sweep_at_800() {
    let mut rig = Rig::boot();
    let mark = rig.t.len();

    rig.send("ON");

    assert_eq!(
        rig.t.since(mark),
        vec![
            (0, Call::Red(true)),
            (0, Call::Green(false)),
            (0, Call::Amber(true)),
            (0, Call::DelayMs(500)),
            (500, Call::Amber(false)),
            (500, Call::DelayMs(500)),
            (1000, Call::Tone(800)),
        ]
    );
    assert_eq!(rig.app.alarm(), AlarmState::Active);
    assert!(rig.t.red() && !rig.t.green() && !rig.t.amber());
}

#[test]
fn off_silences_immediately_and_restores_green() {
    let mut rig = Rig::boot();
    rig.send("ON");
    rig.step_after(20);
    assert_eq!(rig.t.tone(), Some(840));

    let mark = rig.t.len();
    rig.send("OFF");

    let calls = rig.t.calls_since(mark);
    assert_eq!(calls[0], Call::NoTone, "tone must be cut before anything else");
    assert_eq!(calls[1], Call::Red(false));
    assert_eq!(calls[2], Call::Green(true));
    assert_eq!(rig.blinks_since(mark), 1);
    assert_eq!(rig.t.tone(), None);
    assert!(!rig.t.red() && rig.t.green());
    assert_eq!(rig.app.alarm(), AlarmState::Idle);
}

#[test]
fn unknown_while_idle_only_blinks() {
    let mut rig = Rig::boot();
    let mark = rig.t.len();

    rig.send("foo");

    let calls = rig.t.calls_since(mark);
    assert!(
        !calls
            .iter()
            .any(|c| matches!(c, Call::Red(_) | Call::Green(_) | Call::Tone(_))),
        "unexpected output change: {calls:?}"
    );
    assert_eq!(rig.blinks_since(mark), 1);
    assert_eq!(rig.t.tone(), None);
    assert!(rig.t.green() && !rig.t.red());
    assert_eq!(rig.app.alarm(), AlarmState::Idle);
}

#[test]
fn unknown_while_active_keeps_sweeping() {
    let mut rig = Rig::boot();
    rig.send("ON");
    let mark = rig.t.len();

    rig.send("on");

    assert_eq!(rig.app.alarm(), AlarmState::Active);
    assert_eq!(rig.blinks_since(mark), 1);
    // Ack blocked for 1000 ms, so the sweep steps right after it.
    assert_eq!(rig.tones_since(mark), vec![840]);
}

#[test]
fn on_twice_matches_on_once_without_resetting_sweep() {
    let mut rig = Rig::boot();
    rig.send("ON");
    rig.step_after(20);
    rig.step_after(20);
    assert_eq!(rig.app.sweep().frequency_hz(), 920);

    let mark = rig.t.len();
    rig.send("ON");

    assert_eq!(rig.app.alarm(), AlarmState::Active);
    assert!(rig.t.red() && !rig.t.green());
    assert_eq!(rig.blinks_since(0), 2);
    assert_eq!(rig.tones_since(mark), vec![920]);
}

#[test]
fn on_off_on_resumes_sweep_phase() {
    let mut rig = Rig::boot();
    rig.send("ON");
    for _ in 0..3 {
        rig.step_after(20);
    }
    // Emitted 800, 840, 880, 920; next is 960.
    assert_eq!(rig.app.sweep().frequency_hz(), 960);

    rig.send("OFF");
    rig.step_after(5_000);
    assert_eq!(rig.app.sweep().frequency_hz(), 960);

    let mark = rig.t.len();
    rig.send("ON");
    assert_eq!(rig.tones_since(mark), vec![960]);
}

#[test]
fn resume_keeps_falling_direction() {
    let mut rig = Rig::boot();
    rig.send("ON");
    // 25 rising steps reach 1800 and flip; two more fall to 1720.
    for _ in 0..26 {
        rig.step_after(20);
    }
    assert!(!rig.app.sweep().is_rising());
    let before = rig.app.sweep().frequency_hz();

    rig.send("OFF");
    let mark = rig.t.len();
    rig.send("ON");

    assert_eq!(rig.tones_since(mark), vec![before]);
    assert_eq!(rig.app.sweep().frequency_hz(), before - 40);
}

#[test]
fn one_interval_changes_frequency_by_one_step() {
    let mut rig = Rig::boot();
    rig.send("ON");
    let last = rig.app.sweep().last_step_ms();
    let freq = rig.app.sweep().frequency_hz();

    let mark = rig.t.len();
    rig.step_after(19);
    assert!(rig.tones_since(mark).is_empty(), "must not step before the interval");

    rig.step_after(1);
    assert_eq!(rig.t.now(), last + 20);
    assert_eq!(rig.tones_since(mark), vec![freq], "tone carries the pre-advance value");
    assert_eq!(rig.app.sweep().frequency_hz(), freq + 40);
}

#[test]
fn sweep_emits_triangle_between_bounds() {
    let mut rig = Rig::boot();
    let mark = rig.t.len();
    rig.send("ON");
    for _ in 0..99 {
        rig.step_after(20);
    }

    let tones = rig.tones_since(mark);
    assert_eq!(tones.len(), 100);
    assert_eq!(tones[0], 800);
    assert_eq!(tones[25], 1800);
    assert_eq!(tones[50], 800);
    assert_eq!(tones[75], 1800);
    assert!(tones.iter().all(|f| (800..=1800).contains(f)));
    assert!(tones.windows(2).all(|w| w[0].abs_diff(w[1]) == 40));
}
