use super::*;
use crate::foundation::error::FlipdeckError;

#[derive(Default)]
struct FakeSink {
    reject_play: bool,
    plays: u32,
    pauses: u32,
    seeks: Vec<f64>,
    volumes: Vec<f32>,
}

impl MusicSink for FakeSink {
    fn play(&mut self) -> crate::FlipdeckResult<()> {
        if self.reject_play {
            return Err(FlipdeckError::audio("playback requires a user gesture"));
        }
        self.plays += 1;
        Ok(())
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }

    fn seek(&mut self, position_sec: f64) {
        self.seeks.push(position_sec);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volumes.push(volume);
    }
}

fn spec() -> crate::MusicSpec {
    crate::MusicSpec {
        source: "music/track.mp3".to_string(),
        volume: 0.15,
        start_at_sec: 41.0,
    }
}

#[test]
fn successful_toggle_turns_on_and_updates_the_label() {
    let mut sink = FakeSink::default();
    let mut toggle = MusicToggle::default();
    assert!(!toggle.is_on());
    assert_eq!(toggle.label(), "▶ Música");

    assert!(toggle.toggle(&mut sink));
    assert!(toggle.is_on());
    assert_eq!(toggle.label(), "⏸ Música");
    assert_eq!(sink.plays, 1);
}

#[test]
fn toggling_off_pauses() {
    let mut sink = FakeSink::default();
    let mut toggle = MusicToggle::default();
    toggle.toggle(&mut sink);
    assert!(toggle.toggle(&mut sink));
    assert!(!toggle.is_on());
    assert_eq!(toggle.label(), "▶ Música");
    assert_eq!(sink.pauses, 1);
}

#[test]
fn rejected_play_leaves_the_state_off() {
    let mut sink = FakeSink {
        reject_play: true,
        ..FakeSink::default()
    };
    let mut toggle = MusicToggle::default();
    assert!(!toggle.toggle(&mut sink));
    assert!(!toggle.is_on());
    assert_eq!(toggle.label(), "▶ Música");
    assert_eq!(sink.plays, 0);
}

#[test]
fn start_seeks_sets_volume_and_plays() {
    let mut sink = FakeSink::default();
    let mut toggle = MusicToggle::default();
    toggle.start(&mut sink, &spec());
    assert!(toggle.is_on());
    assert_eq!(sink.seeks, vec![41.0]);
    assert_eq!(sink.volumes, vec![0.15]);
    assert_eq!(sink.plays, 1);
}

#[test]
fn start_forces_on_even_when_playback_is_rejected() {
    let mut sink = FakeSink {
        reject_play: true,
        ..FakeSink::default()
    };
    let mut toggle = MusicToggle::default();
    toggle.start(&mut sink, &spec());
    assert!(toggle.is_on());
    assert_eq!(toggle.label(), "⏸ Música");
}

#[test]
fn null_sink_always_accepts_playback() {
    let mut sink = NullSink;
    let mut toggle = MusicToggle::default();
    assert!(toggle.toggle(&mut sink));
    assert!(toggle.is_on());
}
