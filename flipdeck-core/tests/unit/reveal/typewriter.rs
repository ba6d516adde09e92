use super::*;

const TICK_MS: f64 = 16.0;

#[test]
fn reveals_one_character_per_interval_tick() {
    let mut tw = Typewriter::new(0, "Hi", TICK_MS);
    assert_eq!(tw.visible(), "");
    assert!(tw.caret_visible());

    assert_eq!(tw.tick(TICK_MS, 0), TypewriterStatus::Revealing);
    assert_eq!(tw.visible(), "H");
    assert!(tw.caret_visible());

    assert_eq!(tw.tick(TICK_MS, 0), TypewriterStatus::Finished);
    assert_eq!(tw.visible(), "Hi");
    assert!(!tw.caret_visible());
    assert!(tw.is_done());

    // Further ticks stay finished.
    assert_eq!(tw.tick(TICK_MS, 0), TypewriterStatus::Finished);
    assert_eq!(tw.visible(), "Hi");
}

#[test]
fn a_fast_tick_reveals_several_characters() {
    let mut tw = Typewriter::new(0, "abcdef", 5.0);
    assert_eq!(tw.tick(16.0, 0), TypewriterStatus::Revealing);
    assert_eq!(tw.visible(), "abc");
}

#[test]
fn cancels_when_the_owning_page_goes_inactive() {
    let mut tw = Typewriter::new(2, "hello", TICK_MS);
    assert_eq!(tw.tick(TICK_MS, 2), TypewriterStatus::Revealing);
    assert_eq!(tw.visible(), "h");

    assert_eq!(tw.tick(TICK_MS, 3), TypewriterStatus::Cancelled);
    assert!(!tw.caret_visible());
    assert!(tw.is_done());
    // The reveal stays where it stopped.
    assert_eq!(tw.visible(), "h");
    assert_eq!(tw.tick(TICK_MS, 2), TypewriterStatus::Cancelled);
}

#[test]
fn restart_replays_from_the_cached_full_text() {
    let mut tw = Typewriter::new(0, "hola", TICK_MS);
    tw.tick(TICK_MS, 0);
    tw.tick(TICK_MS, 0);
    assert_eq!(tw.visible(), "ho");

    tw.restart();
    assert_eq!(tw.visible(), "");
    assert!(tw.caret_visible());
    assert_eq!(tw.tick(TICK_MS, 0), TypewriterStatus::Revealing);
    assert_eq!(tw.visible(), "h");
}

#[test]
fn multibyte_text_reveals_on_char_boundaries() {
    let mut tw = Typewriter::new(0, "¡Sí!", TICK_MS);
    assert_eq!(tw.tick(TICK_MS, 0), TypewriterStatus::Revealing);
    assert_eq!(tw.visible(), "¡");
    tw.tick(TICK_MS, 0);
    assert_eq!(tw.visible(), "¡S");
    tw.tick(TICK_MS, 0);
    assert_eq!(tw.visible(), "¡Sí");
    assert_eq!(tw.tick(TICK_MS, 0), TypewriterStatus::Finished);
    assert_eq!(tw.visible(), "¡Sí!");
}

#[test]
fn empty_text_finishes_immediately() {
    let mut tw = Typewriter::new(0, "", TICK_MS);
    assert_eq!(tw.tick(TICK_MS, 0), TypewriterStatus::Finished);
    assert!(!tw.caret_visible());
}
