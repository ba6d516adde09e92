use super::*;

fn input() -> InputMap {
    // Page 1 owns a slide tab.
    InputMap::new(&[false, true, false])
}

#[test]
fn arrow_keys_map_to_navigation() {
    let mut map = input();
    assert_eq!(
        map.map(&InputEvent::Key(Key::ArrowRight)),
        Some(Command::Next)
    );
    assert_eq!(
        map.map(&InputEvent::Key(Key::ArrowLeft)),
        Some(Command::Prev)
    );
}

#[test]
fn controls_map_one_to_one() {
    let mut map = input();
    let cases = [
        (Control::Start, Command::Start),
        (Control::Restart, Command::Restart),
        (Control::Burst, Command::BurstHearts),
        (Control::MusicToggle, Command::ToggleMusic),
        (Control::Next, Command::Next),
        (Control::Prev, Command::Prev),
    ];
    for (control, command) in cases {
        assert_eq!(map.map(&InputEvent::Control(control)), Some(command));
    }
}

#[test]
fn resize_carries_the_new_surface() {
    let mut map = input();
    assert_eq!(
        map.map(&InputEvent::Resize {
            width: 1024,
            height: 768
        }),
        Some(Command::Resize(Surface {
            width: 1024,
            height: 768
        }))
    );
}

#[test]
fn tab_click_toggles_the_panel() {
    let mut map = input();
    assert!(!map.tabs().is_open(1));
    assert_eq!(map.map(&InputEvent::TabClick { page: 1 }), None);
    assert!(map.tabs().is_open(1));
    map.map(&InputEvent::TabClick { page: 1 });
    assert!(!map.tabs().is_open(1));
}

#[test]
fn drag_past_the_threshold_opens_and_closes() {
    let mut map = input();
    map.map(&InputEvent::TabPointerDown { page: 1, x: 100.0 });

    // Not past +60 yet.
    map.map(&InputEvent::TabPointerMove { page: 1, x: 159.0 });
    assert!(!map.tabs().is_open(1));

    map.map(&InputEvent::TabPointerMove { page: 1, x: 161.0 });
    assert!(map.tabs().is_open(1));

    // The same drag can latch it closed again.
    map.map(&InputEvent::TabPointerMove { page: 1, x: 39.0 });
    assert!(!map.tabs().is_open(1));

    map.map(&InputEvent::TabPointerUp { page: 1 });
    // Moves after the drag ended change nothing.
    map.map(&InputEvent::TabPointerMove { page: 1, x: 300.0 });
    assert!(!map.tabs().is_open(1));
}

#[test]
fn pointer_cancel_ends_the_drag() {
    let mut map = input();
    map.map(&InputEvent::TabPointerDown { page: 1, x: 0.0 });
    map.map(&InputEvent::TabPointerCancel { page: 1 });
    map.map(&InputEvent::TabPointerMove { page: 1, x: 500.0 });
    assert!(!map.tabs().is_open(1));
}

#[test]
fn pages_without_a_tab_ignore_tab_events() {
    let mut map = input();
    map.map(&InputEvent::TabClick { page: 0 });
    map.map(&InputEvent::TabClick { page: 99 });
    assert!(!map.tabs().is_open(0));
    assert!(!map.tabs().is_open(99));
}
