use super::*;

fn input(ch: char, ctrl: bool, alt: bool) -> Input {
    Input {
        key: Key::Char(ch),
        ctrl,
        alt,
        shift: false,
    }
}

#[test]
fn it_matches_the_terminal_chord() {
    let chord = KeyChord::TOGGLE_TERMINAL;
    assert!(chord.matches(&input('p', true, true)));
    assert!(chord.matches(&input('P', true, true)));
    assert!(!chord.matches(&input('p', true, false)));
    assert!(!chord.matches(&input('p', false, true)));
    assert!(!chord.matches(&input('o', true, true)));
}

#[test]
fn it_toggles_the_flag_through_a_binding() {
    let hotkeys = Hotkeys::default();
    let flag = ActiveFlag::default();
    let binding_flag = flag.clone();
    let _guard = hotkeys.register(KeyChord::TOGGLE_TERMINAL, move || {
        binding_flag.toggle();
    });

    assert!(hotkeys.dispatch(&input('p', true, true)));
    assert!(flag.get());
    assert!(hotkeys.dispatch(&input('p', true, true)));
    assert!(!flag.get());
    assert!(!hotkeys.dispatch(&input('p', false, false)));
    assert!(!flag.get());
}

#[test]
fn it_deregisters_on_drop() {
    let hotkeys = Hotkeys::default();
    let flag = ActiveFlag::default();
    let binding_flag = flag.clone();
    let guard = hotkeys.register(KeyChord::TOGGLE_TERMINAL, move || {
        binding_flag.toggle();
    });
    assert_eq!(hotkeys.len(), 1);

    drop(guard);

    assert!(hotkeys.is_empty());
    assert!(!hotkeys.dispatch(&input('p', true, true)));
    assert!(!flag.get());
}

#[test]
fn it_reports_the_new_state_on_toggle() {
    let flag = ActiveFlag::default();
    assert!(flag.toggle());
    assert!(!flag.toggle());
    flag.set(true);
    assert!(flag.get());
}
