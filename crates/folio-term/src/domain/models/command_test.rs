use super::*;

#[test]
fn it_resolves_known_commands_case_insensitively() {
    assert_eq!(Command::resolve("help"), ResolvedCommand::Known(Command::Help));
    assert_eq!(Command::resolve("HELP"), ResolvedCommand::Known(Command::Help));
    assert_eq!(Command::resolve("  WhoAmI \t"), ResolvedCommand::Known(Command::Whoami));
}

#[test]
fn it_resolves_blank_input_to_empty() {
    assert_eq!(Command::resolve(""), ResolvedCommand::Known(Command::Empty));
    assert_eq!(Command::resolve("   "), ResolvedCommand::Known(Command::Empty));
}

#[test]
fn it_does_not_prefix_match() {
    assert_eq!(
        Command::resolve("hel"),
        ResolvedCommand::Unknown("hel".to_string())
    );
    assert_eq!(
        Command::resolve("help me"),
        ResolvedCommand::Unknown("help me".to_string())
    );
}

#[test]
fn it_keeps_normalized_text_for_unknown_commands() {
    assert_eq!(
        Command::resolve("  Sudo Rm  "),
        ResolvedCommand::Unknown("sudo rm".to_string())
    );
}

#[test]
fn it_maps_navigation_commands_to_routes() {
    assert_eq!(Command::About.route(), Some(Route::About));
    assert_eq!(Command::Projects.route(), Some(Route::Projects));
    assert_eq!(Command::Contact.route(), Some(Route::Contact));
    assert_eq!(Command::Home.route(), Some(Route::Home));
    assert_eq!(Command::Github.route(), None);
}
