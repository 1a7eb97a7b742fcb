//! End-to-end runs of the user directory screen through key presses.

use rolodex::{handle_event, initialize, map_key, Action, AppState, Config, Event, IdStrategy, User};
use zellij_tile::prelude::{BareKey, KeyWithModifier};

fn mounted(config: &Config) -> AppState {
    let mut state = initialize(config);
    let (_, actions) = handle_event(
        &mut state,
        &Event::Mounted {
            endpoint: config.endpoint.clone(),
        },
    )
    .unwrap();
    assert_eq!(
        actions,
        vec![Action::FetchUsers {
            url: config.endpoint.clone()
        }]
    );
    state
}

fn loaded(config: &Config, users: Vec<User>) -> AppState {
    let mut state = mounted(config);
    handle_event(
        &mut state,
        &Event::LoadSucceeded {
            users,
            fetched_at: 1_700_000_000,
        },
    )
    .unwrap();
    state
}

fn press(state: &mut AppState, key: BareKey) {
    if let Some(event) = map_key(state.input_mode, &KeyWithModifier::new(key)) {
        handle_event(state, &event).unwrap();
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, BareKey::Char(c));
    }
}

fn a_and_b() -> Vec<User> {
    vec![User::new(1, "A", "a@x.com"), User::new(2, "B", "b@x.com")]
}

#[test]
fn delete_then_create_follows_length_rule() {
    let mut state = loaded(&Config::default(), a_and_b());

    press(&mut state, BareKey::Char('d'));
    press(&mut state, BareKey::Char('y'));
    assert_eq!(state.users, vec![User::new(2, "B", "b@x.com")]);

    press(&mut state, BareKey::Char('a'));
    type_text(&mut state, "C");
    press(&mut state, BareKey::Tab);
    type_text(&mut state, "c@x.com");
    press(&mut state, BareKey::Enter);

    assert!(!state.modal_visible());
    assert_eq!(
        state.users,
        vec![User::new(2, "B", "b@x.com"), User::new(2, "C", "c@x.com")]
    );
}

#[test]
fn delete_then_create_with_max_strategy_gets_fresh_id() {
    let config = Config {
        id_strategy: IdStrategy::MaxPlusOne,
        ..Config::default()
    };
    let mut state = loaded(&config, a_and_b());

    press(&mut state, BareKey::Char('d'));
    press(&mut state, BareKey::Enter);

    press(&mut state, BareKey::Char('a'));
    type_text(&mut state, "C");
    press(&mut state, BareKey::Tab);
    type_text(&mut state, "c@x.com");
    press(&mut state, BareKey::Enter);

    assert_eq!(
        state.users,
        vec![User::new(2, "B", "b@x.com"), User::new(3, "C", "c@x.com")]
    );
}

#[test]
fn cancelled_delete_keeps_everyone() {
    let mut state = loaded(&Config::default(), a_and_b());

    press(&mut state, BareKey::Char('j'));
    press(&mut state, BareKey::Char('d'));
    press(&mut state, BareKey::Char('n'));

    assert_eq!(state.users, a_and_b());
    assert_eq!(state.input_mode, rolodex::InputMode::Browse);
}

#[test]
fn edit_replaces_in_place() {
    let mut state = loaded(&Config::default(), a_and_b());

    press(&mut state, BareKey::Char('j'));
    press(&mut state, BareKey::Char('e'));
    assert!(state.modal_visible());
    assert_eq!(state.draft.name, "B");

    press(&mut state, BareKey::Backspace);
    type_text(&mut state, "Bea");
    press(&mut state, BareKey::Enter);

    assert_eq!(
        state.users,
        vec![User::new(1, "A", "a@x.com"), User::new(2, "Bea", "b@x.com")]
    );
}

#[test]
fn save_with_empty_email_keeps_modal_open() {
    let mut state = loaded(&Config::default(), a_and_b());

    press(&mut state, BareKey::Char('a'));
    type_text(&mut state, "C");
    press(&mut state, BareKey::Enter);

    assert!(state.modal_visible());
    assert_eq!(state.users.len(), 2);

    press(&mut state, BareKey::Esc);
    assert!(!state.modal_visible());
    assert_eq!(state.users, a_and_b());
}

#[test]
fn failed_load_leaves_empty_directory() {
    let config = Config::default();
    let mut state = mounted(&config);

    handle_event(
        &mut state,
        &Event::LoadFailed {
            reason: "Directory returned HTTP status 503".to_string(),
        },
    )
    .unwrap();

    assert!(!state.loading);
    assert!(state.users.is_empty());

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some("No users"));
}

#[test]
fn second_mount_does_not_refetch() {
    let config = Config::default();
    let mut state = mounted(&config);

    let (_, actions) = handle_event(
        &mut state,
        &Event::Mounted {
            endpoint: config.endpoint.clone(),
        },
    )
    .unwrap();
    assert!(actions.is_empty());
}

#[test]
fn decoded_response_drives_the_load() {
    let body = br#"[
        {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz"},
        {"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv"}
    ]"#;
    let users = rolodex::directory::decode_response(200, body).unwrap();
    let state = loaded(&Config::default(), users);

    let names: Vec<&str> = state.users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Leanne Graham", "Ervin Howell"]);
}
