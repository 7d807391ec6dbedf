use pretty_assertions::assert_eq;
use team_shuffle::roster::RosterError;
use team_shuffle::rules::{SettingField, Settings};
use team_shuffle::session::{
    DisplayState, EditTarget, Session, SessionAction, ShuffleError, MIN_PLAYERS,
};
use team_shuffle::test_util::{deterministic_rng, sample_players};


fn session_with_players(names: &[&str]) -> Session {
    Session::with_seed(names, Settings::default())
}

#[test]
fn duplicate_player_is_a_noop_rejection() {
    let mut session = Session::new();
    session.add_player("Ana").unwrap();
    assert_eq!(session.add_player("Ana"), Err(RosterError::DuplicateName));
    assert_eq!(session.roster().players(), ["Ana"]);
}

#[test]
fn blank_player_is_a_noop_rejection() {
    let mut session = Session::new();
    assert_eq!(session.add_player("   "), Err(RosterError::EmptyName));
    assert_eq!(session.display_state(), DisplayState::Empty);
}

#[test]
fn seeding_drops_blank_and_duplicate_names() {
    let session = session_with_players(&["Ana", "", "Bruno", "Ana", "  "]);
    assert_eq!(session.roster().players(), ["Ana", "Bruno"]);
}

#[test]
fn team_count_clamps_at_one() {
    let mut session = Session::new();
    session.decrement(SettingField::TeamCount);
    session.decrement(SettingField::TeamCount);
    assert_eq!(session.settings().team_count(), 1);
    session.decrement(SettingField::CapacityPerTeam);
    session.decrement(SettingField::CapacityPerTeam);
    session.decrement(SettingField::CapacityPerTeam);
    session.decrement(SettingField::CapacityPerTeam);
    assert_eq!(session.settings().capacity_per_team(), 1);
}

#[test]
fn shuffle_requires_enough_players() {
    let mut rng = deterministic_rng();
    let mut session = Session::new();
    assert_eq!(session.shuffle(&mut rng).err(), Some(ShuffleError::NotEnoughPlayers));
    session.add_player("Ana").unwrap();
    assert!(session.roster().len() < MIN_PLAYERS);
    assert_eq!(session.shuffle(&mut rng).err(), Some(ShuffleError::NotEnoughPlayers));
    session.add_player("Bruno").unwrap();
    assert!(session.shuffle(&mut rng).is_ok());
}

#[test]
fn shuffle_is_blocked_while_editing() {
    let mut rng = deterministic_rng();
    let mut session = session_with_players(&["Ana", "Bruno"]);
    session.toggle_edit(EditTarget::Players);
    assert_eq!(session.shuffle(&mut rng).err(), Some(ShuffleError::EditingInProgress));
    session.close_edit();
    assert!(session.shuffle(&mut rng).is_ok());
}

#[test]
fn changes_invalidate_the_assignment() {
    let mut rng = deterministic_rng();
    let mut session = session_with_players(&["Ana", "Bruno", "Clara"]);
    assert_eq!(session.display_state(), DisplayState::Ready);

    session.shuffle(&mut rng).unwrap();
    assert_eq!(session.display_state(), DisplayState::Shuffled);
    assert!(session.current_assignment().is_some());

    session.add_player("Dario").unwrap();
    assert_eq!(session.display_state(), DisplayState::Ready);
    assert!(session.current_assignment().is_none());

    session.shuffle(&mut rng).unwrap();
    session.increment(SettingField::CapacityPerTeam);
    assert_eq!(session.display_state(), DisplayState::Ready);

    session.shuffle(&mut rng).unwrap();
    session.remove_player("Dario");
    assert_eq!(session.display_state(), DisplayState::Ready);
}

#[test]
fn floor_decrement_keeps_the_assignment() {
    let mut rng = deterministic_rng();
    let mut session = session_with_players(&["Ana", "Bruno"]);
    session.decrement(SettingField::TeamCount);
    session.shuffle(&mut rng).unwrap();
    // Already at the floor: nothing changes, the assignment stays current.
    session.decrement(SettingField::TeamCount);
    assert_eq!(session.display_state(), DisplayState::Shuffled);
}

#[test]
fn removing_the_last_player_discards_the_assignment() {
    let mut rng = deterministic_rng();
    let mut session = session_with_players(&["Ana", "Bruno"]);
    session.shuffle(&mut rng).unwrap();
    assert!(session.remove_player("Ana"));
    assert!(session.remove_player("Bruno"));
    assert_eq!(session.display_state(), DisplayState::Empty);
    assert!(session.current_assignment().is_none());
}

#[test]
fn removing_an_unknown_player_is_a_noop() {
    let mut rng = deterministic_rng();
    let mut session = session_with_players(&["Ana", "Bruno"]);
    session.shuffle(&mut rng).unwrap();
    assert!(!session.remove_player("Zoe"));
    assert_eq!(session.display_state(), DisplayState::Shuffled);
}

#[test]
fn editing_hides_but_does_not_invalidate() {
    let mut rng = deterministic_rng();
    let mut session = session_with_players(&["Ana", "Bruno"]);
    session.shuffle(&mut rng).unwrap();
    session.toggle_edit(EditTarget::Settings);
    // Still `Shuffled`: the boundary suppresses rendering while editing,
    // the assignment itself remains current.
    assert_eq!(session.display_state(), DisplayState::Shuffled);
    assert!(session.is_editing());
    session.close_edit();
    assert_eq!(session.display_state(), DisplayState::Shuffled);
}

#[test]
fn edit_targets_are_mutually_exclusive() {
    let mut session = Session::new();
    session.toggle_edit(EditTarget::Players);
    assert_eq!(session.edit_target(), Some(EditTarget::Players));
    session.toggle_edit(EditTarget::Settings);
    assert_eq!(session.edit_target(), Some(EditTarget::Settings));
    session.toggle_edit(EditTarget::Settings);
    assert_eq!(session.edit_target(), None);
}

#[test]
fn shuffle_is_reproducible_with_a_seeded_rng() {
    let players = sample_players();
    let mut first = Session::with_seed(&players, Settings::clamped(2, 2));
    let mut second = Session::with_seed(&players, Settings::clamped(2, 2));
    let a = first.shuffle(&mut deterministic_rng()).unwrap().clone();
    let b = second.shuffle(&mut deterministic_rng()).unwrap().clone();
    assert_eq!(a, b);
}

#[test]
fn shuffled_assignment_covers_the_whole_roster() {
    let mut rng = deterministic_rng();
    let mut session = Session::with_seed(&sample_players(), Settings::clamped(2, 2));
    let assignment = session.shuffle(&mut rng).unwrap();
    // 5 players, 4 places: exactly one overflows.
    assert_eq!(assignment.overflow.len(), 1);
    let mut all: Vec<String> =
        assignment.teams.iter().flatten().chain(&assignment.overflow).cloned().collect();
    all.sort();
    let mut expected = sample_players();
    expected.sort();
    assert_eq!(all, expected);
}

#[test]
fn actions_drive_the_session() {
    use SessionAction::*;
    let mut rng = deterministic_rng();
    let mut session = Session::new();
    for action in [
        AddPlayer("Ana".to_owned()),
        AddPlayer("Bruno".to_owned()),
        AddPlayer("Clara".to_owned()),
        Decrement(SettingField::CapacityPerTeam),
        Shuffle,
    ] {
        session.apply(action, &mut rng).unwrap();
    }
    assert_eq!(session.display_state(), DisplayState::Shuffled);
    assert_eq!(session.settings().capacity_per_team(), 3);

    session.apply(SessionAction::RemovePlayer("Clara".to_owned()), &mut rng).unwrap();
    assert_eq!(session.display_state(), DisplayState::Ready);
    assert!(session.apply(SessionAction::RemovePlayer("Clara".to_owned()), &mut rng).is_err());
}
