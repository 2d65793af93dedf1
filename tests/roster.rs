//! Integration tests for the roster: identity, ordering, lenient mutation.

use team_picker::{Roster, RosterError};

#[test]
fn ids_are_strictly_increasing_and_never_reused() {
    let mut roster = Roster::new();
    let a = roster.add_player("Alice").unwrap();
    let b = roster.add_player("Bob").unwrap();
    assert_eq!((a, b), (1, 2));

    roster.remove_player(b);
    let c = roster.add_player("Carol").unwrap();
    assert_eq!(c, 3); // Bob's id is not reused

    roster.remove_player(a);
    roster.remove_player(c);
    let d = roster.add_player("Dave").unwrap();
    assert_eq!(d, 4);
    assert_eq!(roster.len(), 1);
}

#[test]
fn add_rejects_empty_and_whitespace_names() {
    let mut roster = Roster::new();
    assert_eq!(roster.add_player(""), Err(RosterError::EmptyName));
    assert_eq!(roster.add_player("   "), Err(RosterError::EmptyName));
    assert!(roster.is_empty());
    // Rejected attempts must not burn ids
    assert_eq!(roster.add_player("Alice").unwrap(), 1);
}

#[test]
fn add_trims_names() {
    let mut roster = Roster::new();
    let a = roster.add_player("  Alice  ").unwrap();
    assert_eq!(roster.player(a).unwrap().name, "Alice");
}

#[test]
fn players_sorted_by_games_then_id() {
    let mut roster = Roster::new();
    let a = roster.add_player("Alice").unwrap();
    let b = roster.add_player("Bob").unwrap();
    let c = roster.add_player("Carol").unwrap();
    roster.set_player_games(a, 2);
    roster.set_player_games(b, 0);
    roster.set_player_games(c, 2);

    let ordered: Vec<_> = roster.players().iter().map(|p| p.id).collect();
    assert_eq!(ordered, vec![b, a, c]); // 0 games first; tie at 2 broken by id
}

#[test]
fn negative_games_sort_first_and_are_not_clamped() {
    let mut roster = Roster::new();
    let a = roster.add_player("Alice").unwrap();
    let b = roster.add_player("Bob").unwrap();
    roster.set_player_games(b, -3);

    let players = roster.players();
    assert_eq!(players[0].id, b);
    assert_eq!(players[0].games, -3);
    assert_eq!(players[1].id, a);
}

#[test]
fn absent_ids_are_quiet_no_ops() {
    let mut roster = Roster::new();
    let a = roster.add_player("Alice").unwrap();

    roster.remove_player(99);
    roster.set_player_games(99, 5);
    roster.set_player_name(99, "Nobody");
    roster.toggle_player_paused(99);

    assert_eq!(roster.len(), 1);
    let alice = roster.player(a).unwrap();
    assert_eq!(alice.games, 0);
    assert_eq!(alice.name, "Alice");
    assert!(!alice.paused);
}

#[test]
fn reset_all_games_preserves_pause_and_identity() {
    let mut roster = Roster::new();
    let a = roster.add_player("Alice").unwrap();
    let b = roster.add_player("Bob").unwrap();
    let c = roster.add_player("Carol").unwrap();
    roster.set_player_games(a, 4);
    roster.set_player_games(b, -1);
    roster.set_player_games(c, 7);
    roster.toggle_player_paused(b);

    roster.reset_all_games();

    let players = roster.players();
    assert!(players.iter().all(|p| p.games == 0));
    let ids: Vec<_> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a, b, c]); // all tied again: id order
    assert!(roster.player(b).unwrap().paused);
    assert!(!roster.player(a).unwrap().paused);
}

#[test]
fn clear_keeps_the_id_counter_monotonic() {
    let mut roster = Roster::new();
    roster.add_player("Alice").unwrap();
    roster.add_player("Bob").unwrap();

    roster.clear();

    assert!(roster.is_empty());
    assert_eq!(roster.current_id(), 2);
    assert_eq!(roster.add_player("Carol").unwrap(), 3);
}

#[test]
fn clone_is_independent_both_ways() {
    let mut roster = Roster::new();
    let a = roster.add_player("Alice").unwrap();
    let mut copy = roster.clone();

    copy.set_player_games(a, 9);
    copy.add_player("Bob").unwrap();
    assert_eq!(roster.player(a).unwrap().games, 0);
    assert_eq!(roster.len(), 1);

    roster.toggle_player_paused(a);
    assert!(!copy.player(a).unwrap().paused);
}

#[test]
fn rename_accepts_any_string_including_empty() {
    let mut roster = Roster::new();
    let a = roster.add_player("Alice").unwrap();

    roster.set_player_name(a, "");
    assert_eq!(roster.player(a).unwrap().name, "");

    roster.set_player_name(a, "Alicia");
    assert_eq!(roster.player(a).unwrap().name, "Alicia");
}
