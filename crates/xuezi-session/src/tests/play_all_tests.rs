//! Single-character actions and the play-all chain

use super::fake::{Action, FakeProvider, fire_for, fire_next, pending_indices, session, word};
use crate::completion::TicketKind;
use crate::session::Availability;

#[test]
fn test_animate_sets_and_clears_active() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider);
    session.load_word(&word("1", "你好"));

    assert_eq!(session.animate(1), Availability::Started);
    assert_eq!(session.active_character_index(), Some(1));
    assert_eq!(log.borrow().actions, vec![(1, Action::Animate)]);

    let ticket = fire_next(&log).unwrap();
    assert_eq!(ticket.kind(), TicketKind::Animate);
    assert_eq!(session.pump(), 1);
    assert_eq!(session.active_character_index(), None);
}

#[test]
fn test_practice_uses_quiz() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider);
    session.load_word(&word("1", "你好"));

    assert_eq!(session.practice(0), Availability::Started);
    assert_eq!(session.active_character_index(), Some(0));
    assert_eq!(log.borrow().actions, vec![(0, Action::Quiz)]);

    fire_next(&log).unwrap();
    session.pump();
    assert_eq!(session.active_character_index(), None);
}

#[test]
fn test_actions_on_missing_surface_are_unavailable() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider.failing("好"));
    session.load_word(&word("1", "你好"));

    assert_eq!(session.animate(1), Availability::Unavailable);
    assert_eq!(session.practice(1), Availability::Unavailable);
    assert_eq!(session.animate(7), Availability::Unavailable);
    assert_eq!(session.active_character_index(), None);
    assert!(log.borrow().actions.is_empty());
}

#[test]
fn test_newest_single_action_owns_indicator() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider);
    session.load_word(&word("31", "图书馆"));

    session.animate(0);
    session.practice(2);
    assert_eq!(session.active_character_index(), Some(2));

    // the older animation finishing does not clear the newer one
    fire_for(&log, 0).unwrap();
    session.pump();
    assert_eq!(session.active_character_index(), Some(2));

    fire_for(&log, 2).unwrap();
    session.pump();
    assert_eq!(session.active_character_index(), None);
}

#[test]
fn test_play_all_runs_strictly_in_order() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider);
    session.load_word(&word("31", "图书馆"));

    assert_eq!(session.play_all(), Availability::Started);
    assert!(session.is_playing_all());

    for step in 0..3 {
        // only the current step is in flight
        assert_eq!(pending_indices(&log), vec![step]);
        assert_eq!(session.active_character_index(), Some(step));

        let ticket = fire_next(&log).unwrap();
        assert!(matches!(ticket.kind(), TicketKind::Chain { .. }));
        session.pump();
    }

    assert_eq!(log.borrow().animated(), vec![0, 1, 2]);
    assert_eq!(session.active_character_index(), None);
    assert!(!session.is_playing_all());
    assert!(pending_indices(&log).is_empty());
}

#[test]
fn test_play_all_skips_failed_middle_character() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider.failing("书"));
    session.load_word(&word("31", "图书馆"));

    session.play_all();
    assert_eq!(session.active_character_index(), Some(0));

    fire_next(&log).unwrap();
    session.pump();
    assert_eq!(session.active_character_index(), Some(2));
    assert_eq!(pending_indices(&log), vec![2]);

    fire_next(&log).unwrap();
    session.pump();

    assert_eq!(log.borrow().animated(), vec![0, 2]);
    assert_eq!(session.active_character_index(), None);
    assert!(!session.is_playing_all());
}

#[test]
fn test_play_all_skips_leading_failures() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider.failing("图"));
    session.load_word(&word("31", "图书馆"));

    assert_eq!(session.play_all(), Availability::Started);
    assert_eq!(session.active_character_index(), Some(1));
    assert_eq!(pending_indices(&log), vec![1]);
}

#[test]
fn test_play_all_with_no_surfaces_terminates_immediately() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider.failing("你好"));
    session.load_word(&word("1", "你好"));

    assert_eq!(session.play_all(), Availability::Unavailable);
    assert_eq!(session.active_character_index(), None);
    assert!(!session.is_playing_all());
    assert!(log.borrow().actions.is_empty());
}

#[test]
fn test_restart_mid_chain_supersedes_old_chain() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider);
    session.load_word(&word("31", "图书馆"));

    session.play_all();
    fire_next(&log).unwrap();
    session.pump();
    assert_eq!(pending_indices(&log), vec![1]);

    // restart while step 1 of the first chain is still animating
    session.play_all();
    assert_eq!(pending_indices(&log), vec![1, 0]);
    assert_eq!(session.active_character_index(), Some(0));

    // first chain's step 1 finishes: nothing advances, indicator untouched
    fire_next(&log).unwrap();
    session.pump();
    assert_eq!(pending_indices(&log), vec![0]);
    assert_eq!(session.active_character_index(), Some(0));

    while fire_next(&log).is_some() {
        session.pump();
    }

    assert_eq!(log.borrow().animated(), vec![0, 1, 0, 1, 2]);
    assert_eq!(session.active_character_index(), None);
}

#[test]
fn test_restart_after_completion() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider.auto_complete());
    session.load_word(&word("1", "你好"));

    session.play_all();
    session.pump();
    assert_eq!(session.active_character_index(), None);

    session.play_all();
    session.pump();

    assert_eq!(log.borrow().animated(), vec![0, 1, 0, 1]);
    assert_eq!(session.active_character_index(), None);
}

#[test]
fn test_synchronous_completions_still_run_in_order() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider.auto_complete());
    session.load_word(&word("31", "图书馆"));

    assert_eq!(session.play_all(), Availability::Started);
    // step 0 fired from inside animate, but step 1 waits for the pump
    assert_eq!(log.borrow().animated(), vec![0]);

    assert_eq!(session.pump(), 3);
    assert_eq!(log.borrow().animated(), vec![0, 1, 2]);
    assert_eq!(session.active_character_index(), None);
}

#[test]
fn test_single_action_during_chain_takes_indicator() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider);
    session.load_word(&word("31", "图书馆"));

    session.play_all();
    session.practice(2);
    assert_eq!(session.active_character_index(), Some(2));

    // chain advances without stealing the indicator back
    fire_for(&log, 0).unwrap();
    session.pump();
    assert_eq!(pending_indices(&log), vec![2, 1]);
    assert_eq!(session.active_character_index(), Some(2));

    fire_for(&log, 2).unwrap();
    session.pump();
    assert_eq!(session.active_character_index(), None);

    while fire_next(&log).is_some() {
        session.pump();
    }
    assert!(!session.is_playing_all());
    assert_eq!(session.active_character_index(), None);
}

#[test]
fn test_rebuild_mid_chain_drops_chain() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider);
    session.load_word(&word("31", "图书馆"));

    session.play_all();
    session.load_word(&word("1", "你好"));
    assert!(!session.is_playing_all());
    assert_eq!(session.active_character_index(), None);

    // the destroyed surface reports in; nothing new is issued
    fire_next(&log).unwrap();
    session.pump();
    assert_eq!(log.borrow().animated(), vec![0]);
    assert_eq!(log.borrow().live_count(), 2);
}

#[test]
fn test_duplicate_completion_is_harmless() {
    let (provider, log) = FakeProvider::new();
    let mut session = session(provider);
    session.load_word(&word("1", "你好"));

    session.play_all();
    let ticket = fire_next(&log).unwrap();
    session.pump();
    assert_eq!(pending_indices(&log), vec![1]);

    // provider reports step 0 twice
    session.complete(ticket);
    assert_eq!(pending_indices(&log), vec![1]);
    assert_eq!(session.active_character_index(), Some(1));
}
