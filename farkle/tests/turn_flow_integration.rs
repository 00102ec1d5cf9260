/// Integration tests for turn flow scenarios
///
/// These tests drive players and turns through whole turns with scripted
/// dice, the way a game loop would.
use std::{cell::RefCell, rc::Rc};

use farkle::{
    KeepGroup, Player, PlayerError, Points, RandomDie, Roll, Scoring, ScriptedDice, Turn,
    TurnError, TurnOutcome, TurnPhase, TurnStart, eval,
};

type Handoffs = Rc<RefCell<Vec<(usize, Points)>>>;

fn recording_player(
    name: &str,
    script: &[u8],
) -> (Player<ScriptedDice, impl FnMut(usize, Points)>, Handoffs) {
    let handoffs: Handoffs = Rc::default();
    let sink = Rc::clone(&handoffs);
    let player = Player::new(
        name,
        ScriptedDice::new(script.to_vec()),
        move |dice: usize, score: Points| sink.borrow_mut().push((dice, score)),
    );
    (player, handoffs)
}

#[test]
fn test_scoring_three_fifty() {
    let scorings = eval(&Roll::from([1, 1, 1, 5, 4, 3]));
    assert_eq!(
        scorings,
        vec![
            Scoring::new(300, vec![0, 1, 2]),
            Scoring::new(100, vec![0]),
            Scoring::new(100, vec![1]),
            Scoring::new(100, vec![2]),
            Scoring::new(50, vec![3]),
        ]
    );
}

#[test]
fn test_scoring_six_of_a_kind() {
    let scorings = Roll::from([4, 4, 4, 4, 4, 4]).score();
    assert_eq!(scorings, vec![Scoring::new(3000, vec![0, 1, 2, 3, 4, 5])]);
}

#[test]
fn test_six_ones_also_score_singly() {
    let scorings = Roll::from([1, 1, 1, 1, 1, 1]).score();
    assert_eq!(scorings.len(), 7);
    assert_eq!(scorings[0], Scoring::new(3000, vec![0, 1, 2, 3, 4, 5]));
    assert!(scorings[1..].iter().all(|s| s.score == 100));
}

#[test]
fn test_player_keeps_three_fifty() {
    let (mut player, handoffs) = recording_player("test", &[1, 1, 1, 5, 2, 3]);
    player.reject().unwrap();
    player.roll().unwrap();
    player.keep(&[0, 1, 2, 3]).unwrap();
    let summary = player.bank().unwrap();

    assert_eq!(summary.score, 350);
    assert_eq!(summary.dice_available, 2);
    assert_eq!(*handoffs.borrow(), vec![(2, 350)]);
}

#[test]
fn test_player_busts() {
    let (mut player, handoffs) = recording_player("test", &[2, 3, 4, 6, 4, 3]);
    player.reject().unwrap();
    let roll = player.roll().unwrap();

    assert_eq!(roll, Roll::from([2, 3, 4, 6, 4, 3]));
    assert_eq!(player.turns()[0].result(), 0);
    assert_eq!(player.history()[0].outcome, TurnOutcome::Busted);
    assert_eq!(*handoffs.borrow(), vec![(0, 0)]);
}

#[test]
fn test_keep_seven_of_six() {
    let mut turn = Turn::new();
    turn.roll(&mut ScriptedDice::new(vec![6])).unwrap();
    let err = turn.keep(&[0, 1, 2, 3, 4, 5, 6]).unwrap_err();
    assert_eq!(
        err,
        TurnError::OverKeep {
            requested: 7,
            available: 6
        }
    );
    assert_eq!(turn.result(), 0);
    assert_eq!(turn.dice_available(), 6);
    assert_eq!(turn.phase(), TurnPhase::RollResolved);
}

#[test]
fn test_keep_leaving_non_scoring_residue() {
    let mut turn = Turn::new();
    turn.roll(&mut ScriptedDice::new(vec![1, 1, 1, 5, 4, 3])).unwrap();
    assert_eq!(
        turn.keep(&[1, 2, 3, 4, 5]),
        Err(TurnError::UnresolvableSelection(vec![4, 5]))
    );
    assert_eq!(
        turn.keep(&[1, 2, 3, 4, 5]),
        Err(TurnError::UnresolvableSelection(vec![4, 5]))
    );
    assert_eq!(turn.result(), 0);
    assert!(turn.keep_groups().is_empty());
}

#[test]
fn test_handoff_chain_between_players() {
    let (mut alice, alice_handoffs) = recording_player("alice", &[1, 1, 1, 5, 2, 3]);
    let (mut bob, bob_handoffs) = recording_player("bob", &[5, 2]);

    alice.reject().unwrap();
    alice.roll().unwrap();
    alice.keep(&[0, 1, 2, 3]).unwrap();
    alice.bank().unwrap();

    let (dice, score) = alice_handoffs.borrow()[0];
    bob.accept(dice, score).unwrap();
    bob.roll().unwrap();
    bob.keep(&[0]).unwrap();
    bob.bank().unwrap();

    assert_eq!(alice.score(), 350);
    assert_eq!(bob.score(), 400);
    assert_eq!(*bob_handoffs.borrow(), vec![(1, 400)]);
}

#[test]
fn test_full_turn_with_hot_dice() {
    let (mut player, handoffs) = recording_player(
        "test",
        &[
            1, 2, 3, 4, 5, 6, // straight
            5, 5, 5, 2, 3, 4, // three fives
            1, 6, 6, // a one
            4, 4, // bust
        ],
    );
    player.reject().unwrap();

    player.roll().unwrap();
    assert_eq!(player.keep(&[0, 1, 2, 3, 4, 5]), Ok(1500));
    assert_eq!(player.active_turn().unwrap().dice_available(), 6);

    player.roll().unwrap();
    assert_eq!(player.keep(&[0, 1, 2]), Ok(500));

    player.roll().unwrap();
    assert_eq!(player.keep(&[0]), Ok(100));
    assert_eq!(player.active_turn().unwrap().result(), 2100);

    player.roll().unwrap();
    assert!(player.active_turn().is_none());
    assert_eq!(player.score(), 0);
    assert_eq!(player.turns()[0].rolls().len(), 4);
    assert_eq!(*handoffs.borrow(), vec![(0, 0)]);
}

#[test]
fn test_keep_groups_recorded_for_audit() {
    let mut turn = Turn::try_from(TurnStart::continuation(3, 250).unwrap()).unwrap();
    turn.roll(&mut ScriptedDice::new(vec![1, 5, 3])).unwrap();
    turn.keep(&[0, 1]).unwrap();
    assert_eq!(
        turn.keep_groups(),
        &[
            KeepGroup {
                dice: Roll::from([1]),
                score: 100,
            },
            KeepGroup {
                dice: Roll::from([5]),
                score: 50,
            },
        ]
    );
    let summary = turn.bank().unwrap();
    assert_eq!(summary.score, 400);
    assert_eq!(summary.dice_available, 1);
}

#[test]
fn test_summary_serializes() {
    let mut turn = Turn::new();
    turn.roll(&mut ScriptedDice::new(vec![1, 1, 1, 2, 3, 4])).unwrap();
    turn.keep(&[0, 1, 2]).unwrap();
    let summary = turn.bank().unwrap();

    let json = serde_json::to_string(&summary).unwrap();
    let back: farkle::TurnSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
    assert!(json.contains("\"Banked\""));
}

#[test]
fn test_errors_serialize() {
    let err = PlayerError::Turn(TurnError::UnresolvableSelection(vec![4]));
    let json = serde_json::to_string(&err).unwrap();
    let back: PlayerError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}

#[test]
fn test_random_player_plays_to_completion() {
    let handoffs: Handoffs = Rc::default();
    let sink = Rc::clone(&handoffs);
    let mut player = Player::new("random", RandomDie::new(), move |d: usize, s: Points| {
        sink.borrow_mut().push((d, s))
    });

    for _ in 0..20 {
        player.reject().unwrap();
        player.roll().unwrap();
        if let Some(turn) = player.active_turn() {
            let roll = turn.current_roll().unwrap().clone();
            let best = eval(&roll).remove(0);
            player.keep(&best.positions).unwrap();
            player.bank().unwrap();
        }
    }

    assert_eq!(player.turns().len(), 20);
    assert_eq!(handoffs.borrow().len(), 20);
    let total: Points = handoffs.borrow().iter().map(|&(_, s)| s).sum();
    assert_eq!(player.score(), total);
}
