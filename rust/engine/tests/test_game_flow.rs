use holdem_engine::bankroll::MemoryBankStore;
use holdem_engine::config::TableConfig;
use holdem_engine::engine::{AdvanceOutcome, Engine};
use holdem_engine::errors::GameError;
use holdem_engine::game::{GameState, Stage};
use holdem_engine::logger::RecordedAction;
use holdem_engine::player::PlayerAction;
use holdem_engine::policy::{BotPolicy, CallingStation};
use holdem_engine::showdown::{Award, HandOutcome};
use rand::RngCore;

struct AlwaysFold;

impl BotPolicy for AlwaysFold {
    fn decide(&self, _state: &GameState, _seat: usize, _rng: &mut dyn RngCore) -> PlayerAction {
        PlayerAction::Fold
    }

    fn name(&self) -> &str {
        "AlwaysFold"
    }
}

fn engine_with(bots: usize) -> Engine {
    let cfg = TableConfig {
        bot_count: bots,
        ..TableConfig::default()
    };
    Engine::new(cfg, Some(42), Box::new(MemoryBankStore::new())).unwrap()
}

fn total_chips(s: &GameState) -> u32 {
    s.players().iter().map(|p| p.bank).sum::<u32>() + s.pot()
}

#[test]
fn lobby_state_before_first_hand() {
    let e = engine_with(3);
    let s = e.state();
    assert_eq!(s.hand_number(), 0);
    assert!(s.is_settled());
    assert_eq!(s.players().len(), 4);
    assert_eq!(e.human_bank(), 2000);
}

#[test]
fn blinds_are_posted_and_action_starts_after_big_blind() {
    let mut e = engine_with(3);
    e.start_hand().unwrap();
    let s = e.state();

    assert_eq!(s.hand_number(), 1);
    assert_eq!(s.dealer_seat(), 0);
    assert_eq!(s.stage(), Stage::Preflop);
    assert_eq!(s.pot(), 30);
    assert_eq!(s.current_bet(), 20);
    assert_eq!(s.min_raise(), 20);
    assert_eq!(s.players()[1].bet, 10);
    assert_eq!(s.players()[1].bank, 1990);
    assert_eq!(s.players()[2].bet, 20);
    assert_eq!(s.acting_seat(), 3);
    assert!(s.community().is_empty());
    assert!(s.players().iter().all(|p| p.hole.len() == 2));
    assert_eq!(e.deck_remaining(), 52 - 8);

    let blinds: Vec<_> = s.actions().iter().map(|a| (a.seat, a.action)).collect();
    assert_eq!(
        blinds,
        vec![
            (1, RecordedAction::SmallBlind(10)),
            (2, RecordedAction::BigBlind(20))
        ]
    );
}

#[test]
fn heads_up_button_and_blind_order() {
    let mut e = engine_with(1);
    e.start_hand().unwrap();
    let s = e.state();
    assert_eq!(s.dealer_seat(), 0);
    assert_eq!(s.players()[1].bet, 10);
    assert_eq!(s.players()[0].bet, 20);
    assert_eq!(s.acting_seat(), 1);
}

#[test]
fn actions_before_any_hand_are_rejected() {
    let mut e = engine_with(2);
    assert_eq!(e.submit_fold(0).unwrap_err(), GameError::NoHandInProgress);
    assert_eq!(
        e.advance_bots(&CallingStation).unwrap_err(),
        GameError::NoHandInProgress
    );
}

#[test]
fn out_of_turn_submission_leaves_state_untouched() {
    let mut e = engine_with(3);
    e.start_hand().unwrap();
    let err = e.submit_call_or_check(0).unwrap_err();
    assert_eq!(err, GameError::NotPlayersTurn { expected: 3, actual: 0 });
    assert_eq!(e.state().pot(), 30);
    assert_eq!(e.state().actions().len(), 2);
}

#[test]
fn unknown_seat_is_rejected() {
    let mut e = engine_with(2);
    e.start_hand().unwrap();
    assert_eq!(e.submit_fold(9).unwrap_err(), GameError::UnknownSeat(9));
}

#[test]
fn zero_raise_is_rejected_and_human_is_re_prompted() {
    let mut e = engine_with(3);
    e.start_hand().unwrap();
    assert_eq!(e.advance_bots(&CallingStation).unwrap(), AdvanceOutcome::HumanTurn);
    let err = e.submit_raise(0, 0).unwrap_err();
    assert_eq!(err, GameError::InvalidRaiseAmount { amount: 0 });
    assert_eq!(e.state().acting_seat(), 0);
    assert_eq!(e.state().pot(), 50);
}

#[test]
fn low_raise_is_promoted_to_the_minimum() {
    let mut e = engine_with(3);
    e.start_hand().unwrap();
    e.advance_bots(&CallingStation).unwrap();
    e.submit_raise(0, 30).unwrap();
    let s = e.state();
    assert_eq!(s.current_bet(), 40);
    assert_eq!(
        s.actions().last().map(|a| a.action),
        Some(RecordedAction::Raise { to: 40, paid: 40 })
    );
}

#[test]
fn raise_reopens_action_for_everyone_else() {
    let mut e = engine_with(3);
    e.start_hand().unwrap();
    e.advance_bots(&CallingStation).unwrap();
    e.submit_raise(0, 100).unwrap();
    {
        let s = e.state();
        assert_eq!(s.current_bet(), 100);
        assert_eq!(s.min_raise(), 80);
        assert_eq!(s.last_aggressor(), Some(0));
        assert_eq!(s.acting_seat(), 1);
    }

    assert_eq!(e.advance_bots(&CallingStation).unwrap(), AdvanceOutcome::HumanTurn);
    let s = e.state();
    assert_eq!(s.stage(), Stage::Flop);
    assert_eq!(s.community().len(), 3);
    assert_eq!(s.pot(), 400);
    assert_eq!(s.current_bet(), 0);
    assert!(s.players().iter().all(|p| p.bet == 0));
}

#[test]
fn last_player_standing_wins_without_showdown() {
    let mut e = engine_with(3);
    e.start_hand().unwrap();
    assert_eq!(e.advance_bots(&AlwaysFold).unwrap(), AdvanceOutcome::HumanTurn);
    e.submit_fold(0).unwrap();
    assert_eq!(e.advance_bots(&AlwaysFold).unwrap(), AdvanceOutcome::Settled);

    let s = e.state();
    assert!(s.is_settled());
    assert_eq!(s.stage(), Stage::Preflop);
    assert_eq!(s.pot(), 0);
    assert_eq!(
        s.outcome(),
        Some(&HandOutcome::FoldWin(Award { seat: 2, amount: 30 }))
    );
    assert_eq!(s.players()[2].bank, 2010);
    assert_eq!(total_chips(s), 8000);
}

#[test]
fn streets_deal_three_one_one_then_showdown() {
    let mut e = engine_with(1);
    e.start_hand().unwrap();
    let mut boards = Vec::new();
    while e.advance_bots(&CallingStation).unwrap() == AdvanceOutcome::HumanTurn {
        boards.push((e.state().stage(), e.state().community().len()));
        e.submit_call_or_check(0).unwrap();
    }
    assert_eq!(
        boards,
        vec![
            (Stage::Preflop, 0),
            (Stage::Flop, 3),
            (Stage::Turn, 4),
            (Stage::River, 5)
        ]
    );

    let s = e.state();
    assert_eq!(s.stage(), Stage::Showdown);
    assert_eq!(s.community().len(), 5);
    assert_eq!(e.deck_remaining(), 52 - 4 - 5);
    assert!(matches!(s.outcome(), Some(HandOutcome::Showdown { .. })));
    assert_eq!(s.pot(), 0);
    assert_eq!(total_chips(s), 4000);
    assert!(s.category_name(0).is_some());
    assert!(s.category_name(1).is_some());
}

#[test]
fn settled_hand_rejects_further_actions() {
    let mut e = engine_with(2);
    e.start_hand().unwrap();
    while e.advance_bots(&CallingStation).unwrap() == AdvanceOutcome::HumanTurn {
        e.submit_call_or_check(0).unwrap();
    }
    let before = e.state().players().iter().map(|p| p.bank).collect::<Vec<_>>();
    assert_eq!(e.submit_fold(0).unwrap_err(), GameError::HandAlreadyComplete);
    assert_eq!(e.advance_bots(&CallingStation).unwrap(), AdvanceOutcome::Settled);
    let after = e.state().players().iter().map(|p| p.bank).collect::<Vec<_>>();
    assert_eq!(before, after);
}

#[test]
fn new_hand_cannot_start_mid_hand() {
    let mut e = engine_with(2);
    e.start_hand().unwrap();
    assert_eq!(e.start_hand().unwrap_err(), GameError::HandInProgress);
}

#[test]
fn button_rotates_between_hands() {
    let mut e = engine_with(2);
    for expected_dealer in [0, 1, 2, 0] {
        e.start_hand().unwrap();
        assert_eq!(e.state().dealer_seat(), expected_dealer);
        while e.advance_bots(&CallingStation).unwrap() == AdvanceOutcome::HumanTurn {
            e.submit_fold(0).unwrap();
        }
    }
}

#[test]
fn short_human_call_goes_all_in_and_hand_runs_out() {
    let cfg = TableConfig::default();
    let mut e = Engine::new(cfg, Some(3), Box::new(MemoryBankStore::with_value(15))).unwrap();
    e.start_hand().unwrap();
    let total = total_chips(e.state());
    assert_eq!(e.advance_bots(&CallingStation).unwrap(), AdvanceOutcome::HumanTurn);
    e.submit_call_or_check(0).unwrap();
    assert!(e.state().players()[0].all_in);
    assert_eq!(e.state().players()[0].bank, 0);

    assert_eq!(e.advance_bots(&CallingStation).unwrap(), AdvanceOutcome::Settled);
    assert_eq!(e.state().community().len(), 5);
    assert_eq!(total_chips(e.state()), total);
}

#[test]
fn broke_human_sits_out() {
    let cfg = TableConfig {
        bot_count: 2,
        ..TableConfig::default()
    };
    let mut e = Engine::new(cfg, Some(5), Box::new(MemoryBankStore::with_value(0))).unwrap();
    e.start_hand().unwrap();
    let human = &e.state().players()[0];
    assert!(human.folded);
    assert!(human.hole.is_empty());
    assert_eq!(e.advance_bots(&CallingStation).unwrap(), AdvanceOutcome::Settled);
}

#[test]
fn broke_human_against_one_bot_cannot_deal() {
    let cfg = TableConfig {
        bot_count: 1,
        rebuy_bots: false,
        ..TableConfig::default()
    };
    let mut e = Engine::new(cfg, Some(5), Box::new(MemoryBankStore::with_value(0))).unwrap();
    assert_eq!(e.start_hand().unwrap_err(), GameError::NotEnoughPlayers);
    assert_eq!(e.state().hand_number(), 0);
}

#[test]
fn step_cap_stops_the_turn_loop() {
    let cfg = TableConfig {
        max_auto_steps: 1,
        ..TableConfig::default()
    };
    let mut e = Engine::new(cfg, Some(1), Box::new(MemoryBankStore::new())).unwrap();
    e.start_hand().unwrap();
    assert_eq!(e.advance_bots(&CallingStation).unwrap(), AdvanceOutcome::StepLimit);
    assert!(!e.state().is_settled());
}

#[test]
fn same_seed_replays_the_same_hand() {
    let mut a = engine_with(3);
    let mut b = engine_with(3);
    a.start_hand().unwrap();
    b.start_hand().unwrap();
    let holes = |e: &Engine| {
        e.state()
            .players()
            .iter()
            .map(|p| p.hole.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(holes(&a), holes(&b));
}
