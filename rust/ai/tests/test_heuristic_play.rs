use holdem_ai::{create_ai, HeuristicBot};
use holdem_engine::bankroll::MemoryBankStore;
use holdem_engine::config::TableConfig;
use holdem_engine::engine::{AdvanceOutcome, Engine};
use holdem_engine::errors::GameError;
use holdem_engine::game::Stage;
use holdem_engine::player::PlayerAction;
use holdem_engine::policy::BotPolicy;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn table(bots: usize, seed: u64) -> Engine {
    let cfg = TableConfig {
        bot_count: bots,
        ..TableConfig::default()
    };
    Engine::new(cfg, Some(seed), Box::new(MemoryBankStore::new())).unwrap()
}

#[test]
fn heuristic_bots_finish_every_hand() {
    let bot = HeuristicBot::new();
    for seed in 0..40 {
        let mut e = table(3, seed);
        for _ in 0..5 {
            match e.start_hand() {
                Ok(_) => {}
                Err(GameError::NotEnoughPlayers) => break,
                Err(err) => panic!("seed {}: {}", seed, err),
            }
            loop {
                match e.advance_bots(&bot).unwrap() {
                    AdvanceOutcome::Settled => break,
                    AdvanceOutcome::HumanTurn => {
                        e.submit_call_or_check(0).unwrap();
                    }
                    AdvanceOutcome::StepLimit => panic!("seed {}: step limit", seed),
                }
            }
            let s = e.state();
            assert_eq!(s.pot(), 0);
            assert!(s.outcome().is_some());
        }
    }
}

#[test]
fn heuristic_bot_only_returns_sane_raises() {
    let bot = HeuristicBot::new();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut e = table(2, 3);
    e.start_hand().unwrap();
    let s = e.state();
    let seat = s.acting_seat();
    for _ in 0..200 {
        if let PlayerAction::RaiseTo(to) = bot.decide(s, seat, &mut rng) {
            assert!(to >= s.min_raise_to());
            assert!(to <= s.min_raise_to() + 3 * s.big_blind());
        }
    }
}

#[test]
fn pocket_aces_never_fold_preflop() {
    let bot = HeuristicBot::new();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    for seed in 0..200 {
        let mut e = table(1, seed);
        e.start_hand().unwrap();
        let s = e.state();
        assert_eq!(s.stage(), Stage::Preflop);
        let seat = s.acting_seat();
        let hole = &s.players()[seat].hole;
        if hole[0].rank == hole[1].rank && hole[0].rank.value() == 14 {
            assert_ne!(bot.decide(s, seat, &mut rng), PlayerAction::Fold);
        }
    }
}

#[test]
fn factory_policies_drive_the_engine() {
    for name in ["heuristic", "calling-station"] {
        let policy = create_ai(name).unwrap();
        let mut e = table(1, 21);
        e.start_hand().unwrap();
        while e.advance_bots(policy.as_ref()).unwrap() == AdvanceOutcome::HumanTurn {
            e.submit_call_or_check(0).unwrap();
        }
        assert!(e.state().is_settled(), "{} left the hand open", name);
    }
}
