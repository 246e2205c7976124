//! # Play Command
//!
//! Interactive session at a single table: the human sits in seat 0 and
//! types actions at the prompt, the bots are driven by the engine's turn
//! loop between prompts.
//!
//! - Rejected actions are reported on stderr and the same prompt repeats
//! - `q` (or end of input) leaves the table; an unfinished hand is abandoned
//! - The bank is loaded from and saved to the bank file through the engine
//! - An optional JSONL hand history records every finished hand

use crate::bank_file::FileBankStore;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_table};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use holdem_ai::create_ai;
use holdem_engine::cards::Card;
use holdem_engine::engine::{AdvanceOutcome, Engine};
use holdem_engine::errors::GameError;
use holdem_engine::game::{GameState, Stage};
use holdem_engine::logger::HandLogger;
use holdem_engine::player::HUMAN_SEAT;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Flags given to `holdem play`. Unset values fall back to the layered
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub bots: Option<usize>,
    pub hands: Option<u32>,
    pub seed: Option<u64>,
    pub bank_file: Option<PathBuf>,
    pub history: Option<PathBuf>,
    pub ai: String,
}

/// Handle the play command.
///
/// # Errors
///
/// - `CliError::InvalidInput` for zero hands or an unknown bot policy
/// - `CliError::Config` when the configuration does not resolve
/// - `CliError::Engine` for fatal engine errors
/// - `CliError::Stalled` when the turn loop hits its step limit
/// - `CliError::Io` for terminal, bank or history I/O failures
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = args.hands.unwrap_or(1);
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let mut cfg = config::load()?;
    if let Some(bots) = args.bots {
        cfg.bots = bots;
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(path) = args.bank_file {
        cfg.bank_file = path;
    }
    config::validate(&cfg)?;

    let policy = create_ai(&args.ai)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown bot policy '{}'", args.ai)))?;
    let store = FileBankStore::new(&cfg.bank_file);
    let mut engine = Engine::new(cfg.table(), cfg.seed, Box::new(store))?;
    let mut history = args.history.map(HandLogger::create).transpose()?;

    writeln!(
        out,
        "play: bots={} hands={} seed={} ai={}",
        cfg.bots,
        hands,
        engine.seed(),
        policy.name()
    )?;
    writeln!(out, "Bank: {}", engine.human_bank())?;

    let mut played = 0u32;
    'session: for _ in 0..hands {
        match engine.start_hand() {
            Ok(_) => {}
            Err(GameError::NotEnoughPlayers) => {
                ui::display_warning(
                    err,
                    "not enough chips at the table to deal; run `holdem reset-bank`",
                )?;
                break;
            }
            Err(e) => return Err(e.into()),
        }

        let state = engine.state();
        writeln!(out)?;
        writeln!(out, "Hand {}", state.hand_number())?;
        writeln!(
            out,
            "Your cards: {}",
            format_board(&state.players()[HUMAN_SEAT].hole)
        )?;
        let mut shown = 0;

        loop {
            let outcome = engine.advance_bots(policy.as_ref())?;
            shown = print_new_actions(engine.state(), shown, out)?;
            match outcome {
                AdvanceOutcome::Settled => break,
                AdvanceOutcome::StepLimit => {
                    ui::write_error(err, "automatic play stopped making progress")?;
                    return Err(CliError::Stalled(engine.state().hand_number()));
                }
                AdvanceOutcome::HumanTurn => {
                    if !human_turn(&mut engine, out, err, stdin)? {
                        writeln!(out, "Leaving the table.")?;
                        break 'session;
                    }
                    shown = print_new_actions(engine.state(), shown, out)?;
                }
            }
        }

        print_result(&engine, out)?;
        played += 1;
        if let Some(log) = history.as_mut() {
            let id = log.next_id();
            log.write(&engine.hand_record(id))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Hands played: {}", played)?;
    writeln!(out, "Bank: {}", engine.human_bank())?;
    Ok(())
}

/// Prompts until the engine accepts an action. Returns `false` when the
/// player quits or input ends.
fn human_turn(
    engine: &mut Engine,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    for line in format_table(engine.state(), false) {
        writeln!(out, "{}", line)?;
    }
    loop {
        let s = engine.state();
        ui::prompt(
            out,
            &format!(
                "To call {} | min raise to {} | fold, call/check, raise <to>, q: ",
                s.to_call(HUMAN_SEAT),
                s.min_raise_to()
            ),
        )?;
        let Some(input) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(false);
        };
        match parse_player_action(&input) {
            ParseResult::Action(action) => match engine.submit(HUMAN_SEAT, action) {
                Ok(_) => return Ok(true),
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            ParseResult::Quit => return Ok(false),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn print_new_actions(
    state: &GameState,
    shown: usize,
    out: &mut dyn Write,
) -> Result<usize, CliError> {
    let actions = state.actions();
    let mut stage = shown
        .checked_sub(1)
        .and_then(|i| actions.get(i))
        .map(|a| a.stage);
    for record in actions.iter().skip(shown) {
        if stage != Some(record.stage) {
            writeln!(
                out,
                "-- {} {}",
                record.stage.name(),
                format_board(street_board(state, record.stage))
            )?;
            stage = Some(record.stage);
        }
        let name = &state.players()[record.seat].name;
        writeln!(out, "  {}", format_action(name, &record.action))?;
    }
    Ok(actions.len())
}

/// Community cards visible on the named street.
fn street_board(state: &GameState, stage: Stage) -> &[Card] {
    let n = match stage {
        Stage::Preflop => 0,
        Stage::Flop => 3,
        Stage::Turn => 4,
        Stage::River | Stage::Showdown => 5,
    };
    &state.community()[..n.min(state.community().len())]
}

fn print_result(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    let state = engine.state();
    let Some(outcome) = state.outcome() else {
        return Ok(());
    };
    if !state.community().is_empty() {
        writeln!(out, "Board: {}", format_board(state.community()))?;
    }
    for p in state.players() {
        if let Some(category) = state.category_name(p.seat) {
            writeln!(out, "  {} shows {}: {}", p.name, format_board(&p.hole), category)?;
        }
    }
    writeln!(out, "{}", engine.describe(outcome))?;
    writeln!(out, "Your bank: {}", engine.human_bank())?;
    Ok(())
}
