use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, error, info, warn};

use crate::bankroll::BankStore;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{GameState, Stage};
use crate::logger::{HandRecord, RecordedAction, ShowdownInfo};
use crate::player::{Player, PlayerAction, HUMAN_SEAT};
use crate::policy::BotPolicy;
use crate::rules::validate_action;
use crate::showdown::{settle_showdown, HandOutcome};

/// Upper bound on the chips at one table; every bank, bet and pot fits in a
/// `u32` as long as the table total does.
const CHIP_LIMIT: u64 = u32::MAX as u64;

/// Where an [`Engine::advance_bots`] pass stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The human seat must act before anything else can happen
    HumanTurn,
    /// The hand is over
    Settled,
    /// The automatic step cap was hit; the state is left as it was
    StepLimit,
}

/// The betting engine and session owner.
///
/// Holds the table configuration, the deck, the bot RNG, the injected bank
/// store and the state of the current (or last) hand. Every transition goes
/// through `&mut self`; there is no other writer.
///
/// # Examples
///
/// ```
/// use holdem_engine::bankroll::MemoryBankStore;
/// use holdem_engine::config::TableConfig;
/// use holdem_engine::engine::{AdvanceOutcome, Engine};
/// use holdem_engine::policy::CallingStation;
///
/// let mut engine = Engine::new(
///     TableConfig::default(),
///     Some(7),
///     Box::new(MemoryBankStore::new()),
/// )
/// .unwrap();
/// engine.start_hand().unwrap();
///
/// while engine.advance_bots(&CallingStation).unwrap() == AdvanceOutcome::HumanTurn {
///     engine.submit_call_or_check(0).unwrap();
/// }
/// assert!(engine.state().is_settled());
/// ```
pub struct Engine {
    config: TableConfig,
    seed: u64,
    deck: Deck,
    rng: ChaCha20Rng,
    store: Box<dyn BankStore>,
    state: GameState,
}

impl Engine {
    /// Builds a session. The human bank comes from `store`, falling back to
    /// the configured starting bank; a missing seed draws a random one.
    pub fn new(
        config: TableConfig,
        seed: Option<u64>,
        store: Box<dyn BankStore>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let seed = seed.unwrap_or_else(rand::random);
        let human_bank = store.load().unwrap_or(config.starting_bank);
        let bot_chips = u64::from(config.starting_bank) * config.bot_count as u64;
        if u64::from(human_bank) + bot_chips > CHIP_LIMIT {
            return Err(GameError::InvalidConfig(format!(
                "stored bank {} does not fit at this table; reset the bank",
                human_bank
            )));
        }

        let mut players = Vec::with_capacity(config.seat_count());
        players.push(Player::human(human_bank));
        for seat in 1..=config.bot_count {
            players.push(Player::bot(seat, config.starting_bank));
        }
        // the first hand rotates the button onto seat 0
        let dealer = players.len() - 1;
        let mut state = GameState::new(0, players, dealer, config.big_blind);
        state.settled = true;

        Ok(Self {
            deck: Deck::new_with_seed(seed),
            rng: ChaCha20Rng::seed_from_u64(seed.wrapping_add(1)),
            config,
            seed,
            store,
            state,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn human_bank(&self) -> u32 {
        self.state.players[HUMAN_SEAT].bank
    }

    fn hand_in_progress(&self) -> bool {
        self.state.hand_number > 0 && !self.state.settled
    }

    /// Deals a new hand: rotates the button, shuffles, deals two cards to
    /// every funded seat and posts the blinds.
    ///
    /// Broke seats sit the hand out (bots are refilled first when the table
    /// allows rebuys).
    pub fn start_hand(&mut self) -> Result<&GameState, GameError> {
        if self.hand_in_progress() {
            return Err(GameError::HandInProgress);
        }
        let cfg = &self.config;

        let mut players = self.state.players.clone();
        let mut chips = self.state.table_chips();
        for p in &mut players {
            p.reset_for_hand();
            if p.is_bot && p.bank == 0 && cfg.rebuy_bots {
                if chips + u64::from(cfg.starting_bank) > CHIP_LIMIT {
                    warn!(seat = p.seat, chips, "bot rebuy skipped: table chip limit");
                    continue;
                }
                debug!(seat = p.seat, bank = cfg.starting_bank, "bot rebuy");
                p.bank = cfg.starting_bank;
                chips += u64::from(cfg.starting_bank);
            }
        }
        if players.iter().filter(|p| p.bank > 0).count() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }
        for p in players.iter_mut().filter(|p| p.bank == 0) {
            p.folded = true;
        }

        let dealer = (self.state.dealer_seat + 1) % players.len();
        let mut state = GameState::new(
            self.state.hand_number + 1,
            players,
            dealer,
            cfg.big_blind,
        );

        self.deck.reset();
        for p in state.players.iter_mut().filter(|p| !p.folded) {
            p.hole.push(self.deck.draw()?);
            p.hole.push(self.deck.draw()?);
        }

        let sb_seat = state.next_seat(dealer);
        let sb = state.post_blind(sb_seat, cfg.small_blind);
        state.record(sb_seat, RecordedAction::SmallBlind(sb));
        let bb_seat = state.next_seat(sb_seat);
        let bb = state.post_blind(bb_seat, cfg.big_blind);
        state.record(bb_seat, RecordedAction::BigBlind(bb));

        state.current_bet = cfg.big_blind;
        state.min_raise = cfg.big_blind;
        state.acting_seat = state.next_seat(bb_seat);

        info!(
            hand = state.hand_number,
            dealer,
            sb_seat,
            bb_seat,
            "hand started"
        );
        self.state = state;
        Ok(&self.state)
    }

    pub fn submit_fold(&mut self, seat: usize) -> Result<&GameState, GameError> {
        self.submit(seat, PlayerAction::Fold)
    }

    pub fn submit_call_or_check(&mut self, seat: usize) -> Result<&GameState, GameError> {
        self.submit(seat, PlayerAction::CallOrCheck)
    }

    /// Raises to `amount` (a raise-to total, not an increment).
    pub fn submit_raise(&mut self, seat: usize, amount: u32) -> Result<&GameState, GameError> {
        self.submit(seat, PlayerAction::RaiseTo(amount))
    }

    /// Applies an externally submitted action for the acting seat.
    ///
    /// Out-of-turn, post-fold and post-settlement submissions are rejected
    /// before anything is mutated.
    pub fn submit(&mut self, seat: usize, action: PlayerAction) -> Result<&GameState, GameError> {
        if self.state.hand_number == 0 {
            return Err(GameError::NoHandInProgress);
        }
        if self.state.settled {
            return Err(GameError::HandAlreadyComplete);
        }
        let player = self.state.player(seat)?;
        if player.folded {
            return Err(GameError::PlayerAlreadyFolded);
        }
        if seat != self.state.acting_seat || !player.can_act() {
            return Err(GameError::NotPlayersTurn {
                expected: self.state.acting_seat,
                actual: seat,
            });
        }
        self.apply(seat, action)?;
        Ok(&self.state)
    }

    /// Runs bot turns and street transitions until the human seat must act
    /// or the hand is settled.
    pub fn advance_bots(&mut self, policy: &dyn BotPolicy) -> Result<AdvanceOutcome, GameError> {
        if self.state.hand_number == 0 {
            return Err(GameError::NoHandInProgress);
        }
        let mut steps = 0;
        loop {
            if self.state.settled {
                return Ok(AdvanceOutcome::Settled);
            }
            if steps >= self.config.max_auto_steps {
                error!(
                    hand = self.state.hand_number,
                    steps,
                    acting = self.state.acting_seat,
                    stage = self.state.stage.name(),
                    "invariant violated: automatic step limit reached"
                );
                return Ok(AdvanceOutcome::StepLimit);
            }
            steps += 1;

            if self.state.is_round_settled() {
                self.advance_street()?;
                continue;
            }
            let seat = self.state.acting_seat;
            let player = &self.state.players[seat];
            if !player.can_act() {
                self.state.acting_seat = self.state.next_seat(seat);
                continue;
            }
            if !player.is_bot {
                return Ok(AdvanceOutcome::HumanTurn);
            }

            let action = policy.decide(&self.state, seat, &mut self.rng);
            if let Err(e) = self.apply(seat, action) {
                if e.is_fatal() {
                    return Err(e);
                }
                warn!(seat, policy = policy.name(), error = %e, "bot action rejected, calling instead");
                self.apply(seat, PlayerAction::CallOrCheck)?;
            }
        }
    }

    /// Restores the human bank to the starting stake and persists it.
    pub fn reset_bank(&mut self) -> Result<(), GameError> {
        if self.hand_in_progress() {
            return Err(GameError::HandInProgress);
        }
        let human = &self.state.players[HUMAN_SEAT];
        let chips = self.state.table_chips() - u64::from(human.bank)
            + u64::from(self.config.starting_bank);
        if chips > CHIP_LIMIT {
            return Err(GameError::InvalidConfig(
                "table chip limit reached; cannot restore the starting bank".into(),
            ));
        }
        self.state.players[HUMAN_SEAT].bank = self.config.starting_bank;
        self.persist_human_bank();
        Ok(())
    }

    /// History record of the current hand.
    pub fn hand_record(&self, hand_id: String) -> HandRecord {
        let s = &self.state;
        let showdown = match &s.outcome {
            Some(HandOutcome::Showdown { awards, category }) => Some(ShowdownInfo {
                winners: awards.iter().map(|a| a.seat).collect(),
                category: category.name().to_string(),
                notes: (awards.len() > 1).then(|| "split pot".to_string()),
            }),
            _ => None,
        };
        HandRecord {
            hand_id,
            seed: Some(self.seed),
            hand_number: s.hand_number,
            dealer: s.dealer_seat,
            actions: s.actions.clone(),
            board: s.community.clone(),
            result: s.outcome.as_ref().map(|o| self.describe(o)),
            ts: None,
            showdown,
        }
    }

    /// One-line summary of a settled hand.
    pub fn describe(&self, outcome: &HandOutcome) -> String {
        let name = |seat: usize| self.state.players[seat].name.as_str();
        match outcome {
            HandOutcome::FoldWin(a) => {
                format!("{} wins {} (everyone folded)", name(a.seat), a.amount)
            }
            HandOutcome::Showdown { awards, category } => {
                let parts: Vec<String> = awards
                    .iter()
                    .map(|a| format!("{} wins {}", name(a.seat), a.amount))
                    .collect();
                format!("{} with {}", parts.join(", "), category.name())
            }
        }
    }

    fn apply(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        let ctx = self.state.betting_context(seat)?;
        let validated = validate_action(&ctx, action)?;
        debug!(
            hand = self.state.hand_number,
            stage = self.state.stage.name(),
            seat,
            action = ?validated,
            "action applied"
        );
        self.state.apply(seat, validated);
        if self.state.settled {
            self.finish_hand();
            return Ok(());
        }
        if self.state.is_round_settled() {
            self.advance_street()
        } else {
            self.state.acting_seat = self.state.next_seat(seat);
            Ok(())
        }
    }

    /// Moves to the next street. A failure here is fatal for the hand, which
    /// is abandoned so the session can deal again.
    fn advance_street(&mut self) -> Result<(), GameError> {
        let result = self.open_next_street();
        if let Err(e) = &result {
            error!(hand = self.state.hand_number, error = %e, "hand abandoned");
            self.state.abandon();
        }
        result
    }

    fn open_next_street(&mut self) -> Result<(), GameError> {
        self.state.end_street();
        let (next, cards) = match self.state.stage {
            Stage::Preflop => (Stage::Flop, 3),
            Stage::Flop => (Stage::Turn, 1),
            Stage::Turn => (Stage::River, 1),
            Stage::River => {
                settle_showdown(&mut self.state)?;
                self.finish_hand();
                return Ok(());
            }
            Stage::Showdown => return Ok(()),
        };
        for _ in 0..cards {
            let card = self.deck.draw()?;
            self.state.community.push(card);
        }
        self.state.stage = next;
        self.state.acting_seat = self.state.next_seat(self.state.dealer_seat);
        debug!(
            hand = self.state.hand_number,
            stage = next.name(),
            board = self.state.community.len(),
            "street opened"
        );
        Ok(())
    }

    fn finish_hand(&mut self) {
        let Some(outcome) = self.state.outcome.clone() else {
            return;
        };
        info!(
            hand = self.state.hand_number,
            result = %self.describe(&outcome),
            "hand settled"
        );
        if outcome.involves(HUMAN_SEAT) {
            self.persist_human_bank();
        }
    }

    fn persist_human_bank(&mut self) {
        let bank = self.state.players[HUMAN_SEAT].bank;
        if let Err(e) = self.store.save(bank) {
            warn!(bank, error = %e, "failed to save bank");
        }
    }
}
