//! Card, board, action and table formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal is expected to cope, and as
//! h d c s otherwise.
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::game::GameState;
use holdem_engine::logger::RecordedAction;
use holdem_engine::player::Player;

/// Unicode suit symbols are assumed on Unix-like systems. On Windows only
/// modern terminals (Windows Terminal, VS Code) get them.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(card.suit))
}

/// Cards in brackets, space separated: `[A♠ K♦ 10♥]`.
pub fn format_board(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

/// One history line such as `Bot 2: raise to 60`.
pub fn format_action(name: &str, action: &RecordedAction) -> String {
    let what = match action {
        RecordedAction::SmallBlind(n) => format!("small blind {}", n),
        RecordedAction::BigBlind(n) => format!("big blind {}", n),
        RecordedAction::Fold => "fold".to_string(),
        RecordedAction::Check => "check".to_string(),
        RecordedAction::Call(n) => format!("call {}", n),
        RecordedAction::Raise { to, .. } => format!("raise to {}", to),
        RecordedAction::AllIn(n) => format!("all-in {}", n),
    };
    format!("{}: {}", name, what)
}

fn seat_status(p: &Player) -> &'static str {
    if p.folded {
        "folded"
    } else if p.all_in {
        "all-in"
    } else {
        ""
    }
}

/// Multi-line table view. Bot hole cards stay hidden unless `reveal` is set.
pub fn format_table(state: &GameState, reveal: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "{} | Board {} | Pot {}",
        state.stage().name(),
        format_board(state.community()),
        state.pot()
    )];
    for p in state.players() {
        let button = if p.seat == state.dealer_seat() { "(D)" } else { "   " };
        let cards = if p.hole.is_empty() {
            String::new()
        } else if p.is_bot && !reveal {
            "[?? ??]".to_string()
        } else {
            format_board(&p.hole)
        };
        lines.push(
            format!(
                "{} {:<6} bank {:>6} bet {:>5} {} {}",
                button,
                p.name,
                p.bank,
                p.bet,
                cards,
                seat_status(p)
            )
            .trim_end()
            .to_string(),
        );
    }
    lines
}
