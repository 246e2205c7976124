use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

const CATEGORY_NAMES: [&str; 9] = [
    "High Card",
    "One Pair",
    "Two Pair",
    "Three of a Kind",
    "Straight",
    "Flush",
    "Full House",
    "Four of a Kind",
    "Straight Flush",
];

impl Category {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        CATEGORY_NAMES[self as usize]
    }

    /// Number of meaningful tiebreakers for this category.
    pub fn arity(self) -> usize {
        match self {
            Category::StraightFlush | Category::Straight => 1,
            Category::FourOfAKind | Category::FullHouse => 2,
            Category::ThreeOfAKind | Category::TwoPair => 3,
            Category::OnePair => 4,
            Category::Flush | Category::HighCard => 5,
        }
    }
}

/// Display name for a raw category index, `None` outside `0..=8`.
pub fn category_name(index: u8) -> Option<&'static str> {
    CATEGORY_NAMES.get(index as usize).copied()
}

/// Comparable strength of a five-card hand: `(category, t1, .. t5)`.
///
/// Tiebreakers are rank values (Ace = 14) ordered by significance. Categories
/// that need fewer than five are padded with trailing zeros, so the derived
/// lexicographic ordering treats missing components as 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandScore {
    pub category: Category,
    pub tiebreaks: [u8; 5],
}

impl HandScore {
    fn new(category: Category, ranks: &[u8]) -> Self {
        let mut tiebreaks = [0u8; 5];
        for (slot, &r) in tiebreaks.iter_mut().zip(ranks) {
            *slot = r;
        }
        Self { category, tiebreaks }
    }

    /// The score as a tuple with the category first and only the
    /// meaningful tiebreakers after it.
    pub fn values(&self) -> Vec<u8> {
        let mut v = Vec::with_capacity(6);
        v.push(self.category.index());
        v.extend_from_slice(&self.tiebreaks[..self.category.arity()]);
        v
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category.name(), self.values())
    }
}

pub fn compare_hands(a: &HandScore, b: &HandScore) -> Ordering {
    a.cmp(b)
}

/// Best five-card score available from 5, 6 or 7 cards.
///
/// Every five-card subset is scored and the maximum kept; with seven cards
/// that is C(7,5) = 21 subsets.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandScore, GameError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(GameError::InvalidCardCount(n));
    }
    let mut best: Option<HandScore> = None;
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let score =
                            evaluate_five(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if best.map_or(true, |cur| score > cur) {
                            best = Some(score);
                        }
                    }
                }
            }
        }
    }
    best.ok_or(GameError::InvalidCardCount(n))
}

/// Scores exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> HandScore {
    let mut ranks: [u8; 5] = cards.map(|c| c.rank.value());
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&ranks);

    // (rank, count) ordered by count, then rank, both descending
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &r in &ranks {
        match groups.iter_mut().find(|(gr, _)| *gr == r) {
            Some((_, n)) => *n += 1,
            None => groups.push((r, 1)),
        }
    }
    groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    let singles: Vec<u8> = groups
        .iter()
        .filter(|(_, n)| *n == 1)
        .map(|(r, _)| *r)
        .collect();

    let (top, second) = (groups[0], groups.get(1).copied().unwrap_or((0, 0)));
    if let (true, Some(high)) = (is_flush, straight) {
        return HandScore::new(Category::StraightFlush, &[high]);
    }
    if top.1 == 4 {
        return HandScore::new(Category::FourOfAKind, &[top.0, second.0]);
    }
    if top.1 == 3 && second.1 == 2 {
        return HandScore::new(Category::FullHouse, &[top.0, second.0]);
    }
    if is_flush {
        return HandScore::new(Category::Flush, &ranks);
    }
    if let Some(high) = straight {
        return HandScore::new(Category::Straight, &[high]);
    }
    if top.1 == 3 {
        let mut t = vec![top.0];
        t.extend(&singles);
        return HandScore::new(Category::ThreeOfAKind, &t);
    }
    if top.1 == 2 && second.1 == 2 {
        // groups are sorted, so the first pair is the higher one
        let kicker = singles.first().copied().unwrap_or(0);
        return HandScore::new(Category::TwoPair, &[top.0, second.0, kicker]);
    }
    if top.1 == 2 {
        let mut t = vec![top.0];
        t.extend(&singles);
        return HandScore::new(Category::OnePair, &t);
    }
    HandScore::new(Category::HighCard, &ranks)
}

/// High card of a straight among `ranks`, with the wheel (A-5-4-3-2)
/// scored as 5-high. No other wrap-around counts.
fn straight_high(ranks: &[u8]) -> Option<u8> {
    let mut uniq = ranks.to_vec();
    uniq.sort_unstable_by(|a, b| b.cmp(a));
    uniq.dedup();

    for run in uniq.windows(5) {
        if run.windows(2).all(|w| w[0] == w[1] + 1) {
            return Some(run[0]);
        }
    }
    if [14, 5, 4, 3, 2].iter().all(|r| uniq.contains(r)) {
        return Some(5);
    }
    None
}
