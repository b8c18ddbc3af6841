//! Flavor text the computer says before each of its moves.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use rand::{seq::SliceRandom, Rng};

/// Stock phrases, one used per computer move.
pub const COMPUTER_PHRASES: [&str; 12] = [
    "Such a bad move! I'm gonna win!",
    "You're so bad at this!",
    "Is this your first time playing?",
    "I can't believe you're doing this!",
    "I don't even know why I'm playing with you!",
    "My grandma could do better than this!",
    "I'm gonna win this game!",
    "I don't even have an AI and I'm still winning!",
    "You should give up!",
    "Why are you even trying?",
    "What's the point of playing if you're gonna lose anyway?",
    "Really? What's your IQ?",
];

/// A shuffled deck of phrases. Each phrase is handed out at most once.
#[derive(Debug, Clone, Default)]
pub struct Taunts {
    remaining: Vec<String>,
}

impl Taunts {
    /// The stock phrases in random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut remaining: Vec<String> = COMPUTER_PHRASES.iter().map(|p| p.to_string()).collect();
        remaining.shuffle(rng);
        Self { remaining }
    }

    /// Phrases handed out in the given order, first to last.
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut remaining: Vec<String> = phrases.into_iter().map(Into::into).collect();
        remaining.reverse();
        Self { remaining }
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Take the next phrase, or `None` once the deck is used up.
    pub fn next_phrase(&mut self) -> Option<String> {
        self.remaining.pop()
    }
}
