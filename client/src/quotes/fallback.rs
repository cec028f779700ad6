//! Built-in quotes shown when every live source fails.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

use rand::Rng;

use super::model::Quote;

/// `(content, author)` pairs, all non-empty.
pub const FALLBACK_QUOTES: [(&str, &str); 8] = [
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    ("Innovation distinguishes between a leader and a follower.", "Steve Jobs"),
    ("Life is what happens to you while you're busy making other plans.", "John Lennon"),
    ("The future belongs to those who believe in the beauty of their dreams.", "Eleanor Roosevelt"),
    ("It is during our darkest moments that we must focus to see the light.", "Aristotle"),
    ("The way to get started is to quit talking and begin doing.", "Walt Disney"),
    ("Don't let yesterday take up too much of today.", "Will Rogers"),
    ("You learn more from failure than from success.", "Unknown"),
];

/// Pick one built-in quote uniformly at random.
pub fn pick_fallback<R: Rng + ?Sized>(rng: &mut R) -> Quote {
    let (content, author) = FALLBACK_QUOTES[rng.random_range(0..FALLBACK_QUOTES.len())];
    Quote::builtin(content, author)
}

/// Whether `quote` is one of the built-in entries.
pub fn is_fallback(quote: &Quote) -> bool {
    FALLBACK_QUOTES
        .iter()
        .any(|(content, author)| quote.content() == *content && quote.author() == *author)
}
