use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashSet;

#[test]
fn fallback_list_has_eight_complete_entries() {
    assert_eq!(FALLBACK_QUOTES.len(), 8);
    for (content, author) in FALLBACK_QUOTES {
        assert!(Quote::new(content, author).is_ok(), "incomplete entry: {content:?}");
    }
}

#[test]
fn pick_fallback_always_returns_a_member() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..200 {
        assert!(is_fallback(&pick_fallback(&mut rng)));
    }
}

#[test]
fn pick_fallback_reaches_every_entry() {
    let mut rng = SmallRng::seed_from_u64(42);
    let seen: HashSet<String> = (0..500)
        .map(|_| pick_fallback(&mut rng).content().to_owned())
        .collect();
    assert_eq!(seen.len(), FALLBACK_QUOTES.len());
}

#[test]
fn is_fallback_rejects_live_quotes() {
    let live = Quote::new("Simplicity is prerequisite for reliability.", "Edsger Dijkstra").unwrap();
    assert!(!is_fallback(&live));
}
