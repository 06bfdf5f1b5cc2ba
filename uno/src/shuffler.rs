//! Card permutations used to shuffle decks.
//!
//! A [`Shuffler`] rearranges a slice of cards in place. The hand engine keeps
//! hold of its shuffler for the whole round, since the discard pile is
//! reshuffled into the draw pile whenever the latter runs out.
//!
//! - [`StandardShuffler`] is a Fisher-Yates shuffle over a ChaCha RNG, seeded
//!   from entropy or from a fixed `u64` for reproducible rounds.
//! - [`StackedShuffler`] arranges known cards on top once, for building exact
//!   scenarios.
//! - Any `FnMut(&mut [Card])` closure is a shuffler too, which makes recording
//!   or replaying permutations straightforward.

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [Card]);
}

impl<F> Shuffler for F
where
    F: FnMut(&mut [Card]),
{
    fn shuffle(&mut self, cards: &mut [Card]) {
        self(cards)
    }
}

#[derive(Clone, Debug)]
pub struct StandardShuffler {
    rng: ChaCha8Rng,
}

impl StandardShuffler {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Same seed, same sequence of shuffles.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for StandardShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for StandardShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Moves a list of cards to the front of the deck, in order, the first time
/// it shuffles. Every later shuffle leaves the cards as they are.
///
/// Cards of the list that are not found in the deck are skipped. All other
/// cards keep their relative order.
#[derive(Clone, Debug, Default)]
pub struct StackedShuffler {
    stack: Option<Vec<Card>>,
}

impl StackedShuffler {
    pub fn new(stack: Vec<Card>) -> Self {
        Self { stack: Some(stack) }
    }
}

impl Shuffler for StackedShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        let Some(stack) = self.stack.take() else {
            return;
        };

        let mut placed = 0;
        for wanted in stack {
            if let Some(offset) = cards[placed..].iter().position(|card| *card == wanted) {
                cards[placed..=placed + offset].rotate_right(1);
                placed += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, ColoredCard};
    use crate::deck::Deck;

    fn deck_cards() -> Vec<Card> {
        Deck::new().iter().copied().collect()
    }

    #[test]
    fn seeded_shuffles_are_reproducible() {
        let mut first = deck_cards();
        let mut second = deck_cards();

        StandardShuffler::seeded(42).shuffle(&mut first);
        StandardShuffler::seeded(42).shuffle(&mut second);

        assert_eq!(first, second);
        assert_ne!(first, deck_cards());
    }

    #[test]
    fn different_seeds_give_different_orders() {
        let mut first = deck_cards();
        let mut second = deck_cards();

        StandardShuffler::seeded(1).shuffle(&mut first);
        StandardShuffler::seeded(2).shuffle(&mut second);

        assert_ne!(first, second);
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut cards = deck_cards();
        StandardShuffler::new().shuffle(&mut cards);

        let mut original = deck_cards();
        let key = |card: &Card| card.to_string();
        cards.sort_by_key(key);
        original.sort_by_key(key);
        assert_eq!(cards, original);
    }

    #[test]
    fn stacked_shuffler_moves_cards_to_the_front_once() {
        let red_5 = Card::Colored(CardColor::Red, ColoredCard::Number(5));
        let mut shuffler = StackedShuffler::new(vec![Card::WildDraw, red_5, Card::WildDraw]);

        let mut cards = deck_cards();
        shuffler.shuffle(&mut cards);

        assert_eq!(&cards[..3], &[Card::WildDraw, red_5, Card::WildDraw]);
        assert_eq!(cards.len(), 108);

        let before = cards.clone();
        shuffler.shuffle(&mut cards);
        assert_eq!(cards, before);
    }

    #[test]
    fn stacked_shuffler_skips_missing_cards() {
        let mut shuffler = StackedShuffler::new(vec![Card::Wild, Card::Wild]);
        let mut cards = vec![
            Card::Colored(CardColor::Blue, ColoredCard::Skip),
            Card::Wild,
        ];

        shuffler.shuffle(&mut cards);

        assert_eq!(
            cards,
            vec![Card::Wild, Card::Colored(CardColor::Blue, ColoredCard::Skip)]
        );
    }

    #[test]
    fn closures_record_what_they_shuffle() {
        let mut seen = Vec::new();
        let mut recorder = |cards: &mut [Card]| {
            cards.reverse();
            seen.push(cards.to_vec());
        };

        let mut deck = Deck::new();
        deck.shuffle(&mut recorder);

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], deck.iter().copied().collect::<Vec<_>>());
    }
}
