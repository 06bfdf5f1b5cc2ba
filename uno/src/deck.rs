use std::collections::{vec_deque, VecDeque};

use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, ColoredCard},
    constants::*,
    shuffler::Shuffler,
};

/// An ordered pile of cards.
///
/// Cards are dealt from the front and pushed on top, so `top` is always the
/// most recently pushed card. Both the draw pile (`Deck<Card>`) and the
/// discard pile (`Deck<PlayedCard>`) are decks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck<C = Card>(pub(crate) VecDeque<C>);

impl Deck<Card> {
    /// The standard 108 card deck, unshuffled.
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push_back(Card::Colored(color, ColoredCard::Number(*number)));
            }

            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push_back(Card::Colored(color, ColoredCard::Skip));
            }

            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push_back(Card::Colored(color, ColoredCard::Reverse));
            }

            for _ in 0..DRAW_CARDS_PER_COLOR {
                cards.push_back(Card::Colored(color, ColoredCard::Draw));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push_back(Card::Wild);
        }

        for _ in 0..WILD_DRAW_CARDS_IN_DECK {
            cards.push_back(Card::WildDraw);
        }

        Self(cards)
    }

    pub fn shuffle<S: Shuffler + ?Sized>(&mut self, shuffler: &mut S) {
        shuffler.shuffle(self.0.make_contiguous());
    }

    /// Removes the first colored card, skipping over wild ones.
    pub(crate) fn deal_first_colored(&mut self) -> Option<(CardColor, ColoredCard)> {
        let pos = self.0.iter().position(|x| matches!(x, Card::Colored(_, _)))?;
        match self.0.remove(pos)? {
            Card::Colored(color, card) => Some((color, card)),
            Card::Wild | Card::WildDraw => None,
        }
    }
}

impl Default for Deck<Card> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Deck<C> {
    pub fn empty() -> Self {
        Self(VecDeque::new())
    }

    /// Removes the front card, `None` once the deck is exhausted.
    pub fn deal(&mut self) -> Option<C> {
        self.0.pop_front()
    }

    /// Deals up to `count` cards, fewer if the deck runs out.
    pub fn deal_many(&mut self, count: usize) -> Vec<C> {
        let count = count.min(self.0.len());
        self.0.drain(0..count).collect()
    }

    pub fn top(&self) -> Option<&C> {
        self.0.back()
    }

    pub fn push(&mut self, card: C) {
        self.0.push_back(card);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, C> {
        self.0.iter()
    }

    pub(crate) fn take_top(&mut self) -> Option<C> {
        self.0.pop_back()
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = C> + '_ {
        self.0.drain(..)
    }
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
