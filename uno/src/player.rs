use crate::card::{Card, CardColor};
use crate::turn::LastAction;

#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    pub(crate) hand: Vec<Card>,
    uno_declared: bool,
    last_action: LastAction,
}

impl Player {
    pub fn new(name: String, cards: Vec<Card>) -> Self {
        Self {
            name,
            hand: cards,
            uno_declared: false,
            last_action: LastAction::None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn has_declared_uno(&self) -> bool {
        self.uno_declared
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    pub fn holds_color(&self, color: CardColor) -> bool {
        self.hand.iter().any(|card| card.color() == Some(color))
    }

    /// Points this hand is worth to the round's winner.
    pub fn points(&self) -> u32 {
        self.hand.iter().map(Card::points).sum()
    }

    // Any change to the hand voids an earlier UNO call.
    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        self.uno_declared = false;
    }

    pub(crate) fn remove_card(&mut self, index: usize) -> Card {
        self.uno_declared = false;
        self.hand.remove(index)
    }

    /// Records an UNO call, only allowed while holding a single card.
    pub(crate) fn declare_uno(&mut self) -> bool {
        if self.cards_count() == 1 {
            self.uno_declared = true;
        }
        self.uno_declared
    }

    pub(crate) fn set_last_action(&mut self, action: LastAction) {
        self.last_action = action;
    }

    pub(crate) fn reset(&mut self, cards: Vec<Card>) {
        self.hand = cards;
        self.uno_declared = false;
        self.last_action = LastAction::None;
    }
}
