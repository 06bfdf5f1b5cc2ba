use strum::EnumCount;

use crate::card::CardColor;

pub const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub const SKIP_CARDS_PER_COLOR: u8 = 2;
pub const REVERSE_CARDS_PER_COLOR: u8 = 2;
pub const DRAW_CARDS_PER_COLOR: u8 = 2;

pub const NUMBER_CARDS_IN_DECK: u8 = (NUMBER_CARDS_PER_COLOR.len() * CardColor::COUNT) as u8;
pub const SKIP_CARDS_IN_DECK: u8 = SKIP_CARDS_PER_COLOR * CardColor::COUNT as u8;
pub const REVERSE_CARDS_IN_DECK: u8 = REVERSE_CARDS_PER_COLOR * CardColor::COUNT as u8;
pub const DRAW_CARDS_IN_DECK: u8 = DRAW_CARDS_PER_COLOR * CardColor::COUNT as u8;

pub const WILD_CARDS_IN_DECK: u8 = 4;
pub const WILD_DRAW_CARDS_IN_DECK: u8 = 4;

pub const TOTAL_CARDS_IN_DECK: u8 = NUMBER_CARDS_IN_DECK
    + SKIP_CARDS_IN_DECK
    + REVERSE_CARDS_IN_DECK
    + DRAW_CARDS_IN_DECK
    + WILD_CARDS_IN_DECK
    + WILD_DRAW_CARDS_IN_DECK;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

pub const DEFAULT_CARDS_PER_PLAYER: usize = 7;
pub const DEFAULT_TARGET_SCORE: u32 = 500;

pub const DRAW_PENALTY: usize = 2;
pub const WILD_DRAW_PENALTY: usize = 4;
pub const UNO_FAILURE_PENALTY: usize = 4;

pub const ACTION_CARD_POINTS: u32 = 20;
pub const WILD_CARD_POINTS: u32 = 50;

/// Cards that must stay in the deck after dealing: the opening card and an
/// opening draw penalty.
pub const MIN_UNDEALT_CARDS: usize = 1 + DRAW_PENALTY;
