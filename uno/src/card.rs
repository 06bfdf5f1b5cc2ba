use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::constants::{ACTION_CARD_POINTS, WILD_CARD_POINTS};
use crate::error::IllegalPlay;

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    Draw,
}

impl ColoredCard {
    pub fn into_played_card(self, color: CardColor) -> PlayedCard {
        PlayedCard::Colored(color, self)
    }

    pub fn points(&self) -> u32 {
        match self {
            ColoredCard::Number(number) => u32::from(*number),
            ColoredCard::Skip | ColoredCard::Reverse | ColoredCard::Draw => ACTION_CARD_POINTS,
        }
    }

    /// Numbers match on their value, action cards on their kind.
    fn same_face(&self, other: &ColoredCard) -> bool {
        match (self, other) {
            (ColoredCard::Number(a), ColoredCard::Number(b)) => a == b,
            (ColoredCard::Number(_), _) | (_, ColoredCard::Number(_)) => false,
            (a, b) => a == b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDraw,
}

impl Card {
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDraw => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild | Card::WildDraw)
    }

    pub fn points(&self) -> u32 {
        match self {
            Card::Colored(_, card) => card.points(),
            Card::Wild | Card::WildDraw => WILD_CARD_POINTS,
        }
    }

    /// Turns a held card into the value that lands on the discard pile.
    ///
    /// Wild cards must be given the color they will stand for, every other
    /// card already has one and must not be given another.
    pub fn play_as(self, chosen_color: Option<CardColor>) -> Result<PlayedCard, IllegalPlay> {
        match (self, chosen_color) {
            (Card::Colored(color, card), None) => Ok(card.into_played_card(color)),
            (Card::Colored(..), Some(_)) => Err(IllegalPlay::UnexpectedColor),
            (Card::Wild, Some(color)) => Ok(PlayedCard::Wild(color)),
            (Card::WildDraw, Some(color)) => Ok(PlayedCard::WildDraw(color)),
            (Card::Wild | Card::WildDraw, None) => Err(IllegalPlay::MissingColor),
        }
    }
}

/// A card lying on the discard pile. Wild cards carry the color chosen when
/// they were played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayedCard {
    Colored(CardColor, ColoredCard),
    Wild(CardColor),
    WildDraw(CardColor),
}

impl PlayedCard {
    pub fn color(&self) -> CardColor {
        match self {
            PlayedCard::Colored(color, _) | PlayedCard::Wild(color) | PlayedCard::WildDraw(color) => {
                *color
            }
        }
    }

    /// The card as it was before being played, dropping any chosen color.
    pub fn into_card(self) -> Card {
        match self {
            PlayedCard::Colored(color, card) => Card::Colored(color, card),
            PlayedCard::Wild(_) => Card::Wild,
            PlayedCard::WildDraw(_) => Card::WildDraw,
        }
    }

    /// Whether `card` may follow this one by color, number or kind.
    ///
    /// This does not know about the rest of the player's hand, so the
    /// restriction on wild draw cards is checked by the hand engine.
    pub fn accepts(&self, card: &Card) -> bool {
        match (self, card) {
            (_, Card::Wild | Card::WildDraw) => true,
            (PlayedCard::Colored(top_color, top), Card::Colored(color, card)) => {
                top_color == color || top.same_face(card)
            }
            (PlayedCard::Wild(top_color) | PlayedCard::WildDraw(top_color), Card::Colored(color, _)) => {
                top_color == color
            }
        }
    }
}

impl Display for ColoredCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColoredCard::Number(number) => write!(f, "{number}"),
            ColoredCard::Skip => write!(f, "Skip"),
            ColoredCard::Reverse => write!(f, "Reverse"),
            ColoredCard::Draw => write!(f, "Draw"),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => write!(f, "{color} {card}"),
            Card::Wild => write!(f, "Wild"),
            Card::WildDraw => write!(f, "Wild Draw"),
        }
    }
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayedCard::Colored(color, card) => write!(f, "{color} {card}"),
            PlayedCard::Wild(color) => write!(f, "Wild ({color})"),
            PlayedCard::WildDraw(color) => write!(f, "Wild Draw ({color})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_correct_string_for_number_card() {
        let red_3 = Card::Colored(CardColor::Red, ColoredCard::Number(3));
        assert_eq!(red_3.to_string(), "Red 3");

        let blue_9 = Card::Colored(CardColor::Blue, ColoredCard::Number(9));
        assert_eq!(blue_9.to_string(), "Blue 9");
    }

    #[test]
    fn return_correct_string_for_action_cards() {
        let yellow_skip = Card::Colored(CardColor::Yellow, ColoredCard::Skip);
        assert_eq!(yellow_skip.to_string(), "Yellow Skip");

        let green_reverse = Card::Colored(CardColor::Green, ColoredCard::Reverse);
        assert_eq!(green_reverse.to_string(), "Green Reverse");

        let red_draw = Card::Colored(CardColor::Red, ColoredCard::Draw);
        assert_eq!(red_draw.to_string(), "Red Draw");
    }

    #[test]
    fn return_correct_string_for_wild_cards() {
        assert_eq!(Card::Wild.to_string(), "Wild");
        assert_eq!(Card::WildDraw.to_string(), "Wild Draw");
        assert_eq!(PlayedCard::Wild(CardColor::Blue).to_string(), "Wild (Blue)");
        assert_eq!(
            PlayedCard::WildDraw(CardColor::Red).to_string(),
            "Wild Draw (Red)"
        );
    }

    #[test]
    fn colors_parse_from_their_names() {
        assert_eq!("Green".parse::<CardColor>().unwrap(), CardColor::Green);
        assert!("Purple".parse::<CardColor>().is_err());
    }

    #[test]
    fn points_follow_card_kind() {
        assert_eq!(Card::Colored(CardColor::Red, ColoredCard::Number(7)).points(), 7);
        assert_eq!(Card::Colored(CardColor::Red, ColoredCard::Number(0)).points(), 0);
        assert_eq!(Card::Colored(CardColor::Blue, ColoredCard::Skip).points(), 20);
        assert_eq!(Card::Colored(CardColor::Blue, ColoredCard::Reverse).points(), 20);
        assert_eq!(Card::Colored(CardColor::Blue, ColoredCard::Draw).points(), 20);
        assert_eq!(Card::Wild.points(), 50);
        assert_eq!(Card::WildDraw.points(), 50);
    }

    #[test]
    fn play_as_requires_color_only_for_wild_cards() {
        let red_5 = Card::Colored(CardColor::Red, ColoredCard::Number(5));
        assert_eq!(
            red_5.play_as(None),
            Ok(PlayedCard::Colored(CardColor::Red, ColoredCard::Number(5)))
        );
        assert_eq!(
            red_5.play_as(Some(CardColor::Blue)),
            Err(IllegalPlay::UnexpectedColor)
        );
        assert_eq!(Card::Wild.play_as(None), Err(IllegalPlay::MissingColor));
        assert_eq!(
            Card::WildDraw.play_as(Some(CardColor::Green)),
            Ok(PlayedCard::WildDraw(CardColor::Green))
        );
    }

    #[test]
    fn played_wild_loses_its_color_when_taken_back() {
        assert_eq!(PlayedCard::Wild(CardColor::Yellow).into_card(), Card::Wild);
        assert_eq!(PlayedCard::WildDraw(CardColor::Red).into_card(), Card::WildDraw);
    }

    #[test]
    fn accepts_matches_color_number_or_kind() {
        let top = PlayedCard::Colored(CardColor::Red, ColoredCard::Number(5));

        assert!(top.accepts(&Card::Colored(CardColor::Red, ColoredCard::Number(8))));
        assert!(top.accepts(&Card::Colored(CardColor::Blue, ColoredCard::Number(5))));
        assert!(top.accepts(&Card::Wild));
        assert!(!top.accepts(&Card::Colored(CardColor::Blue, ColoredCard::Number(8))));
        assert!(!top.accepts(&Card::Colored(CardColor::Blue, ColoredCard::Skip)));

        let skip = PlayedCard::Colored(CardColor::Green, ColoredCard::Skip);
        assert!(skip.accepts(&Card::Colored(CardColor::Blue, ColoredCard::Skip)));
        assert!(!skip.accepts(&Card::Colored(CardColor::Blue, ColoredCard::Reverse)));
    }

    #[test]
    fn played_wild_accepts_only_its_chosen_color() {
        let top = PlayedCard::Wild(CardColor::Blue);

        assert!(top.accepts(&Card::Colored(CardColor::Blue, ColoredCard::Draw)));
        assert!(!top.accepts(&Card::Colored(CardColor::Red, ColoredCard::Draw)));
        assert!(top.accepts(&Card::WildDraw));
    }
}
