use color_eyre::eyre::{bail, Result, WrapErr};
use strum::IntoEnumIterator;
use tracing::{debug, info};

use uno::card::{Card, CardColor};
use uno::game::Game;
use uno::hand::{Accusation, Hand};
use uno::shuffler::Shuffler;

/// How the bots behave at the table.
#[derive(Clone, Copy, Debug)]
pub struct Driver {
    pub max_turns: usize,
    pub forgetful: bool,
}

impl Driver {
    /// Plays hands until the game has a winner.
    pub fn play_match<S: Shuffler>(&self, game: &mut Game<S>) -> Result<()> {
        while !game.has_ended() {
            let hand_number = game.history().len() + 1;
            let turns = self
                .play_hand(game.current_hand_mut())
                .wrap_err_with(|| format!("hand {hand_number} failed"))?;
            info!(hand = hand_number, turns, "hand finished");

            game.update_scores().wrap_err("could not score the hand")?;
        }
        Ok(())
    }

    /// Plays the current hand to the end and returns the number of turns taken.
    pub fn play_hand<S: Shuffler>(&self, hand: &mut Hand<S>) -> Result<usize> {
        let mut turns = 0;
        while !hand.has_ended() {
            if turns == self.max_turns {
                bail!("no winner after {} turns", self.max_turns);
            }
            self.take_turn(hand)?;
            turns += 1;
        }
        Ok(turns)
    }

    fn take_turn<S: Shuffler>(&self, hand: &mut Hand<S>) -> Result<()> {
        let player = hand.player_in_turn();
        let cards = hand.player_hand(player)?;

        let Some(index) = (0..cards.len()).find(|&index| hand.can_play(index)) else {
            hand.draw()?;
            return Ok(());
        };

        let color = cards[index].is_wild().then(|| favorite_color(cards));
        hand.play(index, color)?;

        if hand.has_ended() || hand.player_hand(player)?.len() != 1 {
            return Ok(());
        }
        if self.forgetful {
            let accuser = (player + 1) % hand.player_count();
            let caught = hand.catch_uno_failure(Accusation {
                accuser,
                accused: player,
            })?;
            debug!(accuser, accused = player, caught, "forgot to call UNO");
        } else {
            hand.say_uno(player)?;
        }
        Ok(())
    }
}

/// The color held most often, earlier colors winning ties.
fn favorite_color(cards: &[Card]) -> CardColor {
    let count = |color: CardColor| cards.iter().filter(|card| card.color() == Some(color)).count();

    CardColor::iter()
        .fold(None, |best: Option<(CardColor, usize)>, color| {
            let held = count(color);
            match best {
                Some((_, most)) if most >= held => best,
                _ => Some((color, held)),
            }
        })
        .map_or(CardColor::Red, |(color, _)| color)
}
