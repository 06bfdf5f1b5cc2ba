use tracing::{debug, info, warn};

use crate::card::{Card, CardColor, ColoredCard, PlayedCard};
use crate::constants::*;
use crate::deck::Deck;
use crate::error::{ConfigError, IllegalPlay, Result, UnoError};
use crate::player::Player;
use crate::shuffler::{Shuffler, StandardShuffler};
use crate::turn::{Direction, LastAction};

/// `accuser` claims that `accused` went down to one card without saying UNO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accusation {
    pub accuser: usize,
    pub accused: usize,
}

/// A single round of UNO, from the deal until someone empties their hand.
#[derive(Debug)]
pub struct Hand<S = StandardShuffler> {
    players: Vec<Player>,
    draw_pile: Deck,
    discard_pile: Deck<PlayedCard>,
    dealer: usize,
    current_turn: usize,
    direction: Direction,
    previous_actor: Option<usize>,
    winner: Option<usize>,
    cards_per_player: usize,
    shuffler: S,
}

impl<S: Shuffler> Hand<S> {
    /// Shuffles a standard deck with `shuffler` and deals `cards_per_player`
    /// cards to every player.
    ///
    /// The opening card takes effect as if the dealer had just played it:
    /// a skip passes over the dealer's left, a reverse hands the first turn to
    /// the dealer's right, and a draw makes the first player draw two before
    /// taking their turn.
    pub fn new(
        player_names: Vec<String>,
        dealer: usize,
        shuffler: S,
        cards_per_player: usize,
    ) -> Result<Self> {
        validate_table(player_names.len(), dealer, cards_per_player)?;

        let mut hand = Hand {
            players: player_names
                .into_iter()
                .map(|name| Player::new(name, Vec::new()))
                .collect(),
            draw_pile: Deck::empty(),
            discard_pile: Deck::empty(),
            dealer,
            current_turn: dealer,
            direction: Direction::Clockwise,
            previous_actor: None,
            winner: None,
            cards_per_player,
            shuffler,
        };
        hand.deal()?;

        Ok(hand)
    }

    /// Starts a fresh round at the same table with a new dealer, reusing the
    /// shuffler.
    pub fn redeal(&mut self, dealer: usize) -> Result<()> {
        validate_table(self.players.len(), dealer, self.cards_per_player)?;
        self.dealer = dealer;
        self.deal()?;
        Ok(())
    }

    /// Deals a fresh round. The cards stay where they were if no colored card
    /// is left to open with.
    fn deal(&mut self) -> Result<(), ConfigError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.shuffler);

        let hands: Vec<Vec<Card>> = (0..self.players.len())
            .map(|_| deck.deal_many(self.cards_per_player))
            .collect();
        let Some(opening) = self.flip_opening_card(&mut deck) else {
            warn!(
                players = self.players.len(),
                cards_per_player = self.cards_per_player,
                "no colored card left to open with"
            );
            return Err(ConfigError::InvalidCardsPerPlayer {
                players: self.players.len(),
                cards_per_player: self.cards_per_player,
            });
        };

        for (player, cards) in self.players.iter_mut().zip(hands) {
            player.reset(cards);
        }
        self.discard_pile = Deck::empty();
        self.discard_pile.push(opening);
        self.draw_pile = deck;

        self.direction = Direction::Clockwise;
        self.previous_actor = None;
        self.winner = None;
        self.current_turn = self.dealer;

        match opening {
            PlayedCard::Colored(_, ColoredCard::Skip) => self.advance(2),
            PlayedCard::Colored(_, ColoredCard::Reverse) => self.reverse(),
            PlayedCard::Colored(_, ColoredCard::Draw) => {
                self.advance(1);
                self.deal_to(self.current_turn, DRAW_PENALTY);
            }
            _ => self.advance(1),
        }

        info!(
            players = self.players.len(),
            dealer = self.dealer,
            first = self.current_turn,
            opening = %opening,
            "hand dealt"
        );
        Ok(())
    }

    /// Flips cards until a colored one comes up, putting wild cards back and
    /// reshuffling. Gives up after one pass over the deck and takes the first
    /// colored card instead, if there is one.
    fn flip_opening_card(&mut self, deck: &mut Deck) -> Option<PlayedCard> {
        for _ in 0..deck.len() {
            match deck.deal() {
                Some(Card::Colored(color, card)) => return Some(card.into_played_card(color)),
                Some(wild) => {
                    debug!(card = %wild, "wild opening card returned to the deck");
                    deck.push(wild);
                    deck.shuffle(&mut self.shuffler);
                }
                None => break,
            }
        }

        deck.deal_first_colored()
            .map(|(color, card)| card.into_played_card(color))
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Result<&str> {
        self.seat(index).map(Player::name)
    }

    pub fn player_hand(&self, index: usize) -> Result<&[Card]> {
        self.seat(index).map(Player::hand)
    }

    pub fn has_declared_uno(&self, index: usize) -> Result<bool> {
        self.seat(index).map(Player::has_declared_uno)
    }

    pub fn last_action(&self, index: usize) -> Result<LastAction> {
        self.seat(index).map(Player::last_action)
    }

    pub fn player_in_turn(&self) -> usize {
        self.current_turn
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &Deck<PlayedCard> {
        &self.discard_pile
    }

    pub fn discard_top(&self) -> Option<&PlayedCard> {
        self.discard_pile.top()
    }

    /// Cards held by players plus both piles. Always the full deck.
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.iter().map(Player::cards_count).sum::<usize>()
    }

    pub fn can_play(&self, card_index: usize) -> bool {
        if self.has_ended() {
            return false;
        }

        let player = &self.players[self.current_turn];
        let Some(card) = player.hand().get(card_index) else {
            return false;
        };
        let Some(top) = self.discard_pile.top() else {
            return true;
        };

        // A wild draw may only be played when nothing else follows the color.
        if *card == Card::WildDraw && player.holds_color(top.color()) {
            return false;
        }

        top.accepts(card)
    }

    pub fn can_play_any(&self) -> bool {
        !self.has_ended()
            && (0..self.players[self.current_turn].cards_count()).any(|index| self.can_play(index))
    }

    /// Plays the current player's card at `card_index`. Wild cards need the
    /// color they stand for, other cards must not be given one.
    pub fn play(&mut self, card_index: usize, color: Option<CardColor>) -> Result<PlayedCard> {
        if self.has_ended() {
            return Err(UnoError::RoundEnded);
        }

        let actor = self.current_turn;
        let card = *self.players[actor]
            .hand()
            .get(card_index)
            .ok_or(UnoError::InvalidCardIndex(card_index))?;

        if !self.can_play(card_index) {
            return Err(IllegalPlay::NotPlayable.into());
        }
        let played = card.play_as(color)?;

        self.players[actor].remove_card(card_index);
        self.discard_pile.push(played);
        self.record_action(actor, LastAction::Played);

        debug!(player = actor, card = %played, "card played");

        if self.players[actor].cards_count() == 0 {
            // The turn stays put, but a closing draw card still hands out its penalty.
            let next = self.next_seat();
            match played {
                PlayedCard::Colored(_, ColoredCard::Draw) => self.deal_to(next, DRAW_PENALTY),
                PlayedCard::WildDraw(_) => self.deal_to(next, WILD_DRAW_PENALTY),
                _ => {}
            }
            self.winner = Some(actor);
            info!(winner = actor, score = self.points_left(), "hand won");
            return Ok(played);
        }

        match played {
            PlayedCard::Colored(_, ColoredCard::Skip) => self.advance(2),
            PlayedCard::Colored(_, ColoredCard::Reverse) => self.reverse(),
            PlayedCard::Colored(_, ColoredCard::Draw) => self.penalize_next(DRAW_PENALTY),
            PlayedCard::WildDraw(_) => self.penalize_next(WILD_DRAW_PENALTY),
            PlayedCard::Colored(_, ColoredCard::Number(_)) | PlayedCard::Wild(_) => {
                self.advance(1)
            }
        }

        Ok(played)
    }

    /// Draws a card for the current player, who keeps the turn only if the
    /// card can be played right away.
    ///
    /// Returns `None` in the rare case that every card not on the discard
    /// pile is held by players; the turn passes without drawing.
    pub fn draw(&mut self) -> Result<Option<Card>> {
        if self.has_ended() {
            return Err(UnoError::RoundEnded);
        }

        let actor = self.current_turn;
        self.record_action(actor, LastAction::Drew);

        let Some(card) = self.take_from_draw_pile() else {
            warn!(player = actor, "no cards left to draw, passing the turn");
            self.advance(1);
            return Ok(None);
        };

        self.players[actor].add_card(card);
        let drawn_index = self.players[actor].cards_count() - 1;
        let playable = self.can_play(drawn_index);
        if !playable {
            self.advance(1);
        }

        debug!(player = actor, card = %card, playable, "card drawn");

        Ok(Some(card))
    }

    /// Calling UNO only counts while holding a single card, otherwise it is
    /// ignored.
    pub fn say_uno(&mut self, player: usize) -> Result<()> {
        self.seat(player)?;
        if self.has_ended() {
            return Ok(());
        }

        if self.players[player].declare_uno() {
            debug!(player, "UNO declared");
        }
        Ok(())
    }

    /// Succeeds when the accused holds one card, has not called UNO and is
    /// still the latest player to have acted. The accused then draws four.
    pub fn catch_uno_failure(&mut self, accusation: Accusation) -> Result<bool> {
        let Accusation { accuser, accused } = accusation;
        self.seat(accused)?;
        self.seat(accuser)?;

        if self.has_ended() {
            return Ok(false);
        }

        let suspect = &self.players[accused];
        if suspect.cards_count() != 1
            || suspect.has_declared_uno()
            || suspect.last_action() == LastAction::None
        {
            debug!(accuser, accused, "UNO accusation rejected");
            return Ok(false);
        }

        self.deal_to(accused, UNO_FAILURE_PENALTY);
        info!(accuser, accused, "caught without calling UNO");
        Ok(true)
    }

    pub fn has_ended(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Points left in every hand, once the round is over.
    pub fn score(&self) -> Option<u32> {
        self.winner.map(|_| self.points_left())
    }

    fn points_left(&self) -> u32 {
        self.players.iter().map(Player::points).sum()
    }

    fn seat(&self, index: usize) -> Result<&Player> {
        self.players
            .get(index)
            .ok_or(UnoError::InvalidPlayerIndex(index))
    }

    fn next_seat(&self) -> usize {
        self.direction
            .seat_after(self.current_turn, 1, self.players.len())
    }

    fn advance(&mut self, seats: usize) {
        self.current_turn = self
            .direction
            .seat_after(self.current_turn, seats, self.players.len());
    }

    // With two players there is nobody to reverse past, so the turn simply
    // moves on.
    fn reverse(&mut self) {
        if self.players.len() > 2 {
            self.direction = self.direction.reversed();
        }
        self.advance(1);
    }

    fn penalize_next(&mut self, count: usize) {
        let next = self.next_seat();
        self.deal_to(next, count);
        self.advance(2);
    }

    // Only the latest actor keeps their action on record.
    fn record_action(&mut self, actor: usize, action: LastAction) {
        if let Some(previous) = self.previous_actor.filter(|previous| *previous != actor) {
            self.players[previous].set_last_action(LastAction::None);
        }
        self.players[actor].set_last_action(action);
        self.previous_actor = Some(actor);
    }

    fn deal_to(&mut self, seat: usize, count: usize) {
        for dealt in 0..count {
            let Some(card) = self.take_from_draw_pile() else {
                warn!(player = seat, dealt, count, "no cards left to deal");
                return;
            };
            self.players[seat].add_card(card);
        }
    }

    fn take_from_draw_pile(&mut self) -> Option<Card> {
        if let Some(card) = self.draw_pile.deal() {
            return Some(card);
        }
        self.reclaim_discard_pile();
        self.draw_pile.deal()
    }

    /// Shuffles everything under the discard pile's top card into a new draw
    /// pile. Wild cards go back without their chosen color.
    fn reclaim_discard_pile(&mut self) {
        let Some(top) = self.discard_pile.take_top() else {
            return;
        };

        let mut reclaimed: Deck = self.discard_pile.drain().map(PlayedCard::into_card).collect();
        reclaimed.shuffle(&mut self.shuffler);
        self.discard_pile.push(top);
        self.draw_pile = reclaimed;

        debug!(cards = self.draw_pile.len(), "discard pile reshuffled into the draw pile");
    }
}

fn validate_table(
    players: usize,
    dealer: usize,
    cards_per_player: usize,
) -> Result<(), ConfigError> {
    if players < MIN_PLAYERS {
        return Err(ConfigError::NotEnoughPlayers(players));
    }
    if players > MAX_PLAYERS {
        return Err(ConfigError::TooManyPlayers(players));
    }
    if dealer >= players {
        return Err(ConfigError::DealerOutOfBounds { dealer, players });
    }
    let undealt = players
        .checked_mul(cards_per_player)
        .and_then(|dealt| (TOTAL_CARDS_IN_DECK as usize).checked_sub(dealt));
    if cards_per_player == 0 || undealt.map_or(true, |undealt| undealt < MIN_UNDEALT_CARDS) {
        return Err(ConfigError::InvalidCardsPerPlayer {
            players,
            cards_per_player,
        });
    }
    Ok(())
}
