use rand::{thread_rng, Rng};
use tracing::info;

use crate::constants::{DEFAULT_CARDS_PER_PLAYER, DEFAULT_TARGET_SCORE};
use crate::error::{ConfigError, Result, UnoError};
use crate::hand::Hand;
use crate::shuffler::{Shuffler, StandardShuffler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub target_score: u32,
    pub cards_per_player: usize,
    /// Dealer of the first hand, picked at random when `None`.
    pub dealer: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            cards_per_player: DEFAULT_CARDS_PER_PLAYER,
            dealer: None,
        }
    }
}

/// Outcome of a finished hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandResult {
    pub dealer: usize,
    pub winner: usize,
    pub score: u32,
}

/// A match of consecutive hands, played until someone reaches the target
/// score.
#[derive(Debug)]
pub struct Game<S = StandardShuffler> {
    hand: Hand<S>,
    scores: Vec<u32>,
    target_score: u32,
    dealer: usize,
    history: Vec<HandResult>,
    winner: Option<usize>,
    ended: bool,
}

impl Game<StandardShuffler> {
    pub fn with_defaults(player_names: Vec<String>) -> Result<Self> {
        Self::new(player_names, GameConfig::default(), StandardShuffler::new())
    }
}

impl<S: Shuffler> Game<S> {
    /// Creates the game and deals its first hand.
    pub fn new(player_names: Vec<String>, config: GameConfig, shuffler: S) -> Result<Self> {
        if config.target_score == 0 {
            return Err(ConfigError::ZeroTargetScore.into());
        }

        let player_count = player_names.len();
        let dealer = config
            .dealer
            .unwrap_or_else(|| thread_rng().gen_range(0..player_count.max(1)));
        let hand = Hand::new(player_names, dealer, shuffler, config.cards_per_player)?;

        Ok(Game {
            hand,
            scores: vec![0; player_count],
            target_score: config.target_score,
            dealer,
            history: Vec::new(),
            winner: None,
            ended: false,
        })
    }

    pub fn current_hand(&self) -> &Hand<S> {
        &self.hand
    }

    pub fn current_hand_mut(&mut self) -> &mut Hand<S> {
        &mut self.hand
    }

    pub fn player_count(&self) -> usize {
        self.scores.len()
    }

    pub fn player(&self, index: usize) -> Result<&str> {
        self.hand.player(index)
    }

    pub fn score(&self, index: usize) -> Result<u32> {
        self.scores
            .get(index)
            .copied()
            .ok_or(UnoError::InvalidPlayerIndex(index))
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Dealer of the current hand, or of the next one once scores are in.
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    pub fn set_dealer(&mut self, dealer: usize) -> Result<()> {
        if dealer >= self.player_count() {
            return Err(UnoError::InvalidPlayerIndex(dealer));
        }
        self.dealer = dealer;
        Ok(())
    }

    pub fn history(&self) -> &[HandResult] {
        &self.history
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Throws away the current hand and deals a new one.
    pub fn start_new_hand(&mut self) -> Result<()> {
        if self.ended {
            return Err(UnoError::GameEnded);
        }
        self.hand.redeal(self.dealer)
    }

    pub fn end_game(&mut self) {
        self.ended = true;
    }

    /// Credits the finished hand's score to its winner. Unless that decides
    /// the game, the deal passes to the next seat and a new hand starts.
    pub fn update_scores(&mut self) -> Result<()> {
        if self.ended {
            return Err(UnoError::GameEnded);
        }
        let (Some(winner), Some(score)) = (self.hand.winner(), self.hand.score()) else {
            return Err(UnoError::HandInProgress);
        };

        self.scores[winner] += score;
        self.history.push(HandResult {
            dealer: self.dealer,
            winner,
            score,
        });
        info!(winner, score, total = self.scores[winner], "scores updated");

        // Lowest index wins a tie.
        if let Some(game_winner) = self
            .scores
            .iter()
            .position(|score| *score >= self.target_score)
        {
            self.winner = Some(game_winner);
            self.ended = true;
            info!(winner = game_winner, hands = self.history.len(), "game won");
            return Ok(());
        }

        self.dealer = (self.dealer + 1) % self.player_count();
        self.hand.redeal(self.dealer)
    }
}
