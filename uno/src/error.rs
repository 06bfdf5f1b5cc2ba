use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Not enough players ({0})")]
    NotEnoughPlayers(usize),
    #[error("Too many players ({0})")]
    TooManyPlayers(usize),
    #[error("Dealer {dealer} is not one of the {players} players")]
    DealerOutOfBounds { dealer: usize, players: usize },
    #[error("Cannot deal {cards_per_player} cards to each of {players} players")]
    InvalidCardsPerPlayer {
        players: usize,
        cards_per_player: usize,
    },
    #[error("Target score must be greater than 0")]
    ZeroTargetScore,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalPlay {
    #[error("card does not match the discard pile")]
    NotPlayable,
    #[error("wild cards need a color")]
    MissingColor,
    #[error("only wild cards take a color")]
    UnexpectedColor,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("No player at index {0}")]
    InvalidPlayerIndex(usize),
    #[error("No card at index {0}")]
    InvalidCardIndex(usize),
    #[error("Illegal play: {0}")]
    IllegalPlay(#[from] IllegalPlay),
    #[error("The round has ended")]
    RoundEnded,
    #[error("The current hand is still in progress")]
    HandInProgress,
    #[error("The game has ended")]
    GameEnded,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
