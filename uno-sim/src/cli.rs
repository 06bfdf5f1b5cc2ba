use clap::Parser;

use uno::constants::{DEFAULT_CARDS_PER_PLAYER, DEFAULT_TARGET_SCORE};
use uno::game::GameConfig;

#[derive(Parser, Debug)]
#[command(name = "uno-sim")]
#[command(about = "Plays a full UNO match between simple bots")]
pub struct Args {
    /// Player names, in seating order
    #[arg(
        long,
        env = "UNO_PLAYERS",
        num_args = 1..,
        value_delimiter = ',',
        default_values = ["Alice", "Bob", "Carol", "Dave"]
    )]
    pub players: Vec<String>,

    /// Score that ends the match
    #[arg(long, env = "UNO_TARGET_SCORE", default_value_t = DEFAULT_TARGET_SCORE)]
    pub target_score: u32,

    #[arg(long, env = "UNO_CARDS_PER_PLAYER", default_value_t = DEFAULT_CARDS_PER_PLAYER)]
    pub cards_per_player: usize,

    /// Shuffle seed, for replaying a match. Drawn from entropy when missing
    #[arg(long, env = "UNO_SEED")]
    pub seed: Option<u64>,

    /// Dealer of the first hand. Picked at random when missing
    #[arg(long, env = "UNO_DEALER")]
    pub dealer: Option<usize>,

    /// Abort when a single hand takes more turns than this
    #[arg(long, env = "UNO_MAX_TURNS", default_value_t = 10_000)]
    pub max_turns: usize,

    /// Players never call UNO, so the next player catches them
    #[arg(long)]
    pub forgetful: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            target_score: self.target_score,
            cards_per_player: self.cards_per_player,
            dealer: self.dealer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_four_player_match() {
        let args = Args::try_parse_from(["uno-sim"]).unwrap();

        assert_eq!(args.players, vec!["Alice", "Bob", "Carol", "Dave"]);
        assert_eq!(args.game_config().target_score, 500);
        assert_eq!(args.game_config().cards_per_player, 7);
        assert_eq!(args.max_turns, 10_000);
        assert!(!args.forgetful);
    }

    #[test]
    fn players_can_be_listed_with_commas() {
        let args =
            Args::try_parse_from(["uno-sim", "--players", "Ann,Ben", "--dealer", "1", "--seed", "4"])
                .unwrap();

        assert_eq!(args.players, vec!["Ann", "Ben"]);
        assert_eq!(args.game_config().dealer, Some(1));
        assert_eq!(args.seed, Some(4));
    }
}
