/// Direction the turn travels around the table. Clockwise means increasing
/// player indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// The seat `steps` seats away from `seat` at a table of `players`.
    pub fn seat_after(self, seat: usize, steps: usize, players: usize) -> usize {
        let steps = steps % players;
        match self {
            Direction::Clockwise => (seat + steps) % players,
            Direction::CounterClockwise => (seat + players - steps) % players,
        }
    }
}

/// The most recent thing a seat did, as long as nobody else has acted since.
///
/// Only used to time UNO accusations, so it is a heuristic rather than a log:
/// a seat's action is forgotten as soon as another seat plays or draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LastAction {
    #[default]
    None,
    Played,
    Drew,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_seat_works_when_last_player() {
        assert_eq!(Direction::Clockwise.seat_after(3, 1, 4), 0);
    }

    #[test]
    fn next_seat_works_when_other_player() {
        assert_eq!(Direction::Clockwise.seat_after(1, 1, 4), 2);
    }

    #[test]
    fn skip_seat_wraps_around() {
        assert_eq!(Direction::Clockwise.seat_after(3, 2, 4), 1);
    }

    #[test]
    fn counter_clockwise_wraps_below_zero() {
        assert_eq!(Direction::CounterClockwise.seat_after(0, 1, 4), 3);
        assert_eq!(Direction::CounterClockwise.seat_after(1, 2, 4), 3);
    }

    #[test]
    fn two_steps_with_two_players_come_back() {
        assert_eq!(Direction::Clockwise.seat_after(1, 2, 2), 1);
        assert_eq!(Direction::CounterClockwise.seat_after(1, 2, 2), 1);
    }

    #[test]
    fn reversing_twice_is_identity() {
        assert_eq!(Direction::Clockwise.reversed(), Direction::CounterClockwise);
        assert_eq!(Direction::Clockwise.reversed().reversed(), Direction::Clockwise);
    }
}
