//! Aggregate outcome statistics for a batch of games.

use serde::{Deserialize, Serialize};

use crate::core::{MinTurnsMode, Side, SideMap};
use crate::play::GameOutcome;

/// Totals over all games of a run.
///
/// After every recorded game `wins + no_winners == games` and
/// `wins == win_by_players[A] + win_by_players[B]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Turns made by both sides, summed over all games.
    pub all_turns: u64,

    /// Games played.
    pub games: u64,

    /// Most turns the winner needed in any won game.
    pub max_turns_to_win: u32,

    /// Fewest turns the winner needed; see [`MinTurnsMode`].
    pub min_turns_to_win: u32,

    /// Drawn games.
    pub no_winners: u64,

    /// Won games per side.
    pub win_by_players: SideMap<u64>,

    /// Games with a winner.
    pub wins: u64,
}

impl Statistics {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game into the totals.
    pub fn record(&mut self, outcome: &GameOutcome, mode: MinTurnsMode) {
        if let Some(side) = outcome.winner {
            let turns = outcome.turns[side];
            self.min_turns_to_win = match mode {
                MinTurnsMode::Corrected if self.wins == 0 => turns,
                _ => self.min_turns_to_win.min(turns),
            };
            self.max_turns_to_win = self.max_turns_to_win.max(turns);
            self.wins += 1;
            self.win_by_players[side] += 1;
        } else {
            self.no_winners += 1;
        }
        self.games += 1;
        self.all_turns += u64::from(outcome.total_turns());
    }

    /// Combine totals from a disjoint batch of games.
    ///
    /// Order-independent: merging the per-worker results of a parallel run
    /// in any order gives the same record.
    pub fn merge(&mut self, other: &Statistics, mode: MinTurnsMode) {
        self.min_turns_to_win = match (mode, self.wins, other.wins) {
            (MinTurnsMode::Corrected, 0, _) => other.min_turns_to_win,
            (MinTurnsMode::Corrected, _, 0) => self.min_turns_to_win,
            _ => self.min_turns_to_win.min(other.min_turns_to_win),
        };
        self.max_turns_to_win = self.max_turns_to_win.max(other.max_turns_to_win);
        self.all_turns += other.all_turns;
        self.games += other.games;
        self.no_winners += other.no_winners;
        self.wins += other.wins;
        for (side, wins) in self.win_by_players.iter_mut() {
            *wins += other.win_by_players[side];
        }
    }

    /// Check the counting invariants.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.wins + self.no_winners == self.games
            && self.wins == self.win_by_players.values().sum::<u64>()
    }

    /// Fraction of games that ended in a draw.
    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.no_winners as f64 / self.games as f64
        }
    }

    /// Fraction of games won by `side`.
    #[must_use]
    pub fn win_rate(&self, side: Side) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.win_by_players[side] as f64 / self.games as f64
        }
    }

    /// Average turns per game, both sides combined.
    #[must_use]
    pub fn avg_turns_per_game(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.all_turns as f64 / self.games as f64
        }
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "  allTurns: {},", self.all_turns)?;
        writeln!(f, "  games: {},", self.games)?;
        writeln!(f, "  maxTurnsToWin: {},", self.max_turns_to_win)?;
        writeln!(f, "  minTurnsToWin: {},", self.min_turns_to_win)?;
        writeln!(f, "  noWinners: {},", self.no_winners)?;
        writeln!(
            f,
            "  winByPlayers: {{ a: {}, b: {} }},",
            self.win_by_players[Side::A],
            self.win_by_players[Side::B]
        )?;
        writeln!(f, "  wins: {}", self.wins)?;
        write!(f, "}}")
    }
}
