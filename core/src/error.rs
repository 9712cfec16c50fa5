//! Error kinds for the scheduler.
//!
//! All variants are terminal: there is no retry at this layer. Unknown
//! games are deliberately not an error (see [`crate::catalog`]) — only
//! structurally broken input and model infeasibility are.

use std::fmt;

/// Errors that can occur while building or solving a schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Malformed JSON, or JSON missing a required key, for one of the three
    /// input files.
    #[error("failed to parse {path}: {source}")]
    InputParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A structural problem with otherwise well-formed input: an
    /// out-of-range session index, a non-positive session length or game
    /// duration, and so on.
    #[error("input inconsistency: {0}")]
    InputConsistencyError(String),

    /// The MIP has no feasible solution.
    #[error("no feasible schedule: {0}")]
    ModelInfeasible(String),

    /// The integer-programming solver itself failed (time limit reached,
    /// numerical trouble, etc). Surfaced verbatim from the solver.
    #[error("solver error: {0}")]
    SolverError(String),
}

/// A non-fatal finding about the input: something odd, but not disqualifying.
///
/// Currently the only producer is "player is interested in a game nobody
/// attending any of their sessions owns" — the player simply never gets a
/// chance to play it, which is not an error per §7/§9.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyWarning {
    pub player: String,
    pub game: String,
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player '{}' is interested in '{}' but no attendee of any session they attend owns it",
            self.player, self.game
        )
    }
}
