//! Effective-Parameters Deriver (§4.2).
//!
//! Computes, for a single (game, session) pair, whether the game fits in
//! the session and the effective player-count bounds given the session's
//! length. This module is pure and has no knowledge of players or indices —
//! it only needs a normalized game record and a session length.

use crate::catalog::NormalizedGame;

/// Whether a game fits a session, and its effective player-count bounds if so.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveParams {
    pub fits: bool,
    pub emin: u32,
    pub emax: u32,
}

/// Derives `EffectiveParams` for `game` in a session of the given length,
/// per the interpolation formula in §4.2.
pub fn derive(game: &NormalizedGame, session_length: u32) -> EffectiveParams {
    if game.min_playtime > session_length {
        return EffectiveParams {
            fits: false,
            emin: game.min_players,
            emax: game.min_players,
        };
    }

    let emax = if session_length >= game.max_playtime || game.max_playtime == game.min_playtime {
        game.max_players
    } else {
        let span = (game.max_playtime - game.min_playtime) as f64;
        let frac = (session_length - game.min_playtime) as f64 / span;
        let spread = (game.max_players - game.min_players) as f64;
        let raw = game.min_players as f64 + spread * frac;
        (raw.floor() as u32).clamp(game.min_players, game.max_players)
    };

    EffectiveParams {
        fits: true,
        emin: game.min_players,
        emax,
    }
}
