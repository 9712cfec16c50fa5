//! Solved schedule: the extracted solution (§4.6) and its stdout rendering
//! (§6).

use serde::Serialize;
use std::fmt;

/// One seated player at a table.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSlot {
    pub name: String,
    /// Whether this player owns the copy the table is using.
    pub owner: bool,
}

/// A single active table: one game, in one session, with its seated players.
#[derive(Debug, Clone, Serialize)]
pub struct TableResult {
    pub game: String,
    /// Sorted by name so rendering is stable across reruns (§4.6, §9).
    pub players: Vec<PlayerSlot>,
}

/// All active tables in a single session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResult {
    pub name: String,
    /// Sorted by game name.
    pub tables: Vec<TableResult>,
}

/// The complete solved schedule, one entry per input session in order.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub sessions: Vec<SessionResult>,
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, session) in self.sessions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "==== Session {} ====", session.name)?;
            for table in &session.tables {
                writeln!(f, "## {} ##", table.game)?;
                for slot in &table.players {
                    if slot.owner {
                        writeln!(f, "{}*", slot.name)?;
                    } else {
                        writeln!(f, "{}", slot.name)?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_owner_asterisk() {
        let schedule = Schedule {
            sessions: vec![SessionResult {
                name: "Evening".into(),
                tables: vec![TableResult {
                    game: "X".into(),
                    players: vec![
                        PlayerSlot {
                            name: "Alice".into(),
                            owner: true,
                        },
                        PlayerSlot {
                            name: "Bob".into(),
                            owner: false,
                        },
                    ],
                }],
            }],
        };
        let rendered = schedule.to_string();
        assert!(rendered.contains("==== Session Evening ===="));
        assert!(rendered.contains("## X ##"));
        assert!(rendered.contains("Alice*"));
        assert!(rendered.contains("Bob\n") || rendered.ends_with("Bob"));
    }
}
