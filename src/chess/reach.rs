use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    error::{ReachError, Result},
    piece::Piece,
    square::Square,
    traverse::traverse_compound,
};

pub fn reachable(piece: Piece, origin: Square) -> BTreeSet<Square> {
    let pattern = piece.pattern();
    let mut reached = BTreeSet::new();

    for path in pattern.paths {
        let visited = traverse_compound(origin, path, pattern.boundary);
        if pattern.endpoint_only {
            reached.extend(visited.last().copied());
        } else {
            reached.extend(visited);
        }
    }

    debug!("{piece} on {origin} reaches {} squares", reached.len());
    reached
}

/// A malformed origin is an error, never an empty set.
pub fn get_pos(piece: Piece, origin: &str) -> Result<BTreeSet<Square>> {
    let origin: Square = origin.parse()?;
    Ok(reachable(piece, origin))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachTable {
    piece: Piece,
    entries: Vec<Vec<Square>>,
}

impl ReachTable {
    pub fn build(piece: Piece) -> Self {
        let entries = Square::all()
            .map(|origin| reachable(piece, origin).into_iter().collect())
            .collect();
        Self { piece, entries }
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, origin: Square) -> &[Square] {
        &self.entries[origin.index()]
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    // Every origin must have an entry, otherwise a short table would read as
    // "nowhere to go".
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let table: Self = bincode::deserialize(bytes)?;
        if table.entries.len() != Square::NUM {
            return Err(ReachError::TableSize {
                expected: Square::NUM,
                actual: table.entries.len(),
            });
        }
        Ok(table)
    }
}
