use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::types::{step, Dir, Side};

/// A placed card and the side that currently owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub card: Card,
    pub owner: Side,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    // Cells 0..=8 laid out row-major (r*3 + c)
    cells: [Option<Slot>; 9],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: std::array::from_fn(|_| None),
        }
    }
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Out-of-range indices read as empty.
    #[inline]
    pub fn get(&self, idx: u8) -> Option<&Slot> {
        self.cells.get(idx as usize).and_then(Option::as_ref)
    }

    #[inline]
    pub fn set(&mut self, idx: u8, slot: Option<Slot>) {
        self.cells[idx as usize] = slot;
    }

    #[inline]
    pub fn is_empty(&self, idx: u8) -> bool {
        self.get(idx).is_none()
    }

    /// Reassign ownership of an occupied cell. Empty cells are left alone.
    #[inline]
    pub fn flip(&mut self, idx: u8, owner: Side) {
        if let Some(slot) = self.cells[idx as usize].as_mut() {
            slot.owner = owner;
        }
    }

    #[inline]
    pub fn cells(&self) -> &[Option<Slot>; 9] {
        &self.cells
    }

    #[inline]
    pub fn empty_cells(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..9).filter(move |&i| self.is_empty(i))
    }

    #[inline]
    pub fn filled_count(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_some()).count() as u8
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled_count() == 9
    }

    #[inline]
    pub fn owned_by(&self, side: Side) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|s| s.owner == side)
            .count() as u8
    }

    /// Deterministic list of neighbor indices for a cell in [Up, Right, Down, Left] order.
    /// None means off-board.
    #[inline]
    pub fn neighbors(idx: u8) -> [Option<u8>; 4] {
        Dir::all().map(|d| step(idx, d))
    }

    /// Helper to get the direction index 0..=3 from Dir in [Up, Right, Down, Left] ordering.
    #[inline]
    pub fn dir_index(dir: Dir) -> usize {
        match dir {
            Dir::Up => 0,
            Dir::Right => 1,
            Dir::Down => 2,
            Dir::Left => 3,
        }
    }
}
