use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Element {
    Earth,
    Fire,
    Water,
    Poison,
    Holy,
    Thunder,
    Wind,
    Ice,
}

/// The two seats at the table. Blue always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }

    /// Seat index into `GameState::players`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Blue => 0,
            Side::Red => 1,
        }
    }
}

/// Final result of a match, fixed once the game is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win(Side),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(side),
            Outcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    #[inline]
    pub fn all() -> [Dir; 4] {
        [Dir::Up, Dir::Right, Dir::Down, Dir::Left]
    }

    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }

    /// Row/column step taken when moving one cell in this direction.
    #[inline]
    fn delta(self) -> (i8, i8) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }
}

/// Board indexing helpers (3x3 board)
#[inline]
pub fn idx_to_rc(idx: u8) -> (u8, u8) {
    debug_assert!(idx < 9);
    (idx / 3, idx % 3)
}

#[inline]
pub fn rc_to_idx(r: u8, c: u8) -> Option<u8> {
    if r < 3 && c < 3 {
        Some(r * 3 + c)
    } else {
        None
    }
}

/// Cell reached by stepping once from `idx` in `dir`, or None past the board edge.
#[inline]
pub fn step(idx: u8, dir: Dir) -> Option<u8> {
    if idx >= 9 {
        return None;
    }
    let (r, c) = idx_to_rc(idx);
    let (dr, dc) = dir.delta();
    let r = r.checked_add_signed(dr)?;
    let c = c.checked_add_signed(dc)?;
    rc_to_idx(r, c)
}
