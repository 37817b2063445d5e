//! Board coordinates
//!
//! A [`Square`] is a plain (rank, file) pair. Rank index 0 is Black's back
//! rank and rank index 7 is White's, so rank digit 8 maps to index 0 when a
//! square is written as `e2`-style text.
//!
//! Off-board values are representable on purpose: offset arithmetic and raw
//! caller input both produce them, and every board access rejects them with
//! [`GameError::OutOfBounds`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::error::{GameError, GameResult};

/// Width and height of the board
pub const BOARD_SIZE: i8 = 8;

/// Board square position (rank, file)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    /// Create a square without checking bounds
    pub const fn new(rank: i8, file: i8) -> Self {
        Square { rank, file }
    }

    /// Create a square, rejecting coordinates outside the board
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_rules::Square;
    ///
    /// assert!(Square::try_new(6, 4).is_ok());
    /// assert!(Square::try_new(8, 0).is_err());
    /// ```
    pub fn try_new(rank: i8, file: i8) -> GameResult<Self> {
        Square::new(rank, file).validate()
    }

    /// Whether both coordinates lie in `0..8`
    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.rank) && (0..BOARD_SIZE).contains(&self.file)
    }

    /// Return the square itself if it is on the board
    pub fn validate(self) -> GameResult<Self> {
        if self.is_on_board() {
            Ok(self)
        } else {
            Err(GameError::OutOfBounds {
                rank: self.rank,
                file: self.file,
            })
        }
    }

    /// The square shifted by `(dr, df)`, or `None` if that leaves the board
    pub fn offset(self, dr: i8, df: i8) -> Option<Self> {
        let rank = self.rank.checked_add(dr)?;
        let file = self.file.checked_add(df)?;
        Some(Square::new(rank, file)).filter(|sq| sq.is_on_board())
    }

    /// Row-major index into a 64-cell array. Caller guarantees bounds.
    pub(crate) fn index(self) -> (usize, usize) {
        (self.rank as usize, self.file as usize)
    }

    /// Iterate all 64 squares in rank-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square::new(rank, file)))
    }

    /// File letter `'a'..='h'`
    pub fn file_char(self) -> char {
        (b'a' + self.file as u8) as char
    }

    /// Rank digit `'1'..='8'`; index 0 is rank 8
    pub fn rank_char(self) -> char {
        (b'0' + (BOARD_SIZE - self.rank) as u8) as char
    }

    fn from_letter_digit(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?.to_ascii_lowercase();
        let rank_num = chars.next()?.to_digit(10)? as i8;
        if chars.next().is_some() || !('a'..='h').contains(&file_char) || !(1..=8).contains(&rank_num) {
            return None;
        }
        Some(Square::new(BOARD_SIZE - rank_num, (file_char as u8 - b'a') as i8))
    }

    fn from_index_pair(s: &str) -> Option<Self> {
        let (rank, file) = s.split_once(',')?;
        Some(Square::new(rank.trim().parse().ok()?, file.trim().parse().ok()?))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", self.file_char(), self.rank_char())
        } else {
            write!(f, "({}, {})", self.rank, self.file)
        }
    }
}

impl FromStr for Square {
    type Err = GameError;

    /// Accepts `e2`-style names or a `rank,file` index pair such as `6,4`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(square) = Square::from_letter_digit(trimmed) {
            return Ok(square);
        }
        match Square::from_index_pair(trimmed) {
            Some(square) => square.validate(),
            None => Err(GameError::InvalidSquareName {
                input: s.to_string(),
            }),
        }
    }
}
