use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::ReachError;

pub const LOWER_LIMIT: u8 = 1;
pub const UPPER_LIMIT: u8 = 8;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

pub fn file_index(file: char) -> Option<u8> {
    FILES
        .iter()
        .position(|&f| f == file)
        .map(|i| i as u8 + LOWER_LIMIT)
}

pub fn file_char(index: u8) -> Option<char> {
    if (LOWER_LIMIT..=UPPER_LIMIT).contains(&index) {
        Some(FILES[(index - LOWER_LIMIT) as usize])
    } else {
        None
    }
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub const NUM: usize = 64;

    pub fn new(file: u8, rank: u8) -> Option<Self> {
        let on_board = |v: u8| (LOWER_LIMIT..=UPPER_LIMIT).contains(&v);
        if on_board(file) && on_board(rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    // a1 = 0, h1 = 7, a2 = 8 ... h8 = 63
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= Self::NUM {
            return None;
        }
        Self::new((index % 8) as u8 + 1, (index / 8) as u8 + 1)
    }

    pub fn index(&self) -> usize {
        (self.rank - 1) as usize * 8 + (self.file - 1) as usize
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn file_char(&self) -> char {
        FILES[(self.file - 1) as usize]
    }

    pub fn add_offset(&self, x: i8, y: i8) -> Option<Self> {
        let file = self.file as i8 + x;
        let rank = self.rank as i8 + y;

        if file < LOWER_LIMIT as i8 || rank < LOWER_LIMIT as i8 {
            None
        } else {
            Self::new(file as u8, rank as u8)
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM).filter_map(Self::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank)
    }
}

impl FromStr for Square {
    type Err = ReachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReachError::InvalidSquare(s.to_string());

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = file_index(file).ok_or_else(invalid)?;
        let rank = rank.to_digit(10).ok_or_else(invalid)? as u8;
        Self::new(file, rank).ok_or_else(invalid)
    }
}

impl TryFrom<String> for Square {
    type Error = ReachError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}
