use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    course::{Course, Diagonal, Leg, Linear},
    error::ReachError,
    traverse::Boundary,
};

const PIECE_TYPE_COUNT: usize = 6;

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

#[derive(Debug)]
pub struct MovementPattern {
    pub paths: &'static [&'static [Leg]],
    pub boundary: Boundary,
    pub endpoint_only: bool,
}

const TOP: Course = Course::Linear(Linear::Top);
const BOTTOM: Course = Course::Linear(Linear::Bottom);
const LEFT: Course = Course::Linear(Linear::Left);
const RIGHT: Course = Course::Linear(Linear::Right);
const LTOP: Course = Course::Diagonal(Diagonal::LeftTop);
const RTOP: Course = Course::Diagonal(Diagonal::RightTop);
const LBOTTOM: Course = Course::Diagonal(Diagonal::LeftBottom);
const RBOTTOM: Course = Course::Diagonal(Diagonal::RightBottom);

static PAWN: MovementPattern = MovementPattern {
    paths: &[&[Leg::step(TOP)], &[Leg::step(RTOP)], &[Leg::step(LTOP)]],
    boundary: Boundary::Truncate,
    endpoint_only: false,
};

static KNIGHT: MovementPattern = MovementPattern {
    paths: &[
        &[Leg::step(RTOP), Leg::step(TOP)],
        &[Leg::step(RTOP), Leg::step(RIGHT)],
        &[Leg::step(RBOTTOM), Leg::step(RIGHT)],
        &[Leg::step(RBOTTOM), Leg::step(BOTTOM)],
        &[Leg::step(LTOP), Leg::step(TOP)],
        &[Leg::step(LTOP), Leg::step(LEFT)],
        &[Leg::step(LBOTTOM), Leg::step(BOTTOM)],
        &[Leg::step(LBOTTOM), Leg::step(LEFT)],
    ],
    boundary: Boundary::Strict,
    endpoint_only: true,
};

static BISHOP: MovementPattern = MovementPattern {
    paths: &[&[Leg::ray(LTOP)], &[Leg::ray(RTOP)], &[Leg::ray(LBOTTOM)], &[Leg::ray(RBOTTOM)]],
    boundary: Boundary::Truncate,
    endpoint_only: false,
};

static ROOK: MovementPattern = MovementPattern {
    paths: &[&[Leg::ray(TOP)], &[Leg::ray(BOTTOM)], &[Leg::ray(LEFT)], &[Leg::ray(RIGHT)]],
    boundary: Boundary::Truncate,
    endpoint_only: false,
};

static QUEEN: MovementPattern = MovementPattern {
    paths: &[
        &[Leg::ray(TOP)],
        &[Leg::ray(BOTTOM)],
        &[Leg::ray(LEFT)],
        &[Leg::ray(RIGHT)],
        &[Leg::ray(LTOP)],
        &[Leg::ray(RTOP)],
        &[Leg::ray(LBOTTOM)],
        &[Leg::ray(RBOTTOM)],
    ],
    boundary: Boundary::Truncate,
    endpoint_only: false,
};

static KING: MovementPattern = MovementPattern {
    paths: &[
        &[Leg::step(TOP)],
        &[Leg::step(BOTTOM)],
        &[Leg::step(LEFT)],
        &[Leg::step(RIGHT)],
        &[Leg::step(RTOP)],
        &[Leg::step(LTOP)],
        &[Leg::step(RBOTTOM)],
        &[Leg::step(LBOTTOM)],
    ],
    boundary: Boundary::Truncate,
    endpoint_only: false,
};

impl Piece {
    pub const ALL: [Piece; PIECE_TYPE_COUNT] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    pub fn pattern(&self) -> &'static MovementPattern {
        match self {
            Piece::Pawn => &PAWN,
            Piece::Knight => &KNIGHT,
            Piece::Bishop => &BISHOP,
            Piece::Rook => &ROOK,
            Piece::Queen => &QUEEN,
            Piece::King => &KING,
        }
    }

    pub fn is_slider(&self) -> bool {
        *self == Piece::Rook || *self == Piece::Bishop || *self == Piece::Queen
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Piece::Pawn => "PAWN",
            Piece::Knight => "KNIGHT",
            Piece::Bishop => "BISHOP",
            Piece::Rook => "ROOK",
            Piece::Queen => "QUEEN",
            Piece::King => "KING",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Piece {
    type Err = ReachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Piece::ALL
            .into_iter()
            .find(|piece| piece.as_str() == s)
            .ok_or_else(|| ReachError::UnknownPiece(s.to_string()))
    }
}

#[cfg(test)]
mod piece_tests {
    use super::*;
    use crate::chess::square::UPPER_LIMIT;

    #[test]
    fn names_roundtrip() {
        for piece in Piece::ALL {
            assert_eq!(piece.to_string().parse::<Piece>().unwrap(), piece);
        }
        assert!(matches!("PAWN".parse::<Piece>(), Ok(Piece::Pawn)));
        assert!(matches!("pawn".parse::<Piece>(), Err(ReachError::UnknownPiece(_))));
        assert!(matches!("ARCHBISHOP".parse::<Piece>(), Err(ReachError::UnknownPiece(_))));
    }

    #[test]
    fn sliders_run_full_rays() {
        for piece in Piece::ALL.into_iter().filter(Piece::is_slider) {
            let pattern = piece.pattern();
            assert_eq!(pattern.boundary, Boundary::Truncate);
            assert!(!pattern.endpoint_only);
            for path in pattern.paths {
                assert_eq!(path.len(), 1);
                assert_eq!(path[0].squares, UPPER_LIMIT);
            }
        }
        assert_eq!(Piece::Queen.pattern().paths.len(), 8);
    }

    #[test]
    fn steppers_move_one_square() {
        assert_eq!(Piece::Pawn.pattern().paths.len(), 3);
        assert_eq!(Piece::King.pattern().paths.len(), 8);
        for piece in [Piece::Pawn, Piece::King] {
            for path in piece.pattern().paths {
                assert_eq!(path.len(), 1);
                assert_eq!(path[0].squares, 1);
            }
        }
    }

    #[test]
    fn knight_jumps_are_l_shaped() {
        let pattern = Piece::Knight.pattern();
        assert_eq!(pattern.boundary, Boundary::Strict);
        assert!(pattern.endpoint_only);
        assert_eq!(pattern.paths.len(), 8);

        let mut offsets = Vec::new();
        for path in pattern.paths {
            assert_eq!(path.len(), 2);
            assert!(matches!(path[0].course, Course::Diagonal(_)));
            assert!(matches!(path[1].course, Course::Linear(_)));
            let (x0, y0) = path[0].course.offset();
            let (x1, y1) = path[1].course.offset();
            let (x, y) = (x0 + x1, y0 + y1);
            assert_eq!((x.abs().min(y.abs()), x.abs().max(y.abs())), (1, 2));
            offsets.push((x, y));
        }
        offsets.sort();
        offsets.dedup();
        assert_eq!(offsets.len(), 8);
    }
}
