pub mod chess;

pub use chess::{
    course::{Course, Diagonal, Leg, Linear},
    error::{ReachError, Result},
    piece::{MovementPattern, Piece},
    reach::{get_pos, reachable, ReachTable},
    square::Square,
    traverse::{traverse_compound, traverse_diagonal, traverse_linear, Boundary},
};
