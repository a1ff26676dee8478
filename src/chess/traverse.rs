use log::trace;

use super::{
    course::{Course, Diagonal, Leg, Linear},
    square::Square,
};

/// What to do when a walk steps off the board.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Boundary {
    /// Keep every square reached before the edge.
    Truncate,
    /// Discard the whole walk; only complete walks count.
    Strict,
}

impl Boundary {
    #[inline(always)]
    fn overshoot(self, visited: Vec<Square>) -> Vec<Square> {
        match self {
            Boundary::Truncate => visited,
            Boundary::Strict => Vec::new(),
        }
    }
}

fn walk(origin: Square, (x, y): (i8, i8), squares: u8, boundary: Boundary) -> Vec<Square> {
    let mut visited = Vec::with_capacity(squares.min(8) as usize);
    let mut current = origin;

    while visited.len() < squares as usize {
        match current.add_offset(x, y) {
            Some(next) => {
                visited.push(next);
                current = next;
            }
            None => return boundary.overshoot(visited),
        }
    }
    visited
}

pub fn traverse_linear(origin: Square, course: Linear, squares: u8, boundary: Boundary) -> Vec<Square> {
    walk(origin, course.offset(), squares, boundary)
}

pub fn traverse_diagonal(
    origin: Square,
    course: Diagonal,
    squares: u8,
    boundary: Boundary,
) -> Vec<Square> {
    walk(origin, course.offset(), squares, boundary)
}

// A leg that yields nothing ends the chain. Under Truncate a shortened leg
// still hands its last square on to the next leg.
pub fn traverse_compound(origin: Square, path: &[Leg], boundary: Boundary) -> Vec<Square> {
    let mut visited = Vec::new();
    let mut from = origin;

    for leg in path {
        let squares = match leg.course {
            Course::Linear(course) => traverse_linear(from, course, leg.squares, boundary),
            Course::Diagonal(course) => traverse_diagonal(from, course, leg.squares, boundary),
        };

        let Some(&last) = squares.last() else {
            trace!("{:?} from {from} is blocked by the board edge", leg);
            return boundary.overshoot(visited);
        };
        trace!("{:?} from {from} reached {} squares", leg, squares.len());

        visited.extend(squares);
        from = last;
    }
    visited
}
