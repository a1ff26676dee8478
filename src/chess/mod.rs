pub mod course;
pub mod error;
pub mod piece;
pub mod reach;
pub mod square;
pub mod traverse;
