use super::square::UPPER_LIMIT;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Linear {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Diagonal {
    LeftTop,
    RightTop,
    LeftBottom,
    RightBottom,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Course {
    Linear(Linear),
    Diagonal(Diagonal),
}

impl Linear {
    pub const ALL: [Linear; 4] = [Linear::Top, Linear::Bottom, Linear::Left, Linear::Right];

    pub fn offset(&self) -> (i8, i8) {
        match self {
            Linear::Top => (0, 1),
            Linear::Bottom => (0, -1),
            Linear::Left => (-1, 0),
            Linear::Right => (1, 0),
        }
    }
}

impl Diagonal {
    pub const ALL: [Diagonal; 4] = [
        Diagonal::LeftTop,
        Diagonal::RightTop,
        Diagonal::LeftBottom,
        Diagonal::RightBottom,
    ];

    pub fn offset(&self) -> (i8, i8) {
        match self {
            Diagonal::LeftTop => (-1, 1),
            Diagonal::RightTop => (1, 1),
            Diagonal::LeftBottom => (-1, -1),
            Diagonal::RightBottom => (1, -1),
        }
    }
}

impl Course {
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Course::Linear(l) => l.offset(),
            Course::Diagonal(d) => d.offset(),
        }
    }
}

impl From<Linear> for Course {
    fn from(course: Linear) -> Self {
        Course::Linear(course)
    }
}

impl From<Diagonal> for Course {
    fn from(course: Diagonal) -> Self {
        Course::Diagonal(course)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Leg {
    pub course: Course,
    pub squares: u8,
}

impl Leg {
    pub const fn new(course: Course, squares: u8) -> Self {
        Self { course, squares }
    }

    pub const fn linear(course: Linear, squares: u8) -> Self {
        Self::new(Course::Linear(course), squares)
    }

    pub const fn diagonal(course: Diagonal, squares: u8) -> Self {
        Self::new(Course::Diagonal(course), squares)
    }

    pub const fn ray(course: Course) -> Self {
        Self::new(course, UPPER_LIMIT)
    }

    pub const fn step(course: Course) -> Self {
        Self::new(course, 1)
    }
}
