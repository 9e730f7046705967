use std::fmt;

/// Sort direction of an ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => "ASC".fmt(f),
            Direction::Desc => "DESC".fmt(f),
        }
    }
}
