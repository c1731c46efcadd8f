use std::fmt;

use cpdgrid_core::Point;

/// Which end of a query an [`PathError::InvalidEndpoint`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// What is wrong with a cell handed to the search or the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFault {
    /// Outside the world bounds.
    OutOfBounds,
    /// Inside the bounds but not traversable.
    Blocked,
    /// Not one orthogonal step from the previous path cell.
    NotAdjacent { prev: Point },
}

impl fmt::Display for CellFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Blocked => f.write_str("blocked"),
            Self::NotAdjacent { prev } => write!(f, "not adjacent to {prev}"),
        }
    }
}

/// Precondition violations reported by the search engine and the oracle.
///
/// An unreachable goal is not an error; it is reported through
/// [`SearchResult::found`](crate::SearchResult::found).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Start or goal is out of bounds or blocked.
    InvalidEndpoint {
        endpoint: Endpoint,
        pos: Point,
        fault: CellFault,
    },
    /// A path given to the oracle is structurally inconsistent.
    InvalidPath {
        index: usize,
        pos: Point,
        fault: CellFault,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint {
                endpoint,
                pos,
                fault,
            } => write!(f, "invalid {endpoint} {pos}: {fault}"),
            Self::InvalidPath { index, pos, fault } => {
                write!(f, "invalid path: step {index} at {pos} is {fault}")
            }
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = PathError::InvalidEndpoint {
            endpoint: Endpoint::Goal,
            pos: Point::new(3, 4),
            fault: CellFault::Blocked,
        };
        assert_eq!(e.to_string(), "invalid goal (3, 4): blocked");

        let e = PathError::InvalidPath {
            index: 2,
            pos: Point::new(5, 5),
            fault: CellFault::NotAdjacent {
                prev: Point::new(3, 5),
            },
        };
        assert_eq!(
            e.to_string(),
            "invalid path: step 2 at (5, 5) is not adjacent to (3, 5)"
        );
    }
}
