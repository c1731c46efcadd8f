//! An immutable obstacle grid.
//!
//! [`World`] stores one [`Terrain`] per cell in a flat row-major buffer. It is
//! built once (by a generator, a closure, or a text layout) and never mutated
//! afterwards, so searches can borrow it freely.

use std::fmt;

use crate::geom::{Point, Range};

/// Traversability of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Free,
    Blocked,
}

impl Terrain {
    /// Whether a path may step onto this cell.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Terrain::Free)
    }

    /// Layout character used by [`World::parse`] and [`World`]'s `Display`.
    pub const fn rune(self) -> char {
        match self {
            Terrain::Free => '.',
            Terrain::Blocked => '#',
        }
    }
}

/// A rectangular grid of [`Terrain`] with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    cells: Vec<Terrain>,
    bounds: Range,
}

impl World {
    /// A world of the given size where every cell is free.
    pub fn open(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_| Terrain::Free)
    }

    /// Build a world by evaluating `f` once per cell in row-major order.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> Terrain) -> Self {
        let bounds = Range::sized(width.max(0), height.max(0));
        let cells = bounds.iter().map(&mut f).collect();
        Self { cells, bounds }
    }

    /// Parse a text layout: one line per row, `.` for free and `#` for blocked.
    ///
    /// Leading and trailing blank lines are ignored. All rows must have the
    /// same width.
    pub fn parse(layout: &str) -> Result<Self, WorldError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(WorldError::InconsistentSize {
                    row: y,
                    expected: width,
                    found: row.chars().count(),
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let t = match ch {
                    '.' => Terrain::Free,
                    '#' => Terrain::Blocked,
                    _ => {
                        return Err(WorldError::InvalidRune {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(t);
            }
        }
        Ok(Self {
            cells,
            bounds: Range::sized(width as i32, rows.len() as i32),
        })
    }

    /// The bounding range of the world, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the world has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Terrain at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Terrain> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and free.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.at(p).is_some_and(Terrain::is_free)
    }

    /// Number of free cells.
    pub fn count_free(&self) -> usize {
        self.cells.iter().filter(|t| t.is_free()).count()
    }

    /// Number of blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.cells.len() - self.count_free()
    }

    /// Iterate over `(Point, Terrain)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Terrain)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let t = self.at(Point::new(x, y)).unwrap_or_default();
                write!(f, "{}", t.rune())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a world layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Rows have inconsistent widths.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `.` or `#` was found.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "world layout: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "world layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for WorldError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        ....
        .##.
        ....
    ";

    #[test]
    fn parse_and_size() {
        let w = World::parse(ROOM).unwrap();
        assert_eq!(w.width(), 4);
        assert_eq!(w.height(), 3);
        assert_eq!(w.count_free(), 10);
        assert_eq!(w.count_blocked(), 2);
        assert_eq!(w.at(Point::new(1, 1)), Some(Terrain::Blocked));
        assert_eq!(w.at(Point::new(0, 1)), Some(Terrain::Free));
        assert_eq!(w.at(Point::new(4, 0)), None);
    }

    #[test]
    fn is_free_respects_bounds() {
        let w = World::parse(ROOM).unwrap();
        assert!(w.is_free(Point::new(3, 2)));
        assert!(!w.is_free(Point::new(2, 1)));
        assert!(!w.is_free(Point::new(-1, 0)));
        assert!(!w.is_free(Point::new(0, 3)));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = World::parse("...\n..\n").unwrap_err();
        assert_eq!(
            err,
            WorldError::InconsistentSize {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_rune() {
        let err = World::parse("..\n.x\n").unwrap_err();
        assert_eq!(
            err,
            WorldError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn from_fn_visits_row_major() {
        let w = World::from_fn(3, 2, |p| {
            if p.x == p.y {
                Terrain::Blocked
            } else {
                Terrain::Free
            }
        });
        assert_eq!(w.to_string(), "#..\n.#.\n");
    }

    #[test]
    fn open_world_and_empty_world() {
        let w = World::open(5, 4);
        assert_eq!(w.count_free(), 20);
        assert!(!w.is_empty());

        let e = World::open(0, 4);
        assert!(e.is_empty());
        assert_eq!(e.bounds().len(), 0);
        assert!(World::parse("").unwrap().is_empty());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let w = World::parse(ROOM).unwrap();
        let again = World::parse(&w.to_string()).unwrap();
        assert_eq!(w, again);
    }
}
