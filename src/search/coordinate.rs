use serde::Serialize;
use std::fmt::Display;
use strum_macros::EnumIter;

/// A cell of the grid, addressed by row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The adjacent coordinate in `direction`, or `None` if it would leave
    /// the non-negative quadrant. Upper bounds are the grid's business.
    pub fn step(self, direction: Direction) -> Option<Coordinate> {
        match direction {
            Direction::East => self.col.checked_add(1).map(|col| Self::new(self.row, col)),
            Direction::West => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Direction::South => self.row.checked_add(1).map(|row| Self::new(row, self.col)),
            Direction::North => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
        }
    }

    pub fn manhattan_distance(self, other: Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent_to(self, other: Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four axis-aligned moves. Declaration order is the neighbor order
/// shared by every search engine, so tie-breaks are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn neighbor_order_is_east_west_south_north() {
        let origin = Coordinate::new(5, 5);
        let neighbors: Vec<_> = Direction::iter()
            .filter_map(|direction| origin.step(direction))
            .collect();
        assert_eq!(
            neighbors,
            vec![
                Coordinate::new(5, 6),
                Coordinate::new(5, 4),
                Coordinate::new(6, 5),
                Coordinate::new(4, 5),
            ]
        );
    }

    #[test]
    fn step_stops_at_zero() {
        let origin = Coordinate::new(0, 0);
        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::South), Some(Coordinate::new(1, 0)));
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Coordinate::new(1, 7);
        let b = Coordinate::new(4, 2);
        assert_eq!(a.manhattan_distance(b), 8);
        assert_eq!(b.manhattan_distance(a), 8);
        assert!(Coordinate::new(2, 2).is_adjacent_to(Coordinate::new(2, 3)));
        assert!(!Coordinate::new(2, 2).is_adjacent_to(Coordinate::new(3, 3)));
    }

    #[test]
    fn display_is_row_then_column() {
        assert_eq!(Coordinate::new(3, 9).to_string(), "(3, 9)");
    }
}
