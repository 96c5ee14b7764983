use strum::EnumIter;

/// One side of a cell. The discriminant is the wall index used by `Cell::walls`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    // y grows downwards, as on screen.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Top => (0, -1),
            Direction::Right => (1, 0),
            Direction::Bottom => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_opposite_is_an_involution() {
        for direction in Direction::iter() {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for direction in Direction::iter() {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1, "{direction:?} should move one cell");
        }
    }

    #[test]
    fn test_iteration_follows_wall_index_order() {
        let indices: Vec<usize> = Direction::iter().map(Direction::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
