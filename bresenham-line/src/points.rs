use std::iter::FusedIterator;

use num_traits::{PrimInt, Signed};

use crate::coordinate::Coordinate;
use crate::line::LineGenerator;

/// Owned iterator over the points of a line.
///
/// Carries its own copy of the generator state, so several `Points` over the
/// same line advance independently of each other and of the generator they
/// were made from.
#[derive(Clone, Debug)]
pub struct Points<C, W = i32> {
    line: LineGenerator<C, W>,
    done: bool,
}

impl<C, W> Points<C, W>
where
    C: Coordinate,
    W: PrimInt + Signed,
{
    pub(crate) fn new(mut line: LineGenerator<C, W>) -> Self {
        line.rewind();
        Points { line, done: false }
    }
}

impl<C, W> Iterator for Points<C, W>
where
    C: Coordinate,
    W: PrimInt + Signed,
{
    type Item = C;

    #[inline]
    fn next(&mut self) -> Option<C> {
        if self.done {
            return None;
        }
        let point = self.line.current();
        if self.line.is_exhausted() {
            self.done = true;
        } else {
            self.line.step();
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.done {
            0
        } else {
            self.line.remaining_count() + 1
        };
        (len, Some(len))
    }
}

impl<C, W> ExactSizeIterator for Points<C, W>
where
    C: Coordinate,
    W: PrimInt + Signed,
{
}

impl<C, W> FusedIterator for Points<C, W>
where
    C: Coordinate,
    W: PrimInt + Signed,
{
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::line::LineGenerator;

    #[test]
    fn test_points_match_cursor() {
        let mut line = LineGenerator::<(i32, i32)>::new((-2, 5), (9, -1));
        let from_cursor = line.begin().collect_vec();
        assert_eq!(line.points().collect_vec(), from_cursor);
        assert_eq!(line.into_iter().collect_vec(), from_cursor);
    }

    #[test]
    fn test_independent_traversals() {
        let mut line = LineGenerator::<(i32, i32)>::new((0, 0), (4, 2));
        let mut a = line.points();
        let mut b = line.points();

        assert_eq!(a.next(), Some((0, 0)));
        assert_eq!(a.next(), Some((1, 1)));
        assert_eq!(b.next(), Some((0, 0)));
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 4);

        // Walking the generator does not disturb snapshots taken earlier.
        line.begin().for_each(drop);
        assert_eq!(b.collect_vec(), vec![(1, 1), (2, 1), (3, 2), (4, 2)]);
        assert_eq!(a.collect_vec(), vec![(2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_snapshot_starts_at_first_point() {
        let mut line = LineGenerator::<(i32, i32)>::new((0, 0), (3, 0));
        let mut cursor = line.begin();
        cursor.advance().advance();
        drop(cursor);

        assert_eq!(line.points().next(), Some((0, 0)));
        assert_eq!(line.current(), (2, 0));
    }

    #[test]
    fn test_fused_after_last_point() {
        let mut points = LineGenerator::<(i32, i32)>::new((7, 7), (7, 7)).points();
        assert_eq!(points.next(), Some((7, 7)));
        assert_eq!(points.next(), None);
        assert_eq!(points.next(), None);
    }
}
