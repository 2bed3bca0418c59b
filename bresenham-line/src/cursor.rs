use std::iter::FusedIterator;

use num_traits::{PrimInt, Signed};

use crate::coordinate::Coordinate;
use crate::line::LineGenerator;

/// A position over a [`LineGenerator`], or the end-marker.
///
/// A live cursor holds the generator's unique borrow: advancing it steps the
/// generator itself rather than a private copy. Dropping the cursor abandons
/// the traversal; [`LineGenerator::begin`] starts a new one.
#[derive(Debug)]
pub struct Cursor<'a, C, W = i32> {
    line: Option<&'a mut LineGenerator<C, W>>,
}

impl<'a, C, W> Cursor<'a, C, W>
where
    C: Coordinate,
    W: PrimInt + Signed,
{
    pub(crate) fn new(line: &'a mut LineGenerator<C, W>) -> Self {
        Cursor { line: Some(line) }
    }

    /// The end-marker.
    pub fn end() -> Self {
        Cursor { line: None }
    }

    pub fn is_end(&self) -> bool {
        self.line.is_none()
    }

    /// The coordinate under the cursor.
    ///
    /// Panics on the end-marker.
    pub fn value(&self) -> C {
        match self.try_value() {
            Some(value) => value,
            None => panic!("dereferenced the end-marker of a line"),
        }
    }

    /// The coordinate under the cursor, `None` on the end-marker.
    pub fn try_value(&self) -> Option<C> {
        self.line.as_ref().map(|line| line.current())
    }

    /// Moves to the next point, or to the end-marker once the last point has
    /// been passed. Advancing the end-marker leaves it unchanged.
    pub fn advance(&mut self) -> &mut Self {
        match self.line.take() {
            Some(line) if !line.is_exhausted() => {
                line.step();
                self.line = Some(line);
            }
            _ => {}
        }
        self
    }
}

// Cursors compare by the generator they walk, not by position.
impl<'a, 'b, C, W> PartialEq<Cursor<'b, C, W>> for Cursor<'a, C, W> {
    fn eq(&self, other: &Cursor<'b, C, W>) -> bool {
        match (&self.line, &other.line) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => std::ptr::eq::<LineGenerator<C, W>>(&**lhs, &**rhs),
            _ => false,
        }
    }
}

impl<'a, C, W> Iterator for Cursor<'a, C, W>
where
    C: Coordinate,
    W: PrimInt + Signed,
{
    type Item = C;

    fn next(&mut self) -> Option<C> {
        let value = self.try_value()?;
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self
            .line
            .as_ref()
            .map_or(0, |line| line.remaining_count() + 1);
        (len, Some(len))
    }
}

impl<'a, C, W> ExactSizeIterator for Cursor<'a, C, W>
where
    C: Coordinate,
    W: PrimInt + Signed,
{
}

impl<'a, C, W> FusedIterator for Cursor<'a, C, W>
where
    C: Coordinate,
    W: PrimInt + Signed,
{
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::Cursor;
    use crate::line::LineGenerator;

    #[test]
    fn test_walk_to_end_marker() {
        let mut line = LineGenerator::<(i32, i32)>::new((0, 0), (3, 1));
        let end = LineGenerator::<(i32, i32)>::end();

        let mut points = Vec::new();
        let mut cursor = line.begin();
        while cursor != end {
            points.push(cursor.value());
            cursor.advance();
        }
        assert_eq!(points, vec![(0, 0), (1, 0), (2, 1), (3, 1)]);
        assert!(cursor.is_end());
        assert_eq!(cursor.try_value(), None);
    }

    #[test]
    fn test_advancing_end_marker_is_noop() {
        let mut line = LineGenerator::<(i32, i32)>::new((1, 1), (1, 1));
        let mut cursor = line.begin();
        assert_eq!(cursor.value(), (1, 1));
        cursor.advance();
        assert!(cursor.is_end());
        cursor.advance().advance();
        assert!(cursor.is_end());
        assert_eq!(cursor, Cursor::<(i32, i32)>::end());
    }

    #[test]
    #[should_panic(expected = "end-marker")]
    fn test_value_of_end_marker_panics() {
        Cursor::<(i32, i32)>::end().value();
    }

    #[test]
    fn test_live_cursor_is_not_end() {
        let mut line = LineGenerator::<(i32, i32)>::new((0, 0), (0, 2));
        let end = Cursor::end();
        let cursor = line.begin();
        assert!(cursor != end);
        assert!(end != cursor);
        assert_eq!(cursor, cursor);
    }

    #[test]
    fn test_exact_size() {
        let mut line = LineGenerator::<(i32, i32)>::new((0, 0), (-6, 2));
        let mut cursor = line.begin();
        assert_eq!(cursor.len(), 7);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.len(), 5);
        assert_eq!(cursor.by_ref().collect_vec().len(), 5);
        assert_eq!(cursor.len(), 0);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_cursor_shares_generator_state() {
        let mut line = LineGenerator::<(i32, i32)>::new((0, 0), (4, 0));
        let mut cursor = line.begin();
        cursor.advance().advance();
        assert_eq!(cursor.value(), (2, 0));
        drop(cursor);
        assert_eq!(line.current(), (2, 0));
        assert_eq!(line.count(), 3);
    }
}
