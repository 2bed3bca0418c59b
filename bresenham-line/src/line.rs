use std::fmt;

use num_traits::{NumCast, PrimInt, Signed};

use crate::coordinate::Coordinate;
use crate::cursor::Cursor;
use crate::error::{Axis, LineError, Result};
use crate::points::Points;

/// Generates the points of a line segment with Bresenham's algorithm, using
/// integer additions and comparisons only.
///
/// `W` is the working type of the deltas and of the decision variable. Twice
/// the longest axis delta must fit in it, e.g. an `i16` generator handles a
/// major-axis delta of up to 16383.
///
/// The generator is its own traversal state. [`begin`](Self::begin) rewinds it
/// and returns a [`Cursor`] holding the generator's unique borrow, so one
/// traversal at a time can be in progress. [`points`](Self::points) gives an
/// owned iterator instead, for independent traversals.
#[derive(Clone, Debug)]
pub struct LineGenerator<C, W = i32> {
    first: C,
    current: C,
    x_step: W,
    y_step: W,
    dx: W,
    dy: W,
    y_major: bool,
    initial_error: W,
    error: W,
    total_count: W,
    remaining: W,
    minor_pending: bool,
}

impl<C, W> LineGenerator<C, W>
where
    C: Coordinate,
    W: PrimInt + Signed,
{
    /// Creates a generator positioned at `first`.
    ///
    /// Panics if twice an axis delta does not fit in `W`.
    pub fn new(first: C, last: C) -> Self {
        match Self::try_new(first, last) {
            Ok(line) => line,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a generator positioned at `first`, or fails if twice an axis
    /// delta does not fit in `W`.
    pub fn try_new(first: C, last: C) -> Result<Self> {
        let (x_step, dx) = axis_delta::<_, W>(first.x(), last.x())
            .ok_or(LineError::DeltaOutOfRange { axis: Axis::X })?;
        let (y_step, dy) = axis_delta::<_, W>(first.y(), last.y())
            .ok_or(LineError::DeltaOutOfRange { axis: Axis::Y })?;

        // Diagonals keep X as the major axis.
        let y_major = dx < dy;
        let (major, minor) = if y_major { (dy, dx) } else { (dx, dy) };
        let two = W::one() + W::one();
        let initial_error = minor * two - major;
        let total_count = major + W::one();

        let mut line = LineGenerator {
            first,
            current: first,
            x_step,
            y_step,
            dx: dx * two,
            dy: dy * two,
            y_major,
            initial_error,
            error: initial_error,
            total_count,
            remaining: total_count - W::one(),
            minor_pending: false,
        };
        line.minor_pending = line.minor_decision();
        Ok(line)
    }

    /// Total number of points, both endpoints included.
    pub fn len(&self) -> usize {
        to_count(self.total_count)
    }

    /// Always false: a line holds at least its first point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of points produced so far in the current traversal.
    pub fn count(&self) -> usize {
        to_count(self.total_count - self.remaining)
    }

    pub fn first(&self) -> C {
        self.first
    }

    /// The most recently produced point.
    pub fn current(&self) -> C {
        self.current
    }

    pub fn is_y_major(&self) -> bool {
        self.y_major
    }

    /// Step signs along x and y, each -1 or +1.
    pub fn direction(&self) -> (W, W) {
        (self.x_step, self.y_step)
    }

    /// Rewinds to the first point and returns a live cursor on it.
    pub fn begin(&mut self) -> Cursor<'_, C, W> {
        self.rewind();
        Cursor::new(self)
    }

    /// The end-marker, equal to any cursor that has moved past the last point.
    pub fn end<'a>() -> Cursor<'a, C, W> {
        Cursor::end()
    }

    /// An owned iterator over all points, independent of this generator.
    pub fn points(&self) -> Points<C, W> {
        Points::new(self.clone())
    }

    pub(crate) fn rewind(&mut self) {
        self.current = self.first;
        self.remaining = self.total_count - W::one();
        self.error = self.initial_error;
        self.minor_pending = self.minor_decision();
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.remaining.is_zero()
    }

    pub(crate) fn remaining_count(&self) -> usize {
        to_count(self.remaining)
    }

    /// Moves `current` to the next point. Requires `remaining > 0`.
    pub(crate) fn step(&mut self) {
        if self.y_major {
            if self.minor_pending {
                self.current.set_x(offset(self.current.x(), self.x_step));
                self.error = self.error - self.dy;
            }
            self.current.set_y(offset(self.current.y(), self.y_step));
            self.error = self.error + self.dx;
        } else {
            if self.minor_pending {
                self.current.set_y(offset(self.current.y(), self.y_step));
                self.error = self.error - self.dx;
            }
            self.current.set_x(offset(self.current.x(), self.x_step));
            self.error = self.error + self.dy;
        }

        self.remaining = self.remaining - W::one();
        self.minor_pending = self.minor_decision();
    }

    /// Whether the next step also moves the minor axis. An error of exactly
    /// zero is a half-pixel tie and resolves towards the larger minor
    /// coordinate, whichever way the line is walked.
    fn minor_decision(&self) -> bool {
        let minor_step = if self.y_major {
            self.x_step
        } else {
            self.y_step
        };
        self.error.is_positive() || (self.error.is_zero() && minor_step.is_positive())
    }
}

impl<'a, C, W> IntoIterator for &'a mut LineGenerator<C, W>
where
    C: Coordinate,
    W: PrimInt + Signed,
{
    type Item = C;
    type IntoIter = Cursor<'a, C, W>;

    fn into_iter(self) -> Cursor<'a, C, W> {
        self.begin()
    }
}

impl<C, W> IntoIterator for LineGenerator<C, W>
where
    C: Coordinate,
    W: PrimInt + Signed,
{
    type Item = C;
    type IntoIter = Points<C, W>;

    fn into_iter(self) -> Points<C, W> {
        Points::new(self)
    }
}

impl<C, W> slog::KV for LineGenerator<C, W>
where
    C: Coordinate + fmt::Debug,
    W: PrimInt + Signed + fmt::Display,
{
    fn serialize(
        &self,
        _record: &slog::Record,
        serializer: &mut dyn slog::Serializer,
    ) -> slog::Result {
        serializer.emit_arguments("first", &format_args!("{:?}", self.first))?;
        serializer.emit_arguments("current", &format_args!("{:?}", self.current))?;
        serializer.emit_usize("len", self.len())?;
        serializer.emit_usize("count", self.count())?;
        serializer.emit_bool("y_major", self.y_major)?;
        serializer.emit_arguments("error", &format_args!("{}", self.error))
    }
}

/// Step direction and absolute delta from `from` to `to`, or `None` when
/// twice the delta does not fit in `W`.
fn axis_delta<T: PrimInt, W: PrimInt + Signed>(from: T, to: T) -> Option<(W, W)> {
    let step = if to < from { -W::one() } else { W::one() };
    let delta: W = match (<W as NumCast>::from(from), <W as NumCast>::from(to)) {
        (Some(from), Some(to)) => {
            if to < from {
                from.checked_sub(&to)?
            } else {
                to.checked_sub(&from)?
            }
        }
        // Unsigned values beyond the range of `W`.
        _ => {
            let delta = if to < from {
                from.checked_sub(&to)?
            } else {
                to.checked_sub(&from)?
            };
            NumCast::from(delta)?
        }
    };
    // Every intermediate value of the decision variable lies in [-2 delta, 2 delta].
    delta.checked_add(&delta)?;
    Some((step, delta))
}

#[inline]
fn offset<T: PrimInt, W: Signed>(value: T, step: W) -> T {
    if step.is_negative() {
        value - T::one()
    } else {
        value + T::one()
    }
}

// Counts are never negative.
fn to_count<W: PrimInt>(n: W) -> usize {
    n.to_usize().unwrap_or(usize::MAX)
}
