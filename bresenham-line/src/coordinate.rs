use num_traits::PrimInt;

/// A copyable point with integral `x` and `y` components.
///
/// Implemented for `(T, T)` and `[T; 2]`. Point types from other crates can
/// implement it with four one-line accessors.
pub trait Coordinate: Copy {
    type Component: PrimInt;

    fn x(&self) -> Self::Component;
    fn y(&self) -> Self::Component;
    fn set_x(&mut self, x: Self::Component);
    fn set_y(&mut self, y: Self::Component);
}

impl<T: PrimInt> Coordinate for (T, T) {
    type Component = T;

    #[inline]
    fn x(&self) -> T {
        self.0
    }

    #[inline]
    fn y(&self) -> T {
        self.1
    }

    #[inline]
    fn set_x(&mut self, x: T) {
        self.0 = x;
    }

    #[inline]
    fn set_y(&mut self, y: T) {
        self.1 = y;
    }
}

impl<T: PrimInt> Coordinate for [T; 2] {
    type Component = T;

    #[inline]
    fn x(&self) -> T {
        self[0]
    }

    #[inline]
    fn y(&self) -> T {
        self[1]
    }

    #[inline]
    fn set_x(&mut self, x: T) {
        self[0] = x;
    }

    #[inline]
    fn set_y(&mut self, y: T) {
        self[1] = y;
    }
}
