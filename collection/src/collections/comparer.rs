use core::cmp::Ordering;

pub use natural::NaturalStringComparer;

mod natural;

/// A total order over two elements, used by [`Collection::sort_with`].
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparer, so ad hoc orders do not
/// need a named type.
///
/// [`Collection::sort_with`]: super::collection::Collection::sort_with
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their type's natural [`Ord`]: numeric magnitude for
/// integers, code-point order for strings and characters.
///
/// Digit runs inside strings get no special treatment, so `"img2.png"` sorts
/// after `"img12.png"`. Use [`NaturalStringComparer`] for that.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultComparer;

impl<T: Ord + ?Sized> Comparer<T> for DefaultComparer {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders floating point numbers by magnitude using IEEE 754 `totalOrder`.
///
/// `-0.0` sorts before `0.0` and NaN sorts after every other value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FloatComparer;

impl Comparer<f64> for FloatComparer {
    #[inline]
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }
}

impl Comparer<f32> for FloatComparer {
    #[inline]
    fn compare(&self, a: &f32, b: &f32) -> Ordering {
        a.total_cmp(b)
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
