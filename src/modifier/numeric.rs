//! Ready-made numeric modifiers
//!
//! Small constructors for the transformations most lists of numbers need.
//! All of them are plain closures and can be passed to `compose_front`.

use num_traits::{Num, Signed};

/// Add a fixed amount.
pub fn offset<T>(amount: T) -> impl Fn(T) -> T + Clone + 'static
where
    T: Num + Copy + 'static,
{
    move |value: T| value + amount
}

/// Multiply by a fixed factor.
pub fn scale<T>(factor: T) -> impl Fn(T) -> T + Clone + 'static
where
    T: Num + Copy + 'static,
{
    move |value: T| value * factor
}

/// Flip the sign.
pub fn negate<T>() -> impl Fn(T) -> T + Clone + 'static
where
    T: Signed + 'static,
{
    |value: T| -value
}

/// Pin values into `[low, high]`.
///
/// # Panics
/// In debug builds the returned modifier panics if `low > high`.
pub fn clamp<T>(low: T, high: T) -> impl Fn(T) -> T + Clone + 'static
where
    T: PartialOrd + Copy + 'static,
{
    move |value: T| num_traits::clamp(value, low, high)
}
