//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Linearly interpolate between `a` and `b`, where `t` is the share of `a`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * t + b * (T::one() - t)
}

/// Round `value` to `digits` decimal places the way fixed-point formatting
/// does: pick the decimal nearest to the exact binary value, ties away from
/// zero, and return the double nearest to that decimal.
///
/// This differs from `(value * 100.0).round() / 100.0` when the scaled
/// product itself rounds onto or across a half, e.g. `1.115 * 100.0` is
/// exactly `111.5` in binary although `1.115` is slightly below it.
pub fn round_to(value: Component, digits: i32) -> Component {
    if !value.is_finite() {
        return value;
    }
    if value < 0.0 {
        return -round_to(-value, digits);
    }

    let scale = Component::powi(10.0, digits);

    // `mul_add` rounds once, so the sign of `value * scale - n` is exact.
    let below = |n: Component| value.mul_add(scale, -n) < 0.0;

    let mut n = (value * scale).floor();
    if below(n) {
        n -= 1.0;
    } else if !below(n + 1.0) {
        n += 1.0;
    }
    if !below(n + 0.5) {
        n += 1.0;
    }

    n / scale
}

/// Round to two decimal places, see [`round_to`].
pub fn round2(value: Component) -> Component {
    round_to(value, 2)
}
