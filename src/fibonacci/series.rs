//! Fibonacci membership and five-term run detection.

/// Number of cells in a matching run.
pub const RUN_LENGTH: usize = 5;

/// Check whether `x` is a perfect square.
#[must_use]
pub fn is_perfect_square(x: u128) -> bool {
    let s = isqrt(x);
    s * s == x
}

/// Integer square root (floor).
fn isqrt(x: u128) -> u128 {
    // Float estimate, then correct the rounding error in either direction.
    let mut s = (x as f64).sqrt() as u128;
    while s * s > x {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= x {
        s += 1;
    }
    s
}

/// Check whether `n` is a Fibonacci number.
///
/// `n` is Fibonacci iff `5n² + 4` or `5n² - 4` is a perfect square.
/// `0` counts as Fibonacci.
#[must_use]
pub fn is_fibonacci(n: u32) -> bool {
    let n = u128::from(n);
    let base = 5 * n * n;
    is_perfect_square(base + 4) || base.checked_sub(4).is_some_and(is_perfect_square)
}

/// Check whether five values form a consecutive Fibonacci run.
///
/// Returns false unless exactly [`RUN_LENGTH`] values are given. Each of the
/// three overlapping triples `(v[i], v[i+1], v[i+2])` is visited in order:
/// two adjacent zeros at `v[i], v[i+1]` reject the whole run immediately.
///
/// Only the last triple decides the result: it must be three Fibonacci
/// numbers with `v[2] + v[3] == v[4]`. Earlier triples contribute only their
/// zero check. Requiring every triple to chain would be the intuitive rule,
/// but matching depends on this exact behavior.
///
/// ```
/// use fib_grid::fibonacci::is_consecutive_fibonacci_series;
///
/// assert!(is_consecutive_fibonacci_series(&[2, 3, 5, 8, 13]));
/// assert!(!is_consecutive_fibonacci_series(&[1, 1, 2, 3, 13]));
/// assert!(!is_consecutive_fibonacci_series(&[2, 3, 5, 8]));
/// ```
#[must_use]
pub fn is_consecutive_fibonacci_series(values: &[u32]) -> bool {
    if values.len() != RUN_LENGTH {
        return false;
    }

    let mut is_consecutive = false;
    for window in values.windows(3) {
        let (prev, next, sum) = (window[0], window[1], window[2]);

        if prev == 0 && next == 0 {
            return false;
        }

        is_consecutive = is_fibonacci(prev)
            && is_fibonacci(next)
            && is_fibonacci(sum)
            && u64::from(prev) + u64::from(next) == u64::from(sum);
    }

    is_consecutive
}
