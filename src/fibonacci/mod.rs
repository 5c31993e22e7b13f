//! Pure Fibonacci predicates used by the match scan.
//!
//! - `is_fibonacci`: closed-form membership test
//! - `is_consecutive_fibonacci_series`: five-term run test

mod series;

pub use series::{is_consecutive_fibonacci_series, is_fibonacci, is_perfect_square, RUN_LENGTH};
