use std::fmt;

use crate::error::FibonacciError;

/// Computes the nth Fibonacci number with a single loop.
///
/// Fibonacci sequence: 0, 1, 1, 2, 3, 5, 8, 13, 21, ...
/// Runs in O(n) time and O(1) space. Indices at or below zero yield 0.
///
/// # Examples
///
/// ```
/// use fibonacci_rs::fibonacci::fibonacci_iterative;
///
/// assert_eq!(fibonacci_iterative(-3), 0);
/// assert_eq!(fibonacci_iterative(0), 0);
/// assert_eq!(fibonacci_iterative(1), 1);
/// assert_eq!(fibonacci_iterative(10), 55);
/// ```
pub fn fibonacci_iterative(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    if n == 1 {
        return 1;
    }

    let mut fib1: i64 = 0;
    let mut fib2: i64 = 1;
    let mut result: i64 = 0;

    for _ in 2..=n {
        result = fib1 + fib2;
        fib1 = fib2;
        fib2 = result;
    }

    result
}

/// Computes the nth Fibonacci number by naive double recursion.
///
/// No intermediate values are cached, so the number of calls grows
/// exponentially with `n`. Indices at or below zero yield 0.
///
/// ```
/// use fibonacci_rs::fibonacci::fibonacci_recursive;
///
/// assert_eq!(fibonacci_recursive(10), 55);
/// ```
pub fn fibonacci_recursive(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    if n == 1 {
        return 1;
    }

    fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2)
}

/// Iterative Fibonacci with overflow detection.
///
/// Returns [`FibonacciError::Overflow`] once the value no longer fits in
/// `i64`; F(92) is the last index that does.
pub fn fibonacci_checked(n: i64) -> Result<i64, FibonacciError> {
    if n <= 0 {
        return Ok(0);
    }
    if n == 1 {
        return Ok(1);
    }

    let mut fib1: i64 = 0;
    let mut fib2: i64 = 1;

    for _ in 2..=n {
        let next = fib1
            .checked_add(fib2)
            .ok_or(FibonacciError::Overflow { index: n })?;
        fib1 = fib2;
        fib2 = next;
    }

    Ok(fib2)
}

/// The two ways of computing a Fibonacci number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Iterative,
    Recursive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Iterative, Algorithm::Recursive];

    pub fn compute(self, n: i64) -> i64 {
        match self {
            Algorithm::Iterative => fibonacci_iterative(n),
            Algorithm::Recursive => fibonacci_recursive(n),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Iterative => "Iterative",
            Algorithm::Recursive => "Recursive",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
