use thiserror::Error;

/// Errors reported by the checked Fibonacci functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FibonacciError {
    #[error("Fibonacci number at index {index} does not fit in i64")]
    Overflow { index: i64 },
}
