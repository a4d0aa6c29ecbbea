//! Fibonacci numbers computed two ways.
//!
//! The iterative version runs in linear time. The recursive version is the
//! textbook double recursion and runs in exponential time; it is kept that
//! way so the two can be compared.

pub mod error;
pub mod fibonacci;

pub use error::FibonacciError;
pub use fibonacci::{fibonacci_checked, fibonacci_iterative, fibonacci_recursive, Algorithm};
