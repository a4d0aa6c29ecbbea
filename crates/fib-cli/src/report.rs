use std::io::{self, Write};
use std::time::Instant;

use fibonacci_rs::Algorithm;
use tracing::info;

/// Index computed by the driver.
pub const INDEX: i64 = 10;

/// Writes one result line per algorithm, iterative first.
pub fn report<W: Write>(n: i64, out: &mut W) -> io::Result<()> {
    for algorithm in Algorithm::ALL {
        let started = Instant::now();
        let value = algorithm.compute(n);
        info!(%algorithm, n, value, elapsed = ?started.elapsed(), "computed");

        writeln!(out, "{}: Fibonacci number at index {} is {}", algorithm, n, value)?;
    }
    Ok(())
}
