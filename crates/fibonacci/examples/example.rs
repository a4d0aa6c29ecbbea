use fibonacci_rs::{fibonacci_checked, Algorithm};

fn main() {
    println!("Fibonacci sequence (first 15 numbers):");
    for n in 0..15 {
        let row: Vec<String> = Algorithm::ALL
            .iter()
            .map(|algorithm| format!("{} = {}", algorithm, algorithm.compute(n)))
            .collect();
        println!("fib({:>2}): {}", n, row.join(", "));
    }

    println!("\nedge of i64:");
    for n in [92, 93] {
        match fibonacci_checked(n) {
            Ok(value) => println!("fib({}) = {}", n, value),
            Err(err) => println!("fib({}): {}", n, err),
        }
    }
}
