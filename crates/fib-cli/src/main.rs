fn main() -> anyhow::Result<()> {
    // Synchronous all the way down; no runtime to set up.
    fib_cli::run()
}
