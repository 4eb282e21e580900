/// Computes the `n`'th fibonacci number by naive double recursion.
///
/// Runs in exponential time. Results past `fib(93)` naturally overflow at 64 bits.
pub fn fib(n: u64) -> u64 {
    match n {
        0 | 1 => n,
        _ => fib(n - 1).wrapping_add(fib(n - 2)),
    }
}
