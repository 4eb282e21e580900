use guest::fib;
use serde::Serialize;
use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::time::Instant;
use tracing_subscriber::filter::EnvFilter;

const REPORT_RANGE: RangeInclusive<u64> = 0..=10;

#[derive(Serialize)]
struct Stats {
    program: &'static str,
    n: u64,
    lines: usize,
    report_secs: f32,
}

/// Writes one `fib(i) = v` line per index of [`REPORT_RANGE`], in order.
fn report<W: Write>(out: &mut W) -> io::Result<Stats> {
    let it = Instant::now();
    let mut lines = 0;
    for n in REPORT_RANGE {
        let res = fib(n);
        tracing::debug!(n, res, "computed");
        writeln!(out, "fib({n}) = {res}")?;
        lines += 1;
    }
    let report_secs = it.elapsed().as_secs_f32();

    Ok(Stats {
        program: "fib-report",
        n: *REPORT_RANGE.end(),
        lines,
        report_secs,
    })
}

fn main() -> io::Result<()> {
    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    let stats = report(&mut stdout)?;
    stdout.flush()?;

    tracing::info!("{}", serde_json::to_string(&stats)?);
    Ok(())
}
