use crate::Args;
use log::{debug, info};
use std::{io::Write, time::Instant};

/// Untimed calls made before the measurement.
pub const WARMUP_ROUNDS: usize = 3;
/// Iterations per warm-up call, independent of the configured count.
pub const WARMUP_ITERS: u64 = 1000;

/// Write the startup banner, followed by an empty line.
pub fn write_banner(out: &mut impl Write, args: &Args) -> std::io::Result<()> {
    writeln!(
        out,
        "Iters = {}, buf size = {}, malloc size = {}\n",
        args.iters, args.buf_size, args.malloc_size
    )
}

/// Warm up `f`, then time a single `f(iters)` call and report it as
/// `name: <ms> ms`. Returns the elapsed milliseconds.
///
/// Only the one bulk call is timed; the timer is never read per iteration.
pub fn bench(
    out: &mut impl Write,
    name: &str,
    iters: u64,
    mut f: impl FnMut(u64),
) -> std::io::Result<f64> {
    debug!("{name}: warming up");
    for _ in 0..WARMUP_ROUNDS {
        f(WARMUP_ITERS);
    }

    let start = Instant::now();
    f(iters);
    let elapsed = start.elapsed();
    let ms = elapsed.as_secs_f64() * 1000.;

    writeln!(out, "{name}: {ms:.3} ms")?;
    if iters > 0 {
        let per_iter = elapsed.as_nanos() as f64 / iters as f64;
        info!("{name}: {per_iter:>6.2}ns/it");
    }
    Ok(ms)
}
