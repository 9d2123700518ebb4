//! The four timed workloads.
//!
//! Each workload is a plain loop over its iteration count. Whatever an
//! iteration allocates is dropped before the next one starts.

use crate::{bench, write_banner, Args, Sink};
use log::{error, info};
use std::{collections::TryReserveError, hint::black_box, io::Write};

/// A named workload: `f(args, sink, iters)` runs `iters` iterations.
pub struct Workload {
    pub name: &'static str,
    pub f: fn(&Args, &mut Sink, u64),
}

/// All workloads, in report order.
pub const WORKLOADS: [Workload; 4] = [
    Workload {
        name: "1) empty function calls",
        f: empty_calls,
    },
    Workload {
        name: "2) snprintf to stack buffer",
        f: format_to_buffer,
    },
    Workload {
        name: "3) memcpy on stack buffer",
        f: copy_buffer,
    },
    Workload {
        name: "4) malloc/free small blocks",
        f: alloc_free,
    },
];

/// Write the banner, then bench every workload in order.
pub fn run(out: &mut impl Write, args: &Args, sink: &mut Sink) -> std::io::Result<()> {
    info!(
        "buffer {}, block {}",
        size::Size::from_bytes(args.buf_len()),
        size::Size::from_bytes(args.alloc_len())
    );
    write_banner(out, args)?;
    for w in &WORKLOADS {
        bench(out, w.name, args.iters, |n| (w.f)(args, sink, n))?;
    }
    out.flush()
}

#[inline(never)]
fn empty_function(sink: &mut Sink, x: u64) {
    sink.consume(x);
}

pub fn empty_calls(_args: &Args, sink: &mut Sink, iters: u64) {
    for i in 0..iters {
        empty_function(sink, i);
    }
}

pub fn format_to_buffer(args: &Args, sink: &mut Sink, iters: u64) {
    for i in 0..iters {
        let mut local = vec![0u8; args.buf_len()];
        // Digits that do not fit are cut off, like a bounded format.
        write!(&mut local[..], "{i}").ok();
        sink.consume(black_box(&local)[0] as u64);
    }
}

pub fn copy_buffer(args: &Args, sink: &mut Sink, iters: u64) {
    for _ in 0..iters {
        let src = black_box(vec![b'x'; args.buf_len()]);
        let mut dst = vec![0u8; src.len()];
        dst.copy_from_slice(&src);
        sink.consume(black_box(&dst)[0] as u64);
    }
}

/// Reserve exactly `len` bytes on the heap, leaving them uninitialised.
fn try_alloc(len: usize) -> Result<Vec<u8>, TryReserveError> {
    let mut block = Vec::new();
    block.try_reserve_exact(len)?;
    Ok(block)
}

pub fn alloc_free(args: &Args, sink: &mut Sink, iters: u64) {
    let len = args.alloc_len();
    for i in 0..iters {
        let mut block = match try_alloc(len) {
            Ok(block) => block,
            Err(e) => {
                error!("allocating {len} bytes failed: {e}");
                std::process::abort();
            }
        };
        // Fits in the reserved capacity, so this never reallocates.
        block.push(i as u8);
        sink.consume(black_box(&block)[0] as u64);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(buf_size: usize, malloc_size: usize) -> Args {
        Args {
            iters: 10,
            buf_size,
            malloc_size,
        }
    }

    #[test]
    fn empty_calls_sink_the_index() {
        let sink = &mut Sink::new();
        empty_calls(&Args::default(), sink, 100);
        assert_eq!(sink.total(), (0..100).sum::<u64>());
    }

    #[test]
    fn format_sinks_first_digit() {
        let sink = &mut Sink::new();
        // 0..=9, 10..=19: first digits 0..=9 then ten times '1'.
        format_to_buffer(&Args::default(), sink, 20);
        let expected: u64 = (0..10).map(|d| (b'0' + d) as u64).sum::<u64>() + 10 * b'1' as u64;
        assert_eq!(sink.total(), expected);
    }

    #[test]
    fn format_survives_tiny_buffer() {
        let sink = &mut Sink::new();
        format_to_buffer(&args(4, 8), sink, 3);
        assert_eq!(sink.total(), (b'0' + b'1' + b'2') as u64);
    }

    #[test]
    fn copy_sinks_fill_byte() {
        let sink = &mut Sink::new();
        copy_buffer(&args(0, 8), sink, 5);
        assert_eq!(sink.total(), 5 * b'x' as u64);
    }

    #[test]
    fn alloc_sinks_low_byte() {
        let sink = &mut Sink::new();
        alloc_free(&args(64, 0), sink, 300);
        let expected: u64 = (0..300u64).map(|i| i as u8 as u64).sum();
        assert_eq!(sink.total(), expected);
    }

    #[test]
    fn alloc_reserves_clamped_len() {
        let block = try_alloc(Args::default().alloc_len()).unwrap();
        assert!(block.capacity() >= 32);
        assert!(block.is_empty());
        assert!(try_alloc(usize::MAX).is_err());
    }

    #[test]
    fn zero_iterations_do_nothing() {
        let sink = &mut Sink::new();
        for w in &WORKLOADS {
            (w.f)(&Args::default(), sink, 0);
        }
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn names_in_order() {
        let names: Vec<_> = WORKLOADS.iter().map(|w| w.name).collect();
        assert_eq!(
            names,
            [
                "1) empty function calls",
                "2) snprintf to stack buffer",
                "3) memcpy on stack buffer",
                "4) malloc/free small blocks",
            ]
        );
    }
}
