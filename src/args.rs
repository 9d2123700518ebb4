use clap::Parser;
use std::ffi::OsString;

/// Printed verbatim for `--help` and `-h`.
pub const USAGE: &str = "\
Usage:
  ./main [--iters N] [--buf B] [--malloc M]

Options:
  --iters, -n   Number of loop iterations per test (default 50,000,000)
  --buf         Stack buffer size for snprintf/memcpy (default 64)
  --malloc      Allocation size for malloc/free (default 32)
";

/// Smallest buffer the formatting and copy workloads will use.
pub const MIN_BUF: usize = 16;
/// Smallest block the allocation workload will request.
pub const MIN_ALLOC: usize = 8;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "main", override_help = USAGE, args_override_self = true)]
pub struct Args {
    /// Number of loop iterations per test.
    #[clap(short = 'n', long = "iters", default_value_t = 50_000_000)]
    pub iters: u64,
    /// Buffer size for the formatting and copy workloads.
    #[clap(long = "buf", default_value_t = 64)]
    pub buf_size: usize,
    /// Block size for the allocation workload.
    #[clap(long = "malloc", default_value_t = 32)]
    pub malloc_size: usize,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            iters: 50_000_000,
            buf_size: 64,
            malloc_size: 32,
        }
    }
}

impl Args {
    /// Resolve the parameters from a full argument list, program name first.
    ///
    /// Unknown tokens are skipped, and so is a flag with nothing after it.
    /// Everything up to the first `--help`/`-h` is kept; the rest is never
    /// looked at. A value that is not a number is a clap error, and so is the
    /// help request itself (`ErrorKind::DisplayHelp`), which `Error::exit`
    /// turns into the usage text on stdout and status 0.
    pub fn resolve<I, T>(tokens: I) -> Result<Args, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut tokens = tokens.into_iter().map(Into::into);
        let mut kept = vec![tokens.next().unwrap_or_else(|| OsString::from("main"))];

        while let Some(token) = tokens.next() {
            // A token that is not UTF-8 is never a flag.
            let flag = match token.to_str() {
                Some("--iters" | "-n") => "--iters",
                Some("--buf") => "--buf",
                Some("--malloc") => "--malloc",
                Some("--help" | "-h") => {
                    kept.push(OsString::from("--help"));
                    break;
                }
                _ => continue,
            };
            // `--flag=value` so that the next token is always taken as the
            // value, even when it looks like a flag itself.
            match tokens.next() {
                Some(value) => {
                    let mut arg = OsString::from(format!("{flag}="));
                    arg.push(value);
                    kept.push(arg);
                }
                None => break,
            }
        }

        Args::try_parse_from(kept)
    }

    /// Buffer length actually used by the formatting and copy workloads.
    pub fn buf_len(&self) -> usize {
        self.buf_size.max(MIN_BUF)
    }

    /// Block length actually requested by the allocation workload.
    pub fn alloc_len(&self) -> usize {
        self.malloc_size.max(MIN_ALLOC)
    }
}
