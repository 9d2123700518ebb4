use log::error;
use opcost::{run, Args, Sink, INIT_TRACE};
use std::{hint::black_box, process::ExitCode};

fn main() -> ExitCode {
    *INIT_TRACE;

    // Prints the usage text and exits 0 on --help; bad numbers exit non-zero.
    let args = Args::resolve(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let sink = &mut Sink::new();
    let stdout = std::io::stdout();
    if let Err(e) = run(&mut stdout.lock(), &args, sink) {
        error!("writing results failed: {e}");
        return ExitCode::FAILURE;
    }

    // The total only has to look used; it never decides the exit status.
    black_box(sink.total());
    ExitCode::SUCCESS
}
