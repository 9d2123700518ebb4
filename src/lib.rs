pub mod args;
pub mod bench;
pub mod sink;
pub mod util;
pub mod workloads;

pub use args::Args;
pub use bench::{bench, write_banner};
pub use sink::Sink;
pub use util::INIT_TRACE;
pub use workloads::{run, Workload, WORKLOADS};

#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}
