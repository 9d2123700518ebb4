use std::sync::LazyLock;

fn init_trace() {
    // Info and up; everything goes to stderr so stdout only carries the report.
    stderrlog::new()
        .color(stderrlog::ColorChoice::Auto)
        .verbosity(2)
        .show_level(true)
        .init()
        .unwrap();
}

pub static INIT_TRACE: LazyLock<()> = LazyLock::new(init_trace);
