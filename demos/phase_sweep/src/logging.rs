use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Install the global stderr subscriber.  `verbosity` counts `-v` flags:
/// 0 = warn, 1 = info, 2 = debug, more = trace.
pub fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry().with(level).with(layer).init();
}
