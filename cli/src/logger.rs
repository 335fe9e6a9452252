use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;
static STDERR_LOGGER: StderrLogger = StderrLogger;
impl Log for StderrLogger {
    fn enabled(
        &self,
        metadata: &Metadata<'_>,
    ) -> bool {
        metadata.level() <= log::max_level()
    }
    fn log(
        &self,
        record: &Record<'_>,
    ) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }
    fn flush(&self) {}
}

pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger; later calls keep the first logger.
pub fn init(verbosity: u8) {
    let _ = log::set_logger(&STDERR_LOGGER)
        .map(|_| log::set_max_level(level_for_verbosity(verbosity)));
}
