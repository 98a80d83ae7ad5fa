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
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }
    fn flush(&self) {}
}

pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = log::set_logger(&STDERR_LOGGER).map(|_| log::set_max_level(level));
}
