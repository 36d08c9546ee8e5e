use std::sync::Arc;

use tracing_kv_logger::init::{try_init, LoggingConfig};
use tracing_kv_logger::json_sink::JsonLinesSink;
use tracing_kv_logger::{kv, KvLoggerAdapter, Severity};

fn main() {
    // Human-readable lines from the fmt layer plus one JSON object per
    // record on stdout.
    let config = LoggingConfig::from_env().with_sink(Arc::new(JsonLinesSink::stdout()));
    let _guard = match try_init(config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    let log = KvLoggerAdapter::get_logger(["demo", "basic"]).with_extra(kv! { pid = std::process::id() });
    log.info(kv! { step = "start", items = 3 });
    for item in 0..3 {
        log.log(Severity::Warning, kv! { item = item, status = "slow" });
    }

    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
    log.exception(&err, kv! { step = "load_config" });
}
