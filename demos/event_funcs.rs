use std::time::Instant;

use tracing_kv_logger::init::init;
use tracing_kv_logger::{kv, EventKvLoggerAdapter, Severity};

fn main() {
    let _guard = init();

    let log = EventKvLoggerAdapter::get_logger(["demo.", "events"]);
    let request = match log.define_logger_func(Severity::Info, "method path status") {
        Ok(func) => func,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    let n: u64 = 10_000;
    let start = Instant::now();
    for i in 0..n {
        let status = if i % 100 == 0 { 500 } else { 200 };
        if let Err(e) = request.call(&[&"HTTP_REQUEST", &"GET", &"/health", &status]) {
            eprintln!("{}", e);
        }
    }

    let elapsed = start.elapsed();
    let summary = log.info(
        "LOAD_DONE",
        kv! { events = n, elapsed_ms = elapsed.as_millis(), rate = format!("{:.0}", n as f64 / elapsed.as_secs_f64()) },
    );
    if let Err(e) = summary {
        eprintln!("{}", e);
    }
}
