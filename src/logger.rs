//! Console Logger
//!
//! `log` backend writing to the browser console as `[TARGET] message`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line: JsValue = format!("[{}] {}", short_target(record.target()), record.args()).into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `todo_core::controller` -> `CONTROLLER`
fn short_target(target: &str) -> String {
    target.rsplit("::").next().unwrap_or(target).to_uppercase()
}

/// Install the console logger. Later calls are ignored.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
