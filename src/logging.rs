//! Console Logger
//!
//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

fn format_line(level: Level, target: &str, message: &str) -> String {
    if level <= Level::Info {
        message.to_string()
    } else {
        format!("{} {}: {}", level, target, message)
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let line = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; later calls only change the level
pub fn init(level: LevelFilter) {
    let installed = log::set_logger(&LOGGER).is_ok();
    log::set_max_level(level);
    if !installed {
        log::warn!("[Log] A logger was already installed; only the level changed to {}", level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(Level::Info, "gearcrate_ui", "[Inventory] Loaded 3 items"), "[Inventory] Loaded 3 items");
        assert_eq!(format_line(Level::Error, "gearcrate_ui", "boom"), "boom");
        assert_eq!(
            format_line(Level::Debug, "gearcrate_ui::commands", "[API] get_stats via Http"),
            "DEBUG gearcrate_ui::commands: [API] get_stats via Http"
        );
    }
}
