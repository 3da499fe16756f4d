use log::Level;
use serde_json::Value;

pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Human-readable progress lines (dry-run descriptions, verbose confirmations).
pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

#[derive(Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

impl AuditSink for JsonlSink {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Forwards facts and audit lines to the `log` facade.
#[derive(Default)]
pub struct LogFacts;

impl FactsEmitter for LogFacts {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        log::debug!(target: "mountyard::facts", "{subsystem} {event} {decision} {fields}");
    }
}

impl AuditSink for LogFacts {
    fn log(&self, level: Level, msg: &str) {
        log::log!(level, "{msg}");
    }
}
