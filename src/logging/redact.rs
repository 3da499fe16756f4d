use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const TS_ZERO: &str = "1970-01-01T00:00:00Z";

pub fn now_iso() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|_| TS_ZERO.to_string())
}

/// Return a timestamp for facts emission.
/// - Dry run: constant zero timestamp for determinism.
/// - Real run: current timestamp in RFC3339.
pub fn ts_for(dry_run: bool) -> String {
    if dry_run {
        TS_ZERO.to_string()
    } else {
        now_iso()
    }
}

/// Apply redactions to a fact event for comparison and safe logging.
/// Zeroes timestamps and removes fields that vary from run to run.
pub fn redact_event(mut v: Value) -> Value {
    if let Some(obj) = v.as_object_mut() {
        obj.insert("ts".into(), Value::String(TS_ZERO.to_string()));
        obj.remove("duration_ms");
        // errno text depends on the host libc
        obj.remove("error");
    }
    v
}
