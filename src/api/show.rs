use serde_json::json;

use super::errors::ApiError;
use super::Mountyard;
use crate::fs::read_active_mounts;
use crate::logging::audit::AuditCtx;
use crate::logging::{AuditSink, FactsEmitter, StageLogger};
use crate::types::{ActiveMount, ErrorKind};

pub(super) fn run<E: FactsEmitter, A: AuditSink>(
    api: &Mountyard<E, A>,
    ctx: &AuditCtx<'_>,
) -> Result<Vec<ActiveMount>, ApiError> {
    let path = &api.policy.paths.mounts;
    let listing = read_active_mounts(path).map_err(|e| match e.kind {
        ErrorKind::Io => ApiError::ShowUnavailable(e.msg),
        _ => ApiError::from(e),
    })?;
    let slog = StageLogger::new(ctx);
    let ev = slog
        .show()
        .field("path", json!(path.display().to_string()))
        .field("listed", json!(listing.mounts.len()))
        .field("skipped", json!(listing.skipped.len()));
    if let Some(e) = listing.interrupted {
        ev.field("error", json!(e.to_string())).emit_failure();
        return Err(ApiError::PartialListing {
            mounts: listing.mounts,
            msg: e.msg,
        });
    }
    if listing.skipped.is_empty() {
        ev.emit_success();
    } else {
        ev.emit_warn();
    }
    Ok(listing.mounts)
}
