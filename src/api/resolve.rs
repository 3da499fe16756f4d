//! Directive resolution: pick the mode, drive the table loader and the invoker.

use serde_json::json;

use super::errors::{id_str, ApiError};
use super::{mount, Mountyard};
use crate::fs::load_fstab;
use crate::logging::audit::AuditCtx;
use crate::logging::{AuditSink, FactsEmitter, StageLogger};
use crate::types::{Directive, FstabEntry, Resolution, Target};

pub(super) fn run<E: FactsEmitter, A: AuditSink>(
    api: &Mountyard<E, A>,
    d: &Directive,
) -> Result<Resolution, ApiError> {
    let ctx = api.audit_ctx(d.fake);
    let target = d.target();
    let mode = match target {
        Target::All => "all",
        Target::Show => "show",
        Target::Lookup(_) => "lookup",
        Target::Explicit { .. } => "explicit",
        Target::Unexpected(_) => "unexpected",
    };
    let res = match target {
        Target::Unexpected(rest) => Err(ApiError::Unexpected(rest.to_vec())),
        Target::Show => super::show::run(api, &ctx).map(Resolution::Shown),
        Target::All => all(api, d, &ctx),
        Target::Lookup(name) => lookup(api, d, name, &ctx),
        Target::Explicit { device, dir } => {
            let req = mount::resolve_request(&d.fstype, device, dir, d, &api.policy.default_fstype);
            mount::run(api, &req, &ctx).map(|o| Resolution::Mounted(vec![o]))
        }
    };

    let slog = StageLogger::new(&ctx);
    match &res {
        Ok(r) => {
            let extra = match r {
                Resolution::Mounted(v) => json!({ "mounted": v.len(), "outcomes": v }),
                Resolution::NotInTable(name) => json!({ "not_found": name }),
                Resolution::Shown(v) => json!({ "listed": v.len() }),
            };
            let ev = slog.resolve_summary().field("mode", json!(mode)).merge(extra);
            if matches!(r, Resolution::NotInTable(_)) {
                ev.emit_warn();
            } else {
                ev.emit_success();
            }
        }
        Err(e) => slog
            .resolve_summary()
            .field("mode", json!(mode))
            .field("error_id", json!(id_str(e.id())))
            .field("error", json!(e.to_string()))
            .emit_failure(),
    }
    res
}

pub(super) fn load_table<E: FactsEmitter, A: AuditSink>(
    api: &Mountyard<E, A>,
    ctx: &AuditCtx<'_>,
) -> Result<Vec<FstabEntry>, ApiError> {
    let path = &api.policy.paths.fstab;
    let slog = StageLogger::new(ctx);
    match load_fstab(path, api.policy.comments) {
        Ok(table) => {
            slog.fstab_load()
                .field("path", json!(path.display().to_string()))
                .field("entries", json!(table.len()))
                .emit_success();
            Ok(table)
        }
        Err(e) => {
            let err = ApiError::from(e);
            slog.fstab_load()
                .field("path", json!(path.display().to_string()))
                .field("error_id", json!(id_str(err.id())))
                .field("error", json!(err.to_string()))
                .emit_failure();
            Err(err)
        }
    }
}

fn all<E: FactsEmitter, A: AuditSink>(
    api: &Mountyard<E, A>,
    d: &Directive,
    ctx: &AuditCtx<'_>,
) -> Result<Resolution, ApiError> {
    let table = load_table(api, ctx)?;
    let mut out = Vec::new();
    for e in table.iter().filter(|e| d.matches_type(&e.fs_type)) {
        let req = mount::resolve_request(&e.fs_type, &e.fs_spec, &e.fs_file, d, &api.policy.default_fstype);
        out.push(mount::run(api, &req, ctx)?);
    }
    Ok(Resolution::Mounted(out))
}

fn lookup<E: FactsEmitter, A: AuditSink>(
    api: &Mountyard<E, A>,
    d: &Directive,
    name: &str,
    ctx: &AuditCtx<'_>,
) -> Result<Resolution, ApiError> {
    let table = load_table(api, ctx)?;
    let Some(e) = table.iter().find(|e| e.matches(name)) else {
        log::info!("{name}: not found in {}", api.policy.paths.fstab.display());
        return Ok(Resolution::NotInTable(name.to_string()));
    };
    let req = mount::resolve_request(&e.fs_type, &e.fs_spec, &e.fs_file, d, &api.policy.default_fstype);
    mount::run(api, &req, ctx).map(|o| Resolution::Mounted(vec![o]))
}
