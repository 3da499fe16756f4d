//! Mount invocation: one device at one target, trying candidate types in order.

use log::Level;
use serde_json::json;

use super::errors::map::map_mount_errno;
use super::errors::ApiError;
use super::Mountyard;
use crate::constants::AUTO_FSTYPE;
use crate::flags::translate;
use crate::fs::FsCatalog;
use crate::logging::audit::AuditCtx;
use crate::logging::{AuditSink, FactsEmitter, StageLogger};
use crate::types::{Directive, MountError, MountOutcome, ResolvedMount};

/// Candidate filesystem types for one invocation, consumed in order.
/// A clone continues independently from the point the original has reached.
#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    inner: Inner<'a>,
}

#[derive(Clone, Debug)]
enum Inner<'a> {
    Listed(std::str::Split<'a, char>),
    Catalog(std::slice::Iter<'a, String>),
}

impl<'a> Candidates<'a> {
    /// `auto` draws from the catalog; anything else is a comma-separated list
    /// whose empty pieces are skipped.
    pub fn new(fstype: &'a str, auto: &'a FsCatalog) -> Self {
        let inner = if fstype == AUTO_FSTYPE {
            Inner::Catalog(auto.list().iter())
        } else {
            Inner::Listed(fstype.split(','))
        };
        Self { inner }
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        match &mut self.inner {
            Inner::Listed(it) => it.find(|t| !t.is_empty()),
            Inner::Catalog(it) => it.next().map(String::as_str),
        }
    }
}

/// Fix every input of a mount before the first attempt: the type (an empty
/// type falls back to the policy default) and the translated bitmask.
pub(crate) fn resolve_request<'a>(
    fstype: &'a str,
    device: &'a str,
    target: &'a str,
    d: &'a Directive,
    default_fstype: &'a str,
) -> ResolvedMount<'a> {
    let fstype = if fstype.is_empty() {
        default_fstype
    } else {
        fstype
    };
    ResolvedMount {
        fstype,
        device,
        target,
        flags: translate(&d.options, d.defaults),
        data: &d.data,
        verbose: d.verbose,
        dry_run: d.fake,
    }
}

pub(crate) fn run<E: FactsEmitter, A: AuditSink>(
    api: &Mountyard<E, A>,
    req: &ResolvedMount<'_>,
    ctx: &AuditCtx<'_>,
) -> Result<MountOutcome, ApiError> {
    let slog = StageLogger::new(ctx);

    if req.dry_run {
        api.audit.log(
            Level::Info,
            &format!("Would mount {} type {} at {}", req.device, req.fstype, req.target),
        );
        slog.mount_result()
            .device(req.device)
            .target(req.target)
            .fstype(req.fstype)
            .field("flags", json!(req.flags.bits()))
            .emit_success();
        return Ok(MountOutcome::WouldMount {
            device: req.device.to_string(),
            target: req.target.to_string(),
            fstype: req.fstype.to_string(),
        });
    }

    let mut last: Option<(&str, std::io::Error)> = None;
    for (attempt, t) in Candidates::new(req.fstype, &api.auto).enumerate() {
        match api
            .mounter
            .mount(req.device, req.target, t, req.flags, req.data)
        {
            Ok(()) => {
                slog.mount_attempt()
                    .device(req.device)
                    .target(req.target)
                    .fstype(t)
                    .field("attempt", json!(attempt))
                    .emit_success();
                if req.verbose {
                    api.audit
                        .log(Level::Info, &format!("Mounted {} at {}", req.device, req.target));
                }
                slog.mount_result()
                    .device(req.device)
                    .target(req.target)
                    .fstype(t)
                    .field("flags", json!(req.flags.bits()))
                    .emit_success();
                return Ok(MountOutcome::Mounted {
                    device: req.device.to_string(),
                    target: req.target.to_string(),
                    fstype: t.to_string(),
                });
            }
            Err(e) => {
                log::debug!("mount {} at {} as {t}: {e}", req.device, req.target);
                slog.mount_attempt()
                    .device(req.device)
                    .target(req.target)
                    .fstype(t)
                    .field("attempt", json!(attempt))
                    .field("reason", json!(map_mount_errno(&e)))
                    .field("error", json!(e.to_string()))
                    .emit_failure();
                last = Some((t, e));
            }
        }
    }

    let err = match last {
        Some((t, source)) => MountError::Syscall {
            device: req.device.to_string(),
            fstype: t.to_string(),
            source,
        },
        None => MountError::NoCandidates {
            device: req.device.to_string(),
        },
    };
    slog.mount_result()
        .device(req.device)
        .target(req.target)
        .fstype(req.fstype)
        .field("error", json!(err.to_string()))
        .emit_failure();
    Err(err.into())
}
