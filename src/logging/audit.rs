// Audit helpers that emit structured facts across Mountyard stages.
//
// Side-effects:
// - Emits JSON facts via `FactsEmitter` for `fstab.load`, `mount.attempt` (one per
//   candidate type), `mount.result`, `show` and `resolve.summary`.
// - Ensures a minimal envelope is present on every fact: `schema_version`, `ts`, `dry_run`.
// - Applies redaction in dry-run to zero timestamps and drop volatile fields.
use crate::constants::FACTS_SUBSYSTEM;
use crate::logging::{redact_event, FactsEmitter};
use serde_json::{json, Value};

pub(crate) const SCHEMA_VERSION: i64 = 1;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AuditMode {
    pub dry_run: bool,
    pub redact: bool,
}

pub(crate) struct AuditCtx<'a> {
    pub facts: &'a dyn FactsEmitter,
    pub ts: String,
    pub mode: AuditMode,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(facts: &'a dyn FactsEmitter, ts: String, mode: AuditMode) -> Self {
        Self { facts, ts, mode }
    }
}

/// Stage for typed audit emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    FstabLoad,
    MountAttempt,
    MountResult,
    Show,
    ResolveSummary,
}

impl Stage {
    #[must_use]
    pub const fn as_event(&self) -> &'static str {
        match self {
            Stage::FstabLoad => "fstab.load",
            Stage::MountAttempt => "mount.attempt",
            Stage::MountResult => "mount.result",
            Stage::Show => "show",
            Stage::ResolveSummary => "resolve.summary",
        }
    }
}

/// Decision severity for audit events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Success,
    Failure,
    Warn,
}

impl Decision {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Decision::Success => "success",
            Decision::Failure => "failure",
            Decision::Warn => "warn",
        }
    }
}

/// Builder facade over audit emission with centralized envelope+redaction.
pub struct StageLogger<'a> {
    ctx: &'a AuditCtx<'a>,
}

impl<'a> StageLogger<'a> {
    pub(crate) fn new(ctx: &'a AuditCtx<'a>) -> Self { Self { ctx } }

    pub fn fstab_load(&'a self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::FstabLoad) }
    pub fn mount_attempt(&'a self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::MountAttempt) }
    pub fn mount_result(&'a self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::MountResult) }
    pub fn show(&'a self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::Show) }
    pub fn resolve_summary(&'a self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::ResolveSummary) }
}

pub struct EventBuilder<'a> {
    ctx: &'a AuditCtx<'a>,
    stage: Stage,
    fields: serde_json::Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(ctx: &'a AuditCtx<'a>, stage: Stage) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self { ctx, stage, fields }
    }

    pub fn device(mut self, device: impl Into<String>) -> Self {
        self.fields.insert("device".into(), json!(device.into()));
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.fields.insert("target".into(), json!(target.into()));
        self
    }

    pub fn fstype(mut self, fstype: impl Into<String>) -> Self {
        self.fields.insert("fstype".into(), json!(fstype.into()));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn merge(mut self, extra: Value) -> Self {
        if let Some(obj) = extra.as_object() {
            for (k, v) in obj {
                self.fields.insert(k.clone(), v.clone());
            }
        }
        self
    }

    pub fn emit(self, decision: Decision) {
        let mut fields = Value::Object(self.fields);
        if let Some(obj) = fields.as_object_mut() {
            obj.entry("decision").or_insert(json!(decision.as_str()));
        }
        redact_and_emit(self.ctx, self.stage.as_event(), decision.as_str(), fields);
    }

    pub fn emit_success(self) { self.emit(Decision::Success) }
    pub fn emit_failure(self) { self.emit(Decision::Failure) }
    pub fn emit_warn(self) { self.emit(Decision::Warn) }
}

fn redact_and_emit(ctx: &AuditCtx, event: &str, decision: &str, mut fields: Value) {
    if let Some(obj) = fields.as_object_mut() {
        obj.entry("schema_version").or_insert(json!(SCHEMA_VERSION));
        obj.entry("ts").or_insert(json!(ctx.ts));
        obj.entry("dry_run").or_insert(json!(ctx.mode.dry_run));
    }
    let out = if ctx.mode.redact {
        redact_event(fields)
    } else {
        fields
    };
    ctx.facts.emit(FACTS_SUBSYSTEM, event, decision, out);
}
