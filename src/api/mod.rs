// Facade for API module; delegates to submodules under src/api/

use crate::adapters::{Mounter, SyscallMounter};
use crate::fs::{CatalogKind, FsCatalog};
use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{ts_for, AuditSink, FactsEmitter};
use crate::policy::Policy;
use crate::types::{ActiveMount, Directive, FstabEntry, MountOutcome, Resolution};

mod builder;
pub mod errors;
pub mod mount;
mod resolve;
mod show;

pub use builder::ApiBuilder;

pub struct Mountyard<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    mounter: Box<dyn Mounter>,
    auto: FsCatalog,
    all: FsCatalog,
}

impl<E: FactsEmitter, A: AuditSink> Mountyard<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        let auto = FsCatalog::new(CatalogKind::Auto, &policy.paths.filesystems);
        let all = FsCatalog::new(CatalogKind::All, &policy.paths.filesystems);
        Self {
            facts,
            audit,
            policy,
            mounter: Box::new(SyscallMounter),
            auto,
            all,
        }
    }

    pub fn with_mounter(mut self, mounter: Box<dyn Mounter>) -> Self {
        self.mounter = mounter;
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn catalog(&self, kind: CatalogKind) -> &FsCatalog {
        match kind {
            CatalogKind::All => &self.all,
            CatalogKind::Auto => &self.auto,
        }
    }

    /// Filesystem type names for `kind`, read once and memoized.
    pub fn filesystems(&self, kind: CatalogKind) -> &[String] {
        self.catalog(kind).list()
    }

    /// Resolve a directive into mount operations and run them.
    ///
    /// Dispatch: `all` mounts every table entry and stops at the first failure;
    /// one argument mounts the first table entry whose device or mount point
    /// matches; two arguments mount `DEVICE` at `DIR`; none lists active mounts.
    pub fn resolve(&self, directive: &Directive) -> Result<Resolution, errors::ApiError> {
        resolve::run(self, directive)
    }

    /// Mount `device` at `target` as `fstype` using the options carried by `directive`.
    pub fn mount_one(
        &self,
        fstype: &str,
        device: &str,
        target: &str,
        directive: &Directive,
    ) -> Result<MountOutcome, errors::ApiError> {
        let ctx = self.audit_ctx(directive.fake);
        let req = mount::resolve_request(fstype, device, target, directive, &self.policy.default_fstype);
        mount::run(self, &req, &ctx)
    }

    /// Load the mount table named by the policy.
    pub fn load_fstab(&self) -> Result<Vec<FstabEntry>, errors::ApiError> {
        let ctx = self.audit_ctx(false);
        resolve::load_table(self, &ctx)
    }

    /// List active mounts. Malformed lines are skipped with a warning.
    pub fn show(&self) -> Result<Vec<ActiveMount>, errors::ApiError> {
        let ctx = self.audit_ctx(false);
        show::run(self, &ctx)
    }

    fn audit_ctx(&self, dry_run: bool) -> AuditCtx<'_> {
        AuditCtx::new(
            &self.facts as &dyn FactsEmitter,
            ts_for(dry_run),
            AuditMode {
                dry_run,
                redact: dry_run,
            },
        )
    }
}
