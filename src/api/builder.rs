use crate::adapters::Mounter;
use crate::logging::{AuditSink, FactsEmitter};
use crate::policy::Policy;

/// Builder for constructing a Mountyard with ergonomic chaining.
/// Mirrors `Mountyard::new(...).with_*` but avoids duplication at call sites.
pub struct ApiBuilder<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    mounter: Option<Box<dyn Mounter>>,
}

impl<E: FactsEmitter, A: AuditSink> ApiBuilder<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        Self {
            facts,
            audit,
            policy,
            mounter: None,
        }
    }

    #[must_use]
    pub fn mounter(mut self, mounter: Box<dyn Mounter>) -> Self {
        self.mounter = Some(mounter);
        self
    }

    pub fn build(self) -> super::Mountyard<E, A> {
        let api = super::Mountyard::new(self.facts, self.audit, self.policy);
        match self.mounter {
            Some(m) => api.with_mounter(m),
            None => api,
        }
    }
}
