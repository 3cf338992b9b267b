//! Which declared cases have a body.

use crate::{builtin, CaseId, CaseResult};

/// A case body.
pub type CaseFn = fn() -> CaseResult;

/// Every [`CaseId`] is declared; each may additionally be defined.
///
/// Declaration is fixed. Definition is up to the suite that links a
/// converter library, which is where most bodies live.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    bodies: [Option<CaseFn>; CaseId::COUNT],
}

impl Registry {
    /// All cases declared, none defined.
    pub fn new() -> Self {
        Registry::default()
    }

    /// All cases declared, with the bodies that need only value types
    /// defined.
    pub fn with_builtin() -> Self {
        let mut registry = Registry::new();
        registry.define(CaseId::UserType, builtin::user_type);
        registry
    }

    /// Give `id` a body, returning the one it replaces.
    pub fn define(&mut self, id: CaseId, body: CaseFn) -> Option<CaseFn> {
        tracing::trace!(case = %id, "case defined");
        self.bodies[id.index()].replace(body)
    }

    /// Remove the body of `id`, leaving it declared only.
    pub fn undefine(&mut self, id: CaseId) -> Option<CaseFn> {
        self.bodies[id.index()].take()
    }

    /// The body of `id`, if defined.
    #[inline]
    pub fn get(&self, id: CaseId) -> Option<CaseFn> {
        self.bodies[id.index()]
    }

    #[inline]
    pub fn is_defined(&self, id: CaseId) -> bool {
        self.bodies[id.index()].is_some()
    }

    /// Every declared case, in declaration order.
    #[expect(
        clippy::unused_self,
        reason = "every case is declared in every registry"
    )]
    pub fn declared(&self) -> impl Iterator<Item = CaseId> {
        CaseId::ALL.into_iter()
    }

    /// Defined cases and their bodies, in declaration order.
    pub fn defined(&self) -> impl Iterator<Item = (CaseId, CaseFn)> + '_ {
        CaseId::ALL
            .into_iter()
            .filter_map(|id| self.get(id).map(|body| (id, body)))
    }
}
