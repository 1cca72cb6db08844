//! Per-operation filter context

use crate::key::TypeKey;
use crate::provider::{ErasedExamplesProvider, ExamplesProvider};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// The document location an example applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleTarget {
    /// The operation's request body.
    Request,
    /// The response documented for this status code.
    Response(u16),
}

/// A response the operation declares: status code plus payload type key.
#[derive(Debug, Clone)]
pub struct DeclaredResponse {
    pub status: u16,
    pub ty: TypeKey,
}

/// A body parameter the operation declares.
#[derive(Debug, Clone)]
pub struct DeclaredParameter {
    pub name: String,
    pub ty: TypeKey,
}

/// Everything the route-discovery layer knows about one operation that the
/// example filters need: declared response and parameter types, targets
/// whose auto-resolution is suppressed, and explicit example attachments.
///
/// Built ahead of document generation; filters only read it. Attaching an
/// explicit example also suppresses auto-resolution for its target, so
/// explicit attachments always win regardless of filter order.
#[derive(Clone, Default)]
pub struct OperationContext {
    pub responses: Vec<DeclaredResponse>,
    pub parameters: Vec<DeclaredParameter>,
    pub overrides: HashSet<ExampleTarget>,
    pub explicit: Vec<(ExampleTarget, Arc<dyn ErasedExamplesProvider>)>,
}

impl OperationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a response status and its payload type.
    pub fn with_response(mut self, status: u16, ty: TypeKey) -> Self {
        self.responses.push(DeclaredResponse { status, ty });
        self
    }

    /// Declare a body parameter and its payload type.
    pub fn with_parameter(mut self, name: impl Into<String>, ty: TypeKey) -> Self {
        self.parameters.push(DeclaredParameter {
            name: name.into(),
            ty,
        });
        self
    }

    /// Suppress auto-resolution for a target.
    pub fn with_override(mut self, target: ExampleTarget) -> Self {
        self.overrides.insert(target);
        self
    }

    /// Attach an explicit example for a target, suppressing auto-resolution
    /// for it.
    pub fn with_explicit_example(
        mut self,
        target: ExampleTarget,
        provider: impl ExamplesProvider,
    ) -> Self {
        self.overrides.insert(target);
        self.explicit.push((target, Arc::new(provider)));
        self
    }

    /// Whether auto-resolution is suppressed for the target.
    pub fn is_overridden(&self, target: ExampleTarget) -> bool {
        self.overrides.contains(&target)
    }
}

impl fmt::Debug for OperationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationContext")
            .field("responses", &self.responses)
            .field("parameters", &self.parameters)
            .field("overrides", &self.overrides)
            .field("explicit_count", &self.explicit.len())
            .finish()
    }
}
