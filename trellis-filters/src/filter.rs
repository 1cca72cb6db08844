//! Operation filters and the filter pipeline

use crate::context::{ExampleTarget, OperationContext};
use crate::error::{ExampleError, ExampleResult};
use crate::registry::ExamplesRegistry;
use crate::request::set_request_example;
use crate::response::set_response_example;
use crate::serializer::SerializerOptions;
use std::collections::HashMap;
use tracing::{debug, trace};
use trellis_openapi::{OpenApiSpec, Operation};

/// A pluggable unit invoked once per operation during document generation.
///
/// Filters mutate only the operation fragment they are handed; they hold no
/// state across invocations and may run concurrently for different
/// operations.
pub trait OperationFilter: Send + Sync {
    fn apply(&self, operation: &mut Operation, ctx: &OperationContext) -> ExampleResult<()>;
}

/// Attaches examples resolved from an [`ExamplesRegistry`].
///
/// For every declared response and body parameter whose target is not
/// overridden, looks up a provider by the declared type key and hands it to
/// the matching setter. Misses of any kind are silent; only serialization
/// failures propagate.
pub struct RegistryExamplesFilter {
    registry: ExamplesRegistry,
    options: SerializerOptions,
}

impl RegistryExamplesFilter {
    pub fn new(registry: ExamplesRegistry) -> Self {
        Self {
            registry,
            options: SerializerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SerializerOptions) -> Self {
        self.options = options;
        self
    }
}

impl OperationFilter for RegistryExamplesFilter {
    fn apply(&self, operation: &mut Operation, ctx: &OperationContext) -> ExampleResult<()> {
        for declared in &ctx.responses {
            if ctx.is_overridden(ExampleTarget::Response(declared.status)) {
                trace!(
                    status = declared.status,
                    "response example overridden, skipping auto-resolution"
                );
                continue;
            }

            let Some(provider) = self.registry.resolve(&declared.ty) else {
                continue;
            };
            set_response_example(
                operation,
                declared.status,
                Some(provider.as_ref()),
                Some(&self.options),
            )?;
        }

        for parameter in &ctx.parameters {
            if ctx.is_overridden(ExampleTarget::Request) {
                trace!("request example overridden, skipping auto-resolution");
                break;
            }

            let Some(provider) = self.registry.resolve(&parameter.ty) else {
                continue;
            };
            let Some(body) = operation.request_body.as_mut() else {
                continue;
            };
            set_request_example(body, Some(provider.as_ref()), Some(&self.options))?;
        }

        Ok(())
    }
}

/// Attaches the explicit examples carried by the operation context.
///
/// The explicit half of the override story: targets with an explicit
/// attachment are suppressed for [`RegistryExamplesFilter`], so the two
/// filters compose in either order.
pub struct ExplicitExamplesFilter {
    options: SerializerOptions,
}

impl ExplicitExamplesFilter {
    pub fn new() -> Self {
        Self {
            options: SerializerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SerializerOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for ExplicitExamplesFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationFilter for ExplicitExamplesFilter {
    fn apply(&self, operation: &mut Operation, ctx: &OperationContext) -> ExampleResult<()> {
        for (target, provider) in &ctx.explicit {
            match target {
                ExampleTarget::Response(status) => {
                    set_response_example(
                        operation,
                        *status,
                        Some(provider.as_ref()),
                        Some(&self.options),
                    )?;
                }
                ExampleTarget::Request => {
                    let Some(body) = operation.request_body.as_mut() else {
                        continue;
                    };
                    set_request_example(body, Some(provider.as_ref()), Some(&self.options))?;
                }
            }
        }

        Ok(())
    }
}

/// Applies a set of filters to every operation of a specification.
///
/// The local stand-in for a host generator's per-operation loop: each
/// operation with an id that has a context gets every filter, in
/// registration order. Operations without a context are left alone.
#[derive(Default)]
pub struct FilterPipeline {
    filters: Vec<Box<dyn OperationFilter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: impl OperationFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Run every filter over every operation that has a context, keyed by
    /// operation id. Errors carry the failing operation's id.
    pub fn apply(
        &self,
        spec: &mut OpenApiSpec,
        contexts: &HashMap<String, OperationContext>,
    ) -> ExampleResult<()> {
        for (path, item) in spec.paths.iter_mut() {
            for operation in item.operations_mut() {
                let Some(operation_id) = operation.operation_id.clone() else {
                    continue;
                };
                let Some(ctx) = contexts.get(&operation_id) else {
                    continue;
                };

                debug!(path = %path, operation = %operation_id, "applying example filters");
                for filter in &self.filters {
                    filter
                        .apply(operation, ctx)
                        .map_err(|e| ExampleError::operation(operation_id.clone(), e))?;
                }
            }
        }

        Ok(())
    }
}
