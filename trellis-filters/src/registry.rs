//! Example provider registry

use crate::key::TypeKey;
use crate::provider::{ErasedExamplesProvider, ExamplesProvider};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

/// The example provider registry.
///
/// A read-mostly lookup from declared payload type to example provider.
/// Populated once at startup, then read concurrently while the host
/// generates its document. Cloning the registry is cheap and shares the
/// underlying provider table.
#[derive(Clone)]
pub struct ExamplesRegistry {
    providers: Arc<RwLock<HashMap<TypeKey, Arc<dyn ErasedExamplesProvider>>>>,
}

impl ExamplesRegistry {
    pub fn new() -> Self {
        debug!("creating example provider registry");
        Self {
            providers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a provider under its output type's runtime key.
    pub fn register<P: ExamplesProvider>(&self, provider: P) {
        let key = TypeKey::of::<P::Output>();
        self.insert(key, Arc::new(provider));
    }

    /// Register a provider under an explicit key descriptor.
    ///
    /// Used when the declared type the host resolves against is not the
    /// provider's concrete output type: trait-object parameters, or
    /// optional wrappers keyed by their underlying type.
    pub fn register_keyed<P: ExamplesProvider>(&self, key: TypeKey, provider: P) {
        self.insert(key, Arc::new(provider));
    }

    fn insert(&self, key: TypeKey, provider: Arc<dyn ErasedExamplesProvider>) {
        trace!(key = %key, "acquiring write lock for provider registration");
        let mut providers = self.providers.write().unwrap();
        providers.insert(key.clone(), provider);

        debug!(key = %key, "example provider registered");
    }

    /// Resolve the provider for a declared type key.
    ///
    /// A miss is not an error: operations routinely declare types nobody
    /// provides examples for.
    pub fn resolve(&self, key: &TypeKey) -> Option<Arc<dyn ErasedExamplesProvider>> {
        trace!(key = %key, "resolving example provider");
        let providers = self.providers.read().unwrap();

        let resolved = providers.get(key).cloned();
        match &resolved {
            Some(_) => debug!(key = %key, "example provider resolved"),
            None => trace!(key = %key, "no example provider registered"),
        }

        resolved
    }

    /// Resolve the provider for a concrete type.
    pub fn resolve_for<T: 'static>(&self) -> Option<Arc<dyn ErasedExamplesProvider>> {
        self.resolve(&TypeKey::of::<T>())
    }

    /// Check whether a provider is registered for the key.
    pub fn has(&self, key: &TypeKey) -> bool {
        self.providers.read().unwrap().contains_key(key)
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ExamplesRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Account {
        id: u64,
    }

    struct AccountExample;

    impl ExamplesProvider for AccountExample {
        type Output = Account;

        fn example(&self) -> Account {
            Account { id: 42 }
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let registry = ExamplesRegistry::new();
        registry.register(AccountExample);

        assert!(registry.resolve_for::<Account>().is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_miss_returns_none() {
        let registry = ExamplesRegistry::new();

        assert!(registry.resolve_for::<Account>().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_resolve_is_keyed_by_exact_type() {
        #[derive(Serialize)]
        struct Other;

        let registry = ExamplesRegistry::new();
        registry.register(AccountExample);

        assert!(registry.resolve_for::<Other>().is_none());
    }

    #[test]
    fn test_register_keyed_resolves_by_descriptor() {
        let registry = ExamplesRegistry::new();
        registry.register_keyed(TypeKey::named("AccountDraft"), AccountExample);

        assert!(registry.resolve(&TypeKey::named("AccountDraft")).is_some());
        // The runtime key was not used for a keyed registration.
        assert!(registry.resolve_for::<Account>().is_none());
    }

    #[test]
    fn test_later_registration_replaces_earlier() {
        struct BiggerAccountExample;

        impl ExamplesProvider for BiggerAccountExample {
            type Output = Account;

            fn example(&self) -> Account {
                Account { id: 1000 }
            }
        }

        let registry = ExamplesRegistry::new();
        registry.register(AccountExample);
        registry.register(BiggerAccountExample);

        assert_eq!(registry.len(), 1);
        let provider = registry.resolve_for::<Account>().unwrap();
        let value = provider
            .render(
                crate::media::WireFormat::Json,
                &crate::serializer::SerializerOptions::default(),
            )
            .unwrap();
        assert_eq!(value["id"], 1000);
    }

    #[test]
    fn test_clones_share_the_provider_table() {
        let registry = ExamplesRegistry::new();
        let clone = registry.clone();
        registry.register(AccountExample);

        assert!(clone.resolve_for::<Account>().is_some());
    }

    #[test]
    fn test_concurrent_reads() {
        let registry = ExamplesRegistry::new();
        registry.register(AccountExample);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let registry = registry.clone();
                scope.spawn(move || {
                    for _ in 0..100 {
                        assert!(registry.resolve_for::<Account>().is_some());
                    }
                });
            }
        });
    }
}
