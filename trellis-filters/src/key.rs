//! Registry key descriptors

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;

/// A key identifying the declared payload type an example provider serves.
///
/// `TypeKey::of::<T>()` captures runtime type identity, so parameterized
/// types get distinct keys (`Vec<String>` never matches `Vec<i64>`).
/// `TypeKey::named` is the escape hatch for declared types that runtime
/// identity cannot express uniformly: trait-object parameters, or optional
/// wrappers that the route-discovery layer chooses to key by their
/// underlying type. Discovery and registration must agree on which form
/// they use for such types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKey {
    /// Runtime type identity plus the human-readable type name.
    Runtime { id: TypeId, name: &'static str },
    /// An explicitly supplied descriptor.
    Named(Cow<'static, str>),
}

impl TypeKey {
    /// Key for a concrete Rust type.
    pub fn of<T: 'static>() -> Self {
        TypeKey::Runtime {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Key from an explicit descriptor name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        TypeKey::Named(name.into())
    }

    /// Human-readable name of the described type.
    pub fn name(&self) -> &str {
        match self {
            TypeKey::Runtime { name, .. } => name,
            TypeKey::Named(name) => name,
        }
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
