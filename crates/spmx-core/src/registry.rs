//! Named scalar types.
//!
//! A [`TypeRegistry`] maps type names to [`TypeDescriptor`]s in
//! registration order. It starts with every builtin kind; applications add
//! their own opaque types by name and byte size.

use indexmap::IndexMap;

use crate::error::CoreError;
use crate::types::{ScalarType, TypeCode};

/// A named scalar type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Registered name, unique within a registry.
    pub name: String,
    /// Layout and cast code.
    pub scalar: ScalarType,
}

impl TypeDescriptor {
    /// Byte size of one value of this type.
    pub fn size(&self) -> usize {
        self.scalar.size()
    }

    /// Cast-dispatch code of this type.
    pub fn code(&self) -> TypeCode {
        self.scalar.code()
    }
}

/// Insertion-ordered registry of named scalar types.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create a registry holding the thirteen builtin types.
    pub fn new() -> Self {
        let mut types = IndexMap::with_capacity(TypeCode::BUILTIN_COUNT);
        for code in TypeCode::BUILTINS {
            let name = code.name().to_string();
            types.insert(
                name.clone(),
                TypeDescriptor {
                    name,
                    scalar: ScalarType::Builtin(code),
                },
            );
        }
        Self { types }
    }

    /// Register an opaque user-defined type of `size` bytes.
    pub fn register_user(&mut self, name: &str, size: usize) -> Result<ScalarType, CoreError> {
        if self.types.contains_key(name) {
            return Err(CoreError::DuplicateType {
                name: name.to_string(),
            });
        }
        let scalar = ScalarType::opaque(size)?;
        self.types.insert(
            name.to_string(),
            TypeDescriptor {
                name: name.to_string(),
                scalar,
            },
        );
        Ok(scalar)
    }

    /// Look up a type by name.
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Number of registered types, builtins included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: builtins are registered at construction.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
