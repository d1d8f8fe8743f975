use std::collections::HashMap;

/// Dense index into [`Domain`](crate::Domain)'s type table. Cheap to copy
/// and compare, the same way the solver indexes variables and symbols by
/// small integers rather than by name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug, serde::Serialize)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    pub fn to_u32(self) -> u32 {
        self.0
    }

    pub fn from_u32(id: u32) -> Self {
        TypeId(id)
    }
}

/// A named type declared by the domain. Types have no structure beyond a
/// name; subtyping is not modelled (the original spec's `Type` entity has
/// no parent-type field).
#[derive(Clone, Debug)]
pub struct Type {
    pub name: String,
}

/// Append-only table of declared types, interned by name so that
/// [`TypeId`] equality is a cheap integer comparison instead of a string
/// comparison on every unification check.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    names: Vec<String>,
    by_name: HashMap<String, TypeId>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a type, or returns the existing id if already declared.
    /// The original invariant ("names are unique in domain") is enforced
    /// by this being the only way to obtain a `TypeId`: re-declaring the
    /// same name is idempotent rather than an error, since the parser
    /// bridge may see the same type mentioned by multiple predicates.
    pub fn intern(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = TypeId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: TypeId) -> &str {
        &self.names[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
