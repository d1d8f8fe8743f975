//! The grounding map between DFA atom identifiers and lifted literals
//! (§4.5 step 2: "for each atom in the disjunct, look up its grounded
//! literal via the grounding map"), plus the object table an atom's
//! constants need to carry a [`TypeId`] so they can become `Term::Const`
//! values. The object table is an ADDED supplement: the distilled spec
//! treats grounding-map constants as bare names, but `ltlf_domain::Term`
//! requires every constant to be typed.

use crate::error::GroundingMapError;
use ltlf_domain::{Constant, Literal, Polarity, Term, TypeId};
use std::collections::HashMap;

/// Maps object names used inside grounding-map entries to the type they
/// inhabit, so a grounding entry's argument list of plain strings can be
/// turned into typed [`Term::Const`] values.
#[derive(Clone, Debug, Default)]
pub struct ObjectTable {
    types: HashMap<String, TypeId>,
}

impl ObjectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares (or re-declares, idempotently if the type matches) the
    /// type of an object name.
    pub fn declare(&mut self, name: impl Into<String>, ty: TypeId) {
        self.types.insert(name.into(), ty);
    }

    pub fn type_of(&self, name: &str) -> Option<TypeId> {
        self.types.get(name).copied()
    }

    fn constant(&self, name: &str) -> Option<Constant> {
        self.type_of(name).map(|ty| Constant::new(name, ty))
    }
}

/// One grounding-map entry: a DFA atom identifier names a fully ground
/// predicate instance.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Grounding {
    predicate: String,
    args: Vec<String>,
}

/// Bidirectional atom-identifier <-> ground-literal map (§4.5 step 2).
/// Insertion is conflict-checked in both directions: the same atom
/// cannot name two different ground literals, and the same ground
/// literal cannot be reachable under two different atom identifiers,
/// since the driver looks atoms up by name and relies on that name
/// being a unique key.
#[derive(Clone, Debug, Default)]
pub struct GroundingMap {
    atom_to_grounding: HashMap<String, Grounding>,
    grounding_to_atom: HashMap<Grounding, String>,
}

impl GroundingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `atom` to the ground predicate instance `predicate(args)`.
    pub fn add_atom(&mut self, atom: impl Into<String>, predicate: impl Into<String>, args: Vec<String>) -> Result<(), GroundingMapError> {
        let atom = atom.into();
        let grounding = Grounding {
            predicate: predicate.into(),
            args,
        };

        if let Some(existing) = self.atom_to_grounding.get(&atom) {
            if existing != &grounding {
                return Err(GroundingMapError::DuplicateAtom { atom });
            }
            return Ok(());
        }
        if let Some(existing_atom) = self.grounding_to_atom.get(&grounding) {
            if existing_atom != &atom {
                return Err(GroundingMapError::DuplicateGrounding {
                    predicate: grounding.predicate,
                    args: grounding.args,
                });
            }
        }

        self.grounding_to_atom.insert(grounding.clone(), atom.clone());
        self.atom_to_grounding.insert(atom, grounding);
        Ok(())
    }

    /// Resolves a DFA atom (with polarity, from a DNF conjunction) to a
    /// fully ground [`Literal`], typing its arguments via `objects`.
    pub fn resolve(&self, atom: &str, positive: bool, objects: &ObjectTable) -> Result<Literal, GroundingMapError> {
        let grounding = self.atom_to_grounding.get(atom).ok_or_else(|| GroundingMapError::Missing { atom: atom.to_string() })?;

        let mut args = Vec::with_capacity(grounding.args.len());
        for name in &grounding.args {
            let constant = objects.constant(name).ok_or_else(|| GroundingMapError::Missing { atom: atom.to_string() })?;
            args.push(Term::Const(constant));
        }

        let polarity = if positive { Polarity::Positive } else { Polarity::Negative };
        Ok(Literal {
            predicate: grounding.predicate.clone(),
            polarity,
            args,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_atom_to_ground_literal() {
        let mut objects = ObjectTable::new();
        objects.declare("a", TypeId::from_u32(0));
        objects.declare("b", TypeId::from_u32(0));
        let mut map = GroundingMap::new();
        map.add_atom("on_a_b", "on", vec!["a".into(), "b".into()]).unwrap();

        let literal = map.resolve("on_a_b", true, &objects).unwrap();
        assert_eq!(literal.predicate, "on");
        assert!(literal.is_positive());
        assert_eq!(literal.args.len(), 2);
    }

    #[test]
    fn negative_polarity_resolves() {
        let mut objects = ObjectTable::new();
        objects.declare("a", TypeId::from_u32(0));
        let mut map = GroundingMap::new();
        map.add_atom("clear_a", "clear", vec!["a".into()]).unwrap();

        let literal = map.resolve("clear_a", false, &objects).unwrap();
        assert!(!literal.is_positive());
    }

    #[test]
    fn unknown_atom_is_missing() {
        let map = GroundingMap::new();
        let objects = ObjectTable::new();
        assert!(matches!(map.resolve("nope", true, &objects), Err(GroundingMapError::Missing { .. })));
    }

    #[test]
    fn rebinding_atom_to_different_grounding_conflicts() {
        let mut map = GroundingMap::new();
        map.add_atom("p", "on", vec!["a".into(), "b".into()]).unwrap();
        let result = map.add_atom("p", "on", vec!["b".into(), "a".into()]);
        assert!(matches!(result, Err(GroundingMapError::DuplicateAtom { .. })));
    }

    #[test]
    fn rebinding_grounding_to_different_atom_conflicts() {
        let mut map = GroundingMap::new();
        map.add_atom("p", "on", vec!["a".into(), "b".into()]).unwrap();
        let result = map.add_atom("q", "on", vec!["a".into(), "b".into()]);
        assert!(matches!(result, Err(GroundingMapError::DuplicateGrounding { .. })));
    }

    #[test]
    fn same_atom_same_grounding_is_idempotent() {
        let mut map = GroundingMap::new();
        map.add_atom("p", "on", vec!["a".into(), "b".into()]).unwrap();
        assert!(map.add_atom("p", "on", vec!["a".into(), "b".into()]).is_ok());
    }
}
