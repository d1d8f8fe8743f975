//! The typed planning domain object model: types, predicates and action
//! schemas, as received from an external PDDL parser (out of scope per
//! the specification — this crate only owns the object model and
//! validates it, it never reads `.pddl` text itself).

mod action;
mod error;
mod substitution;
mod term;
mod types;

pub use action::{ActionSchema, Effect, Parameter, Precondition, Predicate, PredicateId, PredicateTable};
pub use error::DomainStructureError;
pub use substitution::{BindConflict, Substitution};
pub use term::{Constant, Inequality, Literal, Polarity, Term, Var};
pub use types::{Type, TypeId, TypeTable};

/// The whole planning domain: a name, a type table, a predicate table and
/// a list of action schemas. Owns all of the above; everything else in
/// the pipeline refers to a `Domain` by shared reference and never
/// mutates it (§3: "immutable after parse").
#[derive(Clone, Debug)]
pub struct Domain {
    pub name: String,
    pub types: TypeTable,
    pub predicates: PredicateTable,
    pub actions: Vec<ActionSchema>,
}

impl Domain {
    /// Builds a domain from its already-parsed parts and validates it.
    /// This is the bridge's single entry point: an external PDDL parser
    /// produces `types`/`predicates`/`actions` however it likes, and
    /// everything downstream of this call can assume a well-formed
    /// domain.
    pub fn build(
        name: impl Into<String>,
        types: TypeTable,
        predicates: PredicateTable,
        actions: Vec<ActionSchema>,
    ) -> Result<Domain, DomainStructureError> {
        let domain = Domain {
            name: name.into(),
            types,
            predicates,
            actions,
        };
        domain.validate()?;
        Ok(domain)
    }

    pub fn predicate_by_name(&self, name: &str) -> Option<&Predicate> {
        self.predicates.get(name).map(|id| self.predicates.resolve(id))
    }

    pub fn action_by_name(&self, name: &str) -> Option<&ActionSchema> {
        self.actions.iter().find(|a| a.name == name)
    }

    fn validate(&self) -> Result<(), DomainStructureError> {
        for action in &self.actions {
            self.validate_action(action)?;
        }
        Ok(())
    }

    fn validate_action(&self, action: &ActionSchema) -> Result<(), DomainStructureError> {
        for &Inequality(a, b) in &action.precondition.inequalities {
            if a == b {
                return Err(DomainStructureError::TrivialInequality {
                    action: action.name.clone(),
                    var: a.to_string(),
                });
            }
            self.require_declared(action, a)?;
            self.require_declared(action, b)?;
        }

        for literal in action
            .precondition
            .literals
            .iter()
            .chain(action.effect.add.iter())
            .chain(action.effect.delete.iter())
        {
            self.validate_literal_shape(action, literal)?;
        }

        for add in &action.effect.add {
            if action.effect.delete.contains(add) {
                return Err(DomainStructureError::OverlappingEffect {
                    action: action.name.clone(),
                    literal: add.to_string(),
                });
            }
        }
        Ok(())
    }

    fn require_declared(&self, action: &ActionSchema, var: Var) -> Result<(), DomainStructureError> {
        if action.type_of(var).is_some() {
            Ok(())
        } else {
            Err(DomainStructureError::UndeclaredVariable {
                action: action.name.clone(),
                var: var.to_string(),
            })
        }
    }

    fn validate_literal_shape(&self, action: &ActionSchema, literal: &Literal) -> Result<(), DomainStructureError> {
        let predicate = self
            .predicates
            .get(&literal.predicate)
            .map(|id| self.predicates.resolve(id))
            .ok_or_else(|| DomainStructureError::UnknownPredicate {
                action: action.name.clone(),
                predicate: literal.predicate.clone(),
            })?;

        if predicate.arity() != literal.arity() {
            return Err(DomainStructureError::ArityMismatch {
                action: action.name.clone(),
                predicate: literal.predicate.clone(),
                expected: predicate.arity(),
                found: literal.arity(),
            });
        }

        for (term, &required_type) in literal.args.iter().zip(predicate.arg_types.iter()) {
            match term {
                Term::Var(v) => {
                    let param_type = action.type_of(*v).ok_or_else(|| DomainStructureError::UndeclaredVariable {
                        action: action.name.clone(),
                        var: v.to_string(),
                    })?;
                    if param_type != required_type {
                        return Err(DomainStructureError::IllTypedParameter {
                            action: action.name.clone(),
                            var: v.to_string(),
                            param_type: self.types.name(param_type).to_string(),
                            required_type: self.types.name(required_type).to_string(),
                        });
                    }
                }
                Term::Const(c) => {
                    if c.ty != required_type {
                        return Err(DomainStructureError::IllTypedParameter {
                            action: action.name.clone(),
                            var: c.name.to_string(),
                            param_type: self.types.name(c.ty).to_string(),
                            required_type: self.types.name(required_type).to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
