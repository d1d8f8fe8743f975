use ltlf_domain::{ActionSchema, Inequality, Literal, Term, Var};
use ltlf_unify::VarTypes;
use std::collections::HashMap;

/// An action schema's precondition/effect, alpha-renamed to fresh
/// variables starting at `next_var` (mutated to the first variable id
/// past the renamed range) so a regression call never confuses the
/// schema's own parameters with variables already present in the
/// caller's context (§9).
pub struct RenamedSchema {
    pub precondition: Vec<Literal>,
    pub inequalities: Vec<Inequality>,
    pub add: Vec<Literal>,
    pub delete: Vec<Literal>,
    pub var_types: VarTypes,
}

pub fn rename_schema(schema: &ActionSchema, next_var: &mut u32) -> RenamedSchema {
    let mut mapping: HashMap<Var, Var> = HashMap::new();
    let mut var_types = VarTypes::new();
    for parameter in &schema.parameters {
        let fresh = Var(*next_var);
        *next_var += 1;
        mapping.insert(parameter.var, fresh);
        var_types.insert(fresh, parameter.ty);
    }

    let rename_literal = |literal: &Literal| Literal {
        predicate: literal.predicate.clone(),
        polarity: literal.polarity,
        args: literal
            .args
            .iter()
            .map(|t| match t {
                Term::Var(v) => Term::Var(*mapping.get(v).unwrap_or(v)),
                Term::Const(c) => Term::Const(c.clone()),
            })
            .collect(),
    };

    RenamedSchema {
        precondition: schema.precondition.literals.iter().map(rename_literal).collect(),
        inequalities: schema
            .precondition
            .inequalities
            .iter()
            .map(|Inequality(a, b)| Inequality(*mapping.get(a).unwrap_or(a), *mapping.get(b).unwrap_or(b)))
            .collect(),
        add: schema.effect.add.iter().map(rename_literal).collect(),
        delete: schema.effect.delete.iter().map(rename_literal).collect(),
        var_types,
    }
}
