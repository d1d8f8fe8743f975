//! Guard grammar, per SPEC_FULL §4.5a: atom identifiers match
//! `[A-Za-z_][A-Za-z0-9_]*`; `&`/`and`, `|`/`or`, `!`/`not`/`~` are
//! synonyms; precedence is `!` > `&` > `|`; `true` is the nullary
//! conjunction. Whitespace is insignificant; parentheses group.

use crate::error::GuardParseError;

/// A parsed guard expression, before DNF normalisation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GuardExpr {
    True,
    Atom(String),
    Not(Box<GuardExpr>),
    And(Vec<GuardExpr>),
    Or(Vec<GuardExpr>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Token {
    Ident(String),
    True,
    And,
    Or,
    Not,
    LParen,
    RParen,
}

fn tokenize(text: &str) -> Result<Vec<Token>, GuardParseError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        match c {
            '&' => {
                tokens.push(Token::And);
                i += 1;
            }
            '|' => {
                tokens.push(Token::Or);
                i += 1;
            }
            '!' | '~' => {
                tokens.push(Token::Not);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            _ if c == '_' || c.is_alphabetic() => {
                let start = i;
                while i < chars.len() && (chars[i] == '_' || chars[i].is_alphanumeric()) {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                tokens.push(match word.to_ascii_lowercase().as_str() {
                    "and" => Token::And,
                    "or" => Token::Or,
                    "not" => Token::Not,
                    "true" => Token::True,
                    _ => Token::Ident(word),
                });
            }
            other => {
                return Err(GuardParseError::UnexpectedToken {
                    guard: text.to_string(),
                    found: other.to_string(),
                });
            }
        }
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    source: &'a str,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let t = self.tokens.get(self.pos);
        self.pos += 1;
        t
    }

    fn end_err(&self) -> GuardParseError {
        GuardParseError::UnexpectedEnd {
            guard: self.source.to_string(),
        }
    }

    // expr := or_expr
    fn parse_expr(&mut self) -> Result<GuardExpr, GuardParseError> {
        self.parse_or()
    }

    // or_expr := and_expr (Or and_expr)*
    fn parse_or(&mut self) -> Result<GuardExpr, GuardParseError> {
        let first = self.parse_and()?;
        let mut clauses = vec![first];
        while matches!(self.peek(), Some(Token::Or)) {
            self.advance();
            clauses.push(self.parse_and()?);
        }
        Ok(if clauses.len() == 1 { clauses.pop().unwrap() } else { GuardExpr::Or(clauses) })
    }

    // and_expr := not_expr (And not_expr)*
    fn parse_and(&mut self) -> Result<GuardExpr, GuardParseError> {
        let first = self.parse_not()?;
        let mut clauses = vec![first];
        while matches!(self.peek(), Some(Token::And)) {
            self.advance();
            clauses.push(self.parse_not()?);
        }
        Ok(if clauses.len() == 1 { clauses.pop().unwrap() } else { GuardExpr::And(clauses) })
    }

    // not_expr := Not not_expr | atom
    fn parse_not(&mut self) -> Result<GuardExpr, GuardParseError> {
        if matches!(self.peek(), Some(Token::Not)) {
            self.advance();
            let inner = self.parse_not()?;
            return Ok(GuardExpr::Not(Box::new(inner)));
        }
        self.parse_atom()
    }

    // atom := True | Ident | '(' expr ')'
    fn parse_atom(&mut self) -> Result<GuardExpr, GuardParseError> {
        match self.advance().cloned() {
            Some(Token::True) => Ok(GuardExpr::True),
            Some(Token::Ident(name)) => Ok(GuardExpr::Atom(name)),
            Some(Token::LParen) => {
                let inner = self.parse_expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(GuardParseError::UnmatchedParen {
                        guard: self.source.to_string(),
                    }),
                }
            }
            Some(other) => Err(GuardParseError::UnexpectedToken {
                guard: self.source.to_string(),
                found: format!("{other:?}"),
            }),
            None => Err(self.end_err()),
        }
    }
}

pub fn parse_guard(text: &str) -> Result<GuardExpr, GuardParseError> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        source: text,
    };
    let expr = parser.parse_expr()?;
    if parser.pos != tokens.len() {
        return Err(GuardParseError::TrailingTokens { guard: text.to_string() });
    }
    Ok(expr)
}

/// Negation-normal form used internally by [`to_dnf`]: negation is only
/// ever applied to an atom, `True`/`False` replace nested `Not`s over
/// constants via De Morgan, matching §4.5 step 1 ("Normalise G to
/// disjunctive normal form").
enum Nnf {
    ConstTrue,
    ConstFalse,
    Lit(String, bool),
    And(Vec<Nnf>),
    Or(Vec<Nnf>),
}

fn to_nnf(expr: &GuardExpr, negate: bool) -> Nnf {
    match expr {
        GuardExpr::True => {
            if negate {
                Nnf::ConstFalse
            } else {
                Nnf::ConstTrue
            }
        }
        GuardExpr::Atom(name) => Nnf::Lit(name.clone(), !negate),
        GuardExpr::Not(inner) => to_nnf(inner, !negate),
        GuardExpr::And(children) => {
            let converted: Vec<Nnf> = children.iter().map(|c| to_nnf(c, negate)).collect();
            if negate {
                Nnf::Or(converted)
            } else {
                Nnf::And(converted)
            }
        }
        GuardExpr::Or(children) => {
            let converted: Vec<Nnf> = children.iter().map(|c| to_nnf(c, negate)).collect();
            if negate {
                Nnf::And(converted)
            } else {
                Nnf::Or(converted)
            }
        }
    }
}

/// One disjunct of a DNF: a conjunction of `(atom name, polarity)`
/// pairs, `true` meaning positive.
pub type Conjunction = Vec<(String, bool)>;

fn nnf_to_dnf(expr: &Nnf) -> Vec<Conjunction> {
    match expr {
        Nnf::ConstTrue => vec![vec![]],
        Nnf::ConstFalse => vec![],
        Nnf::Lit(name, polarity) => vec![vec![(name.clone(), *polarity)]],
        Nnf::Or(children) => children.iter().flat_map(nnf_to_dnf).collect(),
        Nnf::And(children) => children.iter().map(nnf_to_dnf).fold(vec![vec![]], |acc, child_dnf| {
            let mut combined = Vec::with_capacity(acc.len() * child_dnf.len().max(1));
            for existing in &acc {
                for clause in &child_dnf {
                    let mut merged = existing.clone();
                    merged.extend(clause.iter().cloned());
                    combined.push(merged);
                }
            }
            combined
        }),
    }
}

/// Converts a parsed guard to disjunctive normal form (§4.5 step 1):
/// each element of the returned `Vec` is one disjunct, a conjunction of
/// possibly-negated atom names. An empty outer `Vec` means the guard is
/// unsatisfiable (only reachable via an explicit `!true`); a guard of
/// bare `true` yields a single empty conjunction.
pub fn to_dnf(expr: &GuardExpr) -> Vec<Conjunction> {
    nnf_to_dnf(&to_nnf(expr, false))
}

/// Directly evaluates a guard against an assignment, independent of
/// `to_dnf` entirely — the reference semantics invariant 7 (§8) checks
/// the DNF decomposition against.
#[cfg(test)]
fn eval_guard(expr: &GuardExpr, assignment: &std::collections::HashMap<String, bool>) -> bool {
    match expr {
        GuardExpr::True => true,
        GuardExpr::Atom(name) => *assignment.get(name).unwrap_or(&false),
        GuardExpr::Not(inner) => !eval_guard(inner, assignment),
        GuardExpr::And(children) => children.iter().all(|c| eval_guard(c, assignment)),
        GuardExpr::Or(children) => children.iter().any(|c| eval_guard(c, assignment)),
    }
}

#[cfg(test)]
fn eval_conjunction(conjunction: &Conjunction, assignment: &std::collections::HashMap<String, bool>) -> bool {
    conjunction.iter().all(|(name, polarity)| *assignment.get(name).unwrap_or(&false) == *polarity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_bare_atom_conjunction() {
        let expr = parse_guard("on_a_b").unwrap();
        assert_eq!(expr, GuardExpr::Atom("on_a_b".into()));
    }

    #[test]
    fn precedence_not_and_or() {
        // !a & b | c  ==  ((!a) & b) | c
        let expr = parse_guard("!a & b | c").unwrap();
        assert_eq!(
            expr,
            GuardExpr::Or(vec![
                GuardExpr::And(vec![GuardExpr::Not(Box::new(GuardExpr::Atom("a".into()))), GuardExpr::Atom("b".into())]),
                GuardExpr::Atom("c".into())
            ])
        );
    }

    #[test]
    fn word_synonyms_accepted() {
        let expr = parse_guard("a and not b or true").unwrap();
        let dnf = to_dnf(&expr);
        assert_eq!(dnf.len(), 2);
    }

    #[test]
    fn parentheses_group() {
        let expr = parse_guard("on_a_b | (clear_c & on_a_b)").unwrap();
        let dnf = to_dnf(&expr);
        assert_eq!(dnf.len(), 2);
        assert_eq!(dnf[0], vec![("on_a_b".to_string(), true)]);
        assert_eq!(dnf[1].len(), 2);
    }

    #[test]
    fn true_is_single_empty_conjunction() {
        let dnf = to_dnf(&GuardExpr::True);
        assert_eq!(dnf, vec![vec![]]);
    }

    #[test]
    fn negated_true_is_unsatisfiable() {
        let dnf = to_dnf(&GuardExpr::Not(Box::new(GuardExpr::True)));
        assert!(dnf.is_empty());
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(parse_guard("a)").is_err());
    }

    #[test]
    fn unmatched_paren_is_rejected() {
        assert!(parse_guard("(a & b").is_err());
    }

    proptest! {
        // Invariant 7 (§8): for every guard and every assignment to its
        // atoms, G(A) holds iff at least one DNF disjunct is satisfied by A.
        #[test]
        fn guard_dnf_equivalence(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
            let expr = parse_guard("!a & b | (c & a) | !b").unwrap();
            let dnf = to_dnf(&expr);
            let mut assignment = std::collections::HashMap::new();
            assignment.insert("a".to_string(), a);
            assignment.insert("b".to_string(), b);
            assignment.insert("c".to_string(), c);

            let direct = eval_guard(&expr, &assignment);
            let via_dnf = dnf.iter().any(|clause| eval_conjunction(clause, &assignment));
            prop_assert_eq!(direct, via_dnf);
        }
    }
}
