//! Random problem generation. Produces concat-heavy string instances:
//! a set of string variables, each constrained to a right-folded
//! concatenation of literals and earlier variables.

use rand::Rng;
use serde::Deserialize;

use crate::ast::{Ast, Expr, ExprKind, Node};
use crate::scanner::Charset;
use crate::util::{coin_toss, join_terms_with, random_string};

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ConcatsConfig {
    pub n_vars: usize,
    pub n_terms: usize,
    pub min_literal: usize,
    pub max_literal: usize,
    /// Chance that a concat term is a fresh literal rather than a
    /// reference to an earlier variable.
    pub p_literal: f64,
}

impl Default for ConcatsConfig {
    fn default() -> Self {
        Self {
            n_vars: 5,
            n_terms: 4,
            min_literal: 1,
            max_literal: 8,
            p_literal: 0.7,
        }
    }
}

pub fn concats<R: Rng + ?Sized>(rng: &mut R, charset: &Charset, config: &ConcatsConfig) -> Ast {
    let names: Vec<String> = (0..config.n_vars).map(|i| format!("var{}", i)).collect();
    let n_terms = config.n_terms.max(1);

    let mut ast = Ast::new();
    for name in &names {
        ast.push(Expr::call(
            "declare-fun",
            vec![Node::identifier(name), Node::Args, Node::sort("String")],
        ));
    }

    for (i, name) in names.iter().enumerate() {
        let terms: Vec<Node> = (0..n_terms)
            .map(|_| {
                // only earlier variables may appear, keeping the
                // constraints acyclic
                if i > 0 && !rng.random_bool(config.p_literal) {
                    Node::identifier(&names[rng.random_range(0..i)])
                } else {
                    let length = rng.random_range(config.min_literal..=config.max_literal);
                    Node::string_lit(&random_string(rng, charset, length))
                }
            })
            .collect();
        let folded = join_terms_with(terms, |left, right| {
            Node::Expr(Expr::new(ExprKind::Concat, vec![left, right]))
        });
        ast.push(Expr::call(
            "assert",
            vec![Node::Expr(Expr::call(
                "=",
                vec![Node::identifier(name), folded],
            ))],
        ));

        if coin_toss(rng) {
            let bound = (config.max_literal * n_terms * config.n_vars) as i64;
            ast.push(Expr::call(
                "assert",
                vec![Node::Expr(Expr::call(
                    "<=",
                    vec![
                        Node::Expr(Expr::new(ExprKind::Length, vec![Node::identifier(name)])),
                        Node::int_lit(bound),
                    ],
                ))],
            ));
        }
    }

    ast.push(Expr::call("check-sat", vec![]));
    ast
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate, Dialect};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn problem(seed: u64) -> Ast {
        let mut rng = StdRng::seed_from_u64(seed);
        concats(&mut rng, &Charset::default(), &ConcatsConfig::default())
    }

    #[test]
    fn opens_with_declarations_and_ends_with_check_sat() {
        let config = ConcatsConfig::default();
        let ast = problem(1);
        for expr in &ast[..config.n_vars] {
            assert_eq!(expr.kind, ExprKind::Other(String::from("declare-fun")));
        }
        assert_eq!(ast.last().unwrap(), &Expr::call("check-sat", vec![]));
    }

    #[test]
    fn instances_serialize_in_both_string_dialects() {
        for seed in 0..8 {
            let ast = problem(seed);
            assert!(generate(&ast, Dialect::Smt25String).is_ok());
            assert!(generate(&ast, Dialect::Smt20String).is_ok());
        }
    }

    #[test]
    fn same_seed_same_problem() {
        assert_eq!(problem(99), problem(99));
    }
}
