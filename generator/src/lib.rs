mod ast;
mod error;
mod fuzz;
mod generate;
mod scanner;
mod transform;
mod util;
mod walker;

pub use crate::ast::{Ast, Expr, ExprKind, Literal, Node};
pub use crate::error::Error;
pub use crate::fuzz::{concats, ConcatsConfig};
pub use crate::generate::{generate, generate_file, Dialect, Generator};
pub use crate::scanner::Charset;
pub use crate::transform::{multiply, Multiply, MultiplyConfig};
pub use crate::util::{all_same, coin_toss, join_terms_with, random_string};
pub use crate::walker::{walk, Visit};

use rand::Rng;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    pub concats: ConcatsConfig,
    pub multiply: Option<MultiplyConfig>,
}

/// Produce one serialized problem: generate, optionally scale the
/// literals, then render for the dialect.
pub fn instance_with_config<R: Rng + ?Sized>(
    rng: &mut R,
    dialect: Dialect,
    config: &InstanceConfig,
) -> Result<String, Error> {
    let charset = Charset::default();
    let mut ast = concats(rng, &charset, &config.concats);
    if let Some(multiply) = config.multiply {
        Multiply::from_config(multiply).apply(&mut ast);
    }
    Generator::new(&charset, dialect).generate(&ast)
}

pub fn instance(dialect: Dialect) -> Result<String, Error> {
    instance_with_config(&mut rand::rng(), dialect, &InstanceConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn instance_config_parses_from_toml() {
        let config: InstanceConfig =
            toml::from_str("[concats]\nn_vars = 3\n\n[multiply]\nfactor = 4\n").unwrap();
        assert_eq!(config.concats.n_vars, 3);
        assert_eq!(config.multiply.unwrap().factor, 4);

        let bare: InstanceConfig = toml::from_str("").unwrap();
        assert!(bare.multiply.is_none());
    }

    #[test]
    fn instances_are_generated_end_to_end() {
        let mut rng = StdRng::seed_from_u64(0);
        let text =
            instance_with_config(&mut rng, Dialect::Smt25String, &InstanceConfig::default())
                .unwrap();
        assert!(text.starts_with("(declare-fun var0 () String)"));
        assert!(text.ends_with("(check-sat)"));
    }
}
