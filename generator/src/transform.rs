//! Literal-scaling transformer: multiply every integer literal by a
//! factor and repeat every character of every string literal that many
//! times.

use serde::Deserialize;

use crate::ast::{Ast, Literal};
use crate::walker::{walk, Visit};

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct MultiplyConfig {
    /// Unsigned on purpose: a negative scale has no defined meaning for
    /// strings. Zero empties every string literal and zeroes every
    /// integer literal.
    pub factor: u32,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self { factor: 2 }
    }
}

impl MultiplyConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

pub struct Multiply {
    factor: u32,
}

impl Multiply {
    pub fn new(factor: u32) -> Self {
        Self { factor }
    }

    pub fn from_config(config: MultiplyConfig) -> Self {
        Self::new(config.factor)
    }

    /// Scale every literal in place. Topology is untouched; only
    /// literal values change.
    pub fn apply(&mut self, ast: &mut Ast) {
        walk(self, ast);
    }
}

impl Visit for Multiply {
    fn exit_literal(&mut self, lit: &mut Literal) {
        match lit {
            Literal::Str(value) => {
                let mut scaled = String::with_capacity(value.len() * self.factor as usize);
                for c in value.chars() {
                    for _ in 0..self.factor {
                        scaled.push(c);
                    }
                }
                *value = scaled;
            }
            Literal::Int(value) => {
                *value = std::mem::take(value) * self.factor;
            }
            Literal::Bool(_) => {}
        }
    }
}

pub fn multiply(ast: &mut Ast, factor: u32) {
    Multiply::new(factor).apply(ast);
}
