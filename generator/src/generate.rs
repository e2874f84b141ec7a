//! Dialect-aware serialization of formula trees to SMT-LIB text, one
//! top-level expression per line.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::ast::{Ast, Expr, ExprKind, Literal, Node};
use crate::error::Error;
use crate::scanner::Charset;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dialect {
    /// SMT-LIB 2.0 core, no string theory.
    Smt20,
    /// The pre-standard 2.0 string extension (`Concat`, `CharAt`, ...).
    Smt20String,
    /// The 2.5-era string theory (`str.++`, `str.at`, ...).
    Smt25String,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Smt20 => "smt20",
            Dialect::Smt20String => "smt20-string",
            Dialect::Smt25String => "smt25-string",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smt20" => Ok(Dialect::Smt20),
            "smt20-string" => Ok(Dialect::Smt20String),
            "smt25-string" => Ok(Dialect::Smt25String),
            other => Err(format!("unknown dialect `{}`", other)),
        }
    }
}

pub struct Generator<'a> {
    charset: &'a Charset,
    dialect: Dialect,
}

impl<'a> Generator<'a> {
    pub fn new(charset: &'a Charset, dialect: Dialect) -> Self {
        Self { charset, dialect }
    }

    /// Serialize a whole problem, newline-joined. Fails without partial
    /// output on the first construct the dialect cannot express.
    pub fn generate(&self, ast: &Ast) -> Result<String, Error> {
        let lines = ast
            .iter()
            .map(|expr| self.expr(expr))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    /// Serialize, then create/truncate `path` and write the text in one
    /// operation. Serialization completes before the file is touched, so
    /// a generation failure leaves no file behind.
    pub fn generate_file<P: AsRef<Path>>(&self, ast: &Ast, path: P) -> Result<(), Error> {
        let text = self.generate(ast)?;
        fs::write(path, text)?;
        Ok(())
    }

    fn expr(&self, expr: &Expr) -> Result<String, Error> {
        let mut components = vec![String::from(self.operator(&expr.kind)?)];
        for child in &expr.body {
            components.push(self.node(child)?);
        }
        Ok(format!("({})", components.join(" ")))
    }

    /// Operator-token lookup. The special forms are dialect-keyed; any
    /// other expression uses its own symbol verbatim.
    fn operator<'k>(&self, kind: &'k ExprKind) -> Result<&'k str, Error> {
        let unsupported = || Error::NotSupported {
            kind: kind.clone(),
            dialect: self.dialect,
        };
        match kind {
            ExprKind::Other(symbol) => Ok(symbol),
            ExprKind::Concat => match self.dialect {
                Dialect::Smt20String => Ok("Concat"),
                Dialect::Smt25String => Ok("str.++"),
                _ => Err(unsupported()),
            },
            ExprKind::At => match self.dialect {
                Dialect::Smt20String => Ok("CharAt"),
                Dialect::Smt25String => Ok("str.at"),
                _ => Err(unsupported()),
            },
            ExprKind::Length => match self.dialect {
                Dialect::Smt20String => Ok("Length"),
                Dialect::Smt25String => Ok("str.len"),
                _ => Err(unsupported()),
            },
            // No dialect here has regex syntax.
            ExprKind::ReConcat => Err(unsupported()),
        }
    }

    fn node(&self, node: &Node) -> Result<String, Error> {
        match node {
            Node::Expr(expr) => self.expr(expr),
            Node::Literal(lit) => Ok(self.literal(lit)),
            Node::Identifier(name) => Ok(name.clone()),
            Node::Sort(sort) => Ok(sort.clone()),
            Node::Args => Ok(String::from("()")),
        }
    }

    fn literal(&self, lit: &Literal) -> String {
        match lit {
            Literal::Str(value) => self.encode_string(value),
            Literal::Bool(value) => value.to_string(),
            Literal::Int(value) => value.to_string(),
        }
    }

    pub fn encode_string(&self, s: &str) -> String {
        let mut encoded = String::with_capacity(s.len() + 2);
        encoded.push('"');
        for c in s.chars() {
            self.encode_char(&mut encoded, c);
        }
        encoded.push('"');
        encoded
    }

    /// Per-character encoding. Precedence: quote, backslash, whitespace
    /// set, alphabet membership; everything else passes through.
    ///
    /// The hex escape is two digits wide, so code points above U+00FF
    /// are truncated to their low byte. That matches the syntax the
    /// dialects accept and is a known, deliberate loss.
    pub fn encode_char(&self, out: &mut String, c: char) {
        if c == '"' {
            out.push_str(if self.dialect == Dialect::Smt25String {
                "\"\""
            } else {
                "\\\""
            });
        } else if c == '\\' {
            out.push_str("\\\\");
        } else if self.charset.is_whitespace(c) {
            match c {
                ' ' => out.push(' '),
                '\t' => out.push_str("\\t"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                _ => out.push_str(&format!("\\x{:02x}", c as u32 & 0xff)),
            }
        } else if !self.charset.in_alphabet(c) {
            out.push_str(&format!("\\x{:02x}", c as u32 & 0xff));
        } else {
            out.push(c);
        }
    }
}

/// One-shot serialization with the default character sets.
pub fn generate(ast: &Ast, dialect: Dialect) -> Result<String, Error> {
    Generator::new(&Charset::default(), dialect).generate(ast)
}

/// One-shot file output with the default character sets.
pub fn generate_file<P: AsRef<Path>>(ast: &Ast, dialect: Dialect, path: P) -> Result<(), Error> {
    Generator::new(&Charset::default(), dialect).generate_file(ast, path)
}
