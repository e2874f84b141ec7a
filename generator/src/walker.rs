use crate::ast::{Ast, Expr, Literal, Node};

/// Post-order hooks over a formula tree. A transformer overrides the
/// hooks it cares about and may rewrite the node's fields in place; the
/// walk itself never mutates anything.
///
/// Dispatch is exhaustive over the closed node enum, so adding a node
/// kind is a compile-time obligation here rather than a runtime
/// "unknown node" failure.
pub trait Visit {
    fn exit_literal(&mut self, _lit: &mut Literal) {}
    fn exit_identifier(&mut self, _name: &mut String) {}
    fn exit_sort(&mut self, _sort: &mut String) {}
    fn exit_args(&mut self) {}
    fn exit_expr(&mut self, _expr: &mut Expr) {}
}

/// Visit every node reachable from every top-level expression exactly
/// once, children before the owning expression's exit hook. The `&mut`
/// borrow gives the visitor exclusive mutation rights for the duration
/// of the call.
pub fn walk<V: Visit>(visitor: &mut V, ast: &mut Ast) {
    for expr in ast.iter_mut() {
        walk_expr(visitor, expr);
    }
}

fn walk_expr<V: Visit>(visitor: &mut V, expr: &mut Expr) {
    for child in expr.body.iter_mut() {
        walk_node(visitor, child);
    }
    visitor.exit_expr(expr);
}

fn walk_node<V: Visit>(visitor: &mut V, node: &mut Node) {
    match node {
        Node::Literal(lit) => visitor.exit_literal(lit),
        Node::Identifier(name) => visitor.exit_identifier(name),
        Node::Sort(sort) => visitor.exit_sort(sort),
        Node::Args => visitor.exit_args(),
        Node::Expr(expr) => walk_expr(visitor, expr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ExprKind;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visit for Recorder {
        fn exit_literal(&mut self, lit: &mut Literal) {
            self.events.push(format!("lit:{:?}", lit));
        }

        fn exit_identifier(&mut self, name: &mut String) {
            self.events.push(format!("id:{}", name));
        }

        fn exit_args(&mut self) {
            self.events.push(String::from("args"));
        }

        fn exit_expr(&mut self, expr: &mut Expr) {
            self.events.push(format!("expr:{}", expr.kind));
        }
    }

    #[test]
    fn walk_is_post_order_and_exhaustive() {
        // (assert (str.++ x "a"))
        let mut ast = vec![Expr::call(
            "assert",
            vec![Node::Expr(Expr::new(
                ExprKind::Concat,
                vec![Node::identifier("x"), Node::string_lit("a")],
            ))],
        )];

        let mut rec = Recorder::default();
        walk(&mut rec, &mut ast);

        assert_eq!(
            rec.events,
            vec!["id:x", "lit:Str(\"a\")", "expr:concat", "expr:assert"]
        );
    }

    #[test]
    fn walk_visits_every_top_level_expr() {
        let mut ast = vec![
            Expr::call("check-sat", vec![]),
            Expr::call("exit", vec![Node::Args]),
        ];

        let mut rec = Recorder::default();
        walk(&mut rec, &mut ast);

        assert_eq!(rec.events, vec!["expr:check-sat", "args", "expr:exit"]);
    }
}
