//! Type checking
//!
//! A placeholder pass: the "type" of an expression is the class of its AST
//! node, and a binary expression is well-typed when both operands resolve to
//! the same class. `1 + 2` checks, `1 + 2.0` does not. This will be replaced
//! by real value types once the grammar has declarations.

use crate::frontend::parser::ast::{Expr, NodeKind, Program};

/// Type errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch in statement {index}: `{expr}`")]
    Mismatch { index: usize, expr: String },
}

/// Resolve the type of an expression
///
/// For a binary expression, both sides are resolved recursively and the
/// common type is returned, or `None` if they differ. Any other expression
/// resolves to its own node kind.
pub fn type_check_binary_expression(expr: &Expr) -> Option<NodeKind> {
    match expr {
        Expr::Binary { left, right, op } => {
            let left_type = type_check_binary_expression(left);
            let right_type = type_check_binary_expression(right);
            if left_type == right_type {
                left_type
            } else {
                tracing::trace!(
                    "Operands of '{}' disagree: {:?} vs {:?}",
                    op,
                    left_type,
                    right_type
                );
                None
            }
        }
        other => Some(other.kind()),
    }
}

/// Check every statement of a program, stopping at the first mismatch
pub fn check_program(program: &Program) -> Result<(), TypeError> {
    tracing::debug!("Type checking {} statements", program.body.len());
    for (index, stmt) in program.body.iter().enumerate() {
        if type_check_binary_expression(stmt).is_none() {
            return Err(TypeError::Mismatch {
                index,
                expr: stmt.to_string(),
            });
        }
    }
    Ok(())
}
