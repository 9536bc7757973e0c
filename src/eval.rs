use crate::{
    ast::{BinOp, Expr},
    Number,
};

/// Reduces an expression tree to a number.
///
/// Evaluation is pure and infallible: the parser only hands out well-formed
/// trees, and the arithmetic follows IEEE-754, so dividing by zero produces
/// an infinity or NaN instead of an error.
pub fn evaluate(expr: &Expr) -> Number {
    match expr {
        Expr::Number(value) => *value,
        Expr::Binary { op, left, right } => {
            let left = evaluate(left);
            let right = evaluate(right);
            match op {
                BinOp::Add => left + right,
                BinOp::Sub => left - right,
                BinOp::Mul => left * right,
                BinOp::Div => left / right,
            }
        }
    }
}
