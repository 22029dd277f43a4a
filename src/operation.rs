use crate::{Precedence, Real};

/// A keypad operation, as bound in the operation table.
///
/// Numeric combinators and description templates are plain function
/// pointers so they can be stored inside tree nodes; all of them follow
/// IEEE-754 exactly and never fault (`1 ÷ 0` is `∞`, `0 ÷ 0` is NaN).
#[derive(Clone, Copy, Debug)]
pub enum Operation<R> {
    /// Pushes a named constant.
    Constant(R),
    /// Applies a function to the current expression in place.
    Unary(fn(R) -> R, fn(&str) -> String),
    /// Defers combination until the right operand arrives.
    Binary(fn(R, R) -> R, fn(&str, &str) -> String, Precedence),
    /// Resolves the deferred binary operation.
    Equals,
}

impl<R: Real> Operation<R> {
    /// Looks up the operation bound to a keypad symbol.
    ///
    /// The table is fixed at compile time and read-only; unknown symbols
    /// have no operation and callers treat them as no-ops.
    pub fn lookup(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "π" => Operation::Constant(R::PI()),
            "e" => Operation::Constant(R::E()),
            "√" => Operation::Unary(|x| x.sqrt(), |d| format!("√({d})")),
            "x²" => Operation::Unary(|x| x.powi(2), |d| format!("({d})²")),
            "sin" => Operation::Unary(|x| x.sin(), |d| format!("sin({d})")),
            "cos" => Operation::Unary(|x| x.cos(), |d| format!("cos({d})")),
            "tan" => Operation::Unary(|x| x.tan(), |d| format!("tan({d})")),
            "±" => Operation::Unary(|x| -x, |d| format!("-({d})")),
            "+" => Operation::Binary(|a, b| a + b, |l, r| format!("{l} + {r}"), Precedence::Low),
            "-" => Operation::Binary(|a, b| a - b, |l, r| format!("{l} - {r}"), Precedence::Low),
            "×" => Operation::Binary(|a, b| a * b, |l, r| format!("{l} × {r}"), Precedence::High),
            "÷" => Operation::Binary(|a, b| a / b, |l, r| format!("{l} ÷ {r}"), Precedence::High),
            "EE" => Operation::Binary(
                |a, b| a * R::from(10.0).unwrap().powf(b),
                |l, r| format!("{l} EE {r}"),
                Precedence::High,
            ),
            "=" => Operation::Equals,
            _ => return None,
        })
    }
}
