use crate::Real;

/// Parenthesization tier of a binary operator.
///
/// The only question a tier answers is whether an already-rendered
/// description must be wrapped in parentheses before it becomes the left
/// operand of a new operator: wrap iff `current < new`. `Ord` follows
/// declaration order, so adding tiers keeps the rule intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Additive operators.
    Low,
    /// Multiplicative and exponential operators. Also the context of atomic
    /// operands, which never need wrapping.
    High,
}

/// A leaf operand.
#[derive(Clone, Debug)]
pub enum Value<R> {
    /// A numeric literal.
    Number(R),
    /// A reference to the named variable, resolved at evaluation time.
    Variable(String),
}

/// An expression built one keystroke at a time.
///
/// Nodes own their children outright; every completed operation wraps the
/// previous root in a new node, so the tree is acyclic and grows only at the
/// root. Each node carries the rendered description of the subtree below it.
#[derive(Clone, Debug)]
pub enum Expression<R> {
    Value(Value<R>, String),
    Unary(Box<Expression<R>>, fn(R) -> R, String),
    Binary(
        Box<Expression<R>>,
        Box<Expression<R>>,
        fn(R, R) -> R,
        String,
        Precedence,
    ),
}

impl<R: Real> Expression<R> {
    /// A literal leaf, rendered with the float's `Display`.
    pub fn number(value: R) -> Self {
        Expression::Value(Value::Number(value), format!("{value}"))
    }

    /// A variable leaf, rendered as its name.
    pub fn variable(name: impl Into<String>) -> Self {
        let name = name.into();
        let description = name.clone();
        Expression::Value(Value::Variable(name), description)
    }

    /// The rendered description of this subtree.
    pub fn description(&self) -> &str {
        match self {
            Expression::Value(_, description)
            | Expression::Unary(_, _, description)
            | Expression::Binary(_, _, _, description, _) => description,
        }
    }

    /// The parenthesization context this subtree provides when it becomes
    /// the left operand of a new binary operator. Leaf values and unary
    /// results render atomically, so only binary nodes can need wrapping.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expression::Binary(_, _, _, _, precedence) => *precedence,
            _ => Precedence::High,
        }
    }

    /// Descends one wrapping level: the operand of a unary node or the left
    /// operand of a binary node. A leaf value is its own previous level,
    /// which makes repeated descent terminate there.
    pub fn into_previous(self) -> Self {
        match self {
            Expression::Value(..) => self,
            Expression::Unary(child, _, _) => *child,
            Expression::Binary(left, _, _, _, _) => *left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_orders_low_below_high() {
        assert!(Precedence::Low < Precedence::High);
    }

    #[test]
    fn descent_stops_at_a_value() {
        let four = Expression::number(4.0_f64);
        let root = Expression::Unary(Box::new(four), |x: f64| x.sqrt(), "√(4)".to_string());

        let previous = root.into_previous();
        assert_eq!(previous.description(), "4");
        let again = previous.into_previous();
        assert_eq!(again.description(), "4");
    }
}
