use std::collections::HashMap;

use crate::{Expression, Operation, Precedence, Real, Value};

/// A deferred binary operation: the frozen left operand, its rendered
/// (already parenthesized if needed) description, and the combinators to
/// apply once the right operand arrives. At most one exists at a time.
#[derive(Clone, Debug)]
struct PendingOperation<R> {
    left: Expression<R>,
    left_description: String,
    function: fn(R, R) -> R,
    describe: fn(&str, &str) -> String,
    precedence: Precedence,
}

impl<R: Real> PendingOperation<R> {
    /// Combines the frozen left operand with `right` into a new root node.
    fn resolve(self, right: Expression<R>) -> Expression<R> {
        let description = (self.describe)(&self.left_description, right.description());
        Expression::Binary(
            Box::new(self.left),
            Box::new(right),
            self.function,
            description,
            self.precedence,
        )
    }
}

/// Snapshot returned by [`Brain::evaluate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation<R> {
    /// Numeric value of the current expression; zero when empty.
    pub result: R,
    /// Whether a binary operation is still waiting for its right operand.
    pub is_pending: bool,
    /// Human-readable rendering of the current expression.
    pub description: String,
}

/// The keystroke-driven expression engine.
///
/// Operands and operators arrive one at a time: `set_operand` installs a
/// fresh leaf as the expression root, binary operators freeze the root into
/// a pending slot until the right operand and `=` (or another binary
/// operator) arrive, and `undo_operation` peels the outermost node off the
/// tree. One brain serves one interactive session and is mutated only by
/// its single owner; every call runs to completion and never faults.
#[derive(Clone, Debug)]
pub struct Brain<R> {
    root: Option<Expression<R>>,
    pending: Option<PendingOperation<R>>,
    precedence: Precedence,
    variable: Option<(String, R)>,
}

impl<R: Real> Default for Brain<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Real> Brain<R> {
    /// An empty brain: no expression, nothing pending, no variable bound.
    pub fn new() -> Self {
        Self {
            root: None,
            pending: None,
            precedence: Precedence::High,
            variable: None,
        }
    }

    /// Installs a numeric literal as the current expression root. While a
    /// binary operation is pending this is the right operand in progress.
    pub fn set_operand(&mut self, operand: R) {
        self.root = Some(Expression::number(operand));
        // A fresh leaf is atomic; it never needs wrapping.
        self.precedence = Precedence::High;
    }

    /// Installs a variable placeholder as the root and makes the name the
    /// sole active variable. A newly bound name starts at zero; installing
    /// the already-active name keeps its current value.
    pub fn set_operand_variable(&mut self, name: &str) {
        self.root = Some(Expression::variable(name));
        match &self.variable {
            Some((bound, _)) if bound == name => {}
            _ => self.variable = Some((name.to_string(), R::zero())),
        }
        self.precedence = Precedence::High;
    }

    /// Updates the value of the active variable without touching the tree.
    /// No active variable means nothing to update.
    pub fn set_variable(&mut self, value: R) {
        if let Some((_, bound)) = &mut self.variable {
            *bound = value;
        }
    }

    /// Applies the operation bound to `symbol`. Symbols outside the
    /// operation table, and operators arriving with no current expression,
    /// leave the engine untouched.
    pub fn perform_operation(&mut self, symbol: &str) {
        let Some(operation) = Operation::<R>::lookup(symbol) else {
            return;
        };
        match operation {
            Operation::Constant(value) => {
                // Constants describe themselves by symbol, not by value.
                self.root = Some(Expression::Value(Value::Number(value), symbol.to_string()));
                self.precedence = Precedence::High;
            }
            Operation::Unary(function, describe) => {
                if let Some(child) = self.root.take() {
                    let description = describe(child.description());
                    self.root = Some(Expression::Unary(Box::new(child), function, description));
                    self.precedence = Precedence::High;
                }
            }
            Operation::Binary(function, describe, precedence) => {
                if let Some(left) = self.root.take() {
                    let mut left_description = left.description().to_string();
                    if self.precedence < precedence {
                        left_description = format!("({left_description})");
                    }
                    // A second binary operator lands here with the right
                    // operand captured as the new left; the previous pending
                    // operation is dropped unresolved.
                    self.pending = Some(PendingOperation {
                        left,
                        left_description,
                        function,
                        describe,
                        precedence,
                    });
                    self.precedence = precedence;
                }
            }
            Operation::Equals => self.resolve_pending(),
        }
    }

    /// Applies the captured combinator to (frozen left, current root).
    fn resolve_pending(&mut self) {
        if let Some(right) = self.root.take() {
            if let Some(pending) = self.pending.take() {
                self.precedence = pending.precedence;
                self.root = Some(pending.resolve(right));
            } else {
                // `=` with nothing pending keeps the expression as is.
                self.root = Some(right);
            }
        }
    }

    /// Peels one wrapping level off the expression: a unary node yields its
    /// operand, a binary node its left operand (the right operand and the
    /// operator are discarded). Any pending operation is discarded outright,
    /// not restored. At a leaf value, and on the empty brain, this is a
    /// no-op.
    pub fn undo_operation(&mut self) {
        self.pending = None;
        if let Some(root) = self.root.take() {
            let previous = root.into_previous();
            self.precedence = previous.precedence();
            self.root = Some(previous);
        }
    }

    /// Full reset to the initial empty state: tree, pending operation, and
    /// variable binding are all dropped.
    pub fn clear(&mut self) {
        self.root = None;
        self.pending = None;
        self.precedence = Precedence::High;
        self.variable = None;
    }

    /// Numeric value of the current expression under the active variable
    /// binding. The empty expression reads as zero.
    pub fn result(&self) -> R {
        match &self.root {
            Some(root) => root.evaluate(self.binding()),
            None => R::zero(),
        }
    }

    /// Whether a binary operation is waiting for its right operand.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Human-readable rendering of the current expression. While an
    /// operation is pending, renders the frozen left operand followed by the
    /// operator and an empty right-hand slot.
    pub fn description(&self) -> String {
        match (&self.pending, &self.root) {
            (Some(pending), _) => (pending.describe)(&pending.left_description, ""),
            (None, Some(root)) => root.description().to_string(),
            (None, None) => "0".to_string(),
        }
    }

    /// Evaluates under the active variable binding.
    pub fn evaluate(&self) -> Evaluation<R> {
        Evaluation {
            result: self.result(),
            is_pending: self.is_pending(),
            description: self.description(),
        }
    }

    /// Evaluates after folding `overrides` into the active binding.
    ///
    /// An override for the active variable persists as its new bound value
    /// after the call returns; overrides for other names are ignored (one
    /// variable is active at a time).
    pub fn evaluate_with(&mut self, overrides: &HashMap<String, R>) -> Evaluation<R> {
        if let Some((name, value)) = &mut self.variable {
            if let Some(new) = overrides.get(name.as_str()) {
                *value = *new;
            }
        }
        self.evaluate()
    }

    /// A single-variable view of the current expression, for callers that
    /// plot or tabulate it. The supplied value overrides the named variable
    /// per call; the active binding itself is untouched.
    pub fn function_of<'a>(&'a self, name: &'a str) -> impl Fn(R) -> R + 'a {
        move |x| match &self.root {
            Some(root) => root.evaluate(Some((name, x))),
            None => R::zero(),
        }
    }

    fn binding(&self) -> Option<(&str, R)> {
        self.variable
            .as_ref()
            .map(|(name, value)| (name.as_str(), *value))
    }
}
