/// An expression tree node produced by the parser.
///
/// Every node owns its children exclusively, so the tree is freed as a whole
/// when the root goes out of scope. Nodes are immutable once the parser hands
/// the root back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3` or `2.5`.
    Number {
        /// The literal value. Always a normal, finite `f64`.
        value: f64,
    },
    /// A prefix minus applied to an operand (`-x`).
    Negation {
        /// The negated operand.
        expr: Box<Self>,
    },
    /// A group enclosed in parentheses (`(x)`).
    Parenthesized {
        /// The enclosed expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary operation node from its parts.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Returns the number of source tokens this subtree spans.
    ///
    /// Operators, literals and both parentheses of a group each count as one
    /// token. The parser relies on this only to check its own cursor.
    ///
    /// ## Example
    /// ```
    /// use formula::parse_formula;
    ///
    /// let expr = parse_formula("-(1 + 2) * 3").unwrap();
    ///
    /// assert_eq!(expr.consumed_tokens(), 8);
    /// ```
    #[must_use]
    pub fn consumed_tokens(&self) -> usize {
        let mut count = 0;
        let mut node = self;

        // Chains of operators nest on the left, so walk that side in a loop.
        while let Self::BinaryOp { left, right, .. } = node {
            count += right.consumed_tokens() + 1;
            node = left;
        }

        let operand = match node {
            Self::Number { .. } => 1,
            Self::Negation { expr } => expr.consumed_tokens() + 1,
            Self::Parenthesized { expr } => expr.consumed_tokens() + 2,
            Self::BinaryOp { .. } => unreachable!("left spine already walked"),
        };

        count + operand
    }
}

impl Drop for Expr {
    /// Unlinks the left spine of an operator chain one node at a time, so a
    /// formula like `1 + 1 + ... + 1` is freed without deep recursion.
    fn drop(&mut self) {
        let Self::BinaryOp { left, .. } = self else {
            return;
        };
        let mut spine = std::mem::replace(left, Box::new(Self::Number { value: 0.0 }));

        while let Self::BinaryOp { left, .. } = &mut *spine {
            let next = std::mem::replace(left, Box::new(Self::Number { value: 0.0 }));
            spine = next;
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}
