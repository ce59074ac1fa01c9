use crate::ast::{BinaryOperator, Expr};

impl Expr {
    /// Evaluates the expression tree and returns its value.
    ///
    /// Arithmetic follows IEEE 754 semantics, so dividing by zero produces
    /// an infinity or NaN instead of an error.
    ///
    /// # Example
    /// ```
    /// use formula::parse_formula;
    ///
    /// let expr = parse_formula("7 + (((5 * 2) + 5) / (2 + 3) + 1) / 2 - 1").unwrap();
    /// assert_eq!(expr.evaluate(), 8.0);
    ///
    /// let expr = parse_formula("1 / (2 - 2)").unwrap();
    /// assert_eq!(expr.evaluate(), f64::INFINITY);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        let mut pending = Vec::new();
        let mut node = self;

        // Operator chains nest on the left; collect them instead of recursing.
        while let Self::BinaryOp { left, op, right } = node {
            pending.push((*op, right));
            node = left;
        }

        let first = match node {
            Self::Number { value } => *value,
            Self::Negation { expr } => -expr.evaluate(),
            Self::Parenthesized { expr } => expr.evaluate(),
            Self::BinaryOp { .. } => unreachable!("left spine already walked"),
        };

        pending.iter()
               .rev()
               .fold(first, |acc, (op, right)| op.apply(acc, right.evaluate()))
    }
}

impl BinaryOperator {
    /// Applies the operator to two already evaluated operands.
    ///
    /// # Example
    /// ```
    /// use formula::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.apply(5.0, 2.0), 2.5);
    /// assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}
