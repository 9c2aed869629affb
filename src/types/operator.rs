use std::cmp::Ordering;
use std::fmt;

/// Binary operators recognised inside an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `||`
    Or,
    /// `&&`
    And,
    /// `!=`
    Neq,
    /// `==`
    Eq,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `<`
    Lt,
}

impl Operator {
    /// Resolution order, lowest binding first. An expression is split at the
    /// first operator of this list that occurs in it.
    pub const PRECEDENCE: [Operator; 8] = [
        Operator::Or,
        Operator::And,
        Operator::Neq,
        Operator::Eq,
        Operator::Gte,
        Operator::Lte,
        Operator::Gt,
        Operator::Lt,
    ];

    /// The operator as written in source text.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Or => "||",
            Operator::And => "&&",
            Operator::Neq => "!=",
            Operator::Eq => "==",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
        }
    }

    /// `true` for `||` and `&&`.
    #[must_use]
    pub fn is_logical(self) -> bool {
        matches!(self, Operator::Or | Operator::And)
    }

    /// `true` for `>=`, `<=`, `>` and `<`.
    #[must_use]
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            Operator::Gte | Operator::Lte | Operator::Gt | Operator::Lt
        )
    }

    /// Whether `text` still contains any operator symbol, i.e. is not a leaf.
    #[must_use]
    pub fn occurs_in(text: &str) -> bool {
        Self::PRECEDENCE.iter().any(|op| text.contains(op.symbol()))
    }

    /// Whether an operand ordering satisfies this comparison.
    /// Logical operators never hold for an ordering.
    pub(crate) fn admits(self, ordering: Ordering) -> bool {
        match self {
            Operator::Eq => ordering.is_eq(),
            Operator::Neq => ordering.is_ne(),
            Operator::Gte => ordering.is_ge(),
            Operator::Lte => ordering.is_le(),
            Operator::Gt => ordering.is_gt(),
            Operator::Lt => ordering.is_lt(),
            Operator::Or | Operator::And => false,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_symbol() {
        for op in Operator::PRECEDENCE {
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn two_char_operators_precede_their_prefixes() {
        let position = |op: Operator| {
            Operator::PRECEDENCE
                .iter()
                .position(|&o| o == op)
                .unwrap()
        };
        assert!(position(Operator::Gte) < position(Operator::Gt));
        assert!(position(Operator::Lte) < position(Operator::Lt));
        assert!(position(Operator::Neq) < position(Operator::Eq));
    }

    #[test]
    fn occurs_in_detects_any_symbol() {
        assert!(Operator::occurs_in("true || false"));
        assert!(Operator::occurs_in("1 < 2"));
        assert!(Operator::occurs_in("a!=b"));
        assert!(!Operator::occurs_in("!true"));
        assert!(!Operator::occurs_in("\"text\""));
        assert!(!Operator::occurs_in("-7"));
    }

    #[test]
    fn admits_orderings() {
        use Ordering::{Equal, Greater, Less};
        assert!(Operator::Eq.admits(Equal));
        assert!(!Operator::Eq.admits(Less));
        assert!(Operator::Neq.admits(Greater));
        assert!(Operator::Gte.admits(Equal));
        assert!(Operator::Gte.admits(Greater));
        assert!(!Operator::Gte.admits(Less));
        assert!(Operator::Lte.admits(Less));
        assert!(!Operator::Lte.admits(Greater));
        assert!(Operator::Gt.admits(Greater));
        assert!(!Operator::Gt.admits(Equal));
        assert!(Operator::Lt.admits(Less));
        assert!(!Operator::Lt.admits(Equal));
        assert!(!Operator::Or.admits(Equal));
        assert!(!Operator::And.admits(Equal));
    }

    #[test]
    fn kinds() {
        assert!(Operator::Or.is_logical());
        assert!(Operator::And.is_logical());
        assert!(!Operator::Eq.is_logical());
        assert!(Operator::Lt.is_relational());
        assert!(!Operator::Neq.is_relational());
    }
}
