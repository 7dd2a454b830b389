//! Tokens, operators and committed operations.

use serde::{Deserialize, Serialize};

use super::error::BalanceError;
use crate::core::{OperationId, TokenId, Value};

/// A numbered token in a side's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub value: i64,
}

impl Token {
    #[must_use]
    pub const fn new(id: TokenId, value: i64) -> Self {
        Self { id, value }
    }
}

/// Binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in button order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol shown on the operator button.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Parse a button symbol. Accepts `x` and `×` for multiply and `÷` for divide.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | 'x' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply the operator with exact arithmetic.
    ///
    /// Division is real division: `7 / 2 = 7/2`. Division by zero is an error.
    pub fn apply(self, lhs: Value, rhs: Value) -> Result<Value, BalanceError> {
        let result = match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => {
                if rhs.is_zero() {
                    return Err(BalanceError::DivisionByZero { dividend: lhs });
                }
                lhs.checked_div(rhs)
            }
        };

        result.ok_or(BalanceError::Overflow {
            lhs,
            operator: self.symbol(),
            rhs,
        })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A committed `num1 op num2 = result` expression on one side.
///
/// Immutable once created; undo removes it whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    pub id: OperationId,
    pub num1: i64,
    pub num2: i64,
    pub operator: Operator,
    pub result: Value,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} = {}", self.num1, self.operator, self.num2, self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::integer(n)
    }

    #[test]
    fn test_operator_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('%'), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(int(2), int(3)), Ok(int(5)));
        assert_eq!(Operator::Subtract.apply(int(2), int(3)), Ok(int(-1)));
        assert_eq!(Operator::Multiply.apply(int(3), int(4)), Ok(int(12)));
        assert_eq!(Operator::Divide.apply(int(8), int(4)), Ok(int(2)));
        assert_eq!(Operator::Divide.apply(int(7), int(2)), Ok(Value::new(7, 2).unwrap()));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(int(5), int(0)),
            Err(BalanceError::DivisionByZero { dividend: int(5) })
        );
    }

    #[test]
    fn test_overflow() {
        let err = Operator::Multiply.apply(int(i64::MAX), int(2)).unwrap_err();
        assert!(matches!(err, BalanceError::Overflow { operator: '*', .. }));
    }

    #[test]
    fn test_operation_display() {
        let op = Operation {
            id: OperationId(0),
            num1: 7,
            num2: 2,
            operator: Operator::Divide,
            result: Value::new(7, 2).unwrap(),
        };
        assert_eq!(op.to_string(), "7 / 2 = 7/2");
    }
}
