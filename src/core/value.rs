//! Exact rational values for operation results and side totals.
//!
//! Division results are kept as reduced fractions so that totals compare
//! exactly: `1/3 + 2/3 == 1` holds, which it would not in floating point.
//!
//! ## Representation
//!
//! - Denominator is always positive.
//! - Numerator and denominator share no common factor.
//! - Zero is `0/1`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A reduced fraction with a positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawValue", into = "RawValue")]
pub struct Value {
    num: i64,
    den: i64,
}

impl Value {
    /// The additive identity.
    pub const ZERO: Value = Value { num: 0, den: 1 };

    /// Create a whole-number value.
    #[must_use]
    pub const fn integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Create `num / den` in lowest terms.
    ///
    /// Returns `None` when `den` is zero, or when moving the sign to the
    /// numerator would overflow (`i64::MIN / -1`).
    #[must_use]
    pub fn new(num: i64, den: i64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        Self::reduced(num, den)
    }

    fn reduced(num: i64, den: i64) -> Option<Self> {
        let g = gcd(num, den).max(1);
        let (num, den) = (num / g, den / g);
        if den < 0 {
            return Some(Self {
                num: num.checked_neg()?,
                den: den.checked_neg()?,
            });
        }
        Some(Self { num, den })
    }

    /// Numerator in lowest terms.
    #[must_use]
    pub const fn numer(self) -> i64 {
        self.num
    }

    /// Denominator in lowest terms (always positive).
    #[must_use]
    pub const fn denom(self) -> i64 {
        self.den
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Lossy conversion for display or plotting.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// `self + rhs`, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let num = self
            .num
            .checked_mul(rhs.den)?
            .checked_add(rhs.num.checked_mul(self.den)?)?;
        let den = self.den.checked_mul(rhs.den)?;
        Self::reduced(num, den)
    }

    /// `self - rhs`, or `None` on overflow.
    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.checked_add(Self {
            num: rhs.num.checked_neg()?,
            den: rhs.den,
        })
    }

    /// `self * rhs`, or `None` on overflow.
    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let num = self.num.checked_mul(rhs.num)?;
        let den = self.den.checked_mul(rhs.den)?;
        Self::reduced(num, den)
    }

    /// `self / rhs`, or `None` when `rhs` is zero or on overflow.
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        let num = self.num.checked_mul(rhs.den)?;
        let den = self.den.checked_mul(rhs.num)?;
        Self::reduced(num, den)
    }

    /// Exact sum of `values`, or `None` if any partial sum overflows.
    #[must_use]
    pub fn checked_sum(values: impl IntoIterator<Item = Value>) -> Option<Self> {
        values
            .into_iter()
            .try_fold(Value::ZERO, |acc, v| acc.checked_add(v))
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        let lhs = i128::from(self.num) * i128::from(other.den);
        let rhs = i128::from(other.num) * i128::from(self.den);
        lhs.cmp(&rhs)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawValue {
    num: i64,
    den: i64,
}

impl TryFrom<RawValue> for Value {
    type Error = String;

    fn try_from(raw: RawValue) -> Result<Self, Self::Error> {
        Value::new(raw.num, raw.den).ok_or_else(|| "denominator must not be zero".to_string())
    }
}

impl From<Value> for RawValue {
    fn from(v: Value) -> Self {
        Self { num: v.num, den: v.den }
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    i64::try_from(a).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(num: i64, den: i64) -> Value {
        Value::new(num, den).unwrap()
    }

    #[test]
    fn test_reduction() {
        assert_eq!(v(6, 8), v(3, 4));
        assert_eq!(v(3, -4), v(-3, 4));
        assert_eq!(v(0, 5), Value::ZERO);
        assert_eq!(v(0, 5).denom(), 1);
        assert_eq!(v(-6, -3), Value::integer(2));
        assert!(Value::new(1, 0).is_none());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(v(1, 3).checked_add(v(2, 3)), Some(Value::integer(1)));
        assert_eq!(Value::integer(2).checked_sub(Value::integer(5)), Some(Value::integer(-3)));
        assert_eq!(v(2, 3).checked_mul(v(3, 4)), Some(v(1, 2)));
        assert_eq!(Value::integer(7).checked_div(Value::integer(2)), Some(v(7, 2)));
        assert_eq!(Value::integer(7).checked_div(Value::ZERO), None);
    }

    #[test]
    fn test_overflow_is_detected() {
        let big = Value::integer(i64::MAX);
        assert_eq!(big.checked_add(Value::integer(1)), None);
        assert_eq!(big.checked_mul(Value::integer(2)), None);
    }

    #[test]
    fn test_ordering() {
        assert!(v(1, 3) < v(1, 2));
        assert!(Value::integer(-1) < Value::ZERO);
        assert_eq!(v(2, 4).cmp(&v(1, 2)), Ordering::Equal);
    }

    #[test]
    fn test_checked_sum() {
        let values = [v(1, 6), v(1, 3), v(1, 2)];
        assert_eq!(Value::checked_sum(values), Some(Value::integer(1)));
        assert_eq!(Value::checked_sum([]), Some(Value::ZERO));
    }

    #[test]
    fn test_checked_sum_reports_overflow() {
        let values = [Value::integer(i64::MAX), Value::integer(1), Value::integer(-1)];
        assert_eq!(Value::checked_sum(values), None);
    }

    #[test]
    fn test_sign_flip_overflow() {
        assert_eq!(Value::new(i64::MIN, -1), None);
        assert_eq!(Value::integer(i64::MIN).checked_div(Value::integer(-1)), None);
        assert_eq!(Value::new(i64::MIN, 1), Some(Value::integer(i64::MIN)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::integer(5).to_string(), "5");
        assert_eq!(v(-7, 2).to_string(), "-7/2");
        assert!((v(1, 4).to_f64() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_rejects_zero_denominator() {
        let json = serde_json::to_string(&v(3, 4)).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), v(3, 4));

        let bad = r#"{"num":1,"den":0}"#;
        assert!(serde_json::from_str::<Value>(bad).is_err());
    }
}
