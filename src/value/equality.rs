use super::Value;

/// Deep structural comparison, as opposed to the loose comparison performed by [`PartialEq`].
///
/// The rules for [`Value`] are:
/// - Values of different kinds are never equal.
/// - Booleans compare strictly, numbers by value and nulls are always equal.
/// - Strings are equal if they are identical or if both are numeric and their numbers are equal,
///   so `"1"` equals `"01"` and `"1e1"` equals `"10"`. Surrounding whitespace is allowed.
/// - Arrays are compared as unordered sets: every element of one must have a structurally equal
///   element in the other.
/// - Objects defer to [`Object::equals`](super::Object::equals).
pub trait StructuralEq {
    fn structural_eq(&self, other: &Self) -> bool;
}

impl StructuralEq for Value {
    fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Int(l), Value::Int(r)) => l == r,
            (Value::Float(l), Value::Float(r)) => l == r,
            (Value::Str(l), Value::Str(r)) => l == r || numeric_eq(l, r),
            (Value::Array(l), Value::Array(r)) => set_eq(l, r),
            (Value::Object(l), Value::Object(r)) => l.equals(r.as_ref()),
            _ => false,
        }
    }
}

impl<T: StructuralEq> StructuralEq for [T] {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(l, r)| l.structural_eq(r))
    }
}

/// Compares two values structurally.
///
/// # Examples
/// ```
/// # use toolkit_core::value::{are_equal, Value};
/// let lhs = Value::from(vec![Value::Int(1), Value::Int(2)]);
/// let rhs = Value::from(vec![Value::Int(2), Value::Int(1)]);
/// assert!(are_equal(&lhs, &rhs));
/// assert!(!are_equal(&Value::Int(1), &Value::Float(1.0)));
/// ```
pub fn are_equal(lhs: &Value, rhs: &Value) -> bool {
    lhs.structural_eq(rhs)
}

fn numeric_eq(lhs: &str, rhs: &str) -> bool {
    match (numeric(lhs), numeric(rhs)) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

/// Parses a decimal numeric string: an optional sign, digits with an optional fraction and an
/// optional exponent.
fn numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let (mantissa, exponent) = match digits.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (digits, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let valid_mantissa = !(whole.is_empty() && fraction.is_empty())
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit());
    let valid_exponent = exponent.is_none_or(|exponent| {
        let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        !exponent.is_empty() && exponent.bytes().all(|b| b.is_ascii_digit())
    });

    if !(valid_mantissa && valid_exponent) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn set_eq(lhs: &[Value], rhs: &[Value]) -> bool {
    let covers = |a: &[Value], b: &[Value]| {
        a.iter().all(|item| b.iter().any(|other| item.structural_eq(other)))
    };

    covers(lhs, rhs) && covers(rhs, lhs)
}
