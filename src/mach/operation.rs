use super::{DArray, Val};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack value operations
///
/// Every function takes its operands in source order, `lhs` being the
/// value pushed first. Integer arithmetic wraps.

pub struct Operation {}

impl Operation {
    fn integers(lhs: Val, rhs: Val) -> Result<(i32, i32)> {
        Ok((i32::try_from(lhs)?, i32::try_from(rhs)?))
    }

    fn vectors(lhs: Val, rhs: Val) -> Result<(DArray, DArray)> {
        Ok((DArray::try_from(lhs)?, DArray::try_from(rhs)?))
    }

    fn truth(b: bool) -> Val {
        Val::Integer(if b { 1 } else { 0 })
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Val::Integer(l.wrapping_add(r)))
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Val::Integer(l.wrapping_sub(r)))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Val::Integer(l.wrapping_mul(r)))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        if r == 0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Integer(l.wrapping_div(r)))
    }

    pub fn remainder(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        if r == 0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Integer(l.wrapping_rem(r)))
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Operation::truth(l == r))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Operation::truth(l != r))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Operation::truth(l < r))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Operation::truth(l <= r))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Operation::truth(l > r))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(lhs, rhs)?;
        Ok(Operation::truth(l >= r))
    }

    pub fn vector_sum(lhs: Val, rhs: Val) -> Result<Val> {
        let (mut l, r) = Operation::vectors(lhs, rhs)?;
        l.try_add_assign(&r)?;
        Ok(Val::Vector(l))
    }

    pub fn vector_subtract(lhs: Val, rhs: Val) -> Result<Val> {
        let (mut l, r) = Operation::vectors(lhs, rhs)?;
        l.try_sub_assign(&r)?;
        Ok(Val::Vector(l))
    }

    pub fn vector_multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (mut l, r) = Operation::vectors(lhs, rhs)?;
        l.try_mul_assign(&r)?;
        Ok(Val::Vector(l))
    }

    pub fn vector_divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (mut l, r) = Operation::vectors(lhs, rhs)?;
        l.try_div_assign(&r)?;
        Ok(Val::Vector(l))
    }

    pub fn vector_remainder(lhs: Val, rhs: Val) -> Result<Val> {
        let (mut l, r) = Operation::vectors(lhs, rhs)?;
        l.try_rem_assign(&r)?;
        Ok(Val::Vector(l))
    }

    pub fn dot(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::vectors(lhs, rhs)?;
        Ok(Val::Integer(l.dot(&r)?))
    }

    pub fn concat(lhs: Val, rhs: Val) -> Result<Val> {
        let (mut l, r) = Operation::vectors(lhs, rhs)?;
        l &= &r;
        Ok(Val::Vector(l))
    }

    fn shift_amount(rhs: Val) -> Result<usize> {
        let n = i32::try_from(rhs)?;
        if n < 0 {
            return Err(error!(InvalidShift; "NEGATIVE SHIFT"));
        }
        Ok(n as usize)
    }

    pub fn shift_left(lhs: Val, rhs: Val) -> Result<Val> {
        let mut v = DArray::try_from(lhs)?;
        v <<= Operation::shift_amount(rhs)?;
        Ok(Val::Vector(v))
    }

    pub fn shift_right(lhs: Val, rhs: Val) -> Result<Val> {
        let mut v = DArray::try_from(lhs)?;
        v >>= Operation::shift_amount(rhs)?;
        Ok(Val::Vector(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn int(n: i32) -> Val {
        Val::Integer(n)
    }

    fn vec(v: &[i32]) -> Val {
        Val::Vector(DArray::from(v.to_vec()))
    }

    #[test]
    fn test_operand_order() {
        assert_eq!(Operation::subtract(int(10), int(3)).unwrap(), int(7));
        assert_eq!(Operation::divide(int(10), int(3)).unwrap(), int(3));
        assert_eq!(Operation::remainder(int(10), int(3)).unwrap(), int(1));
        assert_eq!(Operation::less(int(1), int(2)).unwrap(), int(1));
        assert_eq!(Operation::greater_equal(int(1), int(2)).unwrap(), int(0));
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(Operation::sum(int(i32::MAX), int(1)).unwrap(), int(i32::MIN));
        assert_eq!(Operation::divide(int(i32::MIN), int(-1)).unwrap(), int(i32::MIN));
    }

    #[test]
    fn test_zero_divisor() {
        let e = Operation::divide(int(1), int(0)).unwrap_err();
        assert!(e.is(ErrorCode::DivisionByZero));
        let e = Operation::vector_remainder(vec(&[1]), vec(&[0])).unwrap_err();
        assert!(e.is(ErrorCode::DivisionByZero));
    }

    #[test]
    fn test_type_checks() {
        assert!(Operation::sum(int(1), vec(&[1]))
            .unwrap_err()
            .is(ErrorCode::TypeMismatch));
        assert!(Operation::concat(vec(&[1]), int(1))
            .unwrap_err()
            .is(ErrorCode::TypeMismatch));
        assert!(Operation::shift_left(int(1), int(1))
            .unwrap_err()
            .is(ErrorCode::TypeMismatch));
    }

    #[test]
    fn test_vectors() {
        assert_eq!(
            Operation::vector_sum(vec(&[1, 2]), vec(&[3, 4])).unwrap(),
            vec(&[4, 6])
        );
        assert_eq!(Operation::dot(vec(&[1, 2]), vec(&[3, 4])).unwrap(), int(11));
        assert_eq!(
            Operation::concat(vec(&[1]), vec(&[2, 3])).unwrap(),
            vec(&[1, 2, 3])
        );
        assert_eq!(
            Operation::shift_right(vec(&[1, 2, 3]), int(1)).unwrap(),
            vec(&[0, 1, 2])
        );
        assert!(Operation::shift_left(vec(&[1]), int(-1))
            .unwrap_err()
            .is(ErrorCode::InvalidShift));
    }
}
