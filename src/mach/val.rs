use super::DArray;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack values

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i32),
    Vector(DArray),
}

impl Val {
    /// Parse one line of console input. Integers may be signed,
    /// vectors use the `<< 1, 2 >>` form.
    pub fn from_input(s: &str) -> Result<Val> {
        let s = s.trim();
        if s.starts_with('<') {
            return Ok(Val::Vector(s.parse::<DArray>()?));
        }
        match s.parse::<i32>() {
            Ok(n) => Ok(Val::Integer(n)),
            Err(_) => Err(error!(FormatError; "EXPECTED AN INTEGER OR VECTOR")),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Vector(v) => write!(f, "{}", v),
        }
    }
}

impl TryFrom<Val> for i32 {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Integer(n) => Ok(n),
            Val::Vector(_) => Err(error!(TypeMismatch; "EXPECTED INTEGER")),
        }
    }
}

impl TryFrom<Val> for DArray {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Vector(v) => Ok(v),
            Val::Integer(_) => Err(error!(TypeMismatch; "EXPECTED VECTOR")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input() {
        assert_eq!(Val::from_input(" -12\n").unwrap(), Val::Integer(-12));
        assert_eq!(
            Val::from_input("<<1, 2>>").unwrap(),
            Val::Vector(DArray::from(vec![1, 2]))
        );
        assert!(Val::from_input("twelve").is_err());
        assert!(Val::from_input("<<1,").is_err());
    }

    #[test]
    fn test_type_mismatch() {
        let e = i32::try_from(Val::Vector(DArray::new())).unwrap_err();
        assert!(e.is(crate::lang::ErrorCode::TypeMismatch));
        let e = DArray::try_from(Val::Integer(1)).unwrap_err();
        assert!(e.is(crate::lang::ErrorCode::TypeMismatch));
    }
}
