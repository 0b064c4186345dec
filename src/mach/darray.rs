use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::iter::Peekable;
use std::ops::{BitAnd, BitAndAssign, Shl, ShlAssign, Shr, ShrAssign};
use std::str::Chars;

type Result<T> = std::result::Result<T, Error>;

/// ## Integer vector
///
/// Elementwise operators only accept operands of equal length and
/// report `SIZE MISMATCH` otherwise. Element arithmetic wraps like
/// native machine integers.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DArray {
    vec: Vec<i32>,
}

impl DArray {
    pub fn new() -> DArray {
        DArray::default()
    }

    pub fn push(&mut self, value: i32) {
        self.vec.push(value)
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.vec
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.vec.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, i32> {
        self.vec.iter_mut()
    }

    pub fn at(&self, index: usize) -> Result<&i32> {
        self.vec.get(index).ok_or_else(|| error!(IndexOutOfRange))
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut i32> {
        self.vec.get_mut(index).ok_or_else(|| error!(IndexOutOfRange))
    }

    fn check_size(&self, rhs: &DArray) -> Result<()> {
        if self.len() != rhs.len() {
            return Err(error!(SizeMismatch; format!(
                "LENGTHS {} AND {}",
                self.len(),
                rhs.len()
            )));
        }
        Ok(())
    }

    fn check_divisor(rhs: &DArray) -> Result<()> {
        if rhs.iter().any(|v| *v == 0) {
            return Err(error!(DivisionByZero; "ZERO ELEMENT IN DIVISOR"));
        }
        Ok(())
    }

    fn apply(&self, rhs: &DArray, op: fn(i32, i32) -> i32) -> Result<DArray> {
        self.check_size(rhs)?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .map(|(l, r)| op(*l, *r))
            .collect())
    }

    fn apply_assign(&mut self, rhs: &DArray, op: fn(i32, i32) -> i32) -> Result<()> {
        self.check_size(rhs)?;
        for (l, r) in self.vec.iter_mut().zip(rhs.iter()) {
            *l = op(*l, *r);
        }
        Ok(())
    }

    pub fn try_add(&self, rhs: &DArray) -> Result<DArray> {
        self.apply(rhs, i32::wrapping_add)
    }

    pub fn try_sub(&self, rhs: &DArray) -> Result<DArray> {
        self.apply(rhs, i32::wrapping_sub)
    }

    pub fn try_mul(&self, rhs: &DArray) -> Result<DArray> {
        self.apply(rhs, i32::wrapping_mul)
    }

    pub fn try_div(&self, rhs: &DArray) -> Result<DArray> {
        self.check_size(rhs)?;
        DArray::check_divisor(rhs)?;
        self.apply(rhs, i32::wrapping_div)
    }

    pub fn try_rem(&self, rhs: &DArray) -> Result<DArray> {
        self.check_size(rhs)?;
        DArray::check_divisor(rhs)?;
        self.apply(rhs, i32::wrapping_rem)
    }

    pub fn try_add_assign(&mut self, rhs: &DArray) -> Result<()> {
        self.apply_assign(rhs, i32::wrapping_add)
    }

    pub fn try_sub_assign(&mut self, rhs: &DArray) -> Result<()> {
        self.apply_assign(rhs, i32::wrapping_sub)
    }

    pub fn try_mul_assign(&mut self, rhs: &DArray) -> Result<()> {
        self.apply_assign(rhs, i32::wrapping_mul)
    }

    pub fn try_div_assign(&mut self, rhs: &DArray) -> Result<()> {
        self.check_size(rhs)?;
        DArray::check_divisor(rhs)?;
        self.apply_assign(rhs, i32::wrapping_div)
    }

    pub fn try_rem_assign(&mut self, rhs: &DArray) -> Result<()> {
        self.check_size(rhs)?;
        DArray::check_divisor(rhs)?;
        self.apply_assign(rhs, i32::wrapping_rem)
    }

    pub fn dot(&self, rhs: &DArray) -> Result<i32> {
        self.check_size(rhs)?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .fold(0i32, |sum, (l, r)| sum.wrapping_add(l.wrapping_mul(*r))))
    }
}

impl From<Vec<i32>> for DArray {
    fn from(vec: Vec<i32>) -> Self {
        DArray { vec }
    }
}

/// Vector table entries are unsigned. Elements past `i32::MAX` have no
/// signed counterpart and are refused.
impl TryFrom<&[u32]> for DArray {
    type Error = Error;

    fn try_from(values: &[u32]) -> Result<Self> {
        values
            .iter()
            .map(|v| i32::try_from(*v).map_err(|_| error!(FormatError; "ELEMENT OUT OF RANGE")))
            .collect::<Result<Vec<i32>>>()
            .map(DArray::from)
    }
}

impl TryFrom<Vec<u32>> for DArray {
    type Error = Error;

    fn try_from(values: Vec<u32>) -> Result<Self> {
        DArray::try_from(values.as_slice())
    }
}

impl std::iter::FromIterator<i32> for DArray {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        DArray {
            vec: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DArray {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}

impl BitAnd<&DArray> for &DArray {
    type Output = DArray;

    fn bitand(self, rhs: &DArray) -> DArray {
        self.iter().chain(rhs.iter()).copied().collect()
    }
}

impl BitAndAssign<&DArray> for DArray {
    fn bitand_assign(&mut self, rhs: &DArray) {
        self.vec.extend_from_slice(&rhs.vec)
    }
}

impl ShlAssign<usize> for DArray {
    fn shl_assign(&mut self, shift: usize) {
        let len = self.len();
        if shift >= len {
            self.vec.iter_mut().for_each(|v| *v = 0);
            return;
        }
        self.vec.rotate_left(shift);
        self.vec[len - shift..].iter_mut().for_each(|v| *v = 0);
    }
}

impl ShrAssign<usize> for DArray {
    fn shr_assign(&mut self, shift: usize) {
        let len = self.len();
        if shift >= len {
            self.vec.iter_mut().for_each(|v| *v = 0);
            return;
        }
        self.vec.rotate_right(shift);
        self.vec[..shift].iter_mut().for_each(|v| *v = 0);
    }
}

impl Shl<usize> for &DArray {
    type Output = DArray;

    fn shl(self, shift: usize) -> DArray {
        let mut result = self.clone();
        result <<= shift;
        result
    }
}

impl Shr<usize> for &DArray {
    type Output = DArray;

    fn shr(self, shift: usize) -> DArray {
        let mut result = self.clone();
        result >>= shift;
        result
    }
}

impl std::fmt::Display for DArray {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "<< >>");
        }
        let s: Vec<String> = self.iter().map(|v| v.to_string()).collect();
        write!(f, "<< {} >>", s.join(", "))
    }
}

impl std::str::FromStr for DArray {
    type Err = Error;

    fn from_str(s: &str) -> Result<DArray> {
        Reader::read(s)
    }
}

struct Reader<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Reader<'a> {
    fn read(s: &'a str) -> Result<DArray> {
        let mut this = Reader {
            chars: s.chars().peekable(),
        };
        this.skip_whitespace();
        if !(this.accept('<') && this.accept('<')) {
            return Err(error!(FormatError; "EXPECTED '<<'"));
        }
        let mut arr = DArray::new();
        this.skip_whitespace();
        if this.chars.peek() != Some(&'>') {
            loop {
                this.skip_whitespace();
                arr.push(this.number()?);
                this.skip_whitespace();
                match this.chars.peek() {
                    Some(',') => {
                        this.chars.next();
                    }
                    Some('>') => break,
                    Some(_) => return Err(error!(FormatError; "EXPECTED ',' BETWEEN VALUES")),
                    None => return Err(error!(FormatError; "EXPECTED '>>'")),
                }
            }
        }
        if !(this.accept('>') && this.accept('>')) {
            return Err(error!(FormatError; "EXPECTED '>>'"));
        }
        this.skip_whitespace();
        if this.chars.peek().is_some() {
            return Err(error!(FormatError; "UNEXPECTED TEXT AFTER '>>'"));
        }
        Ok(arr)
    }

    fn accept(&mut self, ch: char) -> bool {
        if self.chars.peek() == Some(&ch) {
            self.chars.next();
            return true;
        }
        false
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }

    fn number(&mut self) -> Result<i32> {
        let mut s = String::new();
        if let Some(sign) = self.chars.peek() {
            if *sign == '-' || *sign == '+' {
                s.push(*sign);
                self.chars.next();
            }
        }
        while let Some(ch) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            s.push(*ch);
            self.chars.next();
        }
        s.parse::<i32>()
            .map_err(|_| error!(FormatError; "EXPECTED A NUMERIC VALUE"))
    }
}
