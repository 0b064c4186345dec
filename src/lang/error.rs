use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    /// Errors raised deep inside an operation carry no line; the
    /// runtime attaches one on the way out. An existing line wins.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    SyntaxError = 2,
    UnknownCommand = 3,
    StackUnderflow = 4,
    OutOfMemory = 7,
    UndefinedLine = 8,
    IndexOutOfRange = 9,
    DivisionByZero = 11,
    TypeMismatch = 13,
    VariableNotFound = 18,
    SizeMismatch = 24,
    FormatError = 25,
    VectorNotFound = 27,
    InvalidShift = 28,
    Break = 31,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            3 => "UNKNOWN COMMAND",
            4 => "STACK UNDERFLOW",
            7 => "OUT OF MEMORY",
            8 => "UNDEFINED LINE",
            9 => "INDEX OUT OF RANGE",
            11 => "DIVISION BY ZERO",
            13 => "TYPE MISMATCH",
            18 => "VARIABLE NOT FOUND",
            24 => "SIZE MISMATCH",
            25 => "FORMAT ERROR",
            27 => "VECTOR NOT FOUND",
            28 => "INVALID SHIFT",
            31 => "BREAK",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}", self.code)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}", self.code, suffix)
            }
        } else if suffix.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{} IN{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = error!(DivisionByZero, Some(3); "RIGHT OPERAND IS ZERO");
        assert_eq!(e.to_string(), "DIVISION BY ZERO IN 3; RIGHT OPERAND IS ZERO");
        assert_eq!(error!(StackUnderflow).to_string(), "STACK UNDERFLOW");
        assert_eq!(error!(TypeMismatch, Some(7)).to_string(), "TYPE MISMATCH IN 7");
    }

    #[test]
    fn test_first_line_number_wins() {
        let e = error!(SizeMismatch, Some(2)).in_line_number(Some(9));
        assert_eq!(e.line_number(), Some(2));
        assert!(e.is(ErrorCode::SizeMismatch));
    }
}
