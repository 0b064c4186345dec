/// ## Lexeme classes
///
/// Discriminants are the class codes printed in lexeme listings.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeClass {
    Equal = 1,
    NotEqual = 2,
    Less = 3,
    Greater = 4,
    LessEqual = 5,
    GreaterEqual = 6,
    Push = 995,
    Pop = 996,
    Jmp = 999,
    Ji = 1000,
    Read = 1001,
    Write = 1002,
    End = 1003,
    Comment = 1004,
    Error = 1005,
    EndMarker = 1006,
    Add = 1007,
    Sub = 1008,
    Mul = 1009,
    Div = 1010,
    Mod = 1011,
    Variable = 1018,
    Constant = 1019,
    VectorStart = 1020,
    Comma = 1021,
    VectorEnd = 1022,
    VAdd = 1023,
    VSub = 1024,
    VMul = 1025,
    VDiv = 1026,
    VMod = 1027,
    VDot = 1028,
    VConcat = 1029,
    VLShift = 1030,
    VRShift = 1031,
}

impl LexemeClass {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn is_arithmetic(self) -> bool {
        use LexemeClass::*;
        matches!(self, Add | Sub | Mul | Div | Mod)
    }

    pub fn is_relation(self) -> bool {
        use LexemeClass::*;
        matches!(
            self,
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual
        )
    }

    pub fn is_vector_op(self) -> bool {
        use LexemeClass::*;
        matches!(
            self,
            VAdd | VSub | VMul | VDiv | VMod | VDot | VConcat | VLShift | VRShift
        )
    }

    pub fn from_arithmetic(ch: char) -> Option<LexemeClass> {
        use LexemeClass::*;
        match ch {
            '+' => Some(Add),
            '-' => Some(Sub),
            '*' => Some(Mul),
            '/' => Some(Div),
            '%' => Some(Mod),
            _ => None,
        }
    }

    /// Single character relation, `!` has no single form.
    pub fn from_relation(ch: char) -> Option<LexemeClass> {
        use LexemeClass::*;
        match ch {
            '=' => Some(Equal),
            '<' => Some(Less),
            '>' => Some(Greater),
            _ => None,
        }
    }

    pub fn from_relation_pair(first: char, second: char) -> Option<LexemeClass> {
        use LexemeClass::*;
        match (first, second) {
            ('=', '=') => Some(Equal),
            ('!', '=') => Some(NotEqual),
            ('<', '=') => Some(LessEqual),
            ('>', '=') => Some(GreaterEqual),
            _ => None,
        }
    }
}

impl std::fmt::Display for LexemeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use LexemeClass::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "!="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
            LessEqual => write!(f, "<="),
            GreaterEqual => write!(f, ">="),
            Push => write!(f, "PUSH"),
            Pop => write!(f, "POP"),
            Jmp => write!(f, "JMP"),
            Ji => write!(f, "JI"),
            Read => write!(f, "READ"),
            Write => write!(f, "WRITE"),
            End => write!(f, "END"),
            Comment => write!(f, "COMMENT"),
            Error => write!(f, "ERROR"),
            EndMarker => write!(f, "END_MARKER"),
            Add => write!(f, "+"),
            Sub => write!(f, "-"),
            Mul => write!(f, "*"),
            Div => write!(f, "/"),
            Mod => write!(f, "%"),
            Variable => write!(f, "VARIABLE"),
            Constant => write!(f, "CONSTANT"),
            VectorStart => write!(f, "<<"),
            Comma => write!(f, ","),
            VectorEnd => write!(f, ">>"),
            VAdd => write!(f, "VADD"),
            VSub => write!(f, "VSUB"),
            VMul => write!(f, "VMUL"),
            VDiv => write!(f, "VDIV"),
            VMod => write!(f, "VMOD"),
            VDot => write!(f, "VDOT"),
            VConcat => write!(f, "VCONCAT"),
            VLShift => write!(f, "VLSHIFT"),
            VRShift => write!(f, "VRSHIFT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub class: LexemeClass,
    pub value: u32,
    pub line: usize,
}

impl Lexeme {
    pub fn new(class: LexemeClass, value: u32, line: usize) -> Lexeme {
        Lexeme { class, value, line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_pairs() {
        assert_eq!(
            LexemeClass::from_relation_pair('!', '='),
            Some(LexemeClass::NotEqual)
        );
        assert_eq!(LexemeClass::from_relation_pair('<', '>'), None);
        assert_eq!(LexemeClass::from_relation('!'), None);
        assert_eq!(LexemeClass::GreaterEqual.code(), 6);
        assert_eq!(LexemeClass::EndMarker.code(), 1006);
    }
}
