use super::keyword::{self, Node};
use super::symbol::{Bracket, Category, Symbol, Transliterator};
use super::{ConstantTable, Error, Lexeme, LexemeClass, NameTable, VectorTable};
use crate::error;
use tracing::{debug, trace, warn};

pub fn lex(s: &str) -> Scan {
    Scanner::new().scan(s)
}

/// ## Scanner output
///
/// The lexeme stream and the three side tables built while producing it.
/// Name and constant indices are only meaningful within one `Scan`.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scan {
    pub lexemes: Vec<Lexeme>,
    pub names: NameTable,
    pub constants: ConstantTable,
    pub vectors: VectorTable,
}

impl Scan {
    pub fn classes(&self) -> Vec<LexemeClass> {
        self.lexemes.iter().map(|l| l.class).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.lexemes.iter().any(|l| l.class == LexemeClass::Error)
    }

    /// One syntax error for every line holding an `ERROR` lexeme.
    pub fn errors(&self) -> Vec<Error> {
        let mut errors: Vec<Error> = vec![];
        let mut last_line = 0;
        for lexeme in &self.lexemes {
            if lexeme.class == LexemeClass::Error && lexeme.line != last_line {
                last_line = lexeme.line;
                errors.push(error!(SyntaxError, Some(lexeme.line)));
            }
        }
        errors
    }

    /// Human readable value of a lexeme for listings.
    pub fn describe(&self, lexeme: &Lexeme) -> String {
        match lexeme.class {
            LexemeClass::Variable => match self.names.name(lexeme.value) {
                Some(name) => name.to_string(),
                None => lexeme.value.to_string(),
            },
            LexemeClass::Constant => lexeme.value.to_string(),
            class => class.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Word,
    PushOperand,
    JumpOperand,
    PopOperand,
    Number,
    Name,
    Relation,
    VectorOpen,
    VectorDigits,
    VectorElement,
    Done,
    Comment,
    Trap,
    Stop,
}

/// ## Scanner context
///
/// Every register the state machine needs between two characters.

struct Scanner {
    state: State,
    word: String,
    trie: Option<Node>,
    number: u32,
    overflow: bool,
    relation: char,
    line: usize,
    constant_flag: bool,
    vector: Vec<u32>,
    scan: Scan,
}

impl Scanner {
    fn new() -> Scanner {
        Scanner {
            state: State::Start,
            word: String::new(),
            trie: None,
            number: 0,
            overflow: false,
            relation: '\0',
            line: 1,
            constant_flag: false,
            vector: vec![],
            scan: Scan::default(),
        }
    }

    fn scan(mut self, s: &str) -> Scan {
        for symbol in Transliterator::new(s) {
            self.state = self.step(symbol);
            if self.state == State::Stop {
                break;
            }
        }
        debug!(
            "scanned {} lexemes, {} names, {} constants, {} vectors",
            self.scan.lexemes.len(),
            self.scan.names.len(),
            self.scan.constants.len(),
            self.scan.vectors.len()
        );
        self.scan
    }

    fn step(&mut self, sym: Symbol) -> State {
        use Category::*;
        use State::*;
        match (self.state, sym.category) {
            (Start, Space) => Start,
            (Start, Newline) => self.newline(),
            (Start, Semicolon) => Comment,
            (Start, EndOfFile) => self.end_of_file(),
            (Start, Letter) => self.begin_word(sym),
            (Start, Arithmetic) => self.arithmetic(sym),
            (Start, Comparison) => {
                self.relation = sym.ch;
                Relation
            }

            (Word, Letter) | (Word, Digit) => self.extend_word(sym),
            (Word, Space) => self.end_word(),
            (Word, Newline) | (Word, Semicolon) | (Word, EndOfFile) => match self.end_word() {
                Done => self.done(sym),
                _ => self.error(sym),
            },

            (PushOperand, Space) => PushOperand,
            (PushOperand, Letter) => self.begin_name(sym),
            (PushOperand, Digit) => self.begin_number(sym),
            (PushOperand, Vector) if sym.bracket == Some(Bracket::Open) => {
                self.emit(LexemeClass::VectorStart, LexemeClass::VectorStart.code());
                self.vector.clear();
                VectorOpen
            }

            (JumpOperand, Space) => JumpOperand,
            (JumpOperand, Digit) => self.begin_number(sym),

            (PopOperand, Space) => PopOperand,
            (PopOperand, Letter) => self.begin_name(sym),

            (Number, Digit) => self.extend_number(sym),
            (Number, Space) | (Number, Newline) | (Number, Semicolon) | (Number, EndOfFile) => {
                if self.end_number() {
                    self.done(sym)
                } else {
                    self.error(sym)
                }
            }

            (Name, Letter) | (Name, Digit) => {
                self.word.push(sym.ch);
                Name
            }
            (Name, Space) | (Name, Newline) | (Name, Semicolon) | (Name, EndOfFile) => {
                if self.end_name() {
                    self.done(sym)
                } else {
                    self.error(sym)
                }
            }

            (Relation, Comparison) => {
                match LexemeClass::from_relation_pair(self.relation, sym.ch) {
                    Some(class) => {
                        self.emit(class, class.code());
                        Done
                    }
                    None => self.error(sym),
                }
            }
            (Relation, Space) | (Relation, Newline) | (Relation, Semicolon) | (Relation, EndOfFile) => {
                match LexemeClass::from_relation(self.relation) {
                    Some(class) => {
                        self.emit(class, class.code());
                        self.done(sym)
                    }
                    None => self.error(sym),
                }
            }

            (VectorOpen, Space) => VectorOpen,
            (VectorOpen, Digit) => {
                self.begin_number(sym);
                VectorDigits
            }
            (VectorOpen, Vector) if sym.bracket == Some(Bracket::Close) && self.vector.is_empty() => {
                self.close_vector()
            }

            (VectorDigits, Digit) => {
                self.extend_number(sym);
                VectorDigits
            }
            (VectorDigits, Space) => {
                if self.end_element() {
                    VectorElement
                } else {
                    self.error(sym)
                }
            }
            (VectorDigits, Comma) => {
                if self.end_element() {
                    self.comma()
                } else {
                    self.error(sym)
                }
            }
            (VectorDigits, Vector) if sym.bracket == Some(Bracket::Close) => {
                if self.end_element() {
                    self.close_vector()
                } else {
                    self.error(sym)
                }
            }

            (VectorElement, Space) => VectorElement,
            (VectorElement, Comma) => self.comma(),
            (VectorElement, Vector) if sym.bracket == Some(Bracket::Close) => self.close_vector(),

            (Done, _) => self.done(sym),

            (Comment, Newline) => {
                self.emit(LexemeClass::Comment, 0);
                self.newline()
            }
            (Comment, EndOfFile) => {
                self.emit(LexemeClass::Comment, 0);
                self.end_of_file()
            }
            (Comment, _) => Comment,

            (Trap, Newline) => self.newline(),
            (Trap, EndOfFile) => self.end_of_file(),
            (Trap, _) => Trap,

            (Stop, _) => Stop,

            _ => self.error(sym),
        }
    }

    /// A statement is complete; only layout may follow.
    fn done(&mut self, sym: Symbol) -> State {
        match sym.category {
            Category::Space => State::Done,
            Category::Newline => self.newline(),
            Category::Semicolon => State::Comment,
            Category::EndOfFile => self.end_of_file(),
            _ => self.error(sym),
        }
    }

    fn error(&mut self, sym: Symbol) -> State {
        warn!("syntax error in line {} at {:?}", self.line, sym.ch);
        self.emit(LexemeClass::Error, 0);
        match sym.category {
            Category::Newline => self.newline(),
            Category::EndOfFile => self.end_of_file(),
            _ => State::Trap,
        }
    }

    fn newline(&mut self) -> State {
        self.line += 1;
        State::Start
    }

    fn end_of_file(&mut self) -> State {
        self.emit(LexemeClass::EndMarker, 0);
        State::Stop
    }

    fn emit(&mut self, class: LexemeClass, value: u32) {
        if class == LexemeClass::Comment {
            return;
        }
        trace!("lexeme {} {} in line {}", class, value, self.line);
        self.scan.lexemes.push(Lexeme::new(class, value, self.line));
    }

    fn arithmetic(&mut self, sym: Symbol) -> State {
        match LexemeClass::from_arithmetic(sym.ch) {
            Some(class) => {
                self.emit(class, sym.ch as u32);
                State::Done
            }
            None => self.error(sym),
        }
    }

    fn begin_word(&mut self, sym: Symbol) -> State {
        self.word.clear();
        self.word.push(sym.ch);
        self.trie = keyword::step(keyword::ROOT, sym.ch);
        State::Word
    }

    fn extend_word(&mut self, sym: Symbol) -> State {
        self.word.push(sym.ch);
        self.trie = self.trie.and_then(|node| keyword::step(node, sym.ch));
        State::Word
    }

    /// Emits the keyword or identifier and picks the operand state.
    fn end_word(&mut self) -> State {
        use LexemeClass::*;
        match self.trie.take().and_then(keyword::keyword) {
            Some(class) => {
                self.emit(class, class.code());
                match class {
                    Push => {
                        self.constant_flag = true;
                        State::PushOperand
                    }
                    Ji | Jmp => {
                        self.constant_flag = false;
                        State::JumpOperand
                    }
                    Pop => State::PopOperand,
                    _ => State::Done,
                }
            }
            None => {
                let index = self.scan.names.intern(&self.word);
                self.emit(Variable, index);
                State::Done
            }
        }
    }

    fn begin_name(&mut self, sym: Symbol) -> State {
        self.word.clear();
        self.word.push(sym.ch);
        State::Name
    }

    fn end_name(&mut self) -> bool {
        if keyword::lookup(&self.word).is_some() {
            warn!("reserved word {:?} used as a name in line {}", self.word, self.line);
            return false;
        }
        let index = self.scan.names.intern(&self.word);
        self.emit(LexemeClass::Variable, index);
        true
    }

    fn begin_number(&mut self, sym: Symbol) -> State {
        self.number = sym.digit();
        self.overflow = false;
        State::Number
    }

    fn extend_number(&mut self, sym: Symbol) -> State {
        match self
            .number
            .checked_mul(10)
            .and_then(|n| n.checked_add(sym.digit()))
        {
            Some(n) => self.number = n,
            None => self.overflow = true,
        }
        State::Number
    }

    fn end_number(&mut self) -> bool {
        if self.overflow {
            return false;
        }
        if self.constant_flag {
            self.scan.constants.insert(self.number);
        }
        self.emit(LexemeClass::Constant, self.number);
        true
    }

    fn end_element(&mut self) -> bool {
        if !self.end_number() {
            return false;
        }
        self.vector.push(self.number);
        true
    }

    fn comma(&mut self) -> State {
        self.emit(LexemeClass::Comma, LexemeClass::Comma.code());
        State::VectorOpen
    }

    fn close_vector(&mut self) -> State {
        self.emit(LexemeClass::VectorEnd, LexemeClass::VectorEnd.code());
        let vector = std::mem::take(&mut self.vector);
        self.scan.vectors.push(vector);
        State::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LexemeClass::*;

    #[test]
    fn test_push_write_end() {
        let scan = lex("push 5\nwrite\nend\n");
        assert_eq!(scan.classes(), vec![Push, Constant, Write, End, EndMarker]);
        assert_eq!(scan.lexemes[1].value, 5);
        assert_eq!(scan.constants.iter().collect::<Vec<_>>(), vec![5]);
        assert_eq!(scan.lexemes[3].line, 3);
    }

    #[test]
    fn test_jump_targets_are_not_pooled() {
        let scan = lex("push 7\njmp 1\nji 4");
        assert_eq!(
            scan.classes(),
            vec![Push, Constant, Jmp, Constant, Ji, Constant, EndMarker]
        );
        assert_eq!(scan.constants.len(), 1);
        assert!(!scan.constants.contains(1));
        assert_eq!(scan.lexemes[3].value, 1);
    }

    #[test]
    fn test_unknown_word_is_identifier() {
        let scan = lex("pushy\n");
        assert_eq!(scan.classes(), vec![Variable, EndMarker]);
        assert_eq!(scan.names.index_of("pushy"), Some(0));
    }

    #[test]
    fn test_missing_operand_resumes_next_line() {
        let scan = lex("push\nwrite");
        assert_eq!(scan.classes(), vec![Push, Error, Write, EndMarker]);
        assert_eq!(scan.lexemes[1].line, 1);
        assert_eq!(scan.lexemes[2].line, 2);
    }

    #[test]
    fn test_vadd_prefix_family() {
        let scan = lex("vadd\nvrshift\nVDOT\nvconcat");
        assert_eq!(scan.classes(), vec![VAdd, VRShift, VDot, VConcat, EndMarker]);
        assert_eq!(scan.lexemes[0].value, VAdd.code());
    }

    #[test]
    fn test_trailing_carriage_return() {
        let scan = lex("end\r\n");
        assert_eq!(scan.classes(), vec![End, EndMarker]);
    }

    #[test]
    fn test_number_overflow() {
        let scan = lex("push 99999999999\nend");
        assert_eq!(scan.classes(), vec![Push, Error, End, EndMarker]);
    }
}
