use std::iter::Peekable;
use std::str::Chars;

/// ## Character categories
///
/// Every input character is reduced to one of these before it reaches the
/// state machine. Two-character vector brackets arrive as a single symbol.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Letter,
    Digit,
    Arithmetic,
    Comparison,
    Space,
    Newline,
    Semicolon,
    Vector,
    Comma,
    Other,
    EndOfFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub category: Category,
    pub ch: char,
    pub bracket: Option<Bracket>,
}

impl Symbol {
    fn new(category: Category, ch: char) -> Symbol {
        Symbol {
            category,
            ch,
            bracket: None,
        }
    }

    fn bracket(bracket: Bracket) -> Symbol {
        let ch = match bracket {
            Bracket::Open => '<',
            Bracket::Close => '>',
        };
        Symbol {
            category: Category::Vector,
            ch,
            bracket: Some(bracket),
        }
    }

    fn end_of_file() -> Symbol {
        Symbol::new(Category::EndOfFile, '\0')
    }

    /// Numeric value of a digit symbol.
    pub fn digit(&self) -> u32 {
        self.ch.to_digit(10).unwrap_or(0)
    }
}

pub struct Transliterator<'a> {
    chars: Peekable<Chars<'a>>,
    in_comment: bool,
    finished: bool,
}

impl<'a> Transliterator<'a> {
    pub fn new(s: &'a str) -> Transliterator<'a> {
        Transliterator {
            chars: s.chars().peekable(),
            in_comment: false,
            finished: false,
        }
    }

    fn classify(&mut self, ch: char) -> Symbol {
        if ch == ';' {
            self.in_comment = true;
            return Symbol::new(Category::Semicolon, ch);
        }
        if ch == '\n' {
            self.in_comment = false;
            return Symbol::new(Category::Newline, ch);
        }
        if self.in_comment {
            return Symbol::new(Category::Semicolon, ch);
        }
        match ch {
            c if c.is_ascii_alphabetic() => Symbol::new(Category::Letter, c.to_ascii_lowercase()),
            c if c.is_ascii_digit() => Symbol::new(Category::Digit, c),
            '+' | '-' | '*' | '/' | '%' => Symbol::new(Category::Arithmetic, ch),
            '<' if self.chars.peek() == Some(&'<') => {
                self.chars.next();
                Symbol::bracket(Bracket::Open)
            }
            '>' if self.chars.peek() == Some(&'>') => {
                self.chars.next();
                Symbol::bracket(Bracket::Close)
            }
            '=' | '!' | '<' | '>' => Symbol::new(Category::Comparison, ch),
            ',' => Symbol::new(Category::Comma, ch),
            ' ' | '\t' | '\r' => Symbol::new(Category::Space, ch),
            _ => Symbol::new(Category::Other, ch),
        }
    }
}

impl<'a> Iterator for Transliterator<'a> {
    type Item = Symbol;

    /// Yields exactly one `EndOfFile` symbol after the input runs out.
    fn next(&mut self) -> Option<Symbol> {
        match self.chars.next() {
            Some(ch) => Some(self.classify(ch)),
            None if self.finished => None,
            None => {
                self.finished = true;
                Some(Symbol::end_of_file())
            }
        }
    }
}
