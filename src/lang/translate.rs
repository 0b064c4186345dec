use super::{Error, Lexeme, LexemeClass, Scan};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Rebuild textual program lines from a scan.
///
/// Every statement is written back to the line it came from so jump
/// targets keep pointing at the same instructions.
pub fn program_from_lexemes(scan: &Scan) -> std::result::Result<Vec<String>, Vec<Error>> {
    if scan.has_errors() {
        return Err(scan.errors());
    }
    Translator::translate(scan).map_err(|e| vec![e])
}

struct Translator<'a> {
    scan: &'a Scan,
    lexemes: std::iter::Peekable<std::slice::Iter<'a, Lexeme>>,
}

impl<'a> Translator<'a> {
    fn translate(scan: &'a Scan) -> Result<Vec<String>> {
        let lines = scan.lexemes.iter().map(|l| l.line).max().unwrap_or(0);
        let mut program = vec![String::new(); lines];
        let mut this = Translator {
            scan,
            lexemes: scan.lexemes.iter().peekable(),
        };
        while let Some(lexeme) = this.lexemes.next() {
            if lexeme.class == LexemeClass::EndMarker {
                break;
            }
            let text = this.statement(lexeme)?;
            if let Some(line) = program.get_mut(lexeme.line - 1) {
                *line = text;
            }
        }
        while let Some(true) = program.last().map(|s| s.is_empty()) {
            program.pop();
        }
        Ok(program)
    }

    fn statement(&mut self, lexeme: &Lexeme) -> Result<String> {
        use LexemeClass::*;
        let line = Some(lexeme.line);
        match lexeme.class {
            Push => match self.lexemes.next() {
                Some(l) if l.class == Constant => Ok(format!("push {}", l.value)),
                Some(l) if l.class == Variable => Ok(format!("push {}", self.name(l)?)),
                Some(l) if l.class == VectorStart => Ok(format!("push {}", self.vector(l)?)),
                _ => Err(error!(InternalError, line; "PUSH WITHOUT OPERAND")),
            },
            Pop => match self.lexemes.next() {
                Some(l) if l.class == Variable => Ok(format!("pop {}", self.name(l)?)),
                _ => Err(error!(InternalError, line; "POP WITHOUT NAME")),
            },
            Jmp | Ji => match self.lexemes.next() {
                Some(l) if l.class == Constant => Ok(format!(
                    "{} {}",
                    lexeme.class.to_string().to_ascii_lowercase(),
                    l.value
                )),
                _ => Err(error!(InternalError, line; "JUMP WITHOUT LINE")),
            },
            Variable => self.name(lexeme),
            class if class.is_arithmetic() || class.is_relation() => Ok(class.to_string()),
            class if class.is_vector_op() => Ok(class.to_string().to_ascii_lowercase()),
            Read | Write | End => Ok(lexeme.class.to_string().to_ascii_lowercase()),
            _ => Err(error!(InternalError, line; "UNEXPECTED LEXEME")),
        }
    }

    fn name(&self, lexeme: &Lexeme) -> Result<String> {
        match self.scan.names.name(lexeme.value) {
            Some(name) => Ok(name.to_string()),
            None => Err(error!(InternalError, Some(lexeme.line); "NAME NOT IN TABLE")),
        }
    }

    fn vector(&mut self, start: &Lexeme) -> Result<String> {
        let mut elements: Vec<String> = vec![];
        loop {
            match self.lexemes.next() {
                Some(l) if l.class == LexemeClass::Constant => elements.push(l.value.to_string()),
                Some(l) if l.class == LexemeClass::Comma => {}
                Some(l) if l.class == LexemeClass::VectorEnd => break,
                _ => {
                    return Err(
                        error!(InternalError, Some(start.line); "UNTERMINATED VECTOR LITERAL"),
                    )
                }
            }
        }
        if elements.is_empty() {
            Ok("<< >>".to_string())
        } else {
            Ok(format!("<< {} >>", elements.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::lex;

    #[test]
    fn test_statements_keep_their_lines() {
        let scan = lex("; counter\npush 3\n\npop n\njmp 2\n<=\nvconcat\npush <<1,2>>\nend\n");
        let program = program_from_lexemes(&scan).unwrap();
        assert_eq!(
            program,
            vec!["", "push 3", "", "pop n", "jmp 2", "<=", "vconcat", "push << 1, 2 >>", "end"]
        );
    }

    #[test]
    fn test_errors_block_translation() {
        let scan = lex("push 1\npop\nend");
        let errors = program_from_lexemes(&scan).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line_number(), Some(2));
    }
}
