use super::{Address, Opcode};
use crate::error;
use crate::lang::{self, Error, LexemeClass};

type Result<T> = std::result::Result<T, Error>;

/// Compile one program line. Blank lines are `Nop`.
/// Errors carry no line number; `Program` attaches it.
pub fn compile(line: &str) -> Result<Opcode> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Opcode::Nop);
    }
    let (command, operand) = match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], line[pos..].trim()),
        None => (line, ""),
    };
    if let Some(class) = lang::keyword(command) {
        return keyword(class, operand);
    }
    let op = operator(command)?;
    no_operand(operand)?;
    Ok(op)
}

fn keyword(class: LexemeClass, operand: &str) -> Result<Opcode> {
    use LexemeClass::*;
    let op = match class {
        Push => return push(operand),
        Pop => return Ok(Opcode::Pop(identifier(single(operand)?)?.into())),
        Jmp => return Ok(Opcode::Jump(target(single(operand)?)?)),
        Ji => return Ok(Opcode::JumpIf(target(single(operand)?)?)),
        Read => Opcode::Read,
        Write => Opcode::Write,
        End => Opcode::End,
        VAdd => Opcode::VAdd,
        VSub => Opcode::VSub,
        VMul => Opcode::VMul,
        VDiv => Opcode::VDiv,
        VMod => Opcode::VMod,
        VDot => Opcode::VDot,
        VConcat => Opcode::VConcat,
        VLShift => Opcode::VLShift,
        VRShift => Opcode::VRShift,
        _ => return Err(error!(InternalError; "NOT A KEYWORD")),
    };
    no_operand(operand)?;
    Ok(op)
}

fn operator(command: &str) -> Result<Opcode> {
    use LexemeClass::*;
    let mut chars = command.chars();
    let class = match (chars.next(), chars.next(), chars.next()) {
        (Some(ch), None, None) => {
            LexemeClass::from_arithmetic(ch).or_else(|| LexemeClass::from_relation(ch))
        }
        (Some(first), Some(second), None) => LexemeClass::from_relation_pair(first, second),
        _ => None,
    };
    Ok(match class {
        Some(Add) => Opcode::Add,
        Some(Sub) => Opcode::Sub,
        Some(Mul) => Opcode::Mul,
        Some(Div) => Opcode::Div,
        Some(Mod) => Opcode::Mod,
        Some(Equal) => Opcode::Eq,
        Some(NotEqual) => Opcode::NotEq,
        Some(Less) => Opcode::Lt,
        Some(LessEqual) => Opcode::LtEq,
        Some(Greater) => Opcode::Gt,
        Some(GreaterEqual) => Opcode::GtEq,
        _ => return Err(error!(UnknownCommand; format!("'{}'", command))),
    })
}

fn push(operand: &str) -> Result<Opcode> {
    if operand.is_empty() {
        return Err(error!(SyntaxError; "MISSING OPERAND"));
    }
    if operand.starts_with('<') {
        vector(operand)?;
        return Ok(Opcode::PushVector);
    }
    let operand = single(operand)?;
    let first = operand.chars().next().unwrap_or(' ');
    if first == '-' || first.is_ascii_digit() {
        return Ok(Opcode::Literal(integer(operand)?));
    }
    Ok(Opcode::Push(identifier(operand)?.into()))
}

/// Vector operands come from the scanner's vector table, so only
/// literals the scanner tables are accepted: unsigned elements and
/// blanks, commas between elements.
fn vector(operand: &str) -> Result<()> {
    let inner = match operand.strip_prefix("<<").and_then(|s| s.strip_suffix(">>")) {
        Some(inner) => inner,
        None => return Err(error!(SyntaxError; "MALFORMED VECTOR LITERAL")),
    };
    let blank = |c: char| c == ' ' || c == '\t' || c == '\r';
    if inner.trim_matches(blank).is_empty() {
        return Ok(());
    }
    for element in inner.split(',') {
        let digits = element.trim_matches(blank);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(error!(SyntaxError; "VECTOR ELEMENTS MUST BE UNSIGNED NUMBERS"));
        }
        if digits.parse::<i32>().is_err() {
            return Err(error!(SyntaxError; "NUMBER OUT OF RANGE"));
        }
    }
    Ok(())
}

fn no_operand(operand: &str) -> Result<()> {
    if operand.is_empty() {
        Ok(())
    } else {
        Err(error!(SyntaxError; "UNEXPECTED OPERAND"))
    }
}

fn single(operand: &str) -> Result<&str> {
    if operand.is_empty() {
        return Err(error!(SyntaxError; "MISSING OPERAND"));
    }
    if operand.contains(char::is_whitespace) {
        return Err(error!(SyntaxError; "TOO MANY OPERANDS"));
    }
    Ok(operand)
}

fn integer(s: &str) -> Result<i32> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(error!(SyntaxError; "MALFORMED NUMBER"));
    }
    s.parse::<i32>()
        .map_err(|_| error!(SyntaxError; "NUMBER OUT OF RANGE"))
}

/// Names are case-insensitive like keywords.
fn identifier(s: &str) -> Result<String> {
    let mut chars = s.chars();
    let leads_with_letter = chars.next().map_or(false, |c| c.is_ascii_alphabetic());
    if !leads_with_letter || !chars.all(|c| c.is_ascii_alphanumeric()) {
        return Err(error!(SyntaxError; format!("INVALID NAME '{}'", s)));
    }
    if lang::keyword(s).is_some() {
        return Err(error!(SyntaxError; format!("RESERVED WORD '{}'", s)));
    }
    Ok(s.to_ascii_lowercase())
}

/// Source lines are 1-based.
fn target(s: &str) -> Result<Address> {
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(error!(SyntaxError; "MALFORMED LINE NUMBER"));
    }
    match s.parse::<Address>() {
        Ok(0) => Err(error!(UndefinedLine; "LINE 0")),
        Ok(n) => Ok(n - 1),
        Err(_) => Err(error!(UndefinedLine; "LINE NUMBER OUT OF RANGE")),
    }
}
