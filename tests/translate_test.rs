mod common;
use common::*;
use vstack::lang::{lex, program_from_lexemes, program_lines};
use vstack::mach::Runtime;

const COUNTDOWN: &str = "; count down from three
push 3
pop N

Push n
write
push n
push 1
-
pop n
push n
JI 5      ; back to the push
push << 4, 5 >>
vdot ; only one vector here
end
";

#[test]
fn test_rebuilt_lines() {
    let scan = lex(COUNTDOWN);
    let lines = program_from_lexemes(&scan).unwrap();
    assert_eq!(lines.len(), program_lines(COUNTDOWN).len());
    assert_eq!(lines[1], "push 3");
    assert_eq!(lines[2], "pop n");
    assert_eq!(lines[11], "ji 5");
    assert_eq!(lines[12], "push << 4, 5 >>");
}

#[test]
fn test_both_modes_agree() {
    let scan = lex(COUNTDOWN);
    let lines = program_from_lexemes(&scan).unwrap();
    let mut from_lexemes = Runtime::new(&lines, scan.vectors.clone());
    let mut from_text = runtime(COUNTDOWN);
    let expected = "3\n2\n1\nSTACK UNDERFLOW IN 14; STACK IS EMPTY\n";
    assert_eq!(exec(&mut from_text), expected);
    assert_eq!(exec(&mut from_lexemes), expected);
}

#[test]
fn test_scan_errors_block_rebuild() {
    let scan = lex("push 1\npush\nwrite\npop 3\n");
    let errors: Vec<String> = program_from_lexemes(&scan)
        .unwrap_err()
        .iter()
        .map(|e| e.to_string())
        .collect();
    assert_eq!(errors, vec!["SYNTAX ERROR IN 2", "SYNTAX ERROR IN 4"]);
}
