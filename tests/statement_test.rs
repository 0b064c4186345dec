mod common;
use common::*;
use vstack::mach::Val;

#[test]
fn test_sum_leaves_stack_empty() {
    let mut r = runtime("push 3\npush 4\n+\nwrite\nend\n");
    assert_eq!(exec(&mut r), "7\n");
    assert!(r.stack().is_empty());
}

#[test]
fn test_operands_pop_right_hand_first() {
    assert_eq!(run("push 9\npush 2\n-\nwrite"), "7\n");
    assert_eq!(run("push 9\npush 2\n/\nwrite"), "4\n");
    assert_eq!(run("push 9\npush 2\n%\nwrite"), "1\n");
    assert_eq!(run("push 2\npush 9\n<\nwrite"), "1\n");
    assert_eq!(run("push 2\npush 9\n>=\nwrite"), "0\n");
}

#[test]
fn test_comparisons() {
    assert_eq!(run("push 4\npush 4\n=\nwrite"), "1\n");
    assert_eq!(run("push 4\npush 4\n==\nwrite"), "1\n");
    assert_eq!(run("push 4\npush 4\n!=\nwrite"), "0\n");
    assert_eq!(run("push 4\npush 5\n<=\nwrite"), "1\n");
    assert_eq!(run("push 4\npush 5\n>\nwrite"), "0\n");
}

#[test]
fn test_negative_literal() {
    assert_eq!(run("push -3\npush 5\n*\nwrite"), "-15\n");
}

#[test]
fn test_undefined_variable() {
    let mut r = runtime("push 1\nwrite\npush x\nwrite\n");
    assert_eq!(exec(&mut r), "1\nVARIABLE NOT FOUND IN 3; 'x'\n");
}

#[test]
fn test_division_by_zero_before_output() {
    assert_eq!(
        run("push 1\npush 0\n/\nwrite\n"),
        "DIVISION BY ZERO IN 3\n"
    );
    assert_eq!(
        run("push 1\npush 0\n%\nwrite\n"),
        "DIVISION BY ZERO IN 3\n"
    );
}

#[test]
fn test_variables() {
    let mut r = runtime("push 10\npop Count\npush count\npush COUNT\n*\nwrite\n");
    assert_eq!(exec(&mut r), "100\n");
    assert_eq!(r.vars().get("count"), Some(&Val::Integer(10)));
    assert_eq!(r.vars().to_string(), "count = 10\n");
}

#[test]
fn test_countdown_loop() {
    let program = "
push 3          ; line 2
pop n
push n
write
push n
push 1
-
pop n
push n
ji 4
end
";
    assert_eq!(run(program), "3\n2\n1\n");
}

#[test]
fn test_ji_falls_through() {
    assert_eq!(run("push 0\nji 4\npush 1\npush 2\nwrite"), "2\n");
    assert_eq!(run("push -1\nji 4\npush 1\nwrite"), "1\n");
}

#[test]
fn test_jump_past_end_stops() {
    let mut r = runtime("push 1\njmp 99\nwrite\n");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.stack().len(), 1);
}

#[test]
fn test_end_stops_early() {
    let mut r = runtime("push 1\nend\nwrite\n");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.stack().last(), Some(&Val::Integer(1)));
}

#[test]
fn test_infinite_loop_keeps_running() {
    let mut r = runtime("push 1\npop a\npush a\npop a\njmp 1\n");
    assert_eq!(exec_n(&mut r, 1000), "\n1000 Execution cycles exceeded.\n");
}

#[test]
fn test_stack_underflow() {
    assert_eq!(run("write\n"), "STACK UNDERFLOW IN 1; STACK IS EMPTY\n");
    assert_eq!(run("push 1\n+\n"), "STACK UNDERFLOW IN 2; STACK IS EMPTY\n");
    assert_eq!(run("pop a\n"), "STACK UNDERFLOW IN 1; STACK IS EMPTY\n");
}

#[test]
fn test_runtime_error_keeps_state() {
    let mut r = runtime("push 5\npop a\npush 1\npush <<1>>\n+\n");
    assert_eq!(exec(&mut r), "TYPE MISMATCH IN 5; EXPECTED INTEGER\n");
    assert_eq!(r.vars().get("a"), Some(&Val::Integer(5)));
}

#[test]
fn test_ji_type_mismatch() {
    assert_eq!(
        run("push <<1>>\nji 1\n"),
        "TYPE MISMATCH IN 2; EXPECTED INTEGER\n"
    );
}

#[test]
fn test_compile_errors_reported_together() {
    let mut r = runtime("push 1\nprint\njmp 0\nwrite\npush 1 2\n");
    assert_eq!(
        exec(&mut r),
        "UNKNOWN COMMAND IN 2; 'print'\n\
         UNDEFINED LINE IN 3; LINE 0\n\
         SYNTAX ERROR IN 5; TOO MANY OPERANDS\n"
    );
    assert!(r.stack().is_empty());
}

#[test]
fn test_stopped_repeats() {
    let mut r = runtime("end");
    assert_eq!(exec(&mut r), "");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_stack_overflow() {
    let mut r = runtime("push 1\njmp 1\n");
    assert_eq!(
        exec_n(&mut r, 200_000),
        "OUT OF MEMORY IN 1; STACK OVERFLOW\n"
    );
    assert_eq!(r.stack().len(), 65536);
}

#[test]
fn test_wrapping_arithmetic() {
    assert_eq!(run("push 2147483647\npush 1\n+\nwrite"), "-2147483648\n");
}
