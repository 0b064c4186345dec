mod common;
use common::*;
use vstack::mach::{DArray, Val};

fn arr(v: &[i32]) -> DArray {
    v.iter().copied().collect()
}

#[test]
fn test_vconcat() {
    assert_eq!(
        run("push <<1,2>>\npush <<3>>\nvconcat\nwrite\n"),
        "<< 1, 2, 3 >>\n"
    );
}

#[test]
fn test_vdot() {
    assert_eq!(run("push <<1,2>>\npush <<3,4>>\nvdot\nwrite\n"), "11\n");
}

#[test]
fn test_elementwise() {
    let program = |op: &str| format!("push <<10, 20>>\npush <<3, 4>>\n{}\nwrite\n", op);
    assert_eq!(run(&program("vadd")), "<< 13, 24 >>\n");
    assert_eq!(run(&program("vsub")), "<< 7, 16 >>\n");
    assert_eq!(run(&program("vmul")), "<< 30, 80 >>\n");
    assert_eq!(run(&program("vdiv")), "<< 3, 5 >>\n");
    assert_eq!(run(&program("vmod")), "<< 1, 0 >>\n");
}

#[test]
fn test_size_mismatch() {
    assert_eq!(
        run("push <<1,2>>\npush <<3>>\nvadd\n"),
        "SIZE MISMATCH IN 3; LENGTHS 2 AND 1\n"
    );
    assert_eq!(
        run("push <<1,2>>\npush <<3>>\nvdot\n"),
        "SIZE MISMATCH IN 3; LENGTHS 2 AND 1\n"
    );
}

#[test]
fn test_zero_element_divisor() {
    assert_eq!(
        run("push <<1,2>>\npush <<3,0>>\nvdiv\n"),
        "DIVISION BY ZERO IN 3; ZERO ELEMENT IN DIVISOR\n"
    );
}

#[test]
fn test_shifts() {
    assert_eq!(
        run("push <<1,2,3,4>>\npush 1\nvlshift\nwrite\n"),
        "<< 2, 3, 4, 0 >>\n"
    );
    assert_eq!(
        run("push <<1,2,3,4>>\npush 2\nvrshift\nwrite\n"),
        "<< 0, 0, 1, 2 >>\n"
    );
    assert_eq!(
        run("push <<1,2>>\npush 5\nvrshift\nwrite\n"),
        "<< 0, 0 >>\n"
    );
    assert_eq!(
        run("push <<1,2>>\npush 0\npush 1\n-\nvlshift\n"),
        "INVALID SHIFT IN 5; NEGATIVE SHIFT\n"
    );
}

#[test]
fn test_vector_ops_need_vectors() {
    assert_eq!(
        run("push 1\npush <<1>>\nvadd\n"),
        "TYPE MISMATCH IN 3; EXPECTED VECTOR\n"
    );
    assert_eq!(
        run("push 1\npush 2\nvconcat\n"),
        "TYPE MISMATCH IN 3; EXPECTED VECTOR\n"
    );
}

#[test]
fn test_empty_vector() {
    let mut r = runtime("push << >>\npush <<>>\nvconcat\npop e\n");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.vars().get("e"), Some(&Val::Vector(DArray::new())));
    assert_eq!(r.vars().to_string(), "e = << >>\n");
}

#[test]
fn test_vector_stored_in_variable() {
    let program = "push <<1,1>>\npop v\npush v\npush v\nvadd\nwrite\n";
    assert_eq!(run(program), "<< 2, 2 >>\n");
}

#[test]
fn test_format_round_trip() {
    for v in [arr(&[]), arr(&[0]), arr(&[-5, 6, i32::MAX, i32::MIN])].iter() {
        assert_eq!(v.to_string().parse::<DArray>().unwrap(), *v);
    }
}

#[test]
fn test_arithmetic_properties() {
    let a = arr(&[3, -7, 100, 0]);
    let b = arr(&[-2, 5, 9, 1]);
    assert_eq!(a.try_add(&b).unwrap().try_sub(&b).unwrap(), a);
    assert_eq!(a.try_mul(&b).unwrap().try_div(&b).unwrap(), a);
    assert_eq!(a.dot(&b).unwrap(), -6 - 35 + 900);
    assert_eq!(&(&a & &b) << a.len(), arr(&[-2, 5, 9, 1, 0, 0, 0, 0]));
    assert_eq!(&a >> a.len(), arr(&[0, 0, 0, 0]));
}

#[test]
fn test_signed_vector_literal() {
    assert_eq!(
        run("push <<-1>>\nwrite\npush <<5>>\nwrite\n"),
        "SYNTAX ERROR IN 1; VECTOR ELEMENTS MUST BE UNSIGNED NUMBERS\n"
    );
    assert_eq!(
        run("push <<1>>\npush <<+2>>\n"),
        "SYNTAX ERROR IN 2; VECTOR ELEMENTS MUST BE UNSIGNED NUMBERS\n"
    );
}

#[test]
fn test_vector_line_scan_error() {
    assert_eq!(
        run("push\u{a0}<<1>>\nwrite\npush <<2>>\nwrite\n"),
        "SYNTAX ERROR IN 1; VECTOR LITERAL NOT SCANNED\n"
    );
    assert_eq!(run("push -1\nwrite\npush <<2>>\nwrite\n"), "-1\n<< 2 >>\n");
}
