use tally::{eval::evaluate, syntax::Parser, Number};

fn run(line: &str) -> Result<Number, String> {
    match Parser::new(line).parse() {
        Ok(expr) => Ok(evaluate(&expr)),
        Err(error) => Err(error.to_string()),
    }
}

fn assert_result(line: &str, expected: Number) {
    match run(line) {
        Ok(result) => assert_eq!(result, expected, "\"{line}\" evaluated to {result}"),
        Err(error) => panic!("\"{line}\" failed: {error}"),
    }
}

fn assert_error(line: &str, message: &str) {
    match run(line) {
        Ok(result) => panic!("\"{line}\" succeeded with {result} but was expected to fail"),
        Err(error) => assert_eq!(error, message),
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("1+2", 3.0);
    assert_result("8-5", 3.0);
    assert_result("7*9", 63.0);
    assert_result("10/2", 5.0);
    assert_result("42", 42.0);
}

#[test]
fn left_associativity() {
    assert_result("1-2-3", -4.0);
    assert_result("8/4/2", 1.0);
}

#[test]
fn precedence() {
    assert_result("1+2*3", 7.0);
    assert_result("2*3+4", 10.0);
    assert_result("8-6/2", 5.0);
    assert_result("1+2*3-4/2", 5.0);
}

#[test]
fn whitespace_does_not_matter() {
    assert_result("  12  +3 *  4", 24.0);
    assert_result("\t5\t/\t2\t", 2.5);
}

#[test]
fn multi_digit_numbers() {
    assert_result("100+250", 350.0);
    assert_result("1024*1024", 1048576.0);
}

#[test]
fn trailing_garbage_is_an_error() {
    assert_error("1+2 3", "Unexpected \"3\" after a complete expression.");
}

#[test]
fn dangling_operator_is_an_error() {
    assert_error("1+", "Expected a number instead of end of input.");
}

#[test]
fn operator_without_left_operand_is_an_error() {
    assert_error("*2", "Expected a number instead of \"*\".");
}

#[test]
fn unknown_characters_are_errors() {
    assert_error("1+~2", "Expected a number instead of \"~\".");
    assert_error("(1+2)", "Expected a number instead of \"(\".");
}

#[test]
fn standalone_zero_is_an_error() {
    assert_error("0", "Expected a number instead of \"0\".");
    assert_error("1/0", "Expected a number instead of \"0\".");
}

#[test]
fn empty_line_is_an_error() {
    assert_error("", "Expected a number instead of end of input.");
}

#[test]
fn lines_are_independent() {
    // No state leaks across lines: an error leaves nothing behind, and the
    // same line gives the same answer every time.
    assert_error("1+", "Expected a number instead of end of input.");
    for _ in 0..3 {
        assert_result("1-2-3", -4.0);
    }
}
