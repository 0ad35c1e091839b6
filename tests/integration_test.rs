// Integration tests for the calculator state machine

use calctty::engine::calculator::{Calculator, ConstantMode, DisplayState};
use calctty::engine::script::{parse_script, run_script};
use calctty::engine::symbol::{BinaryOp, Constant, MemoryOp, Symbol, UnaryFn};

fn press(calc: &mut Calculator, keys: &str) -> DisplayState {
    let symbols = parse_script(keys).expect("Script parsing failed");
    run_script(calc, &symbols)
}

fn eval(keys: &str) -> String {
    press(&mut Calculator::new(), keys).current
}

#[test]
fn test_initial_state() {
    let calc = Calculator::new();
    let display = calc.display();

    assert_eq!(display.current, "0");
    assert_eq!(display.previous, "");
    assert_eq!(display.pending, None);
    assert_eq!(calc.memory(), 0.0);
    assert!(!calc.is_reset_pending());
}

#[test]
fn test_digit_sequences_reproduce_themselves() {
    for digits in ["0", "7", "12", "1234567890", "9081726354"] {
        let mut calc = Calculator::new();
        let mut display = calc.display();
        for c in digits.chars() {
            display = calc.apply(Symbol::from_char(c).unwrap());
        }
        assert_eq!(display.current, digits);
    }
}

#[test]
fn test_leading_zero_is_replaced() {
    assert_eq!(eval("0 0 5"), "5");
}

#[test]
fn test_decimal_point_entry() {
    assert_eq!(eval(". 5"), "0.5");
    assert_eq!(eval("1 . . 2 ."), "1.2");
    // After an operator the decimal point starts a fresh numeral
    let mut calc = Calculator::new();
    let display = press(&mut calc, "3 + .");
    assert_eq!(display.current, "0.");
    assert_eq!(display.previous, "3");
}

#[test]
fn test_left_to_right_without_precedence() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "7 + 3").current, "3");
    assert_eq!(press(&mut calc, "+").current, "10");
    assert_eq!(press(&mut calc, "2 =").current, "12");

    assert_eq!(eval("2 + 3 * 4 ="), "20");
}

#[test]
fn test_operator_arms_pending_state() {
    let mut calc = Calculator::new();
    let display = press(&mut calc, "8 x^y");

    assert_eq!(display.pending, Some(BinaryOp::Power));
    assert_eq!(display.previous, "8");
    assert_eq!(display.expression_line(), "8 ^");
    assert!(calc.is_reset_pending());
}

#[test]
fn test_repeated_operator_only_replaces_pending() {
    let mut calc = Calculator::new();
    let display = press(&mut calc, "9 + * -");

    assert_eq!(display.current, "9");
    assert_eq!(display.previous, "9");
    assert_eq!(display.pending, Some(BinaryOp::Subtract));
    assert_eq!(press(&mut calc, "4 =").current, "5");
}

#[test]
fn test_equals_returns_to_idle() {
    let mut calc = Calculator::new();
    let display = press(&mut calc, "6 * 7 =");

    assert_eq!(display.current, "42");
    assert_eq!(display.previous, "");
    assert_eq!(display.pending, None);
    assert!(calc.is_reset_pending());

    // Next digit starts a new numeral
    assert_eq!(press(&mut calc, "5").current, "5");
}

#[test]
fn test_equals_without_pending_keeps_value() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "5 =").current, "5");
    assert_eq!(press(&mut calc, "3").current, "3");
}

#[test]
fn test_result_feeds_next_operation() {
    assert_eq!(eval("6 * 7 = - 2 ="), "40");
}

#[test]
fn test_add_then_subtract_is_identity() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "123.25 + 17.5 =").current, "140.75");
    assert_eq!(press(&mut calc, "- 17.5 =").current, "123.25");
}

#[test]
fn test_division_by_zero_recovers_on_digit() {
    let mut calc = Calculator::new();
    let display = press(&mut calc, "5 / 0 =");
    assert_eq!(display.current, "Error");
    assert_eq!(display.previous, "");
    assert_eq!(display.pending, None);

    assert_eq!(press(&mut calc, "5").current, "5");
}

#[test]
fn test_modulo_by_zero_recovers_on_digit() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "5 % 0 =").current, "Error");
    assert_eq!(press(&mut calc, "5").current, "5");
}

#[test]
fn test_error_during_chained_operator() {
    let mut calc = Calculator::new();
    let display = press(&mut calc, "4 / 0 +");

    // The operator is still armed, with the sentinel as its left operand
    assert_eq!(display.current, "Error");
    assert_eq!(calc.previous_input(), "Error");
    assert_eq!(calc.pending_operation(), Some(BinaryOp::Add));
    assert!(calc.is_reset_pending());

    assert_eq!(press(&mut calc, "3 =").current, "Error");
    assert_eq!(calc.pending_operation(), None);
    assert_eq!(calc.previous_input(), "");

    assert_eq!(eval("5 / 0 + 3 ="), "Error");
}

#[test]
fn test_operator_after_error_result_propagates_error() {
    let mut calc = Calculator::new();
    press(&mut calc, "1 / 0 = +");
    assert_eq!(calc.current_input(), "Error");
    assert_eq!(calc.pending_operation(), Some(BinaryOp::Add));

    assert_eq!(press(&mut calc, "3 =").current, "Error");
    assert_eq!(eval("1 / 0 = + 3 ="), "Error");
}

#[test]
fn test_clear_after_propagated_error() {
    let mut calc = Calculator::new();
    press(&mut calc, "5 / 0 + 3 =");
    assert_eq!(press(&mut calc, "C 2 + 2 =").current, "4");
}

#[test]
fn test_error_recovery_paths() {
    let mut calc = Calculator::new();
    press(&mut calc, "1 / 0 =");
    assert_eq!(press(&mut calc, ".").current, "0.");

    let mut calc = Calculator::new();
    press(&mut calc, "1 / 0 =");
    assert_eq!(press(&mut calc, "⌫").current, "0");

    let mut calc = Calculator::new();
    press(&mut calc, "1 / 0 =");
    assert_eq!(press(&mut calc, "C").current, "0");

    let mut calc = Calculator::new();
    press(&mut calc, "1 / 0 =");
    assert_eq!(press(&mut calc, "±").current, "Error");
    assert_eq!(press(&mut calc, "π").current, "3.141592653589793");
}

#[test]
fn test_clear_keeps_memory() {
    let mut calc = Calculator::new();
    press(&mut calc, "9 M+ C 4 + 2");
    let display = press(&mut calc, "C");

    assert_eq!(display.current, "0");
    assert_eq!(display.previous, "");
    assert_eq!(display.pending, None);
    assert!(!calc.is_reset_pending());
    assert_eq!(calc.memory(), 9.0);
}

#[test]
fn test_memory_register() {
    let mut calc = Calculator::new();
    press(&mut calc, "10 M+ C 3 M- C 2.5 M+");
    assert_eq!(calc.memory(), 9.5);

    let display = press(&mut calc, "C MR");
    assert_eq!(display.current, "9.5");
    assert!(!calc.is_reset_pending());

    // MR clears the reset flag, so digits extend the recalled value
    assert_eq!(press(&mut calc, "1").current, "9.51");
}

#[test]
fn test_memory_clear_ignores_current_input() {
    let mut calc = Calculator::new();
    press(&mut calc, "7 M+ C 3");
    let display = press(&mut calc, "MC");

    assert_eq!(calc.memory(), 0.0);
    assert_eq!(display.current, "3");
    assert_eq!(press(&mut calc, "MR").current, "0");
}

#[test]
fn test_memory_add_on_error_is_ignored() {
    let mut calc = Calculator::new();
    press(&mut calc, "4 M+ 1 / 0 =");
    calc.apply(Symbol::Memory(MemoryOp::Add));
    assert_eq!(calc.memory(), 4.0);
}

#[test]
fn test_memory_add_does_not_reset_entry() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "7 M+ 3").current, "73");
    assert_eq!(calc.memory(), 7.0);
}

#[test]
fn test_backspace() {
    assert_eq!(eval("123 ⌫"), "12");
    assert_eq!(eval("7 ⌫"), "0");
    assert_eq!(eval("7 ⌫ ⌫"), "0");
    assert_eq!(eval("5 ± ⌫"), "0");
    assert_eq!(eval("1.5 ⌫ ⌫"), "1");
}

#[test]
fn test_sign_toggle_is_its_own_inverse() {
    for start in ["12", "0.5", "3"] {
        let mut calc = Calculator::new();
        press(&mut calc, start);
        assert!(press(&mut calc, "±").current.starts_with('-'));
        assert_eq!(press(&mut calc, "±").current, start);
    }
}

#[test]
fn test_sign_toggle_on_zero() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "±").current, "-0");
    // "-0" is not "0", so the digit is appended
    assert_eq!(press(&mut calc, "4").current, "-04");
    assert_eq!(calc.current_input(), "-04");
    assert_eq!(press(&mut calc, "+ 10 =").current, "6");
}

#[test]
fn test_constants_replace_by_default() {
    let mut calc = Calculator::new();
    assert_eq!(
        calc.apply(Symbol::Constant(Constant::Pi)).current,
        "3.141592653589793"
    );
    assert!(!calc.is_reset_pending());

    assert_eq!(eval("12 e"), "2.718281828459045");
    assert_eq!(eval("2 * π ="), "6.2831853072");
}

#[test]
fn test_constants_append_mode() {
    let mut calc = Calculator::with_constant_mode(ConstantMode::Append);
    assert_eq!(calc.constant_mode(), ConstantMode::Append);
    assert_eq!(Calculator::new().constant_mode(), ConstantMode::Replace);
    assert_eq!(press(&mut calc, "12 π").current, "123.141592653589793");

    // After an operator the constant still starts fresh
    assert_eq!(press(&mut calc, "C 2 + e").current, "2.718281828459045");
}

#[test]
fn test_unary_sets_reset_flag() {
    let mut calc = Calculator::new();
    assert_eq!(calc.apply(Symbol::Digit(9)).current, "9");
    assert_eq!(calc.apply(Symbol::Unary(UnaryFn::SquareRoot)).current, "3");
    assert!(calc.is_reset_pending());
    assert_eq!(calc.apply(Symbol::Digit(4)).current, "4");
}

#[test]
fn test_unary_as_right_operand() {
    assert_eq!(eval("10 + 16 √ ="), "14");
    assert_eq!(eval("2 x^y 3 x² ="), "512");
}
