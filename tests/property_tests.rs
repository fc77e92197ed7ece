//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify algebraic properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use tally::core::{add, divide, subtract, ArithmeticError, Calculator, Operator};

fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::ZERO | prop::num::f64::SUBNORMAL
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            _ => Operator::Divide,
        }
    }
}

proptest! {
    #[test]
    fn add_is_commutative(a in finite_f64(), b in finite_f64()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn subtract_is_antisymmetric(a in finite_f64(), b in finite_f64()) {
        prop_assert_eq!(subtract(a, b), -subtract(b, a));
    }

    #[test]
    fn divide_by_zero_always_fails(a in finite_f64()) {
        prop_assert_eq!(divide(a, 0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn divide_by_nonzero_is_exact(a in finite_f64(), b in finite_f64()) {
        prop_assume!(b != 0.0);
        prop_assert_eq!(divide(a, b), Ok(a / b));
    }

    #[test]
    fn operator_apply_is_deterministic(
        op in arbitrary_operator(),
        a in finite_f64(),
        b in finite_f64(),
    ) {
        prop_assert_eq!(op.apply(a, b), op.apply(a, b));
    }

    #[test]
    fn digit_count_never_exceeds_sixteen(digits in prop::collection::vec(0..10u32, 0..40)) {
        let mut calc = Calculator::new();
        for d in digits {
            calc.input_digit(char::from_digit(d, 10).unwrap());
        }
        let count = calc.current().chars().filter(|c| c.is_ascii_digit()).count();
        prop_assert!(count <= 16);
    }

    #[test]
    fn toggle_sign_twice_is_identity(digits in prop::collection::vec(0..10u32, 1..10)) {
        let mut calc = Calculator::new();
        for d in digits {
            calc.input_digit(char::from_digit(d, 10).unwrap());
        }
        let before = calc.current().to_string();
        calc.toggle_sign();
        calc.toggle_sign();
        prop_assert_eq!(calc.current(), before);
    }

    #[test]
    fn clear_all_restores_initial_state(
        digits in prop::collection::vec(0..10u32, 0..8),
        op in arbitrary_operator(),
        more_digits in prop::collection::vec(0..10u32, 0..8),
    ) {
        let mut calc = Calculator::new();
        for d in digits {
            calc.input_digit(char::from_digit(d, 10).unwrap());
        }
        calc.perform_operation(op);
        for d in more_digits {
            calc.input_digit(char::from_digit(d, 10).unwrap());
        }
        calc.perform_equals();
        calc.clear_all();
        prop_assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn operand_text_always_parses_after_digit_entry(
        digits in prop::collection::vec(0..10u32, 1..20),
    ) {
        let mut calc = Calculator::new();
        for d in digits {
            calc.input_digit(char::from_digit(d, 10).unwrap());
        }
        prop_assert!(calc.current().parse::<f64>().is_ok());
    }
}
