use proptest::prelude::*;
use tally::{Interpreter, evaluate};

const OPERATORS: [char; 5] = ['+', '-', '*', '/', '%'];

fn apply(op: char, left: f64, right: f64) -> f64 {
    match op {
        '+' => left + right,
        '-' => left - right,
        '*' => left * right,
        '/' => left / right,
        '%' => left % right,
        _ => unreachable!(),
    }
}

fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

proptest! {
    #[test]
    fn integer_literals_evaluate_to_themselves(n in 0u32..1_000_000) {
        prop_assert_eq!(evaluate(&n.to_string()).unwrap(), f64::from(n));
    }

    #[test]
    fn decimal_literals_match_std_parsing(int in 0u32..10_000, frac in 0u32..10_000) {
        let text = format!("{int}.{frac}");
        prop_assert_eq!(evaluate(&text).unwrap(), text.parse::<f64>().unwrap());
    }

    #[test]
    fn chains_fold_left_to_right(first in 0u32..100,
                                 rest in prop::collection::vec((0usize..5, 0u32..100), 0..8)) {
        let mut source = first.to_string();
        let mut expected = f64::from(first);
        for (op, operand) in &rest {
            let op = OPERATORS[*op];
            source.push_str(&format!(" {op} {operand}"));
            expected = apply(op, expected, f64::from(*operand));
        }
        let got = evaluate(&source).unwrap();
        prop_assert!(same(got, expected), "{} gave {}, expected {}", source, got, expected);
    }

    #[test]
    fn read_only_lines_are_idempotent(a in 0u32..1000, b in 1u32..1000, op in 0usize..5) {
        let mut interpreter = Interpreter::new();
        interpreter.run(&format!("a = {a}")).unwrap();
        interpreter.run(&format!("b = {b}")).unwrap();
        let before = interpreter.variables().clone();

        let line = format!("(a {} b) {} a", OPERATORS[op], OPERATORS[(op + 1) % 5]);
        let first = interpreter.run(&line).unwrap();
        let second = interpreter.run(&line).unwrap();

        prop_assert!(same(first, second));
        prop_assert_eq!(interpreter.variables(), &before);
    }

    #[test]
    fn assigned_values_read_back(name in "[a-z_][a-z0-9_]{0,8}", value in 0u32..1_000_000) {
        let mut interpreter = Interpreter::new();
        prop_assert_eq!(interpreter.run(&format!("{name} = {value}")).unwrap(), f64::from(value));
        prop_assert_eq!(interpreter.run(&name).unwrap(), f64::from(value));
    }

    #[test]
    fn tokenizer_never_panics(source in "[ -~]{0,40}") {
        let _ = evaluate(&source);
    }
}
