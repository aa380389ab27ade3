#![allow(clippy::float_cmp, reason = "results are exact for these inputs")]

use super::*;

mod unary {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_values() {
        assert_eq!(evaluate_unary(9.0, UnaryFn::Sqrt), 3.0);
        assert_eq!(evaluate_unary(0.0, UnaryFn::Exp), 1.0);
        assert_eq!(evaluate_unary(10.0, UnaryFn::Exp2), 1024.0);
        assert_eq!(evaluate_unary(1.0, UnaryFn::Ln), 0.0);
        assert_eq!(evaluate_unary(1000.0, UnaryFn::Log10), 3.0);
        assert_eq!(evaluate_unary(8.0, UnaryFn::Log2), 3.0);
        assert_eq!(evaluate_unary(0.0, UnaryFn::Sin), 0.0);
        assert_eq!(evaluate_unary(0.0, UnaryFn::Cos), 1.0);
        assert_eq!(evaluate_unary(0.0, UnaryFn::Tan), 0.0);
        assert_eq!(evaluate_unary(0.0, UnaryFn::Sinh), 0.0);
        assert_eq!(evaluate_unary(0.0, UnaryFn::Cosh), 1.0);
        assert_eq!(evaluate_unary(0.0, UnaryFn::Tanh), 0.0);
    }

    #[test]
    fn natural_log_of_e() {
        let ln_e = evaluate_unary(std::f64::consts::E, UnaryFn::Ln);
        assert!((ln_e - 1.0).abs() < 1e-15);
    }

    #[test]
    fn domain_errors_are_nan() {
        assert!(evaluate_unary(-1.0, UnaryFn::Sqrt).is_nan());
        assert!(evaluate_unary(-1.0, UnaryFn::Ln).is_nan());
        assert!(evaluate_unary(-8.0, UnaryFn::Log2).is_nan());
    }

    #[test]
    fn log_of_zero_is_negative_infinity() {
        assert_eq!(evaluate_unary(0.0, UnaryFn::Log10), f64::NEG_INFINITY);
    }

    #[test]
    fn nan_propagates() {
        for op in UnaryFn::ALL {
            assert!(evaluate_unary(f64::NAN, op).is_nan(), "{op:?}");
        }
    }
}

mod binary {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arithmetic() {
        assert_eq!(evaluate_binary(3.0, 4.0, BinaryFn::Add), 7.0);
        assert_eq!(evaluate_binary(3.0, 4.0, BinaryFn::Mul), 12.0);
        assert_eq!(evaluate_binary(2.0, 10.0, BinaryFn::Pow), 1024.0);
    }

    #[test]
    fn left_operand_comes_first() {
        assert_eq!(evaluate_binary(10.0, 3.0, BinaryFn::Sub), 7.0);
        assert_eq!(evaluate_binary(10.0, 4.0, BinaryFn::Div), 2.5);
        assert_eq!(evaluate_binary(2.0, 3.0, BinaryFn::Pow), 8.0);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(evaluate_binary(1.0, 0.0, BinaryFn::Div), f64::INFINITY);
        assert_eq!(evaluate_binary(-1.0, 0.0, BinaryFn::Div), f64::NEG_INFINITY);
        assert!(evaluate_binary(0.0, 0.0, BinaryFn::Div).is_nan());
    }

    #[test]
    fn fractional_power_of_negative_is_nan() {
        assert!(evaluate_binary(-8.0, 1.0 / 3.0, BinaryFn::Pow).is_nan());
    }
}
