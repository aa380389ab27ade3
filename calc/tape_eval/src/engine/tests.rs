#![allow(clippy::float_cmp, reason = "exact arithmetic on small integers")]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;
use tape_ir::{BinaryFn, UnaryFn, TAPE_LEN};

#[test]
fn fresh_engine_has_nothing_to_evaluate() {
    let engine = Engine::new();
    assert_eq!(engine.evaluate(0.0), Err(EvalError::EmptyResult));
    assert!(engine.tape().iter().all(Symbol::is_empty));
}

#[test]
fn incremental_edits_build_a_program() {
    let mut engine = Engine::new();
    engine.set_symbol(0, Symbol::Literal(3.0));
    assert_eq!(engine.evaluate(0.0), Ok(3.0));

    engine.set_symbol(1, Symbol::Literal(4.0));
    engine.set_symbol(2, Symbol::Binary(BinaryFn::Add));
    assert_eq!(engine.evaluate(0.0), Ok(7.0));

    engine.set_symbol(2, Symbol::Binary(BinaryFn::Sub));
    assert_eq!(engine.evaluate(0.0), Ok(-1.0));
    assert_eq!(engine.symbol(2), Symbol::Binary(BinaryFn::Sub));
}

#[test]
fn overwriting_with_empty_removes_effect() {
    let mut engine = Engine::new();
    engine.set_symbol(0, Symbol::Input);
    engine.set_symbol(1, Symbol::Unary(UnaryFn::Sqrt));
    assert_eq!(engine.evaluate(16.0), Ok(4.0));
    engine.set_symbol(1, Symbol::Empty);
    assert_eq!(engine.evaluate(16.0), Ok(16.0));
}

#[test]
fn integrate_and_sample_use_current_tape() {
    let mut engine = Engine::new();
    engine.set_symbol(0, Symbol::Input);
    assert_eq!(engine.integrate(0.0, 2.0, 2), Ok(2.0));
    let samples = engine.sample(0.0, 1.0, 2).unwrap();
    assert_eq!(samples.points(), &[(0.0, 0.0), (0.5, 0.5)]);

    engine.set_symbol(0, Symbol::Literal(1.0));
    assert_eq!(engine.integrate(0.0, 1.0, 1), Ok(1.0));
}

#[test]
fn clear_resets_tape() {
    let mut engine = Engine::with_tape(Tape::from_symbols([Symbol::PI]).unwrap());
    assert_eq!(engine.evaluate(0.0), Ok(std::f64::consts::PI));
    engine.clear();
    assert_eq!(engine.evaluate(0.0).unwrap_err().kind(), EvalErrorKind::EmptyResult);
}

#[test]
fn last_slot_participates() {
    let mut engine = Engine::from(Tape::from_symbols([Symbol::Input]).unwrap());
    engine.set_symbol(TAPE_LEN - 1, Symbol::Unary(UnaryFn::Exp));
    assert_eq!(engine.evaluate(0.0), Ok(1.0));
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn out_of_range_edit_is_a_bug() {
    Engine::new().set_symbol(TAPE_LEN, Symbol::Input);
}
