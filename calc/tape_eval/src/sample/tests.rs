#![allow(clippy::float_cmp, reason = "sample grids are dyadic")]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;
use tape_ir::parse_program;

fn tape(program: &str) -> Tape {
    parse_program(program).unwrap()
}

#[test]
fn samples_left_edges_of_grid() {
    let samples = sample(&tape("x 2 *"), 0.0, 2.0, 4).unwrap();
    assert_eq!(
        samples.points(),
        &[(0.0, 0.0), (0.5, 1.0), (1.0, 2.0), (1.5, 3.0)]
    );
    assert_eq!(samples.len(), 4);
    assert!(!samples.is_empty());
}

#[test]
fn range_tracks_min_and_max() {
    let samples = sample(&tape("x x *"), -2.0, 2.0, 4).unwrap();
    assert_eq!(samples.range(), Some((0.0, 4.0)));
}

#[test]
fn range_ignores_nan() {
    // sqrt is NaN on the negative half
    let samples = sample(&tape("x sqrt"), -4.0, 4.0, 8).unwrap();
    assert!(samples.points()[0].1.is_nan());
    assert_eq!(samples.range(), Some((0.0, 3.0_f64.sqrt())));
}

#[test]
fn all_nan_has_no_range() {
    let samples = sample(&tape("x sqrt"), -4.0, -1.0, 3).unwrap();
    assert_eq!(samples.range(), None);
    assert_eq!(samples.normalized(1.0), None);
}

#[test]
fn normalized_maps_into_unit_interval() {
    let samples = sample(&tape("x"), 0.0, 4.0, 4).unwrap();
    assert_eq!(samples.range(), Some((0.0, 3.0)));
    assert_eq!(samples.normalized(0.0), Some(0.0));
    assert_eq!(samples.normalized(1.5), Some(0.5));
    assert_eq!(samples.normalized(3.0), Some(1.0));
    assert_eq!(samples.normalized(f64::NAN), None);
}

#[test]
fn flat_range_normalizes_to_zero() {
    let samples = sample(&tape("7"), 0.0, 1.0, 5).unwrap();
    assert_eq!(samples.range(), Some((7.0, 7.0)));
    assert_eq!(samples.normalized(7.0), Some(0.0));
}

#[test]
fn infinite_max_keeps_its_position() {
    // 1 / x blows up at the left edge
    let samples = sample(&tape("1 x /"), 0.0, 1.0, 4).unwrap();
    let (min, max) = samples.range().unwrap();
    assert_eq!(max, f64::INFINITY);
    assert_eq!(samples.normalized(max), Some(1.0));
    assert_eq!(samples.normalized(min), Some(0.0));
    assert_eq!(samples.normalized(4.0), Some(0.0));
}

#[test]
fn infinite_min_keeps_its_position() {
    let samples = sample(&tape("-1 x /"), 0.0, 1.0, 4).unwrap();
    assert_eq!(samples.range().map(|(min, _)| min), Some(f64::NEG_INFINITY));
    assert_eq!(samples.normalized(f64::NEG_INFINITY), Some(0.0));
    assert_eq!(samples.normalized(-2.0), Some(1.0));
}

#[test]
fn both_ends_infinite() {
    // -inf, -inf, NaN, +inf
    let samples = sample(&tape("x 0 /"), -1.0, 1.0, 4).unwrap();
    assert_eq!(samples.range(), Some((f64::NEG_INFINITY, f64::INFINITY)));
    assert_eq!(samples.normalized(f64::NEG_INFINITY), Some(0.0));
    assert_eq!(samples.normalized(f64::INFINITY), Some(1.0));
    assert_eq!(samples.normalized(3.0), Some(0.5));
}

#[test]
fn flat_infinite_range_normalizes_to_zero() {
    let samples = sample(&tape("1 0 /"), 0.0, 1.0, 3).unwrap();
    assert_eq!(samples.normalized(f64::INFINITY), Some(0.0));
}

#[test]
fn empty_or_reversed_interval_is_invalid() {
    for (from, to) in [(1.0, 1.0), (2.0, 1.0), (f64::NAN, 1.0)] {
        let err = sample(&tape("x"), from, to, 40).unwrap_err();
        assert_eq!(err.kind(), EvalErrorKind::InvalidRange);
    }
}

#[test]
fn zero_points_is_invalid() {
    let err = sample(&tape("x"), 0.0, 1.0, 0).unwrap_err();
    assert_eq!(err.kind(), EvalErrorKind::InvalidRange);
}

#[test]
fn evaluation_failure_aborts() {
    let err = sample(&tape("x * "), 0.0, 1.0, 40).unwrap_err();
    assert_eq!(err.kind(), EvalErrorKind::StackUnderflow);
}

#[test]
fn iterates_by_reference() {
    let samples = sample(&tape("1"), 0.0, 1.0, 3).unwrap();
    let ys: Vec<f64> = (&samples).into_iter().map(|&(_, y)| y).collect();
    assert_eq!(ys, vec![1.0, 1.0, 1.0]);
}
