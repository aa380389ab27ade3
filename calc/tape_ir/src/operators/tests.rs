use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unary_names_follow_menu_order() {
    let names: Vec<_> = UnaryFn::ALL.iter().map(|op| op.name()).collect();
    assert_eq!(
        names,
        vec![
            "sqrt", "exp", "exp2", "log", "log10", "log2", "sin", "cos", "tan", "sinh", "cosh",
            "tanh"
        ]
    );
}

#[test]
fn binary_symbols_follow_menu_order() {
    let symbols: Vec<_> = BinaryFn::ALL.iter().map(|op| op.as_symbol()).collect();
    assert_eq!(symbols, vec!["+", "-", "*", "/", "^"]);
}

#[test]
fn unary_lookup_round_trips_every_name() {
    for op in UnaryFn::ALL {
        assert_eq!(UnaryFn::from_name(op.name()), Some(op));
    }
}

#[test]
fn unary_lookup_accepts_ln_alias_and_any_case() {
    assert_eq!(UnaryFn::from_name("ln"), Some(UnaryFn::Ln));
    assert_eq!(UnaryFn::from_name("LOG"), Some(UnaryFn::Ln));
    assert_eq!(UnaryFn::from_name("Sinh"), Some(UnaryFn::Sinh));
    assert_eq!(UnaryFn::from_name("arcsin"), None);
}

#[test]
fn binary_lookup_accepts_symbols_and_words() {
    for op in BinaryFn::ALL {
        assert_eq!(BinaryFn::from_name(op.as_symbol()), Some(op));
        assert_eq!(BinaryFn::from_name(op.word()), Some(op));
    }
    assert_eq!(BinaryFn::from_name("POW"), Some(BinaryFn::Pow));
    assert_eq!(BinaryFn::from_name("%"), None);
}
