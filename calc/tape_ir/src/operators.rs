//! Unary and Binary Operators
//!
//! The fixed operator sets a tape slot can reference.
//!
//! Display names and lookup tables are derived from these enums (`ALL`,
//! `name`), so there is no parallel name table that can drift out of sync
//! with the dispatch in `tape_eval`.

/// Unary functions, in menu order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryFn {
    Sqrt,
    Exp,
    Exp2,
    Ln,
    Log10,
    Log2,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
}

impl UnaryFn {
    /// Every unary function, in menu order.
    pub const ALL: [UnaryFn; 12] = [
        Self::Sqrt,
        Self::Exp,
        Self::Exp2,
        Self::Ln,
        Self::Log10,
        Self::Log2,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
    ];

    /// Returns the display name for this function.
    ///
    /// The natural logarithm displays as `log`, matching the calculator menu.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Exp2 => "exp2",
            Self::Ln => "log",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
        }
    }

    /// Look up a function by display name (case-insensitive).
    ///
    /// `ln` is accepted as an alias for the natural logarithm.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("ln") {
            return Some(Self::Ln);
        }
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }
}

/// Binary functions, in menu order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryFn {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryFn {
    /// Every binary function, in menu order.
    pub const ALL: [BinaryFn; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow];

    /// Returns the operator symbol shown on the tape.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Word alias accepted in program text.
    pub const fn word(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Pow => "pow",
        }
    }

    /// Look up an operator by symbol or word alias (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_symbol() == name || op.word().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests;
