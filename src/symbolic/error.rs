use thiserror::Error;

/// The one failure mode of exact arithmetic.
///
/// Never produced by the matrix builders themselves: it surfaces when a
/// caller normalizes or evaluates an expression whose denominator is
/// exactly zero, or evaluates a symbol with no binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by an expression that is identically zero")]
    DivisionByZero,

    #[error("no binding provided for symbol `{0}`")]
    UnboundSymbol(String),
}
