//! Errors raised by polynomial arithmetic.

use thiserror::Error;

/// Errors that can occur in polynomial operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PolyError {
    /// Division by the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// Deflation needs at least one root to divide out.
    #[error("cannot deflate a polynomial of order {order}")]
    CannotDeflate {
        /// Order of the polynomial that was to be deflated.
        order: usize,
    },
}
