pub mod error;
pub mod form;
pub mod normalize;
pub mod repayment;
pub mod types;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-core operations
pub type MortgageResult<T> = Result<T, MortgageError>;
