pub mod vec;
pub use vec::{BitVec, Word};

pub mod matrix;
pub use matrix::{complement, kernel_basis, BitMatrix, ParseBitMatrixError};
