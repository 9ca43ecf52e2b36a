pub mod encode;
pub mod error;
pub mod pauli;
pub mod symmetry;
pub mod term;

pub use encode::binary_matrix;
pub use error::SymmetryError;
pub use pauli::{id, x, y, z, PauliOp, PositionedPauli};
pub use symmetry::{generate_paulis, generate_symmetries, generate_taus, SymmetryGenerator};
pub use term::{anti_commutes_with, commutes_with, PauliTerm};

pub const SUB_CHARS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Renders a wire index with subscript digits, e.g. `21` -> `"₂₁"`.
#[must_use]
pub fn subscript_digits(number: usize) -> String {
    let mut result = String::new();
    for character in number.to_string().chars() {
        let digit = character.to_digit(10).unwrap_or_default() as usize;
        result.push(SUB_CHARS[digit]);
    }
    result
}
