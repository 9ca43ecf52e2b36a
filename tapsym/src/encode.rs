use crate::error::SymmetryError;
use crate::term::PauliTerm;
use bitlin::BitMatrix;

/// Encodes Pauli terms as a binary matrix over GF(2).
///
/// The matrix has one row per term and `2 * qubit_count` columns. A
/// factor acting as Z or Y on `wire` sets the bit in column `wire`
/// (the Z-part, first half); a factor acting as X or Y sets the bit in
/// column `qubit_count + wire` (the X-part, second half). Y sets both
/// and its phase is discarded; only the symplectic support matters.
/// Identity factors and identity terms encode as zero bits, so an
/// all-zero row represents the identity term.
///
/// # Errors
///
/// Fails with [`SymmetryError::WireOutOfRange`] when a factor
/// addresses a wire at or beyond `qubit_count`.
pub fn binary_matrix<'t>(
    terms: impl ExactSizeIterator<Item = &'t PauliTerm>,
    qubit_count: usize,
) -> Result<BitMatrix, SymmetryError> {
    let mut matrix = BitMatrix::zeros(terms.len(), 2 * qubit_count);
    for (term_index, term) in terms.enumerate() {
        for factor in term.factors() {
            if factor.wire >= qubit_count {
                return Err(SymmetryError::WireOutOfRange {
                    term_index,
                    wire: factor.wire,
                    qubit_count,
                });
            }
            if factor.op.x_bit() {
                matrix.set((term_index, qubit_count + factor.wire), true);
            }
            if factor.op.z_bit() {
                matrix.set((term_index, factor.wire), true);
            }
        }
    }
    Ok(matrix)
}
