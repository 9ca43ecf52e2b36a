use crate::encode::binary_matrix;
use crate::error::SymmetryError;
use crate::pauli::{x, PauliOp, PositionedPauli};
use crate::term::PauliTerm;
use bitlin::{kernel_basis, BitMatrix};
use tracing::debug;

/// A Z2 symmetry generator (tau): a Pauli string that commutes with
/// every term of the Hamiltonian it was derived from, packaged as a
/// one-term weighted sum with coefficient 1.0.
#[must_use]
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymmetryGenerator {
    coefficient: f64,
    term: PauliTerm,
}

impl SymmetryGenerator {
    pub fn new(term: PauliTerm) -> Self {
        Self { coefficient: 1.0, term }
    }

    #[must_use]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    #[must_use]
    pub fn term(&self) -> &PauliTerm {
        &self.term
    }
}

impl std::fmt::Display for SymmetryGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}) {}", self.coefficient, self.term)
    }
}

impl std::fmt::Debug for SymmetryGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

/// Maps each nullspace basis vector to a symmetry generator.
///
/// A basis vector of length `2 * qubit_count` carries the X-part in
/// its first half and the Z-part in its second half (the symplectic
/// dual of the encoding layout). Per wire, the pair `(x, z)` selects
/// the label through [`PauliOp::from_xz_bits`]; identity factors are
/// dropped, so a zero vector yields the identity term. Generator order
/// follows the nullspace row order.
pub fn generate_taus(nullspace: &BitMatrix, qubit_count: usize) -> Vec<SymmetryGenerator> {
    debug_assert_eq!(nullspace.column_count(), 2 * qubit_count);
    let mut generators = Vec::with_capacity(nullspace.row_count());
    for row_index in 0..nullspace.row_count() {
        let factors = (0..qubit_count).filter_map(|wire| {
            let x_bit = nullspace.get((row_index, wire));
            let z_bit = nullspace.get((row_index, qubit_count + wire));
            match PauliOp::from_xz_bits(x_bit, z_bit) {
                PauliOp::I => None,
                op => Some(PositionedPauli { wire, op }),
            }
        });
        generators.push(SymmetryGenerator::new(PauliTerm::new(factors)));
    }
    generators
}

/// Selects one single-qubit Pauli-X per generator.
///
/// The generators are re-encoded as a binary matrix; for each
/// generator row the Z-part columns (`0..qubit_count`) are scanned in
/// ascending order, and the first column where this row has a one and
/// every other row has a zero names the wire of that generator's
/// Pauli-X. Such a column is exactly a wire where X anticommutes with
/// this generator and commutes with all the others.
///
/// # Errors
///
/// Fails with [`SymmetryError::DegenerateSymmetrySet`] when some
/// generator has no qualifying column, which means the generator set
/// is not independent or was not correctly reduced. Fails with
/// [`SymmetryError::WireOutOfRange`] if a generator term addresses a
/// wire at or beyond `qubit_count`.
pub fn generate_paulis(
    generators: &[SymmetryGenerator],
    qubit_count: usize,
) -> Result<Vec<PositionedPauli>, SymmetryError> {
    let matrix = binary_matrix(generators.iter().map(SymmetryGenerator::term), qubit_count)?;
    let mut sigma_x = Vec::with_capacity(generators.len());
    for row_index in 0..matrix.row_count() {
        let unique_column = (0..qubit_count).find(|&column_index| {
            matrix.get((row_index, column_index))
                && (0..matrix.row_count())
                    .all(|other_index| other_index == row_index || !matrix.get((other_index, column_index)))
        });
        match unique_column {
            Some(wire) => sigma_x.push(x(wire)),
            None => {
                return Err(SymmetryError::DegenerateSymmetrySet {
                    generator_index: row_index,
                    generator_count: generators.len(),
                    qubit_count,
                })
            }
        }
    }
    Ok(sigma_x)
}

/// Computes the symmetry generators of a Hamiltonian together with
/// their anticommuting single-qubit Pauli-X operators.
///
/// The pipeline: encode the terms as a binary matrix, reduce it in
/// place over GF(2), strip all-zero rows, compute the nullspace basis,
/// map basis vectors to generators, and select one Pauli-X per
/// generator. The two returned lists are index-aligned: `sigma_x[i]`
/// anticommutes with `generators[i]` and commutes with every other
/// generator.
///
/// # Errors
///
/// Propagates [`SymmetryError::WireOutOfRange`] from encoding and
/// [`SymmetryError::DegenerateSymmetrySet`] from Pauli-X selection.
pub fn generate_symmetries(
    terms: &[PauliTerm],
    qubit_count: usize,
) -> Result<(Vec<SymmetryGenerator>, Vec<PositionedPauli>), SymmetryError> {
    let mut matrix = binary_matrix(terms.iter(), qubit_count)?;
    debug!(rows = matrix.row_count(), columns = matrix.column_count(), "encoded Hamiltonian terms");

    matrix.echelonize();
    let reduced = matrix.without_zero_rows();
    debug!(rank = reduced.row_count(), "reduced binary matrix over GF(2)");

    let nullspace = kernel_basis(&reduced);
    debug!(dimension = nullspace.row_count(), "computed nullspace basis");

    let generators = generate_taus(&nullspace, qubit_count);
    let sigma_x = generate_paulis(&generators, qubit_count)?;
    Ok((generators, sigma_x))
}
