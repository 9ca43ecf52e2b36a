use thiserror::Error;

/// Failures of the symmetry-generation pipeline.
///
/// Every variant is a deterministic contract violation: the same input
/// fails the same way, there is nothing to retry, and no partial
/// output is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SymmetryError {
    /// A term addresses a wire outside the declared qubit range.
    #[error("wire {wire} in term {term_index} is out of range for {qubit_count} qubits")]
    WireOutOfRange {
        term_index: usize,
        wire: usize,
        qubit_count: usize,
    },

    /// No single-qubit Pauli-X anticommutes with exactly one generator;
    /// the symmetry set is not independent or was not correctly
    /// reduced.
    #[error(
        "no unique anticommuting qubit for generator {generator_index} \
         of {generator_count} on {qubit_count} qubits"
    )]
    DegenerateSymmetrySet {
        generator_index: usize,
        generator_count: usize,
        qubit_count: usize,
    },
}
