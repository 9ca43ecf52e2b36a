use derive_more::{From, Into};
use num_derive::{FromPrimitive, ToPrimitive};

/// Single-qubit Pauli operators, including the identity.
///
/// The discriminants carry the symplectic bit pattern: bit 0 is the
/// X-part ("acts as X or Y"), bit 1 is the Z-part ("acts as Z or Y").
/// Y sets both, since Y = iXZ up to a phase that the binary encoding
/// intentionally discards.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, FromPrimitive, ToPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PauliOp {
    /// One-qubit identity
    I = 0b00,

    /// Pauli X
    /// ```text
    /// |0 1|
    /// |1 0|
    /// ```
    X = 0b01,

    /// Pauli Y
    /// ```text
    /// |0 -i|
    /// |i  0|
    /// ```
    Y = 0b11,

    /// Pauli Z
    /// ```text
    /// |1  0|
    /// |0 -1|
    /// ```
    Z = 0b10,
}

impl PauliOp {
    /// The operator with the given symplectic bit pair:
    /// (0,0) -> I, (1,0) -> X, (1,1) -> Y, (0,1) -> Z.
    #[must_use]
    pub const fn from_xz_bits(x_bit: bool, z_bit: bool) -> Self {
        match (x_bit, z_bit) {
            (false, false) => PauliOp::I,
            (true, false) => PauliOp::X,
            (true, true) => PauliOp::Y,
            (false, true) => PauliOp::Z,
        }
    }

    /// True when the operator acts as X or Y.
    #[must_use]
    pub const fn x_bit(self) -> bool {
        match self {
            PauliOp::X | PauliOp::Y => true,
            PauliOp::I | PauliOp::Z => false,
        }
    }

    /// True when the operator acts as Z or Y.
    #[must_use]
    pub const fn z_bit(self) -> bool {
        match self {
            PauliOp::Z | PauliOp::Y => true,
            PauliOp::I | PauliOp::X => false,
        }
    }

    #[must_use]
    pub const fn character(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }
}

/// A single-qubit Pauli operator placed on a specific wire.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionedPauli {
    pub wire: usize,
    pub op: PauliOp,
}

#[must_use]
pub fn id(wire: usize) -> PositionedPauli {
    PositionedPauli { wire, op: PauliOp::I }
}

#[must_use]
pub fn x(wire: usize) -> PositionedPauli {
    PositionedPauli { wire, op: PauliOp::X }
}

#[must_use]
pub fn y(wire: usize) -> PositionedPauli {
    PositionedPauli { wire, op: PauliOp::Y }
}

#[must_use]
pub fn z(wire: usize) -> PositionedPauli {
    PositionedPauli { wire, op: PauliOp::Z }
}
