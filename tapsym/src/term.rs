use crate::pauli::{PauliOp, PositionedPauli};
use crate::subscript_digits;
use smallvec::SmallVec;
use std::fmt;

/// A Pauli term: an ordered tensor product of single-qubit Pauli
/// operators over distinct wires.
///
/// Terms are immutable once constructed; a term with one factor is
/// handled everywhere by the same iteration as a term with many, and a
/// term with no non-identity factors represents the identity operator.
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PauliTerm {
    factors: SmallVec<[PositionedPauli; 4]>,
}

impl PauliTerm {
    pub fn new(factors: impl IntoIterator<Item = PositionedPauli>) -> Self {
        Self {
            factors: factors.into_iter().collect(),
        }
    }

    /// The identity term (no factors).
    pub fn identity() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn factors(&self) -> &[PositionedPauli] {
        &self.factors
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.factors.iter().all(|factor| factor.op == PauliOp::I)
    }

    /// Largest wire the term touches, if any.
    #[must_use]
    pub fn max_wire(&self) -> Option<usize> {
        self.factors.iter().map(|factor| factor.wire).max()
    }
}

impl FromIterator<PositionedPauli> for PauliTerm {
    fn from_iter<Iter: IntoIterator<Item = PositionedPauli>>(iter: Iter) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<PositionedPauli>> for PauliTerm {
    fn from(factors: Vec<PositionedPauli>) -> Self {
        Self::new(factors)
    }
}

impl From<&[PositionedPauli]> for PauliTerm {
    fn from(factors: &[PositionedPauli]) -> Self {
        Self::new(factors.iter().copied())
    }
}

impl<const LENGTH: usize> From<[PositionedPauli; LENGTH]> for PauliTerm {
    fn from(factors: [PositionedPauli; LENGTH]) -> Self {
        Self::new(factors)
    }
}

/// Whether two terms anticommute, via the symplectic inner product
/// x·z' ⊕ z·x' accumulated over shared wires.
#[must_use]
pub fn anti_commutes_with(left: &PauliTerm, right: &PauliTerm) -> bool {
    let mut parity = false;
    for left_factor in left.factors() {
        for right_factor in right.factors() {
            if left_factor.wire == right_factor.wire {
                parity ^= (left_factor.op.x_bit() & right_factor.op.z_bit())
                    ^ (left_factor.op.z_bit() & right_factor.op.x_bit());
            }
        }
    }
    parity
}

#[must_use]
pub fn commutes_with(left: &PauliTerm, right: &PauliTerm) -> bool {
    !anti_commutes_with(left, right)
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.pad("I");
        }
        let mut string = String::new();
        for factor in self.factors.iter().filter(|factor| factor.op != PauliOp::I) {
            string.push(factor.op.character());
            string.push_str(&subscript_digits(factor.wire));
        }
        f.pad(&string)
    }
}

impl fmt::Debug for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as fmt::Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pauli::{x, y, z};

    #[test]
    fn single_qubit_commutation() {
        let x0 = PauliTerm::from([x(0)]);
        let z0 = PauliTerm::from([z(0)]);
        let z1 = PauliTerm::from([z(1)]);
        assert!(anti_commutes_with(&x0, &z0));
        assert!(commutes_with(&x0, &z1));
        assert!(commutes_with(&x0, &x0));
    }

    #[test]
    fn y_anticommutes_with_x_and_z_on_the_same_wire() {
        let y2 = PauliTerm::from([y(2)]);
        assert!(anti_commutes_with(&y2, &PauliTerm::from([x(2)])));
        assert!(anti_commutes_with(&y2, &PauliTerm::from([z(2)])));
        assert!(commutes_with(&y2, &y2));
    }

    #[test]
    fn display_uses_subscript_wires() {
        let term = PauliTerm::from([z(0), x(2), x(3)]);
        assert_eq!(term.to_string(), "Z₀X₂X₃");
        assert_eq!(PauliTerm::identity().to_string(), "I");
    }
}
