#![deny(missing_docs)]
#![doc = "Core contracts for Mayer cluster-diagram processing: exact rational \
coefficients, the shared error taxonomy and the capability traits diagrams must \
provide to be deduplicated."]

pub mod coefficient;
pub mod errors;
pub mod rng;

pub use coefficient::{Coefficient, RationalCoefficient, Sign};
pub use errors::{ErrorInfo, MayerError};
pub use rng::{derive_substream_seed, RngHandle};

/// Isomorphism capability required from any diagram type processed by the
/// deduplication operations.
///
/// Two diagrams are isomorphic when one is a relabeling of the other that
/// preserves every node and bond label. The predicate must be an equivalence
/// relation; it may be expensive, and it may fail (for example on a malformed
/// diagram or an exhausted search budget), in which case the failure aborts the
/// caller's run.
pub trait Diagram {
    /// Returns whether `self` and `other` are relabelings of each other.
    fn is_isomorphic(&self, other: &Self) -> Result<bool, MayerError>;
}

impl<D: Diagram + ?Sized> Diagram for &D {
    fn is_isomorphic(&self, other: &Self) -> Result<bool, MayerError> {
        (**self).is_isomorphic(*other)
    }
}

/// Diagram carrying an exact weight in a cluster expansion.
pub trait WeightedDiagram: Diagram {
    /// Returns the weight attached to the diagram.
    fn coefficient(&self) -> &RationalCoefficient;

    /// Returns a mutable reference to the weight attached to the diagram.
    fn coefficient_mut(&mut self) -> &mut RationalCoefficient;
}
