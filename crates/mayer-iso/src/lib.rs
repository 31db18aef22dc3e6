#![deny(missing_docs)]
#![doc = "Isomorphism filtering and deduplication of Mayer cluster diagrams. \
Inputs are ordered, so the first member of every isomorphism class is the one \
that survives."]

pub mod filter;
pub mod ops;
pub mod partition;

use serde::{Deserialize, Serialize};

pub use filter::IsomorphismFilter;
pub use ops::{identical_free, iso_free, GraphOp, IdenticalFree, IsoFree};
pub use partition::{partition, partition_chunked, Partition};

/// Execution options shared by the deduplication operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupOpts {
    /// Chunk size for partitioned parallel deduplication; `None` runs sequentially.
    pub parallel_chunk: Option<usize>,
    /// Drop classes whose summed coefficient is zero ([`IsoFree`] only).
    pub drop_zero: bool,
}

impl Default for DedupOpts {
    fn default() -> Self {
        Self {
            parallel_chunk: None,
            drop_zero: true,
        }
    }
}
