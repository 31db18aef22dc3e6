//! Isomorphism class assignment, sequential or chunked over the rayon pool.

use mayer_core::{Diagram, MayerError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::filter::IsomorphismFilter;

/// Isomorphism classes of an ordered diagram sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Input index of each class representative, ascending.
    pub representatives: Vec<usize>,
    /// Class of every input, as a position in `representatives`.
    pub class_of: Vec<usize>,
    /// Number of isomorphism tests performed.
    pub comparisons: u64,
}

impl Partition {
    /// Number of isomorphism classes.
    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    /// Returns whether the input was empty.
    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// Number of inputs in each class.
    pub fn class_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.representatives.len()];
        for &class in &self.class_of {
            sizes[class] += 1;
        }
        sizes
    }
}

/// Drains an [`IsomorphismFilter`] over `graphs` and records every class.
pub fn partition<G: Diagram>(graphs: &[G]) -> Result<Partition, MayerError> {
    let mut filter = IsomorphismFilter::new(graphs);
    for emitted in filter.by_ref() {
        emitted?;
    }
    let class_of = (0..graphs.len())
        .map(|index| {
            filter.class_of(index).ok_or_else(|| {
                MayerError::isomorphism("unvisited-diagram", "filter left an input unclassified")
                    .with_context("diagram", index)
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Partition {
        representatives: filter.representatives().to_vec(),
        class_of,
        comparisons: filter.comparisons(),
    })
}

/// Partitions `graphs` chunk by chunk on the rayon pool, then merges the chunk
/// representatives with one more sequential pass in chunk order.
///
/// The earliest member of a class is always its own chunk's representative and
/// the merge pass meets chunks in input order, so the result equals
/// [`partition`] on the whole sequence.
pub fn partition_chunked<G: Diagram + Sync>(
    graphs: &[G],
    chunk: usize,
) -> Result<Partition, MayerError> {
    let chunk = chunk.max(1);
    let locals = graphs
        .par_chunks(chunk)
        .map(partition::<G>)
        .collect::<Result<Vec<_>, _>>()?;

    let mut candidates = Vec::new();
    let mut bases = Vec::with_capacity(locals.len());
    for (idx, local) in locals.iter().enumerate() {
        bases.push(candidates.len());
        candidates.extend(local.representatives.iter().map(|rep| idx * chunk + rep));
    }
    let candidate_refs: Vec<&G> = candidates.iter().map(|&index| &graphs[index]).collect();
    let merged = partition(&candidate_refs)?;

    let mut class_of = Vec::with_capacity(graphs.len());
    for (local, base) in locals.iter().zip(&bases) {
        class_of.extend(
            local
                .class_of
                .iter()
                .map(|&class| merged.class_of[base + class]),
        );
    }
    let comparisons = merged.comparisons + locals.iter().map(|p| p.comparisons).sum::<u64>();
    Ok(Partition {
        representatives: merged
            .representatives
            .iter()
            .map(|&candidate| candidates[candidate])
            .collect(),
        class_of,
        comparisons,
    })
}
