//! Lazy first-seen filtering of an ordered diagram sequence.

use std::iter::FusedIterator;

use mayer_core::{Diagram, MayerError};

/// Lazy filter yielding the first-seen representative of every isomorphism
/// class in an ordered sequence of diagrams.
///
/// Each candidate is tested against every representative emitted so far; a
/// match marks the candidate as visited and skips it. The filter tracks visits
/// itself and never touches the caller's diagrams. It is single-pass: once
/// drained (or after yielding an error) it produces nothing more, and a fresh
/// filter is needed to scan again.
#[derive(Debug)]
pub struct IsomorphismFilter<'a, G> {
    graphs: &'a [G],
    cursor: usize,
    // `Some(class)` once an input has been visited.
    class_of: Vec<Option<usize>>,
    representatives: Vec<usize>,
    comparisons: u64,
    failed: bool,
}

impl<'a, G: Diagram> IsomorphismFilter<'a, G> {
    /// Creates a filter over `graphs`; earlier entries win their class.
    pub fn new(graphs: &'a [G]) -> Self {
        Self {
            graphs,
            cursor: 0,
            class_of: vec![None; graphs.len()],
            representatives: Vec::new(),
            comparisons: 0,
            failed: false,
        }
    }

    /// Number of isomorphism tests performed so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Input indices of the representatives emitted so far, in emission order.
    pub fn representatives(&self) -> &[usize] {
        &self.representatives
    }

    /// Class of input `index` (position in [`representatives`](Self::representatives)),
    /// or `None` while the input has not been visited yet.
    pub fn class_of(&self, index: usize) -> Option<usize> {
        self.class_of.get(index).copied().flatten()
    }

    fn matching_class(&mut self, candidate: &G) -> Result<Option<usize>, MayerError> {
        for (class, &rep) in self.representatives.iter().enumerate() {
            self.comparisons += 1;
            if candidate.is_isomorphic(&self.graphs[rep])? {
                return Ok(Some(class));
            }
        }
        Ok(None)
    }
}

impl<'a, G: Diagram> Iterator for IsomorphismFilter<'a, G> {
    type Item = Result<&'a G, MayerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let graphs = self.graphs;
        while self.cursor < graphs.len() {
            let index = self.cursor;
            self.cursor += 1;
            if self.class_of[index].is_some() {
                continue;
            }
            let candidate = &graphs[index];
            match self.matching_class(candidate) {
                Ok(Some(class)) => {
                    log::trace!(
                        "diagram {index} duplicates representative {}",
                        self.representatives[class]
                    );
                    self.class_of[index] = Some(class);
                }
                Ok(None) => {
                    self.class_of[index] = Some(self.representatives.len());
                    self.representatives.push(index);
                    return Some(Ok(candidate));
                }
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err.with_context("diagram", index)));
                }
            }
        }
        None
    }
}

impl<'a, G: Diagram> FusedIterator for IsomorphismFilter<'a, G> {}
