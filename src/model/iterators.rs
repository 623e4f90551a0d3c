// License: MIT
// Copyright © 2026 The cim-production Authors

//! Iterators over entities and links in a `Model`.

use std::marker::PhantomData;

use petgraph::stable_graph::{NodeIndex, NodeIndices, StableDiGraph};

use crate::entities::Record;
use crate::{Entity, Id};

use super::Link;

/// An iterator over the entities in a `Model`, in insertion order.
pub struct Entities<'a> {
    pub(crate) graph: &'a StableDiGraph<Option<Record>, Link>,
    pub(crate) iter: NodeIndices<'a, Option<Record>>,
}

impl<'a> Iterator for Entities<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.iter
            .by_ref()
            .find_map(|index| graph.node_weight(index).and_then(Option::as_ref))
    }
}

/// An iterator over handles to the entities of type `T` in a `Model`,
/// including specialisations of `T`, in insertion order.
pub struct Instances<'a, T> {
    pub(crate) graph: &'a StableDiGraph<Option<Record>, Link>,
    pub(crate) iter: NodeIndices<'a, Option<Record>>,
    pub(crate) marker: PhantomData<fn() -> T>,
}

impl<'a, T: Entity> Iterator for Instances<'a, T> {
    type Item = Id<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.iter.by_ref().find_map(|index| {
            graph
                .node_weight(index)
                .and_then(Option::as_ref)
                .and_then(T::from_record)
                .map(|_| Id::new(index))
        })
    }
}

/// An iterator over handles to the entities related to an entity through an
/// association end, in the order they were linked.
pub struct Related<F> {
    pub(crate) iter: std::vec::IntoIter<NodeIndex>,
    pub(crate) marker: PhantomData<fn() -> F>,
}

impl<F> Iterator for Related<F> {
    type Item = Id<F>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Id::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<F> ExactSizeIterator for Related<F> {}
