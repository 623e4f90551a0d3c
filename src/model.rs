// License: MIT
// Copyright © 2026 The cim-production Authors

//! A model of production package entities, and the associations between
//! them.

mod creation;
mod links;
mod retrieval;
mod serialization;
mod validation;

pub mod iterators;

#[cfg(test)]
mod test_utils;

use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::association::{Association, Cardinality, End, Side};
use crate::entities::Record;
use crate::{EntityClass, Error, ModelConfig};

pub use creation::EntityBuilder;
pub use serialization::SerializeOptions;

/// Entities stored in a `StableDiGraph` instance can be addressed with
/// `NodeIndex`es.
///
/// `UriIndexMap` stores the corresponding `NodeIndex` for the `uri` of every
/// live entity.
pub(crate) type UriIndexMap = HashMap<String, NodeIndex>;

/// The weight of an edge: the association it is a link of, and a sequence
/// number that orders the members of collections.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Link {
    pub(crate) association: Association,
    pub(crate) seq: u64,
}

/// An arena of entities, and the links between them.
///
/// Every link is stored once, as an edge from the entity on the source end of
/// the association to the entity on its target end, so both ends always agree
/// on it.  Removed entities leave an empty slot behind, so that handles to
/// them are detected as stale instead of pointing at another entity.
pub struct Model {
    graph: StableDiGraph<Option<Record>, Link>,
    uri_indices: UriIndexMap,
    next_seq: u64,
    config: ModelConfig,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}

/// Arena internals, shared by the public operations.
impl Model {
    pub(crate) fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Returns the record stored at `index`, if it is a live entity.
    pub(crate) fn record(&self, index: NodeIndex) -> Option<&Record> {
        self.graph.node_weight(index).and_then(Option::as_ref)
    }

    pub(crate) fn record_mut(&mut self, index: NodeIndex) -> Option<&mut Record> {
        self.graph.node_weight_mut(index).and_then(Option::as_mut)
    }

    /// Returns the record stored at `index`, or an error if there is no live
    /// entity at `index`.
    pub(crate) fn live_record(&self, index: NodeIndex) -> Result<&Record, Error> {
        self.record(index).ok_or_else(|| {
            Error::entity_not_found(format!(
                "Entity with index {} not found.",
                index.index()
            ))
        })
    }

    /// Checks that there is a live entity at `index` whose class is `class`
    /// or a specialisation of it.
    pub(crate) fn check_class(&self, index: NodeIndex, class: EntityClass) -> Result<(), Error> {
        let record = self.live_record(index)?;
        if !record.class().is_a(class) {
            return Err(Error::class_mismatch(format!(
                "Entity {} is a {}, not a {}.",
                record.uri(),
                record.class(),
                class
            )));
        }
        Ok(())
    }

    /// Checks that the entity at `index` can be linked through `end`.
    pub(crate) fn check_end(&self, index: NodeIndex, end: End) -> Result<(), Error> {
        let record = self.live_record(index)?;
        if !end.declared_on(record.class()) {
            return Err(Error::class_mismatch(format!(
                "Entity {} is a {}, which has no {} end.",
                record.uri(),
                record.class(),
                end
            )));
        }
        Ok(())
    }

    /// Returns the `uri` of the entity at `index`, for log messages.
    fn uri_of(&self, index: NodeIndex) -> &str {
        self.record(index).map_or("<removed>", Record::uri)
    }

    /// Returns the entities linked to the entity at `index` through `end`, in
    /// the order the links were made.
    pub(crate) fn partners(&self, index: NodeIndex, end: End) -> Vec<NodeIndex> {
        let direction = match end.side() {
            Side::Source => Direction::Outgoing,
            Side::Target => Direction::Incoming,
        };
        let mut links: Vec<(u64, NodeIndex)> = self
            .graph
            .edges_directed(index, direction)
            .filter(|edge| edge.weight().association == end.association())
            .filter_map(|edge| {
                let (source, target) = self.graph.edge_endpoints(edge.id())?;
                let partner = match end.side() {
                    Side::Source => target,
                    Side::Target => source,
                };
                Some((edge.weight().seq, partner))
            })
            .collect();
        links.sort_by_key(|(seq, _)| *seq);
        links.into_iter().map(|(_, partner)| partner).collect()
    }

    /// Returns the `(source, target)` order of a link between `owner` and
    /// `partner`, seen from `end` on `owner`.
    fn oriented(owner: NodeIndex, end: End, partner: NodeIndex) -> (NodeIndex, NodeIndex) {
        match end.side() {
            Side::Source => (owner, partner),
            Side::Target => (partner, owner),
        }
    }

    fn find_link(&self, owner: NodeIndex, end: End, partner: NodeIndex) -> Option<EdgeIndex> {
        let (source, target) = Self::oriented(owner, end, partner);
        self.graph
            .edges_directed(source, Direction::Outgoing)
            .find(|edge| {
                edge.weight().association == end.association()
                    && self.graph.edge_endpoints(edge.id()) == Some((source, target))
            })
            .map(|edge| edge.id())
    }

    /// Links `owner` to `partner` through `end`, and so `partner` to `owner`
    /// through the mirror of `end`.
    fn link(&mut self, owner: NodeIndex, end: End, partner: NodeIndex) {
        let (source, target) = Self::oriented(owner, end, partner);
        tracing::trace!(
            "Linking {} -> {} via {}.",
            self.uri_of(owner),
            self.uri_of(partner),
            end
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.graph.add_edge(
            source,
            target,
            Link {
                association: end.association(),
                seq,
            },
        );
    }

    /// Removes the link between `owner` and `partner` through `end`, if there
    /// is one.
    fn unlink(&mut self, owner: NodeIndex, end: End, partner: NodeIndex) {
        if let Some(edge) = self.find_link(owner, end, partner) {
            tracing::trace!(
                "Unlinking {} -> {} via {}.",
                self.uri_of(owner),
                self.uri_of(partner),
                end
            );
            self.graph.remove_edge(edge);
        }
    }

    /// Detaches `value` from its current partners on `end`, if `end` can only
    /// hold a single partner.  Called before `value` is linked to a new
    /// partner through `end`.
    fn claim(&mut self, value: NodeIndex, end: End) {
        if end.cardinality() == Cardinality::Many {
            return;
        }
        for previous in self.partners(value, end) {
            tracing::debug!(
                "Detaching {} from its previous {} {}.",
                self.uri_of(value),
                end,
                self.uri_of(previous)
            );
            self.unlink(value, end, previous);
        }
    }

    /// Removes every link of the entity at `index`.
    fn detach_all(&mut self, index: NodeIndex) {
        let edges: Vec<EdgeIndex> = self
            .graph
            .edges_directed(index, Direction::Outgoing)
            .chain(self.graph.edges_directed(index, Direction::Incoming))
            .map(|edge| edge.id())
            .collect();
        for edge in edges {
            // self-links show up in both directions.
            if self.graph.remove_edge(edge).is_some() {
                tracing::trace!("Removed link {} of {}.", edge.index(), self.uri_of(index));
            }
        }
    }
}
