// License: MIT
// Copyright © 2026 The cim-production Authors

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `model` module.
//!
//! - the `TestModel`, which inserts entities with predictable uris, for use in
//!   tests.

use crate::{Entity, Error, Id, Model};

/// A wrapper around a [`Model`] for inserting entities easily, in tests.
///
/// Entities get the uri `{Class}_{n}`, where `n` counts the entities inserted
/// through the `TestModel`, starting at 1.
pub(super) struct TestModel {
    pub(super) model: Model,
    next_id: u64,
}

impl TestModel {
    /// Creates a new `TestModel`, with the default configuration.
    pub(super) fn new() -> Self {
        TestModel {
            model: Model::default(),
            next_id: 1,
        }
    }

    /// Inserts an entity of type `T` with default attributes.
    pub(super) fn entity<T: Entity + Default>(&mut self) -> Result<Id<T>, Error> {
        let uri = format!("{}_{}", T::CLASS, self.next_id);
        self.next_id += 1;
        self.model.insert(T::with_uri(uri))
    }

    /// Inserts `count` entities of type `T` with default attributes.
    pub(super) fn entities<T: Entity + Default>(&mut self, count: usize) -> Result<Vec<Id<T>>, Error> {
        (0..count).map(|_| self.entity::<T>()).collect()
    }

    /// Returns the uris of the given entities.
    pub(super) fn uris<T: Entity>(&self, ids: impl IntoIterator<Item = Id<T>>) -> Result<Vec<String>, Error> {
        ids.into_iter()
            .map(|id| self.model.get(id).map(|entity| entity.uri().to_string()))
            .collect()
    }
}
