// License: MIT
// Copyright © 2026 The cim-production Authors

//! Methods for creating a [`Model`], and for inserting entities into it and
//! removing them from it.

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use uuid::Uuid;

use crate::association::{End, ToMany, ToOne};
use crate::entities::Record;
use crate::{Entity, Error, Id, IsA, ModelConfig};

use super::{Model, UriIndexMap};

/// `Model` instantiation and entity lifecycle.
impl Model {
    /// Creates a new, empty [`Model`] with the given configuration.
    pub fn new(config: ModelConfig) -> Self {
        Self {
            graph: StableDiGraph::new(),
            uri_indices: UriIndexMap::new(),
            next_seq: 0,
            config,
        }
    }

    /// Inserts an entity into the model, without any links, and returns a
    /// handle to it.
    ///
    /// An entity with an empty `uri` gets a generated one when
    /// [`ModelConfig::generate_missing_uris`] is set, and is rejected
    /// otherwise.  Returns an error if an entity with the same `uri` is already
    /// in the model.
    pub fn insert<T: Entity>(&mut self, entity: T) -> Result<Id<T>, Error> {
        let index = self.insert_record(entity.into())?;
        Ok(Id::new(index))
    }

    /// Returns an [`EntityBuilder`] for inserting an entity together with its
    /// initial links.
    pub fn build<T: Entity>(&mut self, entity: T) -> EntityBuilder<'_, T> {
        EntityBuilder {
            model: self,
            entity,
            singles: Vec::new(),
            collections: Vec::new(),
            error: None,
        }
    }

    /// Removes an entity from the model, detaching it from all its links, and
    /// returns its record.
    ///
    /// Handles to the removed entity become stale: every later use of them
    /// returns an `EntityNotFound` error.
    pub fn remove_entity<T: Entity>(&mut self, id: Id<T>) -> Result<Record, Error> {
        self.check_class(id.index(), T::CLASS)?;
        self.remove_record(id.index())
    }

    /// Updates an entity in place, and returns the result of `f`.
    ///
    /// The entity's `uri` can be changed by `f`, e.g. by assigning a whole new
    /// record, and the entity is then found under its new `uri`.  Returns an
    /// error if the new `uri` is empty or taken by another entity, and leaves
    /// the entity as it was before `f` ran.
    pub fn update<T: Entity, R>(
        &mut self,
        id: Id<T>,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, Error> {
        self.check_class(id.index(), T::CLASS)?;
        let index = id.index();
        let previous = self.live_record(index)?.clone();

        let entity = self
            .record_mut(index)
            .and_then(T::from_record_mut)
            .ok_or_else(|| {
                Error::entity_not_found(format!("Entity with index {} not found.", index.index()))
            })?;
        let result = f(entity);

        let uri = self.live_record(index)?.uri().to_string();
        if uri == previous.uri() {
            return Ok(result);
        }
        if let Err(err) = self.reindex(index, previous.uri(), &uri) {
            if let Some(record) = self.record_mut(index) {
                *record = previous;
            }
            return Err(err);
        }
        Ok(result)
    }

    /// Moves the entity at `index` from `old_uri` to `new_uri` in the uri
    /// index.
    fn reindex(&mut self, index: NodeIndex, old_uri: &str, new_uri: &str) -> Result<(), Error> {
        if new_uri.is_empty() {
            return Err(Error::invalid_entity(format!(
                "Entity {old_uri} can't be given an empty uri."
            )));
        }
        if self.uri_indices.contains_key(new_uri) {
            return Err(Error::duplicate_entity(format!(
                "Entity with uri {new_uri} already exists."
            )));
        }
        self.uri_indices.remove(old_uri);
        self.uri_indices.insert(new_uri.to_string(), index);
        tracing::debug!("Renamed entity {} to {}.", old_uri, new_uri);
        Ok(())
    }

    fn insert_record(&mut self, mut record: Record) -> Result<NodeIndex, Error> {
        if record.uri().is_empty() {
            if !self.config.generate_missing_uris {
                return Err(Error::invalid_entity(format!(
                    "{} has an empty uri.",
                    record.class()
                )));
            }
            let uri = Uuid::new_v4().to_string();
            tracing::debug!("Generated uri {} for a new {}.", uri, record.class());
            record.identified_object_mut().set_uri(uri);
        }

        let uri = record.uri().to_string();
        if self.uri_indices.contains_key(&uri) {
            return Err(Error::duplicate_entity(format!(
                "Entity with uri {uri} already exists."
            )));
        }

        let index = self.graph.add_node(Some(record));
        self.uri_indices.insert(uri, index);
        Ok(index)
    }

    fn remove_record(&mut self, index: NodeIndex) -> Result<Record, Error> {
        self.live_record(index)?;
        self.detach_all(index);

        let record = self
            .graph
            .node_weight_mut(index)
            .and_then(Option::take)
            .ok_or_else(|| {
                Error::entity_not_found(format!(
                    "Entity with index {} not found.",
                    index.index()
                ))
            })?;
        self.uri_indices.remove(record.uri());
        tracing::debug!("Removed {} {}.", record.class(), record.uri());
        Ok(record)
    }
}

/// A builder for inserting an entity together with its initial links.
///
/// Links are validated as they are added, and the first error is reported
/// by [`finish`][EntityBuilder::finish], before anything is inserted.  The
/// links are made through the same protocol as later mutations, so an
/// entity built with links is indistinguishable from one that is inserted
/// and then linked.
pub struct EntityBuilder<'a, T> {
    model: &'a mut Model,
    entity: T,
    singles: Vec<(End, NodeIndex)>,
    collections: Vec<(End, Vec<NodeIndex>)>,
    error: Option<Error>,
}

impl<'a, T: Entity> EntityBuilder<'a, T> {
    /// Links the new entity to `value` through a to-one `end`.
    pub fn single<O, F>(mut self, end: ToOne<O, F>, value: Id<F>) -> Self
    where
        T: IsA<O>,
        O: Entity,
        F: Entity,
    {
        if self.error.is_none() {
            let end = end.end();
            match self.model.check_end(value.index(), end.mirror()) {
                Ok(()) => self.singles.push((end, value.index())),
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    /// Links the new entity to `values`, in order, through a to-many `end`.
    pub fn collection<O, F>(
        mut self,
        end: ToMany<O, F>,
        values: impl IntoIterator<Item = Id<F>>,
    ) -> Self
    where
        T: IsA<O>,
        O: Entity,
        F: Entity,
    {
        if self.error.is_none() {
            let end = end.end();
            let values: Vec<NodeIndex> = values.into_iter().map(|id| id.index()).collect();
            match self.model.check_members(end, &values) {
                Ok(()) => self.collections.push((end, values)),
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    /// Inserts the entity and makes its links.
    ///
    /// Returns the first error found while adding links, or the error from
    /// inserting the entity.  The model is left unchanged on error.
    pub fn finish(self) -> Result<Id<T>, Error> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let model = self.model;
        let index = model.insert_record(self.entity.into())?;

        if let Err(err) = make_links(model, index, &self.singles, &self.collections) {
            model.remove_record(index)?;
            return Err(err);
        }

        Ok(Id::new(index))
    }
}

fn make_links(
    model: &mut Model,
    index: NodeIndex,
    singles: &[(End, NodeIndex)],
    collections: &[(End, Vec<NodeIndex>)],
) -> Result<(), Error> {
    for (end, value) in singles {
        model.link_single(index, *end, Some(*value))?;
    }
    for (end, values) in collections {
        model.link_collection(index, *end, values)?;
    }
    Ok(())
}
