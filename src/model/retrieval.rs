// License: MIT
// Copyright © 2026 The cim-production Authors

//! Methods for retrieving entities and their links from a [`Model`].

use std::marker::PhantomData;

use crate::association::{ToMany, ToOne};
use crate::iterators::{Entities, Instances, Related};
use crate::{Entity, Error, Id, IsA, Model};

/// Entity and link retrieval.
impl Model {
    /// Returns the entity with the given handle.
    ///
    /// Returns an error if the entity was removed, or if the handle belongs to
    /// another model.
    pub fn get<T: Entity>(&self, id: Id<T>) -> Result<&T, Error> {
        let record = self.live_record(id.index())?;
        T::from_record(record).ok_or_else(|| {
            Error::class_mismatch(format!(
                "Entity {} is a {}, not a {}.",
                record.uri(),
                record.class(),
                T::CLASS
            ))
        })
    }

    /// Returns a handle to the entity with the given `uri`.
    ///
    /// Returns an error if there is no such entity, or if it is not a `T`.
    pub fn find<T: Entity>(&self, uri: &str) -> Result<Id<T>, Error> {
        let index = self.uri_indices.get(uri).copied().ok_or_else(|| {
            Error::entity_not_found(format!("Entity with uri {uri} not found."))
        })?;
        self.check_class(index, T::CLASS)?;
        Ok(Id::new(index))
    }

    /// Narrows a handle to a handle of a specialised class, e.g. a
    /// `GeneratingUnit` handle to a `ThermalGeneratingUnit` handle, if the
    /// entity is one.
    pub fn cast<T: Entity>(&self, id: Id<impl Entity>) -> Result<Id<T>, Error> {
        self.check_class(id.index(), T::CLASS)?;
        Ok(Id::new(id.index()))
    }

    /// Returns true if the handle refers to a live entity of this model.
    pub fn contains<T: Entity>(&self, id: Id<T>) -> bool {
        self.record(id.index())
            .and_then(T::from_record)
            .is_some()
    }

    /// Returns the number of entities in the model.
    pub fn len(&self) -> usize {
        self.uri_indices.len()
    }

    /// Returns true if the model has no entities.
    pub fn is_empty(&self) -> bool {
        self.uri_indices.is_empty()
    }

    /// Returns an iterator over all entities in the model, in insertion
    /// order.
    pub fn entities(&self) -> Entities<'_> {
        Entities {
            graph: &self.graph,
            iter: self.graph.node_indices(),
        }
    }

    /// Returns an iterator over handles to all entities of type `T` in the
    /// model, including specialisations of `T`.
    pub fn instances<T: Entity>(&self) -> Instances<'_, T> {
        Instances {
            graph: &self.graph,
            iter: self.graph.node_indices(),
            marker: PhantomData,
        }
    }

    /// Returns the entity linked to `owner` through a to-one `end`, if any.
    pub fn single<S, O, F>(&self, end: ToOne<O, F>, owner: Id<S>) -> Result<Option<Id<F>>, Error>
    where
        S: IsA<O>,
        O: Entity,
        F: Entity,
    {
        let end = end.end();
        self.check_end(owner.index(), end)?;
        Ok(self.partners(owner.index(), end).first().copied().map(Id::new))
    }

    /// Returns an iterator over the entities linked to `owner` through a
    /// to-many `end`, in the order they were linked.
    pub fn collection<S, O, F>(&self, end: ToMany<O, F>, owner: Id<S>) -> Result<Related<F>, Error>
    where
        S: IsA<O>,
        O: Entity,
        F: Entity,
    {
        let end = end.end();
        self.check_end(owner.index(), end)?;
        Ok(Related {
            iter: self.partners(owner.index(), end).into_iter(),
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        FossilFuel, FuelType, GeneratingUnit, HydroGeneratingUnit, Record, Reservoir,
        ThermalGeneratingUnit, WindGeneratingUnit,
    };
    use crate::model::test_utils::TestModel;

    #[test]
    fn test_get() -> Result<(), Error> {
        let mut model = Model::default();
        let fuel = model.insert(FossilFuel {
            fossil_fuel_type: FuelType::Gas,
            fuel_cost: 12.5,
            ..FossilFuel::with_uri("ff")
        })?;

        assert_eq!(model.get(fuel)?.fossil_fuel_type, FuelType::Gas);

        model.update(fuel, |entity| {
            entity.fuel_cost = 13.0;
            entity.identified_object.name = String::from("Gas");
        })?;
        assert_eq!(model.get(fuel)?.fuel_cost, 13.0);
        assert_eq!(model.get(fuel)?.identified_object.name, "Gas");
        assert_eq!(model.get(fuel)?.uri(), "ff");

        Ok(())
    }

    #[test]
    fn test_find_and_cast() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let thermal = tm.entity::<ThermalGeneratingUnit>()?;
        let reservoir = tm.entity::<Reservoir>()?;
        let model = &tm.model;

        assert_eq!(
            model.find::<ThermalGeneratingUnit>("ThermalGeneratingUnit_1")?,
            thermal
        );
        let unit = model.find::<GeneratingUnit>("ThermalGeneratingUnit_1")?;
        assert_eq!(unit, thermal.upcast());
        assert_eq!(model.cast::<ThermalGeneratingUnit>(unit)?, thermal);
        assert_eq!(
            model.cast::<HydroGeneratingUnit>(unit),
            Err(Error::class_mismatch(
                "Entity ThermalGeneratingUnit_1 is a ThermalGeneratingUnit, \
                 not a HydroGeneratingUnit."
            ))
        );
        assert_eq!(
            model.find::<GeneratingUnit>("Reservoir_2"),
            Err(Error::class_mismatch(
                "Entity Reservoir_2 is a Reservoir, not a GeneratingUnit."
            ))
        );
        assert_eq!(
            model.find::<Reservoir>("Reservoir_3"),
            Err(Error::entity_not_found("Entity with uri Reservoir_3 not found."))
        );
        assert!(model.contains(reservoir));

        Ok(())
    }

    #[test]
    fn test_entities() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let wind = tm.entity::<WindGeneratingUnit>()?;
        let _reservoir = tm.entity::<Reservoir>()?;
        let unit = tm.entity::<GeneratingUnit>()?;
        let hydro = tm.entity::<HydroGeneratingUnit>()?;

        assert!(tm.model.entities().map(Record::uri).eq([
            "WindGeneratingUnit_1",
            "Reservoir_2",
            "GeneratingUnit_3",
            "HydroGeneratingUnit_4",
        ]));
        assert!(tm
            .model
            .instances::<GeneratingUnit>()
            .eq([wind.upcast(), unit, hydro.upcast()]));
        assert!(tm.model.instances::<HydroGeneratingUnit>().eq([hydro]));

        tm.model.remove_entity(unit)?;
        assert_eq!(tm.model.len(), 3);
        assert_eq!(
            tm.uris(tm.model.instances::<GeneratingUnit>())?,
            ["WindGeneratingUnit_1", "HydroGeneratingUnit_4"]
        );

        Ok(())
    }
}
