// License: MIT
// Copyright © 2026 The cim-production Authors

//! Methods for linking entities of a [`Model`] through association ends.
//!
//! Both ends of an association always agree, because a link is stored once:
//! setting an end on one entity also sets its mirror on the other.  An
//! entity can only be held by one partner through a to-one end, so linking
//! it to a new partner detaches it from the previous one first.
//!
//! All handles are checked before the first change, so a failed call leaves
//! the model unchanged.

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;

use crate::association::{End, ToMany, ToOne};
use crate::{Entity, Error, Id, IsA};

use super::Model;

/// Association mutation.
impl Model {
    /// Sets the entity linked to `owner` through a to-one `end`.
    ///
    /// The previous partner, if any, is unlinked first.  If the mirror of
    /// `end` is a to-one end as well, `value` is detached from its own
    /// previous partner.  `None` unlinks the current partner.  Setting the
    /// current partner again does nothing.
    pub fn set_single<S, O, F>(
        &mut self,
        end: ToOne<O, F>,
        owner: Id<S>,
        value: Option<Id<F>>,
    ) -> Result<(), Error>
    where
        S: IsA<O>,
        O: Entity,
        F: Entity,
    {
        self.link_single(owner.index(), end.end(), value.map(|id| id.index()))
    }

    /// Unlinks the entity linked to `owner` through a to-one `end`, if any.
    pub fn clear<S, O, F>(&mut self, end: ToOne<O, F>, owner: Id<S>) -> Result<(), Error>
    where
        S: IsA<O>,
        O: Entity,
        F: Entity,
    {
        self.link_single(owner.index(), end.end(), None)
    }

    /// Replaces the entities linked to `owner` through a to-many `end` with
    /// `values`, in the given order.
    ///
    /// Returns an error if an entity appears more than once in `values`.
    pub fn set_collection<S, O, F>(
        &mut self,
        end: ToMany<O, F>,
        owner: Id<S>,
        values: impl IntoIterator<Item = Id<F>>,
    ) -> Result<(), Error>
    where
        S: IsA<O>,
        O: Entity,
        F: Entity,
    {
        let values: Vec<NodeIndex> = values.into_iter().map(|id| id.index()).collect();
        self.link_collection(owner.index(), end.end(), &values)
    }

    /// Appends `values` to the entities linked to `owner` through a to-many
    /// `end`.
    ///
    /// Collections hold each entity at most once: an entity that is already
    /// linked to `owner` is not added again, and keeps its position.
    pub fn add<S, O, F>(
        &mut self,
        end: ToMany<O, F>,
        owner: Id<S>,
        values: impl IntoIterator<Item = Id<F>>,
    ) -> Result<(), Error>
    where
        S: IsA<O>,
        O: Entity,
        F: Entity,
    {
        let values: Vec<NodeIndex> = values.into_iter().map(|id| id.index()).collect();
        self.add_members(owner.index(), end.end(), &values)
    }

    /// Unlinks `values` from `owner` through a to-many `end`.
    ///
    /// Entities that are not linked to `owner` are ignored.
    pub fn remove<S, O, F>(
        &mut self,
        end: ToMany<O, F>,
        owner: Id<S>,
        values: impl IntoIterator<Item = Id<F>>,
    ) -> Result<(), Error>
    where
        S: IsA<O>,
        O: Entity,
        F: Entity,
    {
        let values: Vec<NodeIndex> = values.into_iter().map(|id| id.index()).collect();
        self.remove_members(owner.index(), end.end(), &values)
    }

    pub(crate) fn link_single(
        &mut self,
        owner: NodeIndex,
        end: End,
        value: Option<NodeIndex>,
    ) -> Result<(), Error> {
        self.check_end(owner, end)?;
        if let Some(value) = value {
            self.check_end(value, end.mirror())?;
        }

        let current = self.partners(owner, end);
        if current.first().copied() == value && current.len() <= 1 {
            tracing::debug!("{} of {} is already set.", end, self.uri_of(owner));
            return Ok(());
        }

        for old in current {
            self.unlink(owner, end, old);
        }
        if let Some(value) = value {
            self.claim(value, end.mirror());
            self.link(owner, end, value);
        }

        Ok(())
    }

    pub(crate) fn link_collection(
        &mut self,
        owner: NodeIndex,
        end: End,
        values: &[NodeIndex],
    ) -> Result<(), Error> {
        self.check_end(owner, end)?;
        self.check_members(end, values)?;

        for old in self.partners(owner, end) {
            self.unlink(owner, end, old);
        }
        for &value in values {
            self.claim(value, end.mirror());
            self.link(owner, end, value);
        }

        Ok(())
    }

    fn add_members(&mut self, owner: NodeIndex, end: End, values: &[NodeIndex]) -> Result<(), Error> {
        self.check_end(owner, end)?;
        for &value in values {
            self.check_end(value, end.mirror())?;
        }

        for &value in values {
            if self.find_link(owner, end, value).is_some() {
                tracing::debug!(
                    "{} is already in {} of {}.",
                    self.uri_of(value),
                    end,
                    self.uri_of(owner)
                );
                continue;
            }
            self.claim(value, end.mirror());
            self.link(owner, end, value);
        }

        Ok(())
    }

    fn remove_members(
        &mut self,
        owner: NodeIndex,
        end: End,
        values: &[NodeIndex],
    ) -> Result<(), Error> {
        self.check_end(owner, end)?;
        for &value in values {
            self.check_end(value, end.mirror())?;
        }

        for &value in values {
            if self.find_link(owner, end, value).is_none() {
                tracing::debug!(
                    "{} is not in {} of {}, nothing to remove.",
                    self.uri_of(value),
                    end,
                    self.uri_of(owner)
                );
                continue;
            }
            self.unlink(owner, end, value);
        }

        Ok(())
    }

    /// Checks that all `values` can be linked through the mirror of `end`,
    /// and that none of them is given twice.
    pub(crate) fn check_members(&self, end: End, values: &[NodeIndex]) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for &value in values {
            self.check_end(value, end.mirror())?;
            if !seen.insert(value) {
                return Err(Error::duplicate_member(format!(
                    "Entity {} is given more than once for {}.",
                    self.uri_of(value),
                    end
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::{
        GenUnitOpCostCurve, GeneratingUnit, HydroPowerPlant, LevelVsVolumeCurve, Reservoir,
        StartupModel, ThermalGeneratingUnit,
    };
    use crate::error::Error;
    use crate::model::test_utils::TestModel;
    use crate::{Entity, Model};

    #[test]
    fn test_add_remove() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let unit = tm.entity::<GeneratingUnit>()?;
        let curves = tm.entities::<GenUnitOpCostCurve>(3)?;
        let model = &mut tm.model;

        model.add(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, unit, [curves[0]])?;
        model.add(
            GeneratingUnit::GEN_UNIT_OP_COST_CURVES,
            unit,
            [curves[1], curves[2]],
        )?;
        assert!(model
            .collection(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, unit)?
            .eq(curves.iter().copied()));
        for &curve in &curves {
            assert_eq!(
                model.single(GenUnitOpCostCurve::GENERATING_UNIT, curve)?,
                Some(unit)
            );
        }

        // adding a present member keeps it once, at its position.
        model.add(
            GeneratingUnit::GEN_UNIT_OP_COST_CURVES,
            unit,
            [curves[0], curves[2], curves[2]],
        )?;
        assert!(model
            .collection(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, unit)?
            .eq(curves.iter().copied()));

        model.remove(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, unit, [curves[1]])?;
        assert!(model
            .collection(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, unit)?
            .eq([curves[0], curves[2]]));
        assert_eq!(
            model.single(GenUnitOpCostCurve::GENERATING_UNIT, curves[1])?,
            None
        );

        // removing an absent member does nothing.
        model.remove(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, unit, [curves[1]])?;
        assert!(model
            .collection(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, unit)?
            .eq([curves[0], curves[2]]));

        model.validate()
    }

    #[test]
    fn test_reciprocal_single() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let unit_1 = tm.entity::<ThermalGeneratingUnit>()?;
        let unit_2 = tm.entity::<ThermalGeneratingUnit>()?;
        let startup_1 = tm.entity::<StartupModel>()?;
        let startup_2 = tm.entity::<StartupModel>()?;
        let model = &mut tm.model;

        model.set_single(ThermalGeneratingUnit::STARTUP_MODEL, unit_1, Some(startup_1))?;
        assert_eq!(
            model.single(StartupModel::THERMAL_GENERATING_UNIT, startup_1)?,
            Some(unit_1)
        );

        // setting the same value again changes nothing.
        model.set_single(ThermalGeneratingUnit::STARTUP_MODEL, unit_1, Some(startup_1))?;
        assert_eq!(
            model.single(ThermalGeneratingUnit::STARTUP_MODEL, unit_1)?,
            Some(startup_1)
        );

        // replacing clears the mirror of the old partner.
        model.set_single(ThermalGeneratingUnit::STARTUP_MODEL, unit_1, Some(startup_2))?;
        assert_eq!(
            model.single(StartupModel::THERMAL_GENERATING_UNIT, startup_1)?,
            None
        );
        assert_eq!(
            model.single(StartupModel::THERMAL_GENERATING_UNIT, startup_2)?,
            Some(unit_1)
        );

        // linking the new partner elsewhere, from the other end, detaches it
        // from unit_1.
        model.set_single(StartupModel::THERMAL_GENERATING_UNIT, startup_2, Some(unit_2))?;
        assert_eq!(
            model.single(ThermalGeneratingUnit::STARTUP_MODEL, unit_1)?,
            None
        );
        assert_eq!(
            model.single(ThermalGeneratingUnit::STARTUP_MODEL, unit_2)?,
            Some(startup_2)
        );

        model.clear(ThermalGeneratingUnit::STARTUP_MODEL, unit_2)?;
        assert_eq!(
            model.single(StartupModel::THERMAL_GENERATING_UNIT, startup_2)?,
            None
        );
        model.clear(ThermalGeneratingUnit::STARTUP_MODEL, unit_2)?;

        model.validate()
    }

    #[test]
    fn test_self_referential() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let upper = tm.entity::<Reservoir>()?;
        let middle = tm.entity::<Reservoir>()?;
        let lower = tm.entity::<Reservoir>()?;
        let model = &mut tm.model;

        model.set_collection(Reservoir::SPILLS_INTO, upper, [middle, lower])?;
        assert!(model
            .collection(Reservoir::SPILLS_INTO, upper)?
            .eq([middle, lower]));
        assert_eq!(model.single(Reservoir::SPILLS_FROM, middle)?, Some(upper));
        assert_eq!(model.single(Reservoir::SPILLS_FROM, lower)?, Some(upper));
        assert_eq!(model.single(Reservoir::SPILLS_FROM, upper)?, None);
        assert!(model.collection(Reservoir::SPILLS_INTO, lower)?.next().is_none());

        // moving `lower` below `middle` takes it out of `upper`'s collection.
        model.set_single(Reservoir::SPILLS_FROM, lower, Some(middle))?;
        assert!(model.collection(Reservoir::SPILLS_INTO, upper)?.eq([middle]));
        assert!(model.collection(Reservoir::SPILLS_INTO, middle)?.eq([lower]));

        // a reservoir spilling into itself.
        model.add(Reservoir::SPILLS_INTO, lower, [lower])?;
        assert_eq!(model.single(Reservoir::SPILLS_FROM, lower)?, Some(lower));
        assert!(model.collection(Reservoir::SPILLS_INTO, middle)?.next().is_none());
        assert!(model.collection(Reservoir::SPILLS_INTO, lower)?.eq([lower]));

        model.validate()
    }

    #[test]
    fn test_set_collection() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let reservoir = tm.entity::<Reservoir>()?;
        let curves = tm.entities::<LevelVsVolumeCurve>(4)?;
        let model = &mut tm.model;

        model.set_collection(
            Reservoir::LEVEL_VS_VOLUME_CURVE,
            reservoir,
            [curves[2], curves[0], curves[1]],
        )?;
        assert!(model
            .collection(Reservoir::LEVEL_VS_VOLUME_CURVE, reservoir)?
            .eq([curves[2], curves[0], curves[1]]));

        // replacing the collection clears the mirror of dropped members.
        model.set_collection(
            Reservoir::LEVEL_VS_VOLUME_CURVE,
            reservoir,
            [curves[3], curves[0]],
        )?;
        assert!(model
            .collection(Reservoir::LEVEL_VS_VOLUME_CURVE, reservoir)?
            .eq([curves[3], curves[0]]));
        assert_eq!(model.single(LevelVsVolumeCurve::RESERVOIR, curves[1])?, None);
        assert_eq!(model.single(LevelVsVolumeCurve::RESERVOIR, curves[2])?, None);
        assert_eq!(
            model.single(LevelVsVolumeCurve::RESERVOIR, curves[3])?,
            Some(reservoir)
        );

        // clearing the single end filters the curve out of the collection.
        model.clear(LevelVsVolumeCurve::RESERVOIR, curves[3])?;
        assert!(model
            .collection(Reservoir::LEVEL_VS_VOLUME_CURVE, reservoir)?
            .eq([curves[0]]));

        // repeated members are rejected, and nothing changes.
        assert_eq!(
            model.set_collection(
                Reservoir::LEVEL_VS_VOLUME_CURVE,
                reservoir,
                [curves[1], curves[2], curves[1]],
            ),
            Err(Error::duplicate_member(
                "Entity LevelVsVolumeCurve_3 is given more than once for \
                 Reservoir.level_vs_volume_curve."
            ))
        );
        assert!(model
            .collection(Reservoir::LEVEL_VS_VOLUME_CURVE, reservoir)?
            .eq([curves[0]]));

        model.set_collection(Reservoir::LEVEL_VS_VOLUME_CURVE, reservoir, [])?;
        assert!(model
            .collection(Reservoir::LEVEL_VS_VOLUME_CURVE, reservoir)?
            .next().is_none());
        assert_eq!(model.single(LevelVsVolumeCurve::RESERVOIR, curves[0])?, None);

        model.validate()
    }

    #[test]
    fn test_move_between_owners() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let plant_1 = tm.entity::<HydroPowerPlant>()?;
        let plant_2 = tm.entity::<HydroPowerPlant>()?;
        let reservoir_1 = tm.entity::<Reservoir>()?;
        let reservoir_2 = tm.entity::<Reservoir>()?;
        let model = &mut tm.model;

        model.add(Reservoir::HYDRO_POWER_PLANTS, reservoir_1, [plant_1, plant_2])?;
        model.add(Reservoir::HYDRO_POWER_PLANTS, reservoir_2, [plant_2])?;

        assert!(model
            .collection(Reservoir::HYDRO_POWER_PLANTS, reservoir_1)?
            .eq([plant_1]));
        assert!(model
            .collection(Reservoir::HYDRO_POWER_PLANTS, reservoir_2)?
            .eq([plant_2]));
        assert_eq!(
            model.single(HydroPowerPlant::RESERVOIR, plant_2)?,
            Some(reservoir_2)
        );

        model.set_collection(Reservoir::HYDRO_POWER_PLANTS, reservoir_2, [plant_1, plant_2])?;
        assert!(model
            .collection(Reservoir::HYDRO_POWER_PLANTS, reservoir_1)?
            .next().is_none());

        // a plant can at the same time discharge into a reservoir through a
        // different association.
        model.set_single(
            HydroPowerPlant::GEN_SOURCE_PUMP_DISCHARGE,
            plant_1,
            Some(reservoir_1),
        )?;
        assert!(model
            .collection(Reservoir::UPSTREAM_FROM, reservoir_1)?
            .eq([plant_1]));
        assert_eq!(
            model.single(HydroPowerPlant::RESERVOIR, plant_1)?,
            Some(reservoir_2)
        );

        model.validate()
    }

    #[test]
    fn test_specialised_owners() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let thermal = tm.entity::<ThermalGeneratingUnit>()?;
        let curve = tm.entity::<GenUnitOpCostCurve>()?;
        let model = &mut tm.model;

        // a thermal unit can be used on ends of `GeneratingUnit`, from both
        // sides.
        model.set_single(GenUnitOpCostCurve::GENERATING_UNIT, curve, Some(thermal.upcast()))?;
        assert!(model
            .collection(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, thermal)?
            .eq([curve]));

        let unit = model
            .single(GenUnitOpCostCurve::GENERATING_UNIT, curve)?
            .ok_or_else(|| Error::entity_not_found("no unit"))?;
        assert_eq!(model.cast::<ThermalGeneratingUnit>(unit)?, thermal);
        assert_eq!(model.get(unit)?.uri(), "ThermalGeneratingUnit_1");

        Ok(())
    }

    #[test]
    fn test_invalid_handles() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let reservoir = tm.entity::<Reservoir>()?;
        let curve = tm.entity::<LevelVsVolumeCurve>()?;
        let stale = tm.entity::<LevelVsVolumeCurve>()?;
        tm.model
            .add(Reservoir::LEVEL_VS_VOLUME_CURVE, reservoir, [curve])?;
        tm.model.remove_entity(stale)?;

        // a failed call leaves the model unchanged.
        assert!(tm
            .model
            .set_collection(Reservoir::LEVEL_VS_VOLUME_CURVE, reservoir, [stale])
            .is_err());
        assert!(tm
            .model
            .add(Reservoir::LEVEL_VS_VOLUME_CURVE, reservoir, [curve, stale])
            .is_err());
        assert!(tm
            .model
            .collection(Reservoir::LEVEL_VS_VOLUME_CURVE, reservoir)?
            .eq([curve]));

        // a handle from another model, pointing at an entity of a different
        // class.
        let mut other = Model::default();
        let foreign = other.insert(GeneratingUnit::with_uri("gu"))?;
        assert_eq!(
            tm.model
                .add(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, foreign, []),
            Err(Error::class_mismatch(
                "Entity Reservoir_1 is a Reservoir, which has no \
                 GeneratingUnit.gen_unit_op_cost_curves end."
            ))
        );

        tm.model.validate()
    }
}
