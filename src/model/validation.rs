// License: MIT
// Copyright © 2026 The cim-production Authors

//! Methods for checking the internal consistency of a [`Model`].

use std::collections::HashSet;

use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::association::{Cardinality, End};
use crate::{Error, Model};

struct ModelValidator<'a> {
    model: &'a Model,
}

/// Consistency checks.
impl Model {
    /// Checks that the model is consistent:
    ///
    /// - every live entity is indexed by its `uri`, and nothing else is,
    /// - every link connects entities of the classes its association is
    ///   declared between,
    /// - no two links of an association connect the same pair of entities,
    /// - no entity has more than one partner on a to-one end.
    ///
    /// The linking operations keep these properties, so a failure indicates a
    /// bug in this library.
    pub fn validate(&self) -> Result<(), Error> {
        let validator = ModelValidator { model: self };

        validator.validate_uri_index()?;
        validator.validate_link_endpoints()?;
        validator.validate_cardinalities()?;

        Ok(())
    }
}

impl ModelValidator<'_> {
    fn validate_uri_index(&self) -> Result<(), Error> {
        let model = self.model;
        let mut live = 0;
        for index in model.graph.node_indices() {
            let Some(record) = model.record(index) else {
                continue;
            };
            live += 1;
            if model.uri_indices.get(record.uri()) != Some(&index) {
                return Err(Error::invalid_model(format!(
                    "Entity {} is not indexed by its uri.",
                    record.uri()
                )));
            }
        }
        if live != model.uri_indices.len() {
            return Err(Error::invalid_model(format!(
                "Uri index has {} entries, but the model has {} entities.",
                model.uri_indices.len(),
                live
            )));
        }
        Ok(())
    }

    fn validate_link_endpoints(&self) -> Result<(), Error> {
        let model = self.model;
        let mut seen = HashSet::new();
        for edge in model.graph.edge_references() {
            let association = edge.weight().association;
            let (source, target) = association.ends();

            for (index, end) in [(edge.source(), source), (edge.target(), target)] {
                let record = model.live_record(index).map_err(|_| {
                    Error::invalid_model(format!(
                        "Link {} of {} points to a removed entity.",
                        edge.id().index(),
                        association.name()
                    ))
                })?;
                if !end.declared_on(record.class()) {
                    return Err(Error::invalid_model(format!(
                        "Link {} of {} has a {} on its {} end.",
                        edge.id().index(),
                        association.name(),
                        record.class(),
                        end
                    )));
                }
            }

            if !seen.insert((association, edge.source(), edge.target())) {
                return Err(Error::invalid_model(format!(
                    "{} links {} to {} more than once.",
                    association.name(),
                    model.uri_of(edge.source()),
                    model.uri_of(edge.target())
                )));
            }
        }
        Ok(())
    }

    fn validate_cardinalities(&self) -> Result<(), Error> {
        let model = self.model;
        for index in model.graph.node_indices() {
            let Some(record) = model.record(index) else {
                continue;
            };
            let to_one = End::all()
                .filter(|end| end.cardinality() == Cardinality::One)
                .filter(|end| end.declared_on(record.class()));
            for end in to_one {
                let count = model.partners(index, end).len();
                if count > 1 {
                    return Err(Error::invalid_model(format!(
                        "Entity {} has {} partners on the to-one end {}.",
                        record.uri(),
                        count,
                        end
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::association::Association;
    use crate::entities::{GenUnitOpCostCurve, GeneratingUnit, Reservoir, ThermalGeneratingUnit};
    use crate::model::test_utils::TestModel;
    use crate::model::Link;
    use crate::Entity;

    #[test]
    fn test_valid_model() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let units = tm.entities::<ThermalGeneratingUnit>(2)?;
        let curves = tm.entities::<GenUnitOpCostCurve>(3)?;
        let reservoirs = tm.entities::<Reservoir>(2)?;
        let model = &mut tm.model;

        model.validate()?;

        model.set_collection(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, units[0], curves.clone())?;
        model.add(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, units[1], [curves[1]])?;
        model.add(Reservoir::SPILLS_INTO, reservoirs[0], [reservoirs[0], reservoirs[1]])?;
        model.remove_entity(curves[2])?;
        model.validate()?;

        Ok(())
    }

    #[test]
    fn test_broken_links() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let unit = tm.entity::<GeneratingUnit>()?;
        let curves = tm.entities::<GenUnitOpCostCurve>(1)?;
        let model = &mut tm.model;

        // a curve with two owners.
        let other = model.insert(GeneratingUnit::with_uri("other"))?;
        model.add(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, unit, curves.clone())?;
        model.graph.add_edge(
            other.index(),
            curves[0].index(),
            Link {
                association: Association::GeneratingUnitOpCostCurves,
                seq: 100,
            },
        );
        assert_eq!(
            model.validate(),
            Err(Error::invalid_model(
                "Entity GenUnitOpCostCurve_2 has 2 partners on the to-one end \
                 GenUnitOpCostCurve.generating_unit."
            ))
        );

        // a link from an entity of the wrong class.
        let mut tm = TestModel::new();
        let curve = tm.entity::<GenUnitOpCostCurve>()?;
        let model = &mut tm.model;
        let reservoir = model.insert(Reservoir::with_uri("r"))?;
        let edge = model.graph.add_edge(
            reservoir.index(),
            curve.index(),
            Link {
                association: Association::GeneratingUnitOpCostCurves,
                seq: 0,
            },
        );
        assert_eq!(
            model.validate(),
            Err(Error::invalid_model(format!(
                "Link {} of GeneratingUnitOpCostCurves has a Reservoir on its \
                 GeneratingUnit.gen_unit_op_cost_curves end.",
                edge.index()
            )))
        );

        Ok(())
    }

    #[test]
    fn test_duplicate_links() -> Result<(), Error> {
        let mut tm = TestModel::new();
        let reservoirs = tm.entities::<Reservoir>(2)?;
        let model = &mut tm.model;
        model.add(Reservoir::SPILLS_INTO, reservoirs[0], [reservoirs[1]])?;
        model.validate()?;

        let seq = model.next_seq;
        model.graph.add_edge(
            reservoirs[0].index(),
            reservoirs[1].index(),
            Link {
                association: Association::ReservoirSpills,
                seq,
            },
        );
        assert_eq!(
            model.validate(),
            Err(Error::invalid_model(
                "ReservoirSpills links Reservoir_1 to Reservoir_2 more than once."
            ))
        );

        Ok(())
    }

    #[test]
    fn test_broken_uri_index() -> Result<(), Error> {
        let mut tm = TestModel::new();
        tm.entity::<Reservoir>()?;
        let model = &mut tm.model;

        model.uri_indices.remove("Reservoir_1");
        assert_eq!(
            model.validate(),
            Err(Error::invalid_model(
                "Entity Reservoir_1 is not indexed by its uri."
            ))
        );

        Ok(())
    }
}
