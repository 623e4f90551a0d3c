// License: MIT
// Copyright © 2026 The cim-production Authors

/*!
# CIM Production

This is a library for the object model of the Production package of the
Common Information Model (CIM): generating units, their operating curves and
schedules, fuels, reservoirs, and the plants that group them.

Entities are linked to each other through bidirectional associations.  A link
is always visible from both of its ends: setting a generating unit's startup
model also makes the unit visible from the startup model, and moving a curve
to another generating unit removes it from the previous one.

## Entities and handles

The main struct is [`Model`], which owns all entities and the links between
them.  Entity types, found in the [`entities`] module, are plain records of
their scalar attributes and implement the [`Entity`] trait.  They don't hold
references to each other.

Inserting an entity into a model returns an [`Id`], a cheap, typed handle to
it.  Handles are used to read and update the entity, and to link it to other
entities.  When an entity is removed, its handles become stale, and any later
use of them returns an [`Error`].

The specialisations of `GeneratingUnit` can be used wherever a generating
unit is expected, through the [`IsA`] trait and [`Id::upcast`].

## Associations

Every association has two ends, exposed as constants on the entity types
that own them, for example [`Reservoir::SPILLS_INTO`][entities::Reservoir]
and `Reservoir::SPILLS_FROM`.  To-one ends are [`ToOne`] values and to-many
ends are [`ToMany`] values, so the compiler checks that only entities of the
right types are linked:

```ignore
let mut model = Model::default();
let unit = model.insert(ThermalGeneratingUnit::with_uri("unit-1"))?;
let curve = model.insert(GenUnitOpCostCurve::with_uri("curve-1"))?;

model.add(GeneratingUnit::GEN_UNIT_OP_COST_CURVES, unit, [curve])?;
assert_eq!(
    model.single(GenUnitOpCostCurve::GENERATING_UNIT, curve)?,
    Some(unit.upcast())
);
```

Entities can also be inserted together with their initial links, with
[`Model::build`].

## Serialization

Entities are rendered as RDF/XML with [`Model::serialize`],
[`Model::serialize_all`] and [`Model::to_rdf_string`].  Each entity becomes an
element carrying its scalar attributes, and one `rdf:resource` reference per
linked entity.
*/

mod association;
pub use association::{Association, Cardinality, End, ToMany, ToOne};

mod config;
pub use config::{ModelConfig, NS_PREFIX, NS_URI};

pub mod entities;

mod entity_class;
pub use entity_class::EntityClass;

mod entity_traits;
pub use entity_traits::{Entity, IsA};

mod error;
pub use error::Error;

mod id;
pub use id::Id;

mod model;
pub use model::{iterators, EntityBuilder, Model, SerializeOptions};

mod rdf;
