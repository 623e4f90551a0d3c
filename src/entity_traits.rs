// License: MIT
// Copyright © 2026 The cim-production Authors

//! This module contains the traits implemented by every entity type of the
//! production package.

use crate::entities::{IdentifiedObject, Record};
use crate::EntityClass;

/**
This trait is implemented by every entity type that can be stored in a
[`Model`][crate::Model].

Read more about how entities are stored [here][crate#entities-and-handles].

Entity types are plain records: every scalar attribute is a public field with
a documented default, and the shared identity fields live in a composed
[`IdentifiedObject`] record.  Associations are not stored in the record; they
are managed by the model.

```ignore
let unit = GeneratingUnit {
    nominal_p: 250.0,
    fast_start_flag: true,
    ..GeneratingUnit::with_uri("unit-1")
};
assert_eq!(unit.uri(), "unit-1");
```

The `uri` lives in the innermost base record.  When a base record is given
explicitly, as for the specialised generating units, the `uri` must be set on
that record: the outer `..T::with_uri(..)` is overridden along with the rest of
the base record.

```ignore
let thermal = ThermalGeneratingUnit {
    unit: GeneratingUnit {
        nominal_p: 250.0,
        ..GeneratingUnit::with_uri("unit-2")
    },
    ..Default::default()
};
assert_eq!(thermal.uri(), "unit-2");
```
*/
pub trait Entity: Sized + Into<Record> + 'static {
    /// The schema class of the entity type.
    const CLASS: EntityClass;

    /// Returns the identity fields of the entity.
    fn identified_object(&self) -> &IdentifiedObject;

    /// Returns the identity fields of the entity, mutably.
    fn identified_object_mut(&mut self) -> &mut IdentifiedObject;

    /// Returns the entity stored in the given record, if the record holds an
    /// entity of this type or of a specialisation of it.
    fn from_record(record: &Record) -> Option<&Self>;

    /// Mutable version of [`from_record`][Entity::from_record].
    fn from_record_mut(record: &mut Record) -> Option<&mut Self>;

    /// Returns the `uri` of the entity, which is its `rdf:ID` in serialized
    /// documents.
    fn uri(&self) -> &str {
        self.identified_object().uri()
    }

    /// Creates a new entity with default attribute values and the given `uri`.
    ///
    /// In struct update syntax, overriding the base record that holds the
    /// `uri` (e.g. `unit` of a `ThermalGeneratingUnit`) discards the `uri`
    /// set here.  Set it on the base record instead.
    fn with_uri(uri: impl Into<String>) -> Self
    where
        Self: Default,
    {
        let mut entity = Self::default();
        entity.identified_object_mut().set_uri(uri);
        entity
    }
}

/// Marks `Self` as usable wherever a `T` is expected.
///
/// Every entity type is a `T` of itself, and the specialisations of
/// [`GeneratingUnit`][crate::entities::GeneratingUnit] are also generating
/// units.  Association ends declared on a class accept handles of any of its
/// specialisations.
pub trait IsA<T: Entity>: Entity {}

impl<T: Entity> IsA<T> for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{GeneratingUnit, ThermalGeneratingUnit};

    #[test]
    fn test_with_uri_on_base_records() {
        let thermal = ThermalGeneratingUnit {
            unit: GeneratingUnit {
                nominal_p: 250.0,
                ..GeneratingUnit::with_uri("unit-2")
            },
            ..Default::default()
        };
        assert_eq!(thermal.uri(), "unit-2");
        assert_eq!(thermal.unit.nominal_p, 250.0);

        let overridden = ThermalGeneratingUnit {
            unit: GeneratingUnit {
                nominal_p: 250.0,
                ..Default::default()
            },
            ..ThermalGeneratingUnit::with_uri("unit-3")
        };
        assert_eq!(overridden.uri(), "");
    }
}
