// License: MIT
// Copyright © 2026 The cim-production Authors

//! Base records shared by the entity types.
//!
//! The schema's inheritance chains (`IdentifiedObject` → `Curve`,
//! `IdentifiedObject` → `PowerSystemResource` → `Equipment`, ...) are
//! expressed as composition: every entity embeds exactly one of these records.

use crate::rdf::RdfWriter;

use super::enums::CurveStyle;

/// Identity and naming fields common to all entities.
///
/// The `uri` is the entity's `rdf:ID`.  It can only be set when the entity is
/// created (see [`Entity::with_uri`][crate::Entity::with_uri]), because the
/// model indexes entities by it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdentifiedObject {
    uri: String,
    /// Default: empty.
    pub uuid: String,
    /// Master resource identifier.  Default: empty.
    pub m_rid: String,
    /// Default: empty.
    pub name: String,
    /// Default: empty.
    pub local_name: String,
    /// Default: empty.
    pub path_name: String,
    /// Default: empty.
    pub description: String,
    /// Default: empty.
    pub alias_name: String,
}

impl IdentifiedObject {
    /// Returns the `uri` of the object.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub(crate) fn set_uri(&mut self, uri: impl Into<String>) {
        self.uri = uri.into();
    }

    pub(crate) fn write_layer(&self, w: &mut RdfWriter<'_>) {
        w.field("Element.uuid", &self.uuid);
        w.field("IdentifiedObject.m_rid", &self.m_rid);
        w.field("IdentifiedObject.local_name", &self.local_name);
        w.field("IdentifiedObject.path_name", &self.path_name);
        w.field("IdentifiedObject.description", &self.description);
        w.field("IdentifiedObject.alias_name", &self.alias_name);
        w.field("IdentifiedObject.name", &self.name);
    }
}

/// A relationship between an independent variable (X-axis) and one or two
/// dependent variables (Y1-axis and Y2-axis).
///
/// Units and multipliers are kept as their schema literals, since their
/// enumerations belong to the domain package.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    pub identified_object: IdentifiedObject,
    /// Default: [`CurveStyle::ConstantYValue`].
    pub curve_style: CurveStyle,
    pub x_unit: String,
    pub x_multiplier: String,
    pub y1_unit: String,
    pub y1_multiplier: String,
    pub y2_unit: String,
    pub y2_multiplier: String,
}

impl Curve {
    pub(crate) fn write_layer(&self, w: &mut RdfWriter<'_>) {
        self.identified_object.write_layer(w);
        w.field("Curve.y2_unit", &self.y2_unit);
        w.field("Curve.y1_multiplier", &self.y1_multiplier);
        w.field("Curve.curve_style", &self.curve_style);
        w.field("Curve.y2_multiplier", &self.y2_multiplier);
        w.field("Curve.x_unit", &self.x_unit);
        w.field("Curve.y1_unit", &self.y1_unit);
        w.field("Curve.x_multiplier", &self.x_multiplier);
    }
}

/// A time schedule whose values are spaced by a fixed time step.
///
/// Also carries the fields of the schema's `BasicIntervalSchedule`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegularIntervalSchedule {
    pub identified_object: IdentifiedObject,
    pub start_time: String,
    pub value1_unit: String,
    pub value1_multiplier: String,
    pub value2_unit: String,
    pub value2_multiplier: String,
    /// The time between consecutive values, in seconds.  Default: `0.0`.
    pub time_step: f64,
    pub end_time: String,
}

impl RegularIntervalSchedule {
    pub(crate) fn write_layer(&self, w: &mut RdfWriter<'_>) {
        self.identified_object.write_layer(w);
        w.field("BasicIntervalSchedule.value1_unit", &self.value1_unit);
        w.field(
            "BasicIntervalSchedule.value2_multiplier",
            &self.value2_multiplier,
        );
        w.field(
            "BasicIntervalSchedule.value1_multiplier",
            &self.value1_multiplier,
        );
        w.field("BasicIntervalSchedule.value2_unit", &self.value2_unit);
        w.field("BasicIntervalSchedule.start_time", &self.start_time);
        w.field("RegularIntervalSchedule.time_step", &self.time_step);
        w.field("RegularIntervalSchedule.end_time", &self.end_time);
    }
}

/// A power system resource: plants, reservoirs, pumps and equipment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PowerSystemResource {
    pub identified_object: IdentifiedObject,
}

impl PowerSystemResource {
    pub(crate) fn write_layer(&self, w: &mut RdfWriter<'_>) {
        self.identified_object.write_layer(w);
    }
}

/// A physical device, electrical or mechanical.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equipment {
    pub power_system_resource: PowerSystemResource,
    /// Default: `false`.
    pub normally_in_service: bool,
}

impl Equipment {
    pub(crate) fn write_layer(&self, w: &mut RdfWriter<'_>) {
        self.power_system_resource.write_layer(w);
        w.field("Equipment.normal_ily_in_service", &self.normally_in_service);
    }
}

impl AsRef<IdentifiedObject> for IdentifiedObject {
    fn as_ref(&self) -> &IdentifiedObject {
        self
    }
}

impl AsMut<IdentifiedObject> for IdentifiedObject {
    fn as_mut(&mut self) -> &mut IdentifiedObject {
        self
    }
}

impl AsRef<IdentifiedObject> for Curve {
    fn as_ref(&self) -> &IdentifiedObject {
        &self.identified_object
    }
}

impl AsMut<IdentifiedObject> for Curve {
    fn as_mut(&mut self) -> &mut IdentifiedObject {
        &mut self.identified_object
    }
}

impl AsRef<IdentifiedObject> for RegularIntervalSchedule {
    fn as_ref(&self) -> &IdentifiedObject {
        &self.identified_object
    }
}

impl AsMut<IdentifiedObject> for RegularIntervalSchedule {
    fn as_mut(&mut self) -> &mut IdentifiedObject {
        &mut self.identified_object
    }
}

impl AsRef<IdentifiedObject> for PowerSystemResource {
    fn as_ref(&self) -> &IdentifiedObject {
        &self.identified_object
    }
}

impl AsMut<IdentifiedObject> for PowerSystemResource {
    fn as_mut(&mut self) -> &mut IdentifiedObject {
        &mut self.identified_object
    }
}

impl AsRef<IdentifiedObject> for Equipment {
    fn as_ref(&self) -> &IdentifiedObject {
        &self.power_system_resource.identified_object
    }
}

impl AsMut<IdentifiedObject> for Equipment {
    fn as_mut(&mut self) -> &mut IdentifiedObject {
        &mut self.power_system_resource.identified_object
    }
}
