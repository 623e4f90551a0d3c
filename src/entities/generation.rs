// License: MIT
// Copyright © 2026 The cim-production Authors

//! Generating units, and the curves and schedules shared by all kinds of
//! generating units.

use crate::entity_traits::IsA;
use crate::rdf::{RdfWriter, WriteRdf};
use crate::{Entity, EntityClass};

use super::base::{Curve, Equipment, IdentifiedObject, RegularIntervalSchedule};
use super::enums::{GeneratorControlMode, GeneratorControlSource, GeneratorOperatingMode};
use super::{HydroGeneratingUnit, Record, ThermalGeneratingUnit};

/// A single or set of synchronous machines for converting mechanical power
/// into alternating-current power.
///
/// The specialised units ([`ThermalGeneratingUnit`], [`HydroGeneratingUnit`],
/// [`NuclearGeneratingUnit`], [`WindGeneratingUnit`]) embed a
/// `GeneratingUnit`, and can be used with every association end declared on
/// `GeneratingUnit`.
///
/// All numeric attributes default to `0.0`, flags to `false`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratingUnit {
    pub equipment: Equipment,
    /// The source of controls for the unit.
    pub gen_control_source: GeneratorControlSource,
    /// The operating mode for secondary control.
    pub gen_operating_mode: GeneratorOperatingMode,
    /// The unit control mode.
    pub gen_control_mode: GeneratorControlMode,
    /// Governor speed changer droop, in percent.
    pub governor_scd: f64,
    pub disp_reserve_flag: bool,
    pub step_change: f64,
    /// Time it takes to get the unit on-line, from the time that the prime
    /// mover mechanical power is applied.
    pub startup_time: f64,
    /// The economic active power basepoint for dispatchable units, or the
    /// fixed generation value otherwise.
    pub base_p: f64,
    /// The smallest control pulse the unit can respond to.
    pub control_pulse_low: f64,
    /// The nominal power of the unit.
    pub nominal_p: f64,
    /// Initial active power, from a power flow result.
    pub initial_p: f64,
    pub spin_reserve_ramp: f64,
    /// High limit for secondary (AGC) control.
    pub high_control_limit: f64,
    /// The planned unused capacity (spinning reserve) which can be used to
    /// support emergency load.
    pub alloc_spin_res_p: f64,
    pub raise_ramp_rate: f64,
    /// Economic participation factor.
    pub short_pf: f64,
    /// `1 / (1 - incremental transmission loss)`.
    pub penalty_factor: f64,
    /// The gross rated maximum capacity (book value).
    pub rated_gross_max_p: f64,
    /// Detail level of the generator model data.  Default: `0`.
    pub model_detail: i32,
    /// Low limit for secondary (AGC) control.
    pub low_control_limit: f64,
    /// The minimum operating active power limit the dispatcher can enter.
    pub min_operating_p: f64,
    /// The variable cost component of production per unit of active power.
    pub variable_cost: f64,
    /// Economic participation factor.
    pub normal_pf: f64,
    pub lower_ramp_rate: f64,
    /// The maximum operating active power limit the dispatcher can enter.
    pub max_operating_p: f64,
    /// Minimum time interval between unit shutdown and startup.
    pub minimum_off_time: f64,
    /// The initial startup cost incurred for each start of the unit.
    pub startup_cost: f64,
    pub fast_start_flag: bool,
    /// Economic participation factor.
    pub long_pf: f64,
    /// The gross rated minimum generation level at which the unit can safely
    /// operate while delivering power to the transmission grid.
    pub rated_gross_min_p: f64,
    /// Active power change for a control pulse of one second in the most
    /// responsive loading level of the unit.
    pub control_response_rate: f64,
    pub energy_min_p: f64,
    /// The rated gross maximum capacity minus the auxiliary power used by the
    /// plant.
    pub rated_net_max_p: f64,
    /// Governor motor position limit.
    pub governor_mpl: f64,
    /// Low economic active power limit.
    pub min_economic_p: f64,
    /// The efficiency of converting mechanical energy into electrical energy.
    pub efficiency: f64,
    /// Default: `0`.
    pub fuel_priority: i32,
    /// Spinning reserve is never considered greater than this value.
    pub maximum_allowable_spinning_reserve: f64,
    /// The planned unused capacity which can be used to support automatic
    /// control overruns.
    pub auto_cntrl_margin_p: f64,
    /// Economic participation factor.
    pub tie_line_pf: f64,
    /// The largest control pulse the unit can respond to.
    pub control_pulse_high: f64,
    /// Unit control error deadband.
    pub control_deadband: f64,
    /// Maximum high economic active power limit.
    pub max_economic_p: f64,
}

impl GeneratingUnit {
    /// Writes the references and attributes declared on `GeneratingUnit`.
    fn write_own(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::GEN_UNIT_OP_COST_CURVES);
        w.references(Self::GROSS_TO_NET_ACTIVE_POWER_CURVES);
        w.references(Self::GEN_UNIT_OP_SCHEDULE);
        w.field("GeneratingUnit.gen_control_source", &self.gen_control_source);
        w.field("GeneratingUnit.gen_operating_mode", &self.gen_operating_mode);
        w.field("GeneratingUnit.gen_control_mode", &self.gen_control_mode);
        w.field("GeneratingUnit.governor_scd", &self.governor_scd);
        w.field("GeneratingUnit.disp_reserve_flag", &self.disp_reserve_flag);
        w.field("GeneratingUnit.step_change", &self.step_change);
        w.field("GeneratingUnit.startup_time", &self.startup_time);
        w.field("GeneratingUnit.base_p", &self.base_p);
        w.field("GeneratingUnit.control_pulse_low", &self.control_pulse_low);
        w.field("GeneratingUnit.nominal_p", &self.nominal_p);
        w.field("GeneratingUnit.initial_p", &self.initial_p);
        w.field("GeneratingUnit.spin_reserve_ramp", &self.spin_reserve_ramp);
        w.field("GeneratingUnit.high_control_limit", &self.high_control_limit);
        w.field("GeneratingUnit.alloc_spin_res_p", &self.alloc_spin_res_p);
        w.field("GeneratingUnit.raise_ramp_rate", &self.raise_ramp_rate);
        w.field("GeneratingUnit.short_pf", &self.short_pf);
        w.field("GeneratingUnit.penalty_factor", &self.penalty_factor);
        w.field("GeneratingUnit.rated_gross_max_p", &self.rated_gross_max_p);
        w.field("GeneratingUnit.model_detail", &self.model_detail);
        w.field("GeneratingUnit.low_control_limit", &self.low_control_limit);
        w.field("GeneratingUnit.min_operating_p", &self.min_operating_p);
        w.field("GeneratingUnit.variable_cost", &self.variable_cost);
        w.field("GeneratingUnit.normal_pf", &self.normal_pf);
        w.field("GeneratingUnit.lower_ramp_rate", &self.lower_ramp_rate);
        w.field("GeneratingUnit.max_operating_p", &self.max_operating_p);
        w.field("GeneratingUnit.minimum_off_time", &self.minimum_off_time);
        w.field("GeneratingUnit.startup_cost", &self.startup_cost);
        w.field("GeneratingUnit.fast_start_flag", &self.fast_start_flag);
        w.field("GeneratingUnit.long_pf", &self.long_pf);
        w.field("GeneratingUnit.rated_gross_min_p", &self.rated_gross_min_p);
        w.field(
            "GeneratingUnit.control_response_rate",
            &self.control_response_rate,
        );
        w.field("GeneratingUnit.energy_min_p", &self.energy_min_p);
        w.field("GeneratingUnit.rated_net_max_p", &self.rated_net_max_p);
        w.field("GeneratingUnit.governor_mpl", &self.governor_mpl);
        w.field("GeneratingUnit.min_economic_p", &self.min_economic_p);
        w.field("GeneratingUnit.efficiency", &self.efficiency);
        w.field("GeneratingUnit.fuel_priority", &self.fuel_priority);
        w.field(
            "GeneratingUnit.maximum_allowable_spinning_reserve",
            &self.maximum_allowable_spinning_reserve,
        );
        w.field("GeneratingUnit.auto_cntrl_margin_p", &self.auto_cntrl_margin_p);
        w.field("GeneratingUnit.tie_line_pf", &self.tie_line_pf);
        w.field("GeneratingUnit.control_pulse_high", &self.control_pulse_high);
        w.field("GeneratingUnit.control_deadband", &self.control_deadband);
        w.field("GeneratingUnit.max_economic_p", &self.max_economic_p);
    }

    /// Writes the unit as an inherited layer of a specialised unit: the base
    /// layers first, then the `GeneratingUnit` fields.
    pub(crate) fn write_layer(&self, w: &mut RdfWriter<'_>) {
        self.equipment.write_layer(w);
        self.write_own(w);
    }
}

impl WriteRdf for GeneratingUnit {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        self.write_own(w);
        self.equipment.write_layer(w);
    }
}

impl AsRef<IdentifiedObject> for GeneratingUnit {
    fn as_ref(&self) -> &IdentifiedObject {
        self.equipment.as_ref()
    }
}

impl AsMut<IdentifiedObject> for GeneratingUnit {
    fn as_mut(&mut self) -> &mut IdentifiedObject {
        self.equipment.as_mut()
    }
}

impl Entity for GeneratingUnit {
    const CLASS: EntityClass = EntityClass::GeneratingUnit;

    fn identified_object(&self) -> &IdentifiedObject {
        self.equipment.as_ref()
    }

    fn identified_object_mut(&mut self) -> &mut IdentifiedObject {
        self.equipment.as_mut()
    }

    fn from_record(record: &Record) -> Option<&Self> {
        match record {
            Record::GeneratingUnit(unit) => Some(unit),
            Record::HydroGeneratingUnit(hydro) => Some(&hydro.unit),
            Record::NuclearGeneratingUnit(nuclear) => Some(&nuclear.unit),
            Record::ThermalGeneratingUnit(thermal) => Some(&thermal.unit),
            Record::WindGeneratingUnit(wind) => Some(&wind.unit),
            _ => None,
        }
    }

    fn from_record_mut(record: &mut Record) -> Option<&mut Self> {
        match record {
            Record::GeneratingUnit(unit) => Some(unit),
            Record::HydroGeneratingUnit(hydro) => Some(&mut hydro.unit),
            Record::NuclearGeneratingUnit(nuclear) => Some(&mut nuclear.unit),
            Record::ThermalGeneratingUnit(thermal) => Some(&mut thermal.unit),
            Record::WindGeneratingUnit(wind) => Some(&mut wind.unit),
            _ => None,
        }
    }
}

impl IsA<GeneratingUnit> for HydroGeneratingUnit {}
impl IsA<GeneratingUnit> for NuclearGeneratingUnit {}
impl IsA<GeneratingUnit> for ThermalGeneratingUnit {}
impl IsA<GeneratingUnit> for WindGeneratingUnit {}

/// A nuclear generating unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NuclearGeneratingUnit {
    pub unit: GeneratingUnit,
}

impl_entity!(NuclearGeneratingUnit, unit);

impl WriteRdf for NuclearGeneratingUnit {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        self.unit.write_layer(w);
    }
}

/// A wind driven generating unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindGeneratingUnit {
    pub unit: GeneratingUnit,
}

impl_entity!(WindGeneratingUnit, unit);

impl WriteRdf for WindGeneratingUnit {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        self.unit.write_layer(w);
    }
}

/// Relationship between unit operating cost (Y-axis) and unit output active
/// power (X-axis).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenUnitOpCostCurve {
    pub curve: Curve,
    /// Whether the curve is based on net (`true`) or gross (`false`) active
    /// power.
    pub is_net_gross_p: bool,
}

impl_entity!(GenUnitOpCostCurve, curve);

impl WriteRdf for GenUnitOpCostCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::GENERATING_UNIT);
        w.field("GenUnitOpCostCurve.is_net_gross_p", &self.is_net_gross_p);
        self.curve.write_layer(w);
    }
}

/// Relationship between the generating unit's gross active power output
/// (X-axis) and its net active power output (Y-axis).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GrossToNetActivePowerCurve {
    pub curve: Curve,
}

impl_entity!(GrossToNetActivePowerCurve, curve);

impl WriteRdf for GrossToNetActivePowerCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::GENERATING_UNIT);
        self.curve.write_layer(w);
    }
}

/// The generating unit's operator-approved current operating schedule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenUnitOpSchedule {
    pub schedule: RegularIntervalSchedule,
}

impl_entity!(GenUnitOpSchedule, schedule);

impl WriteRdf for GenUnitOpSchedule {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::GENERATING_UNIT);
        self.schedule.write_layer(w);
    }
}
