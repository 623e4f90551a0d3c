// License: MIT
// Copyright © 2026 The cim-production Authors

//! Thermal generating units, their fuels, emissions and the curves that
//! describe their startup, shutdown and heat input.

use crate::rdf::{RdfWriter, WriteRdf};

use super::base::{Curve, IdentifiedObject};
use super::enums::{EmissionType, EmissionValueSource, FuelType};
use super::GeneratingUnit;

/// A generating unit whose prime mover could be a steam turbine, combustion
/// turbine, or diesel engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThermalGeneratingUnit {
    pub unit: GeneratingUnit,
    /// Operating and maintenance cost for the unit.  Default: `0.0`.
    pub o_m_cost: f64,
}

impl_entity!(ThermalGeneratingUnit, unit);

impl WriteRdf for ThermalGeneratingUnit {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::HEAT_INPUT_CURVE);
        w.references(Self::HEAT_RATE_CURVE);
        w.references(Self::MEMBER_OF_COMBINED_CYCLE_PLANT);
        w.references(Self::STARTUP_MODEL);
        w.references(Self::FUEL_ALLOCATION_SCHEDULES);
        w.references(Self::MEMBER_OF_COGENERATION_PLANT);
        w.references(Self::INCREMENTAL_HEAT_RATE_CURVE);
        w.references(Self::FOSSIL_FUELS);
        w.references(Self::SHUTDOWN_CURVE);
        w.references(Self::EMISSION_CURVES);
        w.references(Self::MEMBER_OF_CAES_PLANT);
        w.references(Self::EMISSION_ACCOUNTS);
        w.field("ThermalGeneratingUnit.o_mcost", &self.o_m_cost);
        self.unit.write_layer(w);
    }
}

/// The fossil fuel consumed by the non-nuclear thermal generating units,
/// e.g. coal, oil or gas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FossilFuel {
    pub identified_object: IdentifiedObject,
    pub fossil_fuel_type: FuelType,
    /// Relative amount of the given type of fuel, when multiple fuels are
    /// being consumed.
    pub fuel_mixture: f64,
    /// The efficiency factor for the fuel (per unit) in terms of the
    /// effective energy absorbed.
    pub fuel_eff_factor: f64,
    /// The cost of fuel used for economic dispatching, including
    /// transportation and incremental maintenance cost.
    pub fuel_dispatch_cost: f64,
    /// The active power output level of the unit at which this fuel is
    /// switched on.
    pub high_breakpoint_p: f64,
    /// The cost in terms of heat value for the given type of fuel.
    pub fuel_cost: f64,
    /// The fuel's fraction of pollution credit per unit of heat content.
    pub fuel_sulfur: f64,
    /// The amount of heat per weight (or volume) of the given type of fuel.
    pub fuel_heat_content: f64,
    /// The active power output level of the unit at which this fuel is
    /// switched off.
    pub low_breakpoint_p: f64,
    /// Handling and processing cost associated with this fuel.
    pub fuel_handling_cost: f64,
}

impl_entity!(FossilFuel, identified_object);

impl WriteRdf for FossilFuel {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::FUEL_ALLOCATION_SCHEDULE);
        w.references(Self::THERMAL_GENERATING_UNIT);
        w.field("FossilFuel.fossil_fuel_type", &self.fossil_fuel_type);
        w.field("FossilFuel.fuel_mixture", &self.fuel_mixture);
        w.field("FossilFuel.fuel_eff_factor", &self.fuel_eff_factor);
        w.field("FossilFuel.fuel_dispatch_cost", &self.fuel_dispatch_cost);
        w.field("FossilFuel.high_breakpoint_p", &self.high_breakpoint_p);
        w.field("FossilFuel.fuel_cost", &self.fuel_cost);
        w.field("FossilFuel.fuel_sulfur", &self.fuel_sulfur);
        w.field("FossilFuel.fuel_heat_content", &self.fuel_heat_content);
        w.field("FossilFuel.low_breakpoint_p", &self.low_breakpoint_p);
        w.field("FossilFuel.fuel_handling_cost", &self.fuel_handling_cost);
        self.identified_object.write_layer(w);
    }
}

/// The amount of fuel of a given type which is allocated for consumption over
/// a specified period of time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FuelAllocationSchedule {
    pub curve: Curve,
    pub fuel_type: FuelType,
    /// The minimum amount of fuel that is allocated for consumption for the
    /// scheduled time period.
    pub min_fuel_allocation: f64,
    pub fuel_allocation_end_date: String,
    /// The maximum amount of fuel that is allocated for consumption for the
    /// scheduled time period.
    pub max_fuel_allocation: f64,
    pub fuel_allocation_start_date: String,
}

impl_entity!(FuelAllocationSchedule, curve);

impl WriteRdf for FuelAllocationSchedule {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::FOSSIL_FUEL);
        w.references(Self::THERMAL_GENERATING_UNIT);
        w.field("FuelAllocationSchedule.fuel_type", &self.fuel_type);
        w.field(
            "FuelAllocationSchedule.min_fuel_allocation",
            &self.min_fuel_allocation,
        );
        w.field(
            "FuelAllocationSchedule.fuel_allocation_end_date",
            &self.fuel_allocation_end_date,
        );
        w.field(
            "FuelAllocationSchedule.max_fuel_allocation",
            &self.max_fuel_allocation,
        );
        w.field(
            "FuelAllocationSchedule.fuel_allocation_start_date",
            &self.fuel_allocation_start_date,
        );
        self.curve.write_layer(w);
    }
}

/// Relationship between the unit's emission rate (Y-axis) and output active
/// power (X-axis) for a given type of emission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmissionCurve {
    pub curve: Curve,
    pub emission_type: EmissionType,
    /// The emission content per quantity of fuel burned.
    pub emission_content: f64,
    /// Whether the curve is based on net (`true`) or gross (`false`) active
    /// power.
    pub is_net_gross_p: bool,
}

impl_entity!(EmissionCurve, curve);

impl WriteRdf for EmissionCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::THERMAL_GENERATING_UNIT);
        w.field("EmissionCurve.emission_type", &self.emission_type);
        w.field("EmissionCurve.emission_content", &self.emission_content);
        w.field("EmissionCurve.is_net_gross_p", &self.is_net_gross_p);
        self.curve.write_layer(w);
    }
}

/// Accounts for tracking emissions usage and credits for thermal generating
/// units.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmissionAccount {
    pub curve: Curve,
    pub emission_value_source: EmissionValueSource,
    pub emission_type: EmissionType,
}

impl_entity!(EmissionAccount, curve);

impl WriteRdf for EmissionAccount {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::THERMAL_GENERATING_UNIT);
        w.field(
            "EmissionAccount.emission_value_source",
            &self.emission_value_source,
        );
        w.field("EmissionAccount.emission_type", &self.emission_type);
        self.curve.write_layer(w);
    }
}

/// Relationship between unit heat input for main fuel (Y1-axis) and
/// supplemental fuel (Y2-axis) versus unit output in active power (X-axis).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeatInputCurve {
    pub curve: Curve,
    /// Power output, auxiliary power offset adjustment factor.
    pub aux_power_offset: f64,
    /// Power output, auxiliary power multiplier adjustment factor.
    pub aux_power_mult: f64,
    /// Heat input, offset adjustment factor.
    pub heat_input_offset: f64,
    pub is_net_gross_p: bool,
    /// Heat input, efficiency adjustment factor.
    pub heat_input_eff: f64,
}

impl_entity!(HeatInputCurve, curve);

impl WriteRdf for HeatInputCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::THERMAL_GENERATING_UNIT);
        w.field("HeatInputCurve.aux_power_offset", &self.aux_power_offset);
        w.field("HeatInputCurve.aux_power_mult", &self.aux_power_mult);
        w.field("HeatInputCurve.heat_input_offset", &self.heat_input_offset);
        w.field("HeatInputCurve.is_net_gross_p", &self.is_net_gross_p);
        w.field("HeatInputCurve.heat_input_eff", &self.heat_input_eff);
        self.curve.write_layer(w);
    }
}

/// Relationship between unit heat rate per active power (Y-axis) and unit
/// output (X-axis).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeatRateCurve {
    pub curve: Curve,
    pub is_net_gross_p: bool,
}

impl_entity!(HeatRateCurve, curve);

impl WriteRdf for HeatRateCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::THERMAL_GENERATING_UNIT);
        w.field("HeatRateCurve.is_net_gross_p", &self.is_net_gross_p);
        self.curve.write_layer(w);
    }
}

/// Relationship between unit incremental heat rate and unit output in active
/// power.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncrementalHeatRateCurve {
    pub curve: Curve,
    pub is_net_gross_p: bool,
}

impl_entity!(IncrementalHeatRateCurve, curve);

impl WriteRdf for IncrementalHeatRateCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::THERMAL_GENERATING_UNIT);
        w.field("IncrementalHeatRateCurve.is_net_gross_p", &self.is_net_gross_p);
        self.curve.write_layer(w);
    }
}

/// Relationship between the rate at which a unit should be shut down and its
/// present gross output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShutdownCurve {
    pub curve: Curve,
    /// Fixed shutdown cost.
    pub shutdown_cost: f64,
    /// The date and time of the most recent generating unit shutdown.
    pub shutdown_date: String,
}

impl_entity!(ShutdownCurve, curve);

impl WriteRdf for ShutdownCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::THERMAL_GENERATING_UNIT);
        w.field("ShutdownCurve.shutdown_cost", &self.shutdown_cost);
        w.field("ShutdownCurve.shutdown_date", &self.shutdown_date);
        self.curve.write_layer(w);
    }
}

/// Unit start up characteristics depending on how long the unit has been off
/// line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StartupModel {
    pub identified_object: IdentifiedObject,
    /// The opportunity cost associated with the return in monetary unit.
    pub risk_factor_cost: f64,
    /// Total miscellaneous start up costs.
    pub startup_cost: f64,
    /// The unit's auxiliary active power consumption to maintain standby mode.
    pub stby_aux_p: f64,
    /// Minimum non-dispatchable time after shutdown, in hours.
    pub minimum_down_time: f64,
    /// Minimum non-dispatchable time after startup, in hours.
    pub minimum_run_time: f64,
    /// The amount of heat input per time unit required for hot standby
    /// operation.
    pub hot_standby_heat: f64,
    /// Incremental maintenance cost.
    pub incremental_maint_cost: f64,
    /// The date and time of the most recent generating unit startup.
    pub startup_date: String,
    /// Fixed maintenance cost.
    pub fixed_maint_cost: f64,
    /// Startup priority within control area where lower numbers indicate
    /// higher priorities.  Default: `0`.
    pub startup_priority: i32,
}

impl_entity!(StartupModel, identified_object);

impl WriteRdf for StartupModel {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::START_RAMP_CURVE);
        w.references(Self::START_MAIN_FUEL_CURVE);
        w.references(Self::THERMAL_GENERATING_UNIT);
        w.references(Self::START_IGN_FUEL_CURVE);
        w.field("StartupModel.risk_factor_cost", &self.risk_factor_cost);
        w.field("StartupModel.startup_cost", &self.startup_cost);
        w.field("StartupModel.stby_aux_p", &self.stby_aux_p);
        w.field("StartupModel.minimum_down_time", &self.minimum_down_time);
        w.field("StartupModel.minimum_run_time", &self.minimum_run_time);
        w.field("StartupModel.hot_standby_heat", &self.hot_standby_heat);
        w.field(
            "StartupModel.incremental_maint_cost",
            &self.incremental_maint_cost,
        );
        w.field("StartupModel.startup_date", &self.startup_date);
        w.field("StartupModel.fixed_maint_cost", &self.fixed_maint_cost);
        w.field("StartupModel.startup_priority", &self.startup_priority);
        self.identified_object.write_layer(w);
    }
}

/// The quantity of ignition fuel (Y-axis) used to restart and repay the
/// auxiliary power consumed versus the number of hours (X-axis) the unit was
/// off line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StartIgnFuelCurve {
    pub curve: Curve,
    pub ignition_fuel_type: FuelType,
}

impl_entity!(StartIgnFuelCurve, curve);

impl WriteRdf for StartIgnFuelCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::STARTUP_MODEL);
        w.field("StartIgnFuelCurve.ignition_fuel_type", &self.ignition_fuel_type);
        self.curve.write_layer(w);
    }
}

/// The quantity of main fuel (Y-axis) used to restart and repay the auxiliary
/// power consumed versus the number of hours (X-axis) the unit was off line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StartMainFuelCurve {
    pub curve: Curve,
    pub main_fuel_type: FuelType,
}

impl_entity!(StartMainFuelCurve, curve);

impl WriteRdf for StartMainFuelCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::STARTUP_MODEL);
        w.field("StartMainFuelCurve.main_fuel_type", &self.main_fuel_type);
        self.curve.write_layer(w);
    }
}

/// Rate in gross active power per minute (Y-axis) at which a unit can be
/// loaded versus the number of hours (X-axis) the unit was off line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StartRampCurve {
    pub curve: Curve,
    /// The startup ramp rate in gross for a unit that is on hot standby.
    pub hot_standby_ramp: f64,
}

impl_entity!(StartRampCurve, curve);

impl WriteRdf for StartRampCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::STARTUP_MODEL);
        w.field("StartRampCurve.hot_standby_ramp", &self.hot_standby_ramp);
        self.curve.write_layer(w);
    }
}
