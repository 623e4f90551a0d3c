// License: MIT
// Copyright © 2026 The cim-production Authors

//! Hydro generation: reservoirs, hydro power plants, pumps and generating
//! units, together with their curves and schedules.

use crate::rdf::{RdfWriter, WriteRdf};

use super::base::{Curve, PowerSystemResource, RegularIntervalSchedule};
use super::enums::{HydroEnergyConversionKind, HydroPlantType};
use super::GeneratingUnit;

/// A generating unit whose prime mover is a hydraulic turbine (e.g. Francis,
/// Pelton, Kaplan).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HydroGeneratingUnit {
    pub unit: GeneratingUnit,
    /// Energy conversion capability for generating.
    pub energy_conversion_capability: HydroEnergyConversionKind,
    /// The equivalent cost of water that drives the hydro turbine, expressed
    /// as cost per volume.
    pub hydro_unit_water_cost: f64,
}

impl_entity!(HydroGeneratingUnit, unit);

impl WriteRdf for HydroGeneratingUnit {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::TAILBAY_LOSS_CURVE);
        w.references(Self::HYDRO_GENERATING_EFFICIENCY_CURVES);
        w.references(Self::MEMBER_OF_HYDRO_POWER_PLANT);
        w.references(Self::PENSTOCK_LOSS_CURVE);
        w.field(
            "HydroGeneratingUnit.energy_conversion_capability",
            &self.energy_conversion_capability,
        );
        w.field(
            "HydroGeneratingUnit.hydro_unit_water_cost",
            &self.hydro_unit_water_cost,
        );
        self.unit.write_layer(w);
    }
}

/// A hydro power station which can generate or pump.
///
/// When generating, the generator turbines receive their water from an upper
/// reservoir.  When pumping, the pumps receive their water from a lower
/// reservoir.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HydroPowerPlant {
    pub resource: PowerSystemResource,
    /// A code describing the type (or absence) of surge tank that is
    /// associated with the plant.
    pub surge_tank_code: String,
    /// Type and configuration of the plant's penstocks.
    pub penstock_type: String,
    pub hydro_plant_type: HydroPlantType,
    /// The plant's generating rating active power for rated head conditions.
    pub gen_rated_p: f64,
    /// The plant's rated gross head in meters.
    pub plant_rated_head: f64,
    /// Total plant discharge capacity in cubic meters per second.
    pub plant_discharge_capacity: f64,
    /// The level at which the surge tank spills.
    pub surge_tank_crest_level: f64,
    /// The plant's pumping rating active power for rated head conditions.
    pub pump_rated_p: f64,
    /// Water travel delay from tailbay to the next downstream hydro power
    /// station.
    pub discharge_travel_delay: f64,
}

impl_entity!(HydroPowerPlant, resource);

impl WriteRdf for HydroPowerPlant {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::CONTAIN_HYDRO_GENERATING_UNITS);
        w.references(Self::RESERVOIR);
        w.references(Self::CONTAIN_HYDRO_PUMPS);
        w.references(Self::GEN_SOURCE_PUMP_DISCHARGE);
        w.field("HydroPowerPlant.surge_tank_code", &self.surge_tank_code);
        w.field("HydroPowerPlant.penstock_type", &self.penstock_type);
        w.field("HydroPowerPlant.hydro_plant_type", &self.hydro_plant_type);
        w.field("HydroPowerPlant.gen_rated_p", &self.gen_rated_p);
        w.field("HydroPowerPlant.plant_rated_head", &self.plant_rated_head);
        w.field(
            "HydroPowerPlant.plant_discharge_capacity",
            &self.plant_discharge_capacity,
        );
        w.field(
            "HydroPowerPlant.surge_tank_crest_level",
            &self.surge_tank_crest_level,
        );
        w.field("HydroPowerPlant.pump_rated_p", &self.pump_rated_p);
        w.field(
            "HydroPowerPlant.discharge_travel_delay",
            &self.discharge_travel_delay,
        );
        self.resource.write_layer(w);
    }
}

/// A synchronous motor-driven pump, typically associated with a pumped
/// storage plant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HydroPump {
    pub resource: PowerSystemResource,
    /// The pumping discharge (m3/sec) under maximum head conditions.
    pub pump_disch_at_max_head: f64,
    /// The pumping power under maximum head conditions.
    pub pump_power_at_max_head: f64,
    /// The pumping power under minimum head conditions.
    pub pump_power_at_min_head: f64,
    /// The pumping discharge (m3/sec) under minimum head conditions.
    pub pump_disch_at_min_head: f64,
}

impl_entity!(HydroPump, resource);

impl WriteRdf for HydroPump {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::HYDRO_PUMP_OP_SCHEDULE);
        w.references(Self::MEMBER_OF_HYDRO_POWER_PLANT);
        w.field("HydroPump.pump_disch_at_max_head", &self.pump_disch_at_max_head);
        w.field("HydroPump.pump_power_at_max_head", &self.pump_power_at_max_head);
        w.field("HydroPump.pump_power_at_min_head", &self.pump_power_at_min_head);
        w.field("HydroPump.pump_disch_at_min_head", &self.pump_disch_at_min_head);
        self.resource.write_layer(w);
    }
}

/// A water storage facility within a hydro system, including ponds, lakes,
/// lagoons and rivers.
///
/// Reservoirs spill into each other through the self-referential
/// [`SPILLS_INTO`][Reservoir::SPILLS_INTO] /
/// [`SPILLS_FROM`][Reservoir::SPILLS_FROM] association.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reservoir {
    pub resource: PowerSystemResource,
    /// Type of spillway gate, including parameters.
    pub spill_way_gate_type: String,
    /// Spillway crest level above which water will spill.
    pub spillway_crest_level: f64,
    /// Total capacity of the reservoir.
    pub gross_capacity: f64,
    /// Full supply level, above which water will spill.
    pub full_supply_level: f64,
    /// The reservoir's energy storage rating for given head conditions.
    pub energy_storage_rating: f64,
    /// The spillway water travel delay to the next downstream reservoir.
    pub spill_travel_delay: f64,
    /// The flow capacity of the spillway in cubic meters per second.
    pub spillway_capacity: f64,
    /// River outlet works for riparian right releases or other purposes.
    pub river_outlet_works: String,
    /// Normal minimum operating level below which the penstocks will draw
    /// air.
    pub normal_min_operate_level: f64,
    /// The length of the spillway crest in meters.
    pub spillway_crest_length: f64,
    /// Storage volume between the full supply level and the normal minimum
    /// operating level.
    pub active_storage_capacity: f64,
}

impl_entity!(Reservoir, resource);

impl WriteRdf for Reservoir {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::INFLOW_FORECAST);
        w.references(Self::HYDRO_POWER_PLANTS);
        w.references(Self::TARGET_LEVEL_SCHEDULE);
        w.references(Self::SPILLS_INTO);
        w.references(Self::SPILLS_FROM);
        w.references(Self::LEVEL_VS_VOLUME_CURVE);
        w.references(Self::UPSTREAM_FROM);
        w.field("Reservoir.spill_way_gate_type", &self.spill_way_gate_type);
        w.field("Reservoir.spillway_crest_level", &self.spillway_crest_level);
        w.field("Reservoir.gross_capacity", &self.gross_capacity);
        w.field("Reservoir.full_supply_level", &self.full_supply_level);
        w.field("Reservoir.energy_storage_rating", &self.energy_storage_rating);
        w.field("Reservoir.spill_travel_delay", &self.spill_travel_delay);
        w.field("Reservoir.spillway_capacity", &self.spillway_capacity);
        w.field("Reservoir.river_outlet_works", &self.river_outlet_works);
        w.field(
            "Reservoir.normal_min_operate_level",
            &self.normal_min_operate_level,
        );
        w.field("Reservoir.spillway_crest_length", &self.spillway_crest_length);
        w.field(
            "Reservoir.active_storage_capacity",
            &self.active_storage_capacity,
        );
        self.resource.write_layer(w);
    }
}

/// Relationship between reservoir volume (Y-axis) and reservoir level
/// (X-axis).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelVsVolumeCurve {
    pub curve: Curve,
}

impl_entity!(LevelVsVolumeCurve, curve);

impl WriteRdf for LevelVsVolumeCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::RESERVOIR);
        self.curve.write_layer(w);
    }
}

/// Reservoir water level targets from advanced studies or "rule curves".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetLevelSchedule {
    pub curve: Curve,
    /// Low target level limit, below which the reservoir operation will be
    /// penalized.
    pub low_level_limit: f64,
    /// High target level limit, above which the reservoir operation will be
    /// penalized.
    pub high_level_limit: f64,
}

impl_entity!(TargetLevelSchedule, curve);

impl WriteRdf for TargetLevelSchedule {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::RESERVOIR);
        w.field("TargetLevelSchedule.low_level_limit", &self.low_level_limit);
        w.field("TargetLevelSchedule.high_level_limit", &self.high_level_limit);
        self.curve.write_layer(w);
    }
}

/// Natural water inflow to a reservoir, usually forecasted from predicted
/// rain and snowmelt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InflowForecast {
    pub schedule: RegularIntervalSchedule,
}

impl_entity!(InflowForecast, schedule);

impl WriteRdf for InflowForecast {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::RESERVOIR);
        self.schedule.write_layer(w);
    }
}

/// Relationship between unit efficiency in percent and unit output active
/// power for a given net head.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HydroGeneratingEfficiencyCurve {
    pub curve: Curve,
}

impl_entity!(HydroGeneratingEfficiencyCurve, curve);

impl WriteRdf for HydroGeneratingEfficiencyCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::HYDRO_GENERATING_UNIT);
        self.curve.write_layer(w);
    }
}

/// Relationship between penstock head loss and total discharge through the
/// penstock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PenstockLossCurve {
    pub curve: Curve,
}

impl_entity!(PenstockLossCurve, curve);

impl WriteRdf for PenstockLossCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::HYDRO_GENERATING_UNIT);
        self.curve.write_layer(w);
    }
}

/// Relationship between tailbay head loss height (Y-axis) and the total
/// discharge into the power station's tailbay (X-axis).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TailbayLossCurve {
    pub curve: Curve,
}

impl_entity!(TailbayLossCurve, curve);

impl WriteRdf for TailbayLossCurve {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::HYDRO_GENERATING_UNIT);
        self.curve.write_layer(w);
    }
}

/// The hydro pump's operator-approved current operating schedule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HydroPumpOpSchedule {
    pub schedule: RegularIntervalSchedule,
}

impl_entity!(HydroPumpOpSchedule, schedule);

impl WriteRdf for HydroPumpOpSchedule {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::HYDRO_PUMP);
        self.schedule.write_layer(w);
    }
}
