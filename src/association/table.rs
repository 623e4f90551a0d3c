// License: MIT
// Copyright © 2026 The cim-production Authors

//! The associations of the production package.

use super::{Cardinality, End, EndSpec, Side, ToMany, ToOne};
use crate::entities::*;
use crate::EntityClass;

macro_rules! cardinality {
    (one) => {
        Cardinality::One
    };
    (many) => {
        Cardinality::Many
    };
}

macro_rules! end_type {
    (one, $owner:ident, $far:ident) => {
        ToOne<$owner, $far>
    };
    (many, $owner:ident, $far:ident) => {
        ToMany<$owner, $far>
    };
}

macro_rules! end_value {
    (one, $association:ident, $side:ident) => {
        ToOne::new(End::new(Association::$association, Side::$side))
    };
    (many, $association:ident, $side:ident) => {
        ToMany::new(End::new(Association::$association, Side::$side))
    };
}

/// A macro for defining the `Association` enum from a table of associations,
/// and the associated end constants on the entity types.
///
/// Each row names the association, then its source and target ends as
/// `Owner::CONST (cardinality, "field")`.
macro_rules! associations {
    ($(
        $name:ident {
            $source:ident::$source_const:ident ($source_card:ident, $source_field:literal),
            $target:ident::$target_const:ident ($target_card:ident, $target_field:literal) $(,)?
        }
    ),* $(,)?) => {
        /// The associations between the entity types of the production
        /// package.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Association {
            $($name,)*
        }

        impl Association {
            /// All associations, in schema order.
            pub const ALL: &'static [Association] = &[$(Association::$name,)*];

            /// Returns the name of the association.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Association::$name => stringify!($name),)*
                }
            }

            /// Returns the ends of the association, source first.
            pub fn ends(&self) -> (End, End) {
                (End::new(*self, Side::Source), End::new(*self, Side::Target))
            }

            pub(crate) fn spec(&self, side: Side) -> EndSpec {
                match (self, side) {
                    $(
                        (Association::$name, Side::Source) => EndSpec {
                            class: EntityClass::$source,
                            field: $source_field,
                            cardinality: cardinality!($source_card),
                        },
                        (Association::$name, Side::Target) => EndSpec {
                            class: EntityClass::$target,
                            field: $target_field,
                            cardinality: cardinality!($target_card),
                        },
                    )*
                }
            }
        }

        $(
            impl $source {
                #[doc = concat!(
                    "The `", $source_field, "` end of the [`",
                    stringify!($name), "`][Association::", stringify!($name),
                    "] association, relating to [`", stringify!($target), "`]."
                )]
                pub const $source_const: end_type!($source_card, $source, $target) =
                    end_value!($source_card, $name, Source);
            }

            impl $target {
                #[doc = concat!(
                    "The `", $target_field, "` end of the [`",
                    stringify!($name), "`][Association::", stringify!($name),
                    "] association, relating to [`", stringify!($source), "`]."
                )]
                pub const $target_const: end_type!($target_card, $target, $source) =
                    end_value!($target_card, $name, Target);
            }
        )*
    };
}

associations! {
    ReservoirLevelVsVolumeCurves {
        Reservoir::LEVEL_VS_VOLUME_CURVE (many, "level_vs_volume_curve"),
        LevelVsVolumeCurve::RESERVOIR (one, "reservoir"),
    },
    FossilFuelAllocationSchedules {
        FossilFuel::FUEL_ALLOCATION_SCHEDULE (many, "fuel_allocation_schedule"),
        FuelAllocationSchedule::FOSSIL_FUEL (one, "fossil_fuel"),
    },
    ThermalUnitFossilFuels {
        ThermalGeneratingUnit::FOSSIL_FUELS (many, "fossil_fuels"),
        FossilFuel::THERMAL_GENERATING_UNIT (one, "thermal_generating_unit"),
    },
    CogenerationSteamSendout {
        CogenerationPlant::STEAM_SENDOUT_SCHEDULE (one, "steam_sendout_schedule"),
        SteamSendoutSchedule::COGENERATION_PLANT (one, "cogeneration_plant"),
    },
    ThermalUnitEmissionCurves {
        ThermalGeneratingUnit::EMISSION_CURVES (many, "emission_curves"),
        EmissionCurve::THERMAL_GENERATING_UNIT (one, "thermal_generating_unit"),
    },
    CombinedCycleThermalUnits {
        CombinedCyclePlant::CONTAIN_THERMAL_GENERATING_UNITS (many, "contain_thermal_generating_units"),
        ThermalGeneratingUnit::MEMBER_OF_COMBINED_CYCLE_PLANT (one, "member_of_combined_cycle_plant"),
    },
    StartupModelIgnitionFuelCurve {
        StartupModel::START_IGN_FUEL_CURVE (one, "start_ign_fuel_curve"),
        StartIgnFuelCurve::STARTUP_MODEL (one, "startup_model"),
    },
    HydroUnitEfficiencyCurves {
        HydroGeneratingUnit::HYDRO_GENERATING_EFFICIENCY_CURVES (many, "hydro_generating_efficiency_curves"),
        HydroGeneratingEfficiencyCurve::HYDRO_GENERATING_UNIT (one, "hydro_generating_unit"),
    },
    StartupModelRampCurve {
        StartupModel::START_RAMP_CURVE (one, "start_ramp_curve"),
        StartRampCurve::STARTUP_MODEL (one, "startup_model"),
    },
    GeneratingUnitOpCostCurves {
        GeneratingUnit::GEN_UNIT_OP_COST_CURVES (many, "gen_unit_op_cost_curves"),
        GenUnitOpCostCurve::GENERATING_UNIT (one, "generating_unit"),
    },
    GeneratingUnitGrossToNetCurves {
        GeneratingUnit::GROSS_TO_NET_ACTIVE_POWER_CURVES (many, "gross_to_net_active_power_curves"),
        GrossToNetActivePowerCurve::GENERATING_UNIT (one, "generating_unit"),
    },
    GeneratingUnitOpSchedule {
        GeneratingUnit::GEN_UNIT_OP_SCHEDULE (one, "gen_unit_op_schedule"),
        GenUnitOpSchedule::GENERATING_UNIT (one, "generating_unit"),
    },
    StartupModelMainFuelCurve {
        StartupModel::START_MAIN_FUEL_CURVE (one, "start_main_fuel_curve"),
        StartMainFuelCurve::STARTUP_MODEL (one, "startup_model"),
    },
    ThermalUnitStartupModel {
        ThermalGeneratingUnit::STARTUP_MODEL (one, "startup_model"),
        StartupModel::THERMAL_GENERATING_UNIT (one, "thermal_generating_unit"),
    },
    CaesPlantAirCompressor {
        CaesPlant::CONTAIN_AIR_COMPRESSOR (one, "contain_air_compressor"),
        AirCompressor::MEMBER_OF_CAES_PLANT (one, "member_of_caesplant"),
    },
    ThermalUnitHeatInputCurve {
        ThermalGeneratingUnit::HEAT_INPUT_CURVE (one, "heat_input_curve"),
        HeatInputCurve::THERMAL_GENERATING_UNIT (one, "thermal_generating_unit"),
    },
    CogenerationThermalUnits {
        CogenerationPlant::CONTAIN_THERMAL_GENERATING_UNITS (many, "contain_thermal_generating_units"),
        ThermalGeneratingUnit::MEMBER_OF_COGENERATION_PLANT (one, "member_of_cogeneration_plant"),
    },
    ThermalUnitShutdownCurve {
        ThermalGeneratingUnit::SHUTDOWN_CURVE (one, "shutdown_curve"),
        ShutdownCurve::THERMAL_GENERATING_UNIT (one, "thermal_generating_unit"),
    },
    ReservoirInflowForecasts {
        Reservoir::INFLOW_FORECAST (many, "inflow_forecast"),
        InflowForecast::RESERVOIR (one, "reservoir"),
    },
    ReservoirTargetLevelSchedule {
        Reservoir::TARGET_LEVEL_SCHEDULE (one, "target_level_schedule"),
        TargetLevelSchedule::RESERVOIR (one, "reservoir"),
    },
    ThermalUnitEmissionAccounts {
        ThermalGeneratingUnit::EMISSION_ACCOUNTS (many, "emmission_accounts"),
        EmissionAccount::THERMAL_GENERATING_UNIT (one, "thermal_generating_unit"),
    },
    HydroPumpSchedule {
        HydroPump::HYDRO_PUMP_OP_SCHEDULE (one, "hydro_pump_op_schedule"),
        HydroPumpOpSchedule::HYDRO_PUMP (one, "hydro_pump"),
    },
    ReservoirHydroPowerPlants {
        Reservoir::HYDRO_POWER_PLANTS (many, "hydro_power_plants"),
        HydroPowerPlant::RESERVOIR (one, "reservoir"),
    },
    ReservoirSpills {
        Reservoir::SPILLS_INTO (many, "spills_into"),
        Reservoir::SPILLS_FROM (one, "spills_from"),
    },
    ReservoirPumpDischarge {
        Reservoir::UPSTREAM_FROM (many, "upstream_from"),
        HydroPowerPlant::GEN_SOURCE_PUMP_DISCHARGE (one, "gen_source_pump_discharge"),
    },
    CaesPlantThermalUnit {
        CaesPlant::CONTAIN_THERMAL_GENERATING_UNIT (one, "contain_thermal_generating_unit"),
        ThermalGeneratingUnit::MEMBER_OF_CAES_PLANT (one, "member_of_caesplant"),
    },
    HydroUnitPenstockLossCurve {
        HydroGeneratingUnit::PENSTOCK_LOSS_CURVE (one, "penstock_loss_curve"),
        PenstockLossCurve::HYDRO_GENERATING_UNIT (one, "hydro_generating_unit"),
    },
    HydroPlantPumps {
        HydroPowerPlant::CONTAIN_HYDRO_PUMPS (many, "contain_hydro_pumps"),
        HydroPump::MEMBER_OF_HYDRO_POWER_PLANT (one, "member_of_hydro_power_plant"),
    },
    ThermalUnitFuelAllocationSchedules {
        ThermalGeneratingUnit::FUEL_ALLOCATION_SCHEDULES (many, "fuel_allocation_schedules"),
        FuelAllocationSchedule::THERMAL_GENERATING_UNIT (one, "thermal_generating_unit"),
    },
    ThermalUnitHeatRateCurve {
        ThermalGeneratingUnit::HEAT_RATE_CURVE (one, "heat_rate_curve"),
        HeatRateCurve::THERMAL_GENERATING_UNIT (one, "thermal_generating_unit"),
    },
    ThermalUnitIncrementalHeatRateCurve {
        ThermalGeneratingUnit::INCREMENTAL_HEAT_RATE_CURVE (one, "incremental_heat_rate_curve"),
        IncrementalHeatRateCurve::THERMAL_GENERATING_UNIT (one, "thermal_generating_unit"),
    },
    HydroUnitTailbayLossCurves {
        HydroGeneratingUnit::TAILBAY_LOSS_CURVE (many, "tailbay_loss_curve"),
        TailbayLossCurve::HYDRO_GENERATING_UNIT (one, "hydro_generating_unit"),
    },
    HydroPlantGeneratingUnits {
        HydroPowerPlant::CONTAIN_HYDRO_GENERATING_UNITS (many, "contain_hydro_generating_units"),
        HydroGeneratingUnit::MEMBER_OF_HYDRO_POWER_PLANT (one, "member_of_hydro_power_plant"),
    },
}
