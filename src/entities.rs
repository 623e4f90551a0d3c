// License: MIT
// Copyright © 2026 The cim-production Authors

//! The entity types of the production package: generating units and their
//! curves and schedules, fuels, reservoirs and plants.

/// Implements [`Entity`][crate::Entity] for an entity type that is stored in
/// its own [`Record`] variant, and whose identity fields are reachable through
/// the given base record field.
macro_rules! impl_entity {
    ($ty:ident, $base:ident) => {
        impl crate::Entity for $ty {
            const CLASS: crate::EntityClass = crate::EntityClass::$ty;

            fn identified_object(&self) -> &crate::entities::IdentifiedObject {
                AsRef::<crate::entities::IdentifiedObject>::as_ref(&self.$base)
            }

            fn identified_object_mut(&mut self) -> &mut crate::entities::IdentifiedObject {
                AsMut::<crate::entities::IdentifiedObject>::as_mut(&mut self.$base)
            }

            fn from_record(record: &crate::entities::Record) -> Option<&Self> {
                match record {
                    crate::entities::Record::$ty(entity) => Some(entity),
                    _ => None,
                }
            }

            fn from_record_mut(record: &mut crate::entities::Record) -> Option<&mut Self> {
                match record {
                    crate::entities::Record::$ty(entity) => Some(entity),
                    _ => None,
                }
            }
        }
    };
}

mod base;
mod enums;
mod generation;
mod hydro;
mod plants;
mod record;
mod thermal;

pub use base::{Curve, Equipment, IdentifiedObject, PowerSystemResource, RegularIntervalSchedule};
pub use enums::{
    CurveStyle, EmissionType, EmissionValueSource, FuelType, GeneratorControlMode,
    GeneratorControlSource, GeneratorOperatingMode, HydroEnergyConversionKind, HydroPlantType,
};
pub use generation::{
    GenUnitOpCostCurve, GenUnitOpSchedule, GeneratingUnit, GrossToNetActivePowerCurve,
    NuclearGeneratingUnit, WindGeneratingUnit,
};
pub use hydro::{
    HydroGeneratingEfficiencyCurve, HydroGeneratingUnit, HydroPowerPlant, HydroPump,
    HydroPumpOpSchedule, InflowForecast, LevelVsVolumeCurve, PenstockLossCurve, Reservoir,
    TailbayLossCurve, TargetLevelSchedule,
};
pub use plants::{
    AirCompressor, CaesPlant, CogenerationPlant, CombinedCyclePlant, SteamSendoutSchedule,
};
pub use record::Record;
pub use thermal::{
    EmissionAccount, EmissionCurve, FossilFuel, FuelAllocationSchedule, HeatInputCurve,
    HeatRateCurve, IncrementalHeatRateCurve, ShutdownCurve, StartIgnFuelCurve,
    StartMainFuelCurve, StartRampCurve, StartupModel, ThermalGeneratingUnit,
};
