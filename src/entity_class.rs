// License: MIT
// Copyright © 2026 The cim-production Authors

//! This module defines the `EntityClass` enum, which represents the schema
//! class of an entity.

use std::fmt::Display;

/// Represents the schema class of an entity in the production package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityClass {
    AirCompressor,
    CaesPlant,
    CogenerationPlant,
    CombinedCyclePlant,
    EmissionAccount,
    EmissionCurve,
    FossilFuel,
    FuelAllocationSchedule,
    GenUnitOpCostCurve,
    GenUnitOpSchedule,
    GeneratingUnit,
    GrossToNetActivePowerCurve,
    HeatInputCurve,
    HeatRateCurve,
    HydroGeneratingEfficiencyCurve,
    HydroGeneratingUnit,
    HydroPowerPlant,
    HydroPump,
    HydroPumpOpSchedule,
    IncrementalHeatRateCurve,
    InflowForecast,
    LevelVsVolumeCurve,
    NuclearGeneratingUnit,
    PenstockLossCurve,
    Reservoir,
    ShutdownCurve,
    StartIgnFuelCurve,
    StartMainFuelCurve,
    StartRampCurve,
    StartupModel,
    SteamSendoutSchedule,
    TailbayLossCurve,
    TargetLevelSchedule,
    ThermalGeneratingUnit,
    WindGeneratingUnit,
}

impl EntityClass {
    /// Returns the class name, as used in serialized documents.
    pub fn name(&self) -> &'static str {
        match self {
            EntityClass::AirCompressor => "AirCompressor",
            EntityClass::CaesPlant => "CAESPlant",
            EntityClass::CogenerationPlant => "CogenerationPlant",
            EntityClass::CombinedCyclePlant => "CombinedCyclePlant",
            EntityClass::EmissionAccount => "EmissionAccount",
            EntityClass::EmissionCurve => "EmissionCurve",
            EntityClass::FossilFuel => "FossilFuel",
            EntityClass::FuelAllocationSchedule => "FuelAllocationSchedule",
            EntityClass::GenUnitOpCostCurve => "GenUnitOpCostCurve",
            EntityClass::GenUnitOpSchedule => "GenUnitOpSchedule",
            EntityClass::GeneratingUnit => "GeneratingUnit",
            EntityClass::GrossToNetActivePowerCurve => "GrossToNetActivePowerCurve",
            EntityClass::HeatInputCurve => "HeatInputCurve",
            EntityClass::HeatRateCurve => "HeatRateCurve",
            EntityClass::HydroGeneratingEfficiencyCurve => "HydroGeneratingEfficiencyCurve",
            EntityClass::HydroGeneratingUnit => "HydroGeneratingUnit",
            EntityClass::HydroPowerPlant => "HydroPowerPlant",
            EntityClass::HydroPump => "HydroPump",
            EntityClass::HydroPumpOpSchedule => "HydroPumpOpSchedule",
            EntityClass::IncrementalHeatRateCurve => "IncrementalHeatRateCurve",
            EntityClass::InflowForecast => "InflowForecast",
            EntityClass::LevelVsVolumeCurve => "LevelVsVolumeCurve",
            EntityClass::NuclearGeneratingUnit => "NuclearGeneratingUnit",
            EntityClass::PenstockLossCurve => "PenstockLossCurve",
            EntityClass::Reservoir => "Reservoir",
            EntityClass::ShutdownCurve => "ShutdownCurve",
            EntityClass::StartIgnFuelCurve => "StartIgnFuelCurve",
            EntityClass::StartMainFuelCurve => "StartMainFuelCurve",
            EntityClass::StartRampCurve => "StartRampCurve",
            EntityClass::StartupModel => "StartupModel",
            EntityClass::SteamSendoutSchedule => "SteamSendoutSchedule",
            EntityClass::TailbayLossCurve => "TailbayLossCurve",
            EntityClass::TargetLevelSchedule => "TargetLevelSchedule",
            EntityClass::ThermalGeneratingUnit => "ThermalGeneratingUnit",
            EntityClass::WindGeneratingUnit => "WindGeneratingUnit",
        }
    }

    /// Returns the class this class specialises, if it specialises another
    /// class of the production package.
    pub fn parent(&self) -> Option<EntityClass> {
        match self {
            EntityClass::HydroGeneratingUnit
            | EntityClass::NuclearGeneratingUnit
            | EntityClass::ThermalGeneratingUnit
            | EntityClass::WindGeneratingUnit => Some(EntityClass::GeneratingUnit),
            _ => None,
        }
    }

    /// Returns an iterator over this class and all the classes it
    /// specialises, starting with this class.
    pub fn lineage(&self) -> impl Iterator<Item = EntityClass> {
        std::iter::successors(Some(*self), |class| class.parent())
    }

    /// Returns true if this class is `other`, or a specialisation of it.
    pub fn is_a(&self, other: EntityClass) -> bool {
        self.lineage().any(|class| class == other)
    }
}

impl Display for EntityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
