// License: MIT
// Copyright © 2026 The cim-production Authors

//! The `Record` enum, which holds any entity stored in a model.

use crate::rdf::{RdfWriter, WriteRdf};
use crate::{Entity, EntityClass};

use super::*;

/// A macro for defining the `Record` enum over all entity types, with the
/// `From` conversions and dispatching methods.
macro_rules! records {
    ($($ty:ident),* $(,)?) => {
        /// An entity of any type, as stored in a [`Model`][crate::Model].
        #[derive(Clone, Debug, PartialEq)]
        pub enum Record {
            $($ty($ty),)*
        }

        impl Record {
            /// Returns the schema class of the stored entity.
            pub fn class(&self) -> EntityClass {
                match self {
                    $(Record::$ty(_) => <$ty as Entity>::CLASS,)*
                }
            }

            /// Returns the identity fields of the stored entity.
            pub fn identified_object(&self) -> &IdentifiedObject {
                match self {
                    $(Record::$ty(entity) => entity.identified_object(),)*
                }
            }

            pub(crate) fn identified_object_mut(&mut self) -> &mut IdentifiedObject {
                match self {
                    $(Record::$ty(entity) => entity.identified_object_mut(),)*
                }
            }
        }

        $(
            impl From<$ty> for Record {
                fn from(entity: $ty) -> Self {
                    Record::$ty(entity)
                }
            }
        )*

        impl WriteRdf for Record {
            fn write_rdf(&self, w: &mut RdfWriter<'_>) {
                match self {
                    $(Record::$ty(entity) => entity.write_rdf(w),)*
                }
            }
        }
    };
}

records!(
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
);

impl Record {
    /// Returns the `uri` of the stored entity.
    pub fn uri(&self) -> &str {
        self.identified_object().uri()
    }
}
