// License: MIT
// Copyright © 2026 The cim-production Authors

//! Enumerated attribute types of the production package.

use std::fmt::Display;
use std::str::FromStr;

use crate::rdf::RdfValue;
use crate::Error;

/// A macro for defining an enumerated attribute type, together with its
/// `Default`, `Display` and `FromStr` implementations.
///
/// The first variant is the designated default.  Values are displayed and
/// parsed as their schema literals.
macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $first:ident => $first_literal:literal
            $(, $variant:ident => $literal:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $first,
            $($variant,)*
        }

        impl $name {
            /// All values, in schema order.
            pub const ALL: &'static [$name] = &[$name::$first, $($name::$variant,)*];

            /// Returns the schema literal of the value.
            pub fn literal(&self) -> &'static str {
                match self {
                    $name::$first => $first_literal,
                    $($name::$variant => $literal,)*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$first
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.literal())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .find(|value| value.literal() == s)
                    .copied()
                    .ok_or_else(|| {
                        Error::invalid_literal(format!(
                            "{:?} is not a valid {} value.",
                            s,
                            stringify!($name)
                        ))
                    })
            }
        }

        impl RdfValue for $name {
            fn write_value(&self, out: &mut String) {
                out.push_str(self.literal());
            }
        }
    };
}

schema_enum!(
    /// The type of a fuel.
    FuelType {
        Coal => "coal",
        Lignite => "lignite",
        Gas => "gas",
        Oil => "oil",
    }
);

schema_enum!(
    /// The type of an emission, which also gives the production rate
    /// measurement unit.
    EmissionType {
        Chlorine => "chlorine",
        CarbonDioxide => "carbon_dioxide",
        CarbonDisulfide => "carbon_disulfide",
        HydrogenSulfide => "hydrogen_sulfide",
        SulfurDioxide => "sulfur_dioxide",
        NitrogenOxide => "nitrogen_oxide",
    }
);

schema_enum!(
    /// The source of an emission value.
    EmissionValueSource {
        Calculated => "calculated",
        Measured => "measured",
    }
);

schema_enum!(
    /// The source of controls for a generating unit.
    GeneratorControlSource {
        Unavailable => "unavailable",
        OnAgc => "on_agc",
        OffAgc => "off_agc",
        PlantControl => "plant_control",
    }
);

schema_enum!(
    /// The operating mode of a generating unit for secondary control.
    GeneratorOperatingMode {
        Manual => "manual",
        Reg => "reg",
        Off => "off",
        Edc => "edc",
        Agc => "agc",
        Lfc => "lfc",
        Fixed => "fixed",
        Mrn => "mrn",
    }
);

schema_enum!(
    /// The control mode of a generating unit.
    GeneratorControlMode {
        Setpoint => "setpoint",
        Pulse => "pulse",
    }
);

schema_enum!(
    /// The type of a hydro power plant.
    HydroPlantType {
        MinorStorage => "minor_storage",
        MajorStorage => "major_storage",
        PumpedStorage => "pumped_storage",
        RunOfRiver => "run_of_river",
    }
);

schema_enum!(
    /// The energy conversion capability of a hydro generating unit.
    HydroEnergyConversionKind {
        Generator => "generator",
        PumpAndGenerator => "pump_and_generator",
    }
);

schema_enum!(
    /// How the values between the points of a curve are interpreted.
    CurveStyle {
        ConstantYValue => "constant_y_value",
        StraightLineYValues => "straight_line_y_values",
        RampYValue => "ramp_y_value",
        Formula => "formula",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(FuelType::default(), FuelType::Coal);
        assert_eq!(EmissionType::default(), EmissionType::Chlorine);
        assert_eq!(
            GeneratorControlSource::default(),
            GeneratorControlSource::Unavailable
        );
        assert_eq!(
            GeneratorOperatingMode::default(),
            GeneratorOperatingMode::Manual
        );
        assert_eq!(GeneratorControlMode::default(), GeneratorControlMode::Setpoint);
        assert_eq!(HydroPlantType::default(), HydroPlantType::MinorStorage);
        assert_eq!(
            HydroEnergyConversionKind::default(),
            HydroEnergyConversionKind::Generator
        );
    }

    #[test]
    fn test_literals() -> Result<(), Error> {
        assert_eq!(GeneratorControlSource::OnAgc.to_string(), "on_agc");
        assert_eq!(
            "pump_and_generator".parse::<HydroEnergyConversionKind>()?,
            HydroEnergyConversionKind::PumpAndGenerator
        );
        assert_eq!("lfc".parse::<GeneratorOperatingMode>()?, GeneratorOperatingMode::Lfc);

        assert_eq!(
            "peat".parse::<FuelType>(),
            Err(Error::invalid_literal("\"peat\" is not a valid FuelType value."))
        );

        Ok(())
    }
}
