// License: MIT
// Copyright © 2026 The cim-production Authors

//! Plants that group thermal generating units.

use crate::rdf::{RdfWriter, WriteRdf};

use super::base::{PowerSystemResource, RegularIntervalSchedule};

/// A set of combustion turbines and steam turbines where the exhaust heat from
/// the combustion turbines is recovered to make steam for the steam turbines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombinedCyclePlant {
    pub resource: PowerSystemResource,
    /// The plant's active power output rating.
    pub comb_cycle_plant_rating: f64,
}

impl_entity!(CombinedCyclePlant, resource);

impl WriteRdf for CombinedCyclePlant {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::CONTAIN_THERMAL_GENERATING_UNITS);
        w.field(
            "CombinedCyclePlant.comb_cycle_plant_rating",
            &self.comb_cycle_plant_rating,
        );
        self.resource.write_layer(w);
    }
}

/// A set of thermal generating units for the production of electrical energy
/// and process steam.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CogenerationPlant {
    pub resource: PowerSystemResource,
    pub rated_p: f64,
    pub cogen_lp_steam_rating: f64,
    pub cogen_hp_sendout_rating: f64,
    pub cogen_hp_steam_rating: f64,
    pub cogen_lp_sendout_rating: f64,
}

impl_entity!(CogenerationPlant, resource);

impl WriteRdf for CogenerationPlant {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::STEAM_SENDOUT_SCHEDULE);
        w.references(Self::CONTAIN_THERMAL_GENERATING_UNITS);
        w.field("CogenerationPlant.rated_p", &self.rated_p);
        w.field(
            "CogenerationPlant.cogen_lpsteam_rating",
            &self.cogen_lp_steam_rating,
        );
        w.field(
            "CogenerationPlant.cogen_hpsendout_rating",
            &self.cogen_hp_sendout_rating,
        );
        w.field(
            "CogenerationPlant.cogen_hpsteam_rating",
            &self.cogen_hp_steam_rating,
        );
        w.field(
            "CogenerationPlant.cogen_lpsendout_rating",
            &self.cogen_lp_sendout_rating,
        );
        self.resource.write_layer(w);
    }
}

/// The cogeneration plant's steam sendout schedule in volume per time unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SteamSendoutSchedule {
    pub schedule: RegularIntervalSchedule,
}

impl_entity!(SteamSendoutSchedule, schedule);

impl WriteRdf for SteamSendoutSchedule {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::COGENERATION_PLANT);
        self.schedule.write_layer(w);
    }
}

/// Compressed air energy storage plant.
///
/// Serialized as `CAESPlant`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaesPlant {
    pub resource: PowerSystemResource,
    pub energy_storage_capacity: f64,
    /// The plant's gross rated generating capacity.
    pub rated_capacity_p: f64,
}

impl_entity!(CaesPlant, resource);

impl WriteRdf for CaesPlant {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::CONTAIN_AIR_COMPRESSOR);
        w.references(Self::CONTAIN_THERMAL_GENERATING_UNIT);
        w.field(
            "CAESPlant.energy_storage_capacity",
            &self.energy_storage_capacity,
        );
        w.field("CAESPlant.rated_capacity_p", &self.rated_capacity_p);
        self.resource.write_layer(w);
    }
}

/// Combustion turbine air compressor which is an integral part of a
/// compressed air energy storage plant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AirCompressor {
    pub resource: PowerSystemResource,
    pub air_compressor_rating: f64,
}

impl_entity!(AirCompressor, resource);

impl WriteRdf for AirCompressor {
    fn write_rdf(&self, w: &mut RdfWriter<'_>) {
        w.references(Self::MEMBER_OF_CAES_PLANT);
        w.field(
            "AirCompressor.air_compressor_rating",
            &self.air_compressor_rating,
        );
        self.resource.write_layer(w);
    }
}
