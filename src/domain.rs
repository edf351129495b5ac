//! Decoded output records, one variant per record kind. A
//! `DomainRecord` is allocated once per data-block record and threaded
//! through every `ExtractFn`/`ReadFn` the active category's `Uap` calls;
//! each extractor only ever touches the variant its own category produces.
use crate::core::{Capped, Qualified, Tres};
use crate::time_fillup::MIDNIGHT;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position2d {
    pub x: i32,
    pub y: i32,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarPosition {
    pub rho_m: f64,
    pub theta_deg: f64,
}

/// Mode 3/A code, octal digits packed one per nibble.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mode3A {
    pub code: u16,
    pub validated: Tres,
    pub garbled: Tres,
    pub changed: Tres,
}

/// Mode C / flight level, in quarter flight levels as carried on the wire.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlightLevel {
    pub quarter_fl: i16,
    pub validated: Tres,
    pub garbled: Tres,
}

/// BDS register content, as lifted verbatim off a Mode S downlink (Cat048
/// I048/250, Cat021 MB data).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BdsRegister {
    pub data: [u8; 7],
    pub bds1: u8,
    pub bds2: u8,
}

/// Cat 008/034/002 "plot/radar service" style record: SOP/EOP markers,
/// polar window, processing status — anything that is not itself a target
/// report.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RadarServiceRecord {
    pub data_source_sac: Option<u8>,
    pub data_source_sic: Option<u8>,
    pub time_of_day: Option<u32>,
    pub message_type: Option<u8>,
    pub start_of_picture: bool,
    pub end_of_picture: bool,
    pub antenna_rotation_period_s: Option<f32>,
    pub polar_window: Option<[PolarPosition; 2]>,
    pub warning_error_conditions: Capped<u8, 16>,
}

/// I008/020 Vector Qualifier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VectorQualifier {
    pub system_coordinates: bool,
    pub intensity: u8,
    pub shading_22_5deg_units: u8,
    pub test_vector: bool,
    pub error_condition: bool,
}

/// I008/036 Sequence of Cartesian Vectors: one octet each of x, y, length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartesianVector {
    pub x: i8,
    pub y: i8,
    pub length: u8,
}

/// I008/034 Sequence of Polar Vectors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolarVector {
    pub start: u8,
    pub stop: u8,
    pub azimuth: u16,
}

/// I008/040 Contour Identifier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContourIdentifier {
    pub system_coordinates: bool,
    pub intensity: u8,
    pub fst_lst: u8,
    pub serial: u8,
}

/// I008/100 Processing Status.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessingStatus {
    pub scaling_factor: i8,
    pub reduction_stage: u8,
    pub processing_parameters: u16,
}

/// Cat 008 weather/vector record.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct WeatherVectorRecord {
    pub data_source_sac: Option<u8>,
    pub data_source_sic: Option<u8>,
    /// I008/010, the combined `(sac << 8) | sic` data source identifier.
    pub data_source_identifier: Option<u16>,
    pub message_type: Option<u8>,
    pub vector_qualifier: Option<VectorQualifier>,
    pub cartesian_vectors: Capped<CartesianVector, 16>,
    pub polar_vectors: Capped<PolarVector, 16>,
    pub contour_identifier: Option<ContourIdentifier>,
    pub contour_points: Capped<Position2d, 16>,
    pub time_of_day: Option<u32>,
    pub processing_status: Option<ProcessingStatus>,
    pub station_configuration_status: Capped<u8, 16>,
    pub total_number_of_items: Option<u16>,
    pub total_x: Option<i32>,
    pub total_y: Option<i32>,
    /// Raw bytes of the SPF (Special Purpose Field), length octet excluded.
    pub spf_raw: Capped<u8, 16>,
    /// Raw bytes of the REF (Reserved Expansion Field), length octet
    /// excluded.
    pub ref_raw: Capped<u8, 16>,
}

impl WeatherVectorRecord {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Cat 048 monoradar target report — the richest full-fidelity record.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RadarTargetRecord {
    pub data_source_sac: Option<u8>,
    pub data_source_sic: Option<u8>,
    pub time_of_day: Option<u32>,
    pub target_report_descriptor: Option<u16>,
    pub polar_position: Option<PolarPosition>,
    pub cartesian_position: Option<Position2d>,
    pub mode_3a: Option<Mode3A>,
    pub flight_level: Option<FlightLevel>,
    pub radar_plot_characteristics: Capped<(u8, i32), 8>,
    pub aircraft_address: Option<u32>,
    pub aircraft_identification: Option<[char; 8]>,
    pub bds_registers: Capped<BdsRegister, 8>,
    pub track_number: Option<u16>,
    pub track_velocity: Option<PolarPosition>,
    pub track_status: Option<u16>,
    pub warning_error_conditions: Capped<u8, 8>,
    pub mode_s_flags: Option<u8>,
    pub communications_capability: Option<u8>,
    pub height_3d: Option<i16>,
    pub x_pulse_presence: Option<u8>,
}

/// I020/500 position-accuracy compound item: DOP of position (sf1),
/// standard deviation of position (sf2), standard deviation of geometric
/// altitude (sf3). A fourth secondary (sf4) is declarable on the wire but
/// has no content defined by this implementation; its raw bytes are kept
/// for forward compatibility.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionAccuracy {
    pub dop: Option<(u16, u16, i16)>,
    pub std_dev: Option<(u16, u16, i16)>,
    pub std_dev_geometric_altitude: Option<u16>,
    pub sf4_raw: Option<[u8; 6]>,
}

/// Cat 020 MLAT (multilateration) target report.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct MlatReportRecord {
    pub data_source_sac: Option<u8>,
    pub data_source_sic: Option<u8>,
    pub target_report_descriptor: Option<u32>,
    pub time_of_day: Option<u32>,
    pub cartesian_position: Option<Position2d>,
    pub cartesian_position_3d_height: Option<i16>,
    pub mode_3a: Option<Mode3A>,
    pub flight_level: Option<FlightLevel>,
    pub track_number: Option<u16>,
    pub track_velocity_cartesian: Option<(i16, i16)>,
    pub track_status: Option<u32>,
    pub aircraft_address: Option<u32>,
    pub aircraft_identification: Option<[char; 8]>,
    pub bds_registers: Capped<BdsRegister, 8>,
    pub spi_present: Tres,
    pub simulated: Tres,
    /// Raw bytes of the RE (Reserved Expansion) field, length octet
    /// excluded, if present.
    pub re_raw: Capped<u8, 16>,
    /// Set when the `ssc_hack` feature forced the position-accuracy flag
    /// for a length-15 RE record with a zero second octet (Cat 020
    /// "SSC_HACK" vendor workaround).
    pub ssc_pa_forced: bool,
    /// I020/500.
    pub position_accuracy: Option<PositionAccuracy>,
}

/// Cat 021 ADS-B target report.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct AdsbReportRecord {
    pub data_source_sac: Option<u8>,
    pub data_source_sic: Option<u8>,
    pub target_address: Option<u32>,
    pub target_identification: Option<[char; 8]>,
    pub time_of_day: Option<u32>,
    pub wgs84_position: Option<(f64, f64)>,
    pub geometric_height_ft: Option<i32>,
    pub flight_level: Option<FlightLevel>,
    pub ground_velocity_kt: Option<f32>,
    pub ground_track_deg: Option<f32>,
    pub airborne_ground_vector: Option<(i16, i16)>,
    pub emitter_category: Option<u8>,
    pub mode_3a: Option<Mode3A>,
    pub link_technology: Option<u8>,
    pub mops_version: Option<u8>,
    pub nucp_nacp: Option<u8>,
    pub quality_indicators: Option<u8>,
}

/// Cat 062 system track, carrying either fused or single-sensor plots.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct SystemTrackRecord {
    pub data_source_sac: Option<u8>,
    pub data_source_sic: Option<u8>,
    pub track_number: Option<u16>,
    pub time_of_track_information: Option<u32>,
    pub cartesian_position: Option<Position2d>,
    pub cartesian_velocity: Option<(f32, f32)>,
    pub mode_3a: Option<Mode3A>,
    pub flight_level: Option<FlightLevel>,
    pub track_status: Option<u32>,
    pub track_quality: Option<u8>,
    pub contributing_sensors: Capped<(u8, u8), 16>,
    pub aircraft_address: Option<u32>,
    pub aircraft_identification: Option<[char; 8]>,
    /// I011/042, MLAT-computed position; width depends on the active
    /// reference-document edition (see `protocol::categories::cat011`).
    pub computed_position: Option<Position2d>,
}

/// Cat 002/034/065 "service" record: North marker, sector crossing, SDPS
/// status — any non-plot, non-track administrative message.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ServiceStepRecord {
    pub data_source_sac: Option<u8>,
    pub data_source_sic: Option<u8>,
    pub message_type: Option<u8>,
    pub time_of_day: Option<u32>,
    pub sector_number: Option<u8>,
    pub service_identification: Option<u8>,
    pub sdps_configuration_status: Option<u8>,
}

/// The active record a data-block record is decoded into. One `mem::take`
/// and re-tag per record; extractors only ever see the variant their own
/// category fills in, so mismatched access is a programmer error, not a
/// runtime case to handle (it would indicate a wrong UAP table).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub enum DomainRecord {
    RadarTarget(RadarTargetRecord),
    MlatReport(MlatReportRecord),
    AdsbReport(AdsbReportRecord),
    SystemTrack(SystemTrackRecord),
    ServiceStep(ServiceStepRecord),
    RadarService(RadarServiceRecord),
    WeatherVector(WeatherVectorRecord),
}

impl DomainRecord {
    pub fn as_radar_target_mut(&mut self) -> &mut RadarTargetRecord {
        match self {
            DomainRecord::RadarTarget(r) => r,
            _ => unreachable!("UAP/record kind mismatch: expected RadarTarget"),
        }
    }

    pub fn as_mlat_report_mut(&mut self) -> &mut MlatReportRecord {
        match self {
            DomainRecord::MlatReport(r) => r,
            _ => unreachable!("UAP/record kind mismatch: expected MlatReport"),
        }
    }

    pub fn as_adsb_report_mut(&mut self) -> &mut AdsbReportRecord {
        match self {
            DomainRecord::AdsbReport(r) => r,
            _ => unreachable!("UAP/record kind mismatch: expected AdsbReport"),
        }
    }

    pub fn as_system_track_mut(&mut self) -> &mut SystemTrackRecord {
        match self {
            DomainRecord::SystemTrack(r) => r,
            _ => unreachable!("UAP/record kind mismatch: expected SystemTrack"),
        }
    }

    pub fn as_service_step_mut(&mut self) -> &mut ServiceStepRecord {
        match self {
            DomainRecord::ServiceStep(r) => r,
            _ => unreachable!("UAP/record kind mismatch: expected ServiceStep"),
        }
    }

    pub fn as_radar_service_mut(&mut self) -> &mut RadarServiceRecord {
        match self {
            DomainRecord::RadarService(r) => r,
            _ => unreachable!("UAP/record kind mismatch: expected RadarService"),
        }
    }

    pub fn as_weather_vector_mut(&mut self) -> &mut WeatherVectorRecord {
        match self {
            DomainRecord::WeatherVector(r) => r,
            _ => unreachable!("UAP/record kind mismatch: expected WeatherVector"),
        }
    }
}

/// Sanity bound shared by every time-of-day field: values above one day's
/// worth of 1/128 s ticks cannot come from a correctly fully-qualified
/// baseline.
pub fn time_of_day_in_range(tod: u32) -> bool {
    tod <= MIDNIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_range_check() {
        assert!(time_of_day_in_range(0));
        assert!(time_of_day_in_range(MIDNIGHT));
        assert!(!time_of_day_in_range(MIDNIGHT + 1));
    }

    #[test]
    fn record_variant_accessors_match_their_tag() {
        let mut r = DomainRecord::RadarTarget(RadarTargetRecord::default());
        r.as_radar_target_mut().track_number = Some(42);
        match r {
            DomainRecord::RadarTarget(inner) => assert_eq!(inner.track_number, Some(42)),
            _ => unreachable!(),
        }
    }
}
