//! Human-readable record listing, grounded on
//! `list_num.cpp`/`list_sno.cpp`'s per-field text rendering. A `Listing`
//! sink receives one formatted line per populated field; the default
//! sink writes to stdout through the `log` facade so listing output
//! interleaves correctly with any diagnostic logging.
use crate::config::ListLevel;
use crate::core::Tres;
use crate::domain::DomainRecord;

/// Destination for formatted record output. Implemented by the stdout
/// sink below and by the CLI replay tool's file sink.
pub trait Listing {
    fn line(&mut self, text: &str);
}

/// Writes each listing line through `log::info!`, so redirecting output
/// (or silencing it under `ListLevel::Silent`) is a logger configuration
/// concern, not a call-site one.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogListing;

impl Listing for LogListing {
    fn line(&mut self, text: &str) {
        log::info!("{text}");
    }
}

fn format_tres(label: &str, value: Tres) -> String {
    let text = match value {
        Tres::Undefined => "?",
        Tres::False => "N",
        Tres::True => "Y",
    };
    format!("{label}={text}")
}

/// Render one `DomainRecord` as a sequence of listing lines, at the
/// requested verbosity. `Silent` emits nothing; `Summary` emits one line;
/// `Full`/`Debug` emit one line per populated field.
pub fn list_record(sink: &mut impl Listing, level: ListLevel, cat: u8, record: &DomainRecord) {
    if level == ListLevel::Silent {
        return;
    }

    let kind = match record {
        DomainRecord::RadarTarget(_) => "radar-target",
        DomainRecord::MlatReport(_) => "mlat-report",
        DomainRecord::AdsbReport(_) => "adsb-report",
        DomainRecord::SystemTrack(_) => "system-track",
        DomainRecord::ServiceStep(_) => "service",
        DomainRecord::RadarService(_) => "radar-service",
        DomainRecord::WeatherVector(_) => "weather-vector",
    };
    sink.line(&format!("cat={cat:03} kind={kind}"));

    if level == ListLevel::Summary {
        return;
    }

    match record {
        DomainRecord::RadarTarget(r) => {
            if let Some(tn) = r.track_number {
                sink.line(&format!("  track_number={tn}"));
            }
            if let Some(m3a) = r.mode_3a {
                sink.line(&format!(
                    "  mode_3a=0o{:04o} {}",
                    m3a.code,
                    format_tres("validated", m3a.validated)
                ));
            }
            if let Some(fl) = r.flight_level {
                sink.line(&format!("  flight_level={}", fl.quarter_fl as f32 / 4.0));
            }
        }
        DomainRecord::MlatReport(r) => {
            if let Some(tn) = r.track_number {
                sink.line(&format!("  track_number={tn}"));
            }
            sink.line(&format!(
                "  {} {}",
                format_tres("spi", r.spi_present),
                format_tres("simulated", r.simulated)
            ));
        }
        DomainRecord::AdsbReport(r) => {
            if let Some(addr) = r.target_address {
                sink.line(&format!("  target_address=0x{addr:06X}"));
            }
            if let Some((lat, lon)) = r.wgs84_position {
                sink.line(&format!("  position=({lat:.6}, {lon:.6})"));
            }
        }
        DomainRecord::SystemTrack(r) => {
            if let Some(tn) = r.track_number {
                sink.line(&format!("  track_number={tn}"));
            }
        }
        DomainRecord::ServiceStep(r) => {
            if let Some(mt) = r.message_type {
                sink.line(&format!("  message_type={mt}"));
            }
        }
        DomainRecord::RadarService(r) => {
            sink.line(&format!(
                "  sop={} eop={}",
                r.start_of_picture, r.end_of_picture
            ));
        }
        DomainRecord::WeatherVector(r) => {
            if let Some(dsi) = r.data_source_identifier {
                sink.line(&format!("  data_source_identifier=0x{dsi:04X}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceStepRecord;

    #[derive(Default)]
    struct CollectListing(Vec<String>);
    impl Listing for CollectListing {
        fn line(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
    }

    #[test]
    fn silent_level_emits_nothing() {
        let mut sink = CollectListing::default();
        let record = DomainRecord::ServiceStep(ServiceStepRecord::default());
        list_record(&mut sink, ListLevel::Silent, 1, &record);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn summary_level_emits_one_line() {
        let mut sink = CollectListing::default();
        let mut r = ServiceStepRecord::default();
        r.message_type = Some(3);
        let record = DomainRecord::ServiceStep(r);
        list_record(&mut sink, ListLevel::Summary, 1, &record);
        assert_eq!(sink.0.len(), 1);
        assert!(sink.0[0].contains("cat=001"));
    }

    #[test]
    fn full_level_emits_field_lines() {
        let mut sink = CollectListing::default();
        let mut r = ServiceStepRecord::default();
        r.message_type = Some(3);
        let record = DomainRecord::ServiceStep(r);
        list_record(&mut sink, ListLevel::Full, 1, &record);
        assert_eq!(sink.0.len(), 2);
        assert!(sink.0[1].contains("message_type=3"));
    }
}
