//! `asterix-list`: replay tool that decodes an ASTERIX recording and
//! prints one listing line per record.
use std::fs;
use std::process::ExitCode;

use asterix_decode::config::{DecoderConfig, ListLevel};
use asterix_decode::error::Outcome;
use asterix_decode::infra::wrappers::{FrameSource, IossWrapper, NettoWrapper, RffWrapper};
use asterix_decode::listing::{list_record, LogListing};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RecordingFormat {
    /// Raw DataBlock stream with no recording envelope.
    Netto,
    /// COMSOFT RFF recording: 4- or 6-octet length-prefixed units.
    Rff,
    /// SASS-C IOSS multiplexed recording: channel-tagged, length-prefixed units.
    Ioss,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Verbosity {
    Silent,
    Summary,
    Full,
    Debug,
}

impl From<Verbosity> for ListLevel {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => ListLevel::Silent,
            Verbosity::Summary => ListLevel::Summary,
            Verbosity::Full => ListLevel::Full,
            Verbosity::Debug => ListLevel::Debug,
        }
    }
}

/// Decode and list an ASTERIX recording.
#[derive(Debug, Parser)]
#[command(name = "asterix-list", version, about)]
struct Cli {
    /// Path to the recording to decode.
    input: String,

    /// Recording envelope the input was captured under.
    #[arg(long, value_enum, default_value = "netto")]
    format: RecordingFormat,

    /// RFF recordings: each unit carries a 2-octet sequence number.
    #[arg(long, requires = "format")]
    with_sequence_number: bool,

    /// IOSS recordings: which multiplexed channel to decode.
    #[arg(long, default_value_t = 0)]
    channel: u8,

    /// Listing verbosity.
    #[arg(long, value_enum, default_value = "full")]
    list_level: Verbosity,

    /// Abort the whole run on the first decode error instead of skipping
    /// the record that produced it.
    #[arg(long)]
    stop_on_error: bool,

    /// Pin a category to a specific reference-document edition, e.g.
    /// `11=1.1`. May be given more than once.
    #[arg(long = "reference-version", value_name = "CAT=VERSION")]
    reference_versions: Vec<String>,
}

fn parse_reference_version(spec: &str) -> Result<(u8, &str), String> {
    let (cat, version) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected CAT=VERSION, got '{spec}'"))?;
    let cat: u8 = cat
        .parse()
        .map_err(|_| format!("'{cat}' is not a valid category number"))?;
    Ok((cat, version))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut cfg = DecoderConfig::new();
    cfg.stop_on_error = cli.stop_on_error;
    cfg.with_sequence_number = cli.with_sequence_number;
    cfg.list_level = cli.list_level.into();

    for spec in &cli.reference_versions {
        match parse_reference_version(spec) {
            Ok((cat, version)) => {
                cfg.set_reference_version(cat, Box::leak(version.to_string().into_boxed_str()));
            }
            Err(e) => {
                eprintln!("asterix-list: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let bytes = match fs::read(&cli.input) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("asterix-list: cannot read '{}': {e}", cli.input);
            return ExitCode::FAILURE;
        }
    };

    let mut sink = LogListing;
    let list_level = cfg.list_level;
    let run = |source: &mut dyn FrameSource| {
        asterix_decode::decode_stream(&bytes, source, &cfg, |cat, record| {
            list_record(&mut sink, list_level, cat, &record);
            Outcome::Ok
        })
    };

    let result = match cli.format {
        RecordingFormat::Netto => run(&mut NettoWrapper),
        RecordingFormat::Rff => run(&mut RffWrapper::new(cli.with_sequence_number)),
        RecordingFormat::Ioss => run(&mut IossWrapper::new(cli.channel)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("asterix-list: {e}");
            ExitCode::FAILURE
        }
    }
}
