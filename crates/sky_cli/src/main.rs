use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::debug;
use sky_config::{LocationSection, ModeSpec, RawConfig, RunConfig};
use sky_core::{DerivedEpochContext, GeoLocation, Report, TableEphemeris};
use sky_format::{CoordinateMode, NumericNotation, Quantity, format_quantity, parse_sexagesimal};
use sky_frames::ObliquityModel;
use sky_time::{
    DeltaT, EspenakMeeus, Moment, UtcTime, decimal_year, gmst_hours, local_sidereal_time_hours,
};

#[derive(Parser)]
#[command(name = "skypos", about = "Apparent planetary positions", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Positions of every configured body at one instant
    Positions {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ or YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Ephemeris table (TOML)
        #[arg(long)]
        table: PathBuf,
        /// Run configuration (TOML); flags below override it
        #[arg(long)]
        config: Option<PathBuf>,
        /// Observer latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Observer longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Coordinate mode: 1-6 or a name (ecliptic, zodiacal, ...)
        #[arg(long)]
        mode: Option<String>,
        /// decimal or sexagesimal
        #[arg(long)]
        notation: Option<String>,
        /// Obliquity model: iau1980 or iau2006
        #[arg(long)]
        model: Option<String>,
        /// Advance the epoch by Delta-T
        #[arg(long)]
        dynamical: bool,
        /// Fixed Delta-T in seconds (implies --dynamical)
        #[arg(long, allow_hyphen_values = true)]
        delta_t: Option<f64>,
        /// Omit the D/R motion marker
        #[arg(long)]
        no_motion: bool,
        /// Comma-separated body names
        #[arg(long, value_delimiter = ',')]
        bodies: Option<Vec<String>>,
    },
    /// Convert one ecliptic position into a coordinate mode
    Convert {
        /// Ecliptic longitude (decimal or D°M'S")
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
        /// Ecliptic latitude (decimal or D°M'S")
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        /// Coordinate mode: 1-6 or a name
        #[arg(long, default_value = "1")]
        mode: String,
        /// decimal or sexagesimal
        #[arg(long, default_value = "decimal")]
        notation: String,
        /// UTC datetime; J2000.0 when omitted (required for horizontal modes)
        #[arg(long)]
        date: Option<String>,
        /// Observer latitude in degrees
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        lat_obs: f64,
        /// Observer longitude in degrees, east positive
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        lon_obs: f64,
        /// Obliquity model: iau1980 or iau2006
        #[arg(long, default_value = "iau1980")]
        model: String,
    },
    /// Greenwich and local sidereal time
    Sidereal {
        /// UTC datetime
        #[arg(long)]
        date: String,
        /// Observer longitude in degrees, east positive
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        lon: f64,
    },
    /// Mean obliquity of the ecliptic
    Obliquity {
        /// UTC datetime
        #[arg(long)]
        date: String,
        /// Obliquity model: iau1980 or iau2006
        #[arg(long, default_value = "iau1980")]
        model: String,
    },
    /// Delta-T (TT - UT) from the Espenak-Meeus polynomials
    DeltaT {
        /// UTC datetime
        #[arg(long)]
        date: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

fn parse_date(s: &str) -> UtcTime {
    s.parse()
        .unwrap_or_else(|e| fail(format!("invalid --date '{s}': {e}")))
}

fn parse_model(s: &str) -> ObliquityModel {
    s.parse().unwrap_or_else(|e| fail(e))
}

/// Command-line flags as a configuration layer over the file.
#[allow(clippy::too_many_arguments)]
fn flag_layer(
    lat: Option<f64>,
    lon: Option<f64>,
    mode: Option<String>,
    notation: Option<String>,
    model: Option<String>,
    dynamical: bool,
    delta_t: Option<f64>,
    no_motion: bool,
    bodies: Option<Vec<String>>,
) -> RawConfig {
    let location = (lat.is_some() || lon.is_some()).then_some(LocationSection {
        latitude: lat,
        longitude: lon,
    });
    RawConfig {
        mode: mode.map(ModeSpec::Name),
        notation,
        dynamical_time: (dynamical || delta_t.is_some()).then_some(true),
        delta_t_seconds: delta_t,
        obliquity_model: model,
        show_motion: no_motion.then_some(false),
        location,
        bodies,
    }
}

fn resolve_config(file: Option<&PathBuf>, flags: RawConfig) -> RunConfig {
    let base = match file {
        Some(path) => RawConfig::load(path).unwrap_or_else(|e| fail(e)),
        None => RawConfig::default(),
    };
    RunConfig::from_raw(base.merge(flags)).unwrap_or_else(|e| fail(e))
}

fn print_report(config: &RunConfig, moment: &Moment, report: &Report) {
    let ctx = &report.context;
    let notation = config.notation;
    let delta_t = moment
        .delta_t_seconds()
        .map(|dt| format!("  dT {dt:.2} s"))
        .unwrap_or_default();
    println!(
        "{}  JD(UT) {:.6}  T {:.10}{delta_t}",
        moment.utc(),
        moment.jd_ut(),
        ctx.t
    );
    println!(
        "obliquity {} ({})  LST {}  site {:+.4} {:+.4}",
        format_quantity(ctx.obliquity_deg, Quantity::Angle, notation),
        config.obliquity_model.name(),
        format_quantity(ctx.lst_hours, Quantity::Hours, notation),
        config.location.latitude_deg,
        config.location.longitude_deg
    );
    let (primary, secondary) = config.mode.headings();
    println!("mode {} {}: {primary}, {secondary}", config.mode.index(), config.mode);
    for record in &report.records {
        println!("{record}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Positions {
            date,
            table,
            config,
            lat,
            lon,
            mode,
            notation,
            model,
            dynamical,
            delta_t,
            no_motion,
            bodies,
        } => {
            let flags = flag_layer(
                lat, lon, mode, notation, model, dynamical, delta_t, no_motion, bodies,
            );
            let run = resolve_config(config.as_ref(), flags);
            let moment = run.moment(parse_date(&date));
            let provider = TableEphemeris::load(&table).unwrap_or_else(|e| fail(e));
            debug!("positions: {} bodies from {}", run.bodies.len(), table.display());
            let report = run
                .pipeline()
                .run(&moment, &run.location, &provider, &run.bodies)
                .unwrap_or_else(|e| fail(e));
            print_report(&run, &moment, &report);
        }

        Commands::Convert {
            lon,
            lat,
            mode,
            notation,
            date,
            lat_obs,
            lon_obs,
            model,
        } => {
            let mode: CoordinateMode = mode.parse().unwrap_or_else(|e| fail(e));
            let notation: NumericNotation = notation.parse().unwrap_or_else(|e| fail(e));
            let model = parse_model(&model);
            let location = GeoLocation::new(lat_obs, lon_obs).unwrap_or_else(|e| fail(e));
            let lon_deg = parse_sexagesimal(&lon).unwrap_or_else(|e| fail(e));
            let lat_deg = parse_sexagesimal(&lat).unwrap_or_else(|e| fail(e));
            if !(-90.0..=90.0).contains(&lat_deg) {
                fail(format!("ecliptic latitude {lat_deg} outside [-90, 90]"));
            }
            let utc = match date {
                Some(d) => parse_date(&d),
                None if mode.is_horizontal() => fail("horizontal modes need --date"),
                None => UtcTime::new(2000, 1, 1, 12, 0, 0.0),
            };
            let moment = Moment::from_utc(utc, None);
            let ctx = DerivedEpochContext::new(&moment, &location, model);
            let value = sky_format::evaluate(mode, lon_deg, lat_deg, &ctx.frame(lat_obs));
            println!("{}", value.render(notation));
        }

        Commands::Sidereal { date, lon } => {
            let utc = parse_date(&date);
            let location = GeoLocation::new(0.0, lon).unwrap_or_else(|e| fail(e));
            let jd = utc.to_jd();
            let gmst = gmst_hours(jd);
            let lst = local_sidereal_time_hours(jd, location.longitude_deg);
            println!(
                "GMST {}  ({})",
                format_quantity(gmst, Quantity::Hours, NumericNotation::Sexagesimal),
                format_quantity(gmst, Quantity::Hours, NumericNotation::Decimal)
            );
            println!(
                "LST  {}  ({})",
                format_quantity(lst, Quantity::Hours, NumericNotation::Sexagesimal),
                format_quantity(lst, Quantity::Hours, NumericNotation::Decimal)
            );
        }

        Commands::Obliquity { date, model } => {
            let model = parse_model(&model);
            let moment = Moment::from_utc(parse_date(&date), None);
            let eps = model.obliquity_deg(moment.centuries());
            println!(
                "{}  ({}, {})",
                format_quantity(eps, Quantity::Angle, NumericNotation::Sexagesimal),
                format_quantity(eps, Quantity::Angle, NumericNotation::Decimal),
                model.name()
            );
        }

        Commands::DeltaT { date } => {
            let jd = parse_date(&date).to_jd();
            let dt = EspenakMeeus.delta_t_seconds(jd);
            println!("dT {dt:.2} s  (year {:.3})", decimal_year(jd));
        }
    }
}
