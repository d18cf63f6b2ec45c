use clap::{Args, Parser, Subcommand};
use oculog_core::{
    CoreConfig, Prescription, PrescriptionService, RemarkKind, DEFAULT_PRESCRIPTION_LOG,
    DEFAULT_REMARK_LOG,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oculog")]
#[command(about = "Optical prescription recording CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct StoreArgs {
    /// Path of the prescription store
    #[arg(long, default_value = DEFAULT_PRESCRIPTION_LOG)]
    prescription_log: PathBuf,
    /// Path of the remark store
    #[arg(long, default_value = DEFAULT_REMARK_LOG)]
    remark_log: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a prescription, optionally followed by remarks
    Submit {
        /// Patient first name
        first_name: String,
        /// Patient last name
        last_name: String,
        /// Patient address
        address: String,
        /// Sphere in diopters
        sphere: f64,
        /// Cylinder in diopters
        cylinder: f64,
        /// Axis in degrees
        axis: i32,
        /// Examination date (dd/mm/yy)
        examination_date: String,
        /// Optometrist name
        optometrist: String,
        /// Remark as <kind>:<text> where kind is client or optometrist;
        /// may be repeated
        #[arg(long = "remark")]
        remarks: Vec<String>,
        #[command(flatten)]
        stores: StoreArgs,
    },
    /// Submit a prescription described by a JSON file
    SubmitJson {
        /// Path of the JSON file holding the eight scalar fields
        path: PathBuf,
        /// Remark as <kind>:<text>; may be repeated
        #[arg(long = "remark")]
        remarks: Vec<String>,
        #[command(flatten)]
        stores: StoreArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Submit {
            first_name,
            last_name,
            address,
            sphere,
            cylinder,
            axis,
            examination_date,
            optometrist,
            remarks,
            stores,
        }) => {
            let record = Prescription::new(
                first_name,
                last_name,
                address,
                sphere,
                cylinder,
                axis,
                examination_date,
                optometrist,
            );
            run_submit(record, &remarks, stores);
        }
        Some(Commands::SubmitJson {
            path,
            remarks,
            stores,
        }) => {
            let contents = std::fs::read_to_string(&path)?;
            let record: Prescription = serde_json::from_str(&contents)?;
            run_submit(record, &remarks, stores);
        }
        None => {
            println!("Use 'oculog --help' for commands");
        }
    }

    Ok(())
}

fn run_submit(mut record: Prescription, remarks: &[String], stores: StoreArgs) {
    let config = CoreConfig::new(stores.prescription_log, stores.remark_log);
    let service = PrescriptionService::from_config(&config);

    if service.submit_prescription(&record) {
        println!(
            "Prescription recorded for {} {}",
            record.first_name(),
            record.last_name()
        );
    } else {
        eprintln!(
            "Prescription rejected for {} {}",
            record.first_name(),
            record.last_name()
        );
        return;
    }

    for raw in remarks {
        match parse_remark(raw) {
            Ok((kind, text)) => {
                if service.submit_remark(&mut record, text, kind) {
                    println!("Remark recorded ({kind})");
                } else {
                    eprintln!("Remark rejected: {text}");
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn parse_remark(raw: &str) -> Result<(RemarkKind, &str), String> {
    let (kind, text) = raw
        .split_once(':')
        .ok_or_else(|| format!("remark must be <kind>:<text>, got: {raw}"))?;
    let kind = kind
        .trim()
        .parse::<RemarkKind>()
        .map_err(|e| e.to_string())?;
    Ok((kind, text.trim_start()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remark_splits_kind_and_text() {
        let (kind, text) =
            parse_remark("client: This is a valid client remark today.").unwrap();
        assert_eq!(kind, RemarkKind::Client);
        assert_eq!(text, "This is a valid client remark today.");
    }

    #[test]
    fn test_parse_remark_rejects_unknown_kind() {
        let err = parse_remark("invalidType: Some remark text here now.").unwrap_err();
        assert!(err.contains("invalid remark type"));
    }

    #[test]
    fn test_parse_remark_requires_separator() {
        assert!(parse_remark("no separator at all").is_err());
    }
}
