// Identity card verification CLI
// Reads OCR text for an Aadhaar or PAN card, extracts the printed fields and
// checks them against the applicant's claims.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::info;

use idverify::{
    config::{AppConfig, DEFAULT_REGISTRATIONS_PATH, DEFAULT_UPLOAD_DIR},
    models::{
        stamped_filename, Applicant, ClaimedIdentity, DocumentType, ExtractedFields, Registration,
        VerificationReport,
    },
    processing::{FieldExtractor, OcrProvider, TranscriptOcr},
    storage::RegistrationLog,
    utils::VerifyError,
    validation::ClaimValidator,
    IdentityVerifier,
};

#[derive(Parser, Debug)]
#[command(name = "idverify", version, about = "Verify identity claims against Aadhaar and PAN card text")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the fields found in a card's OCR text
    Extract {
        #[arg(long, value_parser = parse_document_type, help = "aadhar or pan")]
        doc_type: DocumentType,
        #[arg(long, help = "OCR text file, or - for stdin")]
        text: PathBuf,
    },
    /// Check claimed name, date of birth and ID number against a card
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
struct VerifyArgs {
    #[arg(long, value_parser = parse_document_type, help = "aadhar or pan")]
    doc_type: DocumentType,
    #[arg(long, help = "OCR text file, or - for stdin")]
    text: PathBuf,
    #[arg(long, help = "Claimed full name")]
    name: String,
    #[arg(long, help = "Claimed date of birth, YYYY-MM-DD")]
    dob: String,
    #[arg(long, help = "Claimed ID number, compared exactly as typed")]
    id_number: String,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long, help = "Card image to file with the registration")]
    image: Option<PathBuf>,
    #[arg(long, default_value_t = false, help = "Append the result to the registration log")]
    record: bool,
    #[arg(long, env = "IDVERIFY_REGISTRATIONS", default_value = DEFAULT_REGISTRATIONS_PATH)]
    registrations: PathBuf,
    #[arg(long, env = "IDVERIFY_UPLOAD_DIR", default_value = DEFAULT_UPLOAD_DIR)]
    upload_dir: PathBuf,
}

fn parse_document_type(value: &str) -> Result<DocumentType, VerifyError> {
    value.parse()
}

fn print_fields(fields: &ExtractedFields) {
    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "<not found>".to_string());
    println!("  Name: {}", show(&fields.name));
    println!("  Date of Birth: {}", show(&fields.date_of_birth));
    println!("  ID Number: {}", show(&fields.id_number));
}

fn pass_fail(ok: bool) -> &'static str {
    if ok {
        "PASSED"
    } else {
        "FAILED"
    }
}

// Function to print a verification report
fn print_report(report: &VerificationReport, registration_id: Option<u64>) {
    println!("\n===============================================");
    println!("      IDENTITY VERIFICATION REPORT");
    println!("===============================================\n");

    println!("EXTRACTED FROM {} CARD:", report.document_type);
    print_fields(&report.fields);

    println!("\nCHECKS:");
    println!("  1. Name: {}", pass_fail(report.verdict.name_verified));
    println!("  2. Date of Birth: {}", pass_fail(report.verdict.dob_verified));
    println!("  3. ID Number: {}", pass_fail(report.verdict.id_verified));

    if let Some(id) = registration_id {
        println!("\nRegistration id: {}", id);
    }

    println!(
        "Identity verification result: {}",
        if report.verdict.overall_verified {
            "VERIFIED"
        } else {
            "NOT VERIFIED"
        }
    );
}

fn run_extract(json: bool, document_type: DocumentType, text: &Path) -> Result<(), VerifyError> {
    let raw_text = TranscriptOcr::new().recognize(text);
    let fields = FieldExtractor::extract(&raw_text, document_type);

    if json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
    } else {
        println!("{} CARD FIELDS:", document_type);
        print_fields(&fields);
    }
    Ok(())
}

// Files a copy of the card image under the upload directory
fn store_upload(config: &AppConfig, image: &Path, stored_name: &str) -> Result<PathBuf, VerifyError> {
    fs::create_dir_all(&config.upload_dir)?;
    let destination = config.upload_path(stored_name);
    fs::copy(image, &destination)?;
    Ok(destination)
}

fn run_verify(json: bool, args: VerifyArgs) -> Result<(), VerifyError> {
    let claims = ClaimedIdentity {
        full_name: args.name,
        date_of_birth: args.dob,
        id_number: args.id_number,
    };
    let claimed_dob = ClaimValidator::validate(&claims)?;

    let (raw_text, report) =
        IdentityVerifier::new().verify_image(&TranscriptOcr::new(), &args.text, args.doc_type, &claims);

    let registration_id = if args.record {
        let config = AppConfig {
            registrations_path: args.registrations,
            upload_dir: args.upload_dir,
        };
        config.validate()?;

        let registered_at = Utc::now();
        let image_filename = match args.image.as_deref() {
            Some(image) => {
                let original = image
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .ok_or_else(|| VerifyError::InvalidClaim(format!("Not an image file: {:?}", image)))?;
                let stored_name = stamped_filename(&original, registered_at);
                let destination = store_upload(&config, image, &stored_name)?;
                info!("Stored card image at {:?}", destination);
                Some(stored_name)
            }
            None => None,
        };

        let registration = Registration::new(
            &claims,
            claimed_dob,
            Applicant {
                phone_number: args.phone,
                age: args.age,
                image_filename,
            },
            report.document_type,
            &raw_text,
            &report.fields,
            &report.verdict,
            registered_at,
        );
        let id = RegistrationLog::new(&config.registrations_path).append(&registration)?;
        info!("Recorded registration {} in {:?}", id, config.registrations_path);
        Some(id)
    } else {
        None
    };

    if json {
        let output = serde_json::json!({
            "document_type": report.document_type,
            "fields": report.fields,
            "verdict": report.verdict,
            "registration_id": registration_id,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&report, registration_id);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Extract { doc_type, text } => run_extract(cli.json, doc_type, &text),
        Commands::Verify(args) => run_verify(cli.json, args),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
