//! vocab-apidoc CLI
//!
//! Command-line interface for generating and checking vocabulary-derived
//! API documentation.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use vocab_apidoc::{
    build_description, check, load_vocab_auto, BuildOutcome, DocConfig, FileStatus, Verb,
};

#[derive(Parser)]
#[command(name = "vocab-apidoc")]
#[command(about = "Derive hypermedia API descriptions from JSON-LD vocabularies")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an API description document from a vocabulary
    Generate {
        /// Vocabulary source: file path or URL (http:// or https://)
        vocab: String,

        /// API name used in the document id and entrypoint
        #[arg(long, default_value = "api")]
        api_name: String,

        /// Server URL the API is mounted under
        #[arg(long, default_value = "http://localhost:8080/")]
        server_url: String,

        /// Title of the generated document
        #[arg(long, default_value = "API Documentation")]
        title: String,

        /// Description of the generated document
        #[arg(long, default_value = "Generated API Documentation")]
        description: String,

        /// Comma-separated verbs to synthesize per class
        #[arg(long, value_delimiter = ',', default_value = "GET,PUT,POST,DELETE")]
        verbs: Vec<String>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Suppress the build summary on stderr
        #[arg(long, short)]
        quiet: bool,
    },

    /// Check vocabulary files for errors (syntax, shape, dangling references)
    Check {
        /// File or directory to check
        path: PathBuf,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Suppress progress output, only show errors
        #[arg(long, short)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            vocab,
            api_name,
            server_url,
            title,
            description,
            verbs,
            output,
            pretty,
            quiet,
        } => run_generate(GenerateArgs {
            vocab,
            api_name,
            server_url,
            title,
            description,
            verbs,
            output,
            pretty,
            quiet,
        }),

        Commands::Check {
            path,
            format,
            strict,
            quiet,
        } => run_check(&path, &format, strict, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

struct GenerateArgs {
    vocab: String,
    api_name: String,
    server_url: String,
    title: String,
    description: String,
    verbs: Vec<String>,
    output: Option<PathBuf>,
    pretty: bool,
    quiet: bool,
}

fn run_generate(args: GenerateArgs) -> Result<(), u8> {
    let mut verbs = Vec::with_capacity(args.verbs.len());
    for name in &args.verbs {
        match Verb::parse(name) {
            Some(verb) => verbs.push(verb),
            None => {
                eprintln!(
                    "Error: unknown verb \"{}\": expected GET, PUT, POST, or DELETE",
                    name
                );
                return Err(2);
            }
        }
    }

    let vocab = load_vocab_auto(&args.vocab).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let config = DocConfig {
        api_name: args.api_name,
        server_url: args.server_url,
        title: args.title,
        description: args.description,
        verbs,
    };
    let BuildOutcome {
        description,
        report,
    } = build_description(&vocab, &config);

    // Skips go to stderr so piped output stays a clean document
    for skip in &report.skipped {
        eprintln!("Warning: {}", skip);
    }
    if !args.quiet {
        eprintln!(
            "{} classes, {} properties, {} operations ({} skipped)",
            report.classes_built,
            report.properties_attached,
            report.operations_attached,
            report.skipped.len()
        );
    }

    let json_output = if args.pretty {
        serde_json::to_string_pretty(&description)
    } else {
        serde_json::to_string(&description)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}

fn run_check(path: &Path, format: &str, strict: bool, quiet: bool) -> Result<(), u8> {
    use vocab_apidoc::Severity;

    if !path.exists() {
        eprintln!("Error: path not found: {}", path.display());
        return Err(2);
    }

    let result = check(path, strict);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else {
        // Text output
        if !quiet {
            println!("Checking {} ...\n", path.display());
        }

        for file_result in &result.results {
            let status_icon = match file_result.status {
                FileStatus::Ok => "\x1b[32m✓\x1b[0m",
                FileStatus::Warning => "\x1b[33m⚠\x1b[0m",
                FileStatus::Error => "\x1b[31m✗\x1b[0m",
            };

            if !quiet || file_result.status != FileStatus::Ok {
                println!("  {} {}", status_icon, file_result.file.display());
            }

            for diag in &file_result.diagnostics {
                let color = match diag.severity {
                    Severity::Error => "\x1b[31m",
                    Severity::Warning => "\x1b[33m",
                };
                if !quiet || diag.severity == Severity::Error {
                    println!(
                        "    {}{}[{}]\x1b[0m: {} - {}",
                        color,
                        match diag.severity {
                            Severity::Error => "error",
                            Severity::Warning => "warning",
                        },
                        diag.code,
                        diag.path,
                        diag.message
                    );
                }
            }
        }

        println!();
        if result.is_ok() && (!strict || result.warnings == 0) {
            println!(
                "\x1b[32m✓ {} files checked, all passed\x1b[0m",
                result.files_checked
            );
        } else {
            println!(
                "\x1b[31m✗ {} files checked: {} passed, {} failed ({} errors, {} warnings)\x1b[0m",
                result.files_checked, result.passed, result.failed, result.errors, result.warnings
            );
        }
    }

    if result.is_ok() && (!strict || result.warnings == 0) {
        Ok(())
    } else {
        Err(1)
    }
}
