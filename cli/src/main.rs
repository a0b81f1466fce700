//! unrtf CLI - RTF text extraction tool

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use unrtf::{detect_format_from_path, parse_file, JsonFormat, Unrtf};

#[derive(Parser)]
#[command(name = "unrtf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract plain text from RTF documents", long_about = None)]
struct Cli {
    /// Input RTF file
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Input encoding ("guess" reads \ansicpg from the document)
    #[arg(
        short = 'i',
        long,
        global = true,
        env = "UNRTF_INPUT_ENCODING",
        default_value = "guess"
    )]
    input_encoding: String,

    /// Output encoding
    #[arg(
        short = 'o',
        long,
        global = true,
        env = "UNRTF_OUTPUT_ENCODING",
        default_value = "utf-8"
    )]
    output_encoding: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract plain text
    Text {
        /// Input RTF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Dump the parsed node tree as JSON
    Json {
        /// Input RTF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input RTF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let encodings = (cli.input_encoding.as_str(), cli.output_encoding.as_str());

    let result = match cli.command {
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref(), encodings),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(file) = cli.file.as_deref() {
                cmd_text(file, None, encodings)
            } else {
                println!(
                    "{}",
                    "Usage: unrtf [-i <input encoding>] [-o <output encoding>] -f <file.rtf>"
                        .yellow()
                );
                println!("       unrtf --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    (input_encoding, output_encoding): (&str, &str),
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!(
        "extracting {} ({} -> {})",
        input.display(),
        input_encoding,
        output_encoding
    );
    let text = Unrtf::new()
        .with_input_encoding(input_encoding)?
        .with_output_encoding(output_encoding)
        .extract_file(input)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&text)?;
        stdout.flush()?;
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = unrtf::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    let doc = parse_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    match format {
        Some(format) => println!("{}: {}", "Format".bold(), format),
        None => println!("{}: {}", "Format".bold(), "no RTF header".yellow()),
    }
    println!(
        "{}: {}",
        "Codepage".bold(),
        doc.detect_encoding()
            .unwrap_or_else(|| "not declared".to_string())
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.flatten_to_bytes();
    let lines = text.iter().filter(|&&b| b == b'\n').count();

    println!("{}: {}", "Nodes".bold(), doc.node_count());
    println!("{}: {}", "Text bytes".bold(), text.len());
    println!("{}: {}", "Line breaks".bold(), lines);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unrtf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("RTF text extraction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unrtf".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_original_style_flags() {
        let cli =
            Cli::try_parse_from(["unrtf", "-i", "cp932", "-o", "utf-8", "-f", "a.rtf"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("a.rtf")));
        assert_eq!(cli.input_encoding, "cp932");
        assert_eq!(cli.output_encoding, "utf-8");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_subcommand_with_global_encoding() {
        let cli = Cli::try_parse_from(["unrtf", "text", "a.rtf", "-o", "cp1252"]).unwrap();
        assert_eq!(cli.output_encoding, "cp1252");
        assert!(matches!(cli.command, Some(Commands::Text { .. })));
    }
}
