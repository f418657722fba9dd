use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use runlength_rs::logging;
use runlength_rs::naming;
use runlength_rs::Error;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogOutputFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Run-length encode and decode text files.
#[derive(Debug, Parser)]
#[clap(name = "rle", version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// How the size summary is printed.
    #[clap(long, global = true, value_enum, default_value = "text")]
    report: ReportFormat,

    #[clap(long = "log-format", global = true, value_enum, default_value = "pretty")]
    log_format: LogOutputFormat,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compress a text file. Writes `<INPUT>.rle` unless told otherwise.
    Compress(FileArgs),
    /// Decompress an RLE file. Writes `<INPUT>` without `.rle` unless told
    /// otherwise.
    Decompress(FileArgs),
}

#[derive(Debug, clap::Args)]
struct FileArgs {
    /// File to read.
    input: PathBuf,

    /// Where to write the result.
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Print the result to stdout instead of writing a file. The summary
    /// then goes to stderr.
    #[clap(long, conflicts_with = "output")]
    stdout: bool,
}

impl FileArgs {
    fn destination(&self, default: impl FnOnce(&Path) -> PathBuf) -> Option<PathBuf> {
        if self.stdout {
            return None;
        }
        Some(self.output.clone().unwrap_or_else(|| default(&self.input)))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let pretty = matches!(cli.log_format, LogOutputFormat::Pretty);
    logging::setup_logging(logging::DEFAULT_DIRECTIVES, pretty);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "operation failed");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Command::Compress(args) => {
            let text = read_text(&args.input)?;
            let report = runlength_rs::compress(&text);
            let dest = args.destination(naming::compressed_path);
            emit(dest.as_deref(), &report.compressed_content)?;

            let summary = match cli.report {
                ReportFormat::Json => serde_json::to_string_pretty(&report)?,
                ReportFormat::Text => format!(
                    "Original size:     {}\nCompressed size:   {}\nCompression ratio: {} ({} -> {} bytes)",
                    kilobytes(report.original_size),
                    kilobytes(report.compressed_size),
                    report.compression_ratio,
                    report.original_size,
                    report.compressed_size,
                ),
            };
            print_summary(dest.as_deref(), &summary);
            Ok(())
        }
        Command::Decompress(args) => {
            let text = read_text(&args.input)?;
            // Nothing is written unless the whole stream decodes.
            let report = runlength_rs::decompress(&text)?;
            let dest = args.destination(naming::decompressed_path);
            emit(dest.as_deref(), &report.decompressed_content)?;

            let summary = match cli.report {
                ReportFormat::Json => serde_json::to_string_pretty(&report)?,
                ReportFormat::Text => format!(
                    "Compressed size:   {}\nDecompressed size: {}\nExpansion ratio:   {} ({} -> {} bytes)",
                    kilobytes(report.compressed_size),
                    kilobytes(report.decompressed_size),
                    report.expansion_ratio,
                    report.compressed_size,
                    report.decompressed_size,
                ),
            };
            print_summary(dest.as_deref(), &summary);
            Ok(())
        }
    }
}

fn kilobytes(bytes: usize) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

fn read_text(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|source| Error::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), size = bytes.len(), "read input file");

    String::from_utf8(bytes).map_err(|source| Error::NotText {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `content` to `dest`, or to stdout when `dest` is `None`.
fn emit(dest: Option<&Path>, content: &str) -> Result<(), Error> {
    match dest {
        Some(path) => {
            fs::write(path, content).map_err(|source| Error::WriteOutput {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), size = content.len(), "wrote output file");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| Error::WriteOutput {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}

/// Prints the summary on stdout, or on stderr if stdout carries the content.
fn print_summary(dest: Option<&Path>, summary: &str) {
    if dest.is_none() {
        eprintln!("{summary}");
    } else {
        println!("{summary}");
    }
}
