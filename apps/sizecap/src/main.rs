use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use ignore::WalkBuilder;
use log::{debug, info};
use sizecap_bundle_size::{SizeCheckOption, WriteReporter, size_check};
use sizecap_core::{Bundle, Output};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sizecap")]
#[command(about = "Byte budgets for bundler output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check every file in a build output directory against a byte budget
    SizeCheck(SizeCheckArgs),
}

#[derive(Debug, Args)]
struct SizeCheckArgs {
    /// Directory containing the finalized build output
    #[arg(long, default_value = "dist")]
    dir: PathBuf,

    /// Maximum allowed size per file, in bytes
    #[arg(long, conflicts_with = "option_file")]
    max_size: Option<u64>,

    /// Report oversized files without failing the run
    #[arg(long, requires = "max_size")]
    warn_only: bool,

    /// JSON file holding the raw size-check option: a number, a boolean,
    /// or {"maxSize": n, "throwError": bool}
    #[arg(long)]
    option_file: Option<PathBuf>,
}

/// Extensions treated as executable chunks; everything else is an asset.
const CHUNK_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];

fn load_option(args: &SizeCheckArgs) -> Result<SizeCheckOption> {
    if let Some(path) = &args.option_file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read option file {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("Option file {} is not valid JSON", path.display()))?;
        debug!("Raw option from {}: {}", path.display(), value);
        return Ok(SizeCheckOption::from_json(value)?);
    }

    match args.max_size {
        Some(max) if args.warn_only => {
            Ok(SizeCheckOption::Config { max_size: max, throw_error: Some(false) })
        }
        Some(max) => Ok(SizeCheckOption::Limit(max)),
        None => Err(anyhow!("Either --max-size or --option-file is required")),
    }
}

fn read_output(path: &Path) -> Result<Output> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if CHUNK_EXTENSIONS.contains(&ext) {
        let code = String::from_utf8(bytes)
            .with_context(|| format!("Chunk {} is not valid UTF-8", path.display()))?;
        return Ok(Output::chunk(code));
    }

    // Assets keep text as text so it can be measured; anything that is not
    // valid UTF-8 stays binary.
    Ok(match String::from_utf8(bytes) {
        Ok(text) => Output::asset_text(text),
        Err(err) => Output::asset_binary(err.into_bytes()),
    })
}

fn collect_bundle(dir: &Path) -> Result<Bundle> {
    debug!("Collecting output files under {}", dir.display());
    let mut bundle = Bundle::new();

    let walker = WalkBuilder::new(dir)
        .hidden(false)
        .git_ignore(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let file_name = p.strip_prefix(dir).unwrap_or(p).to_string_lossy().to_string();
        bundle.insert(file_name, read_output(p)?);
    }

    info!("Collected {} output files", bundle.len());
    Ok(bundle)
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Commands::SizeCheck(args) => {
            let option = load_option(&args)?;
            debug!("Resolved size check option: {:?}", option);

            let plugin = size_check(option)?;
            info!("Constructed plugin '{}'", plugin.name());

            let Some(hook) = plugin.hook() else {
                writeln!(stdout, "{} Size check disabled, nothing to do.", "●".bright_blue())?;
                stdout.flush()?;
                return Ok(());
            };

            let bundle = collect_bundle(&args.dir)?;
            if bundle.is_empty() {
                return Err(anyhow!("No output files found under {}", args.dir.display()));
            }

            let mut reporter = WriteReporter::new(&mut stdout);
            let outcome = hook.write_bundle(&bundle, &mut reporter);
            let elapsed_ms = start.elapsed().as_millis();

            match outcome {
                Ok(result) => {
                    if !result.violations.is_empty() {
                        writeln!(
                            stdout,
                            "\n{} {} files over budget (warn mode, not failing).",
                            "⚠".yellow().bold(),
                            result.violations.len().to_string().yellow()
                        )?;
                    }
                    writeln!(
                        stdout,
                        "\n{} Finished in {}ms on {} files.",
                        "●".bright_blue(),
                        elapsed_ms.to_string().cyan(),
                        result.files_checked.to_string().cyan()
                    )?;
                    stdout.flush()?;
                    Ok(())
                }
                Err(err) => {
                    stdout.flush()?;
                    eprintln!("\n{}", err.to_string().red());

                    // Non-zero exit to fail CI
                    std::process::exit(1);
                }
            }
        }
    }
}
