use anyhow::bail;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use subfix::patcher::PatchOutcome;
use subfix::{batch, normalizer, patcher, workflow};
use subfix_core::config::Config;

#[derive(Parser)]
#[command(name = "subfix", about = "Fix reproducibility submission records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Patch missing or placeholder code_url fields in place.
    FixUrls {
        /// Submission file or directory. Defaults to the configured
        /// submissions directory.
        path: Option<PathBuf>,
    },
    /// Reshape submission records into the canonical schema.
    Normalize {
        /// Input directory of submission files.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Write fixed files here instead of in place.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fix a single file in place.
        #[arg(short, long)]
        single: Option<PathBuf>,
        /// Emit the CI workflow gate script and exit.
        #[arg(long)]
        create_workflow_fix: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::FixUrls { path } => {
            let target = path.unwrap_or_else(|| config.paths.submissions_dir.clone());
            let fallback = &config.patcher.fallback_code_url;
            if target.is_file() {
                match patcher::patch_code_url(&target, fallback)? {
                    PatchOutcome::Fixed => println!("Fixed code_url in {}", target.display()),
                    PatchOutcome::AlreadyValid => {
                        println!("code_url already valid in {}", target.display())
                    }
                }
            } else if target.is_dir() {
                batch::patch_dir(&target, fallback)?;
            } else {
                bail!("{} is not a valid file or directory", target.display());
            }
        }
        Commands::Normalize {
            input,
            output,
            single,
            create_workflow_fix,
        } => {
            if create_workflow_fix {
                let script = PathBuf::from("fix_workflow.sh");
                workflow::write_workflow_script(&script)?;
                println!(
                    "Created {} - use it to replace the workflow file list sections",
                    script.display()
                );
            } else if let Some(file) = single {
                normalizer::normalize_file(&file, &file)?;
                println!("Successfully fixed {}", file.display());
            } else {
                let input = input.unwrap_or_else(|| config.paths.submissions_dir.clone());
                batch::normalize_dir(&input, output.as_deref())?;
            }
        }
    }

    Ok(())
}
