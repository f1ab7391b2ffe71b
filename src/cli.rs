// src/cli.rs
use crate::config::{PageConfig, RenderConfig};
use crate::generator::ResumeGenerator;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "resumeforge")]
#[command(about = "Assemble a structured resume record into a paginated PDF")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the content sequence and compile it to a PDF
    Generate {
        /// Resume record JSON file
        #[arg(long)]
        input: PathBuf,
        /// Output PDF path; defaults to a name derived from the record
        #[arg(long)]
        output: Option<PathBuf>,
        /// Directory for derived output names
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,
        /// Optional page parameters TOML (paper, margins)
        #[arg(long)]
        params: Option<PathBuf>,
    },
    /// Print the emitted layout-engine source without compiling
    Story {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        params: Option<PathBuf>,
    },
    /// Validate a resume record's shape
    Check {
        #[arg(long)]
        input: PathBuf,
    },
}

pub fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            input,
            output,
            output_dir,
            params,
        } => {
            let mut config = RenderConfig::new(input)
                .with_output_dir(output_dir)
                .with_page(load_page_params(params)?);
            if let Some(path) = output {
                config = config.with_output_path(path);
            }

            let written = ResumeGenerator::new(config)?.generate()?;
            println!("{}", written.display());
        }

        Command::Story { input, params } => {
            let config = RenderConfig::new(input).with_page(load_page_params(params)?);
            let source = ResumeGenerator::new(config)?.emit_source()?;
            print!("{source}");
        }

        Command::Check { input } => {
            let config = RenderConfig::new(input);
            match ResumeGenerator::new(config)?.check() {
                Ok(record) => {
                    info!("Record is well-formed");
                    println!(
                        "✅ {}: {} education, {} experience, {} projects, {} skill categories",
                        record.full_name(),
                        record.education.len(),
                        record.experience.len(),
                        record.projects.len(),
                        record.skills.len()
                    );
                }
                Err(e) => {
                    error!("Record failed validation: {e}");
                    anyhow::bail!("❌ {e}");
                }
            }
        }
    }

    Ok(())
}

fn load_page_params(params: Option<PathBuf>) -> Result<PageConfig> {
    match params {
        Some(path) => PageConfig::from_toml_file(&path),
        None => Ok(PageConfig::default()),
    }
}
