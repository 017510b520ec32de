mod affiliation;
mod changelog;
mod cli;
mod config;
mod connect;
mod devgraph;
mod gitlog;
mod graphml;
mod orggraph;
mod stats;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, Commands, PipelineArgs};
use config::PipelineConfig;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Parse { pipeline, save } => {
            let config = load_config(&pipeline)?;
            let input = pipeline
                .changelog
                .as_deref()
                .ok_or("no input: pass a changelog file")?;
            changelog::run(input, &config, save.as_deref(), pipeline.json)
        }
        Commands::Graph {
            pipeline,
            commits,
            output,
        } => {
            let config = load_config(&pipeline)?;
            devgraph::run(
                pipeline.changelog.as_deref(),
                commits.as_deref(),
                &config,
                &output,
                pipeline.json,
            )
        }
        Commands::Orgs {
            pipeline,
            commits,
            output,
        } => {
            let config = load_config(&pipeline)?;
            orggraph::run(
                pipeline.changelog.as_deref(),
                commits.as_deref(),
                &config,
                &output,
                pipeline.json,
            )
        }
        Commands::Log { path, output } => {
            let target = path.unwrap_or_else(|| PathBuf::from("."));
            gitlog::run(&target, output.as_deref())
        }
    }
}

fn load_config(args: &PipelineArgs) -> Result<PipelineConfig, Box<dyn Error>> {
    PipelineConfig::load(
        args.aggregation.as_deref(),
        args.filter_emails.as_deref(),
        args.filter_files.as_deref(),
        args.strict,
    )
}
