/// CLI argument definitions for the `tw` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "tw", version, about = "Collaboration graph mining tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by the changelog-processing subcommands.
#[derive(Args)]
pub struct PipelineArgs {
    /// Changelog file to process
    pub changelog: Option<PathBuf>,

    /// JSON object mapping e-mail domain prefixes to consolidated
    /// affiliation names (object order is significant)
    #[arg(short = 'a', long, value_name = "FILE")]
    pub aggregation: Option<PathBuf>,

    /// Newline-delimited list of e-mail addresses to filter out
    #[arg(short = 'f', long, value_name = "FILE")]
    pub filter_emails: Option<PathBuf>,

    /// Newline-delimited list of filenames to exclude from commits
    #[arg(short = 'x', long, value_name = "FILE")]
    pub filter_files: Option<PathBuf>,

    /// Abort on the first validation error instead of counting and skipping
    #[arg(long)]
    pub strict: bool,

    /// Output the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a changelog into commit records and report statistics
    #[command(long_about = "\
Parse a changelog into commit records and report statistics.

The changelog is a pre-transformed repository log: each commit is a
header line bounded by a pair of '==' markers, followed by the files
the commit touched, one per line.

Header shapes, tried in order:
  name;email;date +HHMM          -- canonical
  name email;;date +HHMM         -- double-semicolon variant
  email;;date +HHMM              -- no name; username synthesized
  ... cvs2svn ...                -- conversion bot; fixed identity

A header matching none of these counts as a validation error and the
block is skipped (or, with --strict, aborts the run).

Use 'tw log' to generate this format from a git repository.")]
    Parse {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Save parsed commit records as JSON for later reuse
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },

    /// Build the developer collaboration graph and write it as GraphML
    #[command(long_about = "\
Build the developer collaboration graph and write it as GraphML.

Two developers are connected when they both edited at least one common
file; the edge is unweighted regardless of how many files they share.
Each node carries string 'email' and 'affiliation' attributes. With
-f/--filter-emails, filtered developers are removed from the graph
along with any collaborator left isolated by that removal.")]
    Graph {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Load previously saved commit records instead of parsing
        #[arg(long, value_name = "FILE")]
        commits: Option<PathBuf>,

        /// Output GraphML file
        #[arg(short, long, default_value = "developers.graphml")]
        output: PathBuf,
    },

    /// Build the organization collaboration graph and write it as GraphML
    #[command(long_about = "\
Build the organization collaboration graph and write it as GraphML.

Developer edges are projected onto affiliations: an edge between two
developers of the same organization is invisible at this level, and
each cross-organization edge adds 1 to the weight of its organization
pair. Organizations with no cross-organization collaboration do not
appear in the output.")]
    Orgs {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Load previously saved commit records instead of parsing
        #[arg(long, value_name = "FILE")]
        commits: Option<PathBuf>,

        /// Output GraphML file
        #[arg(short, long, default_value = "organizations.graphml")]
        output: PathBuf,
    },

    /// Generate a changelog from a git repository in the format `parse` consumes
    Log {
        /// Repository path (default: current directory)
        path: Option<PathBuf>,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
