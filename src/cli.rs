//! CLI argument parsing for hopgraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use hopgraph_core::format::OutputFormat;
use parse::parse_output_format;

/// Hopgraph - shortest paths and reachability over edge-list graphs
#[derive(Parser, Debug)]
#[command(name = "hopgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "info", "hopgraph_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "HOPGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the graph's mode, counts and adjacency
    Info {
        /// Edge-list file
        file: PathBuf,
    },

    /// List edges as (from, to, weight)
    Edges {
        /// Edge-list file
        file: PathBuf,

        /// List each undirected edge once
        #[arg(long)]
        unique: bool,
    },

    /// Find a fewest-hops path between two vertices
    Path {
        /// Edge-list file
        file: PathBuf,

        /// Source vertex
        from: String,

        /// Target vertex
        to: String,
    },

    /// List the vertices exactly LENGTH hops from START
    Level {
        /// Edge-list file
        file: PathBuf,

        /// Start vertex
        start: String,

        /// Hop-distance
        #[arg(allow_negative_numbers = true)]
        length: i64,
    },

    /// Check whether TARGET is reachable from START (depth-first)
    Reach {
        /// Edge-list file
        file: PathBuf,

        /// Start vertex
        start: String,

        /// Target vertex
        target: String,
    },
}
