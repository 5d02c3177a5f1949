//! CLI entry point for the `depdag` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use depdag::cli::commands;
use depdag::{DagError, WalkStrategy};

#[derive(Parser)]
#[command(
    name = "depdag",
    about = "depdag CLI — inspect dependency graphs described by a JSON manifest"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display node and edge counts, roots, leaves and acyclicity
    Info {
        /// Path to the manifest
        file: PathBuf,
    },
    /// List the nodes without incoming edges
    Roots {
        /// Path to the manifest
        file: PathBuf,
    },
    /// Print the visitation order of a walk
    Walk {
        /// Path to the manifest
        file: PathBuf,
        /// Starting node ID (default: every root)
        #[arg(long)]
        from: Option<String>,
        /// Strategy: dfs (depth-first) or bfs (breadth-first)
        #[arg(long, default_value = "dfs")]
        strategy: String,
        /// Maximum visits per walk
        #[arg(long, default_value_t = commands::DEFAULT_WALK_LIMIT)]
        limit: usize,
    },
    /// Check the graph for directed cycles
    Check {
        /// Path to the manifest
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Roots { file } => commands::cmd_roots(&file, json),
        Commands::Walk {
            file,
            from,
            strategy,
            limit,
        } => match WalkStrategy::from_name(&strategy) {
            Some(strategy) => commands::cmd_walk(&file, from.as_deref(), strategy, limit, json),
            None => Err(DagError::InvalidArgument(format!(
                "unknown strategy: {}",
                strategy
            ))),
        },
        Commands::Check { file } => match commands::cmd_check(&file, json) {
            Ok(true) => Ok(()),
            Ok(false) => process::exit(6),
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            DagError::Io(_) => 1,
            DagError::Manifest(_) => 2,
            DagError::InvalidArgument(_) => 3,
            DagError::NodeNotFound(_) => 4,
            DagError::DuplicateNode(_) | DagError::DuplicateEdge { .. } => 5,
        };
        process::exit(code);
    }
}
