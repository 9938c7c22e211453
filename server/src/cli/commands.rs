// server/src/cli/commands.rs

// Command-line arguments and subcommands for medgraph-cli.
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use models::{EdgeType, NodeType, PropertyValue};

#[derive(Debug, Parser)]
#[clap(name = "medgraph-cli", version, about = "Query per-patient medical knowledge graphs")]
pub struct CliArgs {
    /// YAML or TOML service configuration.
    #[clap(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
    /// JSON seed file loaded in addition to (or instead of) the built-in patients.
    #[clap(long, short = 's', global = true)]
    pub seed: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: MedGraphCommands,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum MedGraphCommands {
    /// List patient ids.
    Patients,
    /// Print a patient's whole graph.
    Graph { patient: String },
    /// Print a patient's nodes of one type.
    Nodes {
        patient: String,
        node_type: NodeType,
    },
    /// Print the nodes one edge away from a node.
    Related { patient: String, node: String },
    /// Print the direct path between two nodes, or null.
    Path { patient: String, from: String, to: String },
    /// Print the graph decorated for rendering.
    Visualize {
        patient: String,
        #[clap(long)]
        center: Option<String>,
    },
    /// Print the sub-graph matching the given filters.
    Query {
        patient: String,
        #[clap(long = "node-type")]
        node_types: Vec<NodeType>,
        #[clap(long = "edge-type")]
        edge_types: Vec<EdgeType>,
        #[clap(long, requires = "to")]
        from: Option<NaiveDate>,
        #[clap(long, requires = "from")]
        to: Option<NaiveDate>,
        /// KEY=VALUE on a node property; VALUE is read as JSON when it parses, else as text.
        #[clap(long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, PropertyValue)>,
    },
    /// Check a seed file for integrity problems without loading it.
    Validate { file: PathBuf },
}

pub fn parse_filter(raw: &str) -> Result<(String, PropertyValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    let value = serde_json::from_str::<PropertyValue>(value).unwrap_or_else(|_| PropertyValue::from(value));
    Ok((key.to_string(), value))
}
