// server/src/cli/handlers.rs

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;
use medgraph::engine::check_integrity;
use medgraph::seed::read_seed_file;
use medgraph::{load_service_config, MedicalGraphService};
use models::{DateRange, GraphQuery};
use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::commands::{CliArgs, MedGraphCommands};

/// Integrity summary for one graph of a seed file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphCheck {
    pub patient_id: String,
    pub nodes: usize,
    pub edges: usize,
    pub problems: Vec<String>,
}

/// Loads configuration and builds the service the CLI queries.
pub fn build_service(args: &CliArgs) -> Result<MedicalGraphService> {
    let mut config = load_service_config(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(seed) = &args.seed {
        config.seed_path = Some(seed.clone());
    }
    let service = MedicalGraphService::from_config(config).context("Failed to load patient graphs")?;
    info!("Serving {} patients", service.list_patients().len());
    Ok(service)
}

/// Runs one read command against `service` and returns its JSON result.
/// Absent results come back as `null` or `[]`.
pub fn handle_command(service: &MedicalGraphService, command: &MedGraphCommands) -> Result<Value> {
    let value = match command {
        MedGraphCommands::Patients => serde_json::to_value(service.list_patients())?,
        MedGraphCommands::Graph { patient } => serde_json::to_value(service.get_patient_graph(patient))?,
        MedGraphCommands::Nodes { patient, node_type } => {
            serde_json::to_value(service.get_nodes_by_type(patient, *node_type))?
        }
        MedGraphCommands::Related { patient, node } => serde_json::to_value(service.get_related_nodes(patient, node))?,
        MedGraphCommands::Path { patient, from, to } => {
            serde_json::to_value(service.get_path_between_nodes(patient, from, to))?
        }
        MedGraphCommands::Visualize { patient, center } => {
            serde_json::to_value(service.to_visualization(patient, center.as_deref()))?
        }
        MedGraphCommands::Query { patient, node_types, edge_types, from, to, filters } => {
            let date_range = match (from, to) {
                (Some(start), Some(end)) => Some(
                    DateRange::new(*start, *end).with_context(|| format!("Invalid date range {}..{}", start, end))?,
                ),
                _ => None,
            };
            let query = GraphQuery {
                node_types: (!node_types.is_empty()).then(|| node_types.clone()),
                edge_types: (!edge_types.is_empty()).then(|| edge_types.clone()),
                patient_id: None,
                date_range,
                filters: (!filters.is_empty()).then(|| filters.iter().cloned().collect()),
            };
            serde_json::to_value(service.query_graph(patient, &query))?
        }
        MedGraphCommands::Validate { file } => serde_json::to_value(validate_seed_file(file)?)?,
    };
    Ok(value)
}

/// Checks every graph of a seed file. Fails when any graph has a problem.
pub fn validate_seed_file(path: &Path) -> Result<Vec<GraphCheck>> {
    let seed = read_seed_file(path).with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let checks: Vec<GraphCheck> = seed
        .graphs
        .iter()
        .map(|graph| GraphCheck {
            patient_id: graph.patient_id.clone(),
            nodes: graph.nodes.len(),
            edges: graph.edges.len(),
            problems: check_integrity(graph).iter().map(ToString::to_string).collect(),
        })
        .collect();

    let failing: Vec<&GraphCheck> = checks.iter().filter(|c| !c.problems.is_empty()).collect();
    if !failing.is_empty() {
        let details: Vec<Value> = failing
            .iter()
            .map(|c| json!({ "patientId": c.patient_id, "problems": c.problems }))
            .collect();
        bail!(
            "{} of {} graphs in {} failed integrity checks: {}",
            failing.len(),
            checks.len(),
            path.display(),
            Value::Array(details)
        );
    }
    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::NodeType;
    use std::io::Write;

    fn service() -> MedicalGraphService {
        MedicalGraphService::with_builtin_seed().unwrap()
    }

    fn seed_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn patients_are_listed() {
        let value = handle_command(&service(), &MedGraphCommands::Patients).unwrap();
        assert_eq!(value, json!(["p001", "p002"]));
    }

    #[test]
    fn absent_results_print_null_or_empty() {
        let service = service();
        let graph = handle_command(&service, &MedGraphCommands::Graph { patient: "p404".into() }).unwrap();
        assert_eq!(graph, Value::Null);
        let nodes = handle_command(
            &service,
            &MedGraphCommands::Nodes { patient: "p404".into(), node_type: NodeType::Lab },
        )
        .unwrap();
        assert_eq!(nodes, json!([]));
        let path = handle_command(
            &service,
            &MedGraphCommands::Path { patient: "p001".into(), from: "med_metformin".into(), to: "lab_hba1c".into() },
        )
        .unwrap();
        assert_eq!(path, Value::Null);
    }

    #[test]
    fn path_prints_direct_route() {
        let value = handle_command(
            &service(),
            &MedGraphCommands::Path { patient: "p001".into(), from: "condition_dm".into(), to: "med_metformin".into() },
        )
        .unwrap();
        assert_eq!(value["pathType"], "direct");
        assert_eq!(value["strength"], 0.9);
        assert_eq!(value["edges"][0]["id"], "edge_dm_metformin");
    }

    #[test]
    fn query_by_type_and_filter() {
        let command = MedGraphCommands::Query {
            patient: "p002".into(),
            node_types: vec![NodeType::Lab],
            edge_types: vec![],
            from: None,
            to: None,
            filters: vec![("testName".into(), "Hemoglobin".into())],
        };
        let value = handle_command(&service(), &command).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 1);
        assert_eq!(value["nodes"][0]["id"], "lab_cbc");
        assert_eq!(value["edges"], json!([]));
    }

    #[test]
    fn query_rejects_inverted_date_range() {
        let command = MedGraphCommands::Query {
            patient: "p001".into(),
            node_types: vec![],
            edge_types: vec![],
            from: chrono::NaiveDate::from_ymd_opt(2024, 12, 31),
            to: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
            filters: vec![],
        };
        let err = handle_command(&service(), &command).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid date range 2024-12-31..2024-01-01"));
    }

    #[test]
    fn validate_accepts_builtin_seed() {
        let file = seed_file(medgraph::seed::BUILTIN_SEED_JSON);
        let checks = validate_seed_file(file.path()).unwrap();
        assert_eq!(checks.len(), 2);
        assert_eq!((checks[0].nodes, checks[0].edges), (9, 9));
    }

    #[test]
    fn validate_reports_dangling_edges() {
        let file = seed_file(
            r#"{"graphs":[{"patientId":"p9","lastUpdated":"2024-01-01T00:00:00Z","nodes":[],
                "edges":[{"id":"e1","source":"a","target":"b","type":"RELATED_TO","label":"x"}]}]}"#,
        );
        let err = validate_seed_file(file.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("edge e1 source references missing node a"));
        assert!(message.contains("edge e1 target references missing node b"));
    }
}
