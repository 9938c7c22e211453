// lib/tests/synthetic_graphs.rs
//! Service behaviour over injected graphs, including writes and reloads.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use chrono::{NaiveDate, TimeZone, Utc};
use medgraph::{GraphError, IntegrityMode, MedicalGraphService, ServiceConfig};
use models::medical::{
    ClinicalStatus, ConditionProperties, LabProperties, LabStatus, MedicationProperties, MedicationStatus,
    SocialCategory, SocialHistoryProperties,
};
use models::{EdgeType, GraphEdge, GraphNode, GraphQuery, Identifier, MedicalKnowledgeGraph, NodeType, ToNode};

fn id(s: &str) -> Identifier {
    Identifier::new(s).unwrap()
}

fn condition(node_id: &str, name: &str, onset: Option<NaiveDate>) -> GraphNode {
    let record = ConditionProperties {
        name: name.into(),
        icd_code: None,
        status: ClinicalStatus::Active,
        severity: None,
        onset_date: onset,
        category: None,
    };
    record.to_node(id(node_id), name).unwrap()
}

fn medication(node_id: &str, name: &str) -> GraphNode {
    let record = MedicationProperties {
        name: name.into(),
        generic_name: None,
        dosage: "10mg".into(),
        frequency: "Once daily".into(),
        route: "Oral".into(),
        medication_class: None,
        status: MedicationStatus::Active,
        start_date: None,
        end_date: None,
    };
    record.to_node(id(node_id), name).unwrap()
}

fn lab(node_id: &str, date: NaiveDate, status: LabStatus) -> GraphNode {
    let record = LabProperties {
        test_name: "Hemoglobin A1c".into(),
        value: "7.2".into(),
        unit: Some("%".into()),
        reference_range: Some("<7.0".into()),
        status,
        date,
    };
    record.to_node(id(node_id), node_id).unwrap()
}

fn smoking(node_id: &str) -> GraphNode {
    let record = SocialHistoryProperties {
        category: SocialCategory::Smoking,
        description: "Former smoker".into(),
        status: None,
        quantity: None,
        duration: None,
    };
    GraphNode::new(id(node_id), "Former smoker", record).unwrap()
}

fn edge(edge_id: &str, source: &str, target: &str, edge_type: EdgeType, weight: Option<f64>) -> GraphEdge {
    let edge = GraphEdge::new(id(edge_id), id(source), id(target), edge_type, edge_type.as_str().to_lowercase());
    match weight {
        Some(w) => edge.with_weight(w).unwrap(),
        None => edge,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// condition_dm with a medication and a lab, plus an isolated smoking node.
fn diabetes_graph(patient_id: &str) -> MedicalKnowledgeGraph {
    MedicalKnowledgeGraph {
        patient_id: patient_id.into(),
        nodes: vec![
            condition("condition_dm", "Type 2 Diabetes Mellitus", Some(date(2019, 8, 22))),
            medication("med_metformin", "Metformin"),
            lab("lab_hba1c", date(2024, 5, 15), LabStatus::Abnormal),
            smoking("social_smoking"),
        ],
        edges: vec![
            edge("edge_dm_metformin", "condition_dm", "med_metformin", EdgeType::PrescribedBy, Some(0.9)),
            edge("edge_dm_hba1c", "condition_dm", "lab_hba1c", EdgeType::Indicates, Some(0.8)),
        ],
        last_updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn service_with(graphs: Vec<MedicalKnowledgeGraph>) -> MedicalGraphService {
    MedicalGraphService::new(graphs, ServiceConfig::default()).unwrap()
}

fn ids(nodes: &[GraphNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.id.as_str()).collect()
}

#[test]
fn related_nodes_of_condition_are_its_medication_and_lab() {
    let service = service_with(vec![diabetes_graph("s1")]);
    let related_nodes = service.get_related_nodes("s1", "condition_dm");
    let mut related = ids(&related_nodes);
    related.sort();
    assert_eq!(related, vec!["lab_hba1c", "med_metformin"]);
    assert!(service.get_related_nodes("s1", "social_smoking").is_empty());
}

#[test]
fn missing_weight_gives_unit_strength() {
    let mut graph = diabetes_graph("s1");
    graph.edges.push(edge("edge_smoke", "social_smoking", "condition_dm", EdgeType::AtRiskFor, None));
    let service = service_with(vec![graph]);
    let path = service.get_path_between_nodes("s1", "condition_dm", "social_smoking").unwrap();
    assert_eq!(path.strength, 1.0);
    assert_eq!(ids(&path.nodes), vec!["condition_dm", "social_smoking"]);
}

#[test]
fn self_loop_is_a_direct_path() {
    let mut graph = diabetes_graph("s1");
    graph.edges.push(edge("edge_dm_loop", "condition_dm", "condition_dm", EdgeType::RelatedTo, Some(0.3)));
    let service = service_with(vec![graph]);
    let path = service.get_path_between_nodes("s1", "condition_dm", "condition_dm").unwrap();
    assert_eq!(ids(&path.nodes), vec!["condition_dm", "condition_dm"]);
    assert_eq!(path.edges[0].id, "edge_dm_loop");
    assert_eq!(path.strength, 0.3);
    assert!(service.get_path_between_nodes("s1", "lab_hba1c", "lab_hba1c").is_none());

    let related_nodes = service.get_related_nodes("s1", "condition_dm");
    assert!(related_nodes.iter().all(|n| n.id != "condition_dm"));
}

#[test]
fn dangling_edge_rejected_by_default() {
    let mut graph = diabetes_graph("s1");
    graph.edges.push(edge("edge_bad", "condition_dm", "ghost", EdgeType::RelatedTo, None));
    let err = MedicalGraphService::new(vec![graph], ServiceConfig::default()).unwrap_err();
    match err {
        GraphError::IntegrityViolation { patient_id, problems } => {
            assert_eq!(patient_id, "s1");
            assert_eq!(problems.len(), 1);
            assert!(problems[0].contains("ghost"));
        }
        other => panic!("expected integrity violation, got {}", other),
    }
}

#[test]
fn dangling_edge_quarantined_when_configured() {
    let mut graph = diabetes_graph("s1");
    graph.edges.push(edge("edge_bad", "ghost", "condition_dm", EdgeType::RelatedTo, None));
    let config = ServiceConfig {
        integrity_mode: IntegrityMode::Quarantine,
        ..ServiceConfig::default()
    };
    let service = MedicalGraphService::new(vec![graph], config).unwrap();
    assert_eq!(service.load_report().quarantined[0].edge.id, "edge_bad");
    assert_eq!(service.get_patient_graph("s1").unwrap().edges.len(), 2);
    assert_eq!(service.get_related_nodes("s1", "condition_dm").len(), 2);
}

#[test]
fn query_combines_type_date_and_filters() {
    let mut graph = diabetes_graph("s1");
    graph.nodes.push(lab("lab_old", date(2018, 1, 10), LabStatus::Normal));
    graph.edges.push(edge("edge_dm_old", "condition_dm", "lab_old", EdgeType::Indicates, None));
    let service = service_with(vec![graph]);

    let recent = GraphQuery::default()
        .with_node_types([NodeType::Lab, NodeType::Condition])
        .with_date_range(date(2019, 1, 1), date(2024, 12, 31))
        .unwrap();
    let selected = service.query_graph("s1", &recent).unwrap();
    assert_eq!(ids(&selected.nodes), vec!["condition_dm", "lab_hba1c"]);
    assert_eq!(selected.edges.len(), 1);
    assert_eq!(selected.edges[0].id, "edge_dm_hba1c");

    let normal = GraphQuery::default().with_filter("status", "Normal");
    assert_eq!(ids(&service.query_graph("s1", &normal).unwrap().nodes), vec!["lab_old"]);

    let indicates = GraphQuery::default().with_edge_types([EdgeType::Indicates]);
    let selected = service.query_graph("s1", &indicates).unwrap();
    assert_eq!(selected.nodes.len(), 5);
    assert!(selected.edges.iter().all(|e| e.edge_type == EdgeType::Indicates));
}

#[test]
fn writes_are_validated_and_visible() {
    let service = service_with(vec![diabetes_graph("s1")]);
    let before = service.get_patient_graph("s1").unwrap();

    service.insert_node("s1", condition("condition_htn", "Hypertension", None)).unwrap();
    service
        .insert_edge("s1", edge("edge_smoke_htn", "social_smoking", "condition_htn", EdgeType::AtRiskFor, Some(0.5)))
        .unwrap();
    assert_eq!(ids(&service.get_related_nodes("s1", "social_smoking")), vec!["condition_htn"]);

    let renamed = condition("condition_htn", "Essential Hypertension", Some(date(2020, 3, 15)));
    service.update_node("s1", renamed).unwrap();
    assert_eq!(
        service.get_patient_graph("s1").unwrap().node("condition_htn").unwrap().label,
        "Essential Hypertension"
    );

    let rewired = edge("edge_smoke_htn", "social_smoking", "condition_dm", EdgeType::AtRiskFor, Some(0.4));
    service.update_edge("s1", rewired).unwrap();
    assert_eq!(
        service.get_path_between_nodes("s1", "social_smoking", "condition_dm").unwrap().strength,
        0.4
    );
    assert!(service.get_path_between_nodes("s1", "social_smoking", "condition_htn").is_none());

    let after = service.get_patient_graph("s1").unwrap();
    assert!(after.last_updated > before.last_updated);
}

#[test]
fn invalid_writes_fail_with_typed_errors() {
    let service = service_with(vec![diabetes_graph("s1")]);
    assert!(matches!(
        service.insert_node("s1", medication("med_metformin", "Metformin")),
        Err(GraphError::AlreadyExists(_))
    ));
    assert!(matches!(
        service.insert_edge("s1", edge("edge_x", "med_metformin", "ghost", EdgeType::RelatedTo, None)),
        Err(GraphError::IntegrityViolation { .. })
    ));
    assert!(matches!(
        service.insert_edge("s1", edge("edge_dm_metformin", "condition_dm", "lab_hba1c", EdgeType::RelatedTo, None)),
        Err(GraphError::AlreadyExists(_))
    ));
    assert!(matches!(
        service.update_node("s1", medication("med_unknown", "Unknown")),
        Err(GraphError::NotFound(_))
    ));
    assert!(matches!(
        service.update_edge("s1", edge("edge_dm_metformin", "condition_dm", "ghost", EdgeType::PrescribedBy, None)),
        Err(GraphError::IntegrityViolation { .. })
    ));
    assert!(matches!(
        service.insert_node("s404", medication("med_x", "X")),
        Err(GraphError::NotFound(_))
    ));
    assert_eq!(service.get_patient_graph("s1").unwrap(), diabetes_graph("s1"));
}

#[test]
fn readers_see_whole_snapshots_during_writes() {
    let service = Arc::new(service_with(vec![diabetes_graph("s1")]));
    let writer = {
        let service = Arc::clone(&service);
        thread::spawn(move || {
            for i in 0..50 {
                let node_id = format!("med_{}", i);
                service.insert_node("s1", medication(&node_id, "Generic")).unwrap();
                service
                    .insert_edge("s1", edge(&format!("edge_{}", i), "condition_dm", &node_id, EdgeType::PrescribedBy, None))
                    .unwrap();
            }
        })
    };
    let reader = {
        let service = Arc::clone(&service);
        thread::spawn(move || {
            for _ in 0..200 {
                let graph = service.get_patient_graph("s1").unwrap();
                let node_ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
                for e in &graph.edges {
                    assert!(node_ids.contains(&e.source.as_str()));
                    assert!(node_ids.contains(&e.target.as_str()));
                }
            }
        })
    };
    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(service.get_related_nodes("s1", "condition_dm").len(), 52);
}

#[test]
fn from_config_reads_seed_file() {
    let seed = medgraph::SeedFile { graphs: vec![diabetes_graph("s1")] };
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(serde_json::to_string_pretty(&seed).unwrap().as_bytes()).unwrap();

    let config = ServiceConfig {
        seed_path: Some(file.path().to_path_buf()),
        ..ServiceConfig::default()
    };
    let service = MedicalGraphService::from_config(config).unwrap();
    assert_eq!(service.list_patients(), vec!["p001", "p002", "s1"]);

    let config = ServiceConfig {
        seed_path: Some(file.path().to_path_buf()),
        load_builtin_seed: false,
        ..ServiceConfig::default()
    };
    let service = MedicalGraphService::from_config(config).unwrap();
    assert_eq!(service.list_patients(), vec!["s1"]);
    assert_eq!(service.get_patient_graph("s1").unwrap(), diabetes_graph("s1"));
}
