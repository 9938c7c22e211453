// lib/src/engine/test_support.rs
//! Small node and edge builders shared by unit tests.

use chrono::{NaiveDate, TimeZone, Utc};
use models::medical::{
    ClinicalStatus, ConditionProperties, LabProperties, LabStatus, MedicationProperties, MedicationStatus,
};
use models::{EdgeType, GraphEdge, GraphNode, Identifier, MedicalKnowledgeGraph, ToNode};

pub fn id(value: &str) -> Identifier {
    Identifier::new(value).unwrap()
}

pub fn condition(node_id: &str) -> GraphNode {
    let record = ConditionProperties {
        name: format!("Condition {}", node_id),
        icd_code: None,
        status: ClinicalStatus::Active,
        severity: None,
        onset_date: None,
        category: None,
    };
    record.to_node(id(node_id), node_id).unwrap()
}

pub fn medication(node_id: &str) -> GraphNode {
    let record = MedicationProperties {
        name: "Metformin".into(),
        generic_name: None,
        dosage: "1000mg".into(),
        frequency: "Twice daily".into(),
        route: "Oral".into(),
        medication_class: None,
        status: MedicationStatus::Active,
        start_date: None,
        end_date: None,
    };
    record.to_node(id(node_id), node_id).unwrap()
}

pub fn lab(node_id: &str, year: i32, month: u32, day: u32) -> GraphNode {
    let record = LabProperties {
        test_name: "Hemoglobin A1c".into(),
        value: "7.2".into(),
        unit: Some("%".into()),
        reference_range: None,
        status: LabStatus::Abnormal,
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
    };
    record.to_node(id(node_id), node_id).unwrap()
}

pub fn edge(edge_id: &str, source: &str, target: &str, weight: Option<f64>) -> GraphEdge {
    let mut edge = GraphEdge::new(id(edge_id), id(source), id(target), EdgeType::RelatedTo, "related to");
    edge.weight = weight;
    edge
}

pub fn graph_of(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> MedicalKnowledgeGraph {
    MedicalKnowledgeGraph {
        patient_id: "p_test".into(),
        nodes,
        edges,
        last_updated: Utc.with_ymd_and_hms(2024, 12, 19, 10, 0, 0).unwrap(),
    }
}
