// models/src/queries.rs
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::edges::{EdgeType, GraphEdge};
use crate::errors::{ValidationError, ValidationResult};
use crate::properties::PropertyValue;
use crate::vertices::{GraphNode, NodeType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathType {
    /// Exactly one edge between the two endpoints.
    Direct,
    /// Reserved for multi-hop routes; never produced by the current path search.
    Indirect,
}

/// A route between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphPath {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub path_type: PathType,
    pub strength: f64,
}

/// Inclusive calendar-date window. `start` never follows `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ValidationResult<Self> {
        if end < start {
            return Err(ValidationError::InvalidDateRange { start_field: "start", end_field: "end" });
        }
        Ok(DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ValidationError;

    fn try_from(raw: RawDateRange) -> ValidationResult<Self> {
        DateRange::new(raw.start, raw.end)
    }
}

/// Filter describing a sub-graph of a patient's graph. Every absent field
/// matches everything.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_types: Option<Vec<NodeType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_types: Option<Vec<EdgeType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    /// camelCase property key -> required value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<BTreeMap<String, PropertyValue>>,
}

impl GraphQuery {
    pub fn with_node_types(mut self, types: impl IntoIterator<Item = NodeType>) -> Self {
        self.node_types = Some(types.into_iter().collect());
        self
    }

    pub fn with_edge_types(mut self, types: impl IntoIterator<Item = EdgeType>) -> Self {
        self.edge_types = Some(types.into_iter().collect());
        self
    }

    /// Fails when `end` precedes `start`.
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> ValidationResult<Self> {
        self.date_range = Some(DateRange::new(start, end)?);
        Ok(self)
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.filters.get_or_insert_with(BTreeMap::new).insert(key.into(), value.into());
        self
    }
}
