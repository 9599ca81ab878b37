//! Dataset metadata and the category ingestion helpers that read it.
//!
//! Metadata arrives as a loosely structured JSON record. The helpers here
//! pull out the pieces the index needs and turn shape violations into
//! [`IndexError::Format`]. A missing section is not a violation: it yields
//! no entities.

use crate::error::{IndexError, IndexResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Section names inside the metadata record.
pub const CLUSTERINGS: &str = "clusterings";
pub const ANNOTATIONS: &str = "annotations";
pub const METRICS: &str = "metrics";

/// The dataset's metadata record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaData(Value);

/// One clustering: its name and the description of each cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusteringRecord {
    pub name: String,
    pub cluster_descriptions: Vec<String>,
}

impl MetaData {
    pub fn new(value: Value) -> Self {
        MetaData(value)
    }

    /// Whether `section` is present and not null.
    pub fn has_section(&self, section: &str) -> bool {
        self.0.get(section).is_some_and(|v| !v.is_null())
    }

    pub fn clusterings(&self) -> IndexResult<Vec<ClusteringRecord>> {
        self.records(CLUSTERINGS)?
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let path = format!("{CLUSTERINGS}[{i}]");
                let name = string_field(record, &path, "name")?;
                let clusters = match record.get("clusters") {
                    None | Some(Value::Null) => &[][..],
                    Some(Value::Array(clusters)) => clusters.as_slice(),
                    Some(_) => {
                        return Err(IndexError::Format {
                            path,
                            field: "clusters",
                            reason: "must be a list",
                        })
                    }
                };
                let cluster_descriptions = clusters
                    .iter()
                    .enumerate()
                    .map(|(j, cluster)| {
                        string_field(cluster, &format!("{path}.clusters[{j}]"), "description")
                    })
                    .collect::<IndexResult<Vec<_>>>()?;
                Ok(ClusteringRecord {
                    name,
                    cluster_descriptions,
                })
            })
            .collect()
    }

    pub fn annotation_names(&self) -> IndexResult<Vec<String>> {
        self.names(ANNOTATIONS)
    }

    pub fn metric_names(&self) -> IndexResult<Vec<String>> {
        self.names(METRICS)
    }

    fn names(&self, section: &'static str) -> IndexResult<Vec<String>> {
        self.records(section)?
            .iter()
            .enumerate()
            .map(|(i, record)| string_field(record, &format!("{section}[{i}]"), "name"))
            .collect()
    }

    fn records(&self, section: &'static str) -> IndexResult<&[Value]> {
        match self.0.get(section) {
            None | Some(Value::Null) => Ok(&[][..]),
            Some(Value::Array(records)) => Ok(records.as_slice()),
            Some(_) => Err(IndexError::Format {
                path: "metadata".to_string(),
                field: section,
                reason: "must be a list",
            }),
        }
    }
}

fn string_field(record: &Value, path: &str, field: &'static str) -> IndexResult<String> {
    let format_error = |reason| IndexError::Format {
        path: path.to_string(),
        field,
        reason,
    };
    if !record.is_object() {
        return Err(format_error("is unreadable: record is not an object"));
    }
    match record.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) => Err(format_error("is missing")),
        Some(_) => Err(format_error("must be a string")),
    }
}
