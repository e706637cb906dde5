//! Collection schema entities and their wire conversions.
//!
//! A [`CollectionSchema`] is a read-only snapshot of the shape a collection
//! was declared with; the client uses it to validate submitted columns
//! before a request is built.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, Error, Result};
use crate::proto::vectis as proto;
use crate::proto::vectis::DataType;

/// Closed set of field types a column can carry.
///
/// Each variant maps to exactly one column variant and one wire encoding.
/// The discriminants match the wire `DataType` numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    String,
    BinaryVector,
    FloatVector,
}

impl FieldType {
    pub fn is_vector(&self) -> bool {
        matches!(self, FieldType::BinaryVector | FieldType::FloatVector)
    }

    pub(crate) fn to_proto(self) -> DataType {
        match self {
            FieldType::Bool => DataType::Bool,
            FieldType::Int8 => DataType::Int8,
            FieldType::Int16 => DataType::Int16,
            FieldType::Int32 => DataType::Int32,
            FieldType::Int64 => DataType::Int64,
            FieldType::Float => DataType::Float,
            FieldType::Double => DataType::Double,
            FieldType::String => DataType::String,
            FieldType::BinaryVector => DataType::BinaryVector,
            FieldType::FloatVector => DataType::FloatVector,
        }
    }

    pub(crate) fn from_proto(data_type: DataType) -> Option<Self> {
        match data_type {
            DataType::Bool => Some(FieldType::Bool),
            DataType::Int8 => Some(FieldType::Int8),
            DataType::Int16 => Some(FieldType::Int16),
            DataType::Int32 => Some(FieldType::Int32),
            DataType::Int64 => Some(FieldType::Int64),
            DataType::Float => Some(FieldType::Float),
            DataType::Double => Some(FieldType::Double),
            DataType::String => Some(FieldType::String),
            DataType::BinaryVector => Some(FieldType::BinaryVector),
            DataType::FloatVector => Some(FieldType::FloatVector),
            DataType::None => None,
        }
    }
}

/// One field definition inside a collection schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub description: String,
    pub field_type: FieldType,
    pub primary_key: bool,
    pub auto_id: bool,
    /// Vector dimension; `None` for scalar fields. Binary vector dimension
    /// is counted in bits and must be a multiple of 8.
    pub dim: Option<i64>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            field_type,
            primary_key: false,
            auto_id: false,
            dim: None,
        }
    }

    /// Int64 primary key field.
    pub fn primary(name: impl Into<String>) -> Self {
        Self {
            primary_key: true,
            ..Self::new(name, FieldType::Int64)
        }
    }

    pub fn float_vector(name: impl Into<String>, dim: i64) -> Self {
        Self {
            dim: Some(dim),
            ..Self::new(name, FieldType::FloatVector)
        }
    }

    pub fn binary_vector(name: impl Into<String>, dim: i64) -> Self {
        Self {
            dim: Some(dim),
            ..Self::new(name, FieldType::BinaryVector)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_auto_id(mut self, auto_id: bool) -> Self {
        self.auto_id = auto_id;
        self
    }

    pub(crate) fn to_proto(&self) -> proto::FieldSchema {
        proto::FieldSchema {
            field_id: 0,
            name: self.name.clone(),
            is_primary_key: self.primary_key,
            description: self.description.clone(),
            data_type: self.field_type.to_proto() as i32,
            dim: self.dim.unwrap_or(0),
            auto_id: self.auto_id,
        }
    }

    pub(crate) fn from_proto(fs: proto::FieldSchema) -> Result<Self> {
        let declared = fs.data_type;
        let field_type = DataType::try_from(declared)
            .ok()
            .and_then(FieldType::from_proto)
            .ok_or(DecodeError::UnexpectedKind {
                field: fs.name.clone(),
                declared,
            })?;
        Ok(Self {
            name: fs.name,
            description: fs.description,
            field_type,
            primary_key: fs.is_primary_key,
            auto_id: fs.auto_id,
            dim: if fs.dim > 0 { Some(fs.dim) } else { None },
        })
    }
}

/// Ordered field definitions describing a collection's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSchema {
    pub name: String,
    pub description: String,
    pub auto_id: bool,
    pub fields: Vec<FieldSchema>,
}

impl CollectionSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            auto_id: false,
            fields,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_auto_id(mut self, auto_id: bool) -> Self {
        self.auto_id = auto_id;
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn primary_field(&self) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.primary_key)
    }

    pub(crate) fn to_proto(&self) -> proto::CollectionSchema {
        proto::CollectionSchema {
            name: self.name.clone(),
            description: self.description.clone(),
            auto_id: self.auto_id,
            fields: self.fields.iter().map(FieldSchema::to_proto).collect(),
        }
    }

    pub(crate) fn from_proto(cs: proto::CollectionSchema) -> Result<Self> {
        let fields = cs
            .fields
            .into_iter()
            .map(FieldSchema::from_proto)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: cs.name,
            description: cs.description,
            auto_id: cs.auto_id,
            fields,
        })
    }
}

/// Collection metadata returned by describe/list operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub schema: CollectionSchema,
    pub created_utc_timestamp: i64,
}

/// Partition metadata returned by show_partitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub id: i64,
    pub name: String,
    pub collection_name: String,
}

/// Distance metrics for vector similarity calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
    #[default]
    Cosine,
    Euclidean,
    DotProduct,
    Hamming,
}

impl MetricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Cosine => "COSINE",
            MetricType::Euclidean => "EUCLIDEAN",
            MetricType::DotProduct => "DOT_PRODUCT",
            MetricType::Hamming => "HAMMING",
        }
    }

    /// Inverse of [`as_str`](Self::as_str); `None` for unrecognized names.
    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "COSINE" => Some(MetricType::Cosine),
            "EUCLIDEAN" => Some(MetricType::Euclidean),
            "DOT_PRODUCT" => Some(MetricType::DotProduct),
            "HAMMING" => Some(MetricType::Hamming),
            _ => None,
        }
    }
}

/// Vector indexing algorithms for search optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexType {
    #[default]
    Hnsw,
    Ivf,
    Pq,
    Flat,
    Annoy,
}

impl IndexType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexType::Hnsw => "HNSW",
            IndexType::Ivf => "IVF",
            IndexType::Pq => "PQ",
            IndexType::Flat => "FLAT",
            IndexType::Annoy => "ANNOY",
        }
    }

    /// Inverse of [`as_str`](Self::as_str); `None` for unrecognized names.
    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "HNSW" => Some(IndexType::Hnsw),
            "IVF" => Some(IndexType::Ivf),
            "PQ" => Some(IndexType::Pq),
            "FLAT" => Some(IndexType::Flat),
            "ANNOY" => Some(IndexType::Annoy),
            _ => None,
        }
    }
}

/// Build state of an index, as reported by get_index_state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexState {
    None,
    Unissued,
    InProgress,
    Finished,
    Failed,
}

impl IndexState {
    pub(crate) fn from_proto(state: proto::IndexState) -> Self {
        match state {
            proto::IndexState::None => IndexState::None,
            proto::IndexState::Unissued => IndexState::Unissued,
            proto::IndexState::InProgress => IndexState::InProgress,
            proto::IndexState::Finished => IndexState::Finished,
            proto::IndexState::Failed => IndexState::Failed,
        }
    }
}

/// Index definition: algorithm plus its tuning parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    pub index_type: IndexType,
    pub metric_type: MetricType,
    /// Algorithm-specific parameters, e.g. `{"M": "16", "efConstruction": "200"}`.
    pub params: HashMap<String, String>,
}

impl Index {
    pub fn new(index_type: IndexType, metric_type: MetricType) -> Self {
        Self {
            name: String::new(),
            index_type,
            metric_type,
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Render the index into wire key-value pairs. The algorithm-specific
    /// params nest as a JSON object under the "params" key.
    pub(crate) fn to_proto_params(&self) -> Result<Vec<proto::KeyValuePair>> {
        let params_json = serde_json::to_string(&self.params)
            .map_err(|e| Error::InvalidArgument(format!("unserializable index params: {e}")))?;
        Ok(vec![
            proto::KeyValuePair {
                key: "index_type".to_string(),
                value: self.index_type.as_str().to_string(),
            },
            proto::KeyValuePair {
                key: "metric_type".to_string(),
                value: self.metric_type.as_str().to_string(),
            },
            proto::KeyValuePair {
                key: "params".to_string(),
                value: params_json,
            },
        ])
    }

    /// Unrecognized `index_type`/`metric_type` values are a decode error,
    /// never a silent fall back to the defaults.
    pub(crate) fn from_proto(desc: proto::IndexDescription) -> Result<Self> {
        let mut index_type = IndexType::default();
        let mut metric_type = MetricType::default();
        let mut params = HashMap::new();
        for kv in desc.params {
            match kv.key.as_str() {
                "index_type" => {
                    index_type = IndexType::from_str_name(&kv.value).ok_or(
                        DecodeError::UnrecognizedValue {
                            key: "index_type",
                            value: kv.value,
                        },
                    )?;
                }
                "metric_type" => {
                    metric_type = MetricType::from_str_name(&kv.value).ok_or(
                        DecodeError::UnrecognizedValue {
                            key: "metric_type",
                            value: kv.value,
                        },
                    )?;
                }
                "params" => {
                    params = serde_json::from_str(&kv.value).map_err(|_| {
                        DecodeError::UnrecognizedValue {
                            key: "params",
                            value: kv.value,
                        }
                    })?;
                }
                _ => {}
            }
        }
        Ok(Self {
            name: desc.index_name,
            index_type,
            metric_type,
            params,
        })
    }
}

pub(crate) fn stats_to_map(stats: Vec<proto::KeyValuePair>) -> HashMap<String, String> {
    stats.into_iter().map(|kv| (kv.key, kv.value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn films_schema() -> CollectionSchema {
        CollectionSchema::new(
            "films",
            vec![
                FieldSchema::primary("film_id"),
                FieldSchema::new("year", FieldType::Int32),
                FieldSchema::float_vector("embedding", 8),
            ],
        )
    }

    #[test]
    fn test_schema_proto_round_trip() {
        let schema = films_schema();
        let restored = CollectionSchema::from_proto(schema.to_proto()).unwrap();
        assert_eq!(schema, restored);
    }

    #[test]
    fn test_field_lookup() {
        let schema = films_schema();
        assert_eq!(schema.field("year").unwrap().field_type, FieldType::Int32);
        assert!(schema.field("missing").is_none());
        assert_eq!(schema.primary_field().unwrap().name, "film_id");
        assert_eq!(schema.field("embedding").unwrap().dim, Some(8));
    }

    #[test]
    fn test_unknown_wire_type_rejected() {
        let fs = proto::FieldSchema {
            field_id: 1,
            name: "mystery".to_string(),
            is_primary_key: false,
            description: String::new(),
            data_type: 0,
            dim: 0,
            auto_id: false,
        };
        assert!(FieldSchema::from_proto(fs).is_err());
    }

    #[test]
    fn test_index_params_round_trip() {
        let index = Index::new(IndexType::Hnsw, MetricType::Euclidean)
            .with_param("M", "16")
            .with_param("efConstruction", "200");
        let params = index.to_proto_params().unwrap();
        let desc = proto::IndexDescription {
            index_name: "embedding_idx".to_string(),
            index_id: 7,
            field_name: "embedding".to_string(),
            params,
        };
        let restored = Index::from_proto(desc).unwrap();
        assert_eq!(restored.index_type, IndexType::Hnsw);
        assert_eq!(restored.metric_type, MetricType::Euclidean);
        assert_eq!(restored.params.get("M").map(String::as_str), Some("16"));
    }

    #[test]
    fn test_every_metric_type_round_trips() {
        for metric in [
            MetricType::Cosine,
            MetricType::Euclidean,
            MetricType::DotProduct,
            MetricType::Hamming,
        ] {
            let desc = proto::IndexDescription {
                index_name: String::new(),
                index_id: 0,
                field_name: "embedding".to_string(),
                params: Index::new(IndexType::Flat, metric).to_proto_params().unwrap(),
            };
            let restored = Index::from_proto(desc).unwrap();
            assert_eq!(restored.metric_type, metric);
        }
    }

    #[test]
    fn test_unrecognized_index_params_rejected() {
        for (key, value) in [("metric_type", "L2"), ("index_type", "KDTREE"), ("params", "{")] {
            let desc = proto::IndexDescription {
                index_name: String::new(),
                index_id: 0,
                field_name: "embedding".to_string(),
                params: vec![proto::KeyValuePair {
                    key: key.to_string(),
                    value: value.to_string(),
                }],
            };
            assert!(
                Index::from_proto(desc).is_err(),
                "{key}={value} must not fall back to a default"
            );
        }
    }

    #[test]
    fn test_json_names_match_wire_names() {
        assert_eq!(
            serde_json::to_string(&MetricType::DotProduct).unwrap(),
            format!("\"{}\"", MetricType::DotProduct.as_str())
        );
        assert_eq!(
            serde_json::to_string(&FieldType::BinaryVector).unwrap(),
            "\"BINARY_VECTOR\""
        );
        assert_eq!(
            serde_json::to_string(&FieldType::FloatVector).unwrap(),
            "\"FLOAT_VECTOR\""
        );
    }
}
