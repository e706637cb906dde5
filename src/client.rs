/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Client operation layer.
//!
//! [`Client`] composes typed [`Column`]s into insert/search requests, sends
//! them over a [`VectorService`] transport, and decodes responses back into
//! columns. The transport is a trait so alternate implementations (an
//! in-process test double, a different channel) substitute without changing
//! caller code; [`GrpcService`] is the tonic-backed production transport.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};
use tracing::{debug, info};

use crate::column::Column;
use crate::config::ClientConfig;
use crate::decode::{column_from_field_data, search_results_from_proto};
use crate::error::{DecodeError, Error, Result};
use crate::proto::vectis as proto;
use crate::proto::vectis::vectis_client::VectisClient;
use crate::proto::vectis::ErrorCode;
use crate::schema::{
    stats_to_map, Collection, CollectionSchema, FieldType, Index, IndexState, MetricType, Partition,
};

/// The decoded outcome of one query vector's similarity search.
///
/// `error` carries a per-query service failure; when set, the other fields
/// are empty and the surrounding call still succeeds so sibling queries can
/// be processed.
#[derive(Debug)]
pub struct SearchResult {
    pub result_count: usize,
    /// Primary-key values of matched rows.
    pub ids: Option<Column>,
    /// Requested output fields, same row count as `ids`.
    pub fields: Vec<Column>,
    /// One score per matched row.
    pub scores: Vec<f32>,
    pub error: Option<Error>,
}

/// Query vectors for a search batch. All vectors in a batch share one
/// dimension, which must match the target vector field's schema.
#[derive(Debug, Clone)]
pub enum QueryVectors {
    Float(Vec<Vec<f32>>),
    /// Packed binary vectors, `dim / 8` bytes each.
    Binary(Vec<Vec<u8>>),
}

impl QueryVectors {
    pub fn len(&self) -> usize {
        match self {
            QueryVectors::Float(v) => v.len(),
            QueryVectors::Binary(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn field_type(&self) -> FieldType {
        match self {
            QueryVectors::Float(_) => FieldType::FloatVector,
            QueryVectors::Binary(_) => FieldType::BinaryVector,
        }
    }

    /// Validate row widths against the schema dimension and flatten into one
    /// wire vector field.
    fn to_vector_field(&self, dim: i64) -> Result<proto::VectorField> {
        let data = match self {
            QueryVectors::Float(rows) => {
                check_rows(rows, dim as usize)?;
                proto::vector_field::Data::FloatVector(proto::FloatArray {
                    data: rows.iter().flatten().copied().collect(),
                })
            }
            QueryVectors::Binary(rows) => {
                check_rows(rows, dim as usize / 8)?;
                proto::vector_field::Data::BinaryVector(rows.iter().flatten().copied().collect())
            }
        };
        Ok(proto::VectorField {
            dim,
            data: Some(data),
        })
    }
}

fn check_rows<T>(rows: &[Vec<T>], width: usize) -> Result<()> {
    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(Error::InvalidArgument(format!(
                "query vector {} has {} values, expected {}",
                i,
                row.len(),
                width
            )));
        }
    }
    Ok(())
}

/// Transport capability set: send a typed request, receive a typed response
/// or an error. One method per remote operation.
#[async_trait]
pub trait VectorService: Send + Sync {
    async fn create_collection(&self, request: proto::CreateCollectionRequest) -> Result<proto::Status>;
    async fn drop_collection(&self, request: proto::DropCollectionRequest) -> Result<proto::Status>;
    async fn has_collection(&self, request: proto::HasCollectionRequest) -> Result<proto::BoolResponse>;
    async fn describe_collection(
        &self,
        request: proto::DescribeCollectionRequest,
    ) -> Result<proto::DescribeCollectionResponse>;
    async fn list_collections(
        &self,
        request: proto::ListCollectionsRequest,
    ) -> Result<proto::ListCollectionsResponse>;
    async fn get_collection_statistics(
        &self,
        request: proto::GetCollectionStatisticsRequest,
    ) -> Result<proto::GetCollectionStatisticsResponse>;
    async fn load_collection(&self, request: proto::LoadCollectionRequest) -> Result<proto::Status>;
    async fn release_collection(&self, request: proto::ReleaseCollectionRequest) -> Result<proto::Status>;
    async fn create_partition(&self, request: proto::CreatePartitionRequest) -> Result<proto::Status>;
    async fn drop_partition(&self, request: proto::DropPartitionRequest) -> Result<proto::Status>;
    async fn has_partition(&self, request: proto::HasPartitionRequest) -> Result<proto::BoolResponse>;
    async fn show_partitions(
        &self,
        request: proto::ShowPartitionsRequest,
    ) -> Result<proto::ShowPartitionsResponse>;
    async fn create_index(&self, request: proto::CreateIndexRequest) -> Result<proto::Status>;
    async fn describe_index(
        &self,
        request: proto::DescribeIndexRequest,
    ) -> Result<proto::DescribeIndexResponse>;
    async fn drop_index(&self, request: proto::DropIndexRequest) -> Result<proto::Status>;
    async fn get_index_state(
        &self,
        request: proto::GetIndexStateRequest,
    ) -> Result<proto::GetIndexStateResponse>;
    async fn insert(&self, request: proto::InsertRequest) -> Result<proto::MutationResult>;
    async fn flush(&self, request: proto::FlushRequest) -> Result<proto::Status>;
    async fn search(&self, request: proto::SearchRequest) -> Result<proto::SearchResults>;
}

/// Production transport over a tonic channel.
///
/// The channel is established once at connect time and is read-only
/// afterwards; per-call clients are cheap clones sharing it, which is what
/// makes `&self` operations safe under concurrency.
pub struct GrpcService {
    client: VectisClient<Channel>,
    authorization: Option<MetadataValue<Ascii>>,
}

impl GrpcService {
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let mut endpoint = Endpoint::from_shared(config.endpoint.clone())
            .map_err(|e| Error::Connection(format!("invalid endpoint '{}': {e}", config.endpoint)))?
            .connect_timeout(config.connect_timeout);
        if let Some(tls) = &config.tls {
            let mut tls_config = ClientTlsConfig::new();
            if let Some(domain) = &tls.domain_name {
                tls_config = tls_config.domain_name(domain.clone());
            }
            if let Some(path) = &tls.ca_cert_file {
                let pem = std::fs::read(path).map_err(|e| {
                    Error::Connection(format!("cannot read CA certificate {}: {e}", path.display()))
                })?;
                tls_config = tls_config.ca_certificate(Certificate::from_pem(pem));
            }
            endpoint = endpoint
                .tls_config(tls_config)
                .map_err(|e| Error::Connection(format!("invalid TLS config: {e}")))?;
        }
        let authorization = match &config.credentials {
            Some(creds) => Some(
                format!("{}:{}", creds.username, creds.password)
                    .parse()
                    .map_err(|_| Error::Connection("credentials are not valid ASCII".to_string()))?,
            ),
            None => None,
        };
        let channel = endpoint
            .connect()
            .await
            .map_err(|e| Error::Connection(format!("failed to dial {}: {e}", config.endpoint)))?;
        Ok(Self {
            client: VectisClient::new(channel),
            authorization,
        })
    }

    fn request<T>(&self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        if let Some(token) = &self.authorization {
            request.metadata_mut().insert("authorization", token.clone());
        }
        request
    }
}

macro_rules! unary {
    ($self:ident, $method:ident, $request:ident) => {{
        let mut client = $self.client.clone();
        Ok(client.$method($self.request($request)).await?.into_inner())
    }};
}

#[async_trait]
impl VectorService for GrpcService {
    async fn create_collection(&self, request: proto::CreateCollectionRequest) -> Result<proto::Status> {
        unary!(self, create_collection, request)
    }
    async fn drop_collection(&self, request: proto::DropCollectionRequest) -> Result<proto::Status> {
        unary!(self, drop_collection, request)
    }
    async fn has_collection(&self, request: proto::HasCollectionRequest) -> Result<proto::BoolResponse> {
        unary!(self, has_collection, request)
    }
    async fn describe_collection(
        &self,
        request: proto::DescribeCollectionRequest,
    ) -> Result<proto::DescribeCollectionResponse> {
        unary!(self, describe_collection, request)
    }
    async fn list_collections(
        &self,
        request: proto::ListCollectionsRequest,
    ) -> Result<proto::ListCollectionsResponse> {
        unary!(self, list_collections, request)
    }
    async fn get_collection_statistics(
        &self,
        request: proto::GetCollectionStatisticsRequest,
    ) -> Result<proto::GetCollectionStatisticsResponse> {
        unary!(self, get_collection_statistics, request)
    }
    async fn load_collection(&self, request: proto::LoadCollectionRequest) -> Result<proto::Status> {
        unary!(self, load_collection, request)
    }
    async fn release_collection(&self, request: proto::ReleaseCollectionRequest) -> Result<proto::Status> {
        unary!(self, release_collection, request)
    }
    async fn create_partition(&self, request: proto::CreatePartitionRequest) -> Result<proto::Status> {
        unary!(self, create_partition, request)
    }
    async fn drop_partition(&self, request: proto::DropPartitionRequest) -> Result<proto::Status> {
        unary!(self, drop_partition, request)
    }
    async fn has_partition(&self, request: proto::HasPartitionRequest) -> Result<proto::BoolResponse> {
        unary!(self, has_partition, request)
    }
    async fn show_partitions(
        &self,
        request: proto::ShowPartitionsRequest,
    ) -> Result<proto::ShowPartitionsResponse> {
        unary!(self, show_partitions, request)
    }
    async fn create_index(&self, request: proto::CreateIndexRequest) -> Result<proto::Status> {
        unary!(self, create_index, request)
    }
    async fn describe_index(
        &self,
        request: proto::DescribeIndexRequest,
    ) -> Result<proto::DescribeIndexResponse> {
        unary!(self, describe_index, request)
    }
    async fn drop_index(&self, request: proto::DropIndexRequest) -> Result<proto::Status> {
        unary!(self, drop_index, request)
    }
    async fn get_index_state(
        &self,
        request: proto::GetIndexStateRequest,
    ) -> Result<proto::GetIndexStateResponse> {
        unary!(self, get_index_state, request)
    }
    async fn insert(&self, request: proto::InsertRequest) -> Result<proto::MutationResult> {
        unary!(self, insert, request)
    }
    async fn flush(&self, request: proto::FlushRequest) -> Result<proto::Status> {
        unary!(self, flush, request)
    }
    async fn search(&self, request: proto::SearchRequest) -> Result<proto::SearchResults> {
        unary!(self, search, request)
    }
}

/// Client handle for one Vectis session.
///
/// Lifecycle is Disconnected -> Connected -> Closed: [`Client::connect`]
/// establishes the session, [`Client::close`] ends it, and every operation
/// after close fails with [`Error::ClientClosed`] without touching the
/// transport. There is no automatic reconnect; a lost transport surfaces as
/// an error on the failing call.
pub struct Client {
    service: Box<dyn VectorService>,
    rpc_timeout: Option<Duration>,
    closed: AtomicBool,
}

impl Client {
    /// Dial the configured endpoint and return a connected client.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let service = GrpcService::connect(&config).await?;
        info!(endpoint = %config.endpoint, "connected to vectis");
        Ok(Self::with_service(Box::new(service), config.rpc_timeout))
    }

    /// Build a client over an already-established transport. This is the
    /// substitution point for test doubles and alternate channels.
    pub fn with_service(service: Box<dyn VectorService>, rpc_timeout: Option<Duration>) -> Self {
        Self {
            service,
            rpc_timeout,
            closed: AtomicBool::new(false),
        }
    }

    /// Release the session. Idempotent; all later operations fail with
    /// [`Error::ClientClosed`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Run one remote call under the closed-state check and the configured
    /// deadline. The future argument is lazy, so a closed client never
    /// reaches the transport.
    async fn call<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_closed() {
            return Err(Error::ClientClosed);
        }
        match self.rpc_timeout {
            Some(deadline) => tokio::time::timeout(deadline, fut)
                .await
                .map_err(|_| Error::DeadlineExceeded)?,
            None => fut.await,
        }
    }

    fn check_status(status: Option<proto::Status>) -> Result<()> {
        match status {
            Some(s) if s.error_code == ErrorCode::Success as i32 => Ok(()),
            Some(s) => Err(Error::from_status(s)),
            None => Err(DecodeError::MissingField("status".to_string()).into()),
        }
    }

    // -- collection --

    pub async fn create_collection(&self, schema: &CollectionSchema, shards_num: i32) -> Result<()> {
        debug!(collection = %schema.name, "create collection");
        let request = proto::CreateCollectionRequest {
            schema: Some(schema.to_proto()),
            shards_num,
        };
        let status = self.call(self.service.create_collection(request)).await?;
        Self::check_status(Some(status))
    }

    pub async fn drop_collection(&self, collection: &str) -> Result<()> {
        let request = proto::DropCollectionRequest {
            collection_name: collection.to_string(),
        };
        let status = self.call(self.service.drop_collection(request)).await?;
        Self::check_status(Some(status))
    }

    pub async fn has_collection(&self, collection: &str) -> Result<bool> {
        let request = proto::HasCollectionRequest {
            collection_name: collection.to_string(),
        };
        let response = self.call(self.service.has_collection(request)).await?;
        Self::check_status(response.status)?;
        Ok(response.value)
    }

    pub async fn describe_collection(&self, collection: &str) -> Result<Collection> {
        let request = proto::DescribeCollectionRequest {
            collection_name: collection.to_string(),
        };
        let response = self.call(self.service.describe_collection(request)).await?;
        Self::check_status(response.status)?;
        let schema = response
            .schema
            .ok_or_else(|| DecodeError::MissingField("schema".to_string()))?;
        Ok(Collection {
            id: response.collection_id,
            schema: CollectionSchema::from_proto(schema)?,
            created_utc_timestamp: response.created_utc_timestamp,
        })
    }

    pub async fn list_collections(&self) -> Result<Vec<String>> {
        let response = self
            .call(self.service.list_collections(proto::ListCollectionsRequest {}))
            .await?;
        Self::check_status(response.status)?;
        Ok(response.collection_names)
    }

    pub async fn get_collection_statistics(&self, collection: &str) -> Result<HashMap<String, String>> {
        let request = proto::GetCollectionStatisticsRequest {
            collection_name: collection.to_string(),
        };
        let response = self.call(self.service.get_collection_statistics(request)).await?;
        Self::check_status(response.status)?;
        Ok(stats_to_map(response.stats))
    }

    pub async fn load_collection(&self, collection: &str) -> Result<()> {
        let request = proto::LoadCollectionRequest {
            collection_name: collection.to_string(),
        };
        let status = self.call(self.service.load_collection(request)).await?;
        Self::check_status(Some(status))
    }

    pub async fn release_collection(&self, collection: &str) -> Result<()> {
        let request = proto::ReleaseCollectionRequest {
            collection_name: collection.to_string(),
        };
        let status = self.call(self.service.release_collection(request)).await?;
        Self::check_status(Some(status))
    }

    // -- partition --

    pub async fn create_partition(&self, collection: &str, partition: &str) -> Result<()> {
        let request = proto::CreatePartitionRequest {
            collection_name: collection.to_string(),
            partition_name: partition.to_string(),
        };
        let status = self.call(self.service.create_partition(request)).await?;
        Self::check_status(Some(status))
    }

    pub async fn drop_partition(&self, collection: &str, partition: &str) -> Result<()> {
        let request = proto::DropPartitionRequest {
            collection_name: collection.to_string(),
            partition_name: partition.to_string(),
        };
        let status = self.call(self.service.drop_partition(request)).await?;
        Self::check_status(Some(status))
    }

    pub async fn has_partition(&self, collection: &str, partition: &str) -> Result<bool> {
        let request = proto::HasPartitionRequest {
            collection_name: collection.to_string(),
            partition_name: partition.to_string(),
        };
        let response = self.call(self.service.has_partition(request)).await?;
        Self::check_status(response.status)?;
        Ok(response.value)
    }

    pub async fn show_partitions(&self, collection: &str) -> Result<Vec<Partition>> {
        let request = proto::ShowPartitionsRequest {
            collection_name: collection.to_string(),
        };
        let response = self.call(self.service.show_partitions(request)).await?;
        Self::check_status(response.status)?;
        if response.partition_ids.len() != response.partition_names.len() {
            return Err(DecodeError::RowCountMismatch {
                field: "partition_ids".to_string(),
                expected: response.partition_names.len(),
                actual: response.partition_ids.len(),
            }
            .into());
        }
        Ok(response
            .partition_names
            .into_iter()
            .zip(response.partition_ids)
            .map(|(name, id)| Partition {
                id,
                name,
                collection_name: collection.to_string(),
            })
            .collect())
    }

    // -- index --

    pub async fn create_index(&self, collection: &str, field: &str, index: &Index) -> Result<()> {
        debug!(collection, field, index_type = index.index_type.as_str(), "create index");
        let request = proto::CreateIndexRequest {
            collection_name: collection.to_string(),
            field_name: field.to_string(),
            extra_params: index.to_proto_params()?,
        };
        let status = self.call(self.service.create_index(request)).await?;
        Self::check_status(Some(status))
    }

    pub async fn describe_index(&self, collection: &str, field: &str) -> Result<Vec<Index>> {
        let request = proto::DescribeIndexRequest {
            collection_name: collection.to_string(),
            field_name: field.to_string(),
        };
        let response = self.call(self.service.describe_index(request)).await?;
        Self::check_status(response.status)?;
        response
            .index_descriptions
            .into_iter()
            .map(Index::from_proto)
            .collect()
    }

    pub async fn drop_index(&self, collection: &str, field: &str) -> Result<()> {
        let request = proto::DropIndexRequest {
            collection_name: collection.to_string(),
            field_name: field.to_string(),
        };
        let status = self.call(self.service.drop_index(request)).await?;
        Self::check_status(Some(status))
    }

    pub async fn get_index_state(&self, collection: &str, field: &str) -> Result<IndexState> {
        let request = proto::GetIndexStateRequest {
            collection_name: collection.to_string(),
            field_name: field.to_string(),
        };
        let response = self.call(self.service.get_index_state(request)).await?;
        Self::check_status(response.status)?;
        let state =
            proto::IndexState::try_from(response.state).map_err(|_| DecodeError::UnrecognizedValue {
                key: "index state",
                value: response.state.to_string(),
            })?;
        Ok(IndexState::from_proto(state))
    }

    // -- data --

    /// Insert column-based data and return the primary-key column assigned
    /// or echoed by the service, in input row order. Insert is all-or-nothing
    /// per call.
    pub async fn insert(&self, collection: &str, partition: &str, columns: &[Column]) -> Result<Column> {
        let num_rows = validate_columns(columns)?;
        let described = self.describe_collection(collection).await?;
        validate_against_schema(columns, &described.schema)?;

        debug!(collection, partition, rows = num_rows, "insert");
        let request = proto::InsertRequest {
            collection_name: collection.to_string(),
            partition_name: partition.to_string(),
            fields_data: columns.iter().map(Column::to_field_data).collect(),
            num_rows: num_rows as u32,
        };
        let response = self.call(self.service.insert(request)).await?;
        Self::check_status(response.status)?;
        let ids = response
            .ids
            .ok_or_else(|| DecodeError::MissingField("ids".to_string()))?;
        column_from_field_data(ids, Some(num_rows))
    }

    /// Flush in-memory segments of a collection to storage.
    pub async fn flush(&self, collection: &str) -> Result<()> {
        let request = proto::FlushRequest {
            collection_names: vec![collection.to_string()],
        };
        let status = self.call(self.service.flush(request)).await?;
        Self::check_status(Some(status))
    }

    /// Similarity search with a boolean filter expression.
    ///
    /// Returns one [`SearchResult`] per query vector, in input order.
    /// Per-query service failures are reported in the corresponding result's
    /// `error`, not as a call-level failure; callers must check both.
    #[allow(clippy::too_many_arguments)]
    pub async fn search(
        &self,
        collection: &str,
        partitions: &[String],
        expr: &str,
        output_fields: &[String],
        vectors: QueryVectors,
        vector_field: &str,
        metric_type: MetricType,
        top_k: usize,
        params: &HashMap<String, String>,
    ) -> Result<Vec<SearchResult>> {
        if vectors.is_empty() {
            return Err(Error::InvalidArgument("no query vectors provided".to_string()));
        }
        if top_k == 0 {
            return Err(Error::InvalidArgument("top_k must be positive".to_string()));
        }
        let described = self.describe_collection(collection).await?;
        let field = described.schema.field(vector_field).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "field '{vector_field}' not found in collection '{collection}'"
            ))
        })?;
        if field.field_type != vectors.field_type() {
            return Err(Error::InvalidArgument(format!(
                "field '{}' is {:?}, query vectors are {:?}",
                vector_field,
                field.field_type,
                vectors.field_type()
            )));
        }
        let dim = field.dim.ok_or_else(|| {
            Error::InvalidArgument(format!("field '{vector_field}' has no dimension"))
        })?;

        let num_queries = vectors.len();
        debug!(collection, vector_field, num_queries, top_k, "search");
        let mut sorted_params: Vec<_> = params
            .iter()
            .map(|(k, v)| proto::KeyValuePair {
                key: k.clone(),
                value: v.clone(),
            })
            .collect();
        sorted_params.sort_by(|a, b| a.key.cmp(&b.key));

        let request = proto::SearchRequest {
            collection_name: collection.to_string(),
            partition_names: partitions.to_vec(),
            expr: expr.to_string(),
            output_fields: output_fields.to_vec(),
            vector_field: vector_field.to_string(),
            metric_type: metric_type.as_str().to_string(),
            top_k: top_k as i64,
            params: sorted_params,
            num_queries: num_queries as i64,
            vectors: Some(vectors.to_vector_field(dim)?),
        };
        let response = self.call(self.service.search(request)).await?;
        Self::check_status(response.status)?;
        let data = response
            .results
            .ok_or_else(|| DecodeError::MissingField("results".to_string()))?;
        let results = search_results_from_proto(data)?;
        if results.len() != num_queries {
            return Err(DecodeError::RowCountMismatch {
                field: "results".to_string(),
                expected: num_queries,
                actual: results.len(),
            }
            .into());
        }
        Ok(results)
    }
}

/// Row-count and naming invariants that hold before the schema is even
/// consulted. Returns the shared row count.
fn validate_columns(columns: &[Column]) -> Result<usize> {
    let first = columns
        .first()
        .ok_or_else(|| Error::InvalidArgument("no columns provided".to_string()))?;
    let num_rows = first.len();
    let mut seen = HashSet::new();
    for column in columns {
        if column.name().is_empty() {
            return Err(Error::InvalidArgument("column with empty name".to_string()));
        }
        if !seen.insert(column.name()) {
            return Err(Error::InvalidArgument(format!(
                "duplicate column '{}'",
                column.name()
            )));
        }
        if column.len() != num_rows {
            return Err(Error::InvalidArgument(format!(
                "column '{}' has {} rows, expected {}",
                column.name(),
                column.len(),
                num_rows
            )));
        }
    }
    Ok(num_rows)
}

fn validate_against_schema(columns: &[Column], schema: &CollectionSchema) -> Result<()> {
    for column in columns {
        let field = schema.field(column.name()).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "field '{}' not declared in collection '{}'",
                column.name(),
                schema.name
            ))
        })?;
        if field.field_type != column.field_type() {
            return Err(Error::InvalidArgument(format!(
                "field '{}' is declared {:?}, column is {:?}",
                column.name(),
                field.field_type,
                column.field_type()
            )));
        }
        if let (Some(declared), Some(actual)) = (field.dim, column.dim()) {
            if declared != actual as i64 {
                return Err(Error::InvalidArgument(format!(
                    "field '{}' is declared with dimension {}, column has {}",
                    column.name(),
                    declared,
                    actual
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSchema;

    fn schema() -> CollectionSchema {
        CollectionSchema::new(
            "films",
            vec![
                FieldSchema::primary("film_id"),
                FieldSchema::new("year", FieldType::Int32),
                FieldSchema::float_vector("embedding", 2),
            ],
        )
    }

    #[test]
    fn test_validate_columns_rejects_mismatched_rows() {
        let columns = vec![
            Column::int64("film_id", vec![1, 2]),
            Column::int32("year", vec![1994]),
        ];
        assert!(matches!(
            validate_columns(&columns),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_columns_rejects_duplicates_and_empty_names() {
        let dup = vec![
            Column::int64("film_id", vec![1]),
            Column::int64("film_id", vec![2]),
        ];
        assert!(validate_columns(&dup).is_err());
        let unnamed = vec![Column::int64("", vec![1])];
        assert!(validate_columns(&unnamed).is_err());
        assert!(validate_columns(&[]).is_err());
    }

    #[test]
    fn test_schema_validation() {
        let schema = schema();
        let unknown = vec![Column::int64("studio", vec![1])];
        assert!(validate_against_schema(&unknown, &schema).is_err());

        let wrong_type = vec![Column::int64("year", vec![1994])];
        assert!(validate_against_schema(&wrong_type, &schema).is_err());

        let wrong_dim =
            vec![Column::float_vector("embedding", 3, vec![vec![0.0, 0.0, 0.0]]).unwrap()];
        assert!(validate_against_schema(&wrong_dim, &schema).is_err());

        let ok = vec![
            Column::int64("film_id", vec![1]),
            Column::int32("year", vec![1994]),
            Column::float_vector("embedding", 2, vec![vec![0.1, 0.2]]).unwrap(),
        ];
        assert!(validate_against_schema(&ok, &schema).is_ok());
    }

    #[test]
    fn test_query_vectors_width_check() {
        let vectors = QueryVectors::Float(vec![vec![0.1, 0.2], vec![0.3]]);
        assert!(vectors.to_vector_field(2).is_err());
        let vectors = QueryVectors::Binary(vec![vec![0xFF, 0x00]]);
        assert!(vectors.to_vector_field(16).is_ok());
    }
}
