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

//! Client operation tests against an in-process mock transport.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use vectis_client::proto::vectis as proto;
use vectis_client::proto::vectis::{DataType, ErrorCode};
use vectis_client::{Client, Column, Error, IndexType, MetricType, QueryVectors, VectorService};

fn ok_status() -> proto::Status {
    proto::Status {
        error_code: ErrorCode::Success as i32,
        reason: String::new(),
    }
}

fn films_proto_schema() -> proto::CollectionSchema {
    proto::CollectionSchema {
        name: "films".to_string(),
        description: String::new(),
        auto_id: false,
        fields: vec![
            proto::FieldSchema {
                field_id: 1,
                name: "film_id".to_string(),
                is_primary_key: true,
                description: String::new(),
                data_type: DataType::Int64 as i32,
                dim: 0,
                auto_id: false,
            },
            proto::FieldSchema {
                field_id: 2,
                name: "year".to_string(),
                is_primary_key: false,
                description: String::new(),
                data_type: DataType::Int32 as i32,
                dim: 0,
                auto_id: false,
            },
            proto::FieldSchema {
                field_id: 3,
                name: "embedding".to_string(),
                is_primary_key: false,
                description: String::new(),
                data_type: DataType::FloatVector as i32,
                dim: 2,
                auto_id: false,
            },
        ],
    }
}

/// Transport double: records every method hit, answers with canned
/// responses, and can delay to exercise deadlines.
#[derive(Default)]
struct MockService {
    calls: Mutex<Vec<&'static str>>,
    insert_request: Mutex<Option<proto::InsertRequest>>,
    search_request: Mutex<Option<proto::SearchRequest>>,
    search_response: Mutex<Option<proto::SearchResults>>,
    index_descriptions: Mutex<Vec<proto::IndexDescription>>,
    index_state: Mutex<Option<i32>>,
    delay: Option<Duration>,
}

impl MockService {
    fn record(&self, method: &'static str) {
        self.calls.lock().unwrap().push(method);
    }

    async fn maybe_delay(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VectorService for MockService {
    async fn create_collection(&self, _request: proto::CreateCollectionRequest) -> vectis_client::Result<proto::Status> {
        self.record("create_collection");
        Ok(ok_status())
    }
    async fn drop_collection(&self, _request: proto::DropCollectionRequest) -> vectis_client::Result<proto::Status> {
        self.record("drop_collection");
        Ok(ok_status())
    }
    async fn has_collection(&self, _request: proto::HasCollectionRequest) -> vectis_client::Result<proto::BoolResponse> {
        self.record("has_collection");
        Ok(proto::BoolResponse {
            status: Some(ok_status()),
            value: true,
        })
    }
    async fn describe_collection(
        &self,
        _request: proto::DescribeCollectionRequest,
    ) -> vectis_client::Result<proto::DescribeCollectionResponse> {
        self.record("describe_collection");
        self.maybe_delay().await;
        Ok(proto::DescribeCollectionResponse {
            status: Some(ok_status()),
            schema: Some(films_proto_schema()),
            collection_id: 42,
            created_utc_timestamp: 0,
        })
    }
    async fn list_collections(
        &self,
        _request: proto::ListCollectionsRequest,
    ) -> vectis_client::Result<proto::ListCollectionsResponse> {
        self.record("list_collections");
        Ok(proto::ListCollectionsResponse {
            status: Some(ok_status()),
            collection_names: vec!["films".to_string()],
            collection_ids: vec![42],
        })
    }
    async fn get_collection_statistics(
        &self,
        _request: proto::GetCollectionStatisticsRequest,
    ) -> vectis_client::Result<proto::GetCollectionStatisticsResponse> {
        self.record("get_collection_statistics");
        Ok(proto::GetCollectionStatisticsResponse {
            status: Some(ok_status()),
            stats: vec![proto::KeyValuePair {
                key: "row_count".to_string(),
                value: "3".to_string(),
            }],
        })
    }
    async fn load_collection(&self, _request: proto::LoadCollectionRequest) -> vectis_client::Result<proto::Status> {
        self.record("load_collection");
        Ok(ok_status())
    }
    async fn release_collection(&self, _request: proto::ReleaseCollectionRequest) -> vectis_client::Result<proto::Status> {
        self.record("release_collection");
        Ok(ok_status())
    }
    async fn create_partition(&self, _request: proto::CreatePartitionRequest) -> vectis_client::Result<proto::Status> {
        self.record("create_partition");
        Ok(ok_status())
    }
    async fn drop_partition(&self, _request: proto::DropPartitionRequest) -> vectis_client::Result<proto::Status> {
        self.record("drop_partition");
        Ok(ok_status())
    }
    async fn has_partition(&self, _request: proto::HasPartitionRequest) -> vectis_client::Result<proto::BoolResponse> {
        self.record("has_partition");
        Ok(proto::BoolResponse {
            status: Some(ok_status()),
            value: false,
        })
    }
    async fn show_partitions(
        &self,
        _request: proto::ShowPartitionsRequest,
    ) -> vectis_client::Result<proto::ShowPartitionsResponse> {
        self.record("show_partitions");
        Ok(proto::ShowPartitionsResponse {
            status: Some(ok_status()),
            partition_names: vec!["_default".to_string(), "archive".to_string()],
            partition_ids: vec![1, 2],
        })
    }
    async fn create_index(&self, _request: proto::CreateIndexRequest) -> vectis_client::Result<proto::Status> {
        self.record("create_index");
        Ok(ok_status())
    }
    async fn describe_index(
        &self,
        _request: proto::DescribeIndexRequest,
    ) -> vectis_client::Result<proto::DescribeIndexResponse> {
        self.record("describe_index");
        Ok(proto::DescribeIndexResponse {
            status: Some(ok_status()),
            index_descriptions: self.index_descriptions.lock().unwrap().clone(),
        })
    }
    async fn drop_index(&self, _request: proto::DropIndexRequest) -> vectis_client::Result<proto::Status> {
        self.record("drop_index");
        Ok(ok_status())
    }
    async fn get_index_state(
        &self,
        _request: proto::GetIndexStateRequest,
    ) -> vectis_client::Result<proto::GetIndexStateResponse> {
        self.record("get_index_state");
        Ok(proto::GetIndexStateResponse {
            status: Some(ok_status()),
            state: self
                .index_state
                .lock()
                .unwrap()
                .unwrap_or(proto::IndexState::Finished as i32),
        })
    }
    async fn insert(&self, request: proto::InsertRequest) -> vectis_client::Result<proto::MutationResult> {
        self.record("insert");
        self.maybe_delay().await;
        let num_rows = request.num_rows as i64;
        *self.insert_request.lock().unwrap() = Some(request);
        Ok(proto::MutationResult {
            status: Some(ok_status()),
            ids: Some(Column::int64("film_id", (1..=num_rows).collect()).to_field_data()),
            insert_count: num_rows,
        })
    }
    async fn flush(&self, _request: proto::FlushRequest) -> vectis_client::Result<proto::Status> {
        self.record("flush");
        Ok(ok_status())
    }
    async fn search(&self, request: proto::SearchRequest) -> vectis_client::Result<proto::SearchResults> {
        self.record("search");
        self.maybe_delay().await;
        let num_queries = request.num_queries;
        *self.search_request.lock().unwrap() = Some(request);
        let canned = self.search_response.lock().unwrap().take();
        Ok(canned.unwrap_or(proto::SearchResults {
            status: Some(ok_status()),
            results: Some(proto::SearchResultData {
                num_queries,
                top_k: 0,
                topks: vec![0; num_queries as usize],
                ids: None,
                scores: vec![],
                fields_data: vec![],
                statuses: vec![],
            }),
        }))
    }
}

fn client_over(service: MockService) -> (Client, std::sync::Arc<MockService>) {
    let service = std::sync::Arc::new(service);
    let handle = service.clone();
    (
        Client::with_service(Box::new(ArcService(service)), Some(Duration::from_secs(5))),
        handle,
    )
}

/// Adapter so the test keeps a handle on the mock after the client takes
/// ownership of the transport.
struct ArcService(std::sync::Arc<MockService>);

#[async_trait]
impl VectorService for ArcService {
    async fn create_collection(&self, request: proto::CreateCollectionRequest) -> vectis_client::Result<proto::Status> {
        self.0.create_collection(request).await
    }
    async fn drop_collection(&self, request: proto::DropCollectionRequest) -> vectis_client::Result<proto::Status> {
        self.0.drop_collection(request).await
    }
    async fn has_collection(&self, request: proto::HasCollectionRequest) -> vectis_client::Result<proto::BoolResponse> {
        self.0.has_collection(request).await
    }
    async fn describe_collection(
        &self,
        request: proto::DescribeCollectionRequest,
    ) -> vectis_client::Result<proto::DescribeCollectionResponse> {
        self.0.describe_collection(request).await
    }
    async fn list_collections(
        &self,
        request: proto::ListCollectionsRequest,
    ) -> vectis_client::Result<proto::ListCollectionsResponse> {
        self.0.list_collections(request).await
    }
    async fn get_collection_statistics(
        &self,
        request: proto::GetCollectionStatisticsRequest,
    ) -> vectis_client::Result<proto::GetCollectionStatisticsResponse> {
        self.0.get_collection_statistics(request).await
    }
    async fn load_collection(&self, request: proto::LoadCollectionRequest) -> vectis_client::Result<proto::Status> {
        self.0.load_collection(request).await
    }
    async fn release_collection(&self, request: proto::ReleaseCollectionRequest) -> vectis_client::Result<proto::Status> {
        self.0.release_collection(request).await
    }
    async fn create_partition(&self, request: proto::CreatePartitionRequest) -> vectis_client::Result<proto::Status> {
        self.0.create_partition(request).await
    }
    async fn drop_partition(&self, request: proto::DropPartitionRequest) -> vectis_client::Result<proto::Status> {
        self.0.drop_partition(request).await
    }
    async fn has_partition(&self, request: proto::HasPartitionRequest) -> vectis_client::Result<proto::BoolResponse> {
        self.0.has_partition(request).await
    }
    async fn show_partitions(
        &self,
        request: proto::ShowPartitionsRequest,
    ) -> vectis_client::Result<proto::ShowPartitionsResponse> {
        self.0.show_partitions(request).await
    }
    async fn create_index(&self, request: proto::CreateIndexRequest) -> vectis_client::Result<proto::Status> {
        self.0.create_index(request).await
    }
    async fn describe_index(
        &self,
        request: proto::DescribeIndexRequest,
    ) -> vectis_client::Result<proto::DescribeIndexResponse> {
        self.0.describe_index(request).await
    }
    async fn drop_index(&self, request: proto::DropIndexRequest) -> vectis_client::Result<proto::Status> {
        self.0.drop_index(request).await
    }
    async fn get_index_state(
        &self,
        request: proto::GetIndexStateRequest,
    ) -> vectis_client::Result<proto::GetIndexStateResponse> {
        self.0.get_index_state(request).await
    }
    async fn insert(&self, request: proto::InsertRequest) -> vectis_client::Result<proto::MutationResult> {
        self.0.insert(request).await
    }
    async fn flush(&self, request: proto::FlushRequest) -> vectis_client::Result<proto::Status> {
        self.0.flush(request).await
    }
    async fn search(&self, request: proto::SearchRequest) -> vectis_client::Result<proto::SearchResults> {
        self.0.search(request).await
    }
}

fn film_columns(rows: usize) -> Vec<Column> {
    Column::float_vector(
        "embedding",
        2,
        (0..rows).map(|i| vec![i as f32, i as f32 + 0.5]).collect(),
    )
    .map(|embedding| {
        vec![
            Column::int64("film_id", (0..rows as i64).collect()),
            Column::int32("year", (0..rows as i32).map(|i| 1990 + i).collect()),
            embedding,
        ]
    })
    .unwrap()
}

#[tokio::test]
async fn test_insert_returns_id_column() {
    let (client, mock) = client_over(MockService::default());
    let ids = client.insert("films", "", &film_columns(3)).await.unwrap();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids.as_int64(), Some(&[1i64, 2, 3][..]));

    let request = mock.insert_request.lock().unwrap().take().unwrap();
    assert_eq!(request.collection_name, "films");
    assert_eq!(request.num_rows, 3);
    assert_eq!(request.fields_data.len(), 3);
    assert_eq!(mock.calls(), vec!["describe_collection", "insert"]);
}

#[tokio::test]
async fn test_insert_row_count_mismatch_rejected_before_wire() {
    let (client, mock) = client_over(MockService::default());
    let columns = vec![
        Column::int64("film_id", vec![1, 2]),
        Column::int32("year", vec![1994]),
    ];
    let err = client.insert("films", "", &columns).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(mock.calls().is_empty(), "no wire request may be sent");
}

#[tokio::test]
async fn test_insert_unknown_field_rejected_after_schema_fetch() {
    let (client, mock) = client_over(MockService::default());
    let columns = vec![Column::int64("studio", vec![1])];
    let err = client.insert("films", "", &columns).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(mock.calls(), vec!["describe_collection"]);
}

#[tokio::test]
async fn test_search_preserves_query_order() {
    let mock = MockService::default();
    // Tag each query: query i matches exactly one row with id (i + 1) * 10.
    *mock.search_response.lock().unwrap() = Some(proto::SearchResults {
        status: Some(ok_status()),
        results: Some(proto::SearchResultData {
            num_queries: 3,
            top_k: 1,
            topks: vec![1, 1, 1],
            ids: Some(Column::int64("film_id", vec![10, 20, 30]).to_field_data()),
            scores: vec![0.9, 0.8, 0.7],
            fields_data: vec![Column::int32("year", vec![1990, 1991, 1992]).to_field_data()],
            statuses: vec![],
        }),
    });
    let (client, _mock) = client_over(mock);

    let vectors = QueryVectors::Float(vec![vec![0.0, 0.1], vec![1.0, 1.1], vec![2.0, 2.1]]);
    let results = client
        .search(
            "films",
            &[],
            "year > 1980",
            &["year".to_string()],
            vectors,
            "embedding",
            MetricType::Euclidean,
            1,
            &HashMap::new(),
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
    for (i, result) in results.iter().enumerate() {
        assert!(result.error.is_none());
        assert_eq!(result.result_count, 1);
        let expected = (i as i64 + 1) * 10;
        assert_eq!(result.ids.as_ref().unwrap().as_int64(), Some(&[expected][..]));
        assert_eq!(result.fields[0].as_int32(), Some(&[1990 + i as i32][..]));
    }
}

#[tokio::test]
async fn test_search_partial_failure() {
    let mock = MockService::default();
    *mock.search_response.lock().unwrap() = Some(proto::SearchResults {
        status: Some(ok_status()),
        results: Some(proto::SearchResultData {
            num_queries: 3,
            top_k: 2,
            topks: vec![2, 0, 2],
            ids: Some(Column::int64("film_id", vec![1, 2, 5, 6]).to_field_data()),
            scores: vec![0.9, 0.8, 0.6, 0.5],
            fields_data: vec![],
            statuses: vec![
                ok_status(),
                proto::Status {
                    error_code: ErrorCode::UnexpectedError as i32,
                    reason: "segment offline".to_string(),
                },
                ok_status(),
            ],
        }),
    });
    let (client, _mock) = client_over(mock);

    let vectors = QueryVectors::Float(vec![vec![0.0; 2], vec![1.0; 2], vec![2.0; 2]]);
    let results = client
        .search(
            "films",
            &[],
            "",
            &[],
            vectors,
            "embedding",
            MetricType::Cosine,
            2,
            &HashMap::new(),
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
    assert!(results[0].error.is_none());
    assert_eq!(results[0].ids.as_ref().unwrap().as_int64(), Some(&[1i64, 2][..]));
    assert!(results[1].error.is_some());
    assert_eq!(results[1].result_count, 0);
    assert!(results[2].error.is_none());
    assert_eq!(results[2].ids.as_ref().unwrap().as_int64(), Some(&[5i64, 6][..]));
    assert_eq!(results[2].scores, vec![0.6, 0.5]);
}

#[tokio::test]
async fn test_search_dimension_mismatch_rejected() {
    let (client, mock) = client_over(MockService::default());
    let vectors = QueryVectors::Float(vec![vec![0.0, 0.1, 0.2]]);
    let err = client
        .search(
            "films",
            &[],
            "",
            &[],
            vectors,
            "embedding",
            MetricType::Cosine,
            5,
            &HashMap::new(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(mock.calls(), vec!["describe_collection"]);
}

#[tokio::test]
async fn test_expired_deadline_returns_promptly() {
    let mock = MockService {
        delay: Some(Duration::from_secs(30)),
        ..MockService::default()
    };
    let service = std::sync::Arc::new(mock);
    let client = Client::with_service(
        Box::new(ArcService(service)),
        Some(Duration::from_millis(20)),
    );

    let start = Instant::now();
    let err = client
        .search(
            "films",
            &[],
            "",
            &[],
            QueryVectors::Float(vec![vec![0.0, 0.1]]),
            "embedding",
            MetricType::Cosine,
            1,
            &HashMap::new(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::DeadlineExceeded));
    assert!(start.elapsed() < Duration::from_secs(2), "must not block past the deadline");
}

#[tokio::test]
async fn test_closed_client_rejects_everything() {
    let (client, mock) = client_over(MockService::default());
    client.close();
    assert!(client.is_closed());

    assert!(matches!(client.list_collections().await, Err(Error::ClientClosed)));
    assert!(matches!(client.flush("films").await, Err(Error::ClientClosed)));
    assert!(matches!(
        client.insert("films", "", &film_columns(1)).await,
        Err(Error::ClientClosed)
    ));
    assert!(mock.calls().is_empty(), "closed client must not reach the transport");
}

#[tokio::test]
async fn test_admin_surface_round_trips() {
    let (client, _mock) = client_over(MockService::default());

    assert!(client.has_collection("films").await.unwrap());
    assert_eq!(client.list_collections().await.unwrap(), vec!["films"]);

    let collection = client.describe_collection("films").await.unwrap();
    assert_eq!(collection.id, 42);
    assert_eq!(collection.schema.fields.len(), 3);
    assert_eq!(collection.schema.primary_field().unwrap().name, "film_id");

    let stats = client.get_collection_statistics("films").await.unwrap();
    assert_eq!(stats.get("row_count").map(String::as_str), Some("3"));

    let partitions = client.show_partitions("films").await.unwrap();
    assert_eq!(partitions.len(), 2);
    assert_eq!(partitions[1].name, "archive");
    assert_eq!(partitions[1].collection_name, "films");

    assert!(!client.has_partition("films", "missing").await.unwrap());
    assert_eq!(
        client.get_index_state("films", "embedding").await.unwrap(),
        vectis_client::IndexState::Finished
    );
}

#[tokio::test]
async fn test_describe_index_preserves_dot_product_metric() {
    let kv = |key: &str, value: &str| proto::KeyValuePair {
        key: key.to_string(),
        value: value.to_string(),
    };
    let mock = MockService::default();
    *mock.index_descriptions.lock().unwrap() = vec![proto::IndexDescription {
        index_name: "embedding_idx".to_string(),
        index_id: 7,
        field_name: "embedding".to_string(),
        params: vec![
            kv("index_type", "HNSW"),
            kv("metric_type", "DOT_PRODUCT"),
            kv("params", r#"{"M":"16"}"#),
        ],
    }];
    let (client, _mock) = client_over(mock);

    let indexes = client.describe_index("films", "embedding").await.unwrap();
    assert_eq!(indexes.len(), 1);
    assert_eq!(indexes[0].index_type, IndexType::Hnsw);
    assert_eq!(indexes[0].metric_type, MetricType::DotProduct);
    assert_eq!(indexes[0].params.get("M").map(String::as_str), Some("16"));
}

#[tokio::test]
async fn test_unrecognized_index_metric_is_a_decode_error() {
    let mock = MockService::default();
    *mock.index_descriptions.lock().unwrap() = vec![proto::IndexDescription {
        index_name: "embedding_idx".to_string(),
        index_id: 7,
        field_name: "embedding".to_string(),
        params: vec![proto::KeyValuePair {
            key: "metric_type".to_string(),
            value: "L2".to_string(),
        }],
    }];
    let (client, _mock) = client_over(mock);

    let err = client.describe_index("films", "embedding").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unrecognized_index_state_is_a_decode_error() {
    let mock = MockService::default();
    *mock.index_state.lock().unwrap() = Some(42);
    let (client, _mock) = client_over(mock);

    let err = client.get_index_state("films", "embedding").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_service_error_surfaced_verbatim() {
    struct FailingService;
    #[async_trait]
    impl VectorService for FailingService {
        async fn create_collection(&self, _r: proto::CreateCollectionRequest) -> vectis_client::Result<proto::Status> {
            unimplemented!()
        }
        async fn drop_collection(&self, _r: proto::DropCollectionRequest) -> vectis_client::Result<proto::Status> {
            Ok(proto::Status {
                error_code: ErrorCode::CollectionNotFound as i32,
                reason: "collection films does not exist".to_string(),
            })
        }
        async fn has_collection(&self, _r: proto::HasCollectionRequest) -> vectis_client::Result<proto::BoolResponse> {
            unimplemented!()
        }
        async fn describe_collection(&self, _r: proto::DescribeCollectionRequest) -> vectis_client::Result<proto::DescribeCollectionResponse> {
            unimplemented!()
        }
        async fn list_collections(&self, _r: proto::ListCollectionsRequest) -> vectis_client::Result<proto::ListCollectionsResponse> {
            unimplemented!()
        }
        async fn get_collection_statistics(&self, _r: proto::GetCollectionStatisticsRequest) -> vectis_client::Result<proto::GetCollectionStatisticsResponse> {
            unimplemented!()
        }
        async fn load_collection(&self, _r: proto::LoadCollectionRequest) -> vectis_client::Result<proto::Status> {
            unimplemented!()
        }
        async fn release_collection(&self, _r: proto::ReleaseCollectionRequest) -> vectis_client::Result<proto::Status> {
            unimplemented!()
        }
        async fn create_partition(&self, _r: proto::CreatePartitionRequest) -> vectis_client::Result<proto::Status> {
            unimplemented!()
        }
        async fn drop_partition(&self, _r: proto::DropPartitionRequest) -> vectis_client::Result<proto::Status> {
            unimplemented!()
        }
        async fn has_partition(&self, _r: proto::HasPartitionRequest) -> vectis_client::Result<proto::BoolResponse> {
            unimplemented!()
        }
        async fn show_partitions(&self, _r: proto::ShowPartitionsRequest) -> vectis_client::Result<proto::ShowPartitionsResponse> {
            unimplemented!()
        }
        async fn create_index(&self, _r: proto::CreateIndexRequest) -> vectis_client::Result<proto::Status> {
            unimplemented!()
        }
        async fn describe_index(&self, _r: proto::DescribeIndexRequest) -> vectis_client::Result<proto::DescribeIndexResponse> {
            unimplemented!()
        }
        async fn drop_index(&self, _r: proto::DropIndexRequest) -> vectis_client::Result<proto::Status> {
            unimplemented!()
        }
        async fn get_index_state(&self, _r: proto::GetIndexStateRequest) -> vectis_client::Result<proto::GetIndexStateResponse> {
            unimplemented!()
        }
        async fn insert(&self, _r: proto::InsertRequest) -> vectis_client::Result<proto::MutationResult> {
            unimplemented!()
        }
        async fn flush(&self, _r: proto::FlushRequest) -> vectis_client::Result<proto::Status> {
            unimplemented!()
        }
        async fn search(&self, _r: proto::SearchRequest) -> vectis_client::Result<proto::SearchResults> {
            unimplemented!()
        }
    }

    let client = Client::with_service(Box::new(FailingService), None);
    match client.drop_collection("films").await.unwrap_err() {
        Error::Service { code, reason } => {
            assert_eq!(code, ErrorCode::CollectionNotFound);
            assert_eq!(reason, "collection films does not exist");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}
