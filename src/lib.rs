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

//! # Vectis Rust Client
//!
//! Client SDK for the Vectis vector database: manage collections,
//! partitions, and indexes, load typed column data, and run similarity
//! search over gRPC.
//!
//! ## Key Pieces
//!
//! - **Typed columns**: one [`Column`] variant per supported field type,
//!   immutable after construction, with symmetric wire encode/decode
//! - **Schema-checked operations**: insert and search validate column
//!   shapes against the collection schema before anything hits the wire
//! - **Swappable transport**: operations go through the [`VectorService`]
//!   trait, so a test double can stand in for the gRPC channel
//! - **Explicit configuration**: timeouts, TLS, and credentials are named
//!   fields on [`ClientConfig`], not hidden dial options
//!
//! ## Example
//!
//! ```no_run
//! use vectis_client::{Client, ClientConfig, Column};
//!
//! # async fn run() -> vectis_client::Result<()> {
//! let client = Client::connect(ClientConfig::new("http://localhost:19530")).await?;
//! let ids = client
//!     .insert(
//!         "films",
//!         "",
//!         &[
//!             Column::int64("film_id", vec![1, 2]),
//!             Column::float_vector("embedding", 2, vec![vec![0.1, 0.2], vec![0.3, 0.4]])?,
//!         ],
//!     )
//!     .await?;
//! println!("inserted {} rows", ids.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod column;
pub mod config;
pub mod decode;
pub mod error;
pub mod proto;
pub mod schema;

pub use client::{Client, GrpcService, QueryVectors, SearchResult, VectorService};
pub use column::{Column, ScalarColumn, VectorColumn};
pub use config::{ClientConfig, Credentials, TlsConfig};
pub use error::{DecodeError, Error, Result};
pub use schema::{
    Collection, CollectionSchema, FieldSchema, FieldType, Index, IndexState, IndexType, MetricType,
    Partition,
};
