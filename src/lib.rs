//! SDK oficial em Rust para a CredGuard API — plataforma de credit scoring
//! em lote com machine learning.
//!
//! O fluxo principal é assíncrono: o chamador envia um CSV, o serviço
//! processa o lote em segundo plano e o cliente acompanha o ciclo de vida do
//! job (`pending → processing → completed | failed`) por polling, baixando o
//! artefato de resultados ao final.
//!
//! ```no_run
//! use std::path::Path;
//! use credguard::{CredGuardClient, UploadOptions};
//!
//! # async fn demo() -> Result<(), credguard::CredGuardError> {
//! let client = CredGuardClient::new("seu_jwt_token".to_string());
//! let job = client
//!     .batch()
//!     .upload(Path::new("clientes.csv"), "CARTAO", &UploadOptions::default())
//!     .await?;
//! println!("Job ID: {}", job.job_id);
//! # Ok(())
//! # }
//! ```
//!
//! Nenhuma operação faz retry internamente: o cliente distingue erros da API
//! (respostas reais do servidor) de falhas de transporte, e a decisão de
//! retentar fica com o chamador, que conhece a idempotência de cada operação.

pub mod api;
pub mod batch;
pub mod client;
pub mod error;
pub mod resources;

pub use api::types::{DriftDetection, ModelInfo};
pub use batch::resource::{DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL};
pub use batch::{BatchResource, Job, JobStatus, UploadOptions, product};
pub use client::CredGuardClient;
pub use error::CredGuardError;
pub use resources::{BureauResource, DriftResource, ModelsResource};
