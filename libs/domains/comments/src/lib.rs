//! Comments Domain
//!
//! CRUD for a single resource, the comment, from HTTP down to PostgreSQL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← decode, validate required fields, map errors to status codes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← log causes, translate to stable CommentError values
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← queries under a cancellable Context (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← nullable storage row, converted to Comment exactly once
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use domain_comments::{
//!     handlers,
//!     repository::InMemoryCommentRepository,
//!     service::CommentService,
//! };
//!
//! let repository = InMemoryCommentRepository::new();
//! let service = CommentService::new(repository);
//!
//! let router = handlers::router(service, Duration::from_secs(30));
//! ```

pub mod context;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use context::{Context, ContextError};
pub use error::{CommentError, CommentResult, RepositoryError, RepositoryResult};
pub use models::{Comment, MessageResponse, PostCommentRequest, UpdateCommentRequest};
pub use postgres::PgCommentRepository;
pub use repository::{CommentRepository, InMemoryCommentRepository};
pub use service::CommentService;
