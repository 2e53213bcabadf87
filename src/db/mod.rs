//! Document store.
//!
//! - [`traits`] - the [`DocumentStore`] contract: schema registration, create
//!   mutation, similarity query
//! - [`embedded`] - in-process implementation with provider-derived vectors

pub mod embedded;
pub mod traits;

pub use embedded::EmbeddedStore;
pub use traits::{
    CollectionSchema, DocumentStore, EmbeddingField, NewDocument, SimilarityMatch,
    SimilarityQuery,
};
