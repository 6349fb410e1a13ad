//! # ferrule-http
//!
//! Turns an HTTP request's query string and body into the flat
//! [`FieldValues`](ferrule_validation::FieldValues) the validator consumes.

pub mod error;
pub mod input;

pub use error::{InputError, InputResult};
pub use input::{Input, BodyKind};
