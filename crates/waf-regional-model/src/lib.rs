//! AWS WAF Regional model types.
//!
//! Request (`*Input`), response (`*Output`) and shared value types for the
//! `AWSWAF_Regional_20161128` API, generated from the service's Smithy model
//! by `waf-regional-codegen`. Every structure offers getters, `set_*`
//! setters, fluent `with_*` setters (plus `append_*` for lists), structural
//! equality and hashing, a `{Name: value,...}` rendering through `Display`,
//! and serde support using the wire member names.
//!
//! Constraint metadata (required flags, length/range bounds, patterns, enum
//! value sets) is attached to every shape through [`Shape::schema`]. Setters
//! never enforce it; call [`validate`] to check a value before sending it.
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::struct_field_names)]

mod constraints;
mod display;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod schema;
mod timestamp;
pub mod types;
mod unknown;
pub mod validate;

pub use error::{ErrorFault, WafRegionalError, WafRegionalErrorCode};
pub use operations::{OperationInput, TARGET_PREFIX, WafRegionalOperation};
pub use schema::{MemberValue, Shape, ShapeSchema};
pub use unknown::UnknownVariantValue;
pub use validate::{ValidationError, Violation, ViolationKind, validate};
