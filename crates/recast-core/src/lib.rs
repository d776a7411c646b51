//! # recast-core — Typed Conversion Engine
//!
//! Schema-directed conversion of loosely-typed values (dictionary
//! literals, parsed files, environment strings) into strictly-typed,
//! validated record instances — or precise, field-scoped errors.
//!
//! ## Components
//!
//! - **Schema model** ([`schema`]): [`TypeDesc`] tagged descriptors over
//!   primitives, records, enumerations, optionals, unions, sequences, and
//!   mappings; [`RecordSchema`] / [`EnumSchema`] built once per type and
//!   shared read-only for the process lifetime.
//!
//! - **Schema walker** ([`convert`]): recursive conversion of a raw value
//!   against a descriptor, with an explicit [`Coercion`] policy — lenient
//!   (keep the original value on mismatch) or strict (fail with a dotted
//!   field path).
//!
//! - **Record materializer** ([`materialize`]): default resolution,
//!   per-field walking, and the convert-then-validate pipeline for fields
//!   carrying a [`FieldCheck`].
//!
//! - **Enumeration resolver** ([`enums`]): member lookup by wire value
//!   first, then by case-insensitive name.
//!
//! - **[`Record`] trait** ([`record`]): the construction capability —
//!   typed instances are built through serde so host-type invariants are
//!   never bypassed.
//!
//! ## Concurrency
//!
//! The engine is synchronous and free of shared mutable state. Schemas are
//! immutable after construction; concurrent conversions of the same schema
//! are safe by construction.

pub mod coerce;
pub mod convert;
pub mod enums;
pub mod error;
pub mod materialize;
pub mod record;
pub mod schema;

// Re-export primary types.
pub use convert::{convert, Coercion};
pub use enums::resolve;
pub use error::ConvertError;
pub use materialize::materialize;
pub use record::Record;
pub use schema::{
    EnumMember, EnumSchema, FieldCheck, FieldDefault, FieldDesc, PrimitiveKind, RecordSchema,
    RecordSchemaBuilder, SchemaRef, TypeDesc,
};
