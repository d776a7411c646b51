//! # Schema Model
//!
//! Type descriptors and record/enumeration schemas. These are built once
//! per record type (typically inside a `once_cell::sync::Lazy` static),
//! are immutable thereafter, and are shared read-only by every conversion
//! of that type. The conversion engine itself holds no state — all the
//! structure it walks lives here.
//!
//! ## Recursion
//!
//! A record schema may refer to itself or to another schema that refers
//! back. [`SchemaRef`] defers resolution behind a `fn()` thunk, so a
//! schema graph of `'static` references can be cyclic while each schema
//! static is still initialized exactly once.

use serde_json::Value;

// ---------------------------------------------------------------------------
// Primitive kinds
// ---------------------------------------------------------------------------

/// The four primitive target kinds a schema position can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Signed integer.
    Int,
    /// Double-precision float.
    Float,
    /// UTF-8 string.
    Str,
    /// Boolean.
    Bool,
}

impl PrimitiveKind {
    /// Short lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Int => "int",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Str => "str",
            PrimitiveKind::Bool => "bool",
        }
    }
}

// ---------------------------------------------------------------------------
// Type descriptors
// ---------------------------------------------------------------------------

/// A lazily-resolved reference to a record schema.
///
/// Holding a `fn() -> &'static RecordSchema` rather than the reference
/// itself lets mutually recursive record types describe each other: the
/// thunk is only invoked when the walker actually descends into a nested
/// record, by which point the target static is initialized.
#[derive(Clone, Copy)]
pub struct SchemaRef(pub fn() -> &'static RecordSchema);

impl SchemaRef {
    /// Resolve the referenced schema.
    pub fn get(&self) -> &'static RecordSchema {
        (self.0)()
    }
}

impl std::fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SchemaRef({})", self.get().name())
    }
}

/// A closed, tagged description of what shape of value a schema position
/// expects.
#[derive(Debug, Clone)]
pub enum TypeDesc {
    /// One of the four primitive kinds.
    Primitive(PrimitiveKind),
    /// A nested record, resolved through a [`SchemaRef`] thunk.
    Record(SchemaRef),
    /// A closed enumeration.
    Enum(&'static EnumSchema),
    /// An optional wrapper; null short-circuits without touching the inner
    /// descriptor.
    Optional(Box<TypeDesc>),
    /// An ordered list of candidate descriptors, tried left to right.
    Union(Vec<TypeDesc>),
    /// A homogeneous ordered collection.
    Sequence(Box<TypeDesc>),
    /// A key/value mapping.
    Mapping(Box<TypeDesc>, Box<TypeDesc>),
}

impl TypeDesc {
    /// Integer primitive.
    pub fn int() -> Self {
        TypeDesc::Primitive(PrimitiveKind::Int)
    }

    /// Float primitive.
    pub fn float() -> Self {
        TypeDesc::Primitive(PrimitiveKind::Float)
    }

    /// String primitive.
    pub fn str() -> Self {
        TypeDesc::Primitive(PrimitiveKind::Str)
    }

    /// Boolean primitive.
    pub fn bool() -> Self {
        TypeDesc::Primitive(PrimitiveKind::Bool)
    }

    /// Optional wrapper around `inner`.
    pub fn optional(inner: TypeDesc) -> Self {
        TypeDesc::Optional(Box::new(inner))
    }

    /// Union over `branches`, tried in order.
    pub fn union(branches: Vec<TypeDesc>) -> Self {
        TypeDesc::Union(branches)
    }

    /// Homogeneous sequence of `element`.
    pub fn sequence(element: TypeDesc) -> Self {
        TypeDesc::Sequence(Box::new(element))
    }

    /// Mapping from `key` to `value`.
    pub fn mapping(key: TypeDesc, value: TypeDesc) -> Self {
        TypeDesc::Mapping(Box::new(key), Box::new(value))
    }

    /// Nested record through a schema thunk (usually `T::schema`).
    pub fn record(schema: fn() -> &'static RecordSchema) -> Self {
        TypeDesc::Record(SchemaRef(schema))
    }

    /// Closed enumeration.
    pub fn enumeration(schema: &'static EnumSchema) -> Self {
        TypeDesc::Enum(schema)
    }

    /// Human-readable description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            TypeDesc::Primitive(kind) => kind.name().to_string(),
            TypeDesc::Record(schema) => schema.get().name().to_string(),
            TypeDesc::Enum(schema) => schema.name().to_string(),
            TypeDesc::Optional(inner) => format!("{} | null", inner.describe()),
            TypeDesc::Union(branches) => branches
                .iter()
                .map(TypeDesc::describe)
                .collect::<Vec<_>>()
                .join(" | "),
            TypeDesc::Sequence(element) => format!("list[{}]", element.describe()),
            TypeDesc::Mapping(key, value) => {
                format!("dict[{}, {}]", key.describe(), value.describe())
            }
        }
    }
}

impl std::fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

// ---------------------------------------------------------------------------
// Enumeration schemas
// ---------------------------------------------------------------------------

/// A single named member of an enumeration, with its wire value.
#[derive(Debug, Clone)]
pub struct EnumMember {
    /// Declared member name (e.g. the Rust variant name).
    pub name: &'static str,
    /// Underlying wire value the member serializes to.
    pub value: Value,
}

/// A closed set of named members. Membership is fixed at definition time
/// and never mutated at runtime.
#[derive(Debug)]
pub struct EnumSchema {
    name: &'static str,
    members: Vec<EnumMember>,
}

impl EnumSchema {
    /// Build an enumeration schema from `(name, wire value)` pairs.
    pub fn new(name: &'static str, members: Vec<(&'static str, Value)>) -> Self {
        Self {
            name,
            members: members
                .into_iter()
                .map(|(name, value)| EnumMember { name, value })
                .collect(),
        }
    }

    /// The enumeration's type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The fixed member list, in declaration order.
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }
}

// ---------------------------------------------------------------------------
// Field descriptors
// ---------------------------------------------------------------------------

/// What the materializer does when a field is absent from the input.
pub enum FieldDefault {
    /// Absence is an error.
    Required,
    /// Store this value verbatim; defaults are assumed already well-typed.
    Value(Value),
    /// Invoke the factory fresh for every missing-field occurrence, so no
    /// default is ever shared between instances.
    Factory(fn() -> Value),
}

impl std::fmt::Debug for FieldDefault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldDefault::Required => write!(f, "Required"),
            FieldDefault::Value(v) => write!(f, "Value({v})"),
            FieldDefault::Factory(_) => write!(f, "Factory(..)"),
        }
    }
}

/// A convert-then-validate pipeline attached to a single field.
///
/// This is the explicit replacement for descriptor-style attribute
/// interception: the materializer invokes `convert` on every resolved
/// (non-null) field value, then `validate` on the normalized result.
/// `convert` never fails — input it cannot normalize is passed through
/// for `validate` to reject with a reason.
pub trait FieldCheck: Send + Sync {
    /// Normalize a raw value. Must be total: unconvertible input comes
    /// back unchanged so `validate` can name the problem.
    fn convert(&self, field: &str, value: Value) -> Value;

    /// Accept or reject the normalized value.
    fn validate(&self, field: &str, value: &Value) -> Result<(), String>;
}

/// A named, typed, defaulted field inside a record schema.
pub struct FieldDesc {
    name: &'static str,
    ty: TypeDesc,
    default: FieldDefault,
    check: Option<Box<dyn FieldCheck>>,
}

impl FieldDesc {
    /// Field name, unique within its schema.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field's type descriptor.
    pub fn ty(&self) -> &TypeDesc {
        &self.ty
    }

    /// The field's default policy.
    pub fn default(&self) -> &FieldDefault {
        &self.default
    }

    /// The field's custom check, if any.
    pub fn check(&self) -> Option<&dyn FieldCheck> {
        self.check.as_deref()
    }
}

impl std::fmt::Debug for FieldDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDesc")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("default", &self.default)
            .field("check", &self.check.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Record schemas
// ---------------------------------------------------------------------------

/// The ordered set of named, typed, defaulted fields composing a record
/// type. Field order follows declaration order; it matters for
/// materialization order and for nothing else.
#[derive(Debug)]
pub struct RecordSchema {
    name: &'static str,
    fields: Vec<FieldDesc>,
}

impl RecordSchema {
    /// Start building a schema for the record type `name`.
    pub fn builder(name: &'static str) -> RecordSchemaBuilder {
        RecordSchemaBuilder {
            name,
            fields: Vec::new(),
        }
    }

    /// The record type's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All field descriptors, in declaration order.
    pub fn fields(&self) -> &[FieldDesc] {
        &self.fields
    }

    /// Look up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldDesc> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builder for [`RecordSchema`]. Definition-time mistakes (duplicate field
/// names, a check before any field) are panics, not results — schemas are
/// declared in static initializers where a panic is the right register.
pub struct RecordSchemaBuilder {
    name: &'static str,
    fields: Vec<FieldDesc>,
}

impl RecordSchemaBuilder {
    /// Declare a required field.
    pub fn field(self, name: &'static str, ty: TypeDesc) -> Self {
        self.push(name, ty, FieldDefault::Required)
    }

    /// Declare a field with a verbatim default value.
    pub fn field_with_default(self, name: &'static str, ty: TypeDesc, default: Value) -> Self {
        self.push(name, ty, FieldDefault::Value(default))
    }

    /// Declare a field whose default is produced fresh by `factory` on
    /// every missing-field occurrence.
    pub fn field_with_factory(
        self,
        name: &'static str,
        ty: TypeDesc,
        factory: fn() -> Value,
    ) -> Self {
        self.push(name, ty, FieldDefault::Factory(factory))
    }

    /// Attach a convert-then-validate check to the most recently declared
    /// field.
    ///
    /// # Panics
    ///
    /// Panics if no field has been declared yet.
    pub fn check(mut self, check: impl FieldCheck + 'static) -> Self {
        let field = self
            .fields
            .last_mut()
            .expect("check() must follow a field declaration");
        field.check = Some(Box::new(check));
        self
    }

    fn push(mut self, name: &'static str, ty: TypeDesc, default: FieldDefault) -> Self {
        if self.fields.iter().any(|f| f.name == name) {
            panic!("duplicate field '{name}' in schema '{}'", self.name);
        }
        self.fields.push(FieldDesc {
            name,
            ty,
            default,
            check: None,
        });
        self
    }

    /// Finish the schema.
    pub fn build(self) -> RecordSchema {
        RecordSchema {
            name: self.name,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn describe_nested_types() {
        let ty = TypeDesc::optional(TypeDesc::sequence(TypeDesc::int()));
        assert_eq!(ty.describe(), "list[int] | null");

        let ty = TypeDesc::mapping(TypeDesc::str(), TypeDesc::float());
        assert_eq!(ty.describe(), "dict[str, float]");

        let ty = TypeDesc::union(vec![TypeDesc::int(), TypeDesc::str(), TypeDesc::bool()]);
        assert_eq!(ty.describe(), "int | str | bool");
    }

    #[test]
    fn builder_preserves_declaration_order() {
        let schema = RecordSchema::builder("Server")
            .field("host", TypeDesc::str())
            .field_with_default("port", TypeDesc::int(), json!(8080))
            .build();
        let names: Vec<_> = schema.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["host", "port"]);
        assert!(schema.field("port").is_some());
        assert!(schema.field("missing").is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate field")]
    fn builder_rejects_duplicate_names() {
        let _ = RecordSchema::builder("Bad")
            .field("x", TypeDesc::int())
            .field("x", TypeDesc::str());
    }

    #[test]
    fn enum_schema_members_in_order() {
        let schema = EnumSchema::new(
            "Status",
            vec![("Active", json!("active")), ("Inactive", json!("inactive"))],
        );
        assert_eq!(schema.name(), "Status");
        assert_eq!(schema.members().len(), 2);
        assert_eq!(schema.members()[0].name, "Active");
        assert_eq!(schema.members()[0].value, json!("active"));
    }
}
