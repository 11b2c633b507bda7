use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new<S: Into<String>>(s: S) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Opaque identifier of an owned class, usually its fully qualified name.
    ClassId
);
string_id!(
    /// Identifier of a method, unique within its class (e.g. `pay(Order)`).
    MethodId
);
string_id!(
    /// Identifier of a dependency field, unique within its class.
    FieldId
);

impl ClassId {
    /// Last segment of a dotted (or `$`-nested) class name.
    pub fn simple_name(&self) -> &str {
        self.0
            .rsplit(['.', '$'])
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("dependency field '{field}' is malformed: {reason}")]
    Malformed { field: FieldId, reason: String },
}

pub type LookupResult = Result<Option<OwnershipRecord>, LookupError>;

/// Deferred lookup of the ownership record behind a dependency field.
///
/// The lookup runs every time [`DependencyLookup::resolve`] is called; nothing is
/// resolved when the owning record is built.
#[derive(Clone)]
pub struct DependencyLookup(Arc<dyn Fn() -> LookupResult + Send + Sync>);

impl DependencyLookup {
    pub fn new<F>(lookup: F) -> Self
    where
        F: Fn() -> LookupResult + Send + Sync + 'static,
    {
        Self(Arc::new(lookup))
    }

    /// A lookup that always yields `record`.
    pub fn resolved(record: OwnershipRecord) -> Self {
        Self::new(move || Ok(Some(record.clone())))
    }

    /// A lookup for a field whose type has no ownership record.
    pub fn absent() -> Self {
        Self::new(|| Ok(None))
    }

    /// A lookup that always fails.
    pub fn failing<S: Into<String>>(field: FieldId, reason: S) -> Self {
        let reason = reason.into();
        Self::new(move || {
            Err(LookupError::Malformed {
                field: field.clone(),
                reason: reason.clone(),
            })
        })
    }

    pub fn resolve(&self) -> LookupResult {
        (self.0)()
    }
}

impl fmt::Debug for DependencyLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DependencyLookup(..)")
    }
}

/// Resolved ownership facts for one class.
///
/// Everything except `subject` is treated as a cache derived from the class itself,
/// so equality, ordering and hashing only look at `subject`.
#[derive(Clone, Debug)]
pub struct OwnershipRecord {
    subject: ClassId,
    class_owner: Option<String>,
    method_owners: BTreeMap<MethodId, String>,
    dependencies: BTreeMap<FieldId, DependencyLookup>,
}

impl OwnershipRecord {
    pub fn new(subject: impl Into<ClassId>, class_owner: Option<String>) -> Self {
        Self {
            subject: subject.into(),
            class_owner,
            method_owners: BTreeMap::new(),
            dependencies: BTreeMap::new(),
        }
    }

    pub fn owned_by(subject: impl Into<ClassId>, owner: impl Into<String>) -> Self {
        Self::new(subject, Some(owner.into()))
    }

    pub fn unowned(subject: impl Into<ClassId>) -> Self {
        Self::new(subject, None)
    }

    pub fn with_method_owner(
        mut self,
        method: impl Into<MethodId>,
        owner: impl Into<String>,
    ) -> Self {
        self.method_owners.insert(method.into(), owner.into());
        self
    }

    pub fn with_dependency(mut self, field: impl Into<FieldId>, lookup: DependencyLookup) -> Self {
        self.dependencies.insert(field.into(), lookup);
        self
    }

    pub fn subject(&self) -> &ClassId {
        &self.subject
    }

    pub fn class_owner(&self) -> Option<&str> {
        self.class_owner.as_deref()
    }

    pub fn method_owners(&self) -> &BTreeMap<MethodId, String> {
        &self.method_owners
    }

    pub fn dependencies(&self) -> &BTreeMap<FieldId, DependencyLookup> {
        &self.dependencies
    }

    /// Resolve the record behind `field` on demand.
    ///
    /// Unknown fields and absent dependencies yield `None`. A failing lookup is logged
    /// and also yields `None`; it never aborts the caller.
    pub fn resolve_dependency(&self, field: &FieldId) -> Option<OwnershipRecord> {
        let lookup = self.dependencies.get(field)?;
        match lookup.resolve() {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::warn!(
                    class = %self.subject,
                    field = %field,
                    error = %err,
                    "dependency lookup failed; treating field as unresolved"
                );
                None
            }
        }
    }

    /// Every dependency field that resolves to a record, in field order.
    pub fn resolved_dependencies(&self) -> impl Iterator<Item = (&FieldId, OwnershipRecord)> + '_ {
        self.dependencies
            .keys()
            .filter_map(|field| self.resolve_dependency(field).map(|record| (field, record)))
    }
}

impl PartialEq for OwnershipRecord {
    fn eq(&self, other: &Self) -> bool {
        self.subject == other.subject
    }
}

impl Eq for OwnershipRecord {}

impl Hash for OwnershipRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.subject.hash(state);
    }
}

impl PartialOrd for OwnershipRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OwnershipRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.subject.cmp(&other.subject)
    }
}

impl Borrow<ClassId> for OwnershipRecord {
    fn borrow(&self) -> &ClassId {
        &self.subject
    }
}
