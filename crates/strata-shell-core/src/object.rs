//! Object identity for Strata Shell.
//!
//! Shell components often need to answer "is this the same page I already
//! hold?" without comparing contents. [`ObjectId`] provides a process-unique,
//! stable identity for that purpose: every [`ObjectBase`] allocates one at
//! construction and never changes it.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::logging::targets;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique identifier for an object.
///
/// Two objects compare equal by identity exactly when their `ObjectId`s are
/// equal. IDs are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Convert the ID to a raw `u64`, for interop and log output.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// Base struct embedded by types that implement [`Object`].
///
/// Allocates a fresh [`ObjectId`] on construction and records the concrete
/// type name for debugging.
pub struct ObjectBase {
    id: ObjectId,
    type_name: &'static str,
}

impl ObjectBase {
    /// Create a new base with a fresh identity for the concrete type `T`.
    pub fn new<T>() -> Self {
        let id = ObjectId(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed));
        let type_name = std::any::type_name::<T>();
        tracing::trace!(target: targets::OBJECT, id = id.as_raw(), type_name, "created object");
        Self { id, type_name }
    }

    /// The identity allocated at construction.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The concrete type name recorded at construction.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Base trait for identity-carrying objects.
pub trait Object {
    /// The stable identity of this object.
    fn object_id(&self) -> ObjectId;
}
