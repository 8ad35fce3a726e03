//! # ApiEntity Trait
//!
//! The contract a record type satisfies to be served by a [`ResourceClient`](crate::ResourceClient).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use url::Url;

/// Trait that any record exposed by a REST collection must implement.
///
/// # Architecture Note
/// The client logic (list, create, update, delete, status handling) is written
/// *once* against this trait. Associated types keep each collection honest: a
/// `Project` collection only accepts a `ProjectDraft` payload, and ids are
/// addressed through the entity's own `Id` type rather than bare strings.
///
/// # Example
///
/// ```rust
/// use resource_client::ApiEntity;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Deserialize)]
/// struct Note {
///     id: u32,
///     body: String,
/// }
///
/// #[derive(Debug, Serialize)]
/// struct NoteDraft {
///     body: String,
/// }
///
/// impl ApiEntity for Note {
///     type Id = u32;
///     type Draft = NoteDraft;
///     const COLLECTION: &'static str = "/api/notes";
///
///     fn id(&self) -> &u32 {
///         &self.id
///     }
/// }
///
/// assert_eq!(Note::member_path(&7), "/api/notes/7");
/// ```
pub trait ApiEntity: Clone + Debug + DeserializeOwned + Send + Sync + 'static {
    /// Server-assigned identifier, rendered into member paths via `Display`.
    type Id: Clone + Eq + Display + Debug + Send + Sync;

    /// Payload sent on create and update.
    type Draft: Serialize + Debug + Send + Sync;

    /// Collection path, e.g. `/api/projects`.
    const COLLECTION: &'static str;

    /// The entity's identifier.
    fn id(&self) -> &Self::Id;

    /// Path of a single member of the collection. The id is percent-encoded
    /// as one path segment.
    fn member_path(id: &Self::Id) -> String {
        join_segment(Self::COLLECTION, &id.to_string())
    }
}

/// Appends `segment` to `path` as a single percent-encoded path segment.
pub fn join_segment(path: &str, segment: &str) -> String {
    let Ok(mut url) = Url::parse("http://resource.invalid/") else {
        return format!("{path}/{segment}");
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .clear()
            .extend(path.split('/').filter(|s| !s.is_empty()))
            .push(segment);
    }
    url.path().to_string()
}
