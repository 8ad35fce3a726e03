//! Portfolio projects as served by `/api/projects`.
//!
//! # Resource Client
//! [`Project`] implements the [`ApiEntity`](resource_client::ApiEntity) trait,
//! allowing it to be listed, saved and deleted through a
//! [`ResourceClient`](resource_client::ResourceClient). Creates and updates
//! carry a [`ProjectDraft`], the payload the project form produces.

use resource_client::ApiEntity;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Projects.
///
/// The server assigns ids and may send them as JSON strings or integers; both
/// are kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Text(id) => Self(id),
            Wire::Unsigned(id) => Self(id.to_string()),
            Wire::Signed(id) => Self(id.to_string()),
        })
    }
}

/// A portfolio item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
}

impl Project {
    /// Creates a new Project instance.
    ///
    /// # Arguments
    /// * `id` - Identifier (normally assigned by the API)
    /// * `title` - Display title
    /// * `description` - Free text, possibly long
    pub fn new(id: impl Into<ProjectId>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image_url: None,
            technologies: Vec::new(),
            featured: false,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// The image to show, if any. Blank URLs count as missing.
    pub fn image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// The technologies shown in list contexts (at most `limit`).
    pub fn leading_technologies(&self, limit: usize) -> &[String] {
        &self.technologies[..self.technologies.len().min(limit)]
    }
}

impl ApiEntity for Project {
    type Id = ProjectId;
    type Draft = ProjectDraft;
    const COLLECTION: &'static str = "/api/projects";

    fn id(&self) -> &ProjectId {
        &self.id
    }
}

/// Payload collected by the project form and sent on create and update.
///
/// Field validation belongs to the form; this type only carries the values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

// Prefill for the edit form.
impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone(),
            technologies: project.technologies.clone(),
            featured: project.featured,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
