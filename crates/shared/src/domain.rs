use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(WebsiteId);
id_newtype!(ProjectId);

impl WebsiteId {
    /// Selector value meaning "no website chosen yet".
    pub const UNSELECTED: WebsiteId = WebsiteId(0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    pub id: WebsiteId,
    pub name: String,
    pub url: String,
    pub description: String,
    pub projects: Vec<Project>,
}

impl Website {
    /// Copy of this website with `project` appended after the existing ones.
    pub fn with_project(&self, project: Project) -> Website {
        let mut website = self.clone();
        website.projects.push(project);
        website
    }
}

/// Ordered, immutable snapshot of every website and its projects.
///
/// Websites sit behind `Arc`, so deriving a new catalog only clones the
/// website that actually changes; the rest are shared with the previous
/// snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    websites: Vec<Arc<Website>>,
}

impl Catalog {
    pub fn new(websites: Vec<Website>) -> Self {
        Self {
            websites: websites.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn from_shared(websites: Vec<Arc<Website>>) -> Self {
        Self { websites }
    }

    pub fn websites(&self) -> impl ExactSizeIterator<Item = &Website> {
        self.websites.iter().map(Arc::as_ref)
    }

    pub fn shared_websites(&self) -> &[Arc<Website>] {
        &self.websites
    }

    pub fn website(&self, id: WebsiteId) -> Option<&Website> {
        self.websites().find(|website| website.id == id)
    }

    pub fn len(&self) -> usize {
        self.websites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.websites.is_empty()
    }

    pub fn project_count(&self) -> usize {
        self.websites().map(|website| website.projects.len()).sum()
    }
}

/// Draft values of the project form, not yet submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingSubmission {
    pub name: String,
    pub description: String,
    pub website_id: WebsiteId,
}

impl PendingSubmission {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        website_id: WebsiteId,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            website_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
