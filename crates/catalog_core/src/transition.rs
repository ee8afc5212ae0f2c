//! Pure submission transition: (catalog, draft) -> next catalog.

use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use shared::{
    domain::{Catalog, PendingSubmission, Project, ProjectId, ProjectStatus, Website},
    error::CatalogError,
    protocol::SubmissionOutcome,
};

/// How the id of a newly submitted project is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectIdStrategy {
    /// Number of websites in the catalog plus one. Can collide with ids
    /// already used inside the target website.
    #[default]
    WebsiteCount,
    /// Highest project id in the target website plus one, saturating at
    /// `i64::MAX`.
    NextInWebsite,
}

impl ProjectIdStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectIdStrategy::WebsiteCount => "website_count",
            ProjectIdStrategy::NextInWebsite => "next_in_website",
        }
    }

    fn assign(self, catalog: &Catalog, target: &Website) -> ProjectId {
        match self {
            ProjectIdStrategy::WebsiteCount => ProjectId(catalog.len() as i64 + 1),
            ProjectIdStrategy::NextInWebsite => {
                let max = target.projects.iter().map(|p| p.id.0).max().unwrap_or(0);
                ProjectId(max.saturating_add(1))
            }
        }
    }
}

impl fmt::Display for ProjectIdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectIdStrategy {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "website_count" => Ok(ProjectIdStrategy::WebsiteCount),
            "next_in_website" => Ok(ProjectIdStrategy::NextInWebsite),
            _ => Err(CatalogError::invalid_setting("project_id_strategy", raw)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub catalog: Catalog,
    pub outcome: SubmissionOutcome,
}

pub fn apply_submission(catalog: &Catalog, submission: &PendingSubmission) -> SubmissionResult {
    apply_submission_with(catalog, submission, ProjectIdStrategy::default())
}

/// Appends one `In Progress` project to every website whose id matches
/// `submission.website_id`. Unmatched websites are shared with `catalog`,
/// and website order is kept. No field is validated; an unknown website id
/// returns an equal catalog.
pub fn apply_submission_with(
    catalog: &Catalog,
    submission: &PendingSubmission,
    strategy: ProjectIdStrategy,
) -> SubmissionResult {
    let mut outcome = SubmissionOutcome::NoMatchingWebsite {
        website_id: submission.website_id,
    };

    let websites = catalog
        .shared_websites()
        .iter()
        .map(|website| {
            if website.id != submission.website_id {
                return Arc::clone(website);
            }

            let project = Project {
                id: strategy.assign(catalog, website),
                name: submission.name.clone(),
                description: submission.description.clone(),
                status: ProjectStatus::InProgress,
            };
            if !outcome.appended() {
                outcome = SubmissionOutcome::Appended {
                    website_id: website.id,
                    project_id: project.id,
                };
            }
            Arc::new(website.with_project(project))
        })
        .collect();

    SubmissionResult {
        catalog: Catalog::from_shared(websites),
        outcome,
    }
}
