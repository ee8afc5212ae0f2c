//! Fixed sample data the catalog starts from.

use shared::domain::{Catalog, Project, ProjectId, ProjectStatus, Website, WebsiteId};

fn project(id: i64, name: &str, description: &str, status: ProjectStatus) -> Project {
    Project {
        id: ProjectId(id),
        name: name.to_string(),
        description: description.to_string(),
        status,
    }
}

pub fn seed_catalog() -> Catalog {
    Catalog::new(vec![
        Website {
            id: WebsiteId(1),
            name: "Ministry of Education".to_string(),
            url: "https://www.india.gov.in/".to_string(),
            description: "Government website for educational projects".to_string(),
            projects: vec![
                project(
                    1,
                    "School Development",
                    "Project for school development",
                    ProjectStatus::InProgress,
                ),
                project(
                    2,
                    "Teacher Training",
                    "Project for teacher training",
                    ProjectStatus::Completed,
                ),
            ],
        },
        Website {
            id: WebsiteId(2),
            name: "Ministry of Health".to_string(),
            url: "https://www.health.gov".to_string(),
            description: "Government website for health".to_string(),
            projects: vec![
                project(
                    1,
                    "Hospital Development",
                    "Project for hospital development",
                    ProjectStatus::InProgress,
                ),
                project(
                    2,
                    "Vaccine Distribution",
                    "Project for vaccine distribution",
                    ProjectStatus::Completed,
                ),
            ],
        },
    ])
}
