// Job roles and locations offered to clients.
// Informational only: the analyzer accepts any job role string.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleGroup {
    Internship,
    FullTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobRole {
    pub value: &'static str,
    pub label: &'static str,
    pub group: RoleGroup,
}

#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub job_roles: Vec<JobRole>,
    pub locations: Vec<Location>,
}

const JOB_ROLES: &[(&str, &str)] = &[
    ("software-engineer-intern", "Software Engineer Intern"),
    ("devops-intern", "DevOps Intern"),
    ("qa-intern", "QA Engineer Intern"),
    ("ui-ux-intern", "UI/UX Designer Intern"),
    ("data-science-intern", "Data Science Intern"),
    ("software-engineer", "Software Engineer"),
    ("devops-engineer", "DevOps Engineer"),
    ("frontend-engineer", "Frontend Engineer"),
    ("backend-engineer", "Backend Engineer"),
    ("fullstack-engineer", "Full Stack Engineer"),
    ("mobile-engineer", "Mobile Engineer"),
    ("cloud-engineer", "Cloud Engineer"),
];

const LOCATIONS: &[(&str, &str)] = &[
    ("sri_lanka", "Sri Lanka"),
    ("germany", "Germany"),
    ("usa", "USA"),
    ("canada", "Canada"),
    ("uk", "United Kingdom"),
    ("france", "France"),
    ("australia", "Australia"),
    ("india", "India"),
    ("japan", "Japan"),
    ("singapore", "Singapore"),
];

pub fn catalog() -> Catalog {
    Catalog {
        job_roles: JOB_ROLES
            .iter()
            .map(|&(value, label)| JobRole {
                value,
                label,
                group: if value.contains("intern") {
                    RoleGroup::Internship
                } else {
                    RoleGroup::FullTime
                },
            })
            .collect(),
        locations: LOCATIONS
            .iter()
            .map(|&(value, label)| Location { value, label })
            .collect(),
    }
}
