//! Fixed catalogue of external NASA resource links.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
}

const RESOURCES: &[Resource] = &[
    Resource {
        id: 1,
        title: "NASA Open Science Data Repository",
        description: "Access open science data from NASA's space biology research programs.",
        url: "https://osdr.nasa.gov/bio/",
        category: "data",
        icon: "database",
    },
    Resource {
        id: 2,
        title: "NASA Space Life Sciences Library",
        description: "Comprehensive library of space life sciences publications and research.",
        url: "https://lsda.jsc.nasa.gov/",
        category: "publications",
        icon: "book",
    },
    Resource {
        id: 3,
        title: "NASA Task Book",
        description: "Information on research projects funded by NASA's biological research programs.",
        url: "https://taskbook.nasaprs.com/tbp/index.cfm",
        category: "research",
        icon: "file-text",
    },
    Resource {
        id: 4,
        title: "Space Biology Publications",
        description: "Collection of 608 full-text open-access Space Biology publications.",
        url: "https://www.nasa.gov/missions/station/iss-research/space-biology-publications/",
        category: "publications",
        icon: "book-open",
    },
];

pub fn all() -> &'static [Resource] {
    RESOURCES
}

/// Resources whose category equals `category` exactly. Blank returns all.
pub fn by_category(category: &str) -> Vec<&'static Resource> {
    if category.is_empty() {
        return RESOURCES.iter().collect();
    }
    RESOURCES.iter().filter(|r| r.category == category).collect()
}

/// Look up by the textual id from a URL path. Non-numeric ids find nothing.
pub fn by_id(raw: &str) -> Option<&'static Resource> {
    let id: u32 = raw.trim().parse().ok()?;
    RESOURCES.iter().find(|r| r.id == id)
}
