//! Landing page content: headline metrics, a few highlighted findings and
//! the "about space biology" blurb.

use serde::Serialize;

use crate::dashboard::{self, KeyMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendingInsight {
    pub id: u32,
    pub title: &'static str,
    pub summary: &'static str,
    /// `YYYY-MM-DD`.
    pub date: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub title: &'static str,
    pub content: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub dashboard_summary: KeyMetrics,
    pub trending_insights: &'static [TrendingInsight],
    pub about_space_biology: About,
}

const TRENDING_INSIGHTS: &[TrendingInsight] = &[
    TrendingInsight {
        id: 1,
        title: "Radiation Shielding Effects",
        summary: "DNA repair mechanisms were upregulated in yeast cells exposed to cosmic radiation.",
        date: "2023-11-15",
        category: "Radiation Biology",
    },
    TrendingInsight {
        id: 2,
        title: "Transcriptomic Analysis of Yeast in Space",
        summary: "Genes related to glycolysis, alcohol metabolism, and cell wall integrity were differentially expressed.",
        date: "2023-10-22",
        category: "Microbiology",
    },
    TrendingInsight {
        id: 3,
        title: "Plant Growth in Microgravity",
        summary: "Arabidopsis seedlings showed altered auxin transport in space environment.",
        date: "2023-09-18",
        category: "Botany",
    },
];

const ABOUT_SPACE_BIOLOGY: About = About {
    title: "Space Biology Research",
    content: "Space biology is the study of how spaceflight affects living organisms. Research in this field helps us understand how life adapts to the space environment, including microgravity and radiation. NASA's space biology program studies microbes, plants, animals, and humans to design effective countermeasures and create sustainable life support systems for long-duration missions.",
    image_url: "/space-biology.jpg",
};

pub fn home() -> HomeData {
    HomeData {
        dashboard_summary: dashboard::key_metrics(),
        trending_insights: TRENDING_INSIGHTS,
        about_space_biology: ABOUT_SPACE_BIOLOGY,
    }
}
