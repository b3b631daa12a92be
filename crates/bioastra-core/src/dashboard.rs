//! Headline numbers and topic chart for the dashboard page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub total_publications: u32,
    pub total_missions: u32,
    pub total_organisms: u32,
}

/// Chart-ready distribution: parallel `labels` and dataset values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicDistribution {
    pub labels: &'static [&'static str],
    pub datasets: [TopicDataset; 1],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDataset {
    pub data: &'static [u32],
    pub background_color: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub key_metrics: KeyMetrics,
    pub topic_distribution: TopicDistribution,
}

const KEY_METRICS: KeyMetrics = KeyMetrics {
    total_publications: 608,
    total_missions: 42,
    total_organisms: 35,
};

const TOPIC_LABELS: &[&str] = &[
    "Immune System",
    "Bone Health",
    "Muscle Atrophy",
    "Radiation Effects",
    "Cardiovascular",
    "Plant Growth",
];
const TOPIC_DATA: &[u32] = &[25, 15, 20, 18, 12, 10];
const TOPIC_COLORS: &[&str] = &["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40"];

pub fn key_metrics() -> KeyMetrics {
    KEY_METRICS
}

pub fn topic_distribution() -> TopicDistribution {
    TopicDistribution {
        labels: TOPIC_LABELS,
        datasets: [TopicDataset {
            data: TOPIC_DATA,
            background_color: TOPIC_COLORS,
        }],
    }
}

pub fn dashboard() -> DashboardData {
    DashboardData {
        key_metrics: key_metrics(),
        topic_distribution: topic_distribution(),
    }
}
