//! Research insights backed by static lookup tables.
//!
//! Stands in for the AI summarisation service: study summaries come from a
//! compile-time table keyed by study id, topic summaries from an ordered
//! keyword table, and everything else from templates.

use serde::Serialize;

/// A canned summary as stored in the tables.
#[derive(Debug, Clone, Copy)]
struct StaticSummary {
    summary: &'static str,
    key_findings: &'static [&'static str],
    related_topics: &'static [&'static str],
    confidence: f64,
}

static STUDY_SUMMARIES: phf::Map<&'static str, StaticSummary> = phf::phf_map! {
    "NASA-SB-2022-01" => StaticSummary {
        summary: "This groundbreaking study examined the effects of microgravity on human stem cell differentiation during a 30-day ISS mission. Results showed significant alterations in osteogenic pathways, with a 42% reduction in bone-forming capacity. The research identified three key transcription factors that were downregulated in space and proposed a novel countermeasure using targeted gene therapy.",
        key_findings: &[
            "42% reduction in osteogenic differentiation capacity",
            "Downregulation of RUNX2, OSX, and BGLAP transcription factors",
            "Proposed gene therapy approach increased differentiation by 28% in simulated microgravity",
        ],
        related_topics: &["stem cell biology", "bone loss", "microgravity", "gene therapy"],
        confidence: 0.92,
    },
    "NASA-SB-2021-15" => StaticSummary {
        summary: "This study investigated plant growth systems for food production in space, focusing on hydroponic techniques under LED lighting conditions. The research demonstrated that a novel nutrient delivery system increased crop yield by 35% while reducing water usage by 40% compared to conventional methods. The system was successfully tested during a 90-day deployment on the ISS.",
        key_findings: &[
            "35% increase in crop yield with novel nutrient delivery",
            "40% reduction in water consumption",
            "Successful 90-day ISS deployment with minimal maintenance",
        ],
        related_topics: &["space agriculture", "hydroponics", "resource efficiency", "food systems"],
        confidence: 0.89,
    },
};

/// Topic keys are matched by containment; when several match, the later
/// entry wins.
const TOPIC_SUMMARIES: &[(&str, StaticSummary)] = &[
    (
        "radiation",
        StaticSummary {
            summary: "Space radiation remains one of the most significant challenges for long-duration human spaceflight. Recent research has focused on understanding the biological effects of galactic cosmic rays (GCRs) and solar particle events (SPEs). Studies have shown that high-LET radiation causes complex DNA damage that is difficult to repair, leading to increased cancer risk and potential cognitive impairment. Promising countermeasures include pharmaceutical radioprotectants, dietary supplements rich in antioxidants, and engineered materials for spacecraft shielding.",
            key_findings: &[
                "High-LET radiation causes complex DNA double-strand breaks",
                "Potential cognitive effects observed in rodent models",
                "Combination countermeasures show most promise (shielding + biological protection)",
            ],
            related_topics: &["radiation biology", "DNA damage", "radioprotectants", "shielding technology"],
            confidence: 0.94,
        },
    ),
    (
        "microgravity",
        StaticSummary {
            summary: "Microgravity exposure leads to numerous physiological changes in living organisms. Recent studies have documented significant alterations in cellular mechanotransduction pathways, cytoskeletal organization, and gene expression profiles. In humans, bone and muscle loss remain critical challenges, though exercise countermeasures have shown partial effectiveness. At the cellular level, changes in proliferation, differentiation, and 3D organization have been observed across multiple cell types, with stem cells showing particular sensitivity to gravitational changes.",
            key_findings: &[
                "Altered mechanotransduction signaling through focal adhesions",
                "Cytoskeletal reorganization affects intracellular transport",
                "Stem cell differentiation pathways show gravity-dependent regulation",
            ],
            related_topics: &["mechanobiology", "cytoskeleton", "stem cells", "bone loss", "muscle atrophy"],
            confidence: 0.91,
        },
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub summary: String,
    pub key_findings: Vec<String>,
    pub related_topics: Vec<String>,
    pub confidence: f64,
}

impl From<&StaticSummary> for Summary {
    fn from(s: &StaticSummary) -> Self {
        Self {
            summary: s.summary.to_string(),
            key_findings: s.key_findings.iter().map(|f| f.to_string()).collect(),
            related_topics: s.related_topics.iter().map(|t| t.to_string()).collect(),
            confidence: s.confidence,
        }
    }
}

/// What to summarise. Precedence: study id, then keywords, then topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryRequest {
    pub study_id: Option<String>,
    pub keywords: Vec<String>,
    pub topic: Option<String>,
}

impl SummaryRequest {
    /// Build from raw query values.
    ///
    /// `keywords` is comma-separated and each entry is trimmed. Empty entries
    /// are kept, so `"a,,b"` is three keywords; an empty string is none.
    pub fn from_params(study_id: Option<&str>, keywords: Option<&str>, topic: Option<&str>) -> Self {
        let present = |v: Option<&str>| v.filter(|v| !v.trim().is_empty()).map(str::to_string);
        Self {
            study_id: present(study_id),
            keywords: keywords
                .filter(|raw| !raw.is_empty())
                .map(|raw| raw.split(',').map(|k| k.trim().to_string()).collect())
                .unwrap_or_default(),
            topic: present(topic),
        }
    }
}

pub fn summarize(request: &SummaryRequest) -> Summary {
    if let Some(id) = &request.study_id {
        study_summary(id)
    } else if !request.keywords.is_empty() {
        keyword_summary(&request.keywords)
    } else if let Some(topic) = &request.topic {
        topic_summary(topic)
    } else {
        Summary {
            summary: "Please provide a study ID, keywords, or topic to generate a summary.".into(),
            key_findings: Vec::new(),
            related_topics: Vec::new(),
            confidence: 0.0,
        }
    }
}

fn study_summary(id: &str) -> Summary {
    match STUDY_SUMMARIES.get(id) {
        Some(s) => s.into(),
        None => Summary {
            summary: format!(
                "Study {id} examined important aspects of space biology with significant implications for future research and space missions. The findings contribute to our understanding of biological processes in space environments."
            ),
            key_findings: vec![
                "Significant changes observed in biological processes".into(),
                "Potential applications for future space missions".into(),
                "New research directions identified".into(),
            ],
            related_topics: vec![
                "space biology".into(),
                "microgravity research".into(),
                "astrobiology".into(),
            ],
            confidence: 0.75,
        },
    }
}

fn keyword_summary(keywords: &[String]) -> Summary {
    let nth_or = |i: usize, fallback: &'static str| {
        keywords
            .get(i)
            .map(String::as_str)
            .filter(|k| !k.is_empty())
            .unwrap_or(fallback)
    };
    let first = nth_or(0, "research areas");
    let second = nth_or(1, "these topics");
    let mut related_topics = keywords.to_vec();
    related_topics.extend(["space biology".to_string(), "microgravity".to_string()]);

    Summary {
        summary: format!(
            "Recent research on {} shows promising developments in understanding space biology. Studies have demonstrated significant effects of space environments on these processes, with implications for astronaut health and future space missions. Several key mechanisms have been identified that could lead to novel countermeasures.",
            keywords.join(", ")
        ),
        key_findings: vec![
            format!("Important relationships identified between {first} and space adaptation"),
            format!("New methodologies developed for studying {second} in microgravity"),
            "Potential applications for Earth-based medicine and biotechnology".into(),
        ],
        related_topics,
        confidence: 0.82,
    }
}

fn topic_summary(topic: &str) -> Summary {
    let normalized = topic.to_lowercase();
    let matched = TOPIC_SUMMARIES
        .iter()
        .filter(|(key, _)| normalized.contains(key))
        .last();

    match matched {
        Some((_, s)) => s.into(),
        None => Summary {
            summary: format!(
                "Research on {topic} in space biology contexts has revealed important insights into how space environments affect biological systems. Multiple studies have identified key mechanisms and potential applications for both space exploration and Earth-based benefits."
            ),
            key_findings: vec![
                format!("Significant effects of space environments on {topic}"),
                "Potential applications for future space missions".into(),
                "Implications for human health in space and on Earth".into(),
            ],
            related_topics: vec![
                topic.to_string(),
                "space biology".into(),
                "microgravity research".into(),
            ],
            confidence: 0.78,
        },
    }
}

// ---------------------------------------------------------------------------
// Trends and gaps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTopic {
    pub topic: &'static str,
    pub relevance: f64,
    pub recent_publications: u32,
    pub growth_rate: &'static str,
}

const TRENDING_TOPICS: &[TrendingTopic] = &[
    TrendingTopic {
        topic: "Microgravity effects on stem cell differentiation",
        relevance: 0.95,
        recent_publications: 12,
        growth_rate: "+28%",
    },
    TrendingTopic {
        topic: "Radiation protection mechanisms in space",
        relevance: 0.92,
        recent_publications: 8,
        growth_rate: "+15%",
    },
    TrendingTopic {
        topic: "Plant growth systems for long-duration missions",
        relevance: 0.89,
        recent_publications: 15,
        growth_rate: "+32%",
    },
    TrendingTopic {
        topic: "Microbiome changes in isolated environments",
        relevance: 0.87,
        recent_publications: 7,
        growth_rate: "+18%",
    },
    TrendingTopic {
        topic: "Circadian rhythm disruption countermeasures",
        relevance: 0.85,
        recent_publications: 9,
        growth_rate: "+22%",
    },
];

pub fn trending_topics() -> &'static [TrendingTopic] {
    TRENDING_TOPICS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchGap {
    pub area: &'static str,
    pub gap: &'static str,
    pub importance: &'static str,
    pub potential_impact: &'static str,
}

const RESEARCH_GAPS: &[ResearchGap] = &[
    ResearchGap {
        area: "Microgravity Biology",
        gap: "Long-term epigenetic changes in microgravity",
        importance: "High",
        potential_impact: "Understanding heritable changes could inform multi-generation space missions",
    },
    ResearchGap {
        area: "Radiation Biology",
        gap: "Combined effects of microgravity and radiation on DNA repair",
        importance: "Critical",
        potential_impact: "Essential for developing effective countermeasures for deep space missions",
    },
    ResearchGap {
        area: "Space Agriculture",
        gap: "Sustainable closed-loop nutrient cycling for plant growth",
        importance: "High",
        potential_impact: "Key for self-sustaining food production on long-duration missions",
    },
    ResearchGap {
        area: "Human Physiology",
        gap: "Vestibular adaptation mechanisms in partial gravity",
        importance: "Medium",
        potential_impact: "Important for Mars and lunar surface operations",
    },
    ResearchGap {
        area: "Space Medicine",
        gap: "Personalized medicine approaches for astronaut healthcare",
        importance: "High",
        potential_impact: "Could significantly improve treatment outcomes during missions",
    },
];

/// All known gaps, or those whose area contains `area` (case-insensitive).
pub fn research_gaps(area: Option<&str>) -> Vec<&'static ResearchGap> {
    match area.filter(|a| !a.is_empty()).map(str::to_lowercase) {
        Some(needle) => RESEARCH_GAPS
            .iter()
            .filter(|g| g.area.to_lowercase().contains(&needle))
            .collect(),
        None => RESEARCH_GAPS.iter().collect(),
    }
}
