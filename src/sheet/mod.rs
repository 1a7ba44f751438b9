//! The character sheet: every piece of content the UI renders.
//!
//! The whole portfolio is one `static` aggregate, built at compile time and
//! never mutated. Pages read their slice of [`CharacterSheet`] and nothing
//! else; there is no loading, validation, or derivation step.
//!
//! Two conventions keep the model honest:
//!
//! - Every list entry carries an explicit `id` distinct from its display
//!   text, so two entries may share a display name without becoming
//!   ambiguous. Ids must be unique within their list (checked by tests).
//! - Icons are stored as semantic [`IconTag`] values, never as glyphs. The
//!   UI layer owns the tag-to-glyph lookup, keeping presentation out of the
//!   data.

/// Semantic icon tag attached to data entries.
///
/// The rendering layer maps each tag to a terminal glyph; the data layer
/// only records what kind of thing an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTag {
    /// Hardware/engineering (skill branches)
    Chip,
    /// Analytical/AI work
    Mind,
    /// Process and delivery
    Gear,
    /// Credentials and defense
    Shield,
    /// Books, learning, project writeups
    Tome,
    /// Tools of the trade
    Blade,
    /// Awards and showpieces
    Trophy,
    /// Quest log entries
    Scroll,
    /// Forward-looking plans
    Compass,
    /// Outreach and contact
    Send,
}

/// Identity header content.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

/// A single character attribute, rendered as a progress meter.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub id: &'static str,
    pub label: &'static str,
    /// Stored unclamped; the meter clamps to [0, 100] at render time.
    pub value: i16,
}

/// One branch of the skill tree.
#[derive(Debug, Clone, Copy)]
pub struct SkillBranch {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: IconTag,
    pub skills: &'static [Skill],
}

/// A named skill with a level meter.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub id: &'static str,
    pub name: &'static str,
    pub level: i16,
}

/// A certification or tool carried in the inventory.
#[derive(Debug, Clone, Copy)]
pub struct InventoryItem {
    pub id: &'static str,
    pub name: &'static str,
    pub detail: &'static str,
    pub icon: IconTag,
}

/// A portfolio project entry.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub bullets: &'static [&'static str],
    pub tags: &'static [&'static str],
    /// "#" marks a placeholder with nothing to open yet.
    pub link: &'static str,
}

/// A group of quests belonging to one era of the journey.
#[derive(Debug, Clone, Copy)]
pub struct QuestEra {
    pub id: &'static str,
    pub label: &'static str,
    pub quests: &'static [Quest],
}

/// One quest: a mission with progress and tags.
#[derive(Debug, Clone, Copy)]
pub struct Quest {
    pub id: &'static str,
    pub name: &'static str,
    pub detail: &'static str,
    /// Stored unclamped; the meter clamps to [0, 100] at render time.
    pub progress: i16,
    pub tags: &'static [&'static str],
}

/// One period on the roadmap with its planned milestones.
#[derive(Debug, Clone, Copy)]
pub struct RoadmapPeriod {
    pub id: &'static str,
    pub label: &'static str,
    pub milestones: &'static [&'static str],
}

/// The full static aggregate. One instance exists for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct CharacterSheet {
    pub profile: Profile,
    pub stats: &'static [Stat],
    pub skill_branches: &'static [SkillBranch],
    pub inventory: &'static [InventoryItem],
    pub projects: &'static [Project],
    pub quest_eras: &'static [QuestEra],
    pub roadmap: &'static [RoadmapPeriod],
}

/// The one and only character sheet.
pub fn sheet() -> &'static CharacterSheet {
    &SHEET
}

static SHEET: CharacterSheet = CharacterSheet {
    profile: Profile {
        name: "Richard Chen",
        title: "AI Engineer · Data Analyst · Technical PM",
        tagline: "From blueprints to code — building intelligent systems powered by AI.",
        location: "New York, USA",
        email: "richard.chen3797@gmail.com",
        github: "https://github.com/richard-ai",
        linkedin: "https://linkedin.com/in/richard-chen-26019a237",
    },
    stats: &[
        Stat {
            id: "focus",
            label: "Focus",
            value: 82,
        },
        Stat {
            id: "resilience",
            label: "Resilience",
            value: 88,
        },
        Stat {
            id: "systems-thinking",
            label: "Systems Thinking",
            value: 90,
        },
        Stat {
            id: "communication",
            label: "Communication",
            value: 84,
        },
        Stat {
            id: "shipping-rate",
            label: "Shipping Rate",
            value: 76,
        },
    ],
    skill_branches: &[
        SkillBranch {
            id: "core-engineering",
            name: "Core Engineering",
            icon: IconTag::Chip,
            skills: &[
                Skill {
                    id: "python",
                    name: "Python",
                    level: 80,
                },
                Skill {
                    id: "sql",
                    name: "SQL",
                    level: 78,
                },
                Skill {
                    id: "git-github",
                    name: "Git/GitHub",
                    level: 75,
                },
                Skill {
                    id: "apis-etl",
                    name: "APIs & ETL",
                    level: 70,
                },
            ],
        },
        SkillBranch {
            id: "ai-analytics",
            name: "AI & Analytics",
            icon: IconTag::Mind,
            skills: &[
                Skill {
                    id: "pandas-numpy",
                    name: "Pandas / NumPy",
                    level: 78,
                },
                Skill {
                    id: "scikit-learn",
                    name: "Scikit-learn",
                    level: 65,
                },
                Skill {
                    id: "llms",
                    name: "LLMs (OpenAI/LangChain)",
                    level: 68,
                },
                Skill {
                    id: "bi-tools",
                    name: "Power BI / Tableau",
                    level: 72,
                },
            ],
        },
        SkillBranch {
            id: "delivery-ops",
            name: "Delivery & Ops",
            icon: IconTag::Gear,
            skills: &[
                Skill {
                    id: "agile-scrum",
                    name: "Agile / Scrum",
                    level: 85,
                },
                Skill {
                    id: "roadmapping",
                    name: "Roadmapping",
                    level: 82,
                },
                Skill {
                    id: "stakeholder-mgmt",
                    name: "Stakeholder mgmt",
                    level: 80,
                },
                Skill {
                    id: "risk-qa",
                    name: "Risk & QA",
                    level: 78,
                },
            ],
        },
    ],
    inventory: &[
        InventoryItem {
            id: "pmp",
            name: "PMP®",
            detail: "Project Management Professional",
            icon: IconTag::Shield,
        },
        InventoryItem {
            id: "cs50x",
            name: "CS50x (in progress)",
            detail: "Computer Science fundamentals",
            icon: IconTag::Tome,
        },
        InventoryItem {
            id: "python-toolbelt",
            name: "Python Toolbelt",
            detail: "Jupyter, FastAPI, Streamlit",
            icon: IconTag::Blade,
        },
        InventoryItem {
            id: "data-viz-kit",
            name: "Data Viz Kit",
            detail: "Power BI, Plotly",
            icon: IconTag::Trophy,
        },
    ],
    projects: &[
        Project {
            id: "nyc-energy-predictor",
            title: "NYC Energy Predictor",
            summary: "Predict building energy use and surface actionable insights for retrofits.",
            bullets: &[
                "EDA on NYC Benchmarking dataset",
                "Regression + feature importance",
                "Streamlit app for what-ifs",
            ],
            tags: &["Python", "Pandas", "scikit-learn", "Streamlit"],
            link: "#",
        },
        Project {
            id: "pm-ai-copilot",
            title: "PM AI Copilot",
            summary: "LLM assistant that drafts reports, summarizes meetings, and creates timelines.",
            bullets: &[
                "OpenAI + LangChain",
                "RAG over project docs",
                "Role-aware prompts",
            ],
            tags: &["OpenAI", "LangChain", "Embeddings", "RAG"],
            link: "#",
        },
        Project {
            id: "telemetry-dashboard",
            title: "Telemetry Dashboard",
            summary: "Interactive BI dashboard for ops performance and cost drivers.",
            bullets: &[
                "Power BI semantic model",
                "DAX KPIs",
                "Drillthrough & cohort views",
            ],
            tags: &["Power BI", "SQL", "DAX"],
            link: "#",
        },
    ],
    quest_eras: &[
        QuestEra {
            id: "past",
            label: "Past",
            quests: &[
                Quest {
                    id: "nyc-infrastructure-pm",
                    name: "NYC Infrastructure PM",
                    detail: "Led $20M+ projects; coordinated multi-disciplinary teams; delivered under pressure.",
                    progress: 100,
                    tags: &["Leadership", "Risk mgmt", "Stakeholders"],
                },
                Quest {
                    id: "quality-safety-ops",
                    name: "Quality & Safety Ops",
                    detail: "Implemented checklists, audits, and variance tracking to cut defects.",
                    progress: 80,
                    tags: &["QA", "Process", "KPI"],
                },
            ],
        },
        QuestEra {
            id: "now",
            label: "Now",
            quests: &[
                Quest {
                    id: "digital-detox",
                    name: "21-Day Digital Detox (Focus Arc)",
                    detail: "Reducing distractions to unlock deep work periods and peak health.",
                    progress: 40,
                    tags: &["Mindset", "Discipline"],
                },
                Quest {
                    id: "data-analyst-path",
                    name: "Data Analyst Path",
                    detail: "Daily reps in SQL/Python + one shipped analysis artifact per week.",
                    progress: 35,
                    tags: &["SQL", "Python", "Portfolio"],
                },
            ],
        },
        QuestEra {
            id: "next",
            label: "Next",
            quests: &[
                Quest {
                    id: "ship-energy-optimizer",
                    name: "Ship: Energy Optimizer v2",
                    detail: "Forecast savings scenarios; publish case study and walkthrough video.",
                    progress: 25,
                    tags: &["Modeling", "Storytelling"],
                },
                Quest {
                    id: "hire-data-analyst",
                    name: "Hire: Data Analyst / AI Engineer",
                    detail: "Target NYC/Remote roles in AI-enabled data teams.",
                    progress: 50,
                    tags: &["Job Search", "Networking"],
                },
            ],
        },
    ],
    roadmap: &[
        RoadmapPeriod {
            id: "q4-2025",
            label: "Q4 · 2025",
            milestones: &[
                "Ship 2 portfolio projects",
                "Apply to 15 data roles",
                "Weekly LinkedIn posts",
            ],
        },
        RoadmapPeriod {
            id: "q1-2026",
            label: "Q1 · 2026",
            milestones: &[
                "Join data/AI team",
                "Own a KPI dashboard end-to-end",
                "Study for Azure/AWS cert",
            ],
        },
        RoadmapPeriod {
            id: "q2-2026",
            label: "Q2 · 2026",
            milestones: &[
                "Lead an ML-assisted analytics feature",
                "Publish tech blog series",
            ],
        },
    ],
};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids<'a, I>(ids: I, list: &str)
    where
        I: Iterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id {:?} in {}", id, list);
        }
    }

    #[test]
    fn test_stat_ids_unique() {
        assert_unique_ids(sheet().stats.iter().map(|s| s.id), "stats");
    }

    #[test]
    fn test_skill_branch_and_skill_ids_unique() {
        assert_unique_ids(sheet().skill_branches.iter().map(|b| b.id), "branches");
        for branch in sheet().skill_branches {
            assert_unique_ids(branch.skills.iter().map(|s| s.id), branch.id);
        }
    }

    #[test]
    fn test_inventory_ids_unique() {
        assert_unique_ids(sheet().inventory.iter().map(|i| i.id), "inventory");
    }

    #[test]
    fn test_project_ids_unique() {
        assert_unique_ids(sheet().projects.iter().map(|p| p.id), "projects");
    }

    #[test]
    fn test_quest_ids_unique_across_eras() {
        assert_unique_ids(sheet().quest_eras.iter().map(|e| e.id), "eras");
        assert_unique_ids(
            sheet()
                .quest_eras
                .iter()
                .flat_map(|e| e.quests.iter().map(|q| q.id)),
            "quests",
        );
    }

    #[test]
    fn test_roadmap_ids_unique() {
        assert_unique_ids(sheet().roadmap.iter().map(|p| p.id), "roadmap");
    }

    #[test]
    fn test_eras_keep_stored_order() {
        let labels: Vec<&str> = sheet().quest_eras.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Past", "Now", "Next"]);
    }

    #[test]
    fn test_sheet_shape() {
        let sheet = sheet();
        assert_eq!(sheet.stats.len(), 5);
        assert_eq!(sheet.skill_branches.len(), 3);
        assert_eq!(sheet.inventory.len(), 4);
        assert_eq!(sheet.projects.len(), 3);
        assert_eq!(sheet.quest_eras.len(), 3);
        assert_eq!(sheet.roadmap.len(), 3);
    }

    #[test]
    fn test_profile_links_are_absolute() {
        let profile = sheet().profile;
        assert!(profile.github.starts_with("https://"));
        assert!(profile.linkedin.starts_with("https://"));
        assert!(profile.email.contains('@'));
    }
}
