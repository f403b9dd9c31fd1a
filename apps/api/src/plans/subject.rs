//! Keyword-based subject detection, used to theme locally built plans.

/// Subjects the fallback planner recognises. Anything else is `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectCategory {
    Dsa,
    Python,
    React,
    Hindi,
    English,
    Photography,
    Music,
    Gate,
    Jee,
    Upsc,
    Fitness,
    WeightLoss,
    Cooking,
    General,
}

/// Groups of subjects that share monthly themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectFamily {
    Languages,
    Creative,
    Exams,
    Technical,
    Unknown,
}

/// Checked in order; the first category with a matching keyword wins.
const KEYWORDS: &[(SubjectCategory, &[&str])] = &[
    (
        SubjectCategory::Dsa,
        &["algorithm", "data structure", "coding", "leetcode", "competitive programming"],
    ),
    (
        SubjectCategory::Python,
        &["python", "django", "flask", "fastapi", "pandas"],
    ),
    (
        SubjectCategory::React,
        &["react", "jsx", "frontend", "component", "nextjs"],
    ),
    (SubjectCategory::Hindi, &["हिंदी", "hindi", "devanagari"]),
    (
        SubjectCategory::English,
        &["english", "grammar", "vocabulary", "speaking", "writing"],
    ),
    (
        SubjectCategory::Photography,
        &["photo", "camera", "photography", "portrait", "landscape"],
    ),
    (
        SubjectCategory::Music,
        &["music", "instrument", "guitar", "piano", "singing", "composition"],
    ),
    (
        SubjectCategory::Gate,
        &["gate", "graduate aptitude test", "engineering entrance"],
    ),
    (SubjectCategory::Jee, &["jee", "joint entrance", "iit", "nit"]),
    (
        SubjectCategory::Upsc,
        &["upsc", "civil services", "ias", "ips", "public service"],
    ),
    (
        SubjectCategory::Fitness,
        &["fitness", "workout", "exercise", "gym", "health"],
    ),
    (
        SubjectCategory::WeightLoss,
        &[
            "weight loss",
            "lose weight",
            "losing weight",
            "weight reduction",
            "fat loss",
            "slim down",
            "get lean",
        ],
    ),
    (
        SubjectCategory::Cooking,
        &["cooking", "recipe", "chef", "culinary", "baking"],
    ),
];

impl SubjectCategory {
    pub fn key(&self) -> &'static str {
        match self {
            SubjectCategory::Dsa => "dsa",
            SubjectCategory::Python => "python",
            SubjectCategory::React => "react",
            SubjectCategory::Hindi => "hindi",
            SubjectCategory::English => "english",
            SubjectCategory::Photography => "photography",
            SubjectCategory::Music => "music",
            SubjectCategory::Gate => "gate",
            SubjectCategory::Jee => "jee",
            SubjectCategory::Upsc => "upsc",
            SubjectCategory::Fitness => "fitness",
            SubjectCategory::WeightLoss => "weight_loss",
            SubjectCategory::Cooking => "cooking",
            SubjectCategory::General => "general",
        }
    }

    pub fn family(&self) -> SubjectFamily {
        match self {
            SubjectCategory::Hindi | SubjectCategory::English => SubjectFamily::Languages,
            SubjectCategory::Photography | SubjectCategory::Music => SubjectFamily::Creative,
            SubjectCategory::Gate | SubjectCategory::Jee | SubjectCategory::Upsc => {
                SubjectFamily::Exams
            }
            SubjectCategory::General => SubjectFamily::Unknown,
            _ => SubjectFamily::Technical,
        }
    }
}

/// Detects the subject of a goal. A category's own key in the goal wins
/// over keyword matches.
pub fn detect_subject(goal: &str) -> SubjectCategory {
    let goal = goal.to_lowercase();

    KEYWORDS
        .iter()
        .map(|(category, _)| *category)
        .find(|category| goal.contains(category.key()))
        .or_else(|| {
            KEYWORDS
                .iter()
                .find(|(_, words)| words.iter().any(|word| goal.contains(word)))
                .map(|(category, _)| *category)
        })
        .unwrap_or(SubjectCategory::General)
}
