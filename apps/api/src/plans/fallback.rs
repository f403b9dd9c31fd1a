//! Deterministic learning plan, used when the model never produces the exact
//! task counts. Always has one task per day, week and month.

use crate::plans::duration::PlanTotals;
use crate::plans::models::{LearningPlan, TaskItem};
use crate::plans::subject::{detect_subject, SubjectFamily};

const LANGUAGE_MONTHS: [[&str; 2]; 6] = [
    ["Script and Basic Vocabulary", "Grammar Fundamentals"],
    ["Conversation and Listening Skills", "Reading Comprehension"],
    ["Writing Skills and Advanced Grammar", "Cultural Context"],
    ["Fluency Development", "Literature and Media"],
    ["Professional Communication", "Advanced Composition"],
    ["Mastery and Teaching Skills", "Native-level Proficiency"],
];

const CREATIVE_MONTHS: [[&str; 2]; 6] = [
    ["Equipment and Technical Basics", "Fundamental Techniques"],
    ["Creative Exploration", "Style Development"],
    ["Advanced Techniques", "Professional Skills"],
    ["Portfolio Development", "Commercial Applications"],
    ["Artistic Mastery", "Teaching and Mentoring"],
    ["Industry Integration", "Personal Brand Building"],
];

const EXAM_MONTHS: [[&str; 2]; 6] = [
    ["Syllabus Analysis and Foundation", "Basic Concept Building"],
    ["Topic-wise Mastery", "Practice and Problem Solving"],
    ["Mock Tests and Time Management", "Weak Area Improvement"],
    ["Advanced Problem Solving", "Revision and Consolidation"],
    ["Final Preparation", "Stress Management"],
    ["Last-minute Revision", "Exam Strategy Refinement"],
];

const TECHNICAL_MONTHS: [[&str; 2]; 6] = [
    ["Foundation and Environment Setup", "Basic Concepts and Syntax"],
    ["Intermediate Concepts and Patterns", "Hands-on Practice Projects"],
    ["Advanced Topics and Frameworks", "Real-world Applications"],
    ["Mastery and Optimization", "Portfolio and Interview Prep"],
    ["Specialization Areas", "Industry Best Practices"],
    ["Expert-level Challenges", "Teaching and Mentoring"],
];

const WEEK_THEMES: [[&str; 2]; 6] = [
    ["Foundation building", "Basic practice"],
    ["Skill development", "Hands-on application"],
    ["Advanced concepts", "Complex projects"],
    ["Mastery refinement", "Portfolio creation"],
    ["Expert application", "Teaching others"],
    ["Professional integration", "Continuous improvement"],
];

/// Builds a complete plan for `goal` from templates.
pub fn fallback_plan(goal: &str, totals: &PlanTotals) -> LearningPlan {
    let subject = subject_name(goal);
    let family = detect_subject(goal).family();

    LearningPlan {
        goal_title: goal.to_string(),
        total_days: totals.days,
        monthly_tasks: monthly_tasks(&subject, family, totals.months),
        weekly_tasks: weekly_tasks(&subject, totals.weeks),
        daily_tasks: daily_tasks(&subject, totals.days)
            .into_iter()
            .enumerate()
            .map(|(i, task)| TaskItem::new(format!("Day {}", i + 1), vec![task]))
            .collect(),
    }
}

/// The goal without its leading verb: "Learn Rust" → "Rust".
pub fn subject_name(goal: &str) -> String {
    goal.replace("Learn ", "")
        .replace("learn ", "")
        .replace("prepare for ", "")
        .trim()
        .to_string()
}

fn monthly_tasks(subject: &str, family: SubjectFamily, months: u64) -> Vec<TaskItem> {
    let themes = match family {
        SubjectFamily::Languages => &LANGUAGE_MONTHS,
        SubjectFamily::Creative => &CREATIVE_MONTHS,
        SubjectFamily::Exams => &EXAM_MONTHS,
        SubjectFamily::Technical => &TECHNICAL_MONTHS,
        SubjectFamily::Unknown => return generic_monthly_tasks(subject, months),
    };

    (0..months)
        .map(|month| {
            let [focus, master] = themes[(month % themes.len() as u64) as usize];
            TaskItem::new(
                format!("Month {}", month + 1),
                vec![
                    format!("Focus on {} - {}", focus.to_lowercase(), subject.to_lowercase()),
                    format!("Master {} - {}", master.to_lowercase(), subject.to_lowercase()),
                ],
            )
        })
        .collect()
}

fn generic_monthly_tasks(subject: &str, months: u64) -> Vec<TaskItem> {
    (0..months)
        .map(|month| {
            let tasks = if month == 0 {
                vec![
                    format!("Build strong foundation in {subject} fundamentals and core concepts"),
                    "Establish consistent practice routine and gather essential resources"
                        .to_string(),
                ]
            } else if month == months - 1 {
                vec![
                    format!("Achieve mastery-level proficiency in {subject}"),
                    "Create portfolio and prepare to teach or mentor others".to_string(),
                ]
            } else {
                vec![
                    format!("Advance your {subject} skills through challenging projects and exercises"),
                    format!("Apply {subject} knowledge to real-world scenarios and problems"),
                ]
            };
            TaskItem::new(format!("Month {}", month + 1), tasks)
        })
        .collect()
}

fn weekly_tasks(subject: &str, weeks: u64) -> Vec<TaskItem> {
    (0..weeks)
        .map(|week| {
            let [study, practice] = WEEK_THEMES[(week % WEEK_THEMES.len() as u64) as usize];
            TaskItem::new(
                format!("Week {}", week + 1),
                vec![
                    format!("{study} in {subject} with focused study sessions"),
                    format!("{practice} through practical exercises and real-world scenarios"),
                ],
            )
        })
        .collect()
}

/// Ten learning phases spread evenly over the days, then capstone and
/// consolidation days to fill the remainder.
fn daily_tasks(subject: &str, days: u64) -> Vec<String> {
    let phases = [
        format!("Research and understand what {subject} involves and its practical applications"),
        format!("Gather essential resources, tools, and materials needed for {subject}"),
        format!("Learn fundamental concepts and basic principles of {subject}"),
        format!("Practice beginner exercises and follow structured tutorials for {subject}"),
        format!("Apply knowledge by working on a simple real-world project in {subject}"),
        format!("Study intermediate concepts and explore different approaches in {subject}"),
        format!("Implement a medium-complexity project demonstrating your {subject} skills"),
        format!("Learn advanced techniques and study expert-level practices in {subject}"),
        format!("Contribute to community projects or create original content in {subject}"),
        format!("Build a comprehensive portfolio showcasing your {subject} expertise"),
    ];
    let target = usize::try_from(days).unwrap_or(usize::MAX);
    let per_phase = (target / phases.len()).max(1);

    let mut tasks = Vec::with_capacity(target);
    'phases: for base in &phases {
        for day_in_phase in 0..per_phase {
            if tasks.len() >= target {
                break 'phases;
            }
            if day_in_phase == 0 {
                tasks.push(base.clone());
            } else {
                let base = base.to_lowercase();
                tasks.push(match day_in_phase % 4 {
                    0 => format!("Continue {base} with focused practice sessions"),
                    1 => format!("Deepen understanding: {base} through different perspectives"),
                    2 => format!("Apply and test knowledge: {base} in new scenarios"),
                    _ => format!("Review and reinforce: {base} with peer discussions"),
                });
            }
        }
    }

    while tasks.len() < target {
        if target - tasks.len() > 5 {
            tasks.push(format!(
                "Work on capstone project: comprehensive {subject} application with real-world impact"
            ));
        } else {
            tasks.push(format!(
                "Consolidate learning, create study materials, and prepare to teach {subject} to others"
            ));
        }
    }
    tasks
}
