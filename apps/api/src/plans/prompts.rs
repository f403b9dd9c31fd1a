// Prompt template for learning-plan generation.

use crate::llm_client::prompts::fill_template;
use crate::plans::duration::PlanTotals;
use crate::plans::models::PlanInput;

/// Learning plan prompt template.
/// Replace: {goal}, {duration}, {total_days}, {total_weeks}, {total_months}
pub const LEARNING_PLAN_PROMPT_TEMPLATE: &str = r#"You are an expert learning plan generator. Create a detailed, progressive, and practical learning plan for the given goal and duration.

Goal: {goal}
Duration: {duration}
Total Days: {total_days}
Total Weeks: {total_weeks}
Total Months: {total_months}

IMPORTANT REQUIREMENTS:
1. Create EXACTLY {total_days} daily tasks, {total_weeks} weekly tasks, and {total_months} monthly tasks
2. Make each task specific, actionable, and progressive
3. Avoid generic phrases like "learn fundamentals" or "study basics"
4. Include specific projects, exercises, and practical applications
5. Each task should build upon previous tasks
6. Use concrete examples and real-world applications

Return the response in this exact JSON format:
{
    "goalTitle": "{goal}",
    "totalDays": {total_days},
    "monthlyTasks": [
        {
            "label": "Month 1",
            "tasks": ["Specific task 1", "Specific task 2"],
            "status": false
        }
    ],
    "weeklyTasks": [
        {
            "label": "Week 1",
            "tasks": ["Specific weekly task 1", "Specific weekly task 2"],
            "status": false
        }
    ],
    "dailyTasks": [
        {
            "label": "Day 1",
            "tasks": ["One specific, actionable daily task"],
            "status": false
        }
    ]
}"#;

pub fn format_plan_prompt(input: &PlanInput, totals: &PlanTotals) -> String {
    let (days, weeks, months) = (
        totals.days.to_string(),
        totals.weeks.to_string(),
        totals.months.to_string(),
    );
    fill_template(
        LEARNING_PLAN_PROMPT_TEMPLATE,
        &[
            ("goal", input.goal.as_str()),
            ("duration", input.duration.as_str()),
            ("total_days", days.as_str()),
            ("total_weeks", weeks.as_str()),
            ("total_months", months.as_str()),
        ],
    )
}
