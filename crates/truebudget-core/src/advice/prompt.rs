//! Prompt text for the advice service

use super::payload::AdvicePayload;
use crate::error::Result;

/// System instructions: explain the numbers, never invent them
pub const SYSTEM_PROMPT: &str = "You are a helpful budgeting coach. Use ONLY the numbers provided by the app. \
Do not invent income/expense values. \
Give short, actionable advice. If something is missing, ask a clarifying question.";

/// Render the user message embedding the payload as pretty JSON
pub fn render_user(payload: &AdvicePayload) -> Result<String> {
    let json = payload.to_pretty_json()?;
    Ok(format!(
        "Create a monthly budgeting explanation and tips using this JSON data.\n\n\
         {}\n\n\
         Return:\n\
         1) A short summary of the situation\n\
         2) 3-6 bullet tips\n\
         3) A simple next-steps checklist (3-5 items)\n\
         Keep it friendly and not judgmental.",
        json
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetConfig;
    use crate::plan::BudgetPlan;

    #[test]
    fn test_render_user_embeds_payload() {
        let plan = BudgetPlan::compute(&BudgetConfig::default(), &[], &[], None, None).unwrap();
        let payload = AdvicePayload::from_plan(&plan, Some("Lisbon"));
        let prompt = render_user(&payload).unwrap();

        assert!(prompt.starts_with("Create a monthly budgeting explanation"));
        assert!(prompt.contains("\"location\": \"Lisbon\""));
        assert!(prompt.contains("\"monthly_income\": 0.0"));
        assert!(prompt.contains("3-6 bullet tips"));
    }

    #[test]
    fn test_system_prompt_forbids_invented_numbers() {
        assert!(SYSTEM_PROMPT.contains("Use ONLY the numbers provided"));
        assert!(SYSTEM_PROMPT.contains("Do not invent"));
    }
}
