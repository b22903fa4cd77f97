//! Response templates.
//!
//! Fixed user-facing strings, the deterministic Markdown blocks built from the
//! role dataset, and the prompts sent to the completion service.

use crate::brain::intent::Intent;
use crate::models::RoleEntry;

pub const SYSTEM_PROMPT: &str = "You are a friendly career advisor for students exploring tech careers. \
Give structured, practical and realistic advice. Use short Markdown sections and bullet points. \
Keep answers under 300 words unless asked for more. \
Do not invent salary figures or job-market statistics; point to reliable sources instead.";

pub const RESUME_CHECKLIST: &str = "### Resume checklist\n\n\
- Keep it to one page (two at most with significant experience).\n\
- Start with a short summary tailored to the role you are applying for.\n\
- List skills that match the job description, grouped by category.\n\
- Write bullet points as action + result, with numbers where possible (\"Reduced load time by 40%\").\n\
- Put projects with links (GitHub, live demo) near the top if you are a student.\n\
- Use a simple single-column layout so applicant tracking systems (ATS) can parse it.\n\
- Mirror keywords from the job posting without copying it.\n\
- Proofread, then export to PDF with a clear file name.";

pub const GENERAL_HELP: &str = "I can help you explore tech careers! Ask me about:\n\
- Skills for a role (e.g., *What skills are needed for Data Scientist?*)\n\
- Roadmaps (e.g., *Roadmap for Frontend Developer*)\n\
- Project ideas (e.g., *Project ideas for Cloud Engineer*)\n\
- Role explanations (e.g., *What is a DevOps Engineer?*)\n\
- Differences between roles (e.g., *Data Scientist vs Data Analyst*)\n\
- Resume tips";

pub const GREETING: &str = "Hi! I'm your career insights assistant. \
Ask me about skills, roadmaps, project ideas or resume tips for a tech role.";

pub const COMPARE_HEADING: &str = "### Role comparison";

pub const GENERAL_HEADING: &str = "### Career advice";

pub const EXPANSION_HEADING: &str = "#### In more detail";

pub const COMPARE_FALLBACK: &str = "Sorry, I couldn't put a comparison together right now. \
Try asking about each role separately, e.g. *Skills for Data Scientist* and *Skills for Data Analyst*.";

pub const COMPARE_NEEDS_TWO_ROLES: &str = "Which two roles should I compare? \
Try something like *Data Scientist vs Data Analyst* or *Compare Frontend Developer and Backend Developer*.";

/// Guidance returned when a role-content intent names no known role.
pub fn need_role(intent: Intent) -> &'static str {
    match intent {
        Intent::SkillsNeeded => "Which role are you interested in? \
Try *What skills are needed for Data Scientist?* or *Skills for Cloud Engineer*.",
        Intent::Roadmap => "Which role should the roadmap be for? \
Try *Roadmap for Frontend Developer* or *How to become a DevOps Engineer*.",
        Intent::Projects => "Which role do you want project ideas for? \
Try *Project ideas for Data Analyst* or *Portfolio projects for Backend Developer*.",
        _ => "Which role would you like to know about? \
Try *What is a Machine Learning Engineer?* or *Tell me about Cybersecurity Analyst*.",
    }
}

/// Follow-up line appended when an expansion was requested but is unavailable.
pub fn follow_up(role: &str) -> String {
    format!(
        "_Want more? Ask for the skills, roadmap or project ideas for **{}**, or compare it with another role._",
        role
    )
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn plain_lines(items: &[String]) -> String {
    items.join("\n")
}

/// Deterministic Markdown answer for a role-content intent.
pub fn role_block(intent: Intent, role: &str, entry: &RoleEntry) -> String {
    match intent {
        Intent::SkillsNeeded => {
            format!("### Key skills for {}\n\n{}", role, bullets(&entry.skills))
        }
        Intent::Roadmap => {
            format!("### Learning roadmap for {}\n\n{}", role, numbered(&entry.roadmap))
        }
        Intent::Projects => {
            format!("### Project ideas for {}\n\n{}", role, bullets(&entry.projects))
        }
        _ => format!(
            "### About {role}\n\n**{role}** is a tech role whose exact responsibilities vary by company.\n\n\
**Core skills:**\n{}",
            bullets(&entry.skills),
            role = role
        ),
    }
}

/// Prompt asking the model to elaborate on a deterministic answer.
pub fn expansion_prompt(intent: Intent, role: &str, entry: &RoleEntry) -> String {
    match intent {
        Intent::SkillsNeeded => format!(
            "Explain why each of the key skills matters for a {role} and how a student can practise it. \
Be concise and practical."
        ),
        Intent::Roadmap => format!(
            "Here is a learning roadmap for a {role}:\n{}\n\n\
Expand each step with what to learn, a rough time estimate and one free resource. Be concise.",
            plain_lines(&entry.roadmap)
        ),
        Intent::Projects => format!(
            "Here are project ideas for a {role}:\n{}\n\n\
For each project, describe the scope, the main technologies and what it demonstrates to employers. Be concise.",
            plain_lines(&entry.projects)
        ),
        _ => format!(
            "Explain what a {role} does day to day, who they work with, and how the role typically grows over a career. \
Be concise."
        ),
    }
}

/// Prompt for a side-by-side comparison of two roles.
pub fn compare_prompt(first: &str, second: &str) -> String {
    format!(
        "Compare the roles \"{first}\" and \"{second}\" for a student choosing a career.\n\
Structure the answer as:\n\
1. One-line summary of each role\n\
2. Key skill differences\n\
3. Typical tools\n\
4. Day-to-day work\n\
5. Who each role suits best\n\
Keep it concise."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> RoleEntry {
        RoleEntry {
            skills: vec!["SQL".into(), "Python".into()],
            roadmap: vec!["Learn SQL".into(), "Learn Python".into()],
            projects: vec!["Dashboard".into()],
        }
    }

    #[test]
    fn roadmap_block_is_numbered() {
        let block = role_block(Intent::Roadmap, "Data Analyst", &entry());
        assert_eq!(
            block,
            "### Learning roadmap for Data Analyst\n\n1. Learn SQL\n2. Learn Python"
        );
    }

    #[test]
    fn role_info_block_lists_skills() {
        let block = role_block(Intent::RoleInfo, "Data Analyst", &entry());
        assert!(block.starts_with("### About Data Analyst"));
        assert!(block.ends_with("- SQL\n- Python"));
    }

    #[test]
    fn list_prompts_embed_plain_lines() {
        let prompt = expansion_prompt(Intent::Roadmap, "Data Analyst", &entry());
        assert!(prompt.contains("Data Analyst:\nLearn SQL\nLearn Python\n"));

        let prompt = expansion_prompt(Intent::SkillsNeeded, "Data Analyst", &entry());
        assert!(!prompt.contains("Learn SQL"));
    }
}
