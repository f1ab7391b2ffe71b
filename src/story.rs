// src/story.rs
//! Story builder: resume record -> ordered content block sequence
//!
//! The block sequence is the hand-off point between resume semantics and
//! layout. The renderer only ever sees headings, paragraphs, bullet lists
//! and spacers; it knows nothing about what an "experience entry" is.

use crate::types::ResumeRecord;

/// Heading weight within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Document title (the person's name).
    Title,
    /// Section heading ("Education", "Experience", ...).
    Section,
}

/// Renderer-agnostic unit of document content. Paragraph and bullet text
/// use the inline grammar from [`crate::markup`].
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Heading { level: HeadingLevel, text: String },
    Paragraph { markup: String },
    BulletList { items: Vec<String> },
    Spacer { inches: f64 },
}

impl ContentBlock {
    pub fn title(text: impl Into<String>) -> Self {
        Self::Heading {
            level: HeadingLevel::Title,
            text: text.into(),
        }
    }

    pub fn section(text: impl Into<String>) -> Self {
        Self::Heading {
            level: HeadingLevel::Section,
            text: text.into(),
        }
    }

    pub fn paragraph(markup: impl Into<String>) -> Self {
        Self::Paragraph {
            markup: markup.into(),
        }
    }

    pub fn bullets(items: Vec<String>) -> Self {
        Self::BulletList { items }
    }

    pub fn spacer(inches: f64) -> Self {
        Self::Spacer { inches }
    }
}

/// Gap after the header, education and each experience/project entry.
const ENTRY_GAP_IN: f64 = 0.05;
/// Wider gap after the achievements list.
const SECTION_GAP_IN: f64 = 0.1;

/// Build the full block sequence for one resume record.
///
/// Pure and deterministic: identical input yields a structurally identical
/// sequence, and the function performs no I/O. Section order is fixed:
/// Header, Education, Achievements, Experience, Projects, Skills. Empty
/// sections are omitted entirely, except Education whose heading is always
/// emitted (kept for compatibility with existing rendered resumes).
pub fn build_story(resume: &ResumeRecord) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    push_header(resume, &mut blocks);
    push_education(resume, &mut blocks);
    push_achievements(resume, &mut blocks);
    push_experience(resume, &mut blocks);
    push_projects(resume, &mut blocks);
    push_skills(resume, &mut blocks);

    blocks
}

fn push_header(resume: &ResumeRecord, blocks: &mut Vec<ContentBlock>) {
    blocks.push(ContentBlock::title(resume.full_name()));

    let contact = format!(
        "{} | {} | {}<br/><a href=\"{}\">LinkedIn</a> | <a href=\"{}\">GitHub</a>",
        resume.email, resume.phone_number, resume.location, resume.linkedin, resume.github
    );
    blocks.push(ContentBlock::paragraph(contact));
    blocks.push(ContentBlock::spacer(ENTRY_GAP_IN));
}

fn push_education(resume: &ResumeRecord, blocks: &mut Vec<ContentBlock>) {
    // Heading and trailing gap are unconditional, unlike every other
    // section; existing rendered resumes depend on the heading showing
    // even when no entries exist.
    blocks.push(ContentBlock::section("Education"));
    for entry in &resume.education {
        blocks.push(ContentBlock::paragraph(format!("- {entry}")));
    }
    blocks.push(ContentBlock::spacer(ENTRY_GAP_IN));
}

fn push_achievements(resume: &ResumeRecord, blocks: &mut Vec<ContentBlock>) {
    if resume.achievements.is_empty() {
        return;
    }

    blocks.push(ContentBlock::section("Achievements"));
    blocks.push(ContentBlock::bullets(resume.achievements.clone()));
    blocks.push(ContentBlock::spacer(SECTION_GAP_IN));
}

fn push_experience(resume: &ResumeRecord, blocks: &mut Vec<ContentBlock>) {
    if resume.experience.is_empty() {
        return;
    }

    blocks.push(ContentBlock::section("Experience"));
    for entry in &resume.experience {
        blocks.push(ContentBlock::paragraph(format!(
            "<b>{}</b>, {} ({} - {})",
            entry.role,
            entry.company,
            entry.start_date,
            entry.end_token()
        )));
        if !entry.bullets.is_empty() {
            blocks.push(ContentBlock::bullets(entry.bullets.clone()));
        }
        if !entry.skills.is_empty() {
            blocks.push(ContentBlock::paragraph(format!(
                "<i>Skills: {}</i>",
                entry.skills.join(", ")
            )));
        }
        blocks.push(ContentBlock::spacer(ENTRY_GAP_IN));
    }
}

fn push_projects(resume: &ResumeRecord, blocks: &mut Vec<ContentBlock>) {
    if resume.projects.is_empty() {
        return;
    }

    blocks.push(ContentBlock::section("Projects"));
    for entry in &resume.projects {
        blocks.push(ContentBlock::paragraph(format!("<b>{}</b>", entry.title)));
        if !entry.bullets.is_empty() {
            blocks.push(ContentBlock::bullets(entry.bullets.clone()));
        }
        if !entry.tech_stack.is_empty() {
            blocks.push(ContentBlock::paragraph(format!(
                "<i>Tech Stack: {}</i>",
                entry.tech_stack.join(", ")
            )));
        }
        blocks.push(ContentBlock::spacer(ENTRY_GAP_IN));
    }
}

fn push_skills(resume: &ResumeRecord, blocks: &mut Vec<ContentBlock>) {
    if resume.skills.is_empty() {
        return;
    }

    blocks.push(ContentBlock::section("Skills"));
    for (category, items) in resume.skills.iter() {
        blocks.push(ContentBlock::paragraph(format!(
            "<b>{category}:</b> {}",
            items.join(", ")
        )));
    }
    blocks.push(ContentBlock::spacer(ENTRY_GAP_IN));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExperienceEntry, ProjectEntry, SkillsMap};

    fn heading_texts(blocks: &[ContentBlock]) -> Vec<&str> {
        blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Heading { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn sample_record() -> ResumeRecord {
        ResumeRecord {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.org".into(),
            phone_number: "+44 1234".into(),
            location: "London".into(),
            linkedin: "https://linkedin.com/in/ada".into(),
            github: "https://github.com/ada".into(),
            education: vec!["BSc Mathematics, University of London".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let blocks = build_story(&sample_record());

        assert_eq!(heading_texts(&blocks), vec!["Ada Lovelace", "Education"]);
        let paragraphs: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Paragraph { markup } => Some(markup.as_str()),
                _ => None,
            })
            .collect();
        // Contact line plus exactly one education paragraph.
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1], "- BSc Mathematics, University of London");
    }

    #[test]
    fn test_education_heading_survives_empty_list() {
        let mut record = sample_record();
        record.education.clear();

        let blocks = build_story(&record);
        assert!(heading_texts(&blocks).contains(&"Education"));
        assert!(!blocks
            .iter()
            .any(|b| matches!(b, ContentBlock::Paragraph { markup } if markup.starts_with("- "))));
    }

    #[test]
    fn test_is_present_overrides_end_date() {
        let mut record = sample_record();
        record.experience.push(ExperienceEntry {
            role: "Engineer".into(),
            company: "Acme".into(),
            start_date: "Jan 2020".into(),
            end_date: "should not appear".into(),
            is_present: true,
            ..Default::default()
        });

        let blocks = build_story(&record);
        assert!(blocks.iter().any(|b| matches!(
            b,
            ContentBlock::Paragraph { markup }
                if markup == "<b>Engineer</b>, Acme (Jan 2020 - Present)"
        )));
    }

    #[test]
    fn test_build_story_is_idempotent() {
        let mut record = sample_record();
        record.achievements.push("Won a prize".into());
        record.projects.push(ProjectEntry {
            title: "Analytical Engine Notes".into(),
            bullets: vec!["Published note G".into()],
            tech_stack: vec!["Pen".into(), "Paper".into()],
            ..Default::default()
        });

        assert_eq!(build_story(&record), build_story(&record));
    }

    #[test]
    fn test_skills_categories_keep_input_order() {
        let mut record = sample_record();
        record.skills = SkillsMap::from_iter([
            ("Tools", vec!["git".to_string()]),
            ("Programming", vec!["Rust".to_string()]),
            ("Technologies", vec!["Linux".to_string()]),
        ]);

        let blocks = build_story(&record);
        let skill_lines: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Paragraph { markup } if markup.starts_with("<b>") => {
                    Some(markup.as_str())
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            skill_lines,
            vec![
                "<b>Tools:</b> git",
                "<b>Programming:</b> Rust",
                "<b>Technologies:</b> Linux",
            ]
        );
    }

    #[test]
    fn test_all_empty_record_still_builds() {
        let blocks = build_story(&ResumeRecord::default());

        // Header + unconditional Education heading, nothing else.
        assert_eq!(heading_texts(&blocks), vec![" ", "Education"]);
        assert!(!blocks.is_empty());
    }

    #[test]
    fn test_worked_example_sequence() {
        let record = ResumeRecord {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            experience: vec![ExperienceEntry {
                role: "Engineer".into(),
                company: "Acme".into(),
                start_date: "Jan 2020".into(),
                end_date: String::new(),
                is_present: true,
                bullets: vec!["Built X".into()],
                skills: vec!["Python".into()],
            }],
            ..Default::default()
        };

        let blocks = build_story(&record);

        assert_eq!(blocks[0], ContentBlock::title("Ada Lovelace"));
        assert!(blocks.contains(&ContentBlock::section("Education")));
        assert!(blocks.contains(&ContentBlock::section("Experience")));
        assert!(blocks.contains(&ContentBlock::paragraph(
            "<b>Engineer</b>, Acme (Jan 2020 - Present)"
        )));
        assert!(blocks.contains(&ContentBlock::bullets(vec!["Built X".into()])));
        assert!(blocks.contains(&ContentBlock::paragraph("<i>Skills: Python</i>")));

        let headings = heading_texts(&blocks);
        assert!(!headings.contains(&"Achievements"));
        assert!(!headings.contains(&"Projects"));
        assert!(!headings.contains(&"Skills"));
    }

    #[test]
    fn test_experience_entry_without_bullets_or_skills() {
        let mut record = sample_record();
        record.experience.push(ExperienceEntry {
            role: "Advisor".into(),
            company: "Babbage & Co".into(),
            start_date: "1842".into(),
            end_date: "1843".into(),
            ..Default::default()
        });

        let blocks = build_story(&record);
        assert!(!blocks.iter().any(|b| matches!(b, ContentBlock::BulletList { .. })));
        assert!(!blocks
            .iter()
            .any(|b| matches!(b, ContentBlock::Paragraph { markup } if markup.contains("Skills:"))));
    }
}
