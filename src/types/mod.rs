// src/types/mod.rs
pub mod resume;

pub use resume::{ExperienceEntry, ProjectEntry, ResumeRecord, SkillsMap};
