// src/types/resume.rs
//! Resume record structures matching the JSON wire format

use serde::de::{Error as DeError, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ===== Resume Record =====

/// Top-level resume record. Immutable input to the pipeline; every field
/// defaults to empty so partially filled records never fail to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub education: Vec<String>,
    pub achievements: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: SkillsMap,
}

impl ResumeRecord {
    /// Full display name, e.g. "Ada Lovelace".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One position in the experience section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    /// When set, the rendered date range ends with the literal token
    /// "Present" regardless of `end_date`.
    pub is_present: bool,
    pub bullets: Vec<String>,
    pub skills: Vec<String>,
}

impl ExperienceEntry {
    /// End token for the rendered date range.
    pub fn end_token(&self) -> &str {
        if self.is_present {
            "Present"
        } else {
            &self.end_date
        }
    }
}

/// One entry in the projects section. `description` is carried for
/// collaborators (editors, tailoring services) but not rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub bullets: Vec<String>,
    pub tech_stack: Vec<String>,
}

// ===== Skills Map =====

/// Mapping from skill category to skill list, preserving the order in
/// which categories appear in the input document. Backed by a Vec so the
/// section renders categories exactly as the author arranged them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsMap(Vec<(String, Vec<String>)>);

impl SkillsMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Append a category, merging into an existing one of the same name.
    pub fn insert(&mut self, category: impl Into<String>, items: Vec<String>) {
        let category = category.into();
        match self.0.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => existing.extend(items),
            None => self.0.push((category, items)),
        }
    }

    /// Iterate categories in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }
}

impl<C: Into<String>> FromIterator<(C, Vec<String>)> for SkillsMap {
    fn from_iter<I: IntoIterator<Item = (C, Vec<String>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (category, items) in iter {
            map.insert(category, items);
        }
        map
    }
}

impl Serialize for SkillsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, items) in &self.0 {
            map.serialize_entry(category, items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SkillsMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = SkillsMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                // Stored records have been seen carrying skills as a bare
                // list; reject that shape with a pointed message instead
                // of coercing it.
                f.write_str("a map from skill category to a list of skills")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SkillsMap, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((category, items)) = access.next_entry::<String, Vec<String>>()? {
                    entries.push((category, items));
                }
                Ok(SkillsMap(entries))
            }

            fn visit_seq<A>(self, _access: A) -> Result<SkillsMap, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                Err(A::Error::custom(
                    "skills must be a map from category to a list of skills, not a list",
                ))
            }
        }

        deserializer.deserialize_map(SkillsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: ResumeRecord = serde_json::from_str(r#"{"firstName": "Ada"}"#).unwrap();
        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.last_name, "");
        assert!(record.education.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phoneNumber": "+44 1234",
            "experience": [{
                "role": "Engineer",
                "company": "Acme",
                "startDate": "Jan 2020",
                "endDate": "Mar 2021",
                "isPresent": false,
                "bullets": ["Built X"]
            }]
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.phone_number, "+44 1234");
        assert_eq!(record.experience[0].start_date, "Jan 2020");
        assert!(!record.experience[0].is_present);
    }

    #[test]
    fn test_end_token_prefers_present() {
        let entry = ExperienceEntry {
            end_date: "Mar 2021".into(),
            is_present: true,
            ..Default::default()
        };
        assert_eq!(entry.end_token(), "Present");

        let entry = ExperienceEntry {
            end_date: "Mar 2021".into(),
            is_present: false,
            ..Default::default()
        };
        assert_eq!(entry.end_token(), "Mar 2021");
    }

    #[test]
    fn test_skills_map_preserves_document_order() {
        let json = r#"{"skills": {"Tools": ["git"], "Programming": ["Rust"], "Cloud": ["AWS"]}}"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        let categories: Vec<&str> = record.skills.iter().map(|(name, _)| name).collect();
        assert_eq!(categories, vec!["Tools", "Programming", "Cloud"]);
    }

    #[test]
    fn test_skills_as_list_is_rejected() {
        let err = serde_json::from_str::<ResumeRecord>(r#"{"skills": ["Rust", "git"]}"#)
            .expect_err("list-shaped skills must not deserialize");
        assert!(err.to_string().contains("map"), "unexpected error: {err}");
    }

    #[test]
    fn test_skills_map_insert_merges_duplicates() {
        let mut map = SkillsMap::new();
        map.insert("Programming", vec!["Rust".into()]);
        map.insert("Programming", vec!["Python".into()]);
        assert_eq!(map.len(), 1);
        let (_, items) = map.iter().next().unwrap();
        assert_eq!(items, ["Rust".to_string(), "Python".to_string()]);
    }
}
