use std::collections::HashSet;

use serde::Deserialize;

use crate::error::SiteError;

const BUNDLED_CONTENT: &str = include_str!("../config/site-content.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum LoopVariant {
    #[serde(rename = "loop-1")]
    Orbit,
    #[serde(rename = "loop-2")]
    Bars,
    #[serde(rename = "loop-3")]
    Stack,
    #[serde(rename = "loop-4")]
    Swipe,
}

impl LoopVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Orbit => "loop-1",
            Self::Bars => "loop-2",
            Self::Stack => "loop-3",
            Self::Swipe => "loop-4",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "loop-1" => Some(Self::Orbit),
            "loop-2" => Some(Self::Bars),
            "loop-3" => Some(Self::Stack),
            "loop-4" => Some(Self::Swipe),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub details: Vec<String>,
    pub loop_variant: LoopVariant,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    #[serde(default)]
    pub level: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

impl SiteContent {
    pub fn bundled() -> Result<Self, SiteError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let content: Self = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for project in &content.projects {
            if project.id == 0 {
                return Err(SiteError::InvalidProjectId(project.id));
            }
            if !seen.insert(project.id) {
                return Err(SiteError::DuplicateProjectId(project.id));
            }
        }

        Ok(content)
    }

    /// Empty content, used when the bundled document fails to load.
    pub fn empty() -> Self {
        Self {
            projects: Vec::new(),
            skills: Vec::new(),
        }
    }

    pub fn project(&self, id: u32) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.id == id)
    }
}

/// Parses a card's `data-project-id` attribute value.
pub fn parse_project_id(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads_four_projects() {
        let content = SiteContent::bundled().expect("bundled content is valid");

        assert_eq!(content.projects.len(), 4);
        let first = content.project(1).expect("project 1 exists");
        assert_eq!(first.title, "Immersive Product Launch Microsite");
        assert_eq!(first.details.len(), 3);
        assert_eq!(first.loop_variant, LoopVariant::Orbit);
        assert!(content.project(99).is_none());
    }

    #[test]
    fn skill_without_level_deserializes_as_none() {
        let content = SiteContent::bundled().expect("bundled content is valid");

        assert!(content.skills.iter().any(|skill| skill.level.is_none()));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"{
            "projects": [
                { "id": 2, "title": "a", "subtitle": "b", "details": [], "loopVariant": "loop-1" },
                { "id": 2, "title": "c", "subtitle": "d", "details": [], "loopVariant": "loop-2" }
            ]
        }"#;

        let result = SiteContent::from_json(raw);
        assert!(matches!(result, Err(SiteError::DuplicateProjectId(2))));
    }

    #[test]
    fn zero_id_and_unknown_variant_are_rejected() {
        let zero = r#"{ "projects": [
            { "id": 0, "title": "a", "subtitle": "b", "details": [], "loopVariant": "loop-1" }
        ] }"#;
        assert!(matches!(
            SiteContent::from_json(zero),
            Err(SiteError::InvalidProjectId(0))
        ));

        let bad_variant = r#"{ "projects": [
            { "id": 1, "title": "a", "subtitle": "b", "details": [], "loopVariant": "loop-9" }
        ] }"#;
        assert!(matches!(
            SiteContent::from_json(bad_variant),
            Err(SiteError::Content(_))
        ));
    }

    #[test]
    fn project_id_parsing_rejects_garbage() {
        assert_eq!(parse_project_id(" 3 "), Some(3));
        assert_eq!(parse_project_id("0"), None);
        assert_eq!(parse_project_id("abc"), None);
        assert_eq!(LoopVariant::from_str("loop-4"), Some(LoopVariant::Swipe));
    }
}
