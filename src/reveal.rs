use std::collections::HashMap;

pub const REVEAL_CLASS: &str = "reveal-on-scroll";
pub const REVEALED_CLASS: &str = "in-view";
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealKind {
    SectionHeader,
    ProjectCard,
    AboutTimeline,
    AboutSkills,
    ContactCard,
    ContactMeta,
}

impl RevealKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::SectionHeader => "section-header",
            Self::ProjectCard => "project-card",
            Self::AboutTimeline => "about-timeline",
            Self::AboutSkills => "about-skills",
            Self::ContactCard => "contact-card",
            Self::ContactMeta => "contact-meta",
        }
    }

    pub fn from_class_list(classes: &str) -> Option<Self> {
        const ALL: [RevealKind; 6] = [
            RevealKind::SectionHeader,
            RevealKind::ProjectCard,
            RevealKind::AboutTimeline,
            RevealKind::AboutSkills,
            RevealKind::ContactCard,
            RevealKind::ContactMeta,
        ];

        classes
            .split_whitespace()
            .find_map(|class| ALL.into_iter().find(|kind| kind.class_name() == class))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealEffect {
    pub key: String,
    pub kind: RevealKind,
    pub animate_skills: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RevealPhase {
    Watching,
    Revealed,
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    targets: HashMap<String, (RevealKind, RevealPhase)>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: impl Into<String>, kind: RevealKind) -> bool {
        let key = key.into();
        if self.targets.contains_key(&key) {
            return false;
        }
        self.targets.insert(key, (kind, RevealPhase::Watching));
        true
    }

    /// Handles one visibility notification. Returns the effect to apply
    /// when the element reveals for the first time; the caller must then
    /// stop observing it.
    pub fn observe(&mut self, key: &str, intersecting: bool) -> Option<RevealEffect> {
        if !intersecting {
            return None;
        }

        let (kind, phase) = self.targets.get_mut(key)?;
        if *phase == RevealPhase::Revealed {
            return None;
        }
        *phase = RevealPhase::Revealed;

        Some(RevealEffect {
            key: key.to_string(),
            kind: *kind,
            animate_skills: *kind == RevealKind::AboutSkills,
        })
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        matches!(self.targets.get(key), Some((_, RevealPhase::Revealed)))
    }

    #[cfg(test)]
    pub fn watching_count(&self) -> usize {
        self.targets
            .values()
            .filter(|(_, phase)| *phase == RevealPhase::Watching)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> RevealTracker {
        let mut tracker = RevealTracker::new();
        tracker.register("projects-header", RevealKind::SectionHeader);
        tracker.register("skills", RevealKind::AboutSkills);
        tracker.register("card-1", RevealKind::ProjectCard);
        tracker
    }

    #[test]
    fn entering_reveals_exactly_once() {
        let mut tracker = tracker();

        let effect = tracker
            .observe("card-1", true)
            .expect("first intersection reveals");
        assert_eq!(effect.kind, RevealKind::ProjectCard);
        assert!(!effect.animate_skills);
        assert!(tracker.is_revealed("card-1"));

        assert_eq!(tracker.observe("card-1", true), None);
        assert_eq!(tracker.observe("card-1", false), None);
        assert!(tracker.is_revealed("card-1"));
    }

    #[test]
    fn non_intersecting_entries_do_nothing() {
        let mut tracker = tracker();

        assert_eq!(tracker.observe("projects-header", false), None);
        assert!(!tracker.is_revealed("projects-header"));
        assert_eq!(tracker.watching_count(), 3);
    }

    #[test]
    fn skills_panel_triggers_skill_animation() {
        let mut tracker = tracker();

        let effect = tracker.observe("skills", true).expect("skills reveal");
        assert!(effect.animate_skills);
        assert_eq!(tracker.watching_count(), 2);
    }

    #[test]
    fn unknown_keys_and_duplicates_are_ignored() {
        let mut tracker = tracker();

        assert_eq!(tracker.observe("ghost", true), None);
        assert!(!tracker.register("skills", RevealKind::ContactCard));
    }

    #[test]
    fn kind_is_read_from_class_list() {
        assert_eq!(
            RevealKind::from_class_list("about-skills reveal-on-scroll"),
            Some(RevealKind::AboutSkills)
        );
        assert_eq!(RevealKind::from_class_list("hero"), None);
    }
}
