use crate::content::SkillRecord;

/// Target fill of a skill bar. Missing or non-finite levels fill nothing.
pub fn fill_percent(level: Option<f64>) -> f64 {
    level
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

/// Fire-once latch for the skill bar animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SkillBars {
    fired: bool,
}

impl SkillBars {
    /// Returns true the first time only.
    pub fn trigger(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

pub fn bar_style(skill: &SkillRecord, animated: bool) -> String {
    let width = if animated {
        fill_percent(skill.level)
    } else {
        0.0
    };
    format!("width: {width}%;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: Option<f64>) -> SkillRecord {
        SkillRecord {
            name: "Motion design".to_string(),
            level,
        }
    }

    #[test]
    fn missing_level_defaults_to_zero() {
        assert_eq!(fill_percent(None), 0.0);
        assert_eq!(fill_percent(Some(f64::NAN)), 0.0);
        assert_eq!(fill_percent(Some(140.0)), 100.0);
        assert_eq!(fill_percent(Some(-3.0)), 0.0);
    }

    #[test]
    fn animation_fires_once() {
        let mut bars = SkillBars::default();

        assert!(bars.trigger());
        assert!(!bars.trigger());
        assert!(bars.has_fired());
    }

    #[test]
    fn width_applies_only_once_animated() {
        assert_eq!(bar_style(&skill(Some(88.0)), false), "width: 0%;");
        assert_eq!(bar_style(&skill(Some(88.0)), true), "width: 88%;");
        assert_eq!(bar_style(&skill(None), true), "width: 0%;");
    }
}
