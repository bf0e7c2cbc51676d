pub const DEFAULT_LABEL: &str = "Send intro";
pub const SENT_LABEL: &str = "Sent (demo)";
const PENDING_OPACITY: f64 = 0.9;
const IDLE_OPACITY: f64 = 1.0;

/// The demo contact button. Submitting never leaves the page.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactButton {
    Idle { label: String },
    Pending { original: String },
}

impl Default for ContactButton {
    fn default() -> Self {
        Self::with_label(None)
    }
}

impl ContactButton {
    pub fn with_label(label: Option<&str>) -> Self {
        let label = label
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_LABEL);
        Self::Idle {
            label: label.to_string(),
        }
    }

    /// Moves to the pending state. Returns false while already pending.
    pub fn submit(&mut self) -> bool {
        match self {
            Self::Idle { label } => {
                let original = std::mem::take(label);
                *self = Self::Pending { original };
                true
            }
            Self::Pending { .. } => false,
        }
    }

    /// Restores the original label after the simulated send.
    pub fn restore(&mut self) {
        if let Self::Pending { original } = self {
            let label = std::mem::take(original);
            *self = Self::Idle { label };
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Idle { label } => label,
            Self::Pending { .. } => SENT_LABEL,
        }
    }

    pub fn disabled(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn opacity(&self) -> f64 {
        if self.disabled() {
            PENDING_OPACITY
        } else {
            IDLE_OPACITY
        }
    }

    pub fn style(&self) -> String {
        format!("opacity: {};", self.opacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_shows_sent_and_disables() {
        let mut button = ContactButton::with_label(Some("Say hello"));

        assert!(button.submit());
        assert!(button.disabled());
        assert_eq!(button.label(), "Sent (demo)");
        assert_eq!(button.opacity(), 0.9);
    }

    #[test]
    fn restore_brings_back_exact_label() {
        let mut button = ContactButton::with_label(Some("Say hello"));
        button.submit();

        button.restore();

        assert!(!button.disabled());
        assert_eq!(button.label(), "Say hello");
        assert_eq!(button.style(), "opacity: 1;");
    }

    #[test]
    fn resubmitting_while_pending_is_rejected() {
        let mut button = ContactButton::default();
        button.submit();

        assert!(!button.submit());
        button.restore();
        assert_eq!(button.label(), DEFAULT_LABEL);
    }

    #[test]
    fn blank_label_uses_default() {
        assert_eq!(ContactButton::with_label(Some("  ")).label(), "Send intro");
        assert_eq!(ContactButton::with_label(None).label(), "Send intro");
        assert_eq!(ContactButton::default(), ContactButton::with_label(None));
    }
}
