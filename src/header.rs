use crate::config::MotionConfig;

/// Sticky-header visibility driven by scroll direction.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollHeader {
    threshold: f64,
    activation: f64,
    last_y: f64,
    hidden: bool,
}

impl ScrollHeader {
    pub fn new(config: &MotionConfig, initial_y: f64) -> Self {
        Self {
            threshold: config.header_threshold,
            activation: config.header_activation,
            last_y: initial_y,
            hidden: false,
        }
    }

    /// Feeds a scroll offset and returns whether the header is now hidden.
    pub fn on_scroll(&mut self, current_y: f64) -> bool {
        if current_y > self.last_y + self.threshold && current_y > self.activation {
            self.hidden = true;
        } else if current_y < self.last_y - self.threshold {
            self.hidden = false;
        }
        self.last_y = current_y;
        self.hidden
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[cfg(test)]
    pub fn last_y(&self) -> f64 {
        self.last_y
    }
}
