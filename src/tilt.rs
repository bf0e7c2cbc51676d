use crate::config::MotionConfig;
use crate::geometry::{PointerSample, Rect};

const LIFT_PX: f64 = 6.0;

/// Card rotation and preview-layer shift for one pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub shift_x: f64,
    pub shift_y: f64,
}

impl Tilt {
    /// Normalizes the pointer to [-1, 1] around the card center and derives
    /// the rotation and opposite parallax shift.
    pub fn compute(config: &MotionConfig, card: Rect, pointer: PointerSample) -> Self {
        let (fx, fy) = card.fraction_of(pointer);
        let pct_x = (fx - 0.5) * 2.0;
        let pct_y = (fy - 0.5) * 2.0;

        Self {
            rotate_x: -(pct_y * config.max_tilt_deg),
            rotate_y: pct_x * config.max_tilt_deg,
            shift_x: -pct_x * config.max_shift_px,
            shift_y: -pct_y * config.max_shift_px,
        }
    }

    pub fn card_transform(&self) -> String {
        format!(
            "transform: translateY(-{LIFT_PX}px) rotateX({:.2}deg) rotateY({:.2}deg);",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn preview_transform(&self) -> String {
        format!(
            "transform: translate3d({:.2}px, {:.2}px, 0);",
            self.shift_x, self.shift_y
        )
    }
}

/// Tilt state of one card: `None` is the neutral, untransformed pose.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTilt {
    active: Option<Tilt>,
}

impl CardTilt {
    pub fn track(&mut self, config: &MotionConfig, card: Rect, pointer: PointerSample) {
        self.active = Some(Tilt::compute(config, card, pointer));
    }

    pub fn reset(&mut self) {
        self.active = None;
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<Tilt> {
        self.active
    }

    pub fn card_style(&self) -> String {
        self.active.map(|tilt| tilt.card_transform()).unwrap_or_default()
    }

    pub fn preview_style(&self) -> String {
        self.active
            .map(|tilt| tilt.preview_transform())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Rect {
        Rect::new(100.0, 200.0, 300.0, 400.0)
    }

    #[test]
    fn center_is_flat() {
        let tilt = Tilt::compute(&MotionConfig::default(), card(), PointerSample::new(250.0, 400.0));

        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!(tilt.shift_x, 0.0);
        assert_eq!(tilt.shift_y, 0.0);
    }

    #[test]
    fn corners_reach_max_tilt_and_shift() {
        let config = MotionConfig::default();

        let bottom_right = Tilt::compute(&config, card(), PointerSample::new(400.0, 600.0));
        assert_eq!(bottom_right.rotate_x, -10.0);
        assert_eq!(bottom_right.rotate_y, 10.0);
        assert_eq!(bottom_right.shift_x, -14.0);
        assert_eq!(bottom_right.shift_y, -14.0);

        let top_left = Tilt::compute(&config, card(), PointerSample::new(100.0, 200.0));
        assert_eq!(top_left.rotate_x, 10.0);
        assert_eq!(top_left.rotate_y, -10.0);
        assert_eq!(top_left.shift_x, 14.0);
        assert_eq!(top_left.shift_y, 14.0);
    }

    #[test]
    fn reset_returns_to_neutral_styles() {
        let mut tilt = CardTilt::default();
        tilt.track(&MotionConfig::default(), card(), PointerSample::new(175.0, 300.0));

        assert!(tilt.card_style().starts_with("transform: translateY(-6px) rotateX(5.00deg) rotateY(-5.00deg)"));
        assert_eq!(tilt.preview_style(), "transform: translate3d(7.00px, 7.00px, 0);");

        tilt.reset();
        assert_eq!(tilt.active(), None);
        assert!(tilt.card_style().is_empty());
        assert!(tilt.preview_style().is_empty());
    }
}
