#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Degenerate rectangles report the center.
    pub fn fraction_of(&self, point: PointerSample) -> (f64, f64) {
        let fx = if self.width > 0.0 {
            (point.x - self.left) / self.width
        } else {
            0.5
        };
        let fy = if self.height > 0.0 {
            (point.y - self.top) / self.height
        } else {
            0.5
        };
        (fx, fy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_sources(client: Option<(f64, f64)>, first_touch: Option<(f64, f64)>) -> Option<Self> {
        client
            .or(first_touch)
            .map(|(x, y)| Self::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_are_relative_to_rect() {
        let rect = Rect::new(100.0, 50.0, 200.0, 100.0);

        assert_eq!(rect.fraction_of(PointerSample::new(150.0, 75.0)), (0.25, 0.25));
        assert_eq!(rect.fraction_of(PointerSample::new(300.0, 150.0)), (1.0, 1.0));
    }

    #[test]
    fn degenerate_rect_reports_center() {
        let rect = Rect::new(10.0, 10.0, 0.0, 0.0);

        assert_eq!(rect.fraction_of(PointerSample::new(999.0, -4.0)), (0.5, 0.5));
    }

    #[test]
    fn touch_is_used_only_without_client_coordinates() {
        assert_eq!(
            PointerSample::from_sources(Some((1.0, 2.0)), Some((3.0, 4.0))),
            Some(PointerSample::new(1.0, 2.0))
        );
        assert_eq!(
            PointerSample::from_sources(None, Some((3.0, 4.0))),
            Some(PointerSample::new(3.0, 4.0))
        );
        assert_eq!(PointerSample::from_sources(None, None), None);
    }
}
