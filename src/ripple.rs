use crate::geometry::{PointerSample, Rect};

/// Every press bumps a generation counter. The reset timer scheduled by a
/// press carries that generation, so a stale timer cannot clear a newer press.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RippleState {
    origin: (f64, f64),
    pressed: bool,
    generation: u64,
}

impl RippleState {
    pub fn press(&mut self, button: Rect, pointer: PointerSample) -> u64 {
        let (fx, fy) = button.fraction_of(pointer);
        self.origin = (fx * 100.0, fy * 100.0);
        self.pressed = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn release(&mut self, token: u64) -> bool {
        if token != self.generation || !self.pressed {
            return false;
        }
        self.pressed = false;
        true
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn style(&self) -> String {
        let (x, y) = self.origin;
        format!("--x: {x:.2}%; --y: {y:.2}%;")
    }
}
