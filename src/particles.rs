use fastrand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub left_pct: f64,
    pub bottom: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            size: 4.0 + rng.f64() * 6.0,
            left_pct: rng.f64() * 100.0,
            bottom: rng.f64() * 60.0,
            duration_s: 8.0 + rng.f64() * 6.0,
            delay_s: -rng.f64() * 10.0,
            opacity: 0.2 + rng.f64() * 0.5,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {left:.2}%; bottom: {bottom:.2}px; \
             animation-duration: {duration:.2}s; animation-delay: {delay:.2}s; opacity: {opacity:.2};",
            size = self.size,
            left = self.left_pct,
            bottom = self.bottom,
            duration = self.duration_s,
            delay = self.delay_s,
            opacity = self.opacity,
        )
    }
}

pub fn generate(rng: &mut Rng, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
