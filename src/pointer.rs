use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerFollower {
    factor: f64,
    offset: f64,
    target: (f64, f64),
    position: (f64, f64),
}

impl PointerFollower {
    pub fn new(factor: f64, offset: f64) -> Self {
        Self {
            factor: factor.clamp(0.0, 1.0),
            offset,
            target: (0.0, 0.0),
            position: (0.0, 0.0),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.easing_factor, config.cursor_offset)
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = (x, y);
    }

    pub fn target(&self) -> (f64, f64) {
        self.target
    }

    pub fn step(&mut self) -> (f64, f64) {
        let (x, y) = self.position;
        let (tx, ty) = self.target;
        self.position = (x + (tx - x) * self.factor, y + (ty - y) * self.factor);
        self.position
    }

    pub fn cursor_transform(&self) -> String {
        let (x, y) = self.position;
        translate(x - self.offset, y - self.offset)
    }
}

/// Zero at the centre, `±range / 2` at the edges.
pub fn parallax_offset(pointer: (f64, f64), viewport: (f64, f64), range: (f64, f64)) -> (f64, f64) {
    let axis = |value: f64, extent: f64, span: f64| {
        if extent <= 0.0 {
            return 0.0;
        }
        (value / extent - 0.5) * span
    };

    (
        axis(pointer.0, viewport.0, range.0),
        axis(pointer.1, viewport.1, range.1),
    )
}

pub fn translate(x: f64, y: f64) -> String {
    format!("translate3d({x:.2}px, {y:.2}px, 0)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_step_moves_by_the_factor() {
        let mut follower = PointerFollower::new(0.16, 8.0);
        follower.set_target(100.0, 50.0);

        let (x, y) = follower.step();

        assert!((x - 16.0).abs() < 1e-9);
        assert!((y - 8.0).abs() < 1e-9);
        assert_eq!(follower.cursor_transform(), "translate3d(8.00px, 0.00px, 0)");
    }

    #[test]
    fn distance_shrinks_geometrically_and_converges() {
        let mut follower = PointerFollower::from_config(&SiteConfig::default());
        follower.set_target(640.0, 360.0);

        let mut last_distance = f64::MAX;
        for _ in 0..120 {
            let (x, y) = follower.step();
            let distance = ((640.0 - x).powi(2) + (360.0 - y).powi(2)).sqrt();
            assert!(distance < last_distance);
            last_distance = distance;
        }

        assert!(last_distance < 0.01);
    }

    #[test]
    fn resting_on_target_stays_put() {
        let mut follower = PointerFollower::new(0.16, 8.0);
        follower.set_target(0.0, 0.0);

        assert_eq!(follower.step(), (0.0, 0.0));
    }

    #[test]
    fn parallax_is_centred_and_bounded() {
        let range = (10.0, 6.0);

        assert_eq!(parallax_offset((500.0, 400.0), (1000.0, 800.0), range), (0.0, 0.0));
        assert_eq!(parallax_offset((0.0, 0.0), (1000.0, 800.0), range), (-5.0, -3.0));
        assert_eq!(parallax_offset((1000.0, 800.0), (1000.0, 800.0), range), (5.0, 3.0));
    }

    #[test]
    fn zero_viewport_yields_no_offset() {
        assert_eq!(parallax_offset((10.0, 10.0), (0.0, 0.0), (10.0, 6.0)), (0.0, 0.0));
    }
}
