use glam::Vec2;

/// An axis-aligned square or rectangle used for collision tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hitbox {
    pub min: Vec2,
    pub max: Vec2,
}

impl Hitbox {
    /// A square of side length `size` centered on `center`.
    pub fn centered(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.);
        Hitbox {
            min: center - half,
            max: center + half,
        }
    }

    /// Return true if the two boxes overlap. Boxes which merely touch do not overlap.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// The rectangle in which entities may be placed.
///
/// The play field is inset by `margin` on every side and additionally loses a band of
/// `header_height` at the top (y grows downwards).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlayArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlayArea {
    pub fn new(width: f32, height: f32, margin: f32, header_height: f32) -> Self {
        let min = Vec2::new(margin, margin + header_height);
        let max = Vec2::new(width - margin, height - margin);
        // Degenerate fields collapse onto a line or point instead of inverting.
        PlayArea {
            min,
            max: max.max(min),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap() {
        let a = Hitbox::centered(Vec2::new(100., 100.), 64.);
        assert_eq!(a.min, Vec2::new(68., 68.));
        assert_eq!(a.max, Vec2::new(132., 132.));

        let b = Hitbox::centered(Vec2::new(140., 100.), 30.);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        let c = Hitbox::centered(Vec2::new(147., 100.), 30.);
        assert!(!a.intersects(&c), "touching edges do not count");

        let d = Hitbox::centered(Vec2::new(100., 180.), 30.);
        assert!(!a.intersects(&d));
    }

    #[test]
    fn play_area() {
        let area = PlayArea::new(800., 600., 60., 60.);
        assert_eq!(area.min, Vec2::new(60., 120.));
        assert_eq!(area.max, Vec2::new(740., 540.));
        assert!(area.contains(Vec2::new(60., 540.)));
        assert!(!area.contains(Vec2::new(400., 100.)));

        let tiny = PlayArea::new(100., 100., 60., 60.);
        assert_eq!(tiny.min, tiny.max);
    }
}
