use glam::Vec2;
use rand::Rng;

use crate::geometry::PlayArea;

/// Randomly place `count` points inside `area` using rejection sampling.
///
/// Each point is drawn uniformly until it is at least `min_separation` away from every point
/// placed before it. After `attempts` failed draws the last drawn point is kept anyway, so the
/// function always terminates, but the separation is only likely, not guaranteed.
pub fn scatter<R: Rng>(
    rng: &mut R,
    count: usize,
    area: &PlayArea,
    min_separation: f32,
    attempts: u32,
) -> Vec<Vec2> {
    let mut points: Vec<Vec2> = Vec::with_capacity(count);

    for _ in 0..count {
        let mut candidate = random_point(rng, area);
        for _ in 1..attempts.max(1) {
            if well_separated(candidate, &points, min_separation) {
                break;
            }
            candidate = random_point(rng, area);
        }
        points.push(candidate);
    }

    points
}

fn random_point<R: Rng>(rng: &mut R, area: &PlayArea) -> Vec2 {
    Vec2::new(
        rng.random_range(area.min.x..=area.max.x),
        rng.random_range(area.min.y..=area.max.y),
    )
}

fn well_separated(candidate: Vec2, placed: &[Vec2], min_separation: f32) -> bool {
    placed
        .iter()
        .all(|point| point.distance(candidate) >= min_separation)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    fn area() -> PlayArea {
        PlayArea::new(800., 600., 60., 60.)
    }

    #[test]
    fn points_inside_area() {
        let mut rng = Pcg32::seed_from_u64(1);
        let points = scatter(&mut rng, 20, &area(), 70., 100);
        assert_eq!(points.len(), 20);
        assert!(points.iter().all(|p| area().contains(*p)));
    }

    #[test]
    fn impossible_separation_terminates() {
        let mut rng = Pcg32::seed_from_u64(2);
        let points = scatter(&mut rng, 10, &area(), 10_000., 100);
        assert_eq!(points.len(), 10);
    }

    #[test]
    fn zero_attempts_still_draws() {
        let mut rng = Pcg32::seed_from_u64(3);
        let points = scatter(&mut rng, 3, &area(), 70., 0);
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn degenerate_area() {
        let mut rng = Pcg32::seed_from_u64(4);
        let tiny = PlayArea::new(100., 100., 60., 60.);
        let points = scatter(&mut rng, 2, &tiny, 70., 100);
        assert_eq!(points[0], points[1]);
    }

    #[test]
    fn same_seed_same_points() {
        let a = scatter(&mut Pcg32::seed_from_u64(9), 5, &area(), 70., 100);
        let b = scatter(&mut Pcg32::seed_from_u64(9), 5, &area(), 70., 100);
        assert_eq!(a, b);
    }
}
