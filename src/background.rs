//! The animated background: a drifting noise field rasterized into a coarse RGB bitmap.

use rand::Rng;
use rand_distr::{Distribution, UnitCircle};

use crate::noise::GradientNoise;
use crate::options::Options;

/// Number of fBm octaves used for the background.
const OCTAVES: u32 = 4;

/// A noise field scrolling through noise space in a fixed direction.
#[derive(Clone)]
pub struct NoiseField {
    noise: GradientNoise,
    direction: [f64; 2],
    time: f64,
}

impl NoiseField {
    /// Create a field with a random scroll direction (unit vector scaled by a speed between
    /// 0.2 and 0.4).
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        NoiseField {
            noise: GradientNoise::new(),
            direction: random_direction(rng),
            time: 0.,
        }
    }

    /// Create a field with an explicit scroll direction.
    pub fn with_direction(direction: [f64; 2]) -> Self {
        NoiseField {
            noise: GradientNoise::new(),
            direction,
            time: 0.,
        }
    }

    pub fn direction(&self) -> [f64; 2] {
        self.direction
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Pick a new scroll direction. Only ever called on explicit request.
    pub fn randomize_direction<R: Rng>(&mut self, rng: &mut R) {
        self.direction = random_direction(rng);
        log::debug!("background direction changed to {:?}", self.direction);
    }

    /// Set the elapsed time, which determines the scroll offset.
    pub fn update(&mut self, elapsed: f64) {
        self.time = elapsed;
    }

    /// Sample the field at `(x, y)` shifted by the current scroll offset.
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        let dx = self.time * self.direction[0];
        let dy = self.time * self.direction[1];
        self.noise.fractal_sample(x + dx, y + dy, OCTAVES)
    }
}

fn random_direction<R: Rng>(rng: &mut R) -> [f64; 2] {
    let [x, y]: [f64; 2] = UnitCircle.sample(rng);
    let speed = rng.random_range(0.2..=0.4);
    [x * speed, y * speed]
}

/// Map a noise value from `[-1, 1]` onto the purple color ramp.
pub fn color_ramp(value: f64) -> [u8; 3] {
    let n = ((value + 1.) / 2.).clamp(0., 1.);
    [
        (40. + n * 60.) as u8,
        (20. + n * 40.) as u8,
        (80. + n * 100.) as u8,
    ]
}

/// Coarse raster of a [`NoiseField`]: one sample per `cell_size` output pixels.
///
/// The front end is responsible for upscaling the bitmap (nearest neighbor) to the full output
/// size.
pub struct Background {
    field: NoiseField,
    cols: usize,
    rows: usize,
    noise_scale: f64,
    elapsed: f64,
    pixels: Vec<u8>,
}

impl Background {
    pub fn new(field: NoiseField, options: &Options) -> Self {
        let cell_size = options.background_cell_size.max(1);
        let cols = (options.field_width as usize / cell_size).max(1);
        let rows = (options.field_height as usize / cell_size).max(1);

        let mut background = Background {
            field,
            cols,
            rows,
            noise_scale: options.noise_scale,
            elapsed: 0.,
            pixels: vec![0; cols * rows * 3],
        };
        background.rasterize();
        background
    }

    /// Return `[width, height]` of the coarse bitmap.
    pub fn size(&self) -> [usize; 2] {
        [self.cols, self.rows]
    }

    /// The coarse bitmap as tightly packed RGB bytes, row by row.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn field(&self) -> &NoiseField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut NoiseField {
        &mut self.field
    }

    /// Advance the animation by `dt` seconds and re-render the bitmap.
    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
        self.field.update(self.elapsed);
        self.rasterize();
    }

    fn rasterize(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let x = col as f64 * self.noise_scale;
                let y = row as f64 * self.noise_scale;
                let color = color_ramp(self.field.value_at(x, y));
                let offset = (row * self.cols + col) * 3;
                self.pixels[offset..offset + 3].copy_from_slice(&color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn ramp_endpoints() {
        assert_eq!(color_ramp(-1.), [40, 20, 80]);
        assert_eq!(color_ramp(1.), [100, 60, 180]);
        assert_eq!(color_ramp(5.), [100, 60, 180]);
    }

    #[test]
    fn direction_speed_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let field = NoiseField::new(&mut rng);
            let [x, y] = field.direction();
            let speed = (x * x + y * y).sqrt();
            assert!((0.2 - 1e-9..=0.4 + 1e-9).contains(&speed), "speed {speed}");
        }
    }

    #[test]
    fn direction_is_fixed_over_time() {
        let mut field = NoiseField::with_direction([0.3, 0.]);
        field.update(10.);
        assert_eq!(field.direction(), [0.3, 0.]);
        // Scrolling by 10 * 0.3 along x equals sampling 3 units further right at time 0.
        let moved = field.value_at(0.1, 0.2);
        let still = NoiseField::with_direction([0.3, 0.]).value_at(3.1, 0.2);
        assert!((moved - still).abs() < 1e-9);
    }

    #[test]
    fn raster_dimensions() {
        let options = Options::default();
        let background = Background::new(NoiseField::with_direction([0.2, 0.2]), &options);
        assert_eq!(background.size(), [100, 75]);
        assert_eq!(background.pixels().len(), 100 * 75 * 3);
    }

    #[test]
    fn advance_changes_picture() {
        let options = Options::default();
        let mut background = Background::new(NoiseField::with_direction([0.4, 0.]), &options);
        let before = background.pixels().to_vec();
        background.advance(1.5);
        assert_eq!(background.field().time(), 1.5);
        assert_ne!(background.pixels(), &before[..]);
    }
}
