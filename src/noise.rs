//! Classic 2D gradient noise and fractal (fBm) summation.

/// Ken Perlin's reference permutation of 0..=255.
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Gradient noise over a fixed permutation table.
///
/// The table is stored twice in a row so that `perm[i + 1]` and `perm[a + y]` never need a
/// wraparound check.
#[derive(Clone)]
pub struct GradientNoise {
    perm: [usize; 512],
}

impl GradientNoise {
    pub fn new() -> Self {
        let mut perm = [0; 512];
        for (i, value) in perm.iter_mut().enumerate() {
            *value = PERMUTATION[i & 255] as usize;
        }
        GradientNoise { perm }
    }

    /// Sample the noise at `(x, y)`. The result lies in `[-1, 1]`.
    ///
    /// Never panics, not even for non-finite input (NaN maps onto cell 0).
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let (xi, xf) = split_cell(x);
        let (yi, yf) = split_cell(y);

        let u = fade(xf);
        let v = fade(yf);

        let p = &self.perm;
        let a = p[xi] + yi;
        let aa = p[a];
        let ab = p[a + 1];
        let b = p[xi + 1] + yi;
        let ba = p[b];
        let bb = p[b + 1];

        lerp(
            v,
            lerp(u, grad(p[aa], xf, yf), grad(p[ba], xf - 1., yf)),
            lerp(u, grad(p[ab], xf, yf - 1.), grad(p[bb], xf - 1., yf - 1.)),
        )
    }

    /// Sum `octaves` layers of noise, each at twice the frequency and half the amplitude of the
    /// previous one, normalized by the total amplitude. The result lies in `[-1, 1]`.
    ///
    /// Zero octaves are treated as one.
    pub fn fractal_sample(&self, x: f64, y: f64, octaves: u32) -> f64 {
        let mut value = 0.;
        let mut amplitude = 1.;
        let mut frequency = 1.;
        let mut total_amplitude = 0.;

        for _ in 0..octaves.max(1) {
            value += amplitude * self.sample(x * frequency, y * frequency);
            total_amplitude += amplitude;
            amplitude *= 0.5;
            frequency *= 2.;
        }

        (value / total_amplitude).clamp(-1., 1.)
    }
}

impl Default for GradientNoise {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a coordinate into its lattice cell (wrapped into 0..=255) and the offset inside it.
fn split_cell(t: f64) -> (usize, f64) {
    let floor = t.floor();
    let cell = (floor as i64 & 255) as usize;
    let offset = t - floor;
    // inf - inf
    let offset = if offset.is_finite() { offset } else { 0. };
    (cell, offset)
}

/// 6t^5 - 15t^4 + 10t^3
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6. - 15.) + 10.)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

fn grad(hash: usize, x: f64, y: f64) -> f64 {
    match hash & 3 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        _ => -x - y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_is_doubled() {
        let noise = GradientNoise::new();
        for i in 0..256 {
            assert_eq!(noise.perm[i], noise.perm[i + 256]);
        }
        assert_eq!(noise.perm[0], 151);
        assert_eq!(noise.perm[255], 180);
    }

    #[test]
    fn zero_on_lattice_points() {
        let noise = GradientNoise::new();
        for (x, y) in [(0., 0.), (1., 0.), (3., 7.), (-2., 5.), (255., 256.)] {
            assert_eq!(noise.sample(x, y), 0.);
        }
    }

    #[test]
    fn fade_endpoints() {
        assert_eq!(fade(0.), 0.);
        assert_eq!(fade(1.), 1.);
        assert_eq!(fade(0.5), 0.5);
    }

    #[test]
    fn negative_coordinates_wrap() {
        let noise = GradientNoise::new();
        let a = noise.sample(-0.25, -0.75);
        let b = noise.sample(255.75, 255.25);
        assert!(a.is_finite());
        assert!(b.is_finite());
        // Cell -1 wraps onto cell 255.
        assert!((noise.sample(-0.5, 0.5) - noise.sample(255.5, 0.5)).abs() < 1e-12);
    }

    #[test]
    fn non_finite_input_does_not_panic() {
        let noise = GradientNoise::new();
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX, f64::MIN] {
            let s = noise.fractal_sample(v, 1.5, 4);
            assert!(s.is_nan() || (-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn zero_octaves_equal_one() {
        let noise = GradientNoise::new();
        assert_eq!(noise.fractal_sample(0.3, 0.6, 0), noise.fractal_sample(0.3, 0.6, 1));
        assert_eq!(noise.fractal_sample(0.3, 0.6, 1), noise.sample(0.3, 0.6));
    }
}
