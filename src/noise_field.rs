//! 2D gradient noise over a shuffled permutation lattice.
//!
//! The field is built once from a [`RandomState`] and is read-only afterwards,
//! so it can be shared freely between threads.

use noise::NoiseFn;

use crate::random::RandomState;

/// Lattice period (permutation table entries before doubling)
pub const LATTICE_SIZE: usize = 256;

const LATTICE_MASK: i64 = LATTICE_SIZE as i64 - 1;

/// Gradient directions: four axes plus four diagonals
const GRADIENTS: [[f64; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
];

/// Immutable 2D gradient noise field
#[derive(Clone)]
pub struct NoiseField {
    /// Shuffled 0..256, stored twice so `perm[perm[x] + y]` never needs a modulo
    perm: [u8; LATTICE_SIZE * 2],
}

impl NoiseField {
    /// Build the permutation table with a Fisher-Yates shuffle driven by `rng`.
    pub fn new(rng: &mut RandomState) -> Self {
        let mut table = [0u8; LATTICE_SIZE];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }

        for i in (1..LATTICE_SIZE).rev() {
            let j = rng.next_index(i + 1);
            table.swap(i, j);
        }

        let mut perm = [0u8; LATTICE_SIZE * 2];
        perm[..LATTICE_SIZE].copy_from_slice(&table);
        perm[LATTICE_SIZE..].copy_from_slice(&table);

        log::debug!("noise field built (lattice {})", LATTICE_SIZE);

        Self { perm }
    }

    /// Shorthand for `NoiseField::new(&mut RandomState::with_seed(seed))`.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(&mut RandomState::with_seed(seed))
    }

    /// Sample raw noise at `(x, y)`.
    ///
    /// Returns a value in [-1, 1] for finite coordinates; exactly 0.0 on
    /// integer lattice points. Non-finite coordinates (NaN or ±inf) yield NaN.
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();

        let fx = x - x_floor;
        let fy = y - y_floor;

        // Negative cells wrap through the mask (two's complement)
        let xi = (x_floor as i64 & LATTICE_MASK) as usize;
        let yi = (y_floor as i64 & LATTICE_MASK) as usize;

        let n00 = self.corner(xi, yi, fx, fy);
        let n10 = self.corner(xi + 1, yi, fx - 1.0, fy);
        let n01 = self.corner(xi, yi + 1, fx, fy - 1.0);
        let n11 = self.corner(xi + 1, yi + 1, fx - 1.0, fy - 1.0);

        let u = fade(fx);
        let v = fade(fy);

        let bottom = lerp(n00, n10, u);
        let top = lerp(n01, n11, u);
        lerp(bottom, top, v).clamp(-1.0, 1.0)
    }

    /// Sample noise remapped to [0, 1].
    pub fn noise01(&self, x: f64, y: f64) -> f64 {
        to_unit(self.noise(x, y))
    }

    /// Adapter that samples [`noise01`](Self::noise01) through [`NoiseFn`].
    pub fn normalized(&self) -> Normalized<'_> {
        Normalized(self)
    }

    /// Gradient contribution of one cell corner.
    ///
    /// `xi`/`yi` are in `0..=256`; the doubled table keeps both lookups in bounds.
    #[inline]
    fn corner(&self, xi: usize, yi: usize, dx: f64, dy: f64) -> f64 {
        let hash = self.perm[self.perm[xi] as usize + yi];
        let g = GRADIENTS[(hash & 7) as usize];
        g[0] * dx + g[1] * dy
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("lattice", &LATTICE_SIZE)
            .finish_non_exhaustive()
    }
}

impl NoiseFn<f64, 2> for NoiseField {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.noise(point[0], point[1])
    }
}

/// [`NoiseField`] viewed through its [0, 1] normalization
#[derive(Debug, Clone, Copy)]
pub struct Normalized<'a>(&'a NoiseField);

impl NoiseFn<f64, 2> for Normalized<'_> {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.0.noise01(point[0], point[1])
    }
}

/// Quintic fade 6t^5 - 15t^4 + 10t^3 (zero 1st and 2nd derivative at 0 and 1)
/// Map [-1, 1] onto [0, 1], clamping rounding spill at the ends.
#[inline]
fn to_unit(v: f64) -> f64 {
    ((v + 1.0) * 0.5).clamp(0.0, 1.0)
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
