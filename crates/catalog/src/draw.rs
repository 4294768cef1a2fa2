//! Sources of the random value behind a draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the value a weighted draw lands on.
///
/// Implementations return a value in `[0, upper)`. The catalog only calls
/// `draw` with a finite, strictly positive `upper`.
pub trait DrawSource {
    fn draw(&mut self, upper: f64) -> f64;
}

impl<D> DrawSource for &mut D
where
    D: DrawSource + ?Sized,
{
    fn draw(&mut self, upper: f64) -> f64 {
        (**self).draw(upper)
    }
}

/// Uniform draws backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDraw<R> {
    rng: R,
}

impl<R: Rng> RngDraw<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngDraw<StdRng> {
    /// Generator seeded from OS entropy (one per process run).
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator; the same seed yields the same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawSource for RngDraw<R> {
    fn draw(&mut self, upper: f64) -> f64 {
        if !(upper > 0.0 && upper.is_finite()) {
            return 0.0;
        }
        self.rng.gen_range(0.0..upper)
    }
}

/// Always lands on the same value, whatever the upper bound.
///
/// The value is not clamped: anything at or past the total weight walks off
/// the end of the catalog, which is how tests reach the fall-through path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedDraw(pub f64);

impl DrawSource for FixedDraw {
    fn draw(&mut self, _upper: f64) -> f64 {
        self.0
    }
}
