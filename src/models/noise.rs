//! Detector noise added to the elution signal
//!
//! The elution simulator is deterministic except for one term: a small
//! uniform noise added to every absorbance reading. The noise source is
//! injected so that tests and reproducible studies can pin or seed it.
//!
//! # Types
//!
//! - **Uniform**: fresh thread RNG on every run, uniform in \[−a, +a)
//! - **Seeded**: same distribution from a seeded RNG, identical on every run
//! - **None**: no noise, the simulator becomes fully deterministic
//! - **Custom**: user-defined noise as a function of the step index
//!
//! # Example
//!
//! ```rust
//! use elution_rs::models::IntensityNoise;
//!
//! let noise = IntensityNoise::seeded(42, 1.0);
//! let first: Vec<f64> = { let mut s = noise.sampler(); (0..5).map(|i| s.sample(i)).collect() };
//! let second: Vec<f64> = { let mut s = noise.sampler(); (0..5).map(|i| s.sample(i)).collect() };
//! assert_eq!(first, second);
//! ```

use std::sync::Arc;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Amplitude of the default detector noise \[mAU\]
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 1.0;

/// Noise source of the elution simulator
pub enum IntensityNoise {
    /// Uniform noise in \[−amplitude, +amplitude) from the thread RNG
    Uniform { amplitude: f64 },

    /// Uniform noise from an RNG seeded at the start of every run
    Seeded { seed: u64, amplitude: f64 },

    /// Custom noise as a function of the gradient step index
    ///
    /// # Example
    ///
    /// ```rust
    /// use elution_rs::models::IntensityNoise;
    /// // Alternating ±0.5 mAU ripple
    /// let noise = IntensityNoise::custom(|step| if step % 2 == 0 { 0.5 } else { -0.5 });
    /// ```
    Custom(Arc<dyn Fn(usize) -> f64 + Send + Sync>),

    /// No noise
    None,
}

// ==================== Manual Clone Implementation ====================

impl Clone for IntensityNoise {
    fn clone(&self) -> Self {
        match self {
            Self::Uniform { amplitude } => Self::Uniform { amplitude: *amplitude },
            Self::Seeded { seed, amplitude } => Self::Seeded {
                seed: *seed,
                amplitude: *amplitude,
            },
            Self::Custom(f) => Self::Custom(Arc::clone(f)),
            Self::None => Self::None,
        }
    }
}

// ==================== Manual Debug Implementation ====================

impl std::fmt::Debug for IntensityNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uniform { amplitude } => f
                .debug_struct("Uniform")
                .field("amplitude", amplitude)
                .finish(),
            Self::Seeded { seed, amplitude } => f
                .debug_struct("Seeded")
                .field("seed", seed)
                .field("amplitude", amplitude)
                .finish(),
            Self::Custom(_) => f
                .debug_struct("Custom")
                .field("function", &"<user-defined>")
                .finish(),
            Self::None => f.debug_struct("None").finish(),
        }
    }
}

impl Default for IntensityNoise {
    fn default() -> Self {
        Self::uniform(DEFAULT_NOISE_AMPLITUDE)
    }
}

impl IntensityNoise {
    /// Uniform noise from the thread RNG
    pub fn uniform(amplitude: f64) -> Self {
        assert!(
            amplitude.is_finite() && amplitude >= 0.0,
            "Noise amplitude must be finite and non-negative, got {}",
            amplitude
        );
        Self::Uniform { amplitude }
    }

    /// Reproducible uniform noise
    pub fn seeded(seed: u64, amplitude: f64) -> Self {
        assert!(
            amplitude.is_finite() && amplitude >= 0.0,
            "Noise amplitude must be finite and non-negative, got {}",
            amplitude
        );
        Self::Seeded { seed, amplitude }
    }

    /// User-defined noise
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(usize) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// No noise
    pub fn none() -> Self {
        Self::None
    }

    /// Whether two runs with equal inputs produce equal profiles
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Self::Uniform { amplitude } if *amplitude > 0.0)
    }

    /// Start a sampler for one simulation run
    ///
    /// Seeded sources restart from their seed on every call.
    pub fn sampler(&self) -> NoiseSampler<'_> {
        match self {
            Self::Uniform { amplitude } => NoiseSampler::Thread {
                rng: rand::thread_rng(),
                amplitude: *amplitude,
            },
            Self::Seeded { seed, amplitude } => NoiseSampler::Seeded {
                rng: StdRng::seed_from_u64(*seed),
                amplitude: *amplitude,
            },
            Self::Custom(f) => NoiseSampler::Custom(f.as_ref()),
            Self::None => NoiseSampler::Zero,
        }
    }
}

/// Per-run noise state
pub enum NoiseSampler<'a> {
    Thread { rng: ThreadRng, amplitude: f64 },
    Seeded { rng: StdRng, amplitude: f64 },
    Custom(&'a (dyn Fn(usize) -> f64 + Send + Sync)),
    Zero,
}

impl NoiseSampler<'_> {
    /// Noise to add at gradient step `step`
    pub fn sample(&mut self, step: usize) -> f64 {
        match self {
            Self::Thread { rng, amplitude } => symmetric(rng, *amplitude),
            Self::Seeded { rng, amplitude } => symmetric(rng, *amplitude),
            Self::Custom(f) => f(step),
            Self::Zero => 0.0,
        }
    }
}

/// Uniform in \[−amplitude, +amplitude)
#[inline]
fn symmetric<R: Rng>(rng: &mut R, amplitude: f64) -> f64 {
    (rng.r#gen::<f64>() - 0.5) * 2.0 * amplitude
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(noise: &IntensityNoise, n: usize) -> Vec<f64> {
        let mut sampler = noise.sampler();
        (0..n).map(|i| sampler.sample(i)).collect()
    }

    #[test]
    fn test_uniform_within_amplitude() {
        let values = draw(&IntensityNoise::uniform(1.0), 1000);
        assert!(values.iter().all(|v| (-1.0..1.0).contains(v)));
        // Not constant
        assert!(values.iter().any(|v| *v != values[0]));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let noise = IntensityNoise::seeded(7, 2.0);
        let first = draw(&noise, 200);
        let second = draw(&noise, 200);
        assert_eq!(first, second);
        assert!(first.iter().all(|v| (-2.0..2.0).contains(v)));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(
            draw(&IntensityNoise::seeded(1, 1.0), 20),
            draw(&IntensityNoise::seeded(2, 1.0), 20)
        );
    }

    #[test]
    fn test_none_is_zero() {
        assert!(draw(&IntensityNoise::none(), 50).iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_custom_receives_step() {
        let noise = IntensityNoise::custom(|step| step as f64 * 0.1);
        let values = draw(&noise, 4);
        assert_eq!(values, vec![0.0, 0.1, 0.2, 0.30000000000000004]);
    }

    #[test]
    fn test_determinism_flag() {
        assert!(!IntensityNoise::default().is_deterministic());
        assert!(IntensityNoise::uniform(0.0).is_deterministic());
        assert!(IntensityNoise::seeded(3, 1.0).is_deterministic());
        assert!(IntensityNoise::none().is_deterministic());
    }

    #[test]
    fn test_clone_custom_shares_function() {
        let noise = IntensityNoise::custom(|_| 0.25);
        let cloned = noise.clone();
        assert_eq!(draw(&cloned, 1), vec![0.25]);
        assert!(format!("{:?}", cloned).contains("<user-defined>"));
    }

    #[test]
    #[should_panic(expected = "Noise amplitude must be finite and non-negative")]
    fn test_negative_amplitude() {
        IntensityNoise::uniform(-1.0);
    }
}
