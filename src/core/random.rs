//! Random spin for collisions and throws
//!
//! Every bounce and throw hands the body a fresh angular velocity. The engine
//! pulls it from a `SpinSource` so tests can pin the value, while the default
//! is a xorshift32 generator seeded from the host.

/// Seed used when the caller (or the host clock) hands us zero.
/// xorshift never leaves the all-zero state.
const FALLBACK_SEED: u32 = 0x9E37_79B9;

/// Half-width of the spin range assigned on a boundary bounce: [-5, 5].
pub const COLLISION_SPIN_RANGE: f32 = 10.0;
/// Half-width of the spin range assigned on a throw: [-10, 10].
pub const THROW_SPIN_RANGE: f32 = 20.0;

/// Uniform source of values in `[0, 1)`.
pub trait SpinSource {
    fn next_unit(&mut self) -> f32;
}

/// Random number generator (xorshift32)
#[derive(Clone, Copy, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { FALLBACK_SEED } else { seed };
        Self { state }
    }

    /// Seed from `Math.random` in the browser, from the clock elsewhere.
    pub fn from_entropy() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new((js_sys::Math::random() * u32::MAX as f64) as u32)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::time::{SystemTime, UNIX_EPOCH};

            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(FALLBACK_SEED);
            Self::new(seed)
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SpinSource for Xorshift32 {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits fit an f32 mantissa exactly, so the result never rounds up to 1.0
        (self.next_u32() >> 8) as f32 * (1.0 / 16_777_216.0)
    }
}

#[inline]
pub fn collision_spin(unit: f32) -> f32 {
    (unit - 0.5) * COLLISION_SPIN_RANGE
}

#[inline]
pub fn throw_spin(unit: f32) -> f32 {
    (unit - 0.5) * THROW_SPIN_RANGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_does_not_stick() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_u32(), 0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xorshift32::new(1234);
        let mut b = Xorshift32::new(1234);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn units_stay_in_half_open_range() {
        let mut rng = Xorshift32::new(42);
        for _ in 0..10_000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u), "unit out of range: {u}");
        }
    }

    #[test]
    fn spin_ranges() {
        assert_eq!(collision_spin(0.0), -5.0);
        assert_eq!(collision_spin(0.5), 0.0);
        assert_eq!(throw_spin(0.0), -10.0);
        assert_eq!(throw_spin(0.75), 5.0);

        let mut rng = Xorshift32::new(7);
        for _ in 0..1_000 {
            let s = collision_spin(rng.next_unit());
            assert!((-5.0..=5.0).contains(&s));
            let t = throw_spin(rng.next_unit());
            assert!((-10.0..=10.0).contains(&t));
        }
    }
}
