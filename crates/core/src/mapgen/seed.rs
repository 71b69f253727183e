//! Seed mixing and draw helpers over an injected random source.

use rand_chacha::rand_core::Rng;

/// Derives an independent seed for the `run_index`-th run of a batch.
pub fn derive_run_seed(base_seed: u64, run_index: u64) -> u64 {
    let mut mixed = base_seed ^ run_index.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}

/// Uniform draw in `[0, 1)` from the top 53 bits.
pub(super) fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}

pub(super) fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    random_unit(rng) < probability
}

pub(super) fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.next_u64() & 1 == 1
}

pub(super) fn random_i32<R: Rng + ?Sized>(rng: &mut R, min_value: i32, max_value: i32) -> i32 {
    debug_assert!(min_value <= max_value);
    let range_size = (i64::from(max_value) - i64::from(min_value) + 1) as u64;
    min_value + (rng.next_u64() % range_size) as i32
}

pub(super) fn choose<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[(rng.next_u64() % options.len() as u64) as usize]
}
