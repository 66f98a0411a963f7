/// Deterministic seed of a display name.
///
/// Folds the UTF-16 code units of `name` with `hash * 31 + unit` in 32-bit
/// signed arithmetic and returns the magnitude, so the same name always
/// lands on the same avatar. The empty name hashes to `0`.
pub fn hash_name(name: &str) -> u32 {
    let hash = name.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    log::trace!("hash of {:?} is {}", name, hash);

    hash.unsigned_abs()
}

/// Pseudo-random value in `[0, 1)` for the `index`-th draw of `seed`.
///
/// Cosmetic only: the fractional part of a scaled sine. Keep the constants,
/// avatars must stay identical to the ones already published.
pub fn seeded_random(seed: u32, index: u32) -> f64 {
    let x = (f64::from(seed) + f64::from(index) * 9301.0 + 49297.0).sin()
        * 49297.0;
    x - x.floor()
}
