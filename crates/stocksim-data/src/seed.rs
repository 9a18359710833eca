//! Reproducible draws keyed on a symbol.

/// Fold a symbol into a 32-bit seed: `hash = hash * 31 + code_unit`, wrapping.
///
/// Code units are UTF-16, so non-ASCII symbols hash the same way on every platform.
pub fn symbol_seed(symbol: &str) -> i32 {
    symbol
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Deterministic draw in `[0, 1]` for position `x`: `frac(sin(x) * 10000)`.
pub fn seeded_unit(x: f64) -> f64 {
    let v = x.sin() * 10000.0;
    v - v.floor()
}

/// Draw `offset` steps past `seed`.
#[inline]
pub(crate) fn draw(seed: i32, offset: i64) -> f64 {
    seeded_unit(seed as f64 + offset as f64)
}
