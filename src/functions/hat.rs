/// The hat (tent) function: `max(0, 1 - |x|)`.
///
/// Peaks at 1 for `x = 0` and falls off linearly with slope ±1 to 0 at
/// `|x| = 1`, staying 0 beyond. NaN input is returned as NaN.
pub fn hat(x: f64) -> f64 {
    let y = 1.0 - x.abs();
    // `y < 0.0` is false for NaN, so NaN passes straight through.
    if y < 0.0 { 0.0 } else { y }
}
