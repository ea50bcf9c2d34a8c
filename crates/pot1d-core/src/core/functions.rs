/// Molar gas constant in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314462618;

#[inline]
pub fn harmonic(pos: f64, fc: f64, x_shift: f64, y_shift: f64) -> f64 {
    0.5 * fc * (pos - x_shift).powi(2) - y_shift
}

#[inline]
pub fn harmonic_dhdpos(pos: f64, fc: f64, x_shift: f64) -> f64 {
    fc * (pos - x_shift)
}

#[inline]
pub fn double_well(pos: f64, v_max: f64, a: f64, b: f64) -> f64 {
    let centered = pos - a / 2.0;
    v_max / b.powi(4) * (centered.powi(2) - b.powi(2)).powi(2)
}

#[inline]
pub fn double_well_dhdpos(pos: f64, v_max: f64, a: f64, b: f64) -> f64 {
    let centered = pos - a / 2.0;
    4.0 * v_max / b.powi(4) * (centered.powi(2) - b.powi(2)) * centered
}

/// `ln(exp(m) + exp(n))` computed as `max + ln(1 + exp(min - max))`.
///
/// The argument order does not change the result, but callers folding many terms must keep a
/// fixed order to get reproducible rounding.
#[inline]
pub fn log_add_exp(m: f64, n: f64) -> f64 {
    let (hi, lo) = if m >= n { (m, n) } else { (n, m) };
    if hi.is_infinite() {
        return hi;
    }
    hi + (1.0 + (lo - hi).exp()).ln()
}

/// Left fold of [`log_add_exp`] over `terms` in index order.
///
/// Returns `None` for an empty iterator.
pub fn log_sum_exp_fold<I>(terms: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    terms.into_iter().reduce(log_add_exp)
}
