/// Round a difference of two readings to hundredths of its unit.
///
/// Forecast values are published with a resolution of 0.1, so subtracting two of them leaves
/// floating point noise in the last bits (`1012.4 - 1012.1 = 0.29999999999995453`). Rounding
/// keeps a delta from slipping across a band edge.
#[inline]
pub(crate) fn round_hundredths(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}
