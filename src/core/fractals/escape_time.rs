use crate::core::data::complex::Complex;

/// Counts iterations of `z = z² + c` starting from `z0` until `|z|²` exceeds
/// `escape_radius_squared`.
///
/// Returns the zero-based index of the step whose result first lies strictly
/// outside the threshold, or `max_iterations` when no step escapes. The
/// starting value itself is never tested.
#[must_use]
#[inline]
pub fn escape_iterations(
    z0: Complex,
    c: Complex,
    max_iterations: u32,
    escape_radius_squared: f64,
) -> u32 {
    let mut z = z0;

    for iteration in 0..max_iterations {
        z = z.square_add(c);

        if escape_radius_squared < z.magnitude_squared() {
            return iteration;
        }
    }

    max_iterations
}
