use crate::complex::Complex;
use crate::request::RenderRequest;

/// `|z|²` above which an orbit counts as escaped (radius 2).
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Returns `true` if `c` lies inside the main cardioid.
///
/// Closed-form membership test; such points never escape, so iterating them
/// would only burn the full `max_iter` budget.
#[inline]
fn in_cardioid(re: f64, im: f64) -> bool {
    let im2 = im * im;
    let q = (re - 0.25) * (re - 0.25) + im2;
    q * (q + (re - 0.25)) <= 0.25 * im2
}

/// Returns `true` if `c` lies inside the period-2 bulb.
#[inline]
fn in_period2_bulb(re: f64, im: f64) -> bool {
    (re + 1.0) * (re + 1.0) + im * im <= 0.0625
}

/// Escape time of `c` under `z ← z² + c` starting from `z = 0`.
///
/// Returns the 1-based step at which `|z|² > 4` first held, or `max_iter` if
/// the orbit stayed bounded for all `max_iter` steps. The result is always in
/// `[1, max_iter]` for `max_iter >= 1`.
///
/// An orbit that escapes on exactly step `max_iter` also reports `max_iter`,
/// so it is indistinguishable from a bounded orbit and colors as inside.
#[inline]
pub fn escape_time(c: Complex, max_iter: u32) -> u32 {
    if in_cardioid(c.re, c.im) || in_period2_bulb(c.re, c.im) {
        return max_iter;
    }

    let mut z = Complex::ZERO;
    for n in 1..=max_iter {
        z = z.square() + c;
        if z.norm_sq() > ESCAPE_RADIUS_SQ {
            return n;
        }
    }
    max_iter
}

/// Escape time of pixel `(px, py)` for `request`.
///
/// Pure in its inputs: no pixel reads another pixel's state, which is what
/// lets the renderer hand rows to any thread in any order.
#[inline]
pub fn iterations_at(px: u32, py: u32, request: &RenderRequest) -> u32 {
    let c = request
        .viewport
        .pixel_to_plane(px, py, request.width, request.height);
    escape_time(c, request.max_iter)
}
