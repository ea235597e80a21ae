//! Sequential recurrence kernels
//!
//! The exponential moving average feeds every output into the next one, so
//! there is nothing for 4-wide lanes to do without a parallel-scan
//! reformulation. It runs as a plain loop on every CPU.

/// Exponential moving average.
///
/// `out[0] = a[0]`, then `out[i] = alpha * a[i] + (1 - alpha) * out[i - 1]`.
/// `alpha` is expected in `(0, 1)` and is not validated. `len == 0` is a
/// no-op.
///
/// # Safety
/// - `a` must point to `len` valid f32 elements
/// - `out` must point to `len` writable f32 elements
#[inline]
pub unsafe fn ema_f32(a: *const f32, out: *mut f32, len: usize, alpha: f32) {
    if len == 0 {
        return;
    }

    let keep = 1.0 - alpha;
    let mut prev = *a;
    *out = prev;

    for i in 1..len {
        prev = alpha * *a.add(i) + keep * prev;
        *out.add(i) = prev;
    }
}
