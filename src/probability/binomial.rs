//! Binomial upper tail in log space.

use statrs::function::factorial::ln_binomial;

/// `P(X >= k)` for `X ~ Binomial(n, p)`.
///
/// Each term is evaluated as `exp(ln C(n, j) + j ln p + (n - j) ln(1 - p))`,
/// so table sizes in the hundreds never overflow. Terms are summed from
/// `j = n` down to `k`, which keeps the result non-increasing in `k` even
/// after rounding.
#[must_use]
pub fn upper_tail(n: u32, k: u32, p: f64) -> f64 {
    if k == 0 {
        return 1.0;
    }
    if k > n || p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }

    let ln_p = p.ln();
    let ln_q = (-p).ln_1p();

    let total: f64 = (k..=n)
        .rev()
        .map(|j| {
            let ln_term = ln_binomial(u64::from(n), u64::from(j))
                + f64::from(j) * ln_p
                + f64::from(n - j) * ln_q;
            ln_term.exp()
        })
        .sum();

    total.clamp(0.0, 1.0)
}
