//! The six affine component functions.
//!
//! Every function has the shape `intercept + slope * driver`. Inputs are not
//! validated: non-finite arguments yield non-finite results.

/// Signature shared by all component functions: `(intercept, slope, driver)`.
pub type Evaluator = fn(f64, f64, f64) -> f64;

/// Evaluates `intercept + slope * driver`.
///
/// # Examples
///
/// ```
/// use gdp_core::calculations::linear_model::evaluate;
///
/// assert_eq!(evaluate(4.0, 0.8, 5.0), 8.0);
/// ```
pub fn evaluate(
    intercept: f64,
    slope: f64,
    driver: f64,
) -> f64 {
    intercept + slope * driver
}

/// Worker consumption: `C_t = a + ct * Yt`.
pub fn worker_consumption(
    a: f64,
    ct: f64,
    yt: f64,
) -> f64 {
    evaluate(a, ct, yt)
}

/// Capitalist consumption: `C_k = b + ck * Yk`.
pub fn capitalist_consumption(
    b: f64,
    ck: f64,
    yk: f64,
) -> f64 {
    evaluate(b, ck, yk)
}

/// Investment: `I = h + i * π`.
pub fn investment(
    h: f64,
    i: f64,
    pi: f64,
) -> f64 {
    evaluate(h, i, pi)
}

/// Government spending: `G = d + g * Rf`.
pub fn government(
    d: f64,
    g: f64,
    rf: f64,
) -> f64 {
    evaluate(d, g, rf)
}

/// Exports: `X = e + x * Yeu`.
pub fn exports(
    e: f64,
    x: f64,
    yeu: f64,
) -> f64 {
    evaluate(e, x, yeu)
}

/// Imports: `M = f + m * Ymex`.
pub fn imports(
    f: f64,
    m: f64,
    ymex: f64,
) -> f64 {
    evaluate(f, m, ymex)
}
