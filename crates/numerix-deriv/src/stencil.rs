//! Finite-difference stencils.
//!
//! Each stencil is a zero-sized type so the algorithm is picked at compile
//! time: `diff::<Central5Point, _>(f, x, h)`.
//!
//! | Stencil | Derivative | Error |
//! |---------|------------|-------|
//! | `Central3Point` | f' | O(h²) |
//! | `Central5Point` | f' | O(h⁴) |
//! | `CentralRichardson` | f' | O(h⁴) |
//! | `ForwardRichardson` / `BackwardRichardson` | f' | O(h⁴) |
//! | `Forward2Point` / `Backward2Point` | f' | O(h) |
//! | `Forward3Point` / `Backward3Point` | f' | O(h²) |
//! | `Forward4Point` / `Backward4Point` | f' | O(h³) |
//! | `SecondCentral3Point` | f'' | O(h²) |
//! | `SecondCentral5Point` | f'' | O(h⁴) |
//! | `SecondForward3Point` / `SecondBackward3Point` | f'' | O(h) |
//! | `SecondForward4Point` / `SecondBackward4Point` | f'' | O(h²) |
//!
//! The Richardson stencils back [`central`](crate::central),
//! [`forward`](crate::forward) and [`backward`](crate::backward). The
//! one-sided ones never sample `f` at `x` itself.

/// A finite-difference formula evaluated at `x` with step `h`.
pub trait Stencil {
    /// Applies the stencil to `f` at `x`.
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64;
}

/// First derivative, central, 3 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Central3Point;

impl Stencil for Central3Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (f(x + h) - f(x - h)) / (2.0 * h)
    }
}

/// First derivative, central, 5 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Central5Point;

impl Stencil for Central5Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (-f(x + 2.0 * h) + 8.0 * f(x + h) - 8.0 * f(x - h) + f(x - 2.0 * h)) / (12.0 * h)
    }
}

/// First derivative, central Richardson extrapolation of two 3-point differences.
#[derive(Clone, Copy, Debug, Default)]
pub struct CentralRichardson;

impl Stencil for CentralRichardson {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (4.0 * (f(x + h) - f(x - h)) - 0.5 * (f(x + 2.0 * h) - f(x - 2.0 * h))) / (6.0 * h)
    }
}

/// Weighted successive differences `d1..d4` shared by the one-sided
/// Richardson stencils.
fn richardson_one_sided(d1: f64, d2: f64, d3: f64, d4: f64) -> f64 {
    22.0 * (d4 - d3) - 62.0 * (d3 - d2) + 52.0 * (d2 - d1)
}

/// First derivative, forward Richardson extrapolation on `x + h .. x + 4h`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardRichardson;

impl Stencil for ForwardRichardson {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        richardson_one_sided(f(x + h), f(x + 2.0 * h), f(x + 3.0 * h), f(x + 4.0 * h)) / (12.0 * h)
    }
}

/// First derivative, backward Richardson extrapolation on `x - 4h .. x - h`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BackwardRichardson;

impl Stencil for BackwardRichardson {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        -richardson_one_sided(f(x - h), f(x - 2.0 * h), f(x - 3.0 * h), f(x - 4.0 * h)) / (12.0 * h)
    }
}

/// First derivative, forward, 2 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Forward2Point;

impl Stencil for Forward2Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (f(x + h) - f(x)) / h
    }
}

/// First derivative, forward, 3 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Forward3Point;

impl Stencil for Forward3Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (-f(x + 2.0 * h) + 4.0 * f(x + h) - 3.0 * f(x)) / (2.0 * h)
    }
}

/// First derivative, forward, 4 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Forward4Point;

impl Stencil for Forward4Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (-11.0 * f(x) + 18.0 * f(x + h) - 9.0 * f(x + 2.0 * h) + 2.0 * f(x + 3.0 * h)) / (6.0 * h)
    }
}

/// First derivative, backward, 2 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Backward2Point;

impl Stencil for Backward2Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (f(x) - f(x - h)) / h
    }
}

/// First derivative, backward, 3 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Backward3Point;

impl Stencil for Backward3Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (3.0 * f(x) - 4.0 * f(x - h) + f(x - 2.0 * h)) / (2.0 * h)
    }
}

/// First derivative, backward, 4 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Backward4Point;

impl Stencil for Backward4Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (11.0 * f(x) - 18.0 * f(x - h) + 9.0 * f(x - 2.0 * h) - 2.0 * f(x - 3.0 * h)) / (6.0 * h)
    }
}

/// Second derivative, central, 3 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondCentral3Point;

impl Stencil for SecondCentral3Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (f(x + h) - 2.0 * f(x) + f(x - h)) / (h * h)
    }
}

/// Second derivative, central, 5 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondCentral5Point;

impl Stencil for SecondCentral5Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (-f(x + 2.0 * h) + 16.0 * f(x + h) - 30.0 * f(x) + 16.0 * f(x - h) - f(x - 2.0 * h))
            / (12.0 * h * h)
    }
}

/// Second derivative, forward, 3 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondForward3Point;

impl Stencil for SecondForward3Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (f(x + 2.0 * h) - 2.0 * f(x + h) + f(x)) / (h * h)
    }
}

/// Second derivative, forward, 4 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondForward4Point;

impl Stencil for SecondForward4Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (2.0 * f(x) - 5.0 * f(x + h) + 4.0 * f(x + 2.0 * h) - f(x + 3.0 * h)) / (h * h)
    }
}

/// Second derivative, backward, 3 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondBackward3Point;

impl Stencil for SecondBackward3Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (f(x) - 2.0 * f(x - h) + f(x - 2.0 * h)) / (h * h)
    }
}

/// Second derivative, backward, 4 points.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondBackward4Point;

impl Stencil for SecondBackward4Point {
    fn apply<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
        (2.0 * f(x) - 5.0 * f(x - h) + 4.0 * f(x - 2.0 * h) - f(x - 3.0 * h)) / (h * h)
    }
}
