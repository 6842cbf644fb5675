//! Closed-form vertical motion of a rocket burning propellant at a constant rate
//! in a uniform gravitational field.
//!
//! `k == 0` is ballistic flight. For powered flight the elapsed time must stay
//! below propellant exhaustion, `m0 - k * t > 0`.

pub fn velocity(t: f64, v0: f64, m0: f64, u: f64, k: f64, g: f64) -> f64 {
    let v = v0 - g * t;
    if k == 0.0 {
        return v;
    }
    v + u * (m0 / (m0 - k * t)).ln()
}

pub fn altitude(t: f64, r0: f64, v0: f64, m0: f64, u: f64, k: f64, g: f64) -> f64 {
    let r = r0 + v0 * t - g * t * t / 2.0;
    if k == 0.0 {
        return r;
    }
    r + u * ((m0 / k - t) * ((m0 - k * t) / m0).ln() + t)
}

pub fn ballistic_impact_time(r0: f64, v0: f64, g: f64) -> f64 {
    (v0 + (v0 * v0 + 2.0 * g * r0).sqrt()) / g
}
