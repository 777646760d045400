//! RGB/HSV conversion and colour interpolation for heat maps.
//!
//! Hue is in degrees `[0, 360)`, saturation and value in percent `[0, 100]`.

use libm::floor;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// HSV colour with hue in degrees and saturation/value in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

pub const RED: Rgb = Rgb(255, 0, 0);
pub const GREEN: Rgb = Rgb(0, 255, 0);

pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.0 as f64 / 255.0;
    let g = rgb.1 as f64 / 255.0;
    let b = rgb.2 as f64 / 255.0;

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let diff = cmax - cmin;

    let h = if diff == 0.0 {
        0.0
    } else if cmax == r {
        (60.0 * ((g - b) / diff) + 360.0) % 360.0
    } else if cmax == g {
        (60.0 * ((b - r) / diff) + 120.0) % 360.0
    } else {
        (60.0 * ((r - g) / diff) + 240.0) % 360.0
    };
    let s = if cmax == 0.0 { 0.0 } else { diff / cmax * 100.0 };
    Hsv { h, s, v: cmax * 100.0 }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.h / 360.0;
    let s = hsv.s / 100.0;
    let v = hsv.v / 100.0;

    let (r, g, b) = if s == 0.0 {
        (v, v, v)
    } else {
        let sector = floor(h * 6.0);
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };
    // Truncation, not rounding.
    Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Interpolate from `a` (t = 0) to `b` (t = 1) through HSV space.
/// `t` is clamped to `[0, 1]`.
pub fn lerp_hsv(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let ha = rgb_to_hsv(a);
    let hb = rgb_to_hsv(b);
    hsv_to_rgb(Hsv {
        h: ha.h * (1.0 - t) + hb.h * t,
        s: ha.s * (1.0 - t) + hb.s * t,
        v: ha.v * (1.0 - t) + hb.v * t,
    })
}
