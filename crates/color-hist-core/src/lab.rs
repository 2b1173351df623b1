//! CIE L*a*b* color space conversions
//!
//! Elementwise, shape-preserving conversions between RGB triples in
//! [0, 1] and Lab triples (L in [0, 100], a and b roughly [-128, 128]).
//! Histogram binning never assumes these natural domains; channel
//! ranges are always recomputed from the actual sample set.

/// D65 standard illuminant reference white point
const D65_X: f64 = 0.95047;
const D65_Y: f64 = 1.00000;
const D65_Z: f64 = 1.08883;

/// sRGB to XYZ matrix (D65)
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ to sRGB matrix (D65)
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// Lab f(t) function
#[inline]
fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Lab f^-1(t) inverse function
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;

    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// Convert a single RGB triple in [0, 1] to CIE Lab (D65 illuminant)
#[inline]
pub fn rgb_to_lab(rgb: [f64; 3]) -> [f64; 3] {
    let r = rgb[0].max(0.0);
    let g = rgb[1].max(0.0);
    let b = rgb[2].max(0.0);

    let m = &SRGB_TO_XYZ;
    let x = m[0][0] * r + m[0][1] * g + m[0][2] * b;
    let y = m[1][0] * r + m[1][1] * g + m[1][2] * b;
    let z = m[2][0] * r + m[2][1] * g + m[2][2] * b;

    // Normalize by reference white
    let fx = lab_f(x / D65_X);
    let fy = lab_f(y / D65_Y);
    let fz = lab_f(z / D65_Z);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    [l, a, b]
}

/// Convert a single CIE Lab triple back to RGB (D65 illuminant)
///
/// Out-of-gamut colors may land outside [0, 1]; consumers clamp where
/// a displayable color is required.
#[inline]
pub fn lab_to_rgb(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;

    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let x = D65_X * lab_f_inv(fx);
    let y = D65_Y * lab_f_inv(fy);
    let z = D65_Z * lab_f_inv(fz);

    let m = &XYZ_TO_SRGB;
    [
        m[0][0] * x + m[0][1] * y + m[0][2] * z,
        m[1][0] * x + m[1][1] * y + m[1][2] * z,
        m[2][0] * x + m[2][1] * y + m[2][2] * z,
    ]
}

/// Convert a slice of RGB triples to Lab (for batch processing)
pub fn rgb_pixels_to_lab(pixels: &[[f64; 3]]) -> Vec<[f64; 3]> {
    pixels.iter().map(|&px| rgb_to_lab(px)).collect()
}

/// Convert a slice of Lab triples back to RGB (for batch processing)
pub fn lab_pixels_to_rgb(pixels: &[[f64; 3]]) -> Vec<[f64; 3]> {
    pixels.iter().map(|&px| lab_to_rgb(px)).collect()
}
