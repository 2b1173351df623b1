//! HSV (hue-saturation-value) color space conversions
//!
//! H is in degrees [0, 360), S and V in [0, 1]. Elementwise and shape
//! preserving over slices of pixel triples.

/// Convert a single RGB triple in [0, 1] to HSV
#[inline]
pub fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let r = rgb[0].clamp(0.0, 1.0);
    let g = rgb[1].clamp(0.0, 1.0);
    let b = rgb[2].clamp(0.0, 1.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;

    // Achromatic case
    if delta < 1e-12 {
        return [0.0, 0.0, v];
    }

    let s = delta / max;

    let h = if (max - r).abs() < 1e-12 {
        let mut h = (g - b) / delta;
        if g < b {
            h += 6.0;
        }
        h * 60.0
    } else if (max - g).abs() < 1e-12 {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    [h % 360.0, s, v]
}

/// Convert a single HSV triple back to RGB in [0, 1]
#[inline]
pub fn hsv_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = hsv;
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    // Achromatic case
    if s < 1e-12 {
        return [v, v, v];
    }

    let h = h.rem_euclid(360.0) / 60.0;
    let sector = h.floor() as u32 % 6;
    let f = h - h.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Convert a slice of RGB triples to HSV (for batch processing)
pub fn rgb_pixels_to_hsv(pixels: &[[f64; 3]]) -> Vec<[f64; 3]> {
    pixels.iter().map(|&px| rgb_to_hsv(px)).collect()
}

/// Convert a slice of HSV triples back to RGB (for batch processing)
pub fn hsv_pixels_to_rgb(pixels: &[[f64; 3]]) -> Vec<[f64; 3]> {
    pixels.iter().map(|&px| hsv_to_rgb(px)).collect()
}
