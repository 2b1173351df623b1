//! Color space selection and projector dispatch
//!
//! The supported color spaces form a closed three-way domain. Every
//! conversion goes through the (forward, inverse) projector pair
//! returned by [`ColorSpace::projector`], so no other code branches on
//! the color space when converting pixels.

use std::fmt;

use crate::hsv::{hsv_pixels_to_rgb, rgb_pixels_to_hsv};
use crate::lab::{lab_pixels_to_rgb, rgb_pixels_to_lab};

/// Pure, shape-preserving elementwise projection over pixel triples
pub type ProjectFn = fn(&[[f64; 3]]) -> Vec<[f64; 3]>;

/// A color space the histogram engine can bin over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// RGB, all channels in [0, 1]
    Rgb,
    /// CIE L*a*b*, L in [0, 100], a and b roughly [-128, 128]
    Lab,
    /// HSV, H in degrees [0, 360), S and V in [0, 1]
    Hsv,
}

fn identity(pixels: &[[f64; 3]]) -> Vec<[f64; 3]> {
    pixels.to_vec()
}

impl ColorSpace {
    /// All supported color spaces
    pub const ALL: [ColorSpace; 3] = [ColorSpace::Rgb, ColorSpace::Lab, ColorSpace::Hsv];

    /// The (forward, inverse) conversion pair for this space
    ///
    /// Forward maps RGB into this space; inverse maps back to RGB.
    /// Both are pure functions over slices of triples.
    pub fn projector(self) -> (ProjectFn, ProjectFn) {
        match self {
            ColorSpace::Rgb => (identity, identity),
            ColorSpace::Lab => (rgb_pixels_to_lab, lab_pixels_to_rgb),
            ColorSpace::Hsv => (rgb_pixels_to_hsv, hsv_pixels_to_rgb),
        }
    }

    /// Project RGB pixels into this color space
    pub fn from_rgb(self, pixels: &[[f64; 3]]) -> Vec<[f64; 3]> {
        (self.projector().0)(pixels)
    }

    /// Project pixels in this color space back to RGB
    pub fn to_rgb(self, pixels: &[[f64; 3]]) -> Vec<[f64; 3]> {
        (self.projector().1)(pixels)
    }

    /// Axis labels for this space's three channels
    pub fn channel_labels(self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgb => ["R", "G", "B"],
            ColorSpace::Lab => ["L", "a", "b"],
            ColorSpace::Hsv => ["H", "S", "V"],
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Lab => "Lab",
            ColorSpace::Hsv => "hsv",
        };
        write!(f, "{name}")
    }
}
