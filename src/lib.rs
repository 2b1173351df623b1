//! Density-weighted color histograms for image visualization
//!
//! Computes 1D, 2D, and 3D histograms over the channels of a color
//! space (RGB, Lab, or HSV) from a deterministic sample of image
//! pixels, and exposes the populated bins — coordinates, normalized
//! densities, and representative mean colors — for external plotting.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`color_hist_core`]: color spaces and conversions, the image
//!   buffer, and the fixed-stride pixel sampler
//! - [`color_hist_engine`]: histogram construction, suppression,
//!   queries, and density/tick encoding for plot consumers
//!
//! # Examples
//!
//! ```rust
//! use color_hist::{ColorSpace, HistogramBuilder, Image, PixelSampler};
//!
//! // A small synthetic gradient image
//! let (h, w) = (16, 16);
//! let mut data = Vec::with_capacity(h * w * 3);
//! for y in 0..h {
//!     for x in 0..w {
//!         data.push(x as f64 / (w - 1) as f64);
//!         data.push(y as f64 / (h - 1) as f64);
//!         data.push(0.5);
//!     }
//! }
//! let image = Image::rgb(h, w, data).unwrap();
//!
//! // Sample once, then bin the L and a channels of Lab
//! let mut sampler = PixelSampler::new(image);
//! let samples = sampler.samples(ColorSpace::Lab).unwrap();
//! let hist = HistogramBuilder::new(16).alpha(0.1).build(samples, &[0, 1]).unwrap();
//!
//! assert_eq!(hist.dims(), 2);
//! for bin in hist.populated_bins() {
//!     assert!(bin.density > 0.0 && bin.density <= 1.0);
//! }
//! ```

pub use color_hist_core::{
    ColorSpace, Error, Image, PixelSampler, PixelSamples, ProjectFn, Result,
    DEFAULT_TARGET_PIXELS,
};
pub use color_hist_engine::{
    encode, histogram_1d, histogram_2d, histogram_3d, ChannelRange, ColorHistogram, GridBin,
    HistogramBuilder, DEFAULT_ALPHA,
};
