//! N-dimensional color histogram construction and density encoding
//!
//! One generic engine covers 1D, 2D, and 3D histograms over sampled
//! image pixels: channel ranges are discovered from the data, samples
//! are quantized into a flat row-major grid of num_bins^D bins with
//! per-bin counts and mean RGB colors, and a single low-density
//! suppression pass zeroes bins below alpha times the grid-mean count.
//! The built [`ColorHistogram`] is immutable; its query methods feed
//! external plot consumers, together with the [`encode`] helpers for
//! sizes, ticks, and limits.
//!
//! # Examples
//!
//! ```rust
//! use color_hist_core::{ColorSpace, Image, PixelSampler};
//! use color_hist_engine::{encode, HistogramBuilder};
//!
//! let image = Image::rgb(2, 2, vec![
//!     1.0, 0.0, 0.0,  0.9, 0.1, 0.0,
//!     0.0, 0.0, 1.0,  0.1, 0.1, 0.9,
//! ]).unwrap();
//!
//! let mut sampler = PixelSampler::new(image);
//! let samples = sampler.samples(ColorSpace::Lab).unwrap();
//!
//! // 3D histogram over all Lab channels
//! let hist = HistogramBuilder::new(16).alpha(0.3).build(samples, &[0, 1, 2]).unwrap();
//!
//! for bin in hist.populated_bins() {
//!     let size = encode::size_for(bin.density, 10.0, 100.0);
//!     println!("{:?} -> density {:.2}, size {:.1}", bin.coordinate, bin.density, size);
//! }
//! ```

pub mod builder;
pub mod encode;
pub mod types;

pub use builder::{HistogramBuilder, DEFAULT_ALPHA};
pub use types::{ChannelRange, ColorHistogram, GridBin};

use color_hist_core::{PixelSamples, Result};

// Convenience functions
/// Build a 1D histogram over one channel of a sample set
pub fn histogram_1d(
    samples: &PixelSamples,
    channel: usize,
    num_bins: usize,
    alpha: f64,
) -> Result<ColorHistogram> {
    HistogramBuilder::new(num_bins).alpha(alpha).build(samples, &[channel])
}

/// Build a 2D histogram over two channels of a sample set
pub fn histogram_2d(
    samples: &PixelSamples,
    channels: [usize; 2],
    num_bins: usize,
    alpha: f64,
) -> Result<ColorHistogram> {
    HistogramBuilder::new(num_bins).alpha(alpha).build(samples, &channels)
}

/// Build a 3D histogram over all three channels of a sample set
pub fn histogram_3d(samples: &PixelSamples, num_bins: usize, alpha: f64) -> Result<ColorHistogram> {
    HistogramBuilder::new(num_bins).alpha(alpha).build(samples, &[0, 1, 2])
}
