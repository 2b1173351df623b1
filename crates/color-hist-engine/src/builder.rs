//! Histogram construction
//!
//! One builder covers 1D, 2D, and 3D histograms: the grid is a flat
//! row-major buffer of num_bins^D bins and the multi-index↔flat-index
//! mapping is explicit, so binning and suppression are written once.

use tracing::{debug, instrument};

use color_hist_core::{Error, PixelSamples, Result};

use crate::types::{ChannelRange, ColorHistogram};

/// Default low-density clip factor
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Builds density-weighted color histograms from sampled pixels
///
/// ```rust
/// use color_hist_core::{ColorSpace, Image, PixelSampler};
/// use color_hist_engine::HistogramBuilder;
///
/// let image = Image::rgb(1, 4, vec![
///     0.0, 0.0, 0.0,  0.2, 0.2, 0.2,
///     0.8, 0.8, 0.8,  1.0, 1.0, 1.0,
/// ]).unwrap();
/// let mut sampler = PixelSampler::new(image);
/// let samples = sampler.samples(ColorSpace::Rgb).unwrap();
///
/// // 2D histogram over the R and G channels
/// let hist = HistogramBuilder::new(8)
///     .alpha(0.0)
///     .build(samples, &[0, 1])
///     .unwrap();
/// assert_eq!(hist.dims(), 2);
/// assert_eq!(hist.total_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct HistogramBuilder {
    num_bins: usize,
    alpha: f64,
    require_variance: bool,
}

impl HistogramBuilder {
    /// Create a builder with the given per-axis bin count
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins,
            alpha: DEFAULT_ALPHA,
            require_variance: false,
        }
    }

    /// Set the low-density clip factor (default 0.1)
    ///
    /// The suppression threshold is alpha times the mean count over
    /// all bins of the grid, empty ones included.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Treat a zero-variance channel as an error
    ///
    /// By default a degenerate channel routes every sample to bin 0
    /// along that axis; with this switch construction fails with
    /// [`Error::DegenerateRange`] instead.
    pub fn require_variance(mut self) -> Self {
        self.require_variance = true;
        self
    }

    /// Build a histogram over the selected channels of a sample set
    ///
    /// `channels` picks 1 to 3 of the projected channels, one per
    /// histogram dimension. Fails with `InvalidParameter` or
    /// `EmptyInput` on bad inputs; an instance either reaches its
    /// Ready state or is never usable.
    #[instrument(skip(self, samples), fields(n = samples.len(), dims = channels.len(), num_bins = self.num_bins, alpha = self.alpha))]
    pub fn build(&self, samples: &PixelSamples, channels: &[usize]) -> Result<ColorHistogram> {
        let dims = channels.len();
        self.validate(samples, channels)?;

        let total_bins = self
            .num_bins
            .checked_pow(dims as u32)
            .ok_or_else(|| Error::InvalidParameter(format!(
                "grid of {}^{dims} bins overflows",
                self.num_bins
            )))?;

        // Range discovery, per selected channel
        let ranges: Vec<ChannelRange> = channels
            .iter()
            .map(|&c| {
                // Samples are non-empty here, so a range always exists
                ChannelRange::from_values((0..samples.len()).map(|i| samples.value(i, c)))
                    .expect("non-empty sample set")
            })
            .collect();
        debug!(?ranges, "discovered channel ranges");

        if self.require_variance {
            for (d, range) in ranges.iter().enumerate() {
                if range.is_degenerate() {
                    return Err(Error::DegenerateRange {
                        channel: channels[d],
                        value: range.min,
                    });
                }
            }
        }

        // Accumulation: counts and RGB sums over the flat grid
        let mut counts = vec![0usize; total_bins];
        let mut colors = vec![[0.0f64; 3]; total_bins];
        let rgb = samples.rgb();

        for i in 0..samples.len() {
            let mut flat = 0usize;
            for (d, &c) in channels.iter().enumerate() {
                let idx = ranges[d].bin_index(samples.value(i, c), self.num_bins);
                flat = flat * self.num_bins + idx;
            }
            counts[flat] += 1;
            colors[flat][0] += rgb[i][0];
            colors[flat][1] += rgb[i][1];
            colors[flat][2] += rgb[i][2];
        }

        // Mean-color normalization
        for (count, color) in counts.iter().zip(colors.iter_mut()) {
            if *count > 0 {
                let n = *count as f64;
                color[0] /= n;
                color[1] /= n;
                color[2] /= n;
            }
        }

        // Suppression: one irreversible pass against the grid mean,
        // empty bins included in the mean
        let threshold = self.alpha * samples.len() as f64 / total_bins as f64;
        let mut suppressed = 0usize;
        for (count, color) in counts.iter_mut().zip(colors.iter_mut()) {
            if (*count as f64) < threshold && *count > 0 {
                *count = 0;
                *color = [0.0; 3];
                suppressed += 1;
            }
        }
        debug!(threshold, suppressed, "applied low-density suppression");

        Ok(ColorHistogram::new(
            samples.space(),
            channels.to_vec(),
            self.num_bins,
            ranges,
            counts,
            colors,
            samples.len(),
            threshold,
        ))
    }

    fn validate(&self, samples: &PixelSamples, channels: &[usize]) -> Result<()> {
        if self.num_bins < 1 {
            return Err(Error::invalid_bins(self.num_bins));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(Error::invalid_alpha(self.alpha));
        }
        let dims = channels.len();
        if !(1..=3).contains(&dims) {
            return Err(Error::invalid_dims(dims));
        }
        for &c in channels {
            if c > 2 {
                return Err(Error::InvalidParameter(format!(
                    "channel index {c} out of range (0..=2)"
                )));
            }
        }
        if samples.is_empty() {
            return Err(Error::empty_input("pixel sample set"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use color_hist_core::ColorSpace;

    fn samples_1d(values: &[f64]) -> PixelSamples {
        let max = values.iter().cloned().fold(f64::MIN, f64::max).max(1.0);
        let pixels: Vec<[f64; 3]> = values.iter().map(|&v| [v, 0.0, 0.0]).collect();
        let rgb: Vec<[f64; 3]> = values.iter().map(|&v| [v / max, 0.0, 0.0]).collect();
        PixelSamples::from_parts(ColorSpace::Rgb, pixels, rgb).unwrap()
    }

    #[test]
    fn test_uniform_1d_grid() {
        // Two samples per bin over [0, 3], no clipping
        let samples = samples_1d(&[0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        let hist = HistogramBuilder::new(4).alpha(0.0).build(&samples, &[0]).unwrap();

        assert_eq!(hist.total_count(), 8);
        assert_eq!(hist.suppression_threshold(), 0.0);
        assert_eq!(hist.populated_bin_indices(), vec![vec![0], vec![1], vec![2], vec![3]]);

        let coords = hist.bin_coordinates();
        for (i, coord) in coords.iter().enumerate() {
            assert_relative_eq!(coord[0], i as f64);
        }
        for density in hist.normalized_densities() {
            assert_relative_eq!(density, 1.0);
        }
    }

    #[test]
    fn test_count_conservation_without_clipping() {
        let samples = samples_1d(&[0.0, 0.1, 0.2, 0.5, 0.5, 0.9, 1.0]);
        let hist = HistogramBuilder::new(5).alpha(0.0).build(&samples, &[0]).unwrap();
        assert_eq!(hist.surviving_count(), hist.total_count());
    }

    #[test]
    fn test_mean_color_accumulation() {
        // Both samples land in bin 0; the stored color is their mean
        let pixels = vec![[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]];
        let rgb = vec![[0.2, 0.4, 0.6], [0.4, 0.6, 0.8]];
        let samples = PixelSamples::from_parts(ColorSpace::Rgb, pixels, rgb).unwrap();
        let hist = HistogramBuilder::new(2).alpha(0.0).build(&samples, &[0]).unwrap();

        let colors = hist.mean_colors();
        assert_eq!(colors.len(), 1);
        assert_relative_eq!(colors[0][0], 0.3);
        assert_relative_eq!(colors[0][1], 0.5);
        assert_relative_eq!(colors[0][2], 0.7);
    }

    #[test]
    fn test_suppression_zeroes_count_and_color() {
        // 2x2 grid: 20 samples in one cell, three singletons.
        // Threshold = 0.5 * 23/4 = 2.875, so the singletons go.
        let mut pixels = vec![[0.0, 0.0, 0.0]; 20];
        pixels.push([1.0, 0.0, 0.0]);
        pixels.push([0.0, 1.0, 0.0]);
        pixels.push([1.0, 1.0, 0.0]);
        let rgb = vec![[0.5, 0.5, 0.5]; 23];
        let samples = PixelSamples::from_parts(ColorSpace::Rgb, pixels, rgb).unwrap();

        let hist = HistogramBuilder::new(2).alpha(0.5).build(&samples, &[0, 1]).unwrap();
        assert_relative_eq!(hist.suppression_threshold(), 2.875);

        let bins = hist.populated_bins();
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].index, vec![0, 0]);
        assert_eq!(bins[0].count, 20);
        assert_relative_eq!(bins[0].density, 1.0);

        // Suppressed bins hold the zero vector
        for (count, color) in hist.counts().iter().zip(hist.colors()) {
            if *count == 0 {
                assert_eq!(*color, [0.0; 3]);
            }
        }
    }

    #[test]
    fn test_degenerate_channel_routes_to_bin_zero() {
        let pixels = vec![[0.5, 0.0, 0.0]; 4];
        let rgb = vec![[0.5, 0.5, 0.5]; 4];
        let samples = PixelSamples::from_parts(ColorSpace::Rgb, pixels, rgb).unwrap();

        let hist = HistogramBuilder::new(8).alpha(0.0).build(&samples, &[0]).unwrap();
        assert_eq!(hist.populated_bin_indices(), vec![vec![0]]);
        assert_relative_eq!(hist.bin_coordinates()[0][0], 0.5);
    }

    #[test]
    fn test_require_variance_rejects_degenerate() {
        let pixels = vec![[0.5, 0.0, 0.0]; 4];
        let rgb = vec![[0.5, 0.5, 0.5]; 4];
        let samples = PixelSamples::from_parts(ColorSpace::Rgb, pixels, rgb).unwrap();

        let err = HistogramBuilder::new(8)
            .require_variance()
            .build(&samples, &[0])
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateRange { channel: 0, .. }));
    }

    #[test]
    fn test_parameter_validation() {
        let samples = samples_1d(&[0.0, 1.0]);
        assert!(HistogramBuilder::new(0).build(&samples, &[0]).is_err());
        assert!(HistogramBuilder::new(4).alpha(-1.0).build(&samples, &[0]).is_err());
        assert!(HistogramBuilder::new(4).alpha(f64::NAN).build(&samples, &[0]).is_err());
        assert!(HistogramBuilder::new(4).build(&samples, &[]).is_err());
        assert!(HistogramBuilder::new(4).build(&samples, &[0, 1, 2, 0]).is_err());
        assert!(HistogramBuilder::new(4).build(&samples, &[3]).is_err());
    }

    #[test]
    fn test_single_bin_grid() {
        let samples = samples_1d(&[0.0, 0.5, 1.0]);
        let hist = HistogramBuilder::new(1).alpha(0.0).build(&samples, &[0]).unwrap();
        assert_eq!(hist.populated_bin_indices(), vec![vec![0]]);
        // Grid spacing is undefined with one bin; coordinate is the min
        assert_relative_eq!(hist.bin_coordinates()[0][0], 0.0);
    }

    #[test]
    fn test_row_major_traversal_order() {
        // Populate (0,1) and (1,0); row-major order puts (0,1) first
        let pixels = vec![[0.0, 1.0, 0.0], [1.0, 0.0, 0.0]];
        let rgb = vec![[0.5, 0.5, 0.5]; 2];
        let samples = PixelSamples::from_parts(ColorSpace::Rgb, pixels, rgb).unwrap();
        let hist = HistogramBuilder::new(2).alpha(0.0).build(&samples, &[0, 1]).unwrap();
        assert_eq!(hist.populated_bin_indices(), vec![vec![0, 1], vec![1, 0]]);
    }
}
