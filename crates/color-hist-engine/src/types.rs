//! Core types for color histogram grids

use std::fmt;

use color_hist_core::ColorSpace;

/// Per-channel [min, max] pair observed in the sample set
///
/// Always recomputed from the actual samples; the natural domain of a
/// color space is never assumed. Degenerate when max == min.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    pub min: f64,
    pub max: f64,
}

impl ChannelRange {
    /// Discover the range of one channel over a value iterator
    ///
    /// Returns None for an empty iterator.
    pub fn from_values(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut range: Option<ChannelRange> = None;
        for v in values {
            range = Some(match range {
                None => ChannelRange { min: v, max: v },
                Some(r) => ChannelRange {
                    min: r.min.min(v),
                    max: r.max.max(v),
                },
            });
        }
        range
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when the channel has zero variance (max == min)
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Max-inclusive linear quantization into [0, num_bins - 1]
    ///
    /// A value at min maps to bin 0 and a value at max maps to the last
    /// bin; bins are not half-open intervals anchored only at the low
    /// end. A degenerate range routes every value to bin 0.
    pub fn bin_index(&self, value: f64, num_bins: usize) -> usize {
        if num_bins <= 1 || self.is_degenerate() {
            return 0;
        }
        let scaled = (num_bins - 1) as f64 * (value - self.min) / self.span();
        let idx = scaled.floor() as i64;
        idx.clamp(0, (num_bins - 1) as i64) as usize
    }

    /// Map a bin index back to a color-space coordinate
    ///
    /// Inverse of [`Self::bin_index`] at the grid points: index 0 maps
    /// to min and index num_bins - 1 maps to max. With a single bin the
    /// grid spacing is undefined, so the coordinate is min.
    pub fn coordinate(&self, index: usize, num_bins: usize) -> f64 {
        if num_bins <= 1 {
            return self.min;
        }
        self.min + index as f64 * self.span() / (num_bins - 1) as f64
    }
}

impl fmt::Display for ChannelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.min, self.max)
    }
}

/// A populated bin of a built histogram, as seen by plot consumers
#[derive(Debug, Clone, PartialEq)]
pub struct GridBin {
    /// Per-dimension bin indices, each in [0, num_bins - 1]
    pub index: Vec<usize>,
    /// Color-space coordinates of the bin
    pub coordinate: Vec<f64>,
    /// Number of samples accumulated into the bin
    pub count: usize,
    /// Count normalized against the most populated bin, in (0, 1]
    pub density: f64,
    /// Mean RGB color of the bin's samples, clamped to [0, 1]
    pub mean_rgb: [f64; 3],
}

/// A built D-dimensional color histogram in its Ready state
///
/// Constructed once by [`crate::HistogramBuilder`] and immutable
/// afterward; every method here is a pure read. The grid is a flat
/// row-major buffer of num_bins^dims bins.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorHistogram {
    space: ColorSpace,
    channels: Vec<usize>,
    num_bins: usize,
    ranges: Vec<ChannelRange>,
    counts: Vec<usize>,
    colors: Vec<[f64; 3]>,
    total_count: usize,
    threshold: f64,
}

impl ColorHistogram {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        space: ColorSpace,
        channels: Vec<usize>,
        num_bins: usize,
        ranges: Vec<ChannelRange>,
        counts: Vec<usize>,
        colors: Vec<[f64; 3]>,
        total_count: usize,
        threshold: f64,
    ) -> Self {
        Self {
            space,
            channels,
            num_bins,
            ranges,
            counts,
            colors,
            total_count,
            threshold,
        }
    }

    /// The color space the samples were projected into
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// The selected channels, one per histogram dimension
    pub fn channels(&self) -> &[usize] {
        &self.channels
    }

    /// Axis labels for the selected channels
    pub fn channel_labels(&self) -> Vec<&'static str> {
        let labels = self.space.channel_labels();
        self.channels.iter().map(|&c| labels[c]).collect()
    }

    /// Number of histogram dimensions (1, 2, or 3)
    pub fn dims(&self) -> usize {
        self.ranges.len()
    }

    /// Number of bins along each dimension
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Number of samples accumulated before suppression
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// The density threshold applied by the suppression pass
    pub fn suppression_threshold(&self) -> f64 {
        self.threshold
    }

    /// The channel range used along one dimension
    pub fn channel_range(&self, dim: usize) -> ChannelRange {
        self.ranges[dim]
    }

    /// All channel ranges, one per dimension
    pub fn channel_ranges(&self) -> &[ChannelRange] {
        &self.ranges
    }

    /// Sum of bin counts after suppression
    pub fn surviving_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Decode a flat grid offset into per-dimension indices
    fn multi_index(&self, mut flat: usize) -> Vec<usize> {
        let dims = self.dims();
        let mut index = vec![0usize; dims];
        for d in (0..dims).rev() {
            index[d] = flat % self.num_bins;
            flat /= self.num_bins;
        }
        index
    }

    /// Flat offsets of populated bins, in row-major traversal order
    fn populated_flat(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(i, _)| i)
    }

    /// Indices of bins with count > 0, as D-tuples in row-major order
    pub fn populated_bin_indices(&self) -> Vec<Vec<usize>> {
        self.populated_flat().map(|i| self.multi_index(i)).collect()
    }

    /// Color-space coordinates of the populated bins
    pub fn bin_coordinates(&self) -> Vec<Vec<f64>> {
        self.populated_flat()
            .map(|flat| {
                self.multi_index(flat)
                    .iter()
                    .zip(&self.ranges)
                    .map(|(&idx, range)| range.coordinate(idx, self.num_bins))
                    .collect()
            })
            .collect()
    }

    /// Densities of the populated bins, normalized against the mode
    ///
    /// Values lie in (0, 1]; the most populated bin is exactly 1.0.
    pub fn normalized_densities(&self) -> Vec<f64> {
        let max_count = self
            .populated_flat()
            .map(|i| self.counts[i])
            .max()
            .unwrap_or(0);
        if max_count == 0 {
            return vec![];
        }
        self.populated_flat()
            .map(|i| self.counts[i] as f64 / max_count as f64)
            .collect()
    }

    /// Mean RGB colors of the populated bins, clamped to [0, 1]
    pub fn mean_colors(&self) -> Vec<[f64; 3]> {
        self.populated_flat()
            .map(|i| {
                let c = self.colors[i];
                [
                    c[0].clamp(0.0, 1.0),
                    c[1].clamp(0.0, 1.0),
                    c[2].clamp(0.0, 1.0),
                ]
            })
            .collect()
    }

    /// All populated bins as full records, in row-major order
    ///
    /// Convenience aggregate combining indices, coordinates, counts,
    /// densities, and mean colors for plot consumers.
    pub fn populated_bins(&self) -> Vec<GridBin> {
        let indices = self.populated_bin_indices();
        let coordinates = self.bin_coordinates();
        let densities = self.normalized_densities();
        let colors = self.mean_colors();
        let counts: Vec<usize> = self.populated_flat().map(|i| self.counts[i]).collect();

        indices
            .into_iter()
            .zip(coordinates)
            .zip(densities)
            .zip(colors)
            .zip(counts)
            .map(|((((index, coordinate), density), mean_rgb), count)| GridBin {
                index,
                coordinate,
                count,
                density,
                mean_rgb,
            })
            .collect()
    }

    /// Flat row-major bin counts, including empty and suppressed bins
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Flat row-major mean colors, unclamped; zero for empty bins
    pub fn colors(&self) -> &[[f64; 3]] {
        &self.colors
    }
}

impl fmt::Display for ColorHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ColorHistogram({}D {} grid, {} bins/axis, n={})",
            self.dims(),
            self.space,
            self.num_bins,
            self.total_count
        )
    }
}
