//! Deterministic pixel sampling
//!
//! Bounds histogram cost by taking a fixed-stride systematic sample of
//! the image: the row-major flattening is walked and every stride-th
//! pixel kept, where `stride = max(1, total_pixels / target)`. The same
//! image and parameters always yield the same sample set, in source
//! row-major order. Projection results are memoized per color space
//! within one sampler instance.

use std::collections::HashMap;

use tracing::debug;

use crate::colorspace::ColorSpace;
use crate::error::Result;
use crate::image::Image;

/// Default number of pixels to sample per image
pub const DEFAULT_TARGET_PIXELS: usize = 1000;

/// A sampled pixel set: projected values paired with source RGB
///
/// `pixels` holds the triples in the sample's color space; `rgb` holds
/// the parallel source triples in [0, 1]. Both are in source row-major
/// order and immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSamples {
    space: ColorSpace,
    pixels: Vec<[f64; 3]>,
    rgb: Vec<[f64; 3]>,
}

impl PixelSamples {
    /// Pair pre-projected pixel values with their source RGB triples
    ///
    /// For callers that already hold pixel data outside the sampler
    /// path. The two slices must be parallel and non-empty.
    pub fn from_parts(
        space: ColorSpace,
        pixels: Vec<[f64; 3]>,
        rgb: Vec<[f64; 3]>,
    ) -> Result<Self> {
        if pixels.is_empty() {
            return Err(crate::Error::empty_input("pixel sample set"));
        }
        if pixels.len() != rgb.len() {
            return Err(crate::Error::InvalidParameter(format!(
                "projected and rgb pixel counts differ: {} vs {}",
                pixels.len(),
                rgb.len()
            )));
        }
        Ok(Self { space, pixels, rgb })
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Projected pixel triples in this sample's color space
    pub fn pixels(&self) -> &[[f64; 3]] {
        &self.pixels
    }

    /// Source RGB triples, parallel to [`Self::pixels`]
    pub fn rgb(&self) -> &[[f64; 3]] {
        &self.rgb
    }

    /// One channel of one projected pixel
    pub fn value(&self, index: usize, channel: usize) -> f64 {
        self.pixels[index][channel]
    }
}

/// Samples an image into bounded per-color-space pixel sets
///
/// The per-color-space cache is private to one sampler instance and is
/// accessed through `&mut self`; it is not meant to be shared across
/// threads. Compute each needed color space once before any parallel
/// fan-out.
#[derive(Debug)]
pub struct PixelSampler {
    image: Image,
    target_pixels: usize,
    cache: HashMap<ColorSpace, PixelSamples>,
}

impl PixelSampler {
    /// Create a sampler with the default target of 1000 pixels
    pub fn new(image: Image) -> Self {
        Self::with_target(image, DEFAULT_TARGET_PIXELS)
    }

    /// Create a sampler with an explicit target pixel count
    pub fn with_target(image: Image, target_pixels: usize) -> Self {
        Self {
            image,
            target_pixels: target_pixels.max(1),
            cache: HashMap::new(),
        }
    }

    /// The systematic sampling stride for this image and target
    pub fn stride(&self) -> usize {
        (self.image.total_pixels() / self.target_pixels).max(1)
    }

    /// Sample the image in the requested color space
    ///
    /// Grayscale images are expanded by channel replication before
    /// projection. Repeated requests for the same space return the
    /// memoized result.
    pub fn samples(&mut self, space: ColorSpace) -> Result<&PixelSamples> {
        if !self.cache.contains_key(&space) {
            debug!(%space, stride = self.stride(), "projecting sampled pixels");
            let samples = self.project(space)?;
            self.cache.insert(space, samples);
        } else {
            debug!(%space, "pixel sample cache hit");
        }
        Ok(&self.cache[&space])
    }

    fn project(&self, space: ColorSpace) -> Result<PixelSamples> {
        let stride = self.stride();
        let rgb: Vec<[f64; 3]> = (0..self.image.total_pixels())
            .step_by(stride)
            .map(|i| self.image.rgb_pixel(i))
            .collect();
        let pixels = space.from_rgb(&rgb);
        PixelSamples::from_parts(space, pixels, rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_image(pixels: usize) -> Image {
        let data: Vec<f64> = (0..pixels).map(|i| i as f64 / pixels as f64).collect();
        Image::grayscale(1, pixels, data).unwrap()
    }

    #[test]
    fn test_stride_bounds_sample_size() {
        let mut sampler = PixelSampler::with_target(ramp_image(1000), 100);
        assert_eq!(sampler.stride(), 10);
        let samples = sampler.samples(ColorSpace::Rgb).unwrap();
        assert_eq!(samples.len(), 100);
    }

    #[test]
    fn test_stride_floors_at_one() {
        // Fewer pixels than the target: every pixel is kept
        let mut sampler = PixelSampler::with_target(ramp_image(10), 1000);
        assert_eq!(sampler.stride(), 1);
        assert_eq!(sampler.samples(ColorSpace::Rgb).unwrap().len(), 10);
    }

    #[test]
    fn test_sampling_is_deterministic_and_ordered() {
        let image = ramp_image(100);
        let mut a = PixelSampler::with_target(image.clone(), 25);
        let mut b = PixelSampler::with_target(image, 25);
        let sa = a.samples(ColorSpace::Lab).unwrap().clone();
        let sb = b.samples(ColorSpace::Lab).unwrap().clone();
        assert_eq!(sa, sb);

        // Source row-major order: the rgb values are non-decreasing
        // along a ramp image
        let rgb = sa.rgb();
        for pair in rgb.windows(2) {
            assert!(pair[0][0] <= pair[1][0]);
        }
    }

    #[test]
    fn test_cache_is_per_space() {
        let mut sampler = PixelSampler::with_target(ramp_image(100), 50);
        let rgb = sampler.samples(ColorSpace::Rgb).unwrap().clone();
        let lab = sampler.samples(ColorSpace::Lab).unwrap().clone();
        let rgb_again = sampler.samples(ColorSpace::Rgb).unwrap().clone();
        assert_eq!(rgb, rgb_again);
        assert_eq!(lab.space(), ColorSpace::Lab);
        assert_ne!(lab.pixels()[1], rgb.pixels()[1]);
        // Parallel rgb triples are identical across spaces
        assert_eq!(lab.rgb(), rgb.rgb());
    }

    #[test]
    fn test_grayscale_expands_to_rgb() {
        let mut sampler = PixelSampler::new(ramp_image(4));
        let samples = sampler.samples(ColorSpace::Rgb).unwrap();
        for px in samples.pixels() {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn test_from_parts_validation() {
        let px = vec![[0.0, 0.0, 0.0]];
        assert!(PixelSamples::from_parts(ColorSpace::Rgb, vec![], vec![]).is_err());
        assert!(PixelSamples::from_parts(ColorSpace::Rgb, px.clone(), vec![]).is_err());
        assert!(PixelSamples::from_parts(ColorSpace::Rgb, px.clone(), px).is_ok());
    }
}
