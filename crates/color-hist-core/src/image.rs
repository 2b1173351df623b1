//! Owned float image buffer
//!
//! A minimal row-major buffer of pixel values in [0, 1]. Decoding and
//! 8-bit conversion are external concerns; this type only validates
//! shape and exposes pixels in source order.

use crate::error::{Error, Result};

/// A grayscale or RGB image with f64 samples in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<f64>,
}

impl Image {
    /// Create a grayscale image from row-major intensity data
    pub fn grayscale(height: usize, width: usize, data: Vec<f64>) -> Result<Self> {
        Self::with_channels(height, width, 1, data)
    }

    /// Create an RGB image from row-major interleaved data
    pub fn rgb(height: usize, width: usize, data: Vec<f64>) -> Result<Self> {
        Self::with_channels(height, width, 3, data)
    }

    fn with_channels(height: usize, width: usize, channels: usize, data: Vec<f64>) -> Result<Self> {
        let expected = height * width * channels;
        if expected == 0 {
            return Err(Error::empty_input("image has no pixels"));
        }
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "image data length {} does not match {height}x{width}x{channels}",
                data.len()
            )));
        }
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_grayscale(&self) -> bool {
        self.channels == 1
    }

    /// Number of pixels (height x width)
    pub fn total_pixels(&self) -> usize {
        self.height * self.width
    }

    /// Pixel at flat row-major position, as an RGB triple
    ///
    /// Grayscale pixels are expanded by channel replication.
    pub fn rgb_pixel(&self, index: usize) -> [f64; 3] {
        if self.channels == 1 {
            let v = self.data[index];
            [v, v, v]
        } else {
            let base = index * 3;
            [self.data[base], self.data[base + 1], self.data[base + 2]]
        }
    }
}
