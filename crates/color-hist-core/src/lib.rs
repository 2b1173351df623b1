//! Shared primitives for density-weighted color histograms
//!
//! This crate provides the pieces the histogram engine builds on:
//!
//! - A closed [`ColorSpace`] variant over RGB, Lab, and HSV, with
//!   pure (forward, inverse) projector pairs
//! - RGB↔Lab and RGB↔HSV conversions, elementwise and shape preserving
//! - An owned float [`Image`] buffer for grayscale and RGB data
//! - A deterministic fixed-stride [`PixelSampler`] producing
//!   [`PixelSamples`] — projected pixel triples paired with their
//!   source RGB values
//! - The unified [`Error`] type shared across the workspace
//!
//! # Examples
//!
//! ```rust
//! use color_hist_core::{ColorSpace, Image, PixelSampler};
//!
//! // A tiny 2x2 RGB image, values in [0, 1]
//! let image = Image::rgb(2, 2, vec![
//!     1.0, 0.0, 0.0,  0.0, 1.0, 0.0,
//!     0.0, 0.0, 1.0,  0.5, 0.5, 0.5,
//! ]).unwrap();
//!
//! let mut sampler = PixelSampler::new(image);
//! let samples = sampler.samples(ColorSpace::Lab).unwrap();
//! assert_eq!(samples.len(), 4);
//! assert_eq!(samples.pixels().len(), samples.rgb().len());
//! ```

pub mod colorspace;
pub mod error;
pub mod hsv;
pub mod image;
pub mod lab;
pub mod sampler;

pub use colorspace::{ColorSpace, ProjectFn};
pub use error::{Error, Result};
pub use image::Image;
pub use sampler::{PixelSampler, PixelSamples, DEFAULT_TARGET_PIXELS};
