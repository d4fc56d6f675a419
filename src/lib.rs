//! # barcode-svg
//!
//! A Rust library for turning text into barcodes rendered as self-contained SVG documents,
//! ready to be referenced from spreadsheet image formulas or web pages.
//!
//! `barcode-svg` encodes a value into a sequence of bar and space modules, scales that
//! sequence to a fixed target width and writes it out as SVG with an optional
//! human-readable label.
//!
//! ## Features
//!
//! - Encode text as Code 128 (code set B) or Code 39. `EAN13` is accepted as an alias of Code 128.
//! - Unknown format names fall back to Code 128 instead of failing.
//! - Render barcodes as SVG documents, PNG images, in-memory image buffers or console previews.
//! - Failures are rendered as a self-describing error SVG with a 400 status.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Example
//!
//! Generate a barcode document:
//!
//! ```rust
//! use barcode_svg::helper::generate;
//!
//! let response = generate("123456789", "CODE128", 2, 100, true);
//! assert_eq!(response.status, 200);
//! assert!(response.document.starts_with("<?xml"));
//! ```
//!
//! Apply the default parameters from a request:
//!
//! ```rust
//! use barcode_svg::request::EncodingRequest;
//!
//! let response = EncodingRequest::new("HELLO").generate();
//! assert_eq!(response.content_type, "image/svg+xml");
//! ```
//!
//! ## Modules
//!
//! - [`tables`]: Constant module patterns per symbology.
//! - [`barcode`]: Core barcode encoding functionality.
//! - [`layout`]: Canvas geometry.
//! - [`helper`]: Utilities for rendering barcodes in various formats.
//! - [`request`]: Request parameters and defaults.
//! - [`error`]: Error types.

pub mod barcode;
pub mod error;
pub mod helper;
pub mod layout;
pub mod request;
pub mod tables;

pub use error::BarcodeError;
