//! Temple Site Library
//!
//! This library provides the building blocks for the terminal rendition of
//! the DaLinSi temple page: the embedded trilingual catalog, the section
//! renderers, the newsletter signup flow, and the Tao verse carousel.

pub mod app;
pub mod content;
pub mod newsletter;
pub mod quotes;
pub mod sections;

// Re-export commonly used types
pub use newsletter::SignupOutcome;
pub use quotes::QuoteCarousel;
