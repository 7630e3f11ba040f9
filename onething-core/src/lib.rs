//! Styling system and markup model for the One Day One Thing site.
//!
//! Everything here is pure: themes resolve design tokens, utility class
//! names parse into CSS declarations, and element trees render to HTML
//! strings. No I/O happens in this crate, which keeps the whole pipeline
//! testable without a server.

pub mod class;
pub mod fonts;
pub mod markup;
pub mod stylesheet;
pub mod theme;

pub use class::StyleError;
pub use theme::Theme;
