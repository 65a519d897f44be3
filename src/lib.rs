//! Dotplan suggests page layouts for dot-grid journals.
//!
//! Given a grid size (in dots) and a free-text purpose, [`generate_ideas`] returns a handful of
//! [`LayoutIdea`]s, each of which carves the grid into labelled rectangular [`Section`]s.  A
//! chosen idea can then be drawn over a dot grid ([`canvas`]), written out as Markdown
//! ([`markdown`]) or composed into a printable PDF ([`document`]).  All three surfaces share the
//! same [`GridScaler`] so that a section lands on exactly the same dots everywhere.
//!
//! ```
//! let ideas = dotplan::generate_ideas("weekly habit tracker", 30, 40, None);
//! assert_eq!(ideas[0].title, "Habit Tracker");
//! ```

use vector2d::Vector2D;

pub mod canvas;
mod catalog;
pub mod document;
pub mod error;
pub mod geometry;
mod idea;
pub mod image;
pub mod markdown;
mod select;
mod tags;
pub mod utils;

pub use catalog::{baselines, templates, Generator, Template};
pub use error::{Error, Result};
pub use geometry::GridScaler;
pub use idea::{Bounds, LayoutIdea, Orientation, PageMode, Section};
pub use select::{generate_ideas, pick_idea, DEFAULT_PURPOSE, MAX_IDEAS};
pub use tags::{synthesize_tags, PromptConfig, TagSet};

/// Type alias for 2D floating point vectors (in the geometric sense, unlike [`Vec`])
pub type V2 = Vector2D<f32>;
