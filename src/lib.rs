//! Convert a left-to-right stylesheet into its right-to-left mirror.
//!
//! The transform rewrites directionally sensitive declarations — `left`/
//! `right` properties and values, four-value shorthand order, `direction`,
//! resize cursors, horizontal background percentages — and leaves everything
//! else untouched. It is a best-effort textual rewrite driven by an ordered
//! pattern table, not a CSS parser: build pipelines that ship an RTL variant
//! of an LTR source run it as a plain string-to-string step.
//!
//! A `/* @noflip */` comment placed before a rule or a single declaration
//! exempts that span from the transform. Comments always pass through
//! byte-identical.
//!
//! ```
//! use cssjanus::{transform, TransformOptions};
//!
//! let rtl = transform(".nav { float: left }", TransformOptions::default());
//! assert_eq!(rtl, ".nav { float: right }");
//! ```

mod patterns;
mod tokenizer;
mod transform;

pub use crate::transform::{transform, TransformOptions};
