//! Descartes - A terminal-based function grapher.
//!
//! Descartes turns `y = f(x)` statements typed at a prompt into sampled
//! curves on a shared plot, with per-function error isolation so one bad
//! expression never blocks the rest.
//!
//! # Features
//!
//! - Symbolic expression parsing with a canonical display form
//! - 400-point sampling over an integer x-range
//! - Four-quadrant plotting with emphasized origin axes
//! - Gruvbox color themes
//! - Clipboard export of functions and sampled data
//!
//! # Example
//!
//! ```ignore
//! use descartes::expr::parse_statement;
//! use descartes::plot::sample_grid;
//! use descartes::range::XRange;
//!
//! // Validate a statement and sample it
//! let expr = parse_statement("y = x^2 - 1")?;
//! let range: XRange = "-10, 10".parse()?;
//! let ys = expr.sample(&sample_grid(range))?;
//! println!("{} points for y = {}", ys.len(), expr);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod error;
pub mod expr;
pub mod graph;
pub mod input;
pub mod plot;
pub mod range;
pub mod store;
pub mod ui;
pub mod util;

pub use error::{DescartesError, Result};
