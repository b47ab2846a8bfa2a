//! # splot script
//!
//! Emits [`splot_core::Scene`]s as gnuplot `splot` scripts.
//!
//! ## Script layout
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  set title / set view / unset key           │
//! ├─────────────────────────────────────────────┤
//! │  palette: one entry per distinct color      │
//! ├─────────────────────────────────────────────┤
//! │  splot: one clause per style group          │
//! │         + one labels clause                 │
//! ├─────────────────────────────────────────────┤
//! │  inline data: one block per clause          │
//! ├─────────────────────────────────────────────┤
//! │  pause mouse keypress                       │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod emit;
pub mod error;
pub mod label;

pub use emit::{ScriptConfig, ScriptExporter};
pub use error::{ScriptError, ScriptResult};
pub use label::label_anchor;
