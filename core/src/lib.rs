//! Reconstructs the monic polynomial whose roots are given as base-N literals.
//!
//! ```
//! let report = rootpoly_core::pipeline::solve_str(
//!     r#"{ "keys": { "n": 2, "k": 2 },
//!          "1": { "base": "10", "value": "2" },
//!          "2": { "base": "2", "value": "11" } }"#,
//! )
//! .unwrap();
//! assert_eq!(report.coefficients, vec![1, -5, 6]);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod select;

pub use config::{Config, InputSource, OutputFormat};
pub use error::{Error, Result};
pub use input::Document;
pub use pipeline::{run, solve, solve_str};
pub use record::RootRecord;
pub use report::Report;
pub use select::{select_roots, SelectedRoots, SelectionError};
