use std::fmt;
use std::io::Write;

use math::Polynomial;
use serde::{Deserialize, Serialize};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::select::SelectedRoots;

/// Outcome of one successful synthesis run.
///
/// Only ever built from a complete polynomial, so a report is never partial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub k: usize,
    pub roots: Vec<i64>,
    pub degree: usize,
    /// Coefficients from `x^degree` down to the constant term.
    pub coefficients: Vec<i64>,
}

impl Report {
    pub fn new(roots: &SelectedRoots, polynomial: &Polynomial) -> Self {
        Self {
            k: roots.len(),
            roots: roots.values().to_vec(),
            degree: polynomial.degree(),
            coefficients: polynomial.coefficients_high_to_low().collect(),
        }
    }

    /// Write the report in the requested format, followed by a newline.
    pub fn write_to<W: Write>(
        &self,
        mut writer: W,
        format: OutputFormat,
    ) -> Result<()> {
        match format {
            OutputFormat::Text => write!(writer, "{self}")?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, self)?;
                writeln!(writer)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

/// Line-oriented layout: each section label followed by its values.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "k")?;
        writeln!(f, "{}", self.k)?;
        writeln!(f, "roots_decimal_first_k")?;
        for root in &self.roots {
            writeln!(f, "{root}")?;
        }
        writeln!(f, "degree")?;
        writeln!(f, "{}", self.degree)?;
        writeln!(f, "coefficients_high_to_low")?;
        for coefficient in &self.coefficients {
            writeln!(f, "{coefficient}")?;
        }
        Ok(())
    }
}
