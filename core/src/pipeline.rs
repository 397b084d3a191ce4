//! Wires document parsing, root selection, synthesis and reporting together.

use std::fs;
use std::io::{Read, Write};

use math::Polynomial;
use tracing::{debug, info};

use crate::config::{Config, InputSource};
use crate::error::Result;
use crate::input::Document;
use crate::report::Report;
use crate::select::select_roots;

/// Select the first `k` roots of `document` and expand their polynomial.
pub fn solve(document: &Document) -> Result<Report> {
    let roots = select_roots(document.records(), document.k())?;
    let polynomial = Polynomial::from_roots(roots.values())?;
    debug_assert!(polynomial.is_monic());
    debug_assert_eq!(polynomial.degree(), roots.len());

    info!(degree = polynomial.degree(), %polynomial, "synthesized polynomial");
    Ok(Report::new(&roots, &polynomial))
}

/// Parse `text` as a root description and solve it.
pub fn solve_str(text: &str) -> Result<Report> {
    let document = Document::parse(text)?;
    solve(&document)
}

/// Read the configured input, solve it and write the report to `output`.
///
/// `stdin` is only consulted for [`InputSource::Stdin`]. Nothing is written
/// to `output` unless the whole run succeeds.
pub fn run<R: Read, W: Write>(
    config: &Config,
    stdin: R,
    output: W,
) -> Result<()> {
    let text = read_input(&config.input, stdin)?;
    let report = solve_str(&text)?;
    report.write_to(output, config.format)
}

fn read_input<R: Read>(source: &InputSource, mut stdin: R) -> Result<String> {
    let text = match source {
        InputSource::Stdin => {
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            text
        }
        InputSource::File(path) => fs::read_to_string(path)?,
    };
    debug!(bytes = text.len(), source = ?source, "read input");
    Ok(text)
}
