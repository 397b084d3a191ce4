use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the root description document is read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }
}

/// Rendering used for a successful report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Section labels each followed by their values, one per line.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

impl OutputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when an unknown output format is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOutputFormat(pub String);

impl fmt::Display for InvalidOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported output format {:?} (expected text or json)", self.0)
    }
}

impl std::error::Error for InvalidOutputFormat {}

impl FromStr for OutputFormat {
    type Err = InvalidOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(InvalidOutputFormat(s.to_string())),
        }
    }
}

/// Settings for one run of the pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
    pub format: OutputFormat,
}

impl Config {
    pub fn new(input: InputSource, format: OutputFormat) -> Self {
        Self { input, format }
    }
}
