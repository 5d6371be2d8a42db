//! Loads [`FractalParams`] from INI text.
//!
//! ```ini
//! [calculation]
//! julia_set = yes
//! initial_real = -0.7
//! initial_imag = 0.27
//! iterations = 64
//! radius = 4
//!
//! [image]
//! xlim_lower = -1.6
//! xlim_upper = 1.6
//! ylim_lower = -1.2
//! ylim_upper = 1.2
//!
//! [window]
//! width = 640
//! height = 480
//! ```
//!
//! Every key overrides one field of [`FractalParams::default`]. Unknown
//! sections and keys are skipped; anything that cannot be read is an error.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use configparser::ini::Ini;
use log::debug;

use crate::core::data::fractal_params::FractalParams;
use crate::core::fractals::fractal_kinds::FractalKind;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The text is not INI, as reported by the parser.
    Syntax {
        message: String,
    },
    MissingValue {
        section: String,
        key: String,
    },
    InvalidNumber {
        section: String,
        key: String,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            Self::Syntax { message } => {
                write!(f, "malformed INI: {}", message)
            }
            Self::MissingValue { section, key } => {
                write!(f, "[{}] `{}` has no value", section, key)
            }
            Self::InvalidNumber {
                section,
                key,
                value,
            } => {
                write!(f, "[{}] `{}` is not a valid value for {}", section, value, key)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reads and parses the file at `path`.
pub fn load_params(path: impl AsRef<Path>) -> Result<FractalParams, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_params(&text)
}

/// Parses INI text into parameters, starting from the defaults.
///
/// A leading byte order mark is skipped. Entries are applied in section and
/// key order, so the first error reported does not depend on hashing.
pub fn parse_params(text: &str) -> Result<FractalParams, ConfigError> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    let sections: BTreeMap<_, _> = Ini::new_cs()
        .read(text.to_string())
        .map_err(|message| ConfigError::Syntax { message })?
        .into_iter()
        .map(|(section, entries)| (section, entries.into_iter().collect::<BTreeMap<_, _>>()))
        .collect();

    let mut params = FractalParams::default();

    for (section, entries) in &sections {
        for (key, value) in entries {
            apply(&mut params, section.trim(), key.trim(), value.as_deref())?;
        }
    }

    Ok(params)
}

fn apply(
    params: &mut FractalParams,
    section: &str,
    key: &str,
    value: Option<&str>,
) -> Result<(), ConfigError> {
    let Some(value) = value else {
        return Err(ConfigError::MissingValue {
            section: section.to_string(),
            key: key.to_string(),
        });
    };
    let value = value.trim();
    let number = || -> Result<f64, ConfigError> { parse_value(section, key, value) };

    match (section, key) {
        ("calculation", "julia_set") => params.kind = parse_kind(value),
        ("calculation", "initial_real") => params.initial.real = number()?,
        ("calculation", "initial_imag") => params.initial.imag = number()?,
        ("calculation", "iterations") => params.max_iterations = parse_value(section, key, value)?,
        ("calculation", "radius") => params.escape_radius_squared = number()?,
        ("image", "xlim_lower") => params.x_range.lower = number()?,
        ("image", "xlim_upper") => params.x_range.upper = number()?,
        ("image", "ylim_lower") => params.y_range.lower = number()?,
        ("image", "ylim_upper") => params.y_range.upper = number()?,
        ("window", "width") => params.width = parse_value(section, key, value)?,
        ("window", "height") => params.height = parse_value(section, key, value)?,
        _ => debug!("ignoring unknown key [{}] {}", section, key),
    }

    Ok(())
}

/// `t`, `T`, `y` or `Y` as the first character selects Julia, anything else
/// (including an empty value) Mandelbrot.
fn parse_kind(value: &str) -> FractalKind {
    match value.chars().next() {
        Some('t' | 'T' | 'y' | 'Y') => FractalKind::Julia,
        _ => FractalKind::Mandelbrot,
    }
}

fn parse_value<T: FromStr>(section: &str, key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    })
}
