use std::{fs, path::Path};

use anyhow::{bail, Context, Result};

const SUPPORTED_STYLE_VERSION: u32 = 1;

/// Glyphs and spacing used when drawing text blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    margin: usize,
    filled: char,
    empty: char,
    separator: char,
}

impl RenderStyle {
    /// Width of the left margin emitted before every shape row.
    pub const DEFAULT_MARGIN: usize = 4;

    /// Creates a style from explicit spacing and glyphs.
    #[must_use]
    pub const fn new(margin: usize, filled: char, empty: char, separator: char) -> Self {
        Self {
            margin,
            filled,
            empty,
            separator,
        }
    }

    /// Number of spaces emitted before every shape row.
    #[must_use]
    pub const fn margin(&self) -> usize {
        self.margin
    }

    /// Glyph drawn for cells covered by the shape.
    #[must_use]
    pub const fn filled(&self) -> char {
        self.filled
    }

    /// Glyph drawn for uncovered cells inside the bounding box.
    #[must_use]
    pub const fn empty(&self) -> char {
        self.empty
    }

    /// Glyph repeated along the separator line closing each block.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Loads a style from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read render style at {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid render style at {}", path.display()))
    }

    /// Parses a style from TOML text. Omitted fields keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: StyleFile =
            toml::from_str(contents).context("failed to parse render style toml contents")?;
        if file.version != SUPPORTED_STYLE_VERSION {
            bail!(
                "unsupported render style version {}; expected {}",
                file.version,
                SUPPORTED_STYLE_VERSION
            );
        }

        let defaults = Self::default();
        Ok(Self {
            margin: file.margin.unwrap_or(defaults.margin),
            filled: parse_glyph("filled", file.filled)?.unwrap_or(defaults.filled),
            empty: parse_glyph("empty", file.empty)?.unwrap_or(defaults.empty),
            separator: parse_glyph("separator", file.separator)?.unwrap_or(defaults.separator),
        })
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MARGIN, 'X', ' ', '-')
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleFile {
    version: u32,
    margin: Option<usize>,
    filled: Option<String>,
    empty: Option<String>,
    separator: Option<String>,
}

fn parse_glyph(field: &str, value: Option<String>) -> Result<Option<char>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), None) => Ok(Some(glyph)),
        _ => bail!("render style field `{field}` must be a single character, found {value:?}"),
    }
}
