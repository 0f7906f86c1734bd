//! Parse the frontmatter block at the top of a `SKILL.md` manifest.
//!
//! The block is delimited by `---` lines and holds `key: value` pairs. Only
//! flat string fields are read; nested YAML is not interpreted.

use thiserror::Error;

use crate::path_utils::sanitize_name;

/// File name that marks a bundle root
pub const MANIFEST_FILE: &str = "SKILL.md";

const DELIMITER: &str = "---";

/// Reasons a manifest cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    #[error("missing frontmatter (must start with ---)")]
    MissingFrontmatter,

    #[error("malformed frontmatter: missing closing ---")]
    Unterminated,

    #[error("frontmatter missing required 'name' field")]
    MissingName,
}

/// The field block of a manifest, borrowed from its content
#[derive(Debug, Clone, Copy)]
pub struct Frontmatter<'a> {
    block: &'a str,
}

impl<'a> Frontmatter<'a> {
    /// Locate the frontmatter block in `content`.
    pub fn parse(content: &'a str) -> Result<Self, ManifestError> {
        let content = content.trim();
        if !content.starts_with(DELIMITER) {
            return Err(ManifestError::MissingFrontmatter);
        }
        let mut parts = content.splitn(3, DELIMITER);
        let _leading = parts.next();
        let block = parts.next().ok_or(ManifestError::Unterminated)?;
        if parts.next().is_none() {
            return Err(ManifestError::Unterminated);
        }
        Ok(Self { block })
    }

    /// Value of `field`, or `None` if the block has no such key.
    ///
    /// The first matching line wins. Surrounding whitespace and one layer of
    /// matching quotes are stripped from the value.
    pub fn field(&self, field: &str) -> Option<&'a str> {
        self.block.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            (key.trim() == field).then(|| unquote(value.trim()))
        })
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Read a single field from manifest content.
///
/// A missing field is `Ok(None)`; only a missing or unterminated block is an
/// error.
pub fn parse_field(content: &str, field: &str) -> Result<Option<String>, ManifestError> {
    Ok(Frontmatter::parse(content)?.field(field).map(str::to_string))
}

/// Read the required `name` field and return it sanitized.
pub fn parse_name(content: &str) -> Result<String, ManifestError> {
    match parse_field(content, "name")? {
        Some(name) if !name.trim().is_empty() => Ok(sanitize_name(&name)),
        _ => Err(ManifestError::MissingName),
    }
}

/// Read the optional `version` field. Blank values count as absent.
pub fn parse_version(content: &str) -> Result<Option<String>, ManifestError> {
    Ok(parse_field(content, "version")?.filter(|v| !v.is_empty()))
}
