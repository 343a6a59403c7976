//! Ant-style path patterns.
//!
//! Patterns are matched segment by segment. A literal segment must match
//! exactly, `*` matches exactly one segment, and a trailing `**` matches
//! any remaining suffix, including none (`/products/**` matches
//! `/products`). Empty segments are ignored on both sides, so trailing
//! slashes do not matter.

use std::fmt;

use catalog_core::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Single,
    Rest,
}

/// A parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parses a pattern such as `/users/**`.
    ///
    /// Fails when the pattern does not start with `/` or uses `**` anywhere
    /// but the last segment.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if !raw.starts_with('/') {
            return Err(AppError::configuration(format!(
                "Path pattern '{raw}' must start with '/'"
            )));
        }

        let parts: Vec<&str> = split_segments(raw).collect();
        let mut segments = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            let segment = match *part {
                "**" if i + 1 == parts.len() => Segment::Rest,
                "**" => {
                    return Err(AppError::configuration(format!(
                        "Path pattern '{raw}' may only use '**' as its last segment"
                    )));
                }
                "*" => Segment::Single,
                literal => Segment::Literal(literal.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Tests a request path against this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let mut path_segments = split_segments(path);
        for segment in &self.segments {
            match segment {
                Segment::Rest => return true,
                Segment::Single => {
                    if path_segments.next().is_none() {
                        return false;
                    }
                }
                Segment::Literal(expected) => match path_segments.next() {
                    Some(actual) if actual == expected => {}
                    _ => return false,
                },
            }
        }
        path_segments.next().is_none()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
