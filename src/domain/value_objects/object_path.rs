//! Object Path Value Object
//!
//! A path through the object hierarchy, stored as raw segment names.
//!
//! Two renderings exist:
//! - binding form (`Display`): segments joined with `/`, exactly what the
//!   host animation system binds curves to
//! - encoded form (`encode` / `parse`): `\` is written `\\` and a `/` inside
//!   a name is written `\/`, so any name survives a round trip

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{WardrobeError, WardrobeResult};

const SEPARATOR: char = '/';
const ESCAPE: char = '\\';

/// Path of segment names, relative to some node of a hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectPath {
    segments: Vec<String>,
}

impl ObjectPath {
    /// Create a path from raw segment names
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the encoded form.
    pub fn parse(input: &str) -> WardrobeResult<Self> {
        if input.is_empty() {
            return Ok(Self::default());
        }

        let invalid = |reason: &str| WardrobeError::InvalidPath {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = input.chars();

        while let Some(c) = chars.next() {
            match c {
                ESCAPE => match chars.next() {
                    Some(escaped @ (ESCAPE | SEPARATOR)) => current.push(escaped),
                    Some(other) => return Err(invalid(&format!("unknown escape '\\{}'", other))),
                    None => return Err(invalid("dangling escape at end of path")),
                },
                SEPARATOR => {
                    if current.is_empty() {
                        return Err(invalid("empty segment"));
                    }
                    segments.push(std::mem::take(&mut current));
                }
                _ => current.push(c),
            }
        }

        if current.is_empty() {
            return Err(invalid("empty segment"));
        }
        segments.push(current);

        Ok(Self { segments })
    }

    /// Parse a legacy path, where `/` always separates and nothing is escaped.
    pub fn parse_unescaped(input: &str) -> WardrobeResult<Self> {
        if input.is_empty() {
            return Ok(Self::default());
        }
        if input.split(SEPARATOR).any(str::is_empty) {
            return Err(WardrobeError::InvalidPath {
                input: input.to_string(),
                reason: "empty segment".to_string(),
            });
        }
        Ok(Self::new(input.split(SEPARATOR)))
    }

    /// Render the encoded form accepted by [`ObjectPath::parse`].
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(SEPARATOR);
            }
            for c in segment.chars() {
                if c == ESCAPE || c == SEPARATOR {
                    out.push(ESCAPE);
                }
                out.push(c);
            }
        }
        out
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Last segment (the object's own name)
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Path with one more segment appended
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Path with the first segment dropped
    pub fn strip_first(&self) -> Option<(&str, ObjectPath)> {
        let (first, rest) = self.segments.split_first()?;
        Some((first.as_str(), ObjectPath::new(rest.iter().cloned())))
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl Serialize for ObjectPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for ObjectPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ObjectPath::parse(&s).map_err(serde::de::Error::custom)
    }
}
