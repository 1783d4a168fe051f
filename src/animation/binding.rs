use std::fmt;

use crate::errors::{ImportError, Result};

/// Defines the target property for animation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation, // Maps to track.translations
    Rotation,    // Maps to track.rotations
    Scale,       // Maps to track.scales
}

impl TargetPath {
    /// Parses a channel target path (`"translation"`, `"rotation"`, `"scale"`).
    pub fn parse(path: &str) -> Result<Self> {
        match path {
            "translation" => Ok(Self::Translation),
            "rotation" => Ok(Self::Rotation),
            "scale" => Ok(Self::Scale),
            other => Err(ImportError::UnknownTargetPath(other.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Translation => "translation",
            Self::Rotation => "rotation",
            Self::Scale => "scale",
        }
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(TargetPath::parse("rotation").unwrap(), TargetPath::Rotation);
        assert_eq!(TargetPath::parse("scale").unwrap().to_string(), "scale");
        assert!(matches!(
            TargetPath::parse("weights"),
            Err(ImportError::UnknownTargetPath(path)) if path == "weights"
        ));
    }
}
