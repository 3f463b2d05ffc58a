//! Default absolute path validator
//!
//! Checks only the shape of the string. No normalization is performed and
//! the file system is never touched.

use varpath_domain::{AbsolutePath, PathRejection};

use crate::ports::AbsolutePathValidator;

/// Characters rejected anywhere in a path, in addition to control characters.
const INVALID_CHARACTERS: [char; 4] = ['"', '<', '>', '|'];

/// Accepts strings anchored at a root.
///
/// A candidate is rooted if it starts with `/`, a drive prefix such as
/// `C:\` or `C:/`, or a UNC prefix `\\`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootedPathValidator;

impl RootedPathValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AbsolutePathValidator for RootedPathValidator {
    fn validate(&self, candidate: &str) -> Result<AbsolutePath, PathRejection> {
        if candidate.is_empty() {
            return Err(PathRejection::Empty);
        }

        if let Some((offset, character)) = candidate
            .char_indices()
            .find(|(_, c)| c.is_control() || INVALID_CHARACTERS.contains(c))
        {
            return Err(PathRejection::InvalidCharacter { character, offset });
        }

        if is_rooted(candidate) {
            Ok(AbsolutePath::from_validated(candidate))
        } else {
            Err(PathRejection::NotRooted)
        }
    }
}

fn is_rooted(candidate: &str) -> bool {
    if candidate.starts_with('/') || candidate.starts_with(r"\\") {
        return true;
    }
    matches!(
        candidate.as_bytes(),
        [drive, b':', b'/' | b'\\', ..] if drive.is_ascii_alphabetic()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn validate(candidate: &str) -> Result<AbsolutePath, PathRejection> {
        RootedPathValidator::new().validate(candidate)
    }

    #[test]
    fn test_accepts_unix_root() {
        assert_eq!(validate("/opt/app/bin").unwrap().as_str(), "/opt/app/bin");
        assert_eq!(validate("/").unwrap().as_str(), "/");
    }

    #[test]
    fn test_accepts_drive_roots() {
        assert!(validate(r"C:\Program Files\App").is_ok());
        assert!(validate("d:/work").is_ok());
    }

    #[test]
    fn test_accepts_unc_root() {
        assert!(validate(r"\\server\share\dir").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate("").unwrap_err(), PathRejection::Empty);
    }

    #[test]
    fn test_rejects_relative() {
        assert_eq!(validate("relative/path").unwrap_err(), PathRejection::NotRooted);
        assert_eq!(validate("./here").unwrap_err(), PathRejection::NotRooted);
        assert_eq!(validate("C:relative").unwrap_err(), PathRejection::NotRooted);
        assert_eq!(validate(r"\single").unwrap_err(), PathRejection::NotRooted);
        assert_eq!(validate("1:/x").unwrap_err(), PathRejection::NotRooted);
    }

    #[test]
    fn test_rejects_invalid_character() {
        assert_eq!(
            validate("/opt/a|b").unwrap_err(),
            PathRejection::InvalidCharacter {
                character: '|',
                offset: 6
            }
        );
        assert_eq!(
            validate("/opt/\0").unwrap_err(),
            PathRejection::InvalidCharacter {
                character: '\0',
                offset: 5
            }
        );
    }

    #[test]
    fn test_invalid_character_reported_before_rooting() {
        assert!(matches!(
            validate("rel\n").unwrap_err(),
            PathRejection::InvalidCharacter { offset: 3, .. }
        ));
    }

    #[test]
    fn test_offset_is_byte_offset() {
        assert_eq!(
            validate("/é<").unwrap_err(),
            PathRejection::InvalidCharacter {
                character: '<',
                offset: 3
            }
        );
    }
}
