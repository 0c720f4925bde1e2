use dssc_protocol::FormatError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// errno values used as process exit codes
const ENOENT: u8 = 2;
const EIO: u8 = 5;
const EISDIR: u8 = 21;
const EINVAL: u8 = 22;

/// Why a single capture file could not be converted
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{} does not exist", .0.display())]
    SourceNotFound(PathBuf),

    #[error("{} is not a file", .0.display())]
    SourceNotRegular(PathBuf),

    #[error("{}: {source}", .path.display())]
    InvalidFormat { path: PathBuf, source: FormatError },

    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to write console output: {0}")]
    Console(#[from] io::Error),
}

impl ConvertError {
    /// Process exit code reported when this is the last error of a batch
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::SourceNotFound(_) => ENOENT,
            ConvertError::SourceNotRegular(_) => EISDIR,
            ConvertError::InvalidFormat { .. } => EINVAL,
            ConvertError::Io { .. } | ConvertError::Console(_) => EIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            ConvertError::SourceNotFound("a".into()).exit_code(),
            ConvertError::SourceNotRegular("a".into()).exit_code(),
            ConvertError::InvalidFormat {
                path: "a".into(),
                source: FormatError::BadMagic { found: 0 },
            }
            .exit_code(),
            ConvertError::Io {
                path: "a".into(),
                source: io::ErrorKind::Other.into(),
            }
            .exit_code(),
        ];

        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_messages_name_the_source() {
        let err = ConvertError::InvalidFormat {
            path: "caps/screencap-3.bin".into(),
            source: FormatError::UnsupportedVersion { version: 4 },
        };
        assert_eq!(err.to_string(), "caps/screencap-3.bin: unsupported version 4");

        let err = ConvertError::SourceNotFound("missing.bin".into());
        assert_eq!(err.to_string(), "missing.bin does not exist");
    }
}
