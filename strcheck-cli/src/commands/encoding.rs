//! Encoding name resolution command

use crate::output::Report;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use strcheck_core::StringPredicates;

/// Arguments for the encoding command
#[derive(Debug, Args)]
pub struct EncodingArgs {
    /// Encoding name: ASCII, UTF8, UTF32 or UNICODE (any case)
    pub name: String,

    /// Decode this file with the resolved encoding and print its text
    #[arg(long, value_name = "FILE")]
    pub decode: Option<PathBuf>,
}

impl EncodingArgs {
    /// Execute the encoding command
    pub fn execute(&self) -> Result<Report> {
        let encoding = self.name.to_encoding()?;
        log::info!("Resolved {:?} to {}", self.name, encoding);

        let Some(path) = &self.decode else {
            return Ok(Report::value("encoding", &self.name, encoding.to_string()));
        };

        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let body = bytes
            .strip_prefix(encoding.byte_order_mark())
            .unwrap_or(&bytes);
        let text = encoding
            .decode(body)
            .with_context(|| format!("Failed to decode {}", path.display()))?;

        Ok(Report::value("encoding", &self.name, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Answer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_name() {
        let args = EncodingArgs {
            name: "uniCode".to_string(),
            decode: None,
        };
        let report = args.execute().unwrap();
        assert_eq!(report.answer, Answer::Text("UNICODE".to_string()));
    }

    #[test]
    fn test_unknown_name() {
        let args = EncodingArgs {
            name: "UTF7".to_string(),
            decode: None,
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("UTF7"));
    }

    #[test]
    fn test_decode_utf16_with_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE]).unwrap();
        let bytes: Vec<u8> = "hé".encode_utf16().flat_map(u16::to_le_bytes).collect();
        file.write_all(&bytes).unwrap();

        let args = EncodingArgs {
            name: "unicode".to_string(),
            decode: Some(file.path().to_path_buf()),
        };
        let report = args.execute().unwrap();
        assert_eq!(report.answer, Answer::Text("hé".to_string()));
    }

    #[test]
    fn test_decode_malformed_ascii() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x48, 0xE9]).unwrap();

        let args = EncodingArgs {
            name: "ascii".to_string(),
            decode: Some(file.path().to_path_buf()),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to decode"));
    }
}
