use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'pixelforge init' to create a default configuration"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pixelforge.toml")]
    #[diagnostic(code(pixelforge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("framework '{framework}' is not available on the {platform} platform")]
    #[diagnostic(
        code(pixelforge::unsupported_framework),
        help("frameworks available on {platform}: {choices}")
    )]
    UnsupportedFramework {
        #[source_code]
        src: NamedSource<String>,
        #[label("not selectable on {platform}")]
        span: Option<SourceSpan>,
        framework: String,
        platform: String,
        choices: String,
    },

    #[error("{message}")]
    #[diagnostic(code(pixelforge::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span
    pub fn validation(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }

    pub fn unsupported_framework(
        framework: impl Into<String>,
        platform: impl Into<String>,
        choices: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::UnsupportedFramework {
            src: NamedSource::new(filename, src.to_string()),
            span,
            framework: framework.into(),
            platform: platform.into(),
            choices: choices.into(),
        })
    }
}
