//! Semantic checks run after the TOML has been deserialized.

use miette::SourceSpan;

use crate::{Config, Error, Result};

/// Source text plus filename, carried through validation for diagnostics.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn validate(&self, config: &Config) -> Result<()> {
        let generation = &config.generation;

        if generation.model.trim().is_empty() {
            return Err(Error::validation(
                "model name must not be empty",
                self.src,
                self.filename,
                find_value_span(self.src, "model"),
            ));
        }

        if !generation.platform.supports(generation.framework) {
            let choices: Vec<&str> = generation
                .platform
                .frameworks()
                .iter()
                .map(|f| f.slug())
                .collect();
            return Err(Error::unsupported_framework(
                generation.framework.slug(),
                generation.platform.as_str(),
                choices.join(", "),
                self.src,
                self.filename,
                find_value_span(self.src, "framework"),
            ));
        }

        Ok(())
    }
}

/// Locate the value of `key = value` for error labels.
///
/// Only the first assignment of `key` is considered; a missing key (value
/// supplied by a default) yields `None`.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            let rest_trimmed = rest.trim_start();
            if let Some(value) = rest_trimmed.strip_prefix('=') {
                let value_trimmed = value.trim_start();
                let value_start = offset + (line.len() - value_trimmed.len());
                let value_len = value_trimmed.trim_end().len();
                return Some(SourceSpan::from((value_start, value_len)));
            }
        }
        offset += line.len();
    }
    None
}
