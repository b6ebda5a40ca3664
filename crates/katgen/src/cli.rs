//! Command-line arguments: `katgen <scheme> <algorithm> [aead|hash]`.

use katgen_core::Template;

use crate::error::{GenerateError, Result};

/// Usage line printed on bad arguments.
pub const USAGE: &str = "usage: katgen <scheme> <algorithm> [aead|hash]";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Scheme identifier: input file stem and function-name prefix.
    pub scheme: String,
    /// Algorithm type name passed to `run_tv`.
    pub algorithm: String,
    /// Template, `aead` unless given.
    pub template: Template,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);

        let scheme = args
            .next()
            .ok_or_else(|| GenerateError::Usage(USAGE.to_string()))?;
        let algorithm = args
            .next()
            .ok_or_else(|| GenerateError::Usage(USAGE.to_string()))?;
        let template = match args.next() {
            Some(name) => name.parse::<Template>()?,
            None => Template::default(),
        };

        if let Some(extra) = args.next() {
            return Err(GenerateError::Usage(format!(
                "unexpected argument `{extra}`\n{USAGE}"
            )));
        }

        Ok(Self {
            scheme,
            algorithm,
            template,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_arguments() {
        let args = CliArgs::parse(["ascon128", "AsconAead128"]).unwrap();
        assert_eq!(args.scheme, "ascon128");
        assert_eq!(args.algorithm, "AsconAead128");
        assert_eq!(args.template, Template::Aead);
    }

    #[test]
    fn test_template_argument() {
        let args = CliArgs::parse(["asconhash", "AsconHash", "hash"]).unwrap();
        assert_eq!(args.template, Template::Hash);

        let err = CliArgs::parse(["asconhash", "AsconHash", "xof"]).unwrap_err();
        assert!(matches!(err, GenerateError::Core(_)));
    }

    #[test]
    fn test_missing_arguments() {
        let err = CliArgs::parse(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, GenerateError::Usage(_)));

        let err = CliArgs::parse(["ascon128"]).unwrap_err();
        assert!(matches!(err, GenerateError::Usage(_)));
    }

    #[test]
    fn test_extra_argument() {
        let err = CliArgs::parse(["a", "B", "aead", "--verbose"]).unwrap_err();
        assert!(err.to_string().contains("--verbose"));
    }
}
