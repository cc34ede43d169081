//! Command-line arguments handed to the runtime by an entry point
//!
//! Arguments are kept verbatim and additionally split into option arguments
//! (`--name` or `--name=value`) and non-option arguments. Option arguments
//! double as configuration overrides.

use std::collections::BTreeMap;

use crate::error::{RuntimeError, RuntimeResult};

const OPTION_PREFIX: &str = "--";

/// Parsed view over the process arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationArguments {
    source_args: Vec<String>,
    options: BTreeMap<String, Vec<String>>,
    non_option_args: Vec<String>,
}

impl ApplicationArguments {
    /// Parse the raw argument list
    pub fn parse(args: Vec<String>) -> RuntimeResult<Self> {
        let mut options: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut non_option_args = Vec::new();
        let mut end_of_options = false;

        for arg in &args {
            if end_of_options {
                non_option_args.push(arg.clone());
                continue;
            }
            if arg == OPTION_PREFIX {
                end_of_options = true;
                continue;
            }
            let Some(option_text) = arg.strip_prefix(OPTION_PREFIX) else {
                non_option_args.push(arg.clone());
                continue;
            };

            let (name, value) = match option_text.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (option_text, None),
            };
            if name.is_empty() {
                return Err(RuntimeError::InvalidArgument(arg.clone()));
            }

            let values = options.entry(name.to_string()).or_default();
            if let Some(value) = value {
                values.push(value.to_string());
            }
        }

        Ok(Self {
            source_args: args,
            options,
            non_option_args,
        })
    }

    /// The arguments exactly as they were passed in
    pub fn source_args(&self) -> &[String] {
        &self.source_args
    }

    /// Names of all option arguments, sorted
    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    pub fn contains_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Values of an option in the order given; empty for a bare `--name`
    pub fn option_values(&self, name: &str) -> Option<&[String]> {
        self.options.get(name).map(Vec::as_slice)
    }

    pub fn non_option_args(&self) -> &[String] {
        &self.non_option_args
    }

    /// Option arguments as configuration overrides.
    ///
    /// Repeated values are joined with `,`. A bare `--name` maps to `"true"`.
    pub fn property_overrides(&self) -> Vec<(String, String)> {
        self.options
            .iter()
            .map(|(name, values)| {
                let value = if values.is_empty() {
                    "true".to_string()
                } else {
                    values.join(",")
                };
                (name.clone(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_arguments() {
        let parsed = ApplicationArguments::parse(Vec::new()).unwrap();
        assert!(parsed.source_args().is_empty());
        assert!(parsed.non_option_args().is_empty());
        assert_eq!(parsed.option_names().count(), 0);
    }

    #[test]
    fn test_options_and_non_options() {
        let raw = args(&["--foo=1", "bar", "--debug", "baz"]);
        let parsed = ApplicationArguments::parse(raw.clone()).unwrap();

        assert_eq!(parsed.source_args(), raw.as_slice());
        assert_eq!(parsed.non_option_args(), args(&["bar", "baz"]).as_slice());
        assert_eq!(parsed.option_values("foo"), Some(args(&["1"]).as_slice()));
        assert_eq!(parsed.option_values("debug"), Some(&[][..]));
        assert!(parsed.contains_option("debug"));
        assert!(!parsed.contains_option("bar"));
    }

    #[test]
    fn test_value_keeps_everything_after_first_equals() {
        let parsed = ApplicationArguments::parse(args(&["--logging.level=info,mxy=debug,a=b"])).unwrap();
        assert_eq!(
            parsed.option_values("logging.level"),
            Some(args(&["info,mxy=debug,a=b"]).as_slice())
        );
    }

    #[test]
    fn test_repeated_option_accumulates() {
        let parsed =
            ApplicationArguments::parse(args(&["--profiles.active=dev", "--profiles.active=local"])).unwrap();
        assert_eq!(
            parsed.option_values("profiles.active"),
            Some(args(&["dev", "local"]).as_slice())
        );
        assert_eq!(
            parsed.property_overrides(),
            vec![("profiles.active".to_string(), "dev,local".to_string())]
        );
    }

    #[test]
    fn test_empty_option_name_is_rejected() {
        let err = ApplicationArguments::parse(args(&["--=x"])).unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidArgument(ref arg) if arg == "--=x"));
    }

    #[test]
    fn test_double_dash_ends_options() {
        let parsed = ApplicationArguments::parse(args(&["--a=1", "--", "--b=2", "c"])).unwrap();
        assert!(parsed.contains_option("a"));
        assert!(!parsed.contains_option("b"));
        assert_eq!(parsed.non_option_args(), args(&["--b=2", "c"]).as_slice());
        assert_eq!(parsed.source_args().len(), 4);
    }

    #[test]
    fn test_flag_override_is_true() {
        let parsed = ApplicationArguments::parse(args(&["--debug", "--server.port=0"])).unwrap();
        assert_eq!(
            parsed.property_overrides(),
            vec![
                ("debug".to_string(), "true".to_string()),
                ("server.port".to_string(), "0".to_string()),
            ]
        );
    }
}
