use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Printed to stdout whenever the argument list is not exactly one path.
pub const USAGE_MESSAGE: &str = "Error no input file";

/// Display a point file as an interactive 3D scatter plot.
#[derive(Debug, Parser)]
#[command(
    name = "point-viewer",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Text file with one point per line: `x y z [ignored columns...]`.
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,
}

#[derive(Debug, Error)]
#[error("{}", USAGE_MESSAGE)]
pub struct UsageError(#[source] clap::Error);

impl Cli {
    /// Parse the full argument list, program name included.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map_err(UsageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_positional_argument() {
        let cli = Cli::try_from_args(["point-viewer", "position.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("position.txt"));
    }

    #[test]
    fn test_no_arguments_is_usage_error() {
        let err = Cli::try_from_args(["point-viewer"]).unwrap_err();
        assert_eq!(err.to_string(), USAGE_MESSAGE);
    }

    #[test]
    fn test_two_arguments_is_usage_error() {
        assert!(Cli::try_from_args(["point-viewer", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_hyphen_prefixed_path() {
        let cli = Cli::try_from_args(["point-viewer", "-run1.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("-run1.txt"));
    }

    #[test]
    fn test_help_is_just_a_path() {
        let cli = Cli::try_from_args(["point-viewer", "--help"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("--help"));
    }

    #[test]
    fn test_hyphen_path_plus_extra_argument_is_usage_error() {
        assert!(Cli::try_from_args(["point-viewer", "-run1.txt", "b.txt"]).is_err());
    }
}
