use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::errors::ConfigError;
use crate::road_map::LoadOptions;

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Shortest hop distances over an undirected road map
#[derive(Parser, Debug, Default)]
#[command(name = "roadmap-bfs")]
#[command(version)]
#[command(about = "Breadth-first shortest distances and paths over an undirected road map")]
pub struct Cli {
    /// Road map to read [default: input.txt]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// File the distance report is written to [default: output.txt]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Vertex to print the shortest path to; prompted for when absent
    #[arg(short, long, value_name = "VERTEX", allow_negative_numbers = true)]
    pub destination: Option<i64>,

    /// Also export vertex,distance,parent rows as CSV
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Accept start vertices greater than the edge count
    #[arg(long)]
    pub lenient_start: bool,

    /// TOML file with defaults for the options above
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Contents of the optional TOML config file. Every key may be left out.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub destination: Option<i64>,
    pub csv_output: Option<PathBuf>,
    pub lenient_start: Option<bool>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub destination: Option<i64>,
    pub csv_output: Option<PathBuf>,
    pub load: LoadOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            destination: None,
            csv_output: None,
            load: LoadOptions::default(),
        }
    }
}

impl Settings {
    /// Reads the config file named on the command line, if any, and merges it.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    /// Command line beats config file, config file beats defaults.
    pub fn merge(cli: Cli, file: FileConfig) -> Self {
        let defaults = Self::default();
        let lenient_start = cli.lenient_start || file.lenient_start.unwrap_or(false);
        Self {
            input: cli.input.or(file.input).unwrap_or(defaults.input),
            output: cli.output.or(file.output).unwrap_or(defaults.output),
            destination: cli.destination.or(file.destination),
            csv_output: cli.csv.or(file.csv_output),
            load: LoadOptions {
                legacy_start_bound: !lenient_start,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_arguments_uses_fixed_names() {
        let cli = Cli::try_parse_from(["roadmap-bfs"]).unwrap();
        let settings = Settings::from_cli(cli).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.input, PathBuf::from("input.txt"));
        assert_eq!(settings.output, PathBuf::from("output.txt"));
        assert!(settings.load.legacy_start_bound);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "roadmap-bfs",
            "-i",
            "graph.txt",
            "--output",
            "dist.txt",
            "-d",
            "-3",
            "--csv",
            "dist.csv",
            "--lenient-start",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);

        let settings = Settings::merge(cli, FileConfig::default());
        assert_eq!(settings.input, PathBuf::from("graph.txt"));
        assert_eq!(settings.output, PathBuf::from("dist.txt"));
        assert_eq!(settings.destination, Some(-3));
        assert_eq!(settings.csv_output, Some(PathBuf::from("dist.csv")));
        assert!(!settings.load.legacy_start_bound);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file: FileConfig = toml::from_str(
            "input = \"from-file.txt\"\noutput = \"out-file.txt\"\ndestination = 4\nlenient_start = true\n",
        )
        .unwrap();
        let cli = Cli {
            input: Some(PathBuf::from("from-cli.txt")),
            ..Cli::default()
        };

        let settings = Settings::merge(cli, file);
        assert_eq!(settings.input, PathBuf::from("from-cli.txt"));
        assert_eq!(settings.output, PathBuf::from("out-file.txt"));
        assert_eq!(settings.destination, Some(4));
        assert!(!settings.load.legacy_start_bound);
    }

    #[test]
    fn test_config_file_round_trip_through_cli() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "csv_output = \"export.csv\"").unwrap();
        writeln!(file, "destination = 2").unwrap();

        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["roadmap-bfs", "--config", path]).unwrap();
        let settings = Settings::from_cli(cli).unwrap();
        assert_eq!(settings.csv_output, Some(PathBuf::from("export.csv")));
        assert_eq!(settings.destination, Some(2));
        assert_eq!(settings.input, PathBuf::from(DEFAULT_INPUT));
    }

    #[test]
    fn test_unknown_config_key_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start = 3").unwrap();

        let err = FileConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::from_path(&dir.path().join("roadmap.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
