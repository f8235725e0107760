//! Command-line argument parsing for the scanner
//!
//! Supports:
//! - Scanning one file, or stdin
//! - Choosing the extraction strategy and language
//! - Text or JSON output

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::scan::{Match, StrategyKind};
use crate::syntax::LanguageId;

/// Find Arabic text inside string literals
#[derive(Parser, Debug)]
#[command(
    name = "arabic-rtl",
    version,
    about = "Find Arabic text inside string literals"
)]
pub struct CliArgs {
    /// File to scan (reads stdin when omitted or "-")
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Extraction strategy: lexical or syntax (defaults to config)
    #[arg(short, long, value_name = "STRATEGY")]
    pub strategy: Option<String>,

    /// Language for the syntax strategy (defaults to the file extension)
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file (defaults to ~/.config/arabic-rtl/config.yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// How matches are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `line:start-end<TAB>text`, one match per line
    #[default]
    Text,
    /// JSON array of matches
    Json,
}

/// Where the source text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: Input,
    /// Explicit strategy; `None` defers to the config file
    pub strategy: Option<StrategyKind>,
    pub language: LanguageId,
    pub format: OutputFormat,
    pub config_path: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let input = match self.path {
            Some(path) if path.as_os_str() != OsStr::new("-") => {
                if path.is_dir() {
                    return Err(format!(
                        "{} is a directory; pass a single file",
                        path.display()
                    ));
                }
                Input::File(path)
            }
            _ => Input::Stdin,
        };

        let strategy = self
            .strategy
            .as_deref()
            .map(|name| {
                StrategyKind::from_name(name).ok_or_else(|| format!("Unknown strategy: {}", name))
            })
            .transpose()?;

        let language = match (self.language.as_deref(), &input) {
            (Some(name), _) => {
                LanguageId::from_name(name).ok_or_else(|| format!("Unknown language: {}", name))?
            }
            (None, Input::File(path)) => LanguageId::from_path(path),
            (None, Input::Stdin) => LanguageId::PlainText,
        };

        Ok(RunConfig {
            input,
            strategy,
            language,
            format: self.format,
            config_path: self.config,
        })
    }
}

/// Render matches in the requested format
///
/// Text lines are 1-indexed for humans; JSON keeps the zero-based fields.
pub fn render_matches(matches: &[Match], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(matches
            .iter()
            .map(|m| {
                format!(
                    "{}:{}-{}\t{}\n",
                    m.line + 1,
                    m.start_offset,
                    m.end_offset,
                    m.text
                )
            })
            .collect()),
        OutputFormat::Json => serde_json::to_string_pretty(matches)
            .map(|json| json + "\n")
            .map_err(|e| format!("Failed to serialize matches: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(path: Option<&str>) -> CliArgs {
        CliArgs {
            path: path.map(PathBuf::from),
            strategy: None,
            language: None,
            format: OutputFormat::Text,
            config: None,
        }
    }

    #[test]
    fn test_no_path_reads_stdin() {
        let config = args(None).into_config().unwrap();
        assert_eq!(config.input, Input::Stdin);
        assert_eq!(config.language, LanguageId::PlainText);
        assert_eq!(config.strategy, None);
    }

    #[test]
    fn test_dash_reads_stdin() {
        let config = args(Some("-")).into_config().unwrap();
        assert_eq!(config.input, Input::Stdin);
    }

    #[test]
    fn test_language_from_extension() {
        let config = args(Some("src/app.tsx")).into_config().unwrap();
        assert_eq!(config.input, Input::File(PathBuf::from("src/app.tsx")));
        assert_eq!(config.language, LanguageId::Tsx);
    }

    #[test]
    fn test_explicit_overrides() {
        let mut cli = args(Some("notes.txt"));
        cli.strategy = Some("syntax".to_string());
        cli.language = Some("rust".to_string());
        let config = cli.into_config().unwrap();
        assert_eq!(config.strategy, Some(StrategyKind::Syntax));
        assert_eq!(config.language, LanguageId::Rust);
    }

    #[test]
    fn test_unknown_strategy_and_language() {
        let mut cli = args(None);
        cli.strategy = Some("psychic".to_string());
        assert!(cli.into_config().is_err());

        let mut cli = args(None);
        cli.language = Some("cobol".to_string());
        assert!(cli.into_config().is_err());
    }

    #[test]
    fn test_directory_rejected() {
        let dir = std::env::temp_dir();
        let cli = args(Some(dir.to_str().unwrap()));
        assert!(cli.into_config().is_err());
    }

    #[test]
    fn test_clap_parsing() {
        let cli = CliArgs::try_parse_from(["arabic-rtl", "-s", "syntax", "-f", "json", "a.ts"])
            .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("a.ts")));
        assert_eq!(cli.strategy.as_deref(), Some("syntax"));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_render_text_one_line_per_match() {
        let matches = vec![
            Match {
                text: "سلام".to_string(),
                line: 0,
                start_offset: 4,
                end_offset: 10,
            },
            Match {
                text: "مرحبا بك".to_string(),
                line: 2,
                start_offset: 30,
                end_offset: 40,
            },
        ];
        assert_eq!(
            render_matches(&matches, OutputFormat::Text).unwrap(),
            "1:4-10\tسلام\n3:30-40\tمرحبا بك\n"
        );
    }

    #[test]
    fn test_render_text() {
        let matches = vec![Match {
            text: "مرحبا".to_string(),
            line: 0,
            start_offset: 6,
            end_offset: 13,
        }];
        assert_eq!(
            render_matches(&matches, OutputFormat::Text).unwrap(),
            "1:6-13\tمرحبا\n"
        );
    }

    #[test]
    fn test_render_json() {
        let matches = vec![Match {
            text: "سلام".to_string(),
            line: 2,
            start_offset: 20,
            end_offset: 26,
        }];
        let json = render_matches(&matches, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["text"], "سلام");
        assert_eq!(value[0]["line"], 2);
        assert_eq!(value[0]["start_offset"], 20);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_matches(&[], OutputFormat::Text).unwrap(), "");
        assert_eq!(render_matches(&[], OutputFormat::Json).unwrap(), "[]\n");
    }
}
