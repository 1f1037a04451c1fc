//! Command-line interface for chatmark.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// ANSI-styled text
    #[default]
    Terminal,
    /// HTML fragment
    Html,
    /// Render tree as JSON
    Json,
}

/// Chatmark - render chat markdown that may still be arriving.
///
/// Reads complete documents from files, or a stream from stdin, and renders
/// headings, lists, quotes, tables and highlighted code.
#[derive(Parser, Debug)]
#[command(
    name = "chatmark",
    author = "Chatmark Contributors",
    version,
    about = "A streaming-safe markdown renderer for chat transcripts",
    after_help = "Examples:\n  \
                  cat reply.md | chatmark\n  \
                  chatmark --format html reply.md\n  \
                  llm-client | chatmark --stream -w 100"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Terminal)]
    pub format: Format,

    /// Set the output width (0 = config value, then terminal width)
    #[arg(short = 'w', long = "width", default_value = "0")]
    pub width: u16,

    /// Print blocks from stdin as soon as they can no longer change
    #[arg(short = 's', long = "stream")]
    pub stream: bool,

    /// Number the lines of code blocks
    #[arg(short = 'n', long = "line-numbers")]
    pub line_numbers: bool,

    /// Disable syntax highlighting
    #[arg(long = "no-highlight")]
    pub no_highlight: bool,

    /// Copy the last code block to the clipboard (OSC 52)
    #[arg(long = "clipboard")]
    pub clipboard: bool,

    /// List the code block languages that are highlighted and exit
    #[arg(long = "languages")]
    pub show_languages: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Resolve the output width: flag, then config, then terminal.
    pub fn effective_width(&self, config_width: usize) -> usize {
        if self.width > 0 {
            self.width as usize
        } else if config_width > 0 {
            config_width
        } else {
            chatmark_render::terminal_width()
        }
    }

    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use chatmark_config::Config;

    let config_path = match Config::ensure_config_file() {
        Ok(path) => path.display().to_string(),
        Err(e) => format!("(unavailable: {})", e),
    };

    println!("paths:");
    println!("  config                {}", config_path);
}

/// Show highlighted languages with their fence aliases.
pub fn show_languages() {
    use chatmark_syntax::{aliases_for, Language};

    for language in [
        Language::Markup,
        Language::Stylesheet,
        Language::Script,
        Language::Python,
        Language::Json,
    ] {
        println!("{:<12}{}", language.to_string(), aliases_for(language).join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["chatmark"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.width, 0);
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.format, Format::Terminal);
        assert!(!cli.stream);
        assert!(!cli.clipboard);
    }

    #[test]
    fn test_cli_parse_with_file() {
        let cli = Cli::parse_from(["chatmark", "reply.md"]);
        assert_eq!(cli.files, vec![PathBuf::from("reply.md")]);
        assert!(!cli.should_read_stdin());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "chatmark",
            "-w", "100",
            "-l", "debug",
            "--format", "json",
            "--line-numbers",
            "--no-highlight",
            "--clipboard",
            "--stream",
        ]);
        assert_eq!(cli.width, 100);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.format, Format::Json);
        assert!(cli.line_numbers);
        assert!(cli.no_highlight);
        assert!(cli.clipboard);
        assert!(cli.stream);
        assert!(cli.should_read_stdin());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["chatmark", "--format", "pdf"]).is_err());
    }

    #[test]
    fn test_effective_width_precedence() {
        let cli = Cli::parse_from(["chatmark", "-w", "60"]);
        assert_eq!(cli.effective_width(90), 60);

        let cli = Cli::parse_from(["chatmark"]);
        assert_eq!(cli.effective_width(90), 90);
        assert!(cli.effective_width(0) > 0);
    }
}
