//! Chatmark - a streaming-safe markdown renderer for chat transcripts.
//!
//! This binary provides the CLI interface to the chatmark libraries. Files
//! are rendered whole; stdin can be rendered whole or, with `--stream`,
//! block by block as blocks settle.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Format};
use log::{debug, error, info, trace, LevelFilter};
use std::fs;
use std::io::{self, BufRead, Read, Write};

use chatmark_config::Config;
use chatmark_core::Result;
use chatmark_render::{
    copy_code, is_tty, to_json, CodeBlockView, CopyStatus, HtmlWriter, Osc52Clipboard,
    RenderBlock, RenderOptions, RenderTree, Renderer, StreamBuffer, TerminalWriter,
};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }
    if cli.show_languages {
        cli::show_languages();
        return;
    }

    setup_logging(&cli.log_level);
    info!("chatmark v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli);
    let options = RenderOptions::from(&config.features);
    debug!("render options: {:?}", options);

    let renderer = Renderer::new(options);
    let width = cli.effective_width(config.style.width);

    if cli.should_read_stdin() {
        if cli.stream {
            run_stream(&renderer, &config, cli.format, width)
        } else {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            render_document(&renderer, &config, cli.format, width, &input)
        }
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let input = fs::read_to_string(path)?;
            render_document(&renderer, &config, cli.format, width, &input)?;
        }
        Ok(())
    }
}

/// Load configuration and apply CLI overrides.
///
/// A broken override is reported and the base configuration used instead.
fn load_config(cli: &Cli) -> Config {
    let mut config = match Config::load_with_override(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            Config::load().unwrap_or_default()
        }
    };

    if cli.line_numbers {
        config.features.line_numbers = true;
    }
    if cli.no_highlight {
        config.features.highlight = false;
    }
    if cli.clipboard {
        config.features.clipboard = true;
    }

    config
}

/// Render one complete document.
fn render_document(
    renderer: &Renderer,
    config: &Config,
    format: Format,
    width: usize,
    input: &str,
) -> Result<()> {
    let tree = renderer.render(input);
    debug!("rendered {} block(s)", tree.blocks.len());

    let mut sink = Sink::new(io::stdout().lock(), format, width, config);
    for block in &tree.blocks {
        sink.write_block(block)?;
    }
    sink.finish(config)
}

/// Render stdin line by line, printing blocks once they settle.
fn run_stream(renderer: &Renderer, config: &Config, format: Format, width: usize) -> Result<()> {
    info!("Streaming from stdin");

    let mut buffer = StreamBuffer::new(renderer.clone());
    let mut sink = Sink::new(io::stdout(), format, width, config);

    for line in io::stdin().lock().lines() {
        let line = line?;
        trace!("Input line: {}", line);

        buffer.push(&line);
        buffer.push("\n");
        for block in buffer.take_new_settled() {
            sink.write_block(&block)?;
        }
    }

    for block in buffer.finish() {
        sink.write_block(&block)?;
    }
    sink.finish(config)
}

/// Where rendered blocks go.
enum Target<W: Write> {
    Terminal(TerminalWriter<W>),
    Html(W),
    /// JSON needs the whole tree, so blocks are held until the end
    Json(W, RenderTree),
}

/// An output target plus the last code block seen, for the clipboard.
struct Sink<W: Write> {
    target: Target<W>,
    last_code: Option<CodeBlockView>,
}

impl<W: Write> Sink<W> {
    fn new(writer: W, format: Format, width: usize, config: &Config) -> Self {
        let target = match format {
            Format::Terminal => Target::Terminal(
                TerminalWriter::new(writer, width)
                    .with_palette(config.palette())
                    .with_margin(config.style.margin),
            ),
            Format::Html => Target::Html(writer),
            Format::Json => Target::Json(writer, RenderTree::default()),
        };
        Self {
            target,
            last_code: None,
        }
    }

    fn write_block(&mut self, block: &RenderBlock) -> Result<()> {
        if let RenderBlock::CodeBlock(view) = block {
            self.last_code = Some(view.clone());
        }

        match &mut self.target {
            Target::Terminal(writer) => {
                writer.write_block(block)?;
                writer.flush()?;
            }
            Target::Html(writer) => {
                writeln!(writer, "{}", HtmlWriter::render_block(block))?;
                writer.flush()?;
            }
            Target::Json(_, tree) => tree.blocks.push(block.clone()),
        }
        Ok(())
    }

    fn finish(self, config: &Config) -> Result<()> {
        match self.target {
            Target::Terminal(writer) => {
                writer.into_inner().flush()?;
                if config.features.clipboard {
                    if let Some(view) = &self.last_code {
                        copy_last_code(view);
                    }
                }
            }
            Target::Html(mut writer) => writer.flush()?,
            Target::Json(mut writer, tree) => {
                writeln!(writer, "{}", to_json(&tree)?)?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}

/// Copy a code block through the terminal.
fn copy_last_code(view: &CodeBlockView) {
    if !is_tty() {
        debug!("stdout is not a terminal, skipping clipboard");
        return;
    }
    let mut clipboard = Osc52Clipboard::new(io::stdout());
    if copy_code(view, &mut clipboard) == CopyStatus::Copied {
        info!("copied code block to clipboard");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmark_render::render;

    #[test]
    fn test_sink_keeps_last_code_block() {
        let tree = render("```py\nfirst\n```\n\n```js\nsecond\n```");
        let config = Config::default();
        let mut sink = Sink::new(Vec::new(), Format::Html, 80, &config);
        for block in &tree.blocks {
            sink.write_block(block).unwrap();
        }

        let last = sink.last_code.as_ref().map(CodeBlockView::copy_text);
        assert_eq!(last.as_deref(), Some("second"));
    }
}
