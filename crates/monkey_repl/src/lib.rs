//! monkey_repl: the read-lex-print loop.
//!
//! Reads source one line at a time, scans each line in its own session and
//! writes every token before `EndOfInput`, one per line.

use std::io::{self, BufRead, Write};

use monkey_options::{MonkeyOptions, OutputFormat, DEFAULT_PROMPT};
use monkey_scanner::{Scanner, ScannerOptions, Token};
use tracing::debug;

/// Settings for one REPL run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplOptions {
    pub prompt: String,
    pub format: OutputFormat,
    pub scanner: ScannerOptions,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            format: OutputFormat::default(),
            scanner: ScannerOptions::default(),
        }
    }
}

impl From<&MonkeyOptions> for ReplOptions {
    fn from(options: &MonkeyOptions) -> Self {
        Self {
            prompt: options.prompt().to_string(),
            format: options.format(),
            scanner: options.scanner(),
        }
    }
}

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplStats {
    pub lines: usize,
    /// Tokens rendered; `EndOfInput` is never counted.
    pub tokens: usize,
    pub keywords: usize,
    pub literals: usize,
    pub operators: usize,
    pub delimiters: usize,
    pub illegal: usize,
}

impl ReplStats {
    fn record(&mut self, token: &Token) {
        self.tokens += 1;
        let kind = token.kind;
        if kind.is_keyword() {
            self.keywords += 1;
        } else if kind.is_literal() {
            self.literals += 1;
        } else if kind.is_operator() {
            self.operators += 1;
        } else if kind.is_delimiter() {
            self.delimiters += 1;
        } else if token.is_illegal() {
            self.illegal += 1;
        }
    }
}

/// Run the loop until `input` is exhausted.
pub fn start<R, W>(mut input: R, output: &mut W, options: &ReplOptions) -> io::Result<ReplStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = ReplStats::default();
    let mut line = Vec::new();

    loop {
        output.write_all(options.prompt.as_bytes())?;
        output.flush()?;

        line.clear();
        // Lines are read as raw bytes; the scanner does not require UTF-8.
        if input.read_until(b'\n', &mut line)? == 0 {
            debug!(?stats, "end of input");
            return Ok(stats);
        }
        let source = strip_line_terminator(&line);
        stats.lines += 1;
        debug!(line = stats.lines, len = source.len(), "lexing line");

        for token in Scanner::from_bytes(source, options.scanner) {
            stats.record(&token);
            write_token(output, &token, options.format)?;
        }
    }
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Render one token in the given format, followed by a newline.
pub fn write_token<W: Write>(output: &mut W, token: &Token, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "{}", token),
        OutputFormat::Json => {
            let record = serde_json::json!({
                "type": token.kind.as_str(),
                "literal": token.literal,
            });
            writeln!(output, "{}", record)
        }
    }
}
