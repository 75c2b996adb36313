//! monkey: interactive token printer for the Monkey language.
//!
//! Usage:
//!   monkey [options] [file...]
//!
//! With no files, greets the user and lexes stdin line by line, printing one
//! token per line. Files are lexed the same way without a prompt.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser as ClapParser;
use miette::{Context, IntoDiagnostic};
use monkey_options::{parse_options_file, MonkeyOptions, OutputFormat, OPTIONS_FILE_NAME};
use monkey_repl::ReplOptions;
use tracing::{info, Level};

#[derive(ClapParser, Debug)]
#[command(name = "monkey", about = "Lexer REPL for the Monkey programming language", version)]
struct Cli {
    /// Monkey source files to lex instead of stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to an options file. Defaults to ./monkey.json when present.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Recognize - ! * / < > == and !=.
    #[arg(long)]
    operators: bool,

    /// Recognize true, false, if, else and return as keywords.
    #[arg(long = "extended-keywords")]
    extended_keywords: bool,

    /// Print tokens as JSON objects.
    #[arg(long)]
    json: bool,

    /// Prompt written before each line of stdin.
    #[arg(long)]
    prompt: Option<String>,

    /// Do not print the startup banner.
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv). Logs go to stderr.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_options = load_options(cli.config.as_deref())?;
    let options = resolve_options(&cli, &file_options);

    if cli.files.is_empty() {
        run_stdin(&cli, &options)
    } else {
        run_files(&cli.files, &options)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Load the options file named on the command line, or ./monkey.json if it exists.
fn load_options(path: Option<&Path>) -> miette::Result<MonkeyOptions> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(OPTIONS_FILE_NAME);
            if !default.exists() {
                return Ok(MonkeyOptions::default());
            }
            default
        }
    };
    parse_options_file(&path).into_diagnostic()
}

/// Command-line flags override the options file.
fn resolve_options(cli: &Cli, file_options: &MonkeyOptions) -> ReplOptions {
    let mut options = ReplOptions::from(file_options);
    if cli.operators {
        options.scanner.operators = true;
    }
    if cli.extended_keywords {
        options.scanner.extended_keywords = true;
    }
    if cli.json {
        options.format = OutputFormat::Json;
    }
    if let Some(ref prompt) = cli.prompt {
        options.prompt = prompt.clone();
    }
    options
}

fn run_stdin(cli: &Cli, options: &ReplOptions) -> miette::Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    if !cli.quiet {
        write_banner(&mut stdout, current_user().as_deref())
            .into_diagnostic()
            .wrap_err("failed to write banner")?;
    }

    let stats = monkey_repl::start(stdin, &mut stdout, options)
        .into_diagnostic()
        .wrap_err("failed to run REPL")?;
    info!(?stats, "session finished");
    Ok(())
}

fn run_files(files: &[PathBuf], options: &ReplOptions) -> miette::Result<()> {
    let options = ReplOptions {
        prompt: String::new(),
        ..options.clone()
    };
    let mut stdout = io::stdout().lock();

    for path in files {
        let file = File::open(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to open '{}'", path.display()))?;
        let stats = monkey_repl::start(BufReader::new(file), &mut stdout, &options)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to lex '{}'", path.display()))?;
        info!(file = %path.display(), ?stats, "lexed file");
    }
    Ok(())
}

fn write_banner<W: Write>(out: &mut W, user: Option<&str>) -> io::Result<()> {
    match user {
        Some(user) => writeln!(out, "Hello {}! This is the Monkey programming language!", user)?,
        None => writeln!(out, "Hello! This is the Monkey programming language!")?,
    }
    writeln!(out, "Feel free to type in commands")
}

/// The login name of the current user: the account database first, then
/// the environment.
fn current_user() -> Option<String> {
    account_name().or_else(|| user_from_env(|var| std::env::var(var).ok()))
}

fn user_from_env(var: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .filter_map(|name| var(*name))
        .find(|name| !name.is_empty())
}

/// Look up the real user id in the passwd database.
#[cfg(unix)]
fn account_name() -> Option<String> {
    let uid = unsafe { libc::getuid() };
    let mut buf: Vec<libc::c_char> = vec![0; 1024];
    loop {
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        let rc = unsafe { libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result) };
        if rc == libc::ERANGE && buf.len() < 1 << 16 {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
            return None;
        }
        // pw_name points into `buf`, which is still alive here.
        let name = unsafe { std::ffi::CStr::from_ptr(pwd.pw_name) };
        return name.to_str().ok().filter(|n| !n.is_empty()).map(str::to_owned);
    }
}

#[cfg(not(unix))]
fn account_name() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_with_user() {
        let mut out = Vec::new();
        write_banner(&mut out, Some("ada")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello ada! This is the Monkey programming language!\nFeel free to type in commands\n"
        );
    }

    #[test]
    fn test_banner_without_user() {
        let mut out = Vec::new();
        write_banner(&mut out, None).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Hello! This is"));
    }

    #[test]
    fn test_flags_override_options_file() {
        let cli = Cli::parse_from(["monkey", "--operators", "--json", "--prompt", "$ "]);
        let file = monkey_options::parse_options(
            r#"{ "prompt": "> ", "format": "text", "scanner": { "extendedKeywords": true } }"#,
        )
        .unwrap();
        let options = resolve_options(&cli, &file);
        assert_eq!(options.prompt, "$ ");
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.scanner.operators);
        assert!(options.scanner.extended_keywords);
    }

    #[test]
    fn test_file_options_kept_without_flags() {
        let cli = Cli::parse_from(["monkey", "-vv", "a.mk", "b.mk"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.files.len(), 2);
        let options = resolve_options(&cli, &MonkeyOptions::default());
        assert_eq!(options, ReplOptions::default());
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monkey.json");
        assert!(load_options(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "format": "json" }}"#).unwrap();
        let options = load_options(Some(file.path())).unwrap();
        assert_eq!(options.format(), OutputFormat::Json);
    }

    #[test]
    fn test_user_from_env_order() {
        let vars = |name: &str| match name {
            "USER" => Some(String::new()),
            "USERNAME" => Some("grace".to_string()),
            "LOGNAME" => Some("other".to_string()),
            _ => None,
        };
        assert_eq!(user_from_env(vars).as_deref(), Some("grace"));
        assert_eq!(user_from_env(|_| None), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_account_name_matches_uid() {
        // Containers may run as a uid with no passwd entry.
        let Some(name) = account_name() else { return };
        let cname = std::ffi::CString::new(name).unwrap();
        let pwd = unsafe { libc::getpwnam(cname.as_ptr()) };
        assert!(!pwd.is_null());
        assert_eq!(unsafe { (*pwd).pw_uid }, unsafe { libc::getuid() });
    }

    #[test]
    fn test_current_user_prefers_account() {
        if let Some(name) = account_name() {
            assert_eq!(current_user(), Some(name));
        }
    }
}
