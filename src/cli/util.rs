//! CLI utility helpers

use std::ffi::OsString;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use stringcase::{text_from_bytes, Config, Conversion, Error, OutputFormat, Result};

/// Flags that consume the following argument as their value
const VALUE_FLAGS: [&str; 4] = ["--config", "-c", "--output", "-o"];

/// Convert raw process arguments to text, rejecting non-UTF-8 ones
pub fn collect_args<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|raw| {
                Error::InvalidInput(format!("argument is not UTF-8 text: {:?}", raw))
            })
        })
        .collect()
}

/// Value following any of `names`, if present
fn flag_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    args.iter()
        .position(|arg| names.contains(&arg.as_str()))
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Parse --config argument to determine config file path
pub fn parse_config_arg(args: &[String]) -> Option<PathBuf> {
    flag_value(args, &["--config", "-c"]).map(PathBuf::from)
}

/// Parse --output argument to determine output file path
pub fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    flag_value(args, &["--output", "-o"]).map(PathBuf::from)
}

/// Arguments that are not flags or flag values
pub fn positional_args(args: &[String]) -> Vec<&str> {
    let mut positional = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
        } else if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
        } else if arg != "--json" {
            positional.push(arg.as_str());
        }
    }
    positional
}

/// Load config from --config, or `.stringcase.yaml` in the working directory
pub fn load_config(args: &[String]) -> Result<Config> {
    match parse_config_arg(args) {
        Some(path) => Config::load(&path),
        None => {
            let current_dir = std::env::current_dir().map_err(Error::Io)?;
            Config::load_from_dir(&current_dir)
        }
    }
}

/// Output format from config, overridden by --json
pub fn output_format(args: &[String], config: &Config) -> OutputFormat {
    if args.iter().any(|a| a == "--json") {
        OutputFormat::Json
    } else {
        config.output
    }
}

/// Split a reader into text lines (`\n` and `\r\n` endings are stripped)
///
/// Lines are read as bytes so a non-UTF-8 line is reported as invalid input
/// rather than an I/O failure.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let raw = line.map_err(Error::Io)?;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);
        let text = text_from_bytes(bytes).map_err(|e| match e {
            Error::InvalidInput(msg) => {
                Error::InvalidInput(format!("stdin line {}: {}", index + 1, msg))
            }
            other => other,
        })?;
        lines.push(text.to_string());
    }
    Ok(lines)
}

/// Read stdin line by line
pub fn read_stdin_lines() -> Result<Vec<String>> {
    read_lines(std::io::stdin().lock())
}

/// Render conversions in the requested format
pub fn render_conversions(conversions: &[Conversion], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(conversions)?),
        OutputFormat::Text => Ok(conversions
            .iter()
            .map(|c| c.output.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Write content to file or stdout
///
/// Empty content (no inputs) writes nothing to stdout and an empty file.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    let content = if content.is_empty() {
        String::new()
    } else {
        format!("{}\n", content)
    };
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            log::info!("Written to: {}", p.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
