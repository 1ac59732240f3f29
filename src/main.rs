//! stringcase CLI - Command-line interface
//!
//! Commands:
//!   <case>   - Convert text (arguments or stdin lines) to a case style
//!   all      - Show text in every case style
//!   list     - List available case styles
//!   schema   - Print JSON schema for config or output types

mod cli;

use cli::*;
use std::process::ExitCode;
use stringcase::{Result, VERSION};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match collect_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result: Result<()> = match args[1].as_str() {
        "all" => cmd_all(&args[2..]),
        "list" => cmd_list(&args[2..]),
        "schema" => cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("stringcase {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        case_name => cmd_convert(case_name, &args[2..]),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
stringcase - Fast string case conversions

USAGE:
    stringcase <CASE> [TEXT...] [OPTIONS]
    stringcase <COMMAND> [OPTIONS]

CASES:
    camel, capital, const, lower, pascal, path, backslash, sentence,
    snake, spinal, dot, title, trim, upper, alphanum
    (also accepted as snakecase, snake_case, kebab-case, ...; '-' uses
    the configured default_case)

COMMANDS:
    all <TEXT>                        Show TEXT in every case style
    list                              List case styles
    schema [config|conversion|case]   Print JSON schema
    version                           Print version

OPTIONS:
    --json                            JSON output
    --config <file>                   Config file (default: ./.stringcase.yaml)
    --output <file>                   Output file (default: stdout)

With no TEXT, each line of stdin is converted.

EXAMPLES:
    stringcase snake FooBarBaz
    stringcase camel "foo bar" baz_qux --json
    echo "fooBar" | stringcase const
    stringcase all myVariableName
"#
    );
}
