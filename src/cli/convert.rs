//! Conversion commands: convert, all, list

use super::util::{
    load_config, output_format, parse_output_arg, positional_args, read_stdin_lines,
    render_conversions, write_output,
};
use stringcase::*;

/// `stringcase <CASE> [TEXT...]`
///
/// Converts each TEXT argument, or each stdin line when none are given.
pub fn cmd_convert(case_name: &str, args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let case = config.resolve_case(case_name)?;
    let format = output_format(args, &config);
    let output_path = parse_output_arg(args);

    let inputs: Vec<String> = {
        let positional = positional_args(args);
        if positional.is_empty() {
            log::debug!("No text arguments, reading stdin");
            read_stdin_lines()?
        } else {
            positional.into_iter().map(str::to_string).collect()
        }
    };

    let conversions: Vec<Conversion> = inputs
        .into_iter()
        .map(|input| {
            let output = config.convert(case, &input);
            Conversion {
                case,
                input,
                output,
            }
        })
        .collect();

    let content = render_conversions(&conversions, format)?;
    write_output(output_path.as_deref(), &content)
}

/// `stringcase all <TEXT>`: show TEXT in every style
pub fn cmd_all(args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let format = output_format(args, &config);
    let output = parse_output_arg(args);

    let positional = positional_args(args);
    let input = match positional.as_slice() {
        [text] => *text,
        _ => return Err("Usage: stringcase all <TEXT> [--json]".into()),
    };
    let input = if config.trim_input {
        trimcase(input)
    } else {
        input.to_string()
    };

    let conversions = convert_all(&input);
    let content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&conversions)?,
        OutputFormat::Text => conversions
            .iter()
            .map(|c| format!("{:<16} {}", c.case.function_name(), c.output))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    write_output(output.as_deref(), &content)
}

/// `stringcase list`: print every style with its description
pub fn cmd_list(args: &[String]) -> Result<()> {
    if args.iter().any(|a| a == "--json") {
        let cases: Vec<_> = Case::ALL
            .iter()
            .map(|case| {
                serde_json::json!({
                    "name": case.name(),
                    "function": case.function_name(),
                    "description": case.description(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&cases)?);
    } else {
        for case in Case::ALL {
            println!("{:<16} {}", case.function_name(), case.description());
        }
    }
    Ok(())
}
