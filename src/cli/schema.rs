//! Schema command

use stringcase::*;

/// `stringcase schema [config|conversion|case]`
pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: config, conversion, case");
            Ok(())
        }
        "config" => print_schema::<Config>(),
        "conversion" => print_schema::<Conversion>(),
        "case" => print_schema::<Case>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
