use std::{env, fs, process};

use anyhow::Context;
use sofmeta::TagValue;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_module(env!("CARGO_PKG_NAME"), log::LevelFilter::Trace)
        .parse_default_env()
        .init();

    let paths = env::args().skip(1).collect::<Vec<_>>();
    if paths.is_empty() {
        eprintln!("usage: dump <file.jpg>...");
        process::exit(1);
    }

    for path in paths {
        let jpeg = fs::read(&path).with_context(|| format!("failed to read {path}"))?;
        let metadata =
            sofmeta::read_metadata(&jpeg).with_context(|| format!("failed to parse {path}"))?;

        println!("{path}: {} frame(s)", metadata.len());
        for dir in metadata.directories() {
            for (tag, value) in dir.iter() {
                match value {
                    TagValue::Int(i) => println!("  [{tag:>3}] {i}"),
                    TagValue::Component(c) => println!(
                        "  [{tag:>3}] component {} ({}): {}x{}, qtable {}",
                        c.id(),
                        c.component_name().unwrap_or("?"),
                        c.horizontal_sampling_factor(),
                        c.vertical_sampling_factor(),
                        c.quantization_table_number(),
                    ),
                    _ => println!("  [{tag:>3}] {value:?}"),
                }
            }
            for error in dir.errors() {
                println!("  error: {error}");
            }
        }
    }

    Ok(())
}
