use std::path::Path;

use anyhow::Context;
use colored::*;

mod color_image_mask;
mod error;
mod helper;
mod tints;
mod tinter;

use tinter::DEFAULT_INPUT;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let written = tinter::run(Path::new(DEFAULT_INPUT), &tints::default_tints())
        .with_context(|| format!("Failed to tint '{DEFAULT_INPUT}'"))?;

    println!("{}", "Done".green());
    for path in written {
        println!(" - {}", path.display());
    }

    Ok(())
}
