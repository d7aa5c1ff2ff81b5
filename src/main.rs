use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "soundwave-icon",
    about = "Generate the soundwave application icon as a 192x192 PNG"
)]
struct Args {
    /// Output file. The parent directory must already exist.
    #[clap(short, long, value_name = "FILE", default_value = "icon.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let icon = icon_gen::render();
    icon_gen::save(&icon, &args.output)?;

    println!("✓ Icon created successfully: {}", args.output.display());
    Ok(())
}
