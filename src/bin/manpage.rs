//! Render man pages for `liquid-ui` and its subcommands.
//!
//! Usage: `cargo run --bin manpage [OUT_DIR]` (defaults to `man/`).

use clap::CommandFactory;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));
    std::fs::create_dir_all(&out_dir)?;

    clap_mangen::generate_to(liquid_ui::cli::Cli::command(), &out_dir)?;

    let mut pages: Vec<_> = std::fs::read_dir(&out_dir)?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    pages.sort();
    for page in pages {
        println!("Generated {}", page.display());
    }

    Ok(())
}
