//! Development tasks: man page and shell completion generation.
//!
//! Run with `cargo run -p xtask -- <task>`. Output lands in `target/dist`
//! unless `--out-dir` says otherwise.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development task runner")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the readage(1) man page
    Man {
        /// Output directory
        #[arg(long, default_value = "target/dist")]
        out_dir: PathBuf,
    },
    /// Generate shell completions (bash, zsh, fish)
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/dist")]
        out_dir: PathBuf,
    },
}

fn main() -> std::io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => {
            fs::create_dir_all(&out_dir)?;
            let cmd = readage::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buffer = Vec::new();
            man.render(&mut buffer)?;
            let path = out_dir.join("readage.1");
            fs::write(&path, buffer)?;
            println!("wrote {}", path.display());
        }
        Task::Completions { out_dir } => {
            fs::create_dir_all(&out_dir)?;
            let mut cmd = readage::command();
            for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
                let path = clap_complete::generate_to(shell, &mut cmd, "readage", &out_dir)?;
                println!("wrote {}", path.display());
            }
        }
    }
    Ok(())
}
