use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use localesync::{SyncOptions, run};

/// Reconcile every locale folder against the base-language translations.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing one subfolder per locale (e.g. `_locales`)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Name of the base-language folder used as the reference
    #[arg(long, default_value = "en")]
    base: String,

    /// Translation file name inside each locale folder
    #[arg(long, default_value = "messages.json")]
    file_name: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let options = SyncOptions {
        root: args.root,
        base_folder: args.base,
        file_name: args.file_name,
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
