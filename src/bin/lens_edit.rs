use std::path::Path;
use std::process;

use console::style;

use lenswipe::{run_edit, EditorConfig, INPUT_DIR_NAME, OUTPUT_DIR_NAME};

#[tokio::main]
async fn main() {
    // Credential problems are fatal before any discovery or network work.
    let config = match EditorConfig::from_env() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", style(message).red());
            process::exit(1);
        }
    };

    let summary = match run_edit(
        &config,
        Path::new(INPUT_DIR_NAME),
        Path::new(OUTPUT_DIR_NAME),
    )
    .await
    {
        Ok(summary) => summary,
        Err(message) => {
            eprintln!("{}", style(message).red());
            process::exit(1);
        }
    };

    println!();
    let line = format!(
        "Processing complete. {} processed, {} failed.",
        summary.processed(),
        summary.failed()
    );
    if summary.failed() == 0 {
        println!("{}", style(line).green());
    } else {
        println!("{}", style(line).yellow());
    }
}
