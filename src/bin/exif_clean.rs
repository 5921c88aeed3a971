use std::path::Path;

use console::style;

use lenswipe::run_clean;

fn main() {
    println!("{}", style("Starting EXIF data removal process.").bold());
    println!(
        "{}",
        style("This will overwrite original files and cannot be undone.").yellow()
    );

    let summary = run_clean(Path::new("."));

    println!();
    let line = format!(
        "EXIF removal process complete. {} processed, {} failed.",
        summary.processed(),
        summary.failed()
    );
    if summary.failed() == 0 {
        println!("{}", style(line).green());
    } else {
        println!("{}", style(line).yellow());
    }
}
