use anyhow::Result;
use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Handle help flag
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        schoolscout::cli::print_help("schoolscout");
        return Ok(());
    }

    // Optional --root override for config and data directories
    let mut override_root: Option<PathBuf> = None;
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if (arg == "--root" || arg == "-r")
            && let Some(path) = iter.next()
        {
            override_root = Some(PathBuf::from(path));
        }
    }

    schoolscout::tui::run(override_root).await
}
