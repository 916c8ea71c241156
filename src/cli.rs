// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Schoolscout v{} - A terminal browser for summer & winter school listings (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("KEYBINDINGS:");
    println!("    j/k, Up/Down      Move between school cards");
    println!("    PgUp/PgDn         Jump by 10 cards");
    println!("    /                 Filter by school name (Enter commits, Esc cancels)");
    println!("    s                 Cycle registration status filter (All/Open/Closed)");
    println!("    o                 Toggle sort order on start date");
    println!("    f / t             Edit start-date-from / start-date-to bound (YYYY-MM-DD)");
    println!("    b                 Edit application-deadline upper bound (YYYY-MM-DD)");
    println!("    c                 Clear all filters");
    println!("    Enter/Space       Expand or collapse the selected card's description");
    println!("    ?                 Toggle the full help footer");
    println!("    q                 Quit");
    println!();
    println!("CONFIGURATION:");
    println!("    The listing endpoint URL is stored in config.toml; on first run the");
    println!("    app prompts for it. Use --root to relocate config and data.");
    println!();
    println!("MORE INFO:");
    println!("    Repository: https://codeberg.org/schoolscout/schoolscout");
    println!("    License:    GPL-3.0");
}
