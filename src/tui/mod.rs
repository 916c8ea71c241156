// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod network;
pub mod state;
pub mod view;

use crate::client::ListingClient;
use crate::config::{self, Config};
use crate::context::{SharedContext, StandardContext};
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};
use tokio::sync::mpsc;

pub async fn run(override_root: Option<PathBuf>) -> Result<()> {
    let ctx: SharedContext = Arc::new(StandardContext::new(override_root));

    // The terminal belongs to the TUI, so logging goes to a file.
    if let Some(log_path) = ctx.get_log_file_path()
        && let Ok(file) = std::fs::File::create(&log_path)
    {
        let _ = simplelog::WriteLogger::init(
            log::LevelFilter::Info,
            simplelog::Config::default(),
            file,
        );
    }

    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("schoolscout_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    let config_result = Config::load(ctx.as_ref());
    let cfg = match config_result {
        Ok(c) => c,
        Err(e) => {
            // If the error is NOT a missing config file, it's a syntax/permission error.
            // Report it and exit instead of treating it as a fresh install/onboarding.
            if !Config::is_missing_config_error(&e) {
                eprintln!("Error loading configuration:\n{}", e);
                std::process::exit(1);
            }

            // Interactive Onboarding
            println!("Welcome to Schoolscout (TUI). No configuration file found.");
            println!("Let's set up the listing endpoint.\n");

            let mut new_config = Config::default();

            loop {
                print!(
                    "Listing endpoint URL [{}]: ",
                    config::default_listing_url()
                );
                io::stdout().flush()?;

                let mut url = String::new();
                io::stdin().read_line(&mut url)?;
                let url = url.trim();
                if !url.is_empty() {
                    new_config.listing_url = url.to_string();
                }

                println!("\nTesting connection...");

                let check_result = async {
                    let client =
                        ListingClient::new(&new_config.listing_url)?;
                    client.fetch_schools().await.map(|schools| schools.len())
                }
                .await;

                match check_result {
                    Ok(count) => {
                        println!("Success! Found {} schools.", count);
                        break;
                    }
                    Err(e) => {
                        eprintln!("Connection failed: {}", e);
                        println!("Retry configuration? [Y/n]");
                        let mut retry = String::new();
                        io::stdin().read_line(&mut retry)?;
                        if retry.trim().eq_ignore_ascii_case("n") {
                            println!("Keeping the provided endpoint anyway.");
                            break;
                        }
                    }
                }
            }

            if let Err(e) = new_config.save(ctx.as_ref()) {
                eprintln!("Warning: Could not save config file: {}", e);
            } else if let Ok(path) = Config::get_path_string(ctx.as_ref()) {
                println!("Configuration saved to: {}", path);
            }

            println!("Starting TUI...");
            std::thread::sleep(Duration::from_secs(1));
            new_config
        }
    };

    // --- TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- STATE INIT ---
    let mut app_state = AppState::new();

    let (event_tx, mut event_rx) = mpsc::channel(10);

    // --- NETWORK TASK ---
    // One fetch per session; the actor exits once it has reported.
    tokio::spawn(network::run_network_actor(cfg, event_tx));

    // --- UI LOOP ---
    loop {
        terminal.draw(|f| draw(f, &mut app_state))?;

        // A. Network Events
        if let Ok(event) = event_rx.try_recv() {
            handlers::handle_app_event(&mut app_state, event);
        }

        // B. Input Events
        if crossterm::event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            match event {
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => app_state.next(),
                    MouseEventKind::ScrollUp => app_state.previous(),
                    _ => {}
                },
                Event::Key(key) => {
                    // Filter out KeyRelease events to prevent double input on Windows
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }

                    if handlers::handle_key_event(key, &mut app_state) {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    // --- CLEANUP ---
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
