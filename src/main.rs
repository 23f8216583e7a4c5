//! Descartes - A terminal-based function grapher.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use descartes::app::App;
use descartes::expr::parse_statement;
use descartes::range::XRange;
use descartes::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "descartes")]
#[command(about = "A terminal-based function grapher", long_about = None)]
struct Args {
    /// Functions to preload, as 'y = ...' statements
    #[arg(value_name = "FUNCTION")]
    functions: Vec<String>,

    /// Initial x range, as two integers
    #[arg(long, default_value = "-10, 10", value_name = "RANGE", allow_hyphen_values = true)]
    range: String,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Descartes");
    }

    // Validate command-line inputs before touching the terminal
    let mut preloaded = Vec::with_capacity(args.functions.len());
    for raw in &args.functions {
        match parse_statement(raw) {
            Ok(expr) => preloaded.push(expr),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            },
        }
    }
    if let Err(e) = args.range.parse::<XRange>() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let mut app = App::new();
    for expr in preloaded {
        app.functions.add(expr);
    }
    app.range_input.set_value(args.range.as_str());
    if !app.functions.is_empty() {
        app.plot_graphs();
    }
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Descartes exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Dialog mode - handle separately
                if app.dialog.is_some() {
                    match (key.modifiers, key.code) {
                        (KeyModifiers::NONE, KeyCode::Enter)
                        | (KeyModifiers::NONE, KeyCode::Esc) => {
                            app.dismiss_dialog();
                        },
                        (KeyModifiers::CONTROL, KeyCode::Char('c'))
                        | (KeyModifiers::CONTROL, KeyCode::Char('q')) => return Ok(()),
                        _ => {},
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::CONTROL, KeyCode::Char('c'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),

                    // Actions
                    (KeyModifiers::CONTROL, KeyCode::Char('p')) => {
                        app.plot_graphs();
                    },
                    (KeyModifiers::CONTROL, KeyCode::Char('x')) => {
                        app.clear_functions();
                    },
                    (KeyModifiers::CONTROL, KeyCode::Char('t')) => {
                        app.cycle_theme();
                    },

                    // Clipboard
                    (KeyModifiers::CONTROL, KeyCode::Char('y')) => {
                        app.copy_function_list();
                    },
                    (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                        app.copy_plot_data();
                    },

                    // Focus
                    (KeyModifiers::NONE, KeyCode::Tab)
                    | (KeyModifiers::SHIFT, KeyCode::BackTab)
                    | (KeyModifiers::NONE, KeyCode::BackTab)
                    | (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Down) => {
                        app.cycle_focus();
                    },

                    // Submit the focused field
                    (KeyModifiers::NONE, KeyCode::Enter) => {
                        app.submit_focused();
                    },

                    // Editing
                    (KeyModifiers::NONE, KeyCode::Backspace) => {
                        app.focused_input_mut().backspace();
                    },
                    (KeyModifiers::NONE, KeyCode::Delete) => {
                        app.focused_input_mut().delete_forward();
                    },
                    (KeyModifiers::NONE, KeyCode::Left) => {
                        app.focused_input_mut().move_left();
                    },
                    (KeyModifiers::NONE, KeyCode::Right) => {
                        app.focused_input_mut().move_right();
                    },
                    (KeyModifiers::NONE, KeyCode::Home) => {
                        app.focused_input_mut().move_home();
                    },
                    (KeyModifiers::NONE, KeyCode::End) => {
                        app.focused_input_mut().move_end();
                    },
                    (KeyModifiers::NONE, KeyCode::Char(c))
                    | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                        app.focused_input_mut().insert(c);
                    },

                    _ => {},
                }
            }
        }
    }
}
