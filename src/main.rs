// leaptrace: step-through visualizer for the leap-year decision program

mod program;
mod stepper;
mod trace;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ui::App;

/// Starting year when none is given on the command line
const DEFAULT_YEAR: i64 = 2000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    let year = match args.get(1) {
        Some(arg) => match arg.parse::<i64>() {
            Ok(year) => year,
            Err(_) => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("leaptrace");
                eprintln!("Error: '{}' is not a valid year", arg);
                eprintln!();
                eprintln!("Usage: {} [year]", program_name);
                eprintln!();
                eprintln!("Examples:");
                eprintln!(
                    "  {} 2000    # divisible by 400: a leap year",
                    program_name
                );
                eprintln!(
                    "  {} 1900    # divisible by 100 but not 400: not a leap year",
                    program_name
                );
                std::process::exit(1);
            }
        },
        None => DEFAULT_YEAR,
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(year);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
