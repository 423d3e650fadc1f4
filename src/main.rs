use arcade::core::session::{InputResult, Session};
use arcade::games::GameKind;
use arcade::input::handle_key;
use arcade::ui::draw_ui;
use arcade::utils::build_info::version_line;
use arcade::utils::config::Settings;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn print_help() {
    println!("Arcade - Terminal Snake and 2048\n");
    println!("Usage: arcade [command]\n");
    println!("Commands:");
    println!("  snake        Start Snake directly");
    println!("  2048         Start 2048 directly");
    println!("  init-config  Write the default settings file");
    println!("  --version    Show version information");
    println!("  --help       Show this help message");
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut start_game = None;

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "init-config" => {
                let path = Settings::default().save()?;
                println!("Wrote default settings to {}", path.display());
                std::process::exit(0);
            }
            other => match GameKind::from_arg(other) {
                Some(kind) => start_game = Some(kind),
                None => {
                    eprintln!("Unknown command: {}", other);
                    eprintln!("Run 'arcade --help' for usage.");
                    std::process::exit(1);
                }
            },
        }
    }

    let settings = Settings::load();
    let mut session = Session::new(rand::thread_rng());
    if let Some(kind) = start_game {
        session.launch(kind, Instant::now());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &settings);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: ratatui::backend::Backend, R: rand::Rng>(
    terminal: &mut Terminal<B>,
    session: &mut Session<R>,
    settings: &Settings,
) -> io::Result<()> {
    let frame_budget = Duration::from_millis(settings.frame_ms);

    loop {
        terminal.draw(|f| draw_ui(f, session, settings))?;

        // Wake up early when the snake's next step is due
        let wait = session
            .scheduler
            .time_until_due(Instant::now())
            .map_or(frame_budget, |due| due.min(frame_budget));

        if event::poll(wait)? {
            if let Event::Key(key_event) = event::read()? {
                if handle_key(key_event, session, settings, Instant::now()) == InputResult::Quit {
                    return Ok(());
                }
            }
        }

        session.poll_tick(Instant::now());
    }
}
