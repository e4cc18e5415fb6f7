use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use marquee::MeasureContext;
use marquee::app::{App, Overrides, Settings};
use marquee::config;

/// Scroll a line of text across the terminal
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Scroll a line of text horizontally inside a fixed-width box"
)]
struct Args {
    /// Text to scroll
    title: String,

    /// Visible width in columns
    #[arg(long)]
    width: Option<u16>,

    /// Milliseconds between steps
    #[arg(long)]
    delay: Option<u64>,

    /// Font shorthand, e.g. "bold 28px arial"
    #[arg(long)]
    font: Option<String>,

    /// Columns advanced per step
    #[arg(long)]
    step: Option<f64>,

    /// Milliseconds to hold at each end
    #[arg(long)]
    hold: Option<u64>,

    /// Border and text colour (name, index or #rrggbb)
    #[arg(long)]
    color: Option<String>,

    /// Identifier for the marquee box
    #[arg(long)]
    id: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            width: self.width,
            delay_ms: self.delay,
            pixel_step: self.step,
            font: self.font.clone(),
            hold_ms: self.hold,
            color: self.color.clone(),
            id: self.id.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/marquee-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/marquee-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== MARQUEE DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();
    let config_result = config::load_config();

    // Reject bad settings before touching the terminal
    let settings = Settings::resolve(&args.title, args.overrides(), &config_result.config)?;
    let app = App::new(&settings, &mut MeasureContext::cells(), config_result.warning);

    let terminal = init_terminal()?;
    let result = run(terminal, app);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== MARQUEE DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    let player = app.spawn_player()?;
    let result = event_loop(&mut terminal, &mut app);

    // Cancels the player on every exit path, including draw errors
    app.quit();
    if player.join().is_err() {
        log::error!("Player thread panicked");
    }

    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            return Ok(());
        }
    }
}
