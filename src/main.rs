use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::terminal::enable_raw_mode;
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use questfolio::app::App;
use questfolio::cli::{handle_version_command, parse_args, CliCommand};
use questfolio::startup::logging;
use questfolio::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};
use questfolio::ui;

fn main() -> Result<()> {
    // CLI flags are handled before anything touches the terminal
    if parse_args(std::env::args()) == CliCommand::Version {
        handle_version_command();
    }

    color_eyre::install()?;

    // The TUI owns stdout, so tracing goes to a file; running unlogged is
    // fine if no state directory exists.
    if let Ok(path) = logging::init() {
        tracing::info!(path = %path.display(), "logging to file");
    }

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Initialize application state and capture initial dimensions
    let mut app = App::new();
    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);
    tracing::info!(width = size.width, height = size.height, "questfolio started");

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    // Restore terminal
    leave_tui_mode(terminal.backend_mut());
    tracing::info!("questfolio exited");

    result
}

/// The event loop: draw when dirty, then wait for the next input event.
///
/// There are no timers, channels, or background tasks - keys, clicks, and
/// resizes are the only things that can change state, so the input stream
/// is the only awaited source.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    while !app.should_quit {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        match event_stream.next().await {
            Some(Ok(event)) => match event {
                Event::Resize(width, height) => {
                    app.update_terminal_dimensions(width, height);
                }
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                _ => {}
            },
            // Transient read errors are skipped; a closed stream means the
            // terminal is gone and there is nothing left to serve.
            Some(Err(_)) => {}
            None => break,
        }
    }

    Ok(())
}
