use std::io;
use std::sync::mpsc;
use std::sync::Arc;

use hackterm::platform::keys::decode_keys;
use hackterm::platform::process_terminal::{install_signal_handlers, ProcessTerminal};
use hackterm::platform::terminal::{Terminal, TerminalGuard};
use hackterm::{logging, CommandTable, ContentTable, Dispatcher, EnvConfig, RngSource};
use portfolio_shell::app::App;
use portfolio_shell::runtime::{Event, Runner, SystemMailComposer, TerminalHost};
use portfolio_shell::tui::{lock_screen, Screen};

fn main() -> io::Result<()> {
    let config = EnvConfig::from_env().map_err(io::Error::other)?;
    logging::init(&config).map_err(io::Error::other)?;
    let content = ContentTable::load(config.content_path.as_deref()).map_err(io::Error::other)?;

    let mut app = App::new(content.identity.clone());
    let dispatcher = Arc::new(Dispatcher::new(CommandTable::builtin(), content));

    let terminal = ProcessTerminal::new();
    let screen = Screen::shared(terminal.writer());
    let _signals = install_signal_handlers(terminal.restorer())?;

    let (events_tx, events_rx) = mpsc::channel();
    let runner = Runner::new(
        dispatcher,
        Arc::clone(&screen),
        Box::new(RngSource::from_seed_opt(config.seed)),
        config.effective_speed(),
        events_tx.clone(),
    );
    let mut host = TerminalHost::new(runner, Box::new(SystemMailComposer));

    let mut guard = TerminalGuard::new(terminal);
    if let Some(terminal) = guard.terminal_mut() {
        let input_tx = events_tx;
        terminal.start(Box::new(move |chunk| {
            let _ = input_tx.send(Event::Input(chunk));
        }))?;
    }

    app.start(!config.skip_banner, &mut host);

    while !app.should_exit {
        let Ok(event) = events_rx.recv() else {
            break;
        };
        match event {
            Event::Input(chunk) => {
                for key in decode_keys(&chunk) {
                    app.on_key(key, &mut host);
                    if app.should_exit {
                        break;
                    }
                }
            }
            Event::JobFinished { cwd } => app.on_job_finished(cwd, &mut host),
        }
    }

    lock_screen(&screen).finish();
    match guard.into_inner() {
        Some(mut terminal) => terminal.stop(),
        None => Ok(()),
    }
}
