use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use folio_term::application::cli;
use folio_term::domain::models::Action;
use folio_term::domain::models::Event;
use folio_term::domain::services::ActionsService;
use folio_term::domain::services::LocalClock;
use folio_term::{destruct_terminal_for_panic, start_loop};
use folio_term::{AppStateProps, ClientManager, Config, ConfigKey};
use log::LevelFilter;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::task;

fn init_logging(level: &str) -> Result<()> {
    let log_level_filter = level.parse().unwrap_or(LevelFilter::Info);

    // Logs go to a file so they do not corrupt the alternate screen.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("folio.log")?;

    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    return Ok(());
}

async fn run_ui(
    props: AppStateProps,
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, props, action_tx, event_tx, event_rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    result
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build().get_matches();

    if matches.subcommand_matches("config-default").is_some() {
        println!("{}", Config::serialize_default(cli::build()));
        return Ok(());
    }

    let log_level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| "info".to_string());
    init_logging(&log_level)?;

    Config::load(cli::build(), vec![&matches]).await?;
    log::info!(
        "starting folio for {} with theme {}",
        Config::get(ConfigKey::GithubUser),
        Config::get(ConfigKey::Theme)
    );

    let props = AppStateProps {
        clock: Arc::new(LocalClock::default()),
        github_user: Config::get(ConfigKey::GithubUser),
        show_preloader: !matches.get_flag("no-preloader"),
        theme: Config::theme_preference()?,
    };
    let clients = ClientManager::from_config()?;

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();

    let worker_event_tx = event_tx.clone();
    background_futures.spawn(async move {
        ActionsService::start(clients, worker_event_tx, &mut action_rx).await
    });

    let result = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(res)) => res,
            Some(Err(err)) => Err(err.into()),
            None => Ok(()),
        },
        res = run_ui(props, action_tx, event_tx, event_rx) => res,
    );

    if result.is_err() {
        destruct_terminal_for_panic();
    }

    result
}
