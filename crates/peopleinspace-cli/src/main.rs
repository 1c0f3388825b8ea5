mod app;
mod app_state;
mod config;
mod logging;
mod navigation;
mod print;
mod screens;
mod tui;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use peopleinspace_models::{PersonName, Route};
use peopleinspace_sdk::{
    PeopleInSpaceApi, PeopleInSpaceRepository, PersonDirectory, Poller, ViewModelFacade,
};
use tracing::info;

use crate::app::PeopleInSpaceApp;
use crate::app_state::AppController;
use crate::config::AppConfig;
use crate::screens::{detail, list};
use crate::tui::{Action, EventHandler, Tui};

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(name = "peopleinspace")]
#[command(about = "Who is in space right now, and where the station is")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Base URL of the open-notify API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Use a built-in crew instead of the network
    #[arg(long, global = true)]
    pub offline: bool,

    /// Person directory file with photos and bios (JSON)
    #[arg(long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive full-screen viewer (default)
    Tui {
        /// Start on this route, e.g. "PersonDetails/Alice"
        #[arg(long, default_value = "PersonList")]
        route: Route,

        /// Log file while the viewer is running
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Print the people list once
    List,
    /// Print one person's details once
    Show {
        /// Exact name as listed
        name: PersonName,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(path) = cli.directory {
        config.directory = Some(path);
    }

    match cli.command.unwrap_or(Commands::Tui {
        route: Route::START,
        log_file: None,
    }) {
        Commands::Tui { route, log_file } => {
            let log_path = logging::init_file(log_file.as_deref().or(config.log_file.as_deref()))?;
            info!(log = %log_path.display(), "starting viewer");
            run_tui(&config, cli.offline, route).await
        }
        Commands::List => {
            logging::init_stderr();
            let repo = load_once(&config, cli.offline).await?;
            let people = repo.observe_people_in_space().borrow().clone();
            let position = *repo.observe_position().borrow();
            print!("{}", print::list_text(&list::view(&people, position, &repo)));
            Ok(())
        }
        Commands::Show { name } => {
            logging::init_stderr();
            let repo = load_once(&config, cli.offline).await?;
            print!("{}", print::detail_text(&detail::view(name.as_str(), &repo)));
            Ok(())
        }
    }
}

fn api(config: &AppConfig) -> anyhow::Result<PeopleInSpaceApi> {
    PeopleInSpaceApi::new(&config.api_url, config.http_timeout)
        .with_context(|| format!("invalid API configuration for {}", config.api_url))
}

fn directory(config: &AppConfig) -> anyhow::Result<PersonDirectory> {
    PersonDirectory::load(config.directory.as_deref()).with_context(|| match &config.directory {
        Some(path) => format!("loading person directory {}", path.display()),
        None => "loading person directory".to_string(),
    })
}

/// Repository filled by a single fetch of both feeds.
async fn load_once(config: &AppConfig, offline: bool) -> anyhow::Result<PeopleInSpaceRepository> {
    let directory = directory(config)?;
    if offline {
        return Ok(PeopleInSpaceRepository::demo(directory));
    }
    let repo = PeopleInSpaceRepository::new(directory);
    repo.refresh_all(&api(config)?).await;
    Ok(repo)
}

async fn run_tui(config: &AppConfig, offline: bool, route: Route) -> anyhow::Result<()> {
    let directory = directory(config)?;
    let (repo, _poller) = if offline {
        (Arc::new(PeopleInSpaceRepository::demo(directory)), None)
    } else {
        let repo = Arc::new(PeopleInSpaceRepository::new(directory));
        let poller = Poller::spawn(Arc::clone(&repo), api(config)?, config.intervals);
        (repo, Some(poller))
    };

    let mut events = EventHandler::new(TICK_RATE);
    events.forward_changes(repo.observe_people_in_space());
    events.forward_changes(repo.observe_position());

    let mut app = PeopleInSpaceApp::new(repo).with_route(route);

    let mut terminal = tui::init()?;
    let result = event_loop(&mut terminal, &mut app, &mut events).await;
    tui::restore()?;
    info!(screen = %app.navigation().state().current_screen, "viewer closed");
    result
}

async fn event_loop(
    terminal: &mut Tui,
    app: &mut PeopleInSpaceApp,
    events: &mut EventHandler,
) -> anyhow::Result<()> {
    terminal.draw(|f| app.render(f))?;
    while let Some(action) = events.next_async().await {
        let redraw = !matches!(action, Action::Tick);
        app.update(action);
        if app.should_quit() {
            break;
        }
        if redraw {
            terminal.draw(|f| app.render(f))?;
        }
    }
    Ok(())
}
