//! The interactive catalog browser.
//!
//! All mutable UI state lives in [`App`] and is passed explicitly to the
//! render functions; there are no globals. Dataset fetches run as
//! background tasks and deliver their outcome over a channel tagged with a
//! request id, so a search re-triggered mid-flight can never clobber a
//! newer one: stale outcomes are discarded on arrival.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use korimako_core::model::BirdRecord;
use korimako_core::schema::Database;
use korimako_core::taxonomy::{ConservationStatus, Theme};
use korimako_data::{load_dataset, Config, DataError};
use korimako_query::{arrange, arrange_favourites, SearchQuery, SortOrder, StatusFilter};

pub mod infobox;
pub mod styles;

/// How long the title and help bars stay hidden after startup before they
/// fade in.
const FADE_IN_DELAY: Duration = Duration::from_millis(200);

/// How long one event-loop tick waits for input.
const TICK: Duration = Duration::from_millis(50);

/// What a finished fetch was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Search,
    Favourites,
}

/// The result of one background dataset fetch.
#[derive(Debug)]
pub struct FetchOutcome {
    pub request: u64,
    pub mode: FetchMode,
    pub result: Result<Vec<BirdRecord>, DataError>,
}

/// A fetch the event loop must start.
#[derive(Debug)]
pub struct PendingFetch {
    pub request: u64,
    pub mode: FetchMode,
    pub path: PathBuf,
}

/// Whether a fetch is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Loading { request: u64 },
}

/// The search form as currently edited (not yet submitted).
#[derive(Debug, Default)]
pub struct SearchForm {
    pub text: String,
    /// 0 = All; 1..=11 index into the fixed status vocabulary.
    pub status_index: usize,
    pub order: SortOrder,
}

impl SearchForm {
    /// Snapshot the form into the query a submit would run.
    fn to_query(&self) -> SearchQuery {
        let status = if self.status_index == 0 {
            StatusFilter::All
        } else {
            StatusFilter::Only(ConservationStatus::ALL[self.status_index - 1].clone())
        };
        SearchQuery {
            text: self.text.clone(),
            status,
            order: self.order,
        }
    }

    pub fn status_label(&self) -> String {
        if self.status_index == 0 {
            "All".to_string()
        } else {
            ConservationStatus::ALL[self.status_index - 1]
                .label()
                .to_string()
        }
    }

    fn cycle_status(&mut self) {
        self.status_index = (self.status_index + 1) % (ConservationStatus::ALL.len() + 1);
    }

    fn toggle_order(&mut self) {
        self.order = match self.order {
            SortOrder::Alphabetical => SortOrder::ConservationStatus,
            SortOrder::ConservationStatus => SortOrder::Alphabetical,
        };
    }
}

/// Application state for the browser.
#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub form: SearchForm,
    /// True while `/` has focus and keys type into the search text.
    pub editing: bool,
    pub results: Vec<BirdRecord>,
    pub selected: usize,
    pub offset: usize,
    pub favourites: Vec<String>,
    /// None when the store could not be opened; favouriting then no-ops.
    pub store: Option<Database>,
    pub activity: Activity,
    /// The last fetch error, shown until the next successful fetch.
    pub error: Option<String>,
    /// The query belonging to the most recent search request.
    submitted: SearchQuery,
    next_request: u64,
    pub should_quit: bool,
    started: Instant,
}

impl App {
    /// Create a new `App`, opening the favourites store. A store that fails
    /// to open is reported and left out rather than aborting the browser.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let store = match Database::open(&config.database_path) {
            Ok(db) => Some(db),
            Err(err) => {
                log::warn!("favourites store unavailable: {err}");
                None
            }
        };
        let favourites = store
            .as_ref()
            .and_then(|db| db.list_favourites().ok())
            .unwrap_or_default();

        Self {
            config,
            theme: Theme::default(),
            form: SearchForm::default(),
            editing: false,
            results: Vec::new(),
            selected: 0,
            offset: 0,
            favourites,
            store,
            activity: Activity::Idle,
            error: None,
            submitted: SearchQuery::default(),
            next_request: 0,
            should_quit: false,
            started: Instant::now(),
        }
    }

    /// True once the startup fade-in delay has elapsed.
    pub fn faded_in(&self) -> bool {
        self.started.elapsed() >= FADE_IN_DELAY
    }

    pub fn is_favourite(&self, name: &str) -> bool {
        self.favourites.iter().any(|n| n == name)
    }

    /// Begin a search fetch for the current form state.
    fn start_search(&mut self) -> PendingFetch {
        self.submitted = self.form.to_query();
        self.start_fetch(FetchMode::Search)
    }

    /// Begin a show-favourites fetch.
    fn start_favourites(&mut self) -> PendingFetch {
        self.start_fetch(FetchMode::Favourites)
    }

    fn start_fetch(&mut self, mode: FetchMode) -> PendingFetch {
        self.next_request += 1;
        self.activity = Activity::Loading {
            request: self.next_request,
        };
        PendingFetch {
            request: self.next_request,
            mode,
            path: self.config.dataset_path.clone(),
        }
    }

    /// Fold a finished fetch back into the state. Outcomes from superseded
    /// requests are dropped without effect.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.request != self.next_request {
            log::debug!("discarding stale fetch outcome {}", outcome.request);
            return;
        }
        self.activity = Activity::Idle;
        match outcome.result {
            Ok(records) => {
                self.error = None;
                self.results = match outcome.mode {
                    FetchMode::Search => arrange(&records, &self.submitted)
                        .into_iter()
                        .cloned()
                        .collect(),
                    FetchMode::Favourites => arrange_favourites(&records, &self.favourites)
                        .into_iter()
                        .cloned()
                        .collect(),
                };
                self.selected = 0;
                self.offset = 0;
            }
            Err(err) => {
                // The previous results stay on screen.
                self.error = Some(err.to_string());
            }
        }
    }

    /// Toggle the selected bird in the favourites store and mirror the
    /// change into the cached set, so only that card's button flips.
    fn toggle_selected_favourite(&mut self) {
        let Some(bird) = self.results.get(self.selected) else {
            return;
        };
        let name = bird.common_name.clone();
        let Some(store) = self.store.as_mut() else {
            log::warn!("favourites store unavailable; toggle ignored");
            return;
        };
        match store.toggle_favourite(&name) {
            Ok(true) => self.favourites.push(name),
            Ok(false) => self.favourites.retain(|n| n != &name),
            Err(err) => log::warn!("favourite toggle failed: {err}"),
        }
    }

    /// Empty the favourites store; every visible button reverts to
    /// "Favourite" on the next frame.
    fn clear_favourites(&mut self) {
        let Some(store) = self.store.as_ref() else {
            log::warn!("favourites store unavailable; clear ignored");
            return;
        };
        match store.clear_favourites() {
            Ok(removed) => {
                log::info!("cleared {removed} favourite(s)");
                self.favourites.clear();
            }
            Err(err) => log::warn!("clear favourites failed: {err}"),
        }
    }

    /// Handle one key press; may return a fetch for the event loop to
    /// start.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<PendingFetch> {
        if self.editing {
            match key {
                KeyCode::Esc => self.editing = false,
                KeyCode::Enter => {
                    self.editing = false;
                    return Some(self.start_search());
                }
                KeyCode::Backspace => {
                    self.form.text.pop();
                }
                KeyCode::Char(c) => self.form.text.push(c),
                _ => {}
            }
            return None;
        }

        // Assume reasonable viewport height (refined in render)
        const VIEWPORT_HEIGHT: usize = 20;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.editing = true,
            KeyCode::Char('s') => self.form.cycle_status(),
            KeyCode::Char('o') => self.form.toggle_order(),
            KeyCode::Enter => return Some(self.start_search()),
            KeyCode::Char('F') => return Some(self.start_favourites()),
            KeyCode::Char(' ') => self.toggle_selected_favourite(),
            KeyCode::Char('C') => self.clear_favourites(),
            KeyCode::Char('t') => self.theme = self.theme.toggled(),
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.results.len() {
                    self.selected += 1;
                    if self.selected >= self.offset + VIEWPORT_HEIGHT {
                        self.offset = self.selected - VIEWPORT_HEIGHT + 1;
                    }
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    if self.selected < self.offset {
                        self.offset = self.selected;
                    }
                }
            }
            _ => {}
        }
        None
    }
}

/// Run the catalog browser.
///
/// Sets up the terminal, runs the main event loop, and restores the
/// terminal on exit (including on error).
pub async fn run_tui(config: Config) -> Result<()> {
    let app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, app).await;

    // Restore terminal regardless of success or failure
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();

    loop {
        while let Ok(outcome) = rx.try_recv() {
            app.apply_outcome(outcome);
        }

        terminal.draw(|frame| infobox::render(frame, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(fetch) = app.handle_key(key.code) {
                        spawn_fetch(&tx, fetch);
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn spawn_fetch(tx: &mpsc::UnboundedSender<FetchOutcome>, fetch: PendingFetch) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = load_dataset(&fetch.path).await;
        let outcome = FetchOutcome {
            request: fetch.request,
            mode: fetch.mode,
            result,
        };
        if tx.send(outcome).is_err() {
            log::debug!("browser closed before fetch {} completed", fetch.request);
        }
    });
}
