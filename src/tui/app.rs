use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::todo::models::{FilterBy, Todo, count_not_completed};
use crate::tui::handlers::{HelpModeAction, KeyHandler, NormalModeAction, WarningModeAction};
use crate::tui::timer::ErrorTimer;
use anyhow::Result;
use crossterm::event::KeyEvent;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

pub const LOAD_ERROR_MESSAGE: &str = "Unable to load todos";

/// How long an error notification stays visible before self-clearing.
pub const ERROR_TTL: Duration = Duration::from_secs(3);

type FetchResult = Result<Vec<Todo>, ApiError>;

#[derive(Debug)]
pub struct App {
    pub todos: Vec<Todo>,
    pub filtered_by: FilterBy,
    pub toggle_all: bool,
    pub error_message: String,
    pub selected_index: usize,
    pub should_quit: bool,
    pub help_mode: bool,
    pub user_warning: bool,
    pub loading: bool,
    error_timer: ErrorTimer,
    fetch: Option<Receiver<FetchResult>>,
}

impl App {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            filtered_by: FilterBy::default(),
            toggle_all: false,
            error_message: String::new(),
            selected_index: 0,
            should_quit: false,
            help_mode: false,
            user_warning: false,
            loading: false,
            error_timer: ErrorTimer::new(),
            fetch: None,
        }
    }

    /// App shown when no valid user id is configured. No fetch is ever
    /// issued from this state.
    pub fn with_user_warning() -> Self {
        let mut app = Self::new();
        app.user_warning = true;
        app
    }

    /// Kick off the one startup fetch on a background thread. The thread
    /// sends exactly one result and exits; if the app is torn down first,
    /// the receiver is gone and the send fails harmlessly.
    pub fn start_fetch(&mut self, client: ApiClient, user_id: i64) {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(client.get_todos(user_id));
        });
        self.fetch = Some(rx);
        self.loading = true;
    }

    /// Drive time-based state: the in-flight fetch and the error timer.
    /// Called once per event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        self.poll_fetch(now);

        if self.error_timer.expired(now) {
            self.clear_error_message();
        }
    }

    fn poll_fetch(&mut self, now: Instant) {
        let Some(rx) = &self.fetch else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(todos)) => {
                self.fetch = None;
                self.loading = false;
                self.replace_todos(todos);
            }
            Ok(Err(_)) => {
                self.fetch = None;
                self.loading = false;
                self.set_error_message(LOAD_ERROR_MESSAGE, now);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.fetch = None;
                self.loading = false;
            }
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.user_warning {
            self.handle_warning_mode_key(key_event)
        } else if self.help_mode {
            self.handle_help_mode_key(key_event)
        } else {
            self.handle_normal_mode_key(key_event)
        }
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::MoveSelectionUp => self.move_selection_up(),
            NormalModeAction::MoveSelectionDown => self.move_selection_down(),
            NormalModeAction::ToggleSelectedTodo => self.toggle_selected_todo(),
            NormalModeAction::ToggleAll => self.handle_toggle_all(),
            NormalModeAction::ClearCompleted => self.handle_clear_completed(),
            NormalModeAction::FilterAll => self.set_filter(FilterBy::All),
            NormalModeAction::FilterActive => self.set_filter(FilterBy::Active),
            NormalModeAction::FilterCompleted => self.set_filter(FilterBy::Completed),
            NormalModeAction::CycleFilter => self.set_filter(self.filtered_by.next()),
            NormalModeAction::DismissError => self.clear_error_message(),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::None => {}
        }
        Ok(())
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
            self.help_mode = false;
        }
        Ok(())
    }

    fn handle_warning_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        if KeyHandler::handle_warning_mode_key(key_event) == WarningModeAction::Quit {
            self.should_quit = true;
        }
        Ok(())
    }

    /// The todos visible under the current filter, in canonical order.
    /// Recomputed on every call; nothing is cached.
    pub fn filtered_todos(&self) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| self.filtered_by.matches(todo))
            .collect()
    }

    /// Canonical indices of the todos visible under the current filter.
    fn filtered_indices(&self) -> Vec<usize> {
        self.todos
            .iter()
            .enumerate()
            .filter(|(_, todo)| self.filtered_by.matches(todo))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn number_of_not_completed(&self) -> usize {
        count_not_completed(&self.todos)
    }

    /// Keep the derived flag in sync with the canonical list. Run after
    /// every mutation of `todos`; the invariant is
    /// `toggle_all == (!todos.is_empty() && no active todos remain)`.
    fn recompute_toggle_all(&mut self) {
        self.toggle_all = !self.todos.is_empty() && self.number_of_not_completed() == 0;
    }

    fn replace_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.recompute_toggle_all();
        self.clamp_selection();
    }

    /// Flip every todo to the opposite of the current aggregate state:
    /// if anything is still active, complete everything; if everything
    /// is complete, reactivate everything.
    pub fn handle_toggle_all(&mut self) {
        let completed = !self.toggle_all;
        for todo in &mut self.todos {
            todo.completed = completed;
        }
        self.recompute_toggle_all();
        self.clamp_selection();
    }

    /// Drop every completed todo, keeping the active ones in order.
    /// Irreversible.
    pub fn handle_clear_completed(&mut self) {
        self.todos.retain(|todo| !todo.completed);
        self.recompute_toggle_all();
        self.clamp_selection();
    }

    /// Flip completion of the todo under the cursor. The cursor indexes
    /// the filtered view; the mutation lands on the canonical list.
    pub fn toggle_selected_todo(&mut self) {
        let indices = self.filtered_indices();
        if let Some(&canonical) = indices.get(self.selected_index) {
            let todo = &mut self.todos[canonical];
            todo.completed = !todo.completed;
            self.recompute_toggle_all();
            self.clamp_selection();
        }
    }

    pub fn set_filter(&mut self, filter: FilterBy) {
        self.filtered_by = filter;
        self.clamp_selection();
    }

    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    fn move_selection_down(&mut self) {
        let visible = self.filtered_todos().len();
        if self.selected_index < visible.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let visible = self.filtered_todos().len();
        if self.selected_index >= visible {
            self.selected_index = visible.saturating_sub(1);
        }
    }

    /// Show an error notification and arm its auto-dismiss deadline.
    /// Setting a new message re-arms from scratch.
    pub fn set_error_message(&mut self, message: &str, now: Instant) {
        self.error_message = message.to_string();
        self.error_timer.arm(now, ERROR_TTL);
    }

    /// Manual dismiss: clears the banner and cancels the pending
    /// deadline so it cannot fire later.
    pub fn clear_error_message(&mut self) {
        self.error_message.clear();
        self.error_timer.cancel();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
