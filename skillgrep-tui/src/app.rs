//! Application state for the TUI.
//!
//! One `App` owns everything: the seed data, the current screen, the
//! chat session, and the pending one-shot timers that stand in for
//! network and AI latency. Key handling dispatches on the current
//! screen; timers are checked once per tick of the main loop.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use skillgrep_core::config::DemoConfig;
use skillgrep_core::{conversation, extract, prompt, store};
use skillgrep_core::{
    Candidate, ChatMessage, Criterion, Job, JobStatus, ScoreFilter, Store, SyncMode, Stage,
};

/// Minimum trimmed length before the onboarding "Connect" action enables.
const MIN_API_KEY_LEN: usize = 8;

/// Current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// SSO sign-in gate
    Auth,
    /// ATS connection (API key entry)
    Onboarding,
    /// Job requisition list with search and sync config
    Jobs,
    /// Criteria-building chat for one job
    Chat { job_id: String },
    /// Full-run results for one job
    Results { job_id: String },
    /// Navigation target referenced a job id that does not exist
    NotFound { job_id: String },
}

/// What a pending timer does when it fires.
#[derive(Debug, Clone)]
pub enum TimerKind {
    /// Finish the simulated SSO sign-in
    SignIn,
    /// Finish the simulated ATS connection
    Connect,
    /// Deliver a scripted assistant reply
    AssistantReply { content: String },
    /// Finish the "test on 5 candidates" run
    SampleRun,
    /// Finish the full run and switch to results
    FullRun,
}

/// A one-shot cancellable deadline.
#[derive(Debug)]
struct Timer {
    kind: TimerKind,
    due: Instant,
}

/// Jobs-screen status filter, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl StatusFilter {
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Open,
            StatusFilter::Open => StatusFilter::Closed,
            StatusFilter::Closed => StatusFilter::All,
        }
    }

    fn as_status(self) -> Option<JobStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Open => Some(JobStatus::Open),
            StatusFilter::Closed => Some(JobStatus::Closed),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Open => "Open",
            StatusFilter::Closed => "Closed",
        }
    }
}

/// Which pane on the chat screen receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatFocus {
    #[default]
    Input,
    Prompt,
}

/// Main application state.
pub struct App {
    /// Simulated latency durations
    demo: DemoConfig,
    /// Current screen
    pub screen: Screen,
    /// Whether the app should exit
    pub should_quit: bool,
    /// Pending one-shot timers
    timers: Vec<Timer>,

    /// Job requisitions (mutable copies, sync-mode edits land here)
    pub jobs: Vec<Job>,
    /// Static candidate pool
    pub candidates: Vec<Candidate>,

    /// Auth: sign-in in flight
    pub signing_in: bool,

    /// Onboarding: typed API key (cosmetic, never sent anywhere)
    pub api_key: String,
    /// Onboarding: show the key as plain text
    pub show_key: bool,
    /// Onboarding: connect in flight
    pub connecting: bool,

    /// Jobs: search query
    pub search_query: String,
    /// Jobs: status filter tab
    pub status_filter: StatusFilter,
    /// Jobs: cursor into the visible (filtered) list
    pub job_cursor: usize,
    /// Jobs: sync config panel open for the selected job
    pub panel_open: bool,

    /// Which job the chat session below belongs to
    chat_job: Option<String>,
    /// Conversation history (append-only)
    pub messages: Vec<ChatMessage>,
    /// Chat input buffer
    pub input: String,
    /// Accumulated criteria (append-only)
    pub criteria: Vec<Criterion>,
    /// Generated (or hand-edited) evaluation prompt
    pub generated_prompt: String,
    /// Once the user edits the prompt directly, regeneration stops
    pub prompt_edited: bool,
    /// Assistant reply pending
    pub is_typing: bool,
    /// Sample run in flight
    pub is_testing: bool,
    /// Full run in flight
    pub is_running: bool,
    /// User turns taken in this conversation
    pub turn_count: u32,
    /// Chat: focused pane
    pub chat_focus: ChatFocus,
    /// Sample results drawer, open while Some
    pub sample_results: Option<Vec<Candidate>>,
    /// Drawer row cursor
    pub drawer_cursor: usize,
    /// Resume modal, open while Some
    pub viewing_resume: Option<Candidate>,

    /// Results: score band filter tab
    pub score_filter: ScoreFilter,
    /// Results: row cursor
    pub result_cursor: usize,
    /// Results: candidate id with the expanded reason row
    pub expanded: Option<String>,
}

impl App {
    pub fn new(demo: DemoConfig, store: &Store) -> Self {
        Self {
            demo,
            screen: Screen::Auth,
            should_quit: false,
            timers: Vec::new(),
            jobs: store.jobs().to_vec(),
            candidates: store.candidates().to_vec(),
            signing_in: false,
            api_key: String::new(),
            show_key: false,
            connecting: false,
            search_query: String::new(),
            status_filter: StatusFilter::default(),
            job_cursor: 0,
            panel_open: false,
            chat_job: None,
            messages: Vec::new(),
            input: String::new(),
            criteria: Vec::new(),
            generated_prompt: String::new(),
            prompt_edited: false,
            is_typing: false,
            is_testing: false,
            is_running: false,
            turn_count: 0,
            chat_focus: ChatFocus::default(),
            sample_results: None,
            drawer_cursor: 0,
            viewing_resume: None,
            score_filter: ScoreFilter::All,
            result_cursor: 0,
            expanded: None,
        }
    }

    // ============================================
    // Derived views
    // ============================================

    /// Jobs matching the current search query and status filter.
    pub fn visible_jobs(&self) -> Vec<&Job> {
        store::search_jobs(&self.jobs, &self.search_query, self.status_filter.as_status())
    }

    /// The job under the cursor on the jobs screen.
    pub fn selected_job(&self) -> Option<&Job> {
        self.visible_jobs().get(self.job_cursor).copied()
    }

    /// Title of the job a screen refers to.
    pub fn job_title(&self, job_id: &str) -> Option<String> {
        self.jobs.iter().find(|j| j.id == job_id).map(|j| j.title.clone())
    }

    /// Results rows: descending by score, then band-filtered.
    pub fn results_rows(&self) -> Vec<Candidate> {
        let sorted = store::sort_by_score_desc(&self.candidates);
        store::filter_by_band(&sorted, self.score_filter)
    }

    /// Whether the prompt panel is shown (first criterion onward).
    pub fn prompt_panel_visible(&self) -> bool {
        !self.criteria.is_empty()
    }

    /// Whether the quick-suggestion row is shown (greeting only so far).
    pub fn suggestions_visible(&self) -> bool {
        self.messages.len() == 1
    }

    /// Whether the onboarding Connect action is enabled.
    pub fn can_connect(&self) -> bool {
        self.api_key.trim().len() >= MIN_API_KEY_LEN && !self.connecting
    }

    // ============================================
    // Timers
    // ============================================

    fn schedule(&mut self, kind: TimerKind, ms: u64) {
        self.timers.push(Timer {
            kind,
            due: Instant::now() + Duration::from_millis(ms),
        });
    }

    /// Drop timers tied to the chat session (leaving the screen cancels
    /// the typing indicator and any in-flight run).
    fn cancel_chat_timers(&mut self) {
        self.timers.retain(|t| {
            !matches!(
                t.kind,
                TimerKind::AssistantReply { .. } | TimerKind::SampleRun | TimerKind::FullRun
            )
        });
        self.is_typing = false;
        self.is_testing = false;
        self.is_running = false;
    }

    /// Fire every timer whose deadline has passed. Called once per tick.
    pub fn tick(&mut self, now: Instant) {
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.timers.len() {
            if self.timers[i].due <= now {
                fired.push(self.timers.remove(i));
            } else {
                i += 1;
            }
        }
        for timer in fired {
            self.fire(timer.kind);
        }
    }

    fn fire(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::SignIn => {
                self.signing_in = false;
                self.screen = Screen::Onboarding;
                tracing::debug!("signed in");
            }
            TimerKind::Connect => {
                self.connecting = false;
                self.screen = Screen::Jobs;
                tracing::debug!("connected");
            }
            TimerKind::AssistantReply { content } => {
                self.is_typing = false;
                self.messages.push(ChatMessage::assistant(content));
            }
            TimerKind::SampleRun => {
                self.is_testing = false;
                self.sample_results = Some(store::sample(&self.candidates));
                self.drawer_cursor = 0;
            }
            TimerKind::FullRun => {
                self.is_running = false;
                self.sample_results = None;
                if let Screen::Chat { job_id } = &self.screen {
                    let job_id = job_id.clone();
                    self.score_filter = ScoreFilter::All;
                    self.result_cursor = 0;
                    self.expanded = None;
                    self.screen = Screen::Results { job_id };
                }
            }
        }
    }

    // ============================================
    // Key handling
    // ============================================

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl-C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // The resume modal sits above everything else
        if self.viewing_resume.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.viewing_resume = None;
            }
            return;
        }

        match &self.screen {
            Screen::Auth => self.handle_auth_key(key),
            Screen::Onboarding => self.handle_onboarding_key(key),
            Screen::Jobs => self.handle_jobs_key(key),
            Screen::Chat { .. } => self.handle_chat_key(key),
            Screen::Results { .. } => self.handle_results_key(key),
            Screen::NotFound { .. } => self.handle_not_found_key(key),
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if !self.signing_in {
                    self.signing_in = true;
                    self.schedule(TimerKind::SignIn, self.demo.sign_in_ms);
                }
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_onboarding_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
            self.show_key = !self.show_key;
            return;
        }
        match key.code {
            KeyCode::Esc => {
                // Back to the sign-in gate, abandoning an in-flight connect
                self.timers.retain(|t| !matches!(t.kind, TimerKind::Connect));
                self.connecting = false;
                self.screen = Screen::Auth;
            }
            KeyCode::Enter => {
                if self.can_connect() {
                    self.connecting = true;
                    self.schedule(TimerKind::Connect, self.demo.connect_ms);
                }
            }
            KeyCode::Backspace => {
                if !self.connecting {
                    self.api_key.pop();
                }
            }
            KeyCode::Char(c) => {
                if !self.connecting {
                    self.api_key.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_jobs_key(&mut self, key: KeyEvent) {
        if self.panel_open {
            self.handle_panel_key(key);
            return;
        }
        match key.code {
            KeyCode::Esc => {
                self.search_query.clear();
                self.job_cursor = 0;
            }
            KeyCode::Tab => {
                self.status_filter = self.status_filter.next();
                self.job_cursor = 0;
            }
            KeyCode::Up => {
                self.job_cursor = self.job_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                let count = self.visible_jobs().len();
                if count > 0 && self.job_cursor < count - 1 {
                    self.job_cursor += 1;
                }
            }
            KeyCode::Enter => {
                if self.selected_job().is_some() {
                    self.panel_open = true;
                }
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.job_cursor = 0;
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.job_cursor = 0;
            }
            _ => {}
        }
    }

    /// Keys inside the sync config panel for the selected job.
    fn handle_panel_key(&mut self, key: KeyEvent) {
        let Some(job_id) = self.selected_job().map(|j| j.id.clone()) else {
            self.panel_open = false;
            return;
        };
        match key.code {
            KeyCode::Esc => self.panel_open = false,
            KeyCode::Char('m') => {
                if let Some(job) = self.jobs.iter_mut().find(|j| j.id == job_id) {
                    let next = match job.sync_mode {
                        SyncMode::All => SyncMode::Specific,
                        SyncMode::Specific => SyncMode::None,
                        SyncMode::None => SyncMode::All,
                    };
                    job.set_sync_mode(next);
                }
            }
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                let stage = Stage::ALL[idx];
                if let Some(job) = self.jobs.iter_mut().find(|j| j.id == job_id) {
                    job.toggle_stage(stage);
                }
            }
            KeyCode::Char('f') | KeyCode::Enter => {
                self.panel_open = false;
                self.open_chat(job_id);
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        // The sample drawer takes over while open
        if self.sample_results.is_some() {
            self.handle_drawer_key(key);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') => self.start_sample_run(),
                KeyCode::Char('r') => self.start_full_run(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.cancel_chat_timers();
                self.screen = Screen::Jobs;
            }
            KeyCode::Tab => {
                if self.prompt_panel_visible() {
                    self.chat_focus = match self.chat_focus {
                        ChatFocus::Input => ChatFocus::Prompt,
                        ChatFocus::Prompt => ChatFocus::Input,
                    };
                }
            }
            KeyCode::F(n @ 1..=5) => {
                if self.suggestions_visible() {
                    self.input = store::QUICK_SUGGESTIONS[n as usize - 1].to_string();
                }
            }
            KeyCode::Enter => match self.chat_focus {
                ChatFocus::Input => self.send_message(),
                ChatFocus::Prompt => {
                    self.generated_prompt.push('\n');
                    self.prompt_edited = true;
                }
            },
            KeyCode::Backspace => match self.chat_focus {
                ChatFocus::Input => {
                    self.input.pop();
                }
                ChatFocus::Prompt => {
                    self.generated_prompt.pop();
                    self.prompt_edited = true;
                }
            },
            KeyCode::Char(c) => match self.chat_focus {
                ChatFocus::Input => self.input.push(c),
                ChatFocus::Prompt => {
                    self.generated_prompt.push(c);
                    self.prompt_edited = true;
                }
            },
            _ => {}
        }
    }

    /// Keys inside the sample-results drawer.
    fn handle_drawer_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
            self.start_full_run();
            return;
        }
        let rows = self.sample_results.as_ref().map_or(0, |s| s.len());
        match key.code {
            KeyCode::Esc => {
                // Closing the drawer discards the sample; the full run
                // becomes available again only after another test.
                self.sample_results = None;
            }
            KeyCode::Up => self.drawer_cursor = self.drawer_cursor.saturating_sub(1),
            KeyCode::Down => {
                if rows > 0 && self.drawer_cursor < rows - 1 {
                    self.drawer_cursor += 1;
                }
            }
            KeyCode::Char('v') | KeyCode::Enter => {
                if let Some(sample) = &self.sample_results {
                    if let Some(c) = sample.get(self.drawer_cursor) {
                        self.viewing_resume = Some(c.clone());
                    }
                }
            }
            KeyCode::Char('r') => self.start_full_run(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        let job_id = match &self.screen {
            Screen::Results { job_id } => job_id.clone(),
            _ => return,
        };
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => self.screen = Screen::Jobs,
            KeyCode::Char('e') => self.open_chat(job_id),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left => self.cycle_score_filter(-1),
            KeyCode::Right => self.cycle_score_filter(1),
            KeyCode::Up | KeyCode::Char('k') => {
                self.result_cursor = self.result_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.results_rows().len();
                if count > 0 && self.result_cursor < count - 1 {
                    self.result_cursor += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(c) = self.results_rows().get(self.result_cursor) {
                    let id = c.id.clone();
                    self.expanded = if self.expanded.as_deref() == Some(&id) {
                        None
                    } else {
                        Some(id)
                    };
                }
            }
            KeyCode::Char('v') => {
                if let Some(c) = self.results_rows().get(self.result_cursor) {
                    self.viewing_resume = Some(c.clone());
                }
            }
            _ => {}
        }
    }

    fn handle_not_found_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') => self.screen = Screen::Jobs,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    // ============================================
    // Actions
    // ============================================

    /// Enter the chat for a job. Re-entering the same job keeps the
    /// session; a different job starts fresh with the greeting.
    pub fn open_chat(&mut self, job_id: String) {
        let Some(title) = self.job_title(&job_id) else {
            tracing::warn!(job_id = %job_id, "navigation to unknown job");
            self.screen = Screen::NotFound { job_id };
            return;
        };
        if self.chat_job.as_deref() != Some(job_id.as_str()) {
            self.chat_job = Some(job_id.clone());
            self.messages = vec![ChatMessage::assistant(conversation::greeting(&title))];
            self.input.clear();
            self.criteria.clear();
            self.generated_prompt.clear();
            self.prompt_edited = false;
            self.turn_count = 0;
            self.chat_focus = ChatFocus::Input;
            self.cancel_chat_timers();
            self.sample_results = None;
            self.drawer_cursor = 0;
        }
        self.screen = Screen::Chat { job_id };
    }

    /// Send the input buffer as a user turn.
    fn send_message(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.is_typing {
            return;
        }
        let Screen::Chat { job_id } = &self.screen else {
            return;
        };
        let Some(title) = self.job_title(job_id) else {
            return;
        };

        self.messages.push(ChatMessage::user(&text));
        self.input.clear();

        let new = extract::extract(&text, &self.criteria);
        self.criteria.extend(new.iter().cloned());
        self.turn_count += 1;
        tracing::debug!(added = new.len(), total = self.criteria.len(), "user turn");

        // A hand-edited prompt is sticky; otherwise regenerate
        if !self.criteria.is_empty() && !self.prompt_edited {
            self.generated_prompt = prompt::assemble(&title, &self.criteria);
        }

        let reply = conversation::acknowledgement(&new, &self.criteria, self.turn_count);
        self.is_typing = true;
        self.schedule(TimerKind::AssistantReply { content: reply }, self.demo.typing_ms);
    }

    fn start_sample_run(&mut self) {
        if self.criteria.is_empty() || self.is_testing || self.is_running {
            return;
        }
        self.is_testing = true;
        self.schedule(TimerKind::SampleRun, self.demo.sample_ms);
    }

    fn start_full_run(&mut self) {
        // Only available after a sample run, while the drawer is open
        if self.sample_results.is_none() || self.is_running {
            return;
        }
        self.is_running = true;
        self.schedule(TimerKind::FullRun, self.demo.run_all_ms);
    }

    fn cycle_score_filter(&mut self, dir: i32) {
        let tabs = ScoreFilter::ALL_FILTERS;
        let pos = tabs.iter().position(|f| *f == self.score_filter).unwrap_or(0);
        let next = (pos as i32 + dir).rem_euclid(tabs.len() as i32) as usize;
        self.score_filter = tabs[next];
        self.result_cursor = 0;
        self.expanded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillgrep_core::Role;

    fn app() -> App {
        let store = Store::load().unwrap();
        App::new(DemoConfig::instant(), &store)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Drive an app with instant timers through auth and onboarding.
    fn app_at_jobs() -> App {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.tick(Instant::now());
        assert_eq!(app.screen, Screen::Onboarding);
        type_str(&mut app, "sk-demo-key-123");
        app.handle_key(key(KeyCode::Enter));
        app.tick(Instant::now());
        assert_eq!(app.screen, Screen::Jobs);
        app
    }

    fn app_in_chat() -> App {
        let mut app = app_at_jobs();
        app.handle_key(key(KeyCode::Enter)); // open panel
        assert!(app.panel_open);
        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(
            app.screen,
            Screen::Chat {
                job_id: "job-1".into()
            }
        );
        app
    }

    #[test]
    fn test_sign_in_waits_for_timer() {
        let mut app = app();
        assert_eq!(app.screen, Screen::Auth);
        app.handle_key(key(KeyCode::Enter));
        assert!(app.signing_in);
        assert_eq!(app.screen, Screen::Auth);
        app.tick(Instant::now());
        assert_eq!(app.screen, Screen::Onboarding);
        assert!(!app.signing_in);
    }

    #[test]
    fn test_connect_requires_minimum_key_length() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.tick(Instant::now());

        type_str(&mut app, "short");
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.connecting, "short key must not connect");
        assert_eq!(app.screen, Screen::Onboarding);

        type_str(&mut app, "-but-now-long-enough");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.connecting);
        app.tick(Instant::now());
        assert_eq!(app.screen, Screen::Jobs);
    }

    #[test]
    fn test_onboarding_esc_returns_to_auth() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.tick(Instant::now());
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Auth);
    }

    #[test]
    fn test_jobs_search_narrows_list() {
        let mut app = app_at_jobs();
        let all = app.visible_jobs().len();
        assert_eq!(all, 6);

        type_str(&mut app, "backend");
        assert_eq!(app.visible_jobs().len(), 1);
        assert_eq!(app.visible_jobs()[0].id, "job-1");

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.visible_jobs().len(), all);
    }

    #[test]
    fn test_status_filter_cycles() {
        let mut app = app_at_jobs();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.status_filter, StatusFilter::Open);
        assert!(app.visible_jobs().iter().all(|j| j.status == JobStatus::Open));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.status_filter, StatusFilter::Closed);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.status_filter, StatusFilter::All);
    }

    #[test]
    fn test_sync_panel_mode_and_stages() {
        let mut app = app_at_jobs();
        app.handle_key(key(KeyCode::Enter));
        assert!(app.panel_open);

        // job-1 starts in All mode; 'm' moves to Specific
        app.handle_key(key(KeyCode::Char('m')));
        assert_eq!(app.jobs[0].sync_mode, SyncMode::Specific);

        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.jobs[0].sync_stages, vec![Stage::PhoneScreen]);

        // Leaving Specific clears the selection
        app.handle_key(key(KeyCode::Char('m')));
        assert_eq!(app.jobs[0].sync_mode, SyncMode::None);
        assert!(app.jobs[0].sync_stages.is_empty());

        // Stage toggles are inert outside Specific
        app.handle_key(key(KeyCode::Char('3')));
        assert!(app.jobs[0].sync_stages.is_empty());
    }

    #[test]
    fn test_chat_opens_with_greeting() {
        let app = app_in_chat();
        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].role, Role::Assistant);
        assert!(app.messages[0].content.contains("**Senior Backend Engineer**"));
        assert!(app.suggestions_visible());
        assert!(!app.prompt_panel_visible());
    }

    #[test]
    fn test_send_message_extracts_and_replies() {
        let mut app = app_in_chat();
        type_str(&mut app, "5+ years of python");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.messages.len(), 2);
        assert_eq!(app.messages[1].role, Role::User);
        assert!(app.is_typing);
        assert_eq!(app.criteria.len(), 2); // experience + Python
        assert!(app.generated_prompt.contains("Experience:"));
        assert!(app.generated_prompt.contains("• Python"));

        app.tick(Instant::now());
        assert!(!app.is_typing);
        assert_eq!(app.messages.len(), 3);
        assert_eq!(app.messages[2].role, Role::Assistant);
        assert!(app.messages[2].content.starts_with("Added: **"));
    }

    #[test]
    fn test_empty_input_is_inert() {
        let mut app = app_in_chat();
        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "   ");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.messages.len(), 1);
        assert!(!app.is_typing);
    }

    #[test]
    fn test_quick_suggestion_fills_input_only_on_first_turn() {
        let mut app = app_in_chat();
        app.handle_key(key(KeyCode::F(2)));
        assert_eq!(app.input, "Strong Python and Kubernetes");

        app.handle_key(key(KeyCode::Enter));
        app.tick(Instant::now());
        assert!(!app.suggestions_visible());

        app.handle_key(key(KeyCode::F(1)));
        assert!(app.input.is_empty(), "suggestions gone after the first turn");
    }

    #[test]
    fn test_edited_prompt_is_sticky() {
        let mut app = app_in_chat();
        type_str(&mut app, "python");
        app.handle_key(key(KeyCode::Enter));
        app.tick(Instant::now());
        assert!(app.prompt_panel_visible());

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.chat_focus, ChatFocus::Prompt);
        type_str(&mut app, "!");
        assert!(app.prompt_edited);
        let edited = app.generated_prompt.clone();

        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "5 years in rust");
        app.handle_key(key(KeyCode::Enter));
        app.tick(Instant::now());
        assert_eq!(app.generated_prompt, edited, "edits survive later turns");
    }

    #[test]
    fn test_leaving_chat_cancels_typing() {
        let mut app = app_in_chat();
        type_str(&mut app, "python");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.is_typing);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Jobs);
        app.tick(Instant::now());
        assert_eq!(app.messages.len(), 2, "cancelled reply never lands");
        assert!(!app.is_typing);
    }

    #[test]
    fn test_chat_state_survives_reentry_for_same_job() {
        let mut app = app_in_chat();
        type_str(&mut app, "python");
        app.handle_key(key(KeyCode::Enter));
        app.tick(Instant::now());
        let messages = app.messages.len();

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.messages.len(), messages, "same job resumes the session");

        // A different job starts over
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.messages.len(), 1);
        assert!(app.criteria.is_empty());
    }

    #[test]
    fn test_sample_then_full_run_reaches_results() {
        let mut app = app_in_chat();
        type_str(&mut app, "python and kubernetes");
        app.handle_key(key(KeyCode::Enter));
        app.tick(Instant::now());

        // Full run is gated on a completed sample
        app.handle_key(ctrl('r'));
        assert!(!app.is_running);

        app.handle_key(ctrl('t'));
        assert!(app.is_testing);
        app.tick(Instant::now());
        assert!(!app.is_testing);
        let sample = app.sample_results.as_ref().unwrap();
        assert_eq!(sample.len(), 5);

        app.handle_key(key(KeyCode::Char('r')));
        assert!(app.is_running);
        app.tick(Instant::now());
        assert_eq!(
            app.screen,
            Screen::Results {
                job_id: "job-1".into()
            }
        );
        assert!(app.sample_results.is_none());
        assert_eq!(app.score_filter, ScoreFilter::All);
    }

    #[test]
    fn test_sample_run_requires_criteria() {
        let mut app = app_in_chat();
        app.handle_key(ctrl('t'));
        assert!(!app.is_testing);
    }

    #[test]
    fn test_drawer_resume_and_close() {
        let mut app = app_in_chat();
        type_str(&mut app, "python");
        app.handle_key(key(KeyCode::Enter));
        app.tick(Instant::now());
        app.handle_key(ctrl('t'));
        app.tick(Instant::now());

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('v')));
        let resume = app.viewing_resume.as_ref().unwrap();
        assert_eq!(resume.id, app.sample_results.as_ref().unwrap()[1].id);

        // Esc closes the modal first, then the drawer
        app.handle_key(key(KeyCode::Esc));
        assert!(app.viewing_resume.is_none());
        assert!(app.sample_results.is_some());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.sample_results.is_none());

        // With the drawer gone the full run is gated again
        app.handle_key(ctrl('r'));
        assert!(!app.is_running);
    }

    fn app_at_results() -> App {
        let mut app = app_in_chat();
        type_str(&mut app, "python");
        app.handle_key(key(KeyCode::Enter));
        app.tick(Instant::now());
        app.handle_key(ctrl('t'));
        app.tick(Instant::now());
        app.handle_key(key(KeyCode::Char('r')));
        app.tick(Instant::now());
        assert!(matches!(app.screen, Screen::Results { .. }));
        app
    }

    #[test]
    fn test_results_rows_sorted_and_filtered() {
        let mut app = app_at_results();
        let rows = app.results_rows();
        assert_eq!(rows.len(), app.candidates.len());
        for pair in rows.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.score_filter, ScoreFilter::Excellent);
        assert!(app.results_rows().iter().all(|c| c.score >= 90));

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.score_filter, ScoreFilter::All);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.score_filter, ScoreFilter::Weak, "tabs wrap around");
    }

    #[test]
    fn test_results_expand_toggles() {
        let mut app = app_at_results();
        app.handle_key(key(KeyCode::Enter));
        let top = app.results_rows()[0].id.clone();
        assert_eq!(app.expanded.as_deref(), Some(top.as_str()));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.expanded.is_none());
    }

    #[test]
    fn test_results_back_and_refine() {
        let mut app = app_at_results();
        let criteria = app.criteria.len();

        app.handle_key(key(KeyCode::Char('e')));
        assert!(matches!(app.screen, Screen::Chat { .. }));
        assert_eq!(app.criteria.len(), criteria, "refining keeps the session");

        // Back out to results is only via another run; Esc goes to jobs
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Jobs);
    }

    #[test]
    fn test_unknown_job_shows_not_found() {
        let mut app = app_at_jobs();
        app.open_chat("job-404".into());
        assert_eq!(
            app.screen,
            Screen::NotFound {
                job_id: "job-404".into()
            }
        );
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Jobs);
    }
}
