//! Themed menu model: entries, selection cursor, theme and output log.
//!
//! Every mutation records a [`Redraw`] request; the host takes it with
//! [`ThemedMenu::take_redraw`] and repaints.  Rendering itself lives in
//! `ui::menu_view` and only reads this state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::catalog::{next_in_cycle, ThemeCatalog, ThemeDescriptor};
use super::command::{ActionContext, Command, CommandExecutor, LogOnly};
use super::options::WidgetOptions;
use super::redraw::{KeyOutcome, Redraw};

// ───────────────────────────────────────── entries ───────────

/// One line of the menu.
#[derive(Debug)]
pub enum MenuEntry {
    /// Non-interactive rule with an embedded title.
    Separator { title: String },
    /// Selectable action.
    Action {
        key: String,
        name: String,
        description: String,
        command: Command,
    },
}

impl MenuEntry {
    pub fn is_action(&self) -> bool {
        matches!(self, MenuEntry::Action { .. })
    }

    /// Action name or separator title.
    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Separator { title } => title,
            MenuEntry::Action { name, .. } => name,
        }
    }
}

/// Semantic menu inputs, already resolved from key bindings by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Enter,
    CycleTheme,
    /// Number-key shortcut: execute the entry at this index.
    Digit(usize),
}

// ───────────────────────────────────────── menu ──────────────

pub struct ThemedMenu {
    catalog: Arc<ThemeCatalog>,
    options: WidgetOptions,
    title: String,
    entries: Vec<MenuEntry>,
    selected: usize,
    theme: String,
    output: Vec<String>,
    executor: Box<dyn CommandExecutor>,
    redraw: Redraw,
    quit_requested: bool,
    /// Last clicked entry and when, for double-click detection.
    last_click: Option<(usize, Instant)>,
    /// Name of the action run since the host last asked.
    executed: Option<String>,
}

impl ThemedMenu {
    pub fn new(catalog: Arc<ThemeCatalog>, options: WidgetOptions) -> Self {
        let theme = catalog.resolve(&options.theme).to_string();
        Self {
            catalog,
            title: options.title.clone(),
            options,
            entries: Vec::new(),
            selected: 0,
            theme,
            output: Vec::new(),
            executor: Box::new(LogOnly),
            redraw: Redraw::Full,
            quit_requested: false,
            last_click: None,
            executed: None,
        }
    }

    /// Install the interpreter for forwarded command strings.
    pub fn with_executor(mut self, executor: impl CommandExecutor + 'static) -> Self {
        self.executor = Box::new(executor);
        self
    }

    // ── building ────────────────────────────────────────────────

    pub fn add_action(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        command: impl Into<Command>,
    ) -> &mut Self {
        self.entries.push(MenuEntry::Action {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            command: command.into(),
        });
        self.clamp_selection();
        self.request(Redraw::Full);
        self
    }

    pub fn add_separator(&mut self, title: impl Into<String>) -> &mut Self {
        self.entries.push(MenuEntry::Separator {
            title: title.into(),
        });
        self.clamp_selection();
        self.request(Redraw::Full);
        self
    }

    /// Action that asks the host to quit.
    pub fn add_exit(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.add_action(
            "exit",
            name,
            description,
            Command::invoke(|ctx| ctx.request_quit()),
        )
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self.request(Redraw::Full);
        self
    }

    // ── theming ─────────────────────────────────────────────────

    /// Switch theme.  Ids the catalog doesn't know resolve to the default.
    pub fn set_theme(&mut self, id: &str) {
        let resolved = self.catalog.resolve(id).to_string();
        if resolved != id {
            tracing::debug!("unknown theme {id:?}, using {resolved:?}");
        }
        self.theme = resolved;
        let display = self.catalog.descriptor(&self.theme).display_name.clone();
        self.log(format!("Theme switched to {display}"));
        self.request(Redraw::Full);
    }

    pub fn cycle_theme(&mut self) {
        let next = next_in_cycle(&self.theme);
        self.set_theme(next);
    }

    // ── selection ───────────────────────────────────────────────

    /// Select the entry at `index` (clamped) and run it if it is an action.
    pub fn select_by_index(&mut self, index: usize) {
        if self.entries.is_empty() {
            self.request(Redraw::Full);
            return;
        }
        let index = index.min(self.entries.len() - 1);
        self.selected = index;

        let forwarded = {
            let Self {
                entries,
                output,
                quit_requested,
                executed,
                ..
            } = self;
            match &mut entries[index] {
                MenuEntry::Separator { .. } => None,
                MenuEntry::Action { name, command, .. } => {
                    output.push(format!("Executing: {name}"));
                    *executed = Some(name.clone());
                    match command {
                        Command::Invoke(handler) => {
                            let mut ctx = ActionContext::new(output, quit_requested);
                            handler(&mut ctx);
                            None
                        }
                        Command::Forward(text) => Some(text.clone()),
                    }
                }
            }
        };

        if let Some(text) = forwarded {
            self.execute_command(&text);
        }
        self.request(Redraw::Full);
    }

    fn move_selection(&mut self, down: bool) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = if down {
            (self.selected + 1).min(self.entries.len() - 1)
        } else {
            self.selected.saturating_sub(1)
        };
        self.request(Redraw::Full);
    }

    fn clamp_selection(&mut self) {
        self.selected = match self.entries.len() {
            0 => 0,
            n => self.selected.min(n - 1),
        };
    }

    // ── output ──────────────────────────────────────────────────

    pub fn log(&mut self, message: impl Into<String>) {
        self.output.push(message.into());
        self.request(Redraw::Output);
    }

    pub fn clear_log(&mut self) {
        self.output.clear();
        self.request(Redraw::Output);
    }

    /// Echo the command, then hand it to the installed executor.
    pub fn execute_command(&mut self, command: &str) {
        self.log(format!("> {command}"));
        let Self {
            executor,
            output,
            quit_requested,
            ..
        } = self;
        let mut ctx = ActionContext::new(output, quit_requested);
        executor.execute(command, &mut ctx);
        self.request(Redraw::Output);
    }

    // ── input ───────────────────────────────────────────────────

    pub fn handle_input(&mut self, input: MenuInput) -> KeyOutcome {
        if !self.options.keyboard_shortcuts {
            return KeyOutcome::Ignored;
        }
        match input {
            MenuInput::Up => self.move_selection(false),
            MenuInput::Down => self.move_selection(true),
            MenuInput::Enter => self.select_by_index(self.selected),
            MenuInput::CycleTheme => {
                if !self.options.theme_changing {
                    return KeyOutcome::Ignored;
                }
                self.cycle_theme();
            }
            MenuInput::Digit(n) => {
                if n >= self.entries.len() {
                    return KeyOutcome::Ignored;
                }
                if self.entries[n].is_action() {
                    self.select_by_index(n);
                }
            }
        }
        KeyOutcome::Consumed
    }

    /// Mouse click on entry `index`.  A first click selects; a second click
    /// on the same entry within `window` executes it.  Separators ignore
    /// clicks.
    pub fn click_entry(&mut self, index: usize, at: Instant, window: Duration) {
        if !self.options.mouse_support {
            return;
        }
        match self.entries.get(index) {
            Some(entry) if entry.is_action() => {}
            _ => return,
        }

        let repeat = self
            .last_click
            .map(|(last, when)| last == index && at.duration_since(when) <= window)
            .unwrap_or(false);

        if repeat {
            self.last_click = None;
            self.select_by_index(index);
        } else {
            self.last_click = Some((index, at));
            self.selected = index;
            self.request(Redraw::Full);
        }
    }

    /// Mouse click on a theme button in the selector row.
    pub fn click_theme(&mut self, id: &str) {
        if self.options.mouse_support && self.options.theme_changing {
            self.set_theme(id);
        }
    }

    // ── accessors ───────────────────────────────────────────────

    fn request(&mut self, region: Redraw) {
        self.redraw = self.redraw.merge(region);
    }

    /// Take the pending redraw request, leaving `Redraw::None`.
    pub fn take_redraw(&mut self) -> Redraw {
        std::mem::take(&mut self.redraw)
    }

    /// Name of the most recently executed action, cleared on read.
    pub fn take_executed(&mut self) -> Option<String> {
        self.executed.take()
    }

    pub fn pending_redraw(&self) -> Redraw {
        self.redraw
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn descriptor(&self) -> &ThemeDescriptor {
        self.catalog.descriptor(&self.theme)
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn menu() -> ThemedMenu {
        ThemedMenu::new(Arc::new(ThemeCatalog::fallback()), WidgetOptions::default())
    }

    fn sample_menu() -> ThemedMenu {
        let mut m = menu();
        m.add_action("deploy", "Deploy", "Ship it", "deploy")
            .add_separator("TOOLS")
            .add_action("test", "Run Tests", "Execute suite", "test");
        m
    }

    /// Records every command it receives.
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl CommandExecutor for Recorder {
        fn execute(&mut self, command: &str, ctx: &mut ActionContext<'_>) {
            self.0.borrow_mut().push(command.to_string());
            ctx.log(format!("ran {command}"));
        }
    }

    #[test]
    fn executed_action_is_reported_once() {
        let mut m = sample_menu();
        m.select_by_index(1);
        assert_eq!(m.take_executed(), None);
        m.select_by_index(2);
        assert_eq!(m.take_executed().as_deref(), Some("Run Tests"));
        assert_eq!(m.take_executed(), None);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let m = sample_menu();
        let labels: Vec<&str> = m.entries().iter().map(MenuEntry::label).collect();
        assert_eq!(labels, ["Deploy", "TOOLS", "Run Tests"]);
    }

    #[test]
    fn select_out_of_range_clamps_to_last() {
        let mut m = sample_menu();
        m.select_by_index(99);
        assert_eq!(m.selected_index(), 2);
        assert_eq!(m.output().first().map(String::as_str), Some("Executing: Run Tests"));
    }

    #[test]
    fn select_on_empty_menu_is_a_noop() {
        let mut m = menu();
        m.select_by_index(5);
        assert_eq!(m.selected_index(), 0);
        assert!(m.output().is_empty());
    }

    #[test]
    fn selecting_a_separator_runs_nothing() {
        let mut m = sample_menu();
        m.select_by_index(1);
        assert_eq!(m.selected_index(), 1);
        assert!(m.output().is_empty());
    }

    #[test]
    fn invoke_handler_runs_in_place() {
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let mut m = menu();
        m.add_action(
            "ping",
            "Ping",
            "",
            Command::invoke(move |ctx| {
                *counter.borrow_mut() += 1;
                ctx.log("pong");
            }),
        );
        m.select_by_index(0);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(m.output(), ["Executing: Ping", "pong"]);
    }

    #[test]
    fn forward_command_reaches_executor() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut m = ThemedMenu::new(Arc::new(ThemeCatalog::fallback()), WidgetOptions::default())
            .with_executor(Recorder(Rc::clone(&seen)));
        m.add_action("build", "Build", "", "cargo build");
        m.select_by_index(0);
        assert_eq!(*seen.borrow(), vec!["cargo build".to_string()]);
        assert_eq!(
            m.output(),
            ["Executing: Build", "> cargo build", "ran cargo build"]
        );
    }

    #[test]
    fn default_executor_only_echoes() {
        let mut m = menu();
        m.execute_command("status");
        assert_eq!(m.output(), ["> status"]);
    }

    #[test]
    fn exit_entry_requests_quit() {
        let mut m = menu();
        m.add_exit("Exit", "Leave");
        assert!(!m.quit_requested());
        m.select_by_index(0);
        assert!(m.quit_requested());
    }

    #[test]
    fn unknown_theme_resolves_to_loki() {
        let mut m = menu();
        m.set_theme("matrix");
        m.set_theme("unknown");
        assert_eq!(m.theme(), "loki");
        assert_eq!(m.output().last().map(String::as_str), Some("Theme switched to Loki"));
    }

    #[test]
    fn initial_unknown_theme_resolves_to_loki() {
        let m = ThemedMenu::new(
            Arc::new(ThemeCatalog::fallback()),
            WidgetOptions::default().with_theme("vaporwave"),
        );
        assert_eq!(m.theme(), "loki");
    }

    #[test]
    fn cycle_four_times_returns_home() {
        let mut m = ThemedMenu::new(
            Arc::new(ThemeCatalog::fallback()),
            WidgetOptions::default().with_theme("fallout"),
        );
        let mut seen = Vec::new();
        for _ in 0..4 {
            m.cycle_theme();
            seen.push(m.theme().to_string());
        }
        assert_eq!(seen, ["tron", "loki", "matrix", "fallout"]);
    }

    #[test]
    fn arrows_clamp_without_wrapping() {
        let mut m = sample_menu();
        assert_eq!(m.handle_input(MenuInput::Up), KeyOutcome::Consumed);
        assert_eq!(m.selected_index(), 0);
        for _ in 0..5 {
            m.handle_input(MenuInput::Down);
        }
        assert_eq!(m.selected_index(), 2);
    }

    #[test]
    fn enter_executes_selected() {
        let mut m = sample_menu();
        m.handle_input(MenuInput::Down);
        m.handle_input(MenuInput::Down);
        m.handle_input(MenuInput::Enter);
        assert_eq!(m.output(), ["Executing: Run Tests", "> test"]);
    }

    #[test]
    fn digit_shortcut_skips_separators() {
        let mut m = sample_menu();
        assert_eq!(m.handle_input(MenuInput::Digit(1)), KeyOutcome::Consumed);
        assert!(m.output().is_empty());
        assert_eq!(m.handle_input(MenuInput::Digit(7)), KeyOutcome::Ignored);
        m.handle_input(MenuInput::Digit(0));
        assert_eq!(m.output()[0], "Executing: Deploy");
    }

    #[test]
    fn keyboard_disabled_ignores_everything() {
        let mut options = WidgetOptions::default();
        options.keyboard_shortcuts = false;
        let mut m = ThemedMenu::new(Arc::new(ThemeCatalog::fallback()), options);
        m.add_action("a", "A", "", "a").add_action("b", "B", "", "b");
        assert_eq!(m.handle_input(MenuInput::Down), KeyOutcome::Ignored);
        assert_eq!(m.selected_index(), 0);
    }

    #[test]
    fn theme_shortcut_respects_theme_changing() {
        let mut options = WidgetOptions::default();
        options.theme_changing = false;
        let mut m = ThemedMenu::new(Arc::new(ThemeCatalog::fallback()), options);
        assert_eq!(m.handle_input(MenuInput::CycleTheme), KeyOutcome::Ignored);
        assert_eq!(m.theme(), "loki");

        let mut m = menu();
        assert_eq!(m.handle_input(MenuInput::CycleTheme), KeyOutcome::Consumed);
        assert_eq!(m.theme(), "matrix");
    }

    #[test]
    fn log_requests_output_redraw_only() {
        let mut m = sample_menu();
        assert_eq!(m.take_redraw(), Redraw::Full);
        m.log("hello");
        assert_eq!(m.take_redraw(), Redraw::Output);
        m.clear_log();
        assert_eq!(m.pending_redraw(), Redraw::Output);
        m.set_title("New");
        m.log("again");
        assert_eq!(m.take_redraw(), Redraw::Full);
        assert_eq!(m.take_redraw(), Redraw::None);
    }

    #[test]
    fn double_click_executes() {
        let mut m = sample_menu();
        let t0 = Instant::now();
        let window = Duration::from_millis(250);

        m.click_entry(2, t0, window);
        assert_eq!(m.selected_index(), 2);
        assert!(m.output().is_empty());

        m.click_entry(2, t0 + Duration::from_millis(100), window);
        assert_eq!(m.output()[0], "Executing: Run Tests");
    }

    #[test]
    fn slow_second_click_only_selects() {
        let mut m = sample_menu();
        let t0 = Instant::now();
        let window = Duration::from_millis(250);
        m.click_entry(0, t0, window);
        m.click_entry(0, t0 + Duration::from_secs(2), window);
        assert!(m.output().is_empty());
        m.click_entry(1, t0, window);
        assert_eq!(m.selected_index(), 0);
    }

    #[test]
    fn mouse_disabled_ignores_clicks() {
        let mut options = WidgetOptions::default();
        options.mouse_support = false;
        let mut m = ThemedMenu::new(Arc::new(ThemeCatalog::fallback()), options);
        m.add_action("a", "A", "", "a").add_action("b", "B", "", "b");
        m.click_entry(1, Instant::now(), Duration::from_millis(250));
        m.click_theme("tron");
        assert_eq!(m.selected_index(), 0);
        assert_eq!(m.theme(), "loki");
    }
}
