/*
[INPUT]:  On-chain task board snapshots, user key events, and log buffer
[OUTPUT]: Ratatui-based dashboard for browsing, creating, and delegating tasks
[POS]:    TUI module for the taskmarket-dashboard binary
[UPDATE]: When changing TUI layout, keybindings, or flow wiring
*/

pub mod form;

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{Event as CrosstermEvent, KeyCode};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{terminal, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::error;
use tracing_subscriber::fmt::MakeWriter;

use taskmarket_adapter::{Task, TaskStatus};

use crate::app::{CreateTaskInput, Dashboard, DelegationOutcome};
use crate::view;
use form::{CreateTaskForm, FormAction};

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial = self.partial[pos + 1..].to_string();
            let buffer = self.buffer.clone();
            let mut guard = buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            let buffer = self.buffer.clone();
            let mut guard = buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

enum UiEvent {
    Input(CrosstermEvent),
}

struct AppState {
    dashboard: Arc<Dashboard>,
    log_buffer: LogBufferHandle,
    tasks: Vec<Task>,
    list_state: ListState,
    status_message: String,
    last_refresh: Option<DateTime<Local>>,
    form: Option<CreateTaskForm>,
}

impl AppState {
    fn new(dashboard: Arc<Dashboard>, log_buffer: LogBufferHandle) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            dashboard,
            log_buffer,
            tasks: Vec::new(),
            list_state,
            status_message: "Ready".to_string(),
            last_refresh: None,
            form: None,
        }
    }

    fn selected_task(&self) -> Option<&Task> {
        let idx = self.list_state.selected().unwrap_or(0);
        self.tasks.get(idx)
    }

    fn move_selection(&mut self, delta: isize) {
        if self.tasks.is_empty() {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (self.tasks.len() - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    /// Re-probe the board. On failure the previous list is kept and only the
    /// status line changes.
    async fn refresh_tasks(&mut self) {
        match self.dashboard.refresh_board().await {
            Ok(tasks) => {
                self.tasks = tasks;
                if self.tasks.is_empty() {
                    self.list_state.select(None);
                } else if self.list_state.selected().is_none() {
                    self.list_state.select(Some(0));
                } else if let Some(selected) = self.list_state.selected() {
                    if selected >= self.tasks.len() {
                        self.list_state
                            .select(Some(self.tasks.len().saturating_sub(1)));
                    }
                }
                self.last_refresh = Some(Local::now());
                self.status_message = format!("Loaded {} task(s)", self.tasks.len());
            }
            Err(err) => {
                error!(error = %err, "error fetching tasks");
                self.status_message = format!("Refresh failed: {err:#}");
            }
        }
    }

    async fn submit_create(&mut self, input: CreateTaskInput) {
        self.status_message = view::CREATING_TASK_MESSAGE.to_string();
        match self.dashboard.create_task(&input).await {
            Ok(tx_hash) => {
                self.status_message = view::create_success_message(&tx_hash);
                self.refresh_tasks().await;
            }
            Err(err) => {
                error!(error = %err, "task creation failed");
                self.status_message = view::CREATE_ERROR_MESSAGE.to_string();
            }
        }
    }

    async fn delegate_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            self.status_message = "No task selected".to_string();
            return;
        };
        if !task.is_open() {
            self.status_message = format!("Task #{} is not open ({})", task.id, task.status);
            return;
        }
        let outcome = self.dashboard.delegate(&task).await;
        self.status_message = view::delegation_message(&outcome, self.dashboard.worker_url());
        if matches!(outcome, DelegationOutcome::Processed { .. }) {
            self.refresh_tasks().await;
        }
    }

    fn show_worker_command(&mut self) {
        match self.selected_task() {
            Some(task) => self.status_message = view::worker_command(task),
            None => self.status_message = "No task selected".to_string(),
        }
    }

    /// Returns true when the user asked to quit.
    async fn handle_key(&mut self, key: KeyCode) -> bool {
        if self.form.is_some() {
            let step = self
                .form
                .as_mut()
                .map(|form| (form.handle_key(key), form.input()));
            if let Some((action, input)) = step {
                match action {
                    FormAction::Submit => {
                        self.form = None;
                        self.submit_create(input).await;
                    }
                    FormAction::Cancel => {
                        self.form = None;
                        self.status_message = "Task creation cancelled".to_string();
                    }
                    FormAction::None => {}
                }
            }
            return false;
        }

        match key {
            KeyCode::Char('q') => return true,
            KeyCode::Char('r') => self.refresh_tasks().await,
            KeyCode::Char('n') => self.form = Some(CreateTaskForm::new()),
            KeyCode::Char('p') => self.delegate_selected().await,
            KeyCode::Char('c') => self.show_worker_command(),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            _ => {}
        }
        false
    }
}

pub async fn run_tui(dashboard: Arc<Dashboard>, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = event_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = AppState::new(dashboard, log_buffer);
    // fetch once on mount; afterwards only [r] re-probes
    app.refresh_tasks().await;

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                if let Some(UiEvent::Input(CrosstermEvent::Key(key))) = maybe_event {
                    should_quit = app.handle_key(key.code).await;
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(layout[0]);

    draw_board(frame, middle[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(4)])
        .split(middle[1]);
    draw_detail(frame, right[0], app);
    draw_logs(frame, right[1], &app.log_buffer);

    draw_footer(frame, layout[1], app);

    if let Some(form) = &app.form {
        form.render(frame, area);
    }
}

fn draw_board(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &mut AppState) {
    let items = if app.tasks.is_empty() {
        vec![ListItem::new("No tasks found.")]
    } else {
        app.tasks
            .iter()
            .map(|task| {
                let line = Line::from(vec![
                    Span::styled(
                        format!("#{:<3}", task.id),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" {:<14}", task.status.as_str()),
                        Style::default().fg(status_color(task.status)),
                    ),
                    Span::raw(format!(
                        " {:>12}  {}",
                        view::format_reward(task),
                        task.docker_image_uri
                    )),
                ]);
                ListItem::new(line)
            })
            .collect()
    };

    let title = match app.last_refresh {
        Some(at) => format!("Available Tasks (refreshed {})", at.format("%H:%M:%S")),
        None => "Available Tasks".to_string(),
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_detail(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let lines = match app.selected_task() {
        Some(task) => vec![
            detail_line("Task", format!("#{}", task.id)),
            detail_line("Status", task.status.to_string()),
            detail_line("Creator", task.creator.clone()),
            detail_line("Reward", view::format_reward(task)),
            detail_line("Workers", view::format_capacity(task)),
            detail_line("Docker Image", task.docker_image_uri.clone()),
            detail_line("Input Data", task.input_data_uri.clone()),
        ],
        None => vec![Line::from("No task selected")],
    };

    let detail = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Task Detail"));
    frame.render_widget(detail, area);
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<13}"), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

fn draw_logs(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, buffer: &LogBufferHandle) {
    let lines = {
        let guard = buffer.lock().expect("log buffer lock");
        guard.snapshot()
    };
    let available = area.height.saturating_sub(2) as usize;
    let start = lines.len().saturating_sub(available);
    let view = &lines[start..];

    let text = view
        .iter()
        .map(|line| Line::from(Span::raw(line.clone())))
        .collect::<Vec<_>>();
    let log_widget =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Logs"));
    frame.render_widget(log_widget, area);
}

fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let footer = Paragraph::new(format!(
        "[Up/Down] Select  [n] New Task  [p] Run Worker  [c] Worker Command  [r] Refresh  [q] Quit  |  {}",
        app.status_message
    ))
    .block(Block::default().borders(Borders::ALL).title("Hotkeys"));
    frame.render_widget(footer, area);
}

fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Open => Color::Green,
        TaskStatus::InVerification => Color::Yellow,
        TaskStatus::Completed => Color::Blue,
        TaskStatus::Failed => Color::Red,
    }
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
