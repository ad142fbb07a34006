/*
[INPUT]:  Key events while the create-task modal is open
[OUTPUT]: Form state, rendering, and submit/cancel actions
[POS]:    TUI create-task modal
[UPDATE]: When form fields or keybindings change
*/

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::CreateTaskInput;

const FIELD_LABELS: [&str; 4] = [
    "Docker Image URI",
    "Input Data URI",
    "Max Workers",
    "Reward (EGLD)",
];
const SUBMIT_INDEX: usize = 4;
const CANCEL_INDEX: usize = 5;
const FOCUS_SLOTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Cancel,
}

/// Four text inputs plus Create/Cancel buttons. Create stays inert until
/// every field is non-empty.
pub struct CreateTaskForm {
    values: [String; 4],
    focus: usize,
}

impl CreateTaskForm {
    pub fn new() -> Self {
        Self {
            values: Default::default(),
            focus: 0,
        }
    }

    pub fn input(&self) -> CreateTaskInput {
        CreateTaskInput {
            docker_image_uri: self.values[0].clone(),
            input_data_uri: self.values[1].clone(),
            max_workers: self.values[2].clone(),
            reward: self.values[3].clone(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.input().is_complete()
    }

    pub fn handle_key(&mut self, key: KeyCode) -> FormAction {
        match key {
            KeyCode::Esc => FormAction::Cancel,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % FOCUS_SLOTS;
                FormAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FOCUS_SLOTS - 1) % FOCUS_SLOTS;
                FormAction::None
            }
            KeyCode::Enter => match self.focus {
                SUBMIT_INDEX if self.is_complete() => FormAction::Submit,
                SUBMIT_INDEX => FormAction::None,
                CANCEL_INDEX => FormAction::Cancel,
                _ => {
                    self.focus += 1;
                    FormAction::None
                }
            },
            KeyCode::Backspace => {
                if let Some(value) = self.values.get_mut(self.focus) {
                    value.pop();
                }
                FormAction::None
            }
            KeyCode::Char(c) => {
                if let Some(value) = self.values.get_mut(self.focus) {
                    value.push(c);
                }
                FormAction::None
            }
            _ => FormAction::None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 12, area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Create New Task");
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        for (index, label) in FIELD_LABELS.iter().enumerate() {
            let focused = self.focus == index;
            let marker = if focused { "> " } else { "  " };
            let value_style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
                Span::styled(self.values[index].clone(), value_style),
            ]);
            frame.render_widget(Paragraph::new(line), rows[index]);
        }

        let submit_style = if !self.is_complete() {
            Style::default().fg(Color::DarkGray)
        } else if self.focus == SUBMIT_INDEX {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        let cancel_style = if self.focus == CANCEL_INDEX {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let buttons = Line::from(vec![
            Span::styled("[ Create ]", submit_style),
            Span::raw("  "),
            Span::styled("[ Cancel ]", cancel_style),
        ]);
        frame.render_widget(Paragraph::new(buttons), rows[4]);
    }
}

impl Default for CreateTaskForm {
    fn default() -> Self {
        Self::new()
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
