//! Main application state and rendering

use std::collections::BTreeSet;

use crate::game::{describe, Accusation, Command, Crossroads, GameMessage, Investigator, Narration, Verdict};
use crate::tui::widgets::{EvidenceMeter, VerdictBox};
use crate::tui::{create_content_layout, create_main_layout, create_side_layout};
use crate::tui::{styled_block, tone_style, Theme, HELP_TEXT, SMALL_LOGO};
use crate::{MansionError, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

/// What the player is being asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Waiting,
    Navigate {
        room: String,
        left: Option<String>,
        right: Option<String>,
    },
    Accuse {
        suspects: Vec<String>,
    },
    Finished,
}

/// An answer produced by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Command(Command),
    Name(String),
    /// Any key on the closing screen
    Dismiss,
    Quit,
}

/// Everything drawn on screen
pub struct AppState {
    pub theme: Theme,
    pub transcript: Vec<GameMessage>,
    pub notebook: BTreeSet<String>,
    pub known_clues: usize,
    pub rooms_visited: usize,
    pub current_room: Option<String>,
    pub prompt: Prompt,
    pub input_buffer: String,
    pub show_help: bool,
    pub verdict: Option<Accusation>,
}

impl AppState {
    pub fn new(known_clues: usize) -> Self {
        Self {
            theme: Theme::default(),
            transcript: Vec::new(),
            notebook: BTreeSet::new(),
            known_clues,
            rooms_visited: 0,
            current_room: None,
            prompt: Prompt::Waiting,
            input_buffer: String::new(),
            show_help: false,
            verdict: None,
        }
    }

    /// Record a narration event
    pub fn apply(&mut self, event: &Narration<'_>) {
        match event {
            Narration::Arrived { room, clue } => {
                self.rooms_visited += 1;
                self.current_room = Some(room.to_string());
                if let Some(clue) = clue {
                    self.notebook.insert(clue.to_string());
                }
            }
            Narration::Verdict(accusation) => {
                self.verdict = Some((*accusation).clone());
            }
            _ => {}
        }
        self.transcript.extend(describe(event));
    }

    /// Handle one key press, returning the answer it completes, if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Reply> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Reply::Quit);
        }

        match &self.prompt {
            Prompt::Waiting => None,
            Prompt::Finished => Some(Reply::Dismiss),
            Prompt::Navigate { .. } => match key.code {
                KeyCode::Char('?') => {
                    self.show_help = !self.show_help;
                    None
                }
                KeyCode::Char(c) => Some(Reply::Command(Command::from_key(c))),
                KeyCode::Left => Some(Reply::Command(Command::Left)),
                KeyCode::Right => Some(Reply::Command(Command::Right)),
                _ => None,
            },
            Prompt::Accuse { .. } => match key.code {
                KeyCode::Enter if !self.input_buffer.trim().is_empty() => {
                    Some(Reply::Name(std::mem::take(&mut self.input_buffer)))
                }
                KeyCode::Esc => {
                    self.input_buffer.clear();
                    None
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                    None
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                    None
                }
                _ => None,
            },
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let layout = create_main_layout(frame.area());

        self.render_header(frame, layout[0]);

        let content = create_content_layout(layout[1]);
        self.render_transcript(frame, content[0]);
        self.render_side_panel(frame, content[1]);

        self.render_prompt(frame, layout[2]);

        if self.prompt == Prompt::Finished {
            self.render_verdict_overlay(frame);
        }
        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let room = self.current_room.as_deref().unwrap_or("Outside the mansion");
        let text = Line::from(vec![
            Span::styled(SMALL_LOGO, Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD)),
            Span::raw("│ "),
            Span::styled(room, Style::default().fg(self.theme.fg)),
            Span::styled(
                format!("  (rooms visited: {})", self.rooms_visited),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let header = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(header, area);
    }

    fn render_transcript(&self, frame: &mut Frame, area: Rect) {
        let visible_lines = area.height.saturating_sub(2) as usize;
        let start = self.transcript.len().saturating_sub(visible_lines);
        let lines: Vec<Line> = self.transcript[start..]
            .iter()
            .map(|message| Line::from(Span::styled(message.text.as_str(), tone_style(message.tone))))
            .collect();

        let transcript = Paragraph::new(lines)
            .block(styled_block("Investigation", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(transcript, area);
    }

    fn render_side_panel(&self, frame: &mut Frame, area: Rect) {
        let chunks = create_side_layout(area);

        let exits: Vec<ListItem> = match &self.prompt {
            Prompt::Navigate { left, right, .. } => {
                let mut items = Vec::new();
                if let Some(left) = left {
                    items.push(ListItem::new(format!(" [L] {}", left)));
                }
                if let Some(right) = right {
                    items.push(ListItem::new(format!(" [R] {}", right)));
                }
                items.push(ListItem::new(" [S] Stop exploring"));
                items
            }
            _ => vec![ListItem::new(" No doors to choose")],
        };
        frame.render_widget(List::new(exits).block(styled_block("Exits", &self.theme)), chunks[0]);

        let meter_area = Rect {
            x: chunks[1].x + 1,
            width: chunks[1].width.saturating_sub(2),
            ..chunks[1]
        };
        frame.render_widget(
            EvidenceMeter::new(self.notebook.len(), self.known_clues).color(self.theme.accent),
            meter_area,
        );

        let notes: Vec<ListItem> = self
            .notebook
            .iter()
            .map(|clue| ListItem::new(format!("- {}", clue)).style(tone_style(crate::game::Tone::Clue)))
            .collect();
        frame.render_widget(List::new(notes).block(styled_block("Notebook", &self.theme)), chunks[2]);
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect) {
        let (text, title) = match &self.prompt {
            Prompt::Waiting => (String::new(), " ... "),
            Prompt::Navigate { .. } => ("Press l, r or s to move (? for help)".to_string(), " Where to? "),
            Prompt::Accuse { suspects } => {
                let hint = if self.input_buffer.is_empty() && !suspects.is_empty() {
                    format!("[{}]", suspects.join(", "))
                } else {
                    String::new()
                };
                (format!("Accuse: {}_ {}", self.input_buffer, hint), " Accusation ")
            }
            Prompt::Finished => ("Press any key to leave the mansion".to_string(), " The End "),
        };

        let prompt = Paragraph::new(text)
            .style(Style::default().fg(self.theme.prompt))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.prompt))
                    .title(title),
            );
        frame.render_widget(prompt, area);
    }

    fn render_verdict_overlay(&self, frame: &mut Frame) {
        let area = centered(frame.area(), 60, 7);
        frame.render_widget(Clear, area);

        let verdict = match &self.verdict {
            Some(accusation) => {
                let color = match accusation.verdict {
                    Verdict::Sustained => Color::Green,
                    Verdict::Weak => Color::Magenta,
                };
                VerdictBox::new(&format!("ACCUSATION {}", accusation.verdict))
                    .border_color(color)
                    .content(vec![
                        format!("Accused: {}", accusation.accused),
                        format!("Clues pointing to them: {}", accusation.count),
                    ])
            }
            None => VerdictBox::new("CASE UNSOLVED").content(vec![
                "You did not collect enough clues".to_string(),
                "to accuse anyone.".to_string(),
            ]),
        };
        frame.render_widget(verdict, area);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = centered(frame.area(), 47, 19);
        frame.render_widget(Clear, area);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Left);
        frame.render_widget(help, area);
    }
}

/// A rectangle of at most `width` x `height` in the middle of `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Terminal shell: draws the game and blocks on key presses for answers
pub struct App<B: Backend> {
    terminal: Terminal<B>,
    pub state: AppState,
}

impl<B: Backend> App<B> {
    pub fn new(terminal: Terminal<B>, known_clues: usize) -> Self {
        Self {
            terminal,
            state: AppState::new(known_clues),
        }
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        self.terminal.draw(|frame| state.render(frame))?;
        Ok(())
    }

    /// Show the closing screen until a key is pressed
    pub fn finish(&mut self) -> Result<()> {
        self.state.prompt = Prompt::Finished;
        self.state.show_help = false;
        self.await_reply()?;
        Ok(())
    }

    fn await_reply(&mut self) -> Result<Reply> {
        loop {
            self.draw()?;
            if let Event::Key(key) = event::read()? {
                if let Some(reply) = self.state.handle_key(key) {
                    return Ok(reply);
                }
            }
        }
    }
}

impl<B: Backend> Investigator for App<B> {
    fn narrate(&mut self, event: &Narration<'_>) -> Result<()> {
        self.state.apply(event);
        self.draw()
    }

    fn choose(&mut self, crossroads: &Crossroads<'_>) -> Result<Command> {
        self.state.prompt = Prompt::Navigate {
            room: crossroads.room.to_string(),
            left: crossroads.left.map(str::to_string),
            right: crossroads.right.map(str::to_string),
        };
        let reply = self.await_reply()?;
        self.state.prompt = Prompt::Waiting;
        self.state.show_help = false;

        debug!("navigation reply {:?} in {}", reply, crossroads.room);
        match reply {
            Reply::Command(command) => Ok(command),
            Reply::Quit => Err(MansionError::InputClosed.into()),
            other => Ok(Command::Unrecognized(format!("{:?}", other))),
        }
    }

    fn name_suspect(&mut self, suspects: &[&str]) -> Result<String> {
        self.state.prompt = Prompt::Accuse {
            suspects: suspects.iter().map(|s| s.to_string()).collect(),
        };
        self.state.input_buffer.clear();
        let reply = self.await_reply()?;
        self.state.prompt = Prompt::Waiting;

        match reply {
            Reply::Name(name) => Ok(name),
            _ => Err(MansionError::InputClosed.into()),
        }
    }
}
