//! Custom widgets for the game UI

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A progress bar of clues found against clues known
pub struct EvidenceMeter {
    found: usize,
    known: usize,
    color: Color,
}

impl EvidenceMeter {
    pub fn new(found: usize, known: usize) -> Self {
        Self {
            found,
            known,
            color: Color::Yellow,
        }
    }

    /// Color of the label and the filled part of the bar
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for EvidenceMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let label = format!("Clues: {}/{}", self.found, self.known);
        buf.set_stringn(area.x, area.y, &label, area.width as usize, Style::default().fg(self.color));

        if area.height > 1 {
            let inner = area.width - 2;
            let filled = if self.known == 0 {
                0
            } else {
                (self.found.min(self.known) * inner as usize / self.known) as u16
            };
            let bar_y = area.y + 1;
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());

            for x in 0..filled {
                buf.set_string(area.x + 1 + x, bar_y, "█", Style::default().fg(self.color));
            }
            for x in filled..inner {
                buf.set_string(area.x + 1 + x, bar_y, "░", Style::default().fg(Color::DarkGray));
            }
        }
    }
}

/// Double-bordered box for the final verdict
pub struct VerdictBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl VerdictBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Red,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for VerdictBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        let style = Style::default().fg(self.border_color);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(area.x, bottom, "╚", style);
        for x in area.x + 1..right {
            buf.set_string(x, area.y, "═", style);
            buf.set_string(x, bottom, "═", style);
        }
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(right, bottom, "╝", style);

        for y in area.y + 1..bottom {
            buf.set_string(area.x, y, "║", style);
            buf.set_string(right, y, "║", style);
        }

        let title = format!(" {} ", self.title);
        let title_width = title.chars().count().min(area.width as usize - 2);
        let title_x = area.x + 1 + (area.width - 2 - title_width as u16) / 2;
        buf.set_stringn(title_x, area.y, &title, title_width, style);

        let text_width = area.width.saturating_sub(4) as usize;
        for (i, line) in self.content.iter().enumerate().take((area.height - 2) as usize) {
            buf.set_stringn(
                area.x + 2,
                area.y + 1 + i as u16,
                line,
                text_width,
                Style::default().fg(Color::White),
            );
        }
    }
}
