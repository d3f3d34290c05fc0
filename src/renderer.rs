use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::game::{GameState, GameStatus};
use crate::grid::{render_as_string, to_grid};
use crate::terminal_runtime::TerminalSession;

/// Everything a sink needs to draw one frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FrameInfo {
    /// Serialized grid, rows separated by newlines.
    pub text: String,
    pub width: u16,
    pub height: u16,
    pub length: usize,
    pub tick_count: u64,
    pub status: GameStatus,
}

impl FrameInfo {
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let board = state.board();
        Self {
            text: render_as_string(&to_grid(state)),
            width: board.width(),
            height: board.height(),
            length: state.snake.len(),
            tick_count: state.tick_count,
            status: state.status,
        }
    }

    /// One-line summary shown above the board.
    pub fn header(&self) -> String {
        let status = match self.status {
            GameStatus::Playing => "",
            GameStatus::Paused => "  [paused]",
        };
        format!(
            "{}x{}  length {}  tick {}{status}",
            self.width, self.height, self.length, self.tick_count
        )
    }
}

/// Destination for rendered frames.
pub trait RenderSink {
    fn present(&mut self, frame: &FrameInfo) -> io::Result<()>;
}

/// Full-screen ratatui view on the alternate screen.
pub struct TuiSink {
    session: TerminalSession,
}

impl TuiSink {
    pub fn enter() -> io::Result<Self> {
        Ok(Self {
            session: TerminalSession::enter()?,
        })
    }
}

impl RenderSink for TuiSink {
    fn present(&mut self, info: &FrameInfo) -> io::Result<()> {
        self.session
            .terminal_mut()
            .draw(|frame| render(frame, info))?;
        Ok(())
    }
}

/// Draws the board inside a bordered block with a header and key help.
pub fn render(frame: &mut Frame<'_>, info: &FrameInfo) {
    let [header_area, board_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(info.header()))
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        header_area,
    );

    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::new().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(info.text.as_str())
            .block(block)
            .style(Style::new().fg(Color::Green)),
        board_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from("arrows move  [P]/[Space] pause  [Q]/[Esc] quit"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}

/// Clear-and-print view on the normal screen.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for ConsoleSink<W> {
    fn present(&mut self, info: &FrameInfo) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0), Print(info.header()))?;
        // Raw mode does not translate '\n' into a carriage return.
        for (row, line) in info.text.lines().enumerate() {
            let y = u16::try_from(row + 1).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, y), Print(line))?;
        }
        self.out.flush()
    }
}
