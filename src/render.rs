//! Incremental terminal renderer.
//!
//! Keeps the last drawn frame and only rewrites cells that changed,
//! recentering the maze whenever the terminal is resized.

use std::io::{Stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::game::GameState;
use crate::maze::{Cell, Pos};

const CELL_W: usize = 2;

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Player,
    Wall,
    Floor,
    Start,
    Goal,
}

#[derive(Clone, Copy, PartialEq)]
struct CellView {
    glyph: Glyph,
    color: Color,
}

pub struct Renderer {
    last: Vec<CellView>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            last: vec![
                CellView {
                    glyph: Glyph::Floor,
                    color: Color::Reset,
                };
                rows * cols
            ],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    pub fn draw(&mut self, stdout: &mut Stdout, game: &GameState) -> Result<()> {
        let rows = game.grid().rows();
        let cols = game.grid().cols();
        let needed_h = (rows + 2) as u16;
        let needed_w = (cols * CELL_W) as u16;

        stdout.queue(MoveTo(0, 0))?;

        let (term_w, term_h) = terminal::size()?;
        if term_w < needed_w || term_h < needed_h {
            stdout.queue(Clear(ClearType::All))?;
            let msg = format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            );
            stdout.queue(Print(msg))?;
            stdout.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }

        let hud = format!(
            "Maze {}x{}  Moves: {}  (arrows or hjkl to walk, q to quit)",
            rows,
            cols,
            game.moves()
        );
        if self.needs_full || hud != self.last_hud {
            stdout.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            stdout.queue(SetForegroundColor(Color::White))?;
            stdout.queue(Clear(ClearType::CurrentLine))?;
            stdout.queue(Print(&hud))?;
            stdout.queue(ResetColor)?;
            self.last_hud = hud;
        }

        for row in 0..rows {
            for col in 0..cols {
                let view = cell_for(game, Pos::new(row, col));
                let idx = row * cols + col;
                if self.needs_full || view != self.last[idx] {
                    self.last[idx] = view;
                    self.draw_cell(stdout, col, row, view)?;
                }
            }
        }
        self.needs_full = false;

        stdout.flush()?;
        Ok(())
    }

    fn draw_cell(&self, stdout: &mut Stdout, col: usize, row: usize, view: CellView) -> Result<()> {
        let (text, color) = match view.glyph {
            Glyph::Player => ("@ ", view.color),
            Glyph::Wall => ("██", view.color),
            Glyph::Floor => ("  ", view.color),
            Glyph::Start => ("S ", view.color),
            Glyph::Goal => ("E ", view.color),
        };
        let x_pos = self.origin_x + (col * CELL_W) as u16;
        let y_pos = self.origin_y + row as u16;
        stdout.queue(MoveTo(x_pos, y_pos))?;
        stdout.queue(SetForegroundColor(color))?;
        stdout.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        if w < CELL_W {
            for _ in 0..(CELL_W - w) {
                stdout.queue(Print(' '))?;
            }
        }
        stdout.queue(ResetColor)?;
        Ok(())
    }

    /// Final congratulation line under the maze; blocks until q or Esc.
    pub fn win_screen(&self, stdout: &mut Stdout, game: &GameState) -> Result<()> {
        let rows = game.grid().rows();
        let cols = game.grid().cols();
        let needed_h = (rows + 2) as u16;
        let needed_w = (cols * CELL_W) as u16;
        let (term_w, term_h) = terminal::size()?;
        if term_w < needed_w || term_h < needed_h {
            stdout.queue(MoveTo(0, needed_h))?;
        } else {
            let origin_x = (term_w - needed_w) / 2;
            let origin_y = (term_h - needed_h) / 2 + 1;
            stdout.queue(MoveTo(origin_x, origin_y + rows as u16))?;
        }
        stdout.queue(SetForegroundColor(Color::Yellow))?;
        stdout.queue(Print(format!(
            "You escaped in {} moves! (press q to quit)",
            game.moves()
        )))?;
        stdout.queue(ResetColor)?;
        stdout.flush()?;
        loop {
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && (key.code == KeyCode::Char('q') || key.code == KeyCode::Esc)
                    {
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn cell_for(game: &GameState, pos: Pos) -> CellView {
    if pos == game.player() {
        return CellView {
            glyph: Glyph::Player,
            color: Color::Yellow,
        };
    }
    if pos == game.grid().entry() {
        return CellView {
            glyph: Glyph::Start,
            color: Color::Green,
        };
    }
    if pos == game.grid().goal() {
        return CellView {
            glyph: Glyph::Goal,
            color: Color::Red,
        };
    }
    match game.grid().cell(pos) {
        Cell::Wall => CellView {
            glyph: Glyph::Wall,
            color: Color::Blue,
        },
        Cell::Open => CellView {
            glyph: Glyph::Floor,
            color: Color::Reset,
        },
    }
}
