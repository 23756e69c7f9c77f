//! Terminal backend for the slideshow
//!
//! `TextGridRenderer` draws into an in-memory cell grid and flushes the
//! whole grid to stdout when the frame ends. `ScriptedInput` replays a
//! canned key script against the wall clock so the demo drives itself.

use stagecraft::prelude::*;
use std::collections::VecDeque;
use std::io::Write;
use std::time::{Duration, Instant};

/// In-memory character grid flushed to stdout per frame
pub struct TextGridRenderer {
    size: SurfaceSize,
    cells: Vec<char>,
}

impl TextGridRenderer {
    /// Grid of the given dimensions, initially blank
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            cells: vec![' '; (width * height) as usize],
        }
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as u32, pos.y as u32);
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some((y * self.size.width + x) as usize)
    }

    fn put(&mut self, pos: CellPos, glyph: char) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = glyph;
        }
    }
}

// Translucent backgrounds map to shade blocks; opaque and fully
// transparent cells keep their glyph.
fn shade(alpha: u8) -> Option<char> {
    match alpha {
        0 | 255 => None,
        1..=63 => Some('\u{2591}'),
        64..=127 => Some('\u{2592}'),
        128..=191 => Some('\u{2593}'),
        192..=254 => Some('\u{2588}'),
    }
}

impl Renderer for TextGridRenderer {
    fn begin_draw(&mut self) -> Result<(), EngineError> {
        self.cells.fill(' ');
        Ok(())
    }

    fn draw_text(
        &mut self,
        pos: CellPos,
        text: &str,
        _style: TextStyle,
    ) -> Result<(), EngineError> {
        for (i, glyph) in text.chars().enumerate() {
            self.put(CellPos::new(pos.x + i as i32, pos.y), glyph);
        }
        Ok(())
    }

    fn draw_tile(&mut self, pos: CellPos, visual: TileVisual) -> Result<(), EngineError> {
        let glyph = shade(visual.bg.a).unwrap_or(visual.glyph);
        self.put(pos, glyph);
        Ok(())
    }

    fn end_draw(&mut self) -> Result<(), EngineError> {
        let mut frame = String::with_capacity(self.cells.len() + self.size.height as usize + 1);
        for row in self.cells.chunks(self.size.width as usize) {
            frame.extend(row);
            frame.push('\n');
        }
        frame.push('\n');

        let mut out = std::io::stdout().lock();
        out.write_all(frame.as_bytes())
            .map_err(|e| EngineError::RenderError(e.to_string()))
    }

    fn surface_size(&self) -> SurfaceSize {
        self.size
    }
}

/// Input device replaying a timed key script
///
/// Each entry is a key and the time since construction at which it is
/// pressed; entries must be in ascending order. A key stays pressed for
/// exactly one input frame.
pub struct ScriptedInput {
    started: Instant,
    script: VecDeque<(Duration, KeyCode)>,
    pressed: Option<KeyCode>,
}

impl ScriptedInput {
    /// Build from `(at, key)` pairs in ascending `at` order
    pub fn new(script: impl IntoIterator<Item = (Duration, KeyCode)>) -> Self {
        Self {
            started: Instant::now(),
            script: script.into_iter().collect(),
            pressed: None,
        }
    }
}

impl InputDevice for ScriptedInput {
    fn poll(&mut self) -> Result<(), EngineError> {
        if self.pressed.is_none() {
            if let Some((at, _)) = self.script.front() {
                if self.started.elapsed() >= *at {
                    self.pressed = self.script.pop_front().map(|(_, key)| key);
                }
            }
        }
        Ok(())
    }

    fn end_frame(&mut self) {
        self.pressed = None;
    }

    fn is_down(&self, key: KeyCode) -> bool {
        self.pressed == Some(key)
    }

    fn was_pressed(&self, key: KeyCode) -> bool {
        self.pressed == Some(key)
    }

    fn was_released(&self, _key: KeyCode) -> bool {
        false
    }
}
