//! Host side: presents the fire's pixel buffer on a terminal

use crate::config::{FireConfig, PrintConfig, RunConfig};
use crate::palette::Rgba;
use crate::render::PixelBuffer;
use crate::sim::FireSim;
use crate::terminal::{rgb, Terminal};
use crossterm::event::{KeyCode, KeyModifiers};
use log::{debug, info};
use rand::prelude::*;
use std::io::{self, Write};

/// Pixels below this alpha are left blank
const ALPHA_THRESHOLD: u8 = 128;

/// Interactive controls for a live run
pub struct Controls {
    pub speed: f32,  // Seconds per frame
    pub paused: bool,
}

impl Controls {
    pub fn new(initial_speed: f32) -> Self {
        Self {
            speed: initial_speed,
            paused: false,
        }
    }

    /// Handle keypress, returns true if should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            // Number keys: change speed (1=fastest, 9=slowest, 0=very slow)
            KeyCode::Char(c) => {
                self.speed = match c {
                    '1' => 0.005,
                    '2' => 0.01,
                    '3' => 0.02,
                    '4' => 0.03,
                    '5' => 0.05,
                    '6' => 0.07,
                    '7' => 0.1,
                    '8' => 0.15,
                    '9' | '0' => 0.2,
                    _ => self.speed,
                };
            }
            _ => {}
        }
        false
    }
}

/// Stretch `pixels` over the bottom of the terminal using half blocks.
///
/// Each cell shows two stacked pixels. The fire takes the same share of the
/// terminal height that `fire_height` takes of `display_height`; the rest
/// stays blank.
pub fn blit(term: &mut Terminal, pixels: &PixelBuffer, config: &FireConfig) {
    let (cols, rows) = term.size();
    if cols == 0 || rows == 0 || pixels.width() == 0 || pixels.height() == 0 {
        return;
    }

    let screen_px = rows as usize * 2;
    let fire_px =
        (screen_px * config.fire_height / config.display_height.max(1)).clamp(1, screen_px);
    let offset = screen_px - fire_px;

    let sample = |cx: usize, py: usize| -> Option<Rgba> {
        if py < offset {
            return None;
        }
        let sx = cx * pixels.width() / cols as usize;
        let sy = (py - offset) * pixels.height() / fire_px;
        let px = pixels.pixel(sx, sy);
        (px.a >= ALPHA_THRESHOLD).then_some(px)
    };

    for cy in 0..rows as usize {
        for cx in 0..cols as usize {
            let top = sample(cx, cy * 2);
            let bot = sample(cx, cy * 2 + 1);
            let (x, y) = (cx as i32, cy as i32);

            match (top, bot) {
                (None, None) => term.set(x, y, ' ', None, None),
                (None, Some(b)) => term.set(x, y, '▄', Some(rgb(b.r, b.g, b.b)), None),
                (Some(t), None) => term.set(x, y, '▀', Some(rgb(t.r, t.g, t.b)), None),
                (Some(t), Some(b)) => {
                    term.set(x, y, '▀', Some(rgb(t.r, t.g, t.b)), Some(rgb(b.r, b.g, b.b)))
                }
            }
        }
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    })
}

/// Run the fire live until the user quits
pub fn run(fire: FireConfig, config: RunConfig) -> io::Result<()> {
    let seed = resolve_seed(config.seed);
    info!("starting live fire, seed {}, {}s per frame", seed, config.time_step);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut sim = FireSim::new(fire)?;
    let mut pixels = PixelBuffer::new(sim.grid().width(), sim.grid().height());
    let mut controls = Controls::new(config.time_step);

    let mut term = Terminal::new()?;
    term.clear_screen()?;

    loop {
        let (w, h) = term.size();
        let (new_w, new_h) = crossterm::terminal::size().unwrap_or((w, h));
        if new_w != w || new_h != h {
            debug!("terminal resized to {}x{}", new_w, new_h);
            term.resize(new_w, new_h);
            term.clear_screen()?;
        }

        if let Some((code, mods)) = term.check_key()? {
            if controls.handle_key(code, mods) {
                break;
            }
        }

        if controls.paused {
            term.sleep(0.1);
            continue;
        }

        sim.tick(&mut rng);
        sim.render_into(&mut pixels);
        blit(&mut term, &pixels, sim.config());
        term.present()?;
        term.sleep(controls.speed);
    }

    Ok(())
}

/// Run a fixed number of ticks and write the last frame as ANSI text
pub fn print<W: Write>(fire: FireConfig, config: PrintConfig, out: &mut W) -> io::Result<()> {
    let seed = resolve_seed(config.seed);
    debug!("printing frame {} with seed {}", config.frames, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut sim = FireSim::new(fire)?;
    for _ in 0..config.frames {
        sim.tick(&mut rng);
    }

    let mut term = Terminal::offscreen(config.cols, config.rows);
    blit(&mut term, &sim.render(), sim.config());
    term.write_ansi(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::HeatGrid;
    use crate::palette::Palette;
    use crate::render::render_into;

    #[test]
    fn controls_quit_and_pause() {
        let mut controls = Controls::new(0.03);
        assert!(!controls.handle_key(KeyCode::Char(' '), KeyModifiers::NONE));
        assert!(controls.paused);
        assert!(controls.handle_key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(controls.handle_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(controls.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn controls_speed_presets() {
        let mut controls = Controls::new(0.03);
        controls.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);
        assert!((controls.speed - 0.005).abs() < f32::EPSILON);
        controls.handle_key(KeyCode::Char('8'), KeyModifiers::NONE);
        assert!((controls.speed - 0.15).abs() < f32::EPSILON);
        controls.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!((controls.speed - 0.15).abs() < f32::EPSILON);
    }

    fn lit_pixels(width: usize, height: usize) -> PixelBuffer {
        let mut grid = HeatGrid::new(width, height);
        let bottom = grid.bottom();
        grid.row_mut(bottom).fill(36);
        let mut buf = PixelBuffer::new(width, height);
        render_into(&grid, &Palette::doom(), &mut buf);
        buf
    }

    #[test]
    fn blit_puts_fire_at_the_bottom() {
        let config = FireConfig::with_size(4, 4);
        let config = FireConfig { display_height: 8, ..config };
        let mut term = Terminal::offscreen(4, 4);
        blit(&mut term, &lit_pixels(4, 4), &config);

        // 8 screen pixel rows, fire takes the lower 4; only the last is lit
        for y in 0..3 {
            assert_eq!(term.cell(0, y).map(|c| c.ch), Some(' '));
        }
        let last = term.cell(0, 3).copied().unwrap();
        assert_eq!(last.ch, '▄');
        assert_eq!(last.fg, Some(rgb(255, 255, 255)));
        assert_eq!(last.bg, None);
    }

    #[test]
    fn blit_fills_both_halves_when_lit() {
        let config = FireConfig::with_size(2, 2);
        let config = FireConfig { display_height: 2, ..config };
        let mut grid = HeatGrid::new(2, 2);
        grid.row_mut(0).fill(12);
        grid.row_mut(1).fill(36);
        let mut buf = PixelBuffer::new(2, 2);
        render_into(&grid, &Palette::doom(), &mut buf);

        let mut term = Terminal::offscreen(2, 1);
        blit(&mut term, &buf, &config);
        let cell = term.cell(1, 0).copied().unwrap();
        assert_eq!(cell.ch, '▀');
        assert_eq!(cell.fg, Some(rgb(223, 79, 7)));
        assert_eq!(cell.bg, Some(rgb(255, 255, 255)));
    }

    #[test]
    fn blit_on_empty_terminal_is_noop() {
        let mut term = Terminal::offscreen(0, 0);
        blit(&mut term, &lit_pixels(3, 3), &FireConfig::with_size(3, 3));
        assert_eq!(term.size(), (0, 0));
    }

    #[test]
    fn print_is_reproducible_with_seed() {
        let config = PrintConfig { frames: 30, cols: 20, rows: 6, seed: Some(4) };
        let mut a = Vec::new();
        let mut b = Vec::new();
        print(FireConfig::with_size(40, 12), config.clone(), &mut a).unwrap();
        print(FireConfig::with_size(40, 12), config, &mut b).unwrap();
        assert_eq!(a, b);
        let text = String::from_utf8(a).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains('▀') || text.contains('▄'));
    }

    #[test]
    fn print_rejects_bad_config() {
        let config = PrintConfig { frames: 1, cols: 10, rows: 4, seed: Some(1) };
        let err = print(FireConfig::with_size(0, 4), config, &mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
