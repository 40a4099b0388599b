//! Terminal adapters: signal pad, session display and line input.
//!
//! Output goes through a shared writer so tests can capture it. Errors while
//! writing to the terminal are logged and otherwise ignored.

use async_trait::async_trait;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use parking_lot::Mutex;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use simon_session::domain::{ACTIVE_LIGHTNESS, IDLE_LIGHTNESS};
use simon_session::{
    InputEvent, Intensity, ScoreDisplay, SessionPhase, SessionPresenter, SignalBank,
    SignalDescriptor, SignalId, SignalSource,
};

/// Terminal output shared by the pad and the display
pub type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

pub fn stdout_writer() -> SharedWriter {
    Arc::new(Mutex::new(Box::new(io::stdout())))
}

fn emit<F>(out: &SharedWriter, draw: F)
where
    F: FnOnce(&mut Box<dyn Write + Send>) -> io::Result<()>,
{
    let mut guard = out.lock();
    let result = draw(&mut *guard).and_then(|_| guard.flush());
    if let Err(e) = result {
        warn!(error = %e, "Terminal write failed");
    }
}

/// Convert a fully saturated HSL color to RGB.
///
/// `hue` is in degrees, `lightness` in percent.
pub fn hsl_to_rgb(hue: u16, lightness: u8) -> (u8, u8, u8) {
    let h = f32::from(hue % 360) / 60.0;
    let l = f32::from(lightness.min(100)) / 100.0;
    let chroma = 1.0 - (2.0 * l - 1.0).abs();
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

fn signal_color(signal: &SignalDescriptor, lightness: u8) -> Color {
    let (r, g, b) = hsl_to_rgb(signal.hue, lightness);
    Color::Rgb { r, g, b }
}

/// Renders signals as colored blocks held for the tone duration
pub struct TerminalSignalPad {
    bank: SignalBank,
    tone: Duration,
    out: SharedWriter,
}

impl TerminalSignalPad {
    pub fn new(bank: SignalBank, tone: Duration, out: SharedWriter) -> Self {
        Self { bank, tone, out }
    }

    fn paint(&self, signal: &SignalDescriptor, lightness: u8, label: &str, end: &str) {
        emit(&self.out, |w| {
            queue!(
                w,
                Print("\r"),
                SetBackgroundColor(signal_color(signal, lightness)),
                SetForegroundColor(Color::White),
                Print(format!(" {:^8} ", signal.name)),
                ResetColor,
                Print(format!(" {:<16}", label)),
                Print(end)
            )
        });
    }

    /// One-line legend of the pad in idle colors
    pub fn legend(&self) -> String {
        self.bank
            .iter()
            .enumerate()
            .map(|(i, s)| format!("[{}] {}", i + 1, s.name))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

#[async_trait]
impl SignalSource for TerminalSignalPad {
    async fn activate(&self, signal: SignalId, intensity: Intensity) {
        let Some(descriptor) = self.bank.get(signal) else {
            warn!(signal = %signal, "Activation for a signal not on the pad");
            return;
        };

        let label = if intensity.is_silent() {
            String::new()
        } else {
            format!("♪ {}", descriptor.sound)
        };
        self.paint(descriptor, ACTIVE_LIGHTNESS, &label, "");
        tokio::time::sleep(self.tone).await;
        self.paint(descriptor, IDLE_LIGHTNESS, "", "\r\n");
    }

    async fn failure_cue(&self) {
        emit(&self.out, |w| {
            queue!(
                w,
                SetForegroundColor(Color::Red),
                Print("\u{7}  ✗ WRONG  ✗\r\n"),
                ResetColor
            )
        });
        tokio::time::sleep(self.tone).await;
    }
}

/// Prints player, score and turn prompts
pub struct TerminalDisplay {
    out: SharedWriter,
}

impl TerminalDisplay {
    pub fn new(out: SharedWriter) -> Self {
        Self { out }
    }

    /// Print a free-form line
    pub fn message(&self, text: impl std::fmt::Display) {
        emit(&self.out, |w| queue!(w, Print(text), Print("\r\n")));
    }
}

impl SessionPresenter for TerminalDisplay {
    fn show_player(&self, name: &str) {
        self.message(format!("Player: {}", name));
    }

    fn show_score(&self, score: &ScoreDisplay) {
        self.message(format!("Score: {}", score));
    }

    fn phase_changed(&self, phase: SessionPhase) {
        match phase {
            SessionPhase::PlayingBack => self.message("Watch..."),
            SessionPhase::AwaitingPlayerInput => self.message("Your turn"),
            SessionPhase::RoundEnd => self.message("Game over"),
            _ => debug!(%phase, "Phase changed"),
        }
    }
}

/// Map one input line to an event. `q` quits, `n` restarts, anything else is
/// resolved against the signal bank.
pub fn parse_input(line: &str, bank: &SignalBank) -> Option<InputEvent> {
    let token = line.trim();
    match token.to_ascii_lowercase().as_str() {
        "" => None,
        "q" | "quit" | "exit" => Some(InputEvent::Quit),
        "n" | "new" | "restart" => Some(InputEvent::Restart),
        _ => bank.resolve(token).map(InputEvent::Press),
    }
}

/// Forward input lines into the session channel until EOF, `quit`, or the
/// receiver is dropped. Blocking; run it on its own thread.
pub fn forward_lines<R: BufRead>(
    reader: R,
    bank: &SignalBank,
    tx: &mpsc::Sender<InputEvent>,
) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let Some(event) = parse_input(&line, bank) else {
            debug!(input = %line.trim(), "Unrecognized input");
            continue;
        };
        let quit = event == InputEvent::Quit;
        if tx.blocking_send(event).is_err() || quit {
            return Ok(());
        }
    }
    // EOF ends the game like an explicit quit
    let _ = tx.blocking_send(InputEvent::Quit);
    Ok(())
}

/// Read input on a detached thread so a pending read never blocks shutdown
pub fn spawn_reader<R>(reader: R, bank: SignalBank, tx: mpsc::Sender<InputEvent>) -> io::Result<()>
where
    R: BufRead + Send + 'static,
{
    std::thread::Builder::new()
        .name("simon-input".to_string())
        .spawn(move || {
            if let Err(e) = forward_lines(reader, &bank, &tx) {
                warn!(error = %e, "Stopped reading input");
            }
        })?;
    Ok(())
}
