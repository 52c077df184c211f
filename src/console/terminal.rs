use std::io::{self, BufRead, Write};
use std::thread;

use async_trait::async_trait;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use tokio::sync::mpsc;

use crate::config::ColorConfig;
use crate::console::{Console, Tone};

/// Colored stdout plus stdin lines.
///
/// Stdin is read on a dedicated thread so a pending read never keeps the
/// runtime alive after the session ends.
///
/// Ctrl-C is only observed while something awaits it: at a prompt, or while a
/// request is in flight. Once tokio owns SIGINT, a Ctrl-C pressed during the
/// synchronous export or while the system opener runs is dropped rather than
/// killing the process.
pub struct TerminalConsole {
    colors: ColorConfig,
    lines: mpsc::UnboundedReceiver<String>,
}

impl TerminalConsole {
    pub fn new(colors: ColorConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        Self { colors, lines: rx }
    }

    fn color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Plain => Color::Reset,
            Tone::Banner => self.colors.banner,
            Tone::Heading => self.colors.heading,
            Tone::Success => self.colors.success,
            Tone::Error => self.colors.error,
        }
    }

    fn write(&self, color: Color, text: &str, newline: bool) {
        if let Err(err) = write_colored(&mut io::stdout(), color, text, newline) {
            tracing::debug!(error = %err, "Failed to write to stdout");
        }
    }
}

fn write_colored<W: Write>(out: &mut W, color: Color, text: &str, newline: bool) -> io::Result<()> {
    queue!(out, SetForegroundColor(color), Print(text), ResetColor)?;
    if newline {
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

#[async_trait]
impl Console for TerminalConsole {
    async fn prompt(&mut self, message: &str) -> Option<String> {
        self.write(self.colors.prompt, message, false);

        let line = tokio::select! {
            line = self.lines.recv() => line,
            _ = tokio::signal::ctrl_c() => None,
        };

        if line.is_none() {
            self.write(Color::Reset, "", true);
        }
        line
    }

    fn say(&mut self, tone: Tone, message: &str) {
        self.write(self.color(tone), message, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_write_colored_wraps_text_in_color_codes() {
        let mut out = Vec::new();
        write_colored(&mut out, Color::Green, "Found 2 games.", true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Found 2 games."));
        assert!(text.starts_with('\u{1b}'));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_write_colored_reports_write_failure() {
        let err = write_colored(&mut ClosedPipe, Color::Red, "Error", true).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
