use crate::calculate::Calculation;
use crate::domain::{Appearance, LengthUnit};
use crate::presentation::Presenter;
use crossterm::cursor::{MoveToNextLine, MoveToPreviousLine};
use crossterm::queue;
use crossterm::style::{Color, StyledContent, Stylize, style};
use crossterm::terminal::{Clear, ClearType};
use std::fmt::Display;
use std::io::{self, Write};

/// Colored terminal output. Rounded values use the accent color of the current appearance.
///
/// A "copied" notice stays up until the prompt after it has been answered and is erased before
/// the next output. Input is line based, so at that point it sits two lines above the cursor.
#[derive(Debug)]
pub struct ThemedPresenter<W: Write> {
    out: W,
    appearance: Appearance,
    notice: Notice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notice {
    Hidden,
    Shown,
    Prompted,
}

impl<W: Write> ThemedPresenter<W> {
    pub fn new(out: W, appearance: Appearance) -> Self {
        ThemedPresenter {
            out,
            appearance,
            notice: Notice::Hidden,
        }
    }

    fn accent<D: Display>(&self, content: D) -> StyledContent<D> {
        let (r, g, b) = self.appearance.accent_rgb();
        style(content).with(Color::Rgb { r, g, b }).bold()
    }

    fn clear_stale_notice(&mut self) -> io::Result<()> {
        if self.notice == Notice::Prompted {
            queue!(self.out, MoveToPreviousLine(2), Clear(ClearType::CurrentLine), MoveToNextLine(2))?;
        }
        self.notice = Notice::Hidden;
        Ok(())
    }

    fn write_prompt(&mut self, text: impl Display) -> io::Result<()> {
        let fresh_notice = self.notice == Notice::Shown;
        self.clear_stale_notice()?;
        write!(self.out, "{} ", text)?;
        if fresh_notice {
            self.notice = Notice::Prompted;
        }
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for ThemedPresenter<W> {
    fn prompt(&mut self, label: &str) -> io::Result<()> {
        self.write_prompt(label.trim_end().bold())
    }

    fn show_calculation(&mut self, calculation: &Calculation) -> io::Result<()> {
        self.clear_stale_notice()?;
        writeln!(self.out)?;
        let mut lines = calculation.summary().lines();
        if let Some(header) = lines.next() {
            writeln!(self.out, "{}", header.bold())?;
        }
        for line in lines {
            writeln!(self.out, "  {}", line)?;
        }
        writeln!(self.out)?;

        for (key, unit) in [("f", LengthUnit::Feet), ("m", LengthUnit::Meters)] {
            let value = self.accent(calculation.rounded(unit));
            writeln!(self.out, "{} {}", format!("[{}] Click to copy:", key).dim(), value)?;
        }
        self.out.flush()
    }

    fn show_actions(&mut self) -> io::Result<()> {
        self.write_prompt("[f] copy feet  [m] copy meters  [t] toggle dark mode  [n] new lookup  [q] quit >".dim())
    }

    fn show_error(&mut self, title: &str, message: &str) -> io::Result<()> {
        self.clear_stale_notice()?;
        writeln!(self.out, "{} {}", format!("✖ {}:", title).red().bold(), message)?;
        self.out.flush()
    }

    fn show_notice(&mut self, message: &str) -> io::Result<()> {
        self.clear_stale_notice()?;
        writeln!(self.out, "{}", message.italic())?;
        self.notice = Notice::Shown;
        self.out.flush()
    }

    fn supports_appearance(&self) -> bool {
        true
    }

    fn set_appearance(&mut self, appearance: Appearance) -> io::Result<()> {
        self.clear_stale_notice()?;
        self.appearance = appearance;
        let label = match appearance {
            Appearance::Dark => "Dark mode",
            Appearance::Light => "Light mode",
        };
        let label = self.accent(label);
        writeln!(self.out, "{}", label)?;
        self.out.flush()
    }
}
