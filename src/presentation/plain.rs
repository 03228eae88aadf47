use crate::calculate::Calculation;
use crate::domain::{Appearance, LengthUnit};
use crate::presentation::Presenter;
use std::io::{self, Write};

/// Plain line output, no colors and no cursor movement. Works with pipes and dumb terminals.
#[derive(Debug)]
pub struct PlainPresenter<W: Write> {
    out: W,
}

impl<W: Write> PlainPresenter<W> {
    pub fn new(out: W) -> Self {
        PlainPresenter { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for PlainPresenter<W> {
    fn prompt(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "{}", label)?;
        self.out.flush()
    }

    fn show_calculation(&mut self, calculation: &Calculation) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", calculation.summary())?;
        writeln!(self.out)?;
        writeln!(self.out, "[f] Copy: {}", calculation.rounded(LengthUnit::Feet))?;
        writeln!(self.out, "[m] Copy: {}", calculation.rounded(LengthUnit::Meters))?;
        self.out.flush()
    }

    fn show_actions(&mut self) -> io::Result<()> {
        write!(self.out, "[f] copy feet, [m] copy meters, [n] new lookup, [q] quit: ")?;
        self.out.flush()
    }

    fn show_error(&mut self, title: &str, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}: {}", title, message)?;
        self.out.flush()
    }

    fn show_notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    fn supports_appearance(&self) -> bool {
        false
    }

    fn set_appearance(&mut self, _appearance: Appearance) -> io::Result<()> {
        Ok(())
    }
}
