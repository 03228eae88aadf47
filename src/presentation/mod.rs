mod plain;
mod themed;

use crate::calculate::Calculation;
use crate::domain::Appearance;
use std::io;

pub use plain::PlainPresenter;
pub use themed::ThemedPresenter;

pub const LATITUDE_PROMPT: &str = "Latitude (decimal degrees): ";
pub const LONGITUDE_PROMPT: &str = "Longitude (decimal degrees): ";

/// A front end for the calculator. The session drives it and never looks at how things are drawn.
pub trait Presenter {
    /// Asks for the next line of input.
    fn prompt(&mut self, label: &str) -> io::Result<()>;

    /// Shows the summary of a lookup and the rounded values that can be copied.
    fn show_calculation(&mut self, calculation: &Calculation) -> io::Result<()>;

    /// Lists the actions available once a result is on screen.
    fn show_actions(&mut self) -> io::Result<()>;

    fn show_error(&mut self, title: &str, message: &str) -> io::Result<()>;

    /// Shows a short-lived message. It never blocks, presenters that hide notices do so on their next output.
    fn show_notice(&mut self, message: &str) -> io::Result<()>;

    /// Whether [`Presenter::set_appearance`] changes anything, i.e. whether the toggle is offered.
    fn supports_appearance(&self) -> bool;

    fn set_appearance(&mut self, appearance: Appearance) -> io::Result<()>;
}
