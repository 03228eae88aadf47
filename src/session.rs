use crate::app_state::AppState;
use crate::calculate::{Calculation, calculate};
use crate::clipboard::Clipboard;
use crate::domain::{Appearance, LengthUnit, RoundedHeight};
use crate::ngs::{HeightLookup, LookupError};
use crate::presentation::{LATITUDE_PROMPT, LONGITUDE_PROMPT, Presenter};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Drives one user session: reads input lines, runs lookups and dispatches copy and appearance actions.
pub struct Session<R, P, C, L> {
    input: R,
    presenter: P,
    clipboard: C,
    lookup: L,
    state: AppState,
}

#[derive(Debug, PartialEq)]
enum Next {
    NewLookup,
    Quit,
}

impl<R, P, C, L> Session<R, P, C, L>
where
    R: BufRead,
    P: Presenter,
    C: Clipboard,
    L: HeightLookup,
{
    pub fn new(input: R, presenter: P, clipboard: C, lookup: L, appearance: Appearance) -> Self {
        Session {
            input,
            presenter,
            clipboard,
            lookup,
            state: AppState::new(appearance),
        }
    }

    /// Keeps asking for coordinates until the user quits or the input ends.
    #[instrument(skip_all)]
    pub async fn run(&mut self) -> Result<(), SessionError> {
        info!("Starting interactive session");
        loop {
            let Some(latitude) = self.ask(LATITUDE_PROMPT)? else {
                break;
            };
            let Some(longitude) = self.ask(LONGITUDE_PROMPT)? else {
                break;
            };
            self.state.set_inputs(latitude, longitude);

            let calculation = match calculate(&mut self.state, &self.lookup).await {
                Ok(calculation) => calculation,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };
            self.presenter.show_calculation(&calculation)?;

            if self.actions(&calculation).await? == Next::Quit {
                break;
            }
        }
        info!("Session ended");
        Ok(())
    }

    /// Runs a single lookup for the given coordinates, copying one of the rounded values if asked to.
    #[instrument(skip(self))]
    pub async fn run_once(&mut self, latitude: &str, longitude: &str, copy: Option<LengthUnit>) -> Result<(), SessionError> {
        self.state.set_inputs(latitude, longitude);

        let calculation = match calculate(&mut self.state, &self.lookup).await {
            Ok(calculation) => calculation,
            Err(e) => {
                self.report(&e)?;
                return Err(SessionError::Lookup(e));
            }
        };
        self.presenter.show_calculation(&calculation)?;

        if let Some(unit) = copy {
            let rounded = calculation.rounded(unit);
            if self.copy(rounded)? {
                self.hold_clipboard(&rounded.copy_text());
            }
        }
        Ok(())
    }

    async fn actions(&mut self, calculation: &Calculation) -> Result<Next, SessionError> {
        loop {
            self.presenter.show_actions()?;
            let Some(action) = self.read_line()? else {
                return Ok(Next::Quit);
            };

            match action.trim().to_lowercase().as_str() {
                "f" => {
                    self.copy(calculation.rounded(LengthUnit::Feet))?;
                }
                "m" => {
                    self.copy(calculation.rounded(LengthUnit::Meters))?;
                }
                "t" if self.presenter.supports_appearance() => {
                    let appearance = self.state.toggle_appearance();
                    debug!(?appearance, "Toggled appearance");
                    self.presenter.set_appearance(appearance)?;
                    self.presenter.show_calculation(calculation)?;
                }
                "n" => return Ok(Next::NewLookup),
                "q" => return Ok(Next::Quit),
                "" => {}
                other => self.presenter.show_error("Input Error", &format!("Unknown action '{}'.", other))?,
            }
        }
    }

    /// Copies the rounded value and tells the user, returns whether the copy worked.
    fn copy(&mut self, rounded: RoundedHeight) -> io::Result<bool> {
        let text = rounded.copy_text();
        if let Err(e) = self.clipboard.set_text(&text) {
            warn!("⚠️ Unable to copy '{}': {}", text, e);
            self.presenter.show_error("Error", &e.to_string())?;
            return Ok(false);
        }

        info!("📋 Copied '{}' to the clipboard", text);
        self.presenter.show_notice(&format!("{} has been copied to the clipboard.", text))?;
        Ok(true)
    }

    // The process exits right after a one-shot copy, keep serving the text until it is replaced
    fn hold_clipboard(&mut self, text: &str) {
        info!("📋 Keeping '{}' on the clipboard until it is replaced", text);
        if let Err(e) = self.clipboard.set_text_and_wait(text) {
            warn!("⚠️ Unable to keep '{}' on the clipboard: {}", text, e);
        }
    }

    fn report(&mut self, error: &LookupError) -> io::Result<()> {
        match error {
            LookupError::InvalidInput { field, value } => debug!(field = *field, value = value.as_str(), "Invalid input"),
            _ => warn!("⚠️ Lookup failed: {}", error),
        }
        self.presenter.show_error(error.title(), &error.to_string())
    }

    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        self.presenter.prompt(label)?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    #[cfg(test)]
    fn into_parts(self) -> (P, C, AppState) {
        (self.presenter, self.clipboard, self.state)
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::clipboard::ClipboardError;
    use crate::domain::HeightResult;
    use crate::ngs::NgsClient;
    use crate::presentation::{PlainPresenter, ThemedPresenter};
    use async_trait::async_trait;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use reqwest::Client;
    use std::io::Cursor;
    use test_log::test;

    #[derive(Default)]
    struct RecordingClipboard {
        texts: Vec<String>,
        held: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.texts.push(text.to_string());
            Ok(())
        }

        fn set_text_and_wait(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.held.push(text.to_string());
            Ok(())
        }
    }

    struct FixedLookup(f64);

    #[async_trait]
    impl HeightLookup for FixedLookup {
        async fn lookup(&self, latitude: f64, longitude: f64) -> Result<HeightResult, LookupError> {
            Ok(HeightResult::from_meters(latitude, longitude, self.0))
        }
    }

    type TestSession<L> = Session<Cursor<&'static str>, PlainPresenter<Vec<u8>>, RecordingClipboard, L>;

    fn session<L: HeightLookup>(input: &'static str, lookup: L) -> TestSession<L> {
        Session::new(
            Cursor::new(input),
            PlainPresenter::new(Vec::new()),
            RecordingClipboard::default(),
            lookup,
            Appearance::Dark,
        )
    }

    fn themed_session(input: &'static str) -> Session<Cursor<&'static str>, ThemedPresenter<Vec<u8>>, RecordingClipboard, FixedLookup> {
        Session::new(
            Cursor::new(input),
            ThemedPresenter::new(Vec::new(), Appearance::Dark),
            RecordingClipboard::default(),
            FixedLookup(1.0),
            Appearance::Dark,
        )
    }

    fn finish<L: HeightLookup>(session: TestSession<L>) -> (String, Vec<String>, AppState) {
        let (presenter, clipboard, state) = session.into_parts();
        (String::from_utf8_lossy(&presenter.into_inner()).into_owned(), clipboard.texts, state)
    }

    #[test(tokio::test)]
    async fn run_copies_the_rounded_values_on_request() -> Result<(), SessionError> {
        let mut session = session("40.0\n-75.0\nf\nm\nq\n", FixedLookup(-30.2));

        session.run().await?;

        let (presenter, clipboard, _) = session.into_parts();
        let output = String::from_utf8_lossy(&presenter.into_inner()).into_owned();
        assert_eq!(clipboard.texts, vec!["-99.081 feet".to_string(), "-30.200 meters".to_string()]);
        assert!(clipboard.held.is_empty());
        assert!(output.contains("In feet (unrounded): -99.081167"), "{}", output);
        assert!(output.contains("-99.081 feet has been copied to the clipboard."), "{}", output);
        assert!(output.contains("-30.200 meters has been copied to the clipboard."), "{}", output);

        Ok(())
    }

    #[test(tokio::test)]
    async fn run_reports_invalid_input_and_asks_again() -> Result<(), SessionError> {
        let mut session = session("north\n-75.0\n40.0\n-75.0\nq\n", FixedLookup(-30.2));

        session.run().await?;

        let (output, copied, state) = finish(session);
        assert!(
            output.contains("Input Error: Please enter valid numeric values for latitude and longitude."),
            "{}",
            output
        );
        assert_eq!(output.matches(LATITUDE_PROMPT).count(), 2);
        assert_eq!(state.result(), Some(&HeightResult::from_meters(40.0, -75.0, -30.2)));
        assert!(copied.is_empty());

        Ok(())
    }

    #[test(tokio::test)]
    async fn run_starts_a_new_lookup_and_keeps_the_last_result() -> Result<(), SessionError> {
        let mut session = session("40.0\n-75.0\nn\n10.5\n20.5\n", FixedLookup(1.0));

        session.run().await?;

        let (_, _, state) = finish(session);
        assert_eq!(state.result(), Some(&HeightResult::from_meters(10.5, 20.5, 1.0)));

        Ok(())
    }

    #[test(tokio::test)]
    async fn run_toggles_the_appearance() -> Result<(), SessionError> {
        let mut session = themed_session("40.0\n-75.0\nt\nt\nt\nq\n");

        session.run().await?;

        let (_, _, state) = session.into_parts();
        assert_eq!(state.appearance(), Appearance::Light);

        Ok(())
    }

    #[test(tokio::test)]
    async fn run_treats_t_as_unknown_without_appearance_support() -> Result<(), SessionError> {
        let mut session = session("40.0\n-75.0\nt\nq\n", FixedLookup(1.0));

        session.run().await?;

        let (output, _, state) = finish(session);
        assert!(output.contains("Input Error: Unknown action 't'."), "{}", output);
        assert_eq!(state.appearance(), Appearance::Dark);

        Ok(())
    }

    #[test(tokio::test)]
    async fn run_erases_each_notice_once_its_prompt_is_answered() -> Result<(), SessionError> {
        let mut session = themed_session("40.0\n-75.0\nf\nm\nq\n");

        session.run().await?;

        let (presenter, clipboard, _) = session.into_parts();
        let output = String::from_utf8_lossy(&presenter.into_inner()).into_owned();
        assert_eq!(clipboard.texts, vec!["3.281 feet".to_string(), "1.000 meters".to_string()]);
        assert!(clipboard.held.is_empty());
        // The second notice is still up when the session quits
        assert_eq!(output.matches("\x1b[2F\x1b[2K\x1b[2E").count(), 1, "{:?}", output);

        Ok(())
    }

    #[test(tokio::test)]
    async fn run_rejects_unknown_actions() -> Result<(), SessionError> {
        let mut session = session("40.0\n-75.0\nx\nq\n", FixedLookup(1.0));

        session.run().await?;

        let (output, _, _) = finish(session);
        assert!(output.contains("Input Error: Unknown action 'x'."), "{}", output);

        Ok(())
    }

    #[test(tokio::test)]
    async fn run_ends_when_the_input_ends() -> Result<(), SessionError> {
        let mut session = session("", FixedLookup(1.0));

        session.run().await?;

        let (output, _, state) = finish(session);
        assert_eq!(output, LATITUDE_PROMPT);
        assert_eq!(state.result(), None);

        Ok(())
    }

    #[test(tokio::test)]
    async fn run_once_reports_a_service_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/geoid/ght")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().ngs_url(format!("{}/api/geoid/ght", server.url())).build();
        let mut session = session("", NgsClient::new(Client::new(), &config));

        let result = session.run_once("40.0", "-75.0", Some(LengthUnit::Feet)).await;

        assert!(matches!(result, Err(SessionError::Lookup(LookupError::NetworkFailure(_)))), "{:?}", result);
        let (output, copied, _) = finish(session);
        assert!(output.starts_with("Error: An error occurred while fetching geoid height:"), "{}", output);
        assert!(copied.is_empty());
    }

    #[test(tokio::test)]
    async fn run_once_copies_the_requested_unit() -> Result<(), SessionError> {
        let mut session = session("", FixedLookup(12.345));

        session.run_once("38.5", "-120.25", Some(LengthUnit::Feet)).await?;

        let (presenter, clipboard, _) = session.into_parts();
        let output = String::from_utf8_lossy(&presenter.into_inner()).into_owned();
        assert_eq!(clipboard.texts, vec!["40.502 feet".to_string()]);
        assert_eq!(clipboard.held, vec!["40.502 feet".to_string()]);
        assert!(output.contains("In meters (unrounded): 12.345000"), "{}", output);
        assert!(output.contains("40.502 feet has been copied to the clipboard."), "{}", output);

        Ok(())
    }
}
