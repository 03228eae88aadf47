use thiserror::Error;
use tracing::debug;

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Sets the text and blocks until another application takes the clipboard over.
    ///
    /// On X11 and Wayland the owning process has to stay alive to serve the text, so this is used
    /// right before the process exits. Elsewhere the text outlives the process and this is `set_text`.
    fn set_text_and_wait(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.set_text(text)
    }
}

/// The system clipboard. It is only opened on the first copy, so sessions without a display still work until then.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard::default()
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => {
                debug!("Opening system clipboard");
                arboard::Clipboard::new()?
            }
        };
        Ok(self.clipboard.insert(clipboard))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard()?.set_text(text)?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    fn set_text_and_wait(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;

        debug!("Serving the clipboard until it is replaced");
        self.clipboard()?.set().wait().text(text)?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("could not access the clipboard: {0}")]
    Unavailable(#[from] arboard::Error),
}
