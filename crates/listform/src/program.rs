//! Terminal runner for [`Model`]s.
//!
//! [`Program`] puts the terminal into raw mode, feeds crossterm key and
//! paste events to the model, executes the commands it returns and redraws
//! whenever the view changes. It stops on [`QuitMsg`] and restores the
//! terminal on the way out, including when the loop fails.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use thiserror::Error;
use tracing::{debug, trace};

use crate::key::{KeyMsg, from_crossterm_key};
use crate::message::{Cmd, Message, Model, QuitMsg};

/// Errors that can occur while running a [`Program`].
#[derive(Error, Debug)]
pub enum Error {
    /// Reading events from or writing to the terminal failed.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    ///
    /// Usually means stdin is not a terminal. Callers can fall back to
    /// accessible mode.
    #[error("failed to {action} raw mode: {source}")]
    RawModeFailure {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// A specialized [`Result`] type for program operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Drives a [`Model`] against the real terminal.
///
/// # Example
///
/// ```rust,no_run
/// use listform::{Form, ListInput, Program};
///
/// let form = Form::new(vec![Box::new(ListInput::new().key("fruits").title("Fruits"))]);
/// let form = Program::new(form).run()?;
/// println!("{:?}", form.get_list("fruits"));
/// # Ok::<(), listform::program::Error>(())
/// ```
pub struct Program<M: Model> {
    model: M,
    bracketed_paste: bool,
}

impl<M: Model> Program<M> {
    /// Create a program for `model`.
    pub fn new(model: M) -> Self {
        Self {
            model,
            bracketed_paste: true,
        }
    }

    /// Disable bracketed paste. Pasted text then arrives as single key
    /// presses.
    pub fn without_bracketed_paste(mut self) -> Self {
        self.bracketed_paste = false;
        self
    }

    /// Run on stdout and return the final model.
    pub fn run(self) -> Result<M> {
        self.run_with_writer(io::stdout())
    }

    /// Run, drawing to `writer`, and return the final model.
    pub fn run_with_writer<W: Write>(mut self, mut writer: W) -> Result<M> {
        enable_raw_mode().map_err(|source| Error::RawModeFailure {
            action: "enable",
            source,
        })?;

        let setup = self.setup(&mut writer);
        let result = setup.and_then(|()| self.event_loop(&mut writer));

        if self.bracketed_paste {
            let _ = execute!(writer, event::DisableBracketedPaste);
        }
        let _ = execute!(writer, Show);
        let _ = writeln!(writer);
        let _ = disable_raw_mode();

        result.map(|()| self.model)
    }

    fn setup<W: Write>(&self, writer: &mut W) -> Result<()> {
        execute!(writer, Hide)?;
        if self.bracketed_paste {
            execute!(writer, event::EnableBracketedPaste)?;
        }
        Ok(())
    }

    fn event_loop<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        let mut last_view = String::new();

        let cmd = self.model.init();
        if self.dispatch(cmd) {
            return Ok(());
        }
        render(&self.model, writer, &mut last_view)?;

        loop {
            let Some(msg) = translate_event(event::read()?) else {
                continue;
            };
            trace!(?msg, "Terminal event");
            let cmd = self.model.update(msg);
            let quit = self.dispatch(cmd);
            render(&self.model, writer, &mut last_view)?;
            if quit {
                debug!("Program quitting");
                return Ok(());
            }
        }
    }

    /// Execute `cmd` and feed resulting messages back into the model until
    /// none remain. Returns true once a [`QuitMsg`] is produced.
    fn dispatch(&mut self, mut cmd: Option<Cmd>) -> bool {
        while let Some(msg) = cmd.and_then(Cmd::execute) {
            if msg.is::<QuitMsg>() {
                return true;
            }
            cmd = self.model.update(msg);
        }
        false
    }
}

/// Convert a terminal event into a message for the model.
///
/// Only key presses and pastes produce messages. Key releases and repeats
/// reported by some terminals are dropped.
pub fn translate_event(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            from_crossterm_key(key.code, key.modifiers).map(Message::new)
        }
        Event::Paste(text) => {
            Some(Message::new(KeyMsg::from_runes(text.chars().collect()).with_paste()))
        }
        _ => None,
    }
}

fn render<M: Model, W: Write>(model: &M, writer: &mut W, last_view: &mut String) -> Result<()> {
    let view = model.view();
    if view == *last_view {
        return Ok(());
    }

    // Raw mode does not translate newlines into carriage returns.
    execute!(writer, MoveTo(0, 0), Clear(ClearType::All))?;
    write!(writer, "{}", view.replace('\n', "\r\n"))?;
    writer.flush()?;

    *last_view = view;
    Ok(())
}
