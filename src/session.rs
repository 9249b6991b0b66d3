use std::{ops::ControlFlow, str::FromStr};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::selection::{
    ComponentId, DeselectOutcome, DragOutcome, InstanceId, SelectionEngine, SurfaceError,
    SurfacePort,
};

/// One user gesture delivered by the input surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    BeginDrag { component_id: ComponentId },
    Drop { component_id: ComponentId },
    CancelDrag,
    Remove { instance_id: InstanceId },
    Complete,
    Reset,
    Show,
    Quit,
}

impl FromStr for InputEvent {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.starts_with('{') {
            return serde_json::from_str(line)
                .with_context(|| format!("invalid input event json: {line}"));
        }

        let mut parts = line.split_whitespace();
        let command = parts
            .next()
            .ok_or_else(|| anyhow!("empty input line"))?
            .to_ascii_lowercase();
        let argument = parts.next().map(str::to_string);
        if parts.next().is_some() {
            return Err(anyhow!("too many arguments for '{command}'"));
        }

        let require = |name: &str| {
            argument
                .clone()
                .ok_or_else(|| anyhow!("missing argument for '{command}'. usage: {command} <{name}>"))
        };

        let event = match command.as_str() {
            "drag" => Self::BeginDrag {
                component_id: require("component-id")?,
            },
            "drop" => Self::Drop {
                component_id: require("component-id")?,
            },
            "cancel" => Self::CancelDrag,
            "remove" => Self::Remove {
                instance_id: require("instance-id")?,
            },
            "complete" => Self::Complete,
            "reset" => Self::Reset,
            "show" => Self::Show,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(anyhow!(
                    "unknown command '{other}'. expected one of: drag, drop, cancel, remove, complete, reset, show, quit"
                ));
            }
        };

        if argument.is_some()
            && matches!(
                event,
                Self::CancelDrag | Self::Complete | Self::Reset | Self::Show | Self::Quit
            )
        {
            return Err(anyhow!("'{command}' takes no arguments"));
        }

        Ok(event)
    }
}

/// Decodes one raw input line. Blank lines and `#` comments yield `None`.
fn decode_line(raw: &[u8]) -> Result<Option<InputEvent>> {
    let line = std::str::from_utf8(raw).context("input line is not valid utf-8")?;
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Binds the engine to one input stream and one rendering surface.
///
/// Holds the in-flight drag: a drop is only observed when it matches the
/// component whose drag was started, and a refused drag leaves nothing
/// in flight.
pub struct Session<S: SurfacePort> {
    engine: SelectionEngine,
    surface: S,
    in_flight: Option<ComponentId>,
}

impl<S: SurfacePort> Session<S> {
    pub fn new(engine: SelectionEngine, surface: S) -> Self {
        Self {
            engine,
            surface,
            in_flight: None,
        }
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn in_flight(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<ControlFlow<()>, SurfaceError> {
        match event {
            InputEvent::BeginDrag { component_id } => {
                match self.engine.begin_drag(&component_id) {
                    DragOutcome::Started => self.in_flight = Some(component_id),
                    DragOutcome::Refused(reason) => {
                        tracing::debug!(
                            target: "session",
                            component_id = %component_id,
                            reason = ?reason,
                            "drag_refused"
                        );
                        self.in_flight = None;
                    }
                }
            }
            InputEvent::Drop { component_id } => {
                let dragged = self.in_flight.take();
                if dragged.as_deref() != Some(component_id.as_str()) {
                    tracing::debug!(
                        target: "session",
                        component_id = %component_id,
                        in_flight = ?dragged,
                        "drop_ignored_without_matching_drag"
                    );
                    return Ok(ControlFlow::Continue(()));
                }

                if self.engine.attempt_select(&component_id).is_accepted() {
                    self.render_board()?;
                }
            }
            InputEvent::CancelDrag => {
                self.in_flight = None;
            }
            InputEvent::Remove { instance_id } => {
                if let DeselectOutcome::Removed(_) = self.engine.deselect(&instance_id) {
                    self.render_board()?;
                }
            }
            InputEvent::Complete => {
                let summary = self.engine.summarize();
                tracing::info!(
                    target: "session",
                    complete = summary.is_report(),
                    entries = summary.entries().len(),
                    "summary_requested"
                );
                self.surface.render_summary(&summary)?;
            }
            InputEvent::Reset => {
                self.in_flight = None;
                self.engine.reset();
                self.render_board()?;
            }
            InputEvent::Show => {
                self.render_board()?;
            }
            InputEvent::Quit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Consumes input lines until EOF or `quit`. Lines that are not UTF-8
    /// or fail to parse are logged and skipped; read failures end the run.
    #[tracing::instrument(name = "session_run", target = "session", skip_all)]
    pub async fn run<R>(&mut self, mut reader: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.render_board().context("failed to render initial board")?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .context("failed to read input line")?;
            if read == 0 {
                break;
            }

            let event = match decode_line(&buf) {
                Ok(None) => continue,
                Ok(Some(event)) => event,
                Err(err) => {
                    tracing::warn!(
                        target: "session",
                        line = %String::from_utf8_lossy(&buf).trim(),
                        error = %err,
                        "input_rejected"
                    );
                    continue;
                }
            };

            if self
                .handle(event)
                .context("failed to render session update")?
                .is_break()
            {
                break;
            }
        }

        Ok(())
    }

    fn render_board(&mut self) -> Result<(), SurfaceError> {
        self.surface
            .render_components(&self.engine.component_views())?;
        self.surface.render_selection(self.engine.selection())
    }
}
