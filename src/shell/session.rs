//! Interactive session: reads commands, applies client events, redraws

use super::command::{Command, HELP};
use crate::categories::{self, CATEGORIES, EXAMPLE_QUERIES};
use crate::config::{RenderFormat, UiSettings};
use crate::search::{pointer_bus, PointerBus, SearchClient};
use crate::view::{Templates, View};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// What the session should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    Message(String),
    Quit,
}

/// Terminal front end around one mounted [`SearchClient`]
pub struct Session {
    client: SearchClient,
    templates: Templates,
    ui: UiSettings,
    bus: PointerBus,
}

impl Session {
    pub fn new(mut client: SearchClient, templates: Templates, ui: UiSettings) -> Self {
        let bus = pointer_bus();
        client.mount(&bus);
        Self {
            client,
            templates,
            ui,
            bus,
        }
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    /// Render the current state in the configured format
    pub fn render(&self) -> Result<String> {
        self.render_as(self.ui.format)
    }

    pub fn render_as(&self, format: RenderFormat) -> Result<String> {
        let view = View::from_state(self.client.state(), &self.ui);
        self.templates.render(&view, format)
    }

    /// Type `query`, submit it and wait for the outcome
    pub async fn search_once(&mut self, query: &str) -> Result<String> {
        self.client.on_input_change(query);
        self.client.on_submit();
        self.client.settle().await;
        self.render()
    }

    /// Apply one command to the client
    pub fn execute(&mut self, command: Command) -> Flow {
        match command {
            Command::Input(text) => {
                self.client.on_input_change(&text);
                Flow::Redraw
            }
            Command::Submit => {
                self.client.on_submit();
                Flow::Redraw
            }
            Command::Pick(n) => {
                let state = self.client.state();
                if !state.dropdown_visible() {
                    return Flow::Message("no suggestions are showing".to_string());
                }
                match n.checked_sub(1).and_then(|i| state.suggestions.get(i)).cloned() {
                    Some(suggestion) => {
                        self.client.on_suggestion_select(&suggestion);
                        Flow::Redraw
                    }
                    None => Flow::Message(format!("there is no suggestion {}", n)),
                }
            }
            Command::Chip(n) => {
                if !self.client.state().is_empty_result() {
                    return Flow::Message(
                        "example queries show only when nothing was found".to_string(),
                    );
                }
                match n.checked_sub(1).and_then(|i| EXAMPLE_QUERIES.get(i)) {
                    Some(chip) => {
                        self.client.on_suggestion_select(chip);
                        Flow::Redraw
                    }
                    None => Flow::Message(format!("there is no example query {}", n)),
                }
            }
            Command::Category(id) => match categories::find(&id) {
                Some(category) => {
                    self.client.on_category_select(category);
                    Flow::Redraw
                }
                None => Flow::Message(format!("unknown category '{}' (see :cats)", id)),
            },
            Command::ListCategories => Flow::Message(
                CATEGORIES
                    .iter()
                    .map(|c| format!("{:>13}  {} {}", c.id, c.icon, c.name))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Command::Focus => {
                self.client.on_input_focus();
                Flow::Redraw
            }
            Command::Click(target) => {
                // Delivered through the bus like any page-wide pointer event
                if self.bus.send(target).is_err() {
                    warn!("Pointer event dropped, client not mounted");
                }
                Flow::Message(String::new())
            }
            Command::Html => match self.render_as(RenderFormat::Html) {
                Ok(html) => Flow::Message(html),
                Err(e) => Flow::Message(format!("render failed: {}", e)),
            },
            Command::Help => Flow::Message(HELP.to_string()),
            Command::Quit => Flow::Quit,
        }
    }

    /// Drive the session until `input` ends or the user quits.
    ///
    /// At end of input, outstanding work is allowed to finish and the final
    /// page is drawn.
    pub async fn run<R, W>(&mut self, input: R, mut out: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        self.draw(&mut out).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Input closed");
                        self.client.settle().await;
                        self.draw(&mut out).await?;
                        break;
                    };

                    let flow = match Command::parse(&line) {
                        Ok(command) => self.execute(command),
                        Err(message) => Flow::Message(message),
                    };
                    match flow {
                        Flow::Redraw => self.draw(&mut out).await?,
                        Flow::Message(message) if message.is_empty() => {}
                        Flow::Message(message) => {
                            out.write_all(message.as_bytes()).await?;
                            out.write_all(b"\n").await?;
                            out.flush().await?;
                        }
                        Flow::Quit => break,
                    }
                }
                update = self.client.next_event() => {
                    match update {
                        Some(update) if update.changed_state() => self.draw(&mut out).await?,
                        Some(_) => {}
                        None => break,
                    }
                }
            }
        }

        self.client.unmount();
        Ok(())
    }

    async fn draw<W: AsyncWrite + Unpin>(&self, out: &mut W) -> Result<()> {
        let page = self.render()?;
        out.write_all(b"\n").await?;
        out.write_all(page.as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }
}
