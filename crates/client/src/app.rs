//! Interactive session loop.
use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use runtime::{RuntimeError, TabletopHandle};
use tabletop_core::{AddCharacterAction, Catalog, CatalogOracle};

use crate::command::{Command, HELP};
use crate::render;

/// Outcome of one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

pub struct ConsoleApp {
    handle: TabletopHandle,
    catalog: Arc<Catalog>,
}

impl ConsoleApp {
    pub fn new(handle: TabletopHandle, catalog: Arc<Catalog>) -> Self {
        Self { handle, catalog }
    }

    /// Read commands from stdin until `quit` or end of input.
    pub async fn run(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        println!("{}", render::snapshot(&self.handle.snapshot(), self.catalog.as_ref()));

        loop {
            print!("> ");
            std::io::stdout().flush().context("Failed to flush stdout")?;

            let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    println!("error: {err:#}");
                    continue;
                }
            };
            debug!(?command, "parsed command");

            match self.execute(command).await {
                Ok(Flow::Continue(output)) => println!("{output}"),
                Ok(Flow::Quit) => break,
                Err(err) => {
                    warn!("command failed: {err:#}");
                    println!("error: {err:#}");
                }
            }
        }

        info!("session loop finished");
        Ok(())
    }

    pub async fn execute(&self, command: Command) -> Result<Flow> {
        let output = match command {
            Command::Dispatch(action) => {
                self.handle.dispatch(action).await?;
                self.render_state()
            }
            Command::AddCharacter { key, level } => {
                let definition = self
                    .catalog
                    .character(&key)
                    .ok_or_else(|| RuntimeError::UnknownCharacter(key.clone()))?;
                let hit_points = definition
                    .hit_points_at(level)
                    .ok_or_else(|| anyhow!("{key} has no hit points listed for level {level}"))?;
                self.handle
                    .dispatch(AddCharacterAction::new(key, hit_points))
                    .await?;
                self.render_state()
            }
            Command::Draw(initiatives) => {
                let drawn = self.handle.draw_monster_ability_cards(initiatives).await?;
                let mut output = String::new();
                for key in &drawn.reshuffled {
                    output.push_str(&format!("{key}: deck reshuffled\n"));
                }
                output.push_str(&self.render_state());
                output
            }
            Command::DrawMonster(key) => {
                let drawn = self.handle.draw_monster_ability_card(key).await?;
                let mut output = String::new();
                if drawn.reshuffled {
                    output.push_str(&format!("{}: deck reshuffled\n", drawn.key));
                }
                output.push_str(&self.render_state());
                output
            }
            Command::Undo(count) => match self.handle.undo(count).await? {
                0 => "nothing to undo".to_string(),
                steps => format!("undid {steps}\n{}", self.render_state()),
            },
            Command::Redo(count) => match self.handle.redo(count).await? {
                0 => "nothing to redo".to_string(),
                steps => format!("redid {steps}\n{}", self.render_state()),
            },
            Command::State => self.render_state(),
            Command::History => render::history(&self.handle.history().await?),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Flow::Quit),
        };

        Ok(Flow::Continue(output))
    }

    fn render_state(&self) -> String {
        render::snapshot(&self.handle.snapshot(), self.catalog.as_ref())
    }
}
