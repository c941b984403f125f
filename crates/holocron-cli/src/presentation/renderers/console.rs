use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, StatusLevel};

pub struct ConsoleRenderer {
    json_mode: bool,
    json_lines: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            json_lines: false,
            color: std::io::stdout().is_terminal(),
        }
    }

    /// One compact JSON document per line, for streams of results
    pub fn json_lines(mut self) -> Self {
        self.json_lines = true;
        self
    }

    pub fn is_json(&self) -> bool {
        self.json_mode
    }

    fn badge_line(&self, icon: &str, label: &str, level: StatusLevel) -> String {
        if !self.color {
            return format!("{} {}", icon, label);
        }
        match level {
            StatusLevel::Success => format!("{} {}", icon.green(), label.bold()),
            StatusLevel::Info => format!("{} {}", icon.cyan(), label.bold()),
            StatusLevel::Warning => format!("{} {}", icon.yellow(), label.bold()),
            StatusLevel::Error => format!("{} {}", icon.red(), label.bold()),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            if self.json_lines {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{}", self.badge_line(badge.icon(), &badge.label, badge.level));
            println!();
        }

        print!("{}", result.content);

        if !result.suggestions.is_empty() {
            if self.color {
                println!("\n{}", "Tips:".yellow().bold());
            } else {
                println!("\nTips:");
            }
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if self.color {
                        print!(": {}", cmd.cyan());
                    } else {
                        print!(": {}", cmd);
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}
