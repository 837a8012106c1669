//! Interactive shell: a line-oriented event loop around [`UserAdmin`].
//!
//! Each input line is parsed into a [`ShellCommand`] and dispatched to the
//! controller. After every action the shell prints the table patches and
//! the banner, if any. Patches follow the session format: short change
//! lines on a terminal, fragment operations for HTML, a JSON array for JSON.

pub mod command;

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::app::confirm::is_affirmative;
use crate::app::{AlwaysConfirm, Confirm, Outcome, UserAdmin};
use crate::constants::APP_NAME;
use crate::view::html::HtmlRenderer;
use crate::view::{ViewFormat, ViewRenderer};

pub use command::{ShellCommand, ShellError};

/// Reads commands from `input` and writes everything to `output`.
///
/// Delete confirmations are read from the same input, so a scripted
/// session can answer them inline.
pub struct Shell<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
    format: ViewFormat,
    confirm_deletes: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, format: ViewFormat, confirm_deletes: bool) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            format,
            confirm_deletes,
        }
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    /// Run until `quit` or end of input.
    pub async fn run(&self, admin: &mut UserAdmin) -> io::Result<()> {
        self.write_line(&format!(
            "{} {}",
            APP_NAME.bold(),
            "· type `help` for commands".dimmed()
        ))?;
        self.after_action(admin)?;

        loop {
            self.write(&format!("{} ", ">".cyan().bold()))?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let command = match ShellCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    self.write_line(&format!("  {} {e}", "✖".red().bold()))?;
                    continue;
                }
            };

            if command == ShellCommand::Quit {
                break;
            }
            self.dispatch(command, admin).await?;
        }

        Ok(())
    }

    async fn dispatch(&self, command: ShellCommand, admin: &mut UserAdmin) -> io::Result<()> {
        match command {
            ShellCommand::Refresh => {
                admin.load().await;
                self.after_action(admin)
            }
            ShellCommand::Show => self.write(&self.format.render(&admin.page())),
            ShellCommand::Html => self.write(&HtmlRenderer.render(&admin.page())),
            ShellCommand::Add => {
                admin.open_create();
                self.show_dialog(admin)
            }
            ShellCommand::Edit(id) => {
                if admin.open_edit(id) {
                    self.show_dialog(admin)
                } else {
                    self.write_line(&format!("  {} No user with id {id}.", "✖".red().bold()))
                }
            }
            ShellCommand::Set(field, value) => {
                if admin.set_field(field, value) {
                    Ok(())
                } else {
                    self.write_line(&format!(
                        "  {} No dialog open. Use `add` or `edit <id>` first.",
                        "✖".red().bold()
                    ))
                }
            }
            ShellCommand::Save => {
                if admin.submit().await == Outcome::Invalid && !admin.dialog().is_open() {
                    self.write_line(&format!("  {} Nothing to save.", "✖".red().bold()))?;
                }
                self.after_action(admin)
            }
            ShellCommand::Cancel => {
                admin.close_dialog();
                Ok(())
            }
            ShellCommand::Delete(id) => {
                let outcome = if self.confirm_deletes {
                    admin.delete(id, self).await
                } else {
                    admin.delete(id, &AlwaysConfirm).await
                };
                if outcome == Outcome::Declined {
                    self.write_line(&format!("  {}", "Cancelled.".dimmed()))?;
                }
                self.after_action(admin)
            }
            ShellCommand::Help => self.write(&ShellCommand::help()),
            ShellCommand::Quit => Ok(()),
        }
    }

    /// Print the table patches, in the session's format, and the banner.
    fn after_action(&self, admin: &mut UserAdmin) -> io::Result<()> {
        let patches = admin.render();
        if !patches.is_empty() {
            match self.format {
                ViewFormat::Terminal => {
                    for patch in &patches {
                        self.write_line(&format!("  {}", patch.to_string().dimmed()))?;
                    }
                }
                ViewFormat::Html => self.write(&HtmlRenderer.render_patches(&patches))?,
                ViewFormat::Json => {
                    let json = serde_json::to_string(&patches).map_err(io::Error::other)?;
                    self.write_line(&json)?;
                }
            }
        }
        if let Some(banner) = admin.banner() {
            self.write_line(&format!("  {} {}", "✖".red().bold(), banner.red()))?;
        }
        Ok(())
    }

    fn show_dialog(&self, admin: &UserAdmin) -> io::Result<()> {
        let page = admin.page();
        let Some(dialog) = page.dialog else {
            return Ok(());
        };
        self.write_line(&format!(" {} {}", "▸".cyan().bold(), dialog.title.bold()))?;
        for field in &dialog.fields {
            self.write_line(&format!(
                "   {} {}",
                format!("{}:", field.name).cyan(),
                field.value
            ))?;
        }
        self.write_line(&format!(
            "   {}",
            format!("set <field> <value>, then `save` ({}) or `cancel`", dialog.submit_label)
                .dimmed()
        ))
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.borrow_mut().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }

    fn write(&self, text: &str) -> io::Result<()> {
        let mut output = self.output.borrow_mut();
        output.write_all(text.as_bytes())?;
        output.flush()
    }

    fn write_line(&self, text: &str) -> io::Result<()> {
        self.write(&format!("{text}\n"))
    }
}

impl<R: BufRead, W: Write> Confirm for Shell<R, W> {
    fn confirm(&self, prompt: &str) -> bool {
        if self
            .write(&format!("  {} {} [y/N] ", "?".yellow().bold(), prompt))
            .is_err()
        {
            return false;
        }
        match self.read_line() {
            Ok(Some(answer)) => is_affirmative(&answer),
            _ => false,
        }
    }
}
