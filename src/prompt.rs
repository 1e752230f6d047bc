/*!
 * Interactive prompts for treescribe
 *
 * All user interaction goes through the [`Prompter`] trait so the command
 * flow can be driven by a scripted prompter in tests. `Ok(None)` means the
 * user dismissed the prompt; callers abort the whole command silently.
 */

use std::io;
use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::config::ContentType;
use crate::error::Result;

pub trait Prompter {
    /// Choose one folder among several workspace roots
    fn pick_folder(&self, roots: &[PathBuf]) -> Result<Option<PathBuf>>;

    /// Folders-and-files or folders-only
    fn pick_content_type(&self) -> Result<Option<ContentType>>;

    /// Output file name, pre-filled with `default`; empty input re-prompts
    fn ask_output_name(&self, default: &str) -> Result<Option<String>>;

    /// Yes/no follow-up question
    fn confirm(&self, message: &str) -> Result<Option<bool>>;
}

/// Terminal prompter backed by dialoguer
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn pick_folder(&self, roots: &[PathBuf]) -> Result<Option<PathBuf>> {
        let labels: Vec<String> = roots.iter().map(|root| root.display().to_string()).collect();
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select the root folder for the structure")
            .items(&labels)
            .default(0)
            .interact_opt();
        Ok(dismissable(picked)?.map(|index| roots[index].clone()))
    }

    fn pick_content_type(&self) -> Result<Option<ContentType>> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What should the structure include?")
            .items(&["Folders and files", "Folders only"])
            .default(0)
            .interact_opt();
        Ok(dismissable(choice)?.map(|index| match index {
            0 => ContentType::All,
            _ => ContentType::Folders,
        }))
    }

    fn ask_output_name(&self, default: &str) -> Result<Option<String>> {
        let name = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Name for the output file")
            .with_initial_text(default.to_string())
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("The name cannot be empty.")
                } else {
                    Ok(())
                }
            })
            .interact_text();
        match name {
            Ok(name) => Ok(Some(name)),
            Err(err) => interrupt_as_cancel(err),
        }
    }

    fn confirm(&self, message: &str) -> Result<Option<bool>> {
        // Without a terminal there is nobody to answer; decline quietly.
        if !console::user_attended() {
            return Ok(Some(false));
        }
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact_opt();
        dismissable(answer)
    }
}

/// Esc and `q` already surface as `Ok(None)`; fold Ctrl-C in as well.
fn dismissable<T>(result: dialoguer::Result<Option<T>>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => interrupt_as_cancel(err),
    }
}

fn interrupt_as_cancel<T>(err: dialoguer::Error) -> Result<Option<T>> {
    match err {
        dialoguer::Error::IO(ref io_err) if io_err.kind() == io::ErrorKind::Interrupted => Ok(None),
        other => Err(other.into()),
    }
}
