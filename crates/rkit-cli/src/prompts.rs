//! Interactive prompts for options not supplied on the command line.
//!
//! Compiled only with the `interactive` feature (on by default). The prompt
//! order matches the positional argument order, so a user who answers every
//! prompt and a user who types every positional end up with the same
//! OptionSet.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use rkit_core::domain::{DataFetching, ProjectName, StateManagement, UiLibrary};

use crate::error::{CliError, CliResult};

fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn interact_err(e: dialoguer::Error) -> CliError {
    match e {
        dialoguer::Error::IO(io) => {
            if io.kind() == std::io::ErrorKind::Interrupted {
                CliError::Cancelled
            } else {
                CliError::IoError {
                    message: "prompt failed".into(),
                    source: io,
                }
            }
        }
    }
}

/// Ask for a project name until a valid one is entered.
pub fn project_name() -> CliResult<String> {
    let name: String = Input::with_theme(&theme())
        .with_prompt("Project name")
        .validate_with(|input: &String| match ProjectName::new(input.clone()) {
            Ok(_) => Ok(()),
            Err(e) => Err(e.to_string()),
        })
        .interact_text()
        .map_err(interact_err)?;
    Ok(name)
}

pub fn ui_library() -> CliResult<UiLibrary> {
    let choices = [UiLibrary::Mui, UiLibrary::Antd, UiLibrary::None];
    let index = Select::with_theme(&theme())
        .with_prompt("UI library")
        .items(&choices.map(|c| c.as_str()))
        .default(0)
        .interact()
        .map_err(interact_err)?;
    Ok(choices[index])
}

pub fn router() -> CliResult<bool> {
    Confirm::with_theme(&theme())
        .with_prompt("Include react-router?")
        .default(true)
        .interact()
        .map_err(interact_err)
}

pub fn state_management() -> CliResult<StateManagement> {
    let choices = [
        StateManagement::Redux,
        StateManagement::Jotai,
        StateManagement::None,
    ];
    let index = Select::with_theme(&theme())
        .with_prompt("State management")
        .items(&choices.map(|c| c.as_str()))
        .default(2)
        .interact()
        .map_err(interact_err)?;
    Ok(choices[index])
}

pub fn data_fetching() -> CliResult<DataFetching> {
    let choices = [
        DataFetching::ReactQuery,
        DataFetching::Swr,
        DataFetching::None,
    ];
    let index = Select::with_theme(&theme())
        .with_prompt("Data fetching")
        .items(&choices.map(|c| c.as_str()))
        .default(2)
        .interact()
        .map_err(interact_err)?;
    Ok(choices[index])
}

pub fn storybook() -> CliResult<bool> {
    Confirm::with_theme(&theme())
        .with_prompt("Include Storybook?")
        .default(false)
        .interact()
        .map_err(interact_err)
}

/// Final go/no-go confirmation.
pub fn confirm_generation() -> CliResult<bool> {
    Confirm::with_theme(&theme())
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(interact_err)
}
