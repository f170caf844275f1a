use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::validator::Validation;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::controller::ChatController;
use super::ui;
use super::view::{Transcript, terminal_width};
use crate::ui::Spinner;

/// Interactive terminal front end for a [`ChatController`].
///
/// Shows the name prompt until it is satisfied, then runs the message loop.
pub struct ChatRepl {
    controller: ChatController,
    transcript: Transcript,
}

impl ChatRepl {
    pub const fn new(controller: ChatController) -> Self {
        Self {
            controller,
            transcript: Transcript::new(),
        }
    }

    fn render_config() -> RenderConfig<'static> {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));
        render_config
    }

    pub async fn run(&mut self) -> Result<()> {
        let render_config = Self::render_config();

        if !self.ask_name(render_config)? {
            println!();
            return Ok(());
        }

        ui::print_header(self.controller.session());

        loop {
            let strings = self.controller.session().strings();
            let help = format!(
                "Enter: {} · /lang: {} · /help · Ctrl+C",
                strings.send_label, strings.toggle_label
            );
            let input = Text::new("")
                .with_placeholder(strings.input_placeholder)
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter::new(
                    self.controller.session().language(),
                ))
                .with_formatter(&|_: &str| String::new())
                .with_help_message(&help)
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.send_and_print(text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye(self.controller.session());
        Ok(())
    }

    /// Blocks until a non-blank name is given. Returns `false` if the user
    /// cancelled instead.
    fn ask_name(&mut self, render_config: RenderConfig<'_>) -> Result<bool> {
        while self.controller.session().is_name_gate_open() {
            let strings = self.controller.session().strings();
            ui::print_name_prompt(self.controller.session());

            let required = strings.name_required;
            let answer = Text::new("")
                .with_placeholder(strings.name_placeholder)
                .with_render_config(render_config)
                .with_help_message(&format!("Enter: {}", strings.start_chatting))
                .with_validator(move |name: &str| {
                    Ok(if name.trim().is_empty() {
                        Validation::Invalid(required.into())
                    } else {
                        Validation::Valid
                    })
                })
                .prompt();

            match answer {
                Ok(name) => {
                    self.controller.submit_name(&name);
                }
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => return Ok(false),
                Err(e) => return Err(e.into()),
            }
        }
        Ok(true)
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Help => {
                ui::print_help(self.controller.session());
                true
            }
            SlashCommand::Lang => {
                self.controller.toggle_language();
                ui::print_language_switched(self.controller.session());
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                let session = self.controller.session();
                ui::print_error(session, &session.strings().unknown_command_for(&cmd));
                true
            }
        }
    }

    async fn send_and_print(&mut self, text: String) {
        let width = terminal_width();
        self.controller.set_input(text);

        let Some(pending) = self.controller.begin_send() else {
            return;
        };
        // The prompt hides its echo; the user line is printed from the log.
        self.transcript
            .render_new(self.controller.session().messages(), width);

        let spinner = Spinner::new(self.controller.session().strings().thinking);
        self.controller.finish_send(pending).await;
        spinner.stop();

        self.transcript
            .render_new(self.controller.session().messages(), width);
    }
}
