//! Chat mode UI components.

use super::command::slash_commands;
use crate::session::Session;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(session: &Session) {
    let strings = session.strings();
    println!(
        "{} {}",
        Style::header(strings.title),
        Style::version(format!("v{VERSION}"))
    );
    if let Some(name) = session.display_name() {
        println!("{}", Style::value(strings.welcome_for(name)));
    }
    println!(
        "{}",
        Style::hint(format!("/lang → {}", strings.toggle_label))
    );
    println!();
}

pub fn print_name_prompt(session: &Session) {
    let strings = session.strings();
    println!("{}", Style::header(strings.name_prompt_title));
    println!("{}", Style::secondary(strings.name_prompt_description));
    println!();
}

pub fn print_language_switched(session: &Session) {
    println!(
        "{} {}",
        Style::success("✓"),
        session.strings().language_switched
    );
    println!();
}

pub fn print_goodbye(session: &Session) {
    println!("{}", Style::success(session.strings().goodbye));
}

pub fn print_help(session: &Session) {
    let strings = session.strings();
    println!("{}", Style::header(strings.help_title));
    for (command, description) in slash_commands(strings) {
        println!(
            "  {}    {}",
            Style::command(command),
            Style::secondary(description)
        );
    }
    println!("  {}", Style::hint(strings.help_escape));
    println!();
}

pub fn print_error(session: &Session, message: &str) {
    eprintln!("{} {message}", Style::error(session.strings().error_label));
    eprintln!();
}
