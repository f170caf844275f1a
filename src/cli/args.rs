use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mon")]
#[command(about = "Bilingual (English/Bengali) mental health support chat")]
#[command(version)]
pub struct Args {
    /// UI language to start in (en, bn)
    #[arg(short = 'l', long = "lang")]
    pub lang: Option<String>,

    /// Gemini model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Gemini API base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported UI languages
    Languages,
}
