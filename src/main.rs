use anyhow::Result;
use clap::Parser;

use mon_chat::cli::commands::chat;
use mon_chat::cli::{Args, Command};
use mon_chat::i18n::{Language, print_languages};
use mon_chat::{logger, output};

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file is optional.
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    output::init(output::OutputConfig::from_flags(args.no_color));
    logger::init()?;

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        None => {
            if let Some(ref lang) = args.lang {
                lang.parse::<Language>()?;
            }

            let options = chat::ChatOptions {
                lang: args.lang,
                model: args.model,
                endpoint: args.endpoint,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
