//! Localization table for the two supported UI languages.
//!
//! Every user-facing string, including the model prompt template and the
//! fallback apologies, is looked up here through [`Language::strings`].

use anyhow::Result;
use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Bengali,
}

impl Language {
    /// All supported languages, in toggle order.
    pub const ALL: [Self; 2] = [Self::English, Self::Bengali];

    /// The language tag (`en` / `bn`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Bengali => "bn",
        }
    }

    /// The English name of the language.
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Bengali => "Bengali",
        }
    }

    /// The other supported language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::English => Self::Bengali,
            Self::Bengali => Self::English,
        }
    }

    /// The localized strings for this language.
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::English => &STRINGS_EN,
            Self::Bengali => &STRINGS_BN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "bn" | "bengali" | "bangla" => Ok(Self::Bengali),
            _ => anyhow::bail!(
                "Invalid language: '{s}'\n\n\
                 Supported languages: en (English), bn (Bengali).\n\
                 Run 'mon languages' to see them."
            ),
        }
    }
}

/// UI strings and prompt templates for one language.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    /// Contains a `{name}` placeholder.
    pub welcome: &'static str,
    /// Label of the control that switches to the *other* language.
    pub toggle_label: &'static str,
    pub language_switched: &'static str,
    pub input_placeholder: &'static str,
    pub send_label: &'static str,
    pub name_prompt_title: &'static str,
    pub name_prompt_description: &'static str,
    pub name_placeholder: &'static str,
    pub name_required: &'static str,
    pub start_chatting: &'static str,
    pub thinking: &'static str,
    pub goodbye: &'static str,
    pub help_title: &'static str,
    pub help_show: &'static str,
    pub help_lang: &'static str,
    pub help_quit: &'static str,
    pub help_escape: &'static str,
    /// Contains a `{command}` placeholder.
    pub unknown_command: &'static str,
    pub error_label: &'static str,
    /// Contains a `{message}` placeholder for the raw user text.
    pub prompt_template: &'static str,
    /// Reply used when the model call fails.
    pub model_apology: &'static str,
    /// Reply used when the reply could not be produced at all.
    pub request_failed: &'static str,
}

impl Strings {
    #[allow(clippy::literal_string_with_formatting_args)]
    pub fn welcome_for(&self, name: &str) -> String {
        // {name} is a placeholder for string replacement, not a format argument
        self.welcome.replace("{name}", name)
    }

    #[allow(clippy::literal_string_with_formatting_args)]
    pub fn unknown_command_for(&self, command: &str) -> String {
        self.unknown_command.replace("{command}", command)
    }
}

pub static STRINGS_EN: Strings = Strings {
    title: "Mental Health Support Chat",
    welcome: "Welcome, {name}",
    toggle_label: "বাংলা",
    language_switched: "Language set to English",
    input_placeholder: "Type your message...",
    send_label: "Send",
    name_prompt_title: "Welcome to Mental Health Support Chat",
    name_prompt_description: "Please enter your name to begin chatting.",
    name_placeholder: "Your name",
    name_required: "Please enter your name.",
    start_chatting: "Start Chatting",
    thinking: "Thinking...",
    goodbye: "Take care. Goodbye!",
    help_title: "Available commands",
    help_show: "Show this help",
    help_lang: "Switch between English and Bengali",
    help_quit: "Leave the chat",
    help_escape: "Start a message with // to send text that begins with /",
    unknown_command: "Unknown command: /{command}",
    error_label: "Error:",
    prompt_template: "You are a compassionate mental health support assistant. \
         Respond to the following message with empathy and support: \"{message}\"",
    model_apology: "I apologize, but I'm having trouble responding right now. \
         How else can I support you?",
    request_failed: "Sorry, I couldn't process your request. Please try again.",
};

pub static STRINGS_BN: Strings = Strings {
    title: "মানসিক স্বাস্থ্য সহায়তা চ্যাট",
    welcome: "স্বাগতম, {name}",
    toggle_label: "English",
    language_switched: "ভাষা বাংলায় পরিবর্তন করা হয়েছে",
    input_placeholder: "আপনার বার্তা টাইপ করুন...",
    send_label: "পাঠান",
    name_prompt_title: "মানসিক স্বাস্থ্য সহায়তা চ্যাটে স্বাগতম",
    name_prompt_description: "চ্যাট শুরু করতে আপনার নাম লিখুন।",
    name_placeholder: "আপনার নাম",
    name_required: "অনুগ্রহ করে আপনার নাম লিখুন।",
    start_chatting: "চ্যাট শুরু করুন",
    thinking: "ভাবছি...",
    goodbye: "ভালো থাকবেন। বিদায়!",
    help_title: "উপলব্ধ কমান্ড",
    help_show: "এই সাহায্য দেখান",
    help_lang: "ইংরেজি ও বাংলার মধ্যে পরিবর্তন করুন",
    help_quit: "চ্যাট থেকে বের হন",
    help_escape: "/ দিয়ে শুরু হওয়া বার্তা পাঠাতে শুরুতে // লিখুন",
    unknown_command: "অজানা কমান্ড: /{command}",
    error_label: "ত্রুটি:",
    prompt_template: "আপনি একজন সহানুভূতিশীল মানসিক স্বাস্থ্য সহায়তা সহকারী। \
         নিম্নলিখিত বার্তার প্রতি সহানুভূতি ও সমর্থন সহ উত্তর দিন: \"{message}\"",
    model_apology: "আমি দুঃখিত, কিন্তু আমি এখন উত্তর দিতে সমস্যা হচ্ছে। \
         আমি আপনাকে কীভাবে সাহায্য করতে পারি?",
    request_failed: "দুঃখিত, আমি আপনার অনুরোধ প্রক্রিয়া করতে পারিনি। \
         অনুগ্রহ করে আবার চেষ্টা করুন।",
};

/// Prints all supported language tags to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for lang in Language::ALL {
        println!(
            "  {:3} {}",
            Style::code(lang.code()),
            Style::secondary(lang.name())
        );
    }
}
