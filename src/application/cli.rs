use std::io;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;

use crate::config::Config;
use crate::config::ConfigKey;
use crate::domain::models::PersonaId;
use crate::domain::models::SpeechInputName;
use crate::infrastructure::personas::PersonaRegistry;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn print_personas_list() {
    let personas = PersonaRegistry::list()
        .iter()
        .map(|persona| {
            return format!(
                "- {} ({}) - {}",
                persona.name,
                persona.id,
                persona.description
            );
        })
        .collect::<Vec<String>>();

    println!("{}", personas.join("\n"));
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );

    return Command::new("reverie")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(subcommand_completions())
        .subcommand(Command::new("personas").about("List all selectable personas."))
        .arg(
            Arg::new(ConfigKey::Persona.to_string())
                .short('p')
                .long(ConfigKey::Persona.to_string())
                .env("REVERIE_PERSONA")
                .num_args(1)
                .help("The persona to start the session with. [default: samantha]")
                .value_parser(PossibleValuesParser::new(PersonaId::VARIANTS)),
        )
        .arg(
            Arg::new(ConfigKey::SpeechInput.to_string())
                .short('s')
                .long(ConfigKey::SpeechInput.to_string())
                .env("REVERIE_SPEECH_INPUT")
                .num_args(1)
                .help("The voice capture source to use. [default: none]")
                .value_parser(PossibleValuesParser::new(SpeechInputName::VARIANTS)),
        )
        .arg(
            Arg::new(ConfigKey::SpeechTranscript.to_string())
                .long(ConfigKey::SpeechTranscript.to_string())
                .env("REVERIE_SPEECH_TRANSCRIPT")
                .num_args(1)
                .help("Transcript delivered by the scripted voice capture source."),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("REVERIE_USERNAME")
                .num_args(1)
                .help("Display name used for your side of the conversation. [default: user]"),
        );
}

fn load_config(matches: &clap::ArgMatches) {
    let defaults = [
        (ConfigKey::Persona, "samantha"),
        (ConfigKey::SpeechInput, "none"),
        (ConfigKey::SpeechTranscript, ""),
        (ConfigKey::Username, "user"),
    ];

    for (key, default) in defaults {
        let key_str = key.to_string();
        let value = matches
            .get_one::<String>(&key_str)
            .map(|e| return e.to_string())
            .unwrap_or_else(|| return default.to_string());

        Config::set(key, &value);
    }
}

/// Parses the CLI, loading the global config. Returns false when a
/// subcommand handled everything and the UI should not start.
pub fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }

            return Ok(false);
        }
        Some(("personas", _)) => {
            print_personas_list();
            return Ok(false);
        }
        _ => {
            load_config(&matches);
        }
    }

    return Ok(true);
}
