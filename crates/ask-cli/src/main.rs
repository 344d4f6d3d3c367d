mod terminal;
mod wizard;

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ask_spec::{
    AnswerSet, AskError, Interaction, Profile, Prompt, ScriptedInteraction, ValidationOptions,
    document_schema, load_pairs_from_answers, load_prompts, parse_load_pairs, run_prompts,
};
use clap::{Parser, Subcommand, ValueEnum};
use terminal::TerminalInteraction;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wizard::{Verbosity, WizardPresenter};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const CONFIG_ENV: &str = "ASK_CONFIG";
const PROFILE_ENV: &str = "ASK_PROFILE";
const DEFAULT_CONFIG: &str = "config.yaml";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "YAML-driven questionnaire CLI",
    long_about = "Validates question definitions from a YAML document, asks them on the terminal, and prints the collected answers as JSON"
)]
struct Cli {
    /// Show verbose output (debug logs, issue codes, prompt messages).
    #[arg(long, global = true, alias = "debug")]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    /// `select` and `confirm` questions; answers printed as a list.
    SelectConfirm,
    /// `select` and `text` questions; answers printed as an object.
    SelectText,
}

impl ProfileArg {
    fn profile(self) -> Profile {
        match self {
            ProfileArg::SelectConfirm => Profile::SELECT_CONFIRM,
            ProfileArg::SelectText => Profile::SELECT_TEXT,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Ask every question in the configuration and print the answers.
    Run {
        /// Question definitions (defaults to ASK_CONFIG or config.yaml).
        #[arg(value_name = "CONFIG")]
        config: Option<PathBuf>,
        /// Allowed question types and answer shape (defaults to ASK_PROFILE or select-confirm).
        #[arg(long, value_enum)]
        profile: Option<ProfileArg>,
        /// Answer from a YAML/JSON mapping of question name to answer instead of the terminal.
        #[arg(long, value_name = "ANSWERS")]
        answers: Option<PathBuf>,
        /// Reject configurations that repeat a question name.
        #[arg(long)]
        strict_names: bool,
        /// Use the plain prompt theme.
        #[arg(long)]
        plain: bool,
        /// Also parse the UWLastPaare answer into load pairs.
        #[arg(long)]
        load_pairs: bool,
    },
    /// Validate the configuration without asking anything.
    Check {
        #[arg(value_name = "CONFIG")]
        config: Option<PathBuf>,
        #[arg(long, value_enum)]
        profile: Option<ProfileArg>,
        #[arg(long)]
        strict_names: bool,
    },
    /// Print the JSON Schema of the configuration document.
    Schema,
    /// Parse a `KEY=VALUE,...` load-pair string and print the records.
    LoadPairs {
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let presenter = WizardPresenter::new(Verbosity::from_verbose(cli.verbose));

    let result = match cli.command {
        Command::Run {
            config,
            profile,
            answers,
            strict_names,
            plain,
            load_pairs,
        } => resolve_profile(profile).and_then(|profile| {
            run_questionnaire(
                &presenter,
                RunOptions {
                    config: resolve_config_path(config),
                    profile,
                    answers,
                    strict_names,
                    colorful: !plain,
                    load_pairs,
                },
            )
        }),
        Command::Check {
            config,
            profile,
            strict_names,
        } => resolve_profile(profile).and_then(|profile| {
            run_check(
                &presenter,
                resolve_config_path(config),
                profile,
                strict_names,
            )
        }),
        Command::Schema => run_schema(&presenter),
        Command::LoadPairs { text } => run_load_pairs(&presenter, &text),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&presenter, err),
    }
}

fn fail(presenter: &WizardPresenter, err: Box<dyn std::error::Error>) -> ExitCode {
    presenter.show_fatal(&err);
    ExitCode::FAILURE
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

struct RunOptions {
    config: PathBuf,
    profile: Profile,
    answers: Option<PathBuf>,
    strict_names: bool,
    colorful: bool,
    load_pairs: bool,
}

fn run_questionnaire(presenter: &WizardPresenter, options: RunOptions) -> CliResult<()> {
    let validation = ValidationOptions {
        reject_duplicate_names: options.strict_names,
    };
    let prompts = prepare_prompts(presenter, &options.config, &options.profile, &validation)?;

    let answers = match &options.answers {
        Some(path) => {
            debug!(path = %path.display(), "answering from script");
            let mut script = ScriptedInteraction::load(path)?;
            ask_all(prompts, &mut script)?
        }
        None => {
            let mut terminal = TerminalInteraction::new(options.colorful);
            ask_all(prompts, &mut terminal)?
        }
    };

    let pairs = if options.load_pairs {
        Some(load_pairs_from_answers(&answers)?)
    } else {
        None
    };
    presenter.show_completion(&options.profile, &answers, pairs.as_deref())?;
    Ok(())
}

fn ask_all<I: Interaction>(
    prompts: Vec<Prompt>,
    interaction: &mut I,
) -> CliResult<AnswerSet> {
    run_prompts(prompts, interaction).map_err(|err| Box::new(err) as Box<dyn std::error::Error>)
}

fn run_check(
    presenter: &WizardPresenter,
    config: PathBuf,
    profile: Profile,
    strict_names: bool,
) -> CliResult<()> {
    let validation = ValidationOptions {
        reject_duplicate_names: strict_names,
    };
    let prompts = prepare_prompts(presenter, &config, &profile, &validation)?;
    presenter.show_summary(&profile, &prompts);
    Ok(())
}

fn prepare_prompts(
    presenter: &WizardPresenter,
    config: &Path,
    profile: &Profile,
    validation: &ValidationOptions,
) -> CliResult<Vec<Prompt>> {
    debug!(config = %config.display(), profile = profile.name(), "loading questions");
    match load_prompts(config, profile, validation) {
        Ok(prompts) => Ok(prompts),
        Err(AskError::Invalid(report)) => {
            presenter.show_warnings(&report);
            Err("One or more questions are invalid. Fix the configuration and try again.".into())
        }
        Err(err) => Err(err.into()),
    }
}

fn run_schema(presenter: &WizardPresenter) -> CliResult<()> {
    presenter.show_value(&document_schema())?;
    Ok(())
}

fn run_load_pairs(presenter: &WizardPresenter, text: &str) -> CliResult<()> {
    let pairs = parse_load_pairs(text)?;
    presenter.show_value(&serde_json::to_value(pairs)?)?;
    Ok(())
}

fn resolve_config_path(config: Option<PathBuf>) -> PathBuf {
    config
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from))
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG))
}

fn resolve_profile(profile: Option<ProfileArg>) -> CliResult<Profile> {
    if let Some(profile) = profile {
        return Ok(profile.profile());
    }
    match env::var(PROFILE_ENV) {
        Ok(name) if !name.trim().is_empty() => parse_profile_name(name.trim()),
        _ => Ok(Profile::default()),
    }
}

fn parse_profile_name(name: &str) -> CliResult<Profile> {
    Profile::from_name(name).ok_or_else(|| {
        let known = Profile::all()
            .iter()
            .map(Profile::name)
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown profile '{}' (expected one of: {})", name, known).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_path_wins() {
        let path = resolve_config_path(Some(PathBuf::from("questions.yaml")));
        assert_eq!(path, PathBuf::from("questions.yaml"));
    }

    #[test]
    fn explicit_profile_wins() {
        let profile = resolve_profile(Some(ProfileArg::SelectText)).unwrap();
        assert_eq!(profile, Profile::SELECT_TEXT);
    }

    #[test]
    fn profile_names_round_trip_through_clap_values() {
        for arg in ProfileArg::value_variants() {
            let name = arg.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(parse_profile_name(&name).unwrap(), arg.profile());
        }
    }

    #[test]
    fn unknown_profile_name_lists_known_profiles() {
        let err = parse_profile_name("everything").unwrap_err();
        assert!(err.to_string().contains("select-confirm, select-text"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
