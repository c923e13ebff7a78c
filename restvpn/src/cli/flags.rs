use std::collections::HashMap;

use clap::{Arg, ArgAction, Command};
use log::{debug, warn};

use super::{Action, EXIT_USAGE};
use crate::resource::{Flag, Resource, REMOTE_IP, REMOTE_PORT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub flag: Flag,
    pub required: bool,
}

impl FlagSpec {
    fn help_text(&self) -> String {
        if self.required {
            format!("{} (required)", self.flag.help)
        } else {
            self.flag.help.to_string()
        }
    }
}

/// Flags accepted by `action`, in the order they are listed in usage output.
pub fn flag_specs<R: Resource>(action: Action) -> Vec<FlagSpec> {
    let required = |flag: Flag| FlagSpec {
        flag,
        required: true,
    };
    let optional = |flag: Flag| FlagSpec {
        flag,
        required: false,
    };

    match action {
        Action::List => vec![],
        Action::Get => vec![required(R::IDENTITY)],
        Action::Delete => vec![required(R::IDENTITY), required(REMOTE_IP)],
        Action::Add => [
            required(R::IDENTITY),
            required(REMOTE_IP),
            required(REMOTE_PORT),
        ]
        .into_iter()
        .chain(R::OPTIONAL.iter().copied().map(optional))
        .collect(),
        Action::Update => [
            required(R::IDENTITY),
            required(REMOTE_IP),
            optional(REMOTE_PORT),
        ]
        .into_iter()
        .chain(R::OPTIONAL.iter().copied().map(optional))
        .collect(),
    }
}

/// Flag values of one invocation. Flags that were not given read as empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlagValues {
    values: HashMap<&'static str, String>,
}

impl FlagValues {
    pub fn get(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }
}

impl FromIterator<(&'static str, String)> for FlagValues {
    fn from_iter<I: IntoIterator<Item = (&'static str, String)>>(iter: I) -> Self {
        FlagValues {
            values: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    Values(FlagValues),
    /// Parsing ended the invocation (help, bad flags, missing required flags).
    Exit(u8),
}

pub fn parse<R: Resource>(program: &str, action: Action, args: &[String]) -> Parsed {
    let specs = flag_specs::<R>(action);
    let mut cmd = command(program, action, &specs);

    let (tokens, extra) = normalize(args);
    if !extra.is_empty() {
        warn!("ignoring unexpected arguments: {}", extra.join(" "));
    }

    let matches = match cmd.try_get_matches_from_mut(tokens) {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            return Parsed::Exit(u8::try_from(e.exit_code()).unwrap_or(EXIT_USAGE));
        }
    };

    let values: FlagValues = specs
        .iter()
        .filter_map(|spec| {
            matches
                .get_one::<String>(spec.flag.name)
                .map(|value| (spec.flag.name, value.clone()))
        })
        .collect();

    let missing: Vec<String> = specs
        .iter()
        .filter(|spec| spec.required && values.get(spec.flag.name).is_empty())
        .map(|spec| format!("-{}", spec.flag.name))
        .collect();

    if !missing.is_empty() {
        debug!("{} is missing {}", action.name(), missing.join(", "));
        eprintln!("missing required flags: {}", missing.join(", "));
        eprint!("{}", cmd.render_help());
        return Parsed::Exit(EXIT_USAGE);
    }

    Parsed::Values(values)
}

fn command(program: &str, action: Action, specs: &[FlagSpec]) -> Command {
    let cmd = Command::new(action.name())
        .bin_name(format!("{program} {}", action.name()))
        .no_binary_name(true)
        .disable_version_flag(true)
        .args_override_self(true);

    specs.iter().fold(cmd, |cmd, spec| {
        cmd.arg(
            Arg::new(spec.flag.name)
                .long(spec.flag.name)
                .value_name("string")
                .action(ArgAction::Set)
                .help(spec.help_text()),
        )
    })
}

/// Rewrites single-dash flags (`-name value`, `-name=value`) into the
/// `--name=value` form clap expects.
///
/// The token following a flag is always its value. Flag parsing stops at the
/// first non-flag token or at `--`; whatever follows is returned separately.
fn normalize(args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut tokens = Vec::new();
    let mut rest = args.iter();

    while let Some(arg) = rest.next() {
        if arg == "--" {
            break;
        }

        let Some(flag) = arg.strip_prefix('-').filter(|flag| !flag.is_empty()) else {
            return (tokens, std::iter::once(arg).chain(rest).cloned().collect());
        };
        let flag = flag.strip_prefix('-').unwrap_or(flag);

        match flag.split_once('=') {
            Some((name, value)) => tokens.push(format!("--{name}={value}")),
            None if flag == "h" || flag == "help" => tokens.push("--help".to_string()),
            None => match rest.next() {
                Some(value) => tokens.push(format!("--{flag}={value}")),
                None => tokens.push(format!("--{flag}")),
            },
        }
    }

    (tokens, rest.cloned().collect())
}
