use std::io::Write;

use anyhow::{Context, Result};
use log::warn;

use crate::{
    api::{self, Operation},
    config::{Configuration, ADDR_VAR, KEY_VAR},
    resource::Resource,
};

use self::flags::Parsed;

pub mod flags;

pub const EXIT_OK: u8 = 0;
pub const EXIT_USAGE: u8 = 1;

const SUBCOMMAND_REQUIRED: &str =
    "HELP: 'list', 'get', 'add', 'update' or 'delete' subcommand is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Get,
    Add,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::List,
        Action::Get,
        Action::Add,
        Action::Update,
        Action::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Get => "get",
            Action::Add => "add",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }

    fn with_record<R>(self, record: R) -> Operation<R> {
        match self {
            Action::List => Operation::List,
            Action::Get => Operation::Get(record),
            Action::Add => Operation::Add(record),
            Action::Update => Operation::Update(record),
            Action::Delete => Operation::Delete(record),
        }
    }
}

/// Runs one invocation of `program` against `cfg`. `args` excludes the
/// program name.
///
/// Help text and the response body go to `out`. Usage problems are reported
/// through the returned exit status; transport failures come back as errors.
pub async fn run<R: Resource>(
    program: &str,
    cfg: &Configuration,
    args: &[String],
    out: &mut impl Write,
) -> Result<u8> {
    let Some((first, rest)) = args.split_first() else {
        writeln!(out, "{SUBCOMMAND_REQUIRED}")?;
        return Ok(EXIT_USAGE);
    };

    if first == "-h" || first == "--help" {
        write!(out, "{}", usage::<R>(program))?;
        return Ok(EXIT_OK);
    }

    let Some(action) = Action::from_name(first) else {
        writeln!(out, "{SUBCOMMAND_REQUIRED}")?;
        return Ok(EXIT_USAGE);
    };

    let operation = if action == Action::List {
        if !rest.is_empty() {
            warn!("'list' command does not accept any arguments");
        }
        Operation::List
    } else {
        match flags::parse::<R>(program, action, rest) {
            Parsed::Values(values) => action.with_record(R::from_flags(&values)),
            Parsed::Exit(code) => return Ok(code),
        }
    };

    let request = api::build_request(cfg, &operation)?;
    let client = api::new_client()?;
    let body = api::send(&client, request).await?;

    out.write_all(&body)
        .and_then(|_| out.flush())
        .context("failed writing response body")?;

    Ok(EXIT_OK)
}

pub fn usage<R: Resource>(program: &str) -> String {
    let mut text = format!(
        "HELP:\n    Warning: Make sure to set {ADDR_VAR} and {KEY_VAR}.\n    \
         CLI supports one of the following commands: list, get, add, update, delete\n\n"
    );

    for action in Action::ALL {
        text.push_str(&format!("    {program} {}", action.name()));
        for spec in flags::flag_specs::<R>(action) {
            let flag = format!("-{} <string>", spec.flag.name);
            if spec.required {
                text.push_str(&format!(" {flag}"));
            } else {
                text.push_str(&format!(" [{flag}]"));
            }
        }
        text.push('\n');
    }

    text
}
