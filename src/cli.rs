//! Main `objsens` binary command line arguments options.
//!
//! This module declares functions to build the `clap` command line
//! arguments parser, so that it can be used from other places than the
//! main binary, such as integration tests.

use clap::{Arg, ArgAction, Command};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

fn arg_debug() -> Arg {
    Arg::new("debug")
        .short('d')
        .long("debug")
        .action(ArgAction::SetTrue)
        .help("Activate debug mode")
}

fn arg_verbose() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Activate verbose mode")
}

fn arg_ecslog() -> Arg {
    Arg::new("ecslog")
        .short('e')
        .long("ecslog")
        .action(ArgAction::SetTrue)
        .help("Output logs in ECS format")
}

fn arg_input() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .action(ArgAction::Set)
        .required(true)
        .help("Input program document (json)")
}

fn arg_class() -> Arg {
    Arg::new("class")
        .short('c')
        .long("class")
        .action(ArgAction::Append)
        .required(true)
        .help("Name of a class to specialize (repeatable)")
}

fn arg_output() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .action(ArgAction::Set)
        .help("Output report file (defaults to stdout)")
}

fn arg_dot() -> Arg {
    Arg::new("dot")
        .long("dot")
        .action(ArgAction::Set)
        .help("Output dot file of the resulting hierarchy")
}

#[must_use]
pub fn specialize() -> Command {
    Command::new(NAME)
        .bin_name(NAME)
        .version(VERSION)
        .author(AUTHORS)
        .about(DESCRIPTION)
        .arg(arg_debug())
        .arg(arg_verbose())
        .arg(arg_ecslog())
        .arg(arg_input())
        .arg(arg_class())
        .arg(arg_output())
        .arg(arg_dot())
}
