use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use secrecy::SecretString;

use pwd_checker::Strength;
use pwd_checker::ui::{Controller, InputError, StrengthView};

mod logging;

#[derive(Parser)]
#[command(name = "pwd-check")]
#[command(version)]
#[command(about = "Check how strong a password is", long_about = None)]
struct Cli {
    #[arg(help = "Password to check; read from stdin when omitted")]
    password: Option<String>,

    #[arg(
        short,
        long,
        env = "PWD_CHECK_REVEAL",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Show the password instead of masking it"
    )]
    reveal: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let password = match cli.password {
        Some(password) => SecretString::from(password),
        None => read_stdin_password().context("Could not read a password from stdin")?,
    };

    let mut controller = Controller::new(password).with_reveal(cli.reveal);
    let shown = controller.display(controller.source());
    controller.check()?;

    println!("Password: {shown}");
    render(
        controller.view(),
        controller.last_result().map(|r| r.strength),
    );
    Ok(())
}

/// Reads one line from stdin, without its line terminator.
fn read_stdin_password() -> Result<SecretString, InputError> {
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(InputError::Closed);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']);
    Ok(SecretString::from(trimmed))
}

fn render(view: &StrengthView, strength: Option<Strength>) {
    let (value, max) = view.progress;
    let headline = match strength {
        Some(strength) => {
            let (r, g, b) = strength.rgb();
            view.headline.truecolor(r, g, b).bold()
        }
        None => view.headline.normal(),
    };

    println!("Strength: {headline}");
    println!(
        "[{}{}]",
        "#".repeat(value as usize),
        "-".repeat(max.saturating_sub(value) as usize)
    );
    println!("{}", view.details);
}
