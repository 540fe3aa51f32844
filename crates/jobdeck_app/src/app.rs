use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use gateway_logging::gateway_warn;
use jobdeck_core::{update, AppState, Msg};
use jobdeck_gateway::{ApiSettings, GatewayError, GatewayHandle};

use crate::catalog;
use crate::effects::EffectRunner;
use crate::render;

const TOKEN_ENV: &str = "JOBDECK_API_TOKEN";
const BASE_URL_ENV: &str = "JOBDECK_API_URL";

/// Everything the main loop reacts to: core messages plus a quit request
/// from the input reader.
pub enum AppEvent {
    Core(Msg),
    Quit,
}

pub fn run() -> Result<(), GatewayError> {
    gateway_logging::initialize(log::LevelFilter::Info);

    let token = std::env::var(TOKEN_ENV).unwrap_or_default();
    if token.is_empty() {
        gateway_warn!("{TOKEN_ENV} is not set; the server will reject every fetch");
    }

    let settings = match std::env::var(BASE_URL_ENV) {
        Ok(base) => ApiSettings::with_base_url(&base)?,
        Err(_) => ApiSettings::default(),
    };

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let handle = GatewayHandle::new(settings, token)?;
    let runner = EffectRunner::new(handle, event_tx.clone());

    spawn_input_reader(event_tx.clone());
    println!("{}", render::help_text());

    let mut state = AppState::new();
    let _ = event_tx.send(AppEvent::Core(Msg::Started));

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Quit => break,
            AppEvent::Core(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    render::print_board(&state.view());
                }
            }
        }
    }
    Ok(())
}

fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(Command::Quit) => {
                    let _ = tx.send(AppEvent::Quit);
                    break;
                }
                Ok(Command::Help) => println!("{}", render::help_text()),
                Ok(command) => {
                    for msg in messages_for(command) {
                        if tx.send(AppEvent::Core(msg)).is_err() {
                            return;
                        }
                    }
                }
                Err(reason) => eprintln!("{reason}"),
            }
        }
    });
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Find(String),
    ToggleType(String),
    Salary(String),
    RetryProfile,
    Refresh,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "find" => Ok(Command::Find(rest.to_string())),
        "type" => {
            let id = rest.to_ascii_uppercase();
            if catalog::is_employment_type(&id) {
                Ok(Command::ToggleType(id))
            } else {
                Err(format!("unknown employment type '{rest}' (see `help`)"))
            }
        }
        "salary" => {
            if catalog::is_salary_range(rest) {
                Ok(Command::Salary(rest.to_string()))
            } else {
                Err(format!("unknown salary range '{rest}' (see `help`)"))
            }
        }
        "retry" => Ok(Command::RetryProfile),
        "refresh" => Ok(Command::Refresh),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}' (see `help`)")),
    }
}

fn messages_for(command: Command) -> Vec<Msg> {
    match command {
        Command::Find(text) => vec![Msg::SearchInputChanged(text), Msg::SearchSubmitted],
        Command::ToggleType(id) => vec![Msg::EmploymentTypeToggled(id)],
        Command::Salary(id) => vec![Msg::SalaryRangeSelected(id)],
        Command::RetryProfile => vec![Msg::ProfileRetryClicked],
        Command::Refresh => vec![Msg::SearchSubmitted],
        Command::Help | Command::Quit => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{messages_for, parse_command, Command};
    use jobdeck_core::Msg;

    #[test]
    fn parses_known_commands() {
        assert_eq!(
            parse_command("find rust engineer"),
            Ok(Command::Find("rust engineer".to_string()))
        );
        assert_eq!(
            parse_command("type fulltime"),
            Ok(Command::ToggleType("FULLTIME".to_string()))
        );
        assert_eq!(
            parse_command("salary 1000000"),
            Ok(Command::Salary("1000000".to_string()))
        );
        assert_eq!(parse_command("retry"), Ok(Command::RetryProfile));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_unknown_ids_and_verbs() {
        assert!(parse_command("type manager").is_err());
        assert!(parse_command("salary 9").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn find_stages_text_then_submits() {
        let msgs = messages_for(Command::Find("qa".to_string()));
        assert_eq!(
            msgs,
            vec![Msg::SearchInputChanged("qa".to_string()), Msg::SearchSubmitted]
        );
    }
}
