use std::io::Write;
use std::path::PathBuf;

use kanal::AsyncSender;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio_util::sync::CancellationToken;
use verba_types::{AppEvent, Command};

pub const SHELL_HELP: &str = "\
Type any text to see suggestions.
  :show <word>      word details
  :add <word>       add to study list
  :rm <word>        remove from study list
  :toggle <word>    add or remove
  :list             show study list
  :wheel            every headword, * marks study list members
  :export [path]    write study list as TSV
  :copy             copy study list TSV to clipboard
  :import <path>    replace study list from TSV (asks first)
  :import! <path>   same, without asking
  :help             this text
  :quit             leave";

const REPLACE_WARNING: &str = "This will replace your current study list. Are you sure? [y/N] ";

/// Where user commands come from
pub enum InputSource {
    /// Fixed commands, then shut down
    Script(Vec<Command>),
    /// Read shell lines from stdin until EOF or `:quit`
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Command(Command),
    /// Import that still needs a yes from the user
    ConfirmImport(PathBuf),
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_shell_line(line: &str) -> ShellInput {
    let line = line.trim();
    if line.is_empty() {
        return ShellInput::Empty;
    }

    let Some(rest) = line.strip_prefix(':') else {
        return ShellInput::Command(Command::Search {
            query: line.to_string(),
            limit: None,
        });
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    let word = arg.to_string();

    let command = match name {
        "q" | "quit" | "exit" => return ShellInput::Quit,
        "h" | "help" => Command::Help,
        "show" | "s" if !arg.is_empty() => Command::Show(word),
        "add" | "a" if !arg.is_empty() => Command::Add(word),
        "rm" | "remove" if !arg.is_empty() => Command::Remove(word),
        "toggle" | "t" if !arg.is_empty() => Command::Toggle(word),
        "list" | "l" => Command::List,
        "wheel" | "w" => Command::Wheel,
        "export" => Command::Export {
            path: (!arg.is_empty()).then(|| PathBuf::from(arg)),
        },
        "copy" => Command::Copy,
        "import" if !arg.is_empty() => return ShellInput::ConfirmImport(PathBuf::from(arg)),
        "import!" if !arg.is_empty() => Command::Import {
            path: PathBuf::from(arg),
        },
        _ => return ShellInput::Unknown(line.to_string()),
    };

    ShellInput::Command(command)
}

/// Feeds the event loop, then asks it to shut down
pub async fn input_loop(
    source: InputSource,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    match source {
        InputSource::Script(commands) => {
            for command in commands {
                ui_to_app_tx.send(AppEvent::Command(command)).await?;
            }
        }
        InputSource::Interactive => {
            let lines = BufReader::new(tokio::io::stdin()).lines();
            read_shell(lines, &ui_to_app_tx, cancel).await?;
        }
    }

    ui_to_app_tx.send(AppEvent::Shutdown).await?;
    Ok(())
}

pub async fn read_shell<R>(
    mut lines: Lines<R>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => break,
        };
        let Some(line) = line else {
            tracing::debug!("Shell input closed");
            break;
        };

        match parse_shell_line(&line) {
            ShellInput::Command(command) => {
                ui_to_app_tx.send(AppEvent::Command(command)).await?;
            }
            ShellInput::ConfirmImport(path) => {
                if confirm_replace(&mut lines).await? {
                    ui_to_app_tx
                        .send(AppEvent::Command(Command::Import { path }))
                        .await?;
                } else {
                    println!("Import cancelled.");
                }
            }
            ShellInput::Quit => break,
            ShellInput::Empty => {}
            ShellInput::Unknown(line) => {
                eprintln!("Unknown command: {line} (try :help)");
            }
        }
    }

    Ok(())
}

/// Ask before an import overwrites the study list
pub async fn confirm_replace<R>(lines: &mut Lines<R>) -> std::io::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    print!("{REPLACE_WARNING}");
    std::io::stdout().flush()?;

    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
