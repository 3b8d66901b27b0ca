use crate::cli::CLI;
use clap::{CommandFactory, Subcommand};
use clap_complete::{Shell, generate};
use dirs::{config_dir, data_dir, home_dir};
use std::{fs, io, path::PathBuf};
use tracing::debug;

const BIN_NAME: &str = "tokengate";

#[derive(Subcommand)]
pub(crate) enum Command {
    #[clap(about = "Print the completion script for a shell to stdout.")]
    Generate {
        #[arg(short, long, help = "Shell to generate completions for. Defaults to $SHELL.")]
        shell: Option<Shell>,
    },
    #[clap(about = "Write the completion script to the shell's completion directory.")]
    Install {
        #[arg(short, long, help = "Shell to install completions for. Defaults to $SHELL.")]
        shell: Option<Shell>,
    },
}

impl Command {
    pub fn run(self) -> eyre::Result<()> {
        match self {
            Command::Generate { shell } => {
                generate(detect_shell(shell)?, &mut CLI::command(), BIN_NAME, &mut io::stdout());
            }
            Command::Install { shell } => {
                let shell = detect_shell(shell)?;
                let path = completion_path(shell)?;

                let mut script = Vec::new();
                generate(shell, &mut CLI::command(), BIN_NAME, &mut script);

                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, script)?;
                debug!(%shell, path = %path.display(), "Installed completion script");

                println!("Completion script written to {}", path.display());
                if shell == Shell::Zsh {
                    println!("Make sure ~/.zfunc is in your fpath before compinit runs.");
                }
            }
        }
        Ok(())
    }
}

fn detect_shell(shell: Option<Shell>) -> eyre::Result<Shell> {
    shell
        .or_else(Shell::from_env)
        .ok_or_else(|| eyre::eyre!("Could not detect the shell, pass it with --shell"))
}

/// Per-user location each shell loads completions from.
pub(crate) fn completion_path(shell: Shell) -> eyre::Result<PathBuf> {
    let missing = |dir: &str| eyre::eyre!("Could not locate the {dir} directory");
    let path = match shell {
        Shell::Bash => data_dir()
            .ok_or_else(|| missing("data"))?
            .join("bash-completion/completions")
            .join(BIN_NAME),
        Shell::Zsh => home_dir()
            .ok_or_else(|| missing("home"))?
            .join(".zfunc")
            .join(format!("_{BIN_NAME}")),
        Shell::Fish => config_dir()
            .ok_or_else(|| missing("config"))?
            .join("fish/completions")
            .join(format!("{BIN_NAME}.fish")),
        other => {
            return Err(eyre::eyre!(
                "Installing completions for {other} is not supported, use `autocomplete generate`"
            ));
        }
    };
    Ok(path)
}
