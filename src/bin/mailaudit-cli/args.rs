use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mailaudit-cli")]
pub struct Cli {
    /// chemin du fichier mail (.eml) à analyser
    pub input: Option<PathBuf>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}
