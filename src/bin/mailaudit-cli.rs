use anyhow::{Context, Result};
use mailaudit_lib::{classify_auth, extract_basic_info, load_message, reconstruct_route};

#[path = "mailaudit-cli/args.rs"]
mod args;
#[path = "mailaudit-cli/output.rs"]
mod output;

fn main() -> Result<()> {
    let cli = args::Cli::parse();

    let Some(path) = cli.input else {
        // invocation vide = aide, pas une erreur
        args::Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    };

    let msg = load_message(&path).with_context(|| format!("cannot analyze '{}'", path.display()))?;

    let basic = extract_basic_info(&msg);
    let hops = reconstruct_route(&msg);
    let auth = classify_auth(&msg);

    print!("{}", output::render_report(&basic, &hops, &auth));
    Ok(())
}
