mod catalog;
mod continuation;
mod error;
mod locale;
mod models;
mod render;
mod session;

use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::locale::Locale;
use crate::models::Plan;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "lectio")]
#[command(about = "Interactively extend a daily scripture reading plan", long_about = None)]
struct Cli {
    /// Path to the plan JSON file
    plan: PathBuf,

    /// Path to the book catalog file
    #[arg(long, default_value = "books.json")]
    books: PathBuf,

    /// Path to the locale file
    #[arg(long, default_value = "locales/en.json")]
    locale: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = Catalog::load(&cli.books)?;
    let locale = Locale::load(&cli.locale)?;
    let mut plan = Plan::load(&cli.plan)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&catalog, &locale, stdin.lock(), stdout.lock());
    session.run(&mut plan, &cli.plan)
}
