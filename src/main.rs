use crate::aliasdb::AliasDb;
use crate::errorprint::print_error;
use crate::session::Session;
use alias_store::ReadOnlyAliases;
use anyhow::anyhow;
use log::debug;
use std::path::PathBuf;
use structopt::*;

mod aliasdb;
mod errorprint;
mod repl;
mod script;
mod session;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "aliasbook",
    about = "A contact book command line with user defined command aliases"
)]
struct Opt {
    /// Skip loading and saving aliases; they last only as long as
    /// this process
    #[structopt(long = "no-db", conflicts_with = "db")]
    no_db: bool,

    /// The sqlite database that holds the aliases.
    /// Defaults to ~/.aliasbook-aliases.db
    #[structopt(long = "db", parse(from_os_str))]
    db: Option<PathBuf>,

    /// Run this command line and then exit
    #[structopt(short = "c", conflicts_with = "script")]
    command: Option<String>,

    /// Log each alias resolution and dispatch decision
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,

    /// Run the command lines in this file instead of reading
    /// from the terminal
    #[structopt(parse(from_os_str))]
    script: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("ALIASBOOK_LOG", default_filter))
        .init();
}

fn default_db_path() -> anyhow::Result<PathBuf> {
    let home = dirs_next::home_dir().ok_or_else(|| anyhow!("can't find HOME dir"))?;
    Ok(home.join(".aliasbook-aliases.db"))
}

fn open_db(opt: &Opt) -> anyhow::Result<Option<AliasDb>> {
    if opt.no_db {
        return Ok(None);
    }
    let path = match &opt.db {
        Some(path) => path.clone(),
        None => default_db_path()?,
    };
    AliasDb::open(&path).map(Some)
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    init_logging(opt.verbose);

    let mut session = Session::new(open_db(&opt)?)?;
    debug!("session starts with {} aliases", session.aliases().count());

    if let Some(command) = &opt.command {
        let stdout = std::io::stdout();
        if let Err(e) = session.run_line(command, &mut stdout.lock()) {
            print_error(&e);
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Some(script) = &opt.script {
        if !script::run_script_file_reporting(script, &mut session) {
            std::process::exit(1);
        }
        return Ok(());
    }

    if atty::is(atty::Stream::Stdin) {
        return repl::repl(&mut session);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match script::run_script(stdin.lock(), "stdin", &mut session, &mut stdout.lock()) {
        Ok(_) => Ok(()),
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    }
}
