//! `szz-data`: command-line reader for SZZ mining datasets.

mod cli;
mod render;

use clap::Parser;
use cli::{Args, Command};
use log::info;
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;
use szz_core::{
    default_log_level, init_logging, CommitMapRepository, CommitsRepository,
    SqliteCommitMapRepository, SqliteCommitsRepository,
};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = &args.log_dir {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream reader closed the pipe (`szz-data ... | head`).
        Err(err) if is_broken_pipe(err.as_ref()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    info!(
        "event=cli_run module=cli status=start command={:?} db={}",
        args.command,
        args.db.display()
    );

    match &args.command {
        Command::Commits { json } => {
            let repo = SqliteCommitsRepository::open(&args.db)?;
            let commits = repo.get_all()?;
            repo.close()?;

            render::write_commits(out, &commits, *json)?;
        }
        Command::CommitMap { index, json } => {
            let repo = SqliteCommitMapRepository::open(&args.db)?;
            let maps = repo.get_all()?;
            repo.close()?;

            match index {
                Some(key) => render::write_index(out, &maps, *key)?,
                None => render::write_commit_maps(out, &maps, *json)?,
            }
        }
        Command::Stats => {
            let commits = SqliteCommitsRepository::open(&args.db)?;
            let all_commits = commits.get_all()?;
            commits.close()?;

            let maps = SqliteCommitMapRepository::open(&args.db)?;
            let all_maps = maps.get_all()?;
            maps.close()?;

            render::write_stats(out, &all_commits, &all_maps)?;
        }
    }
    out.flush()?;

    info!("event=cli_run module=cli status=ok");
    Ok(())
}

fn is_broken_pipe(err: &(dyn Error + 'static)) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|err| err.kind() == io::ErrorKind::BrokenPipe)
}
