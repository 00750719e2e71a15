use super::logging;
use super::render::{print_docs, print_messages};
use super::setup::{Cli, Commands, USAGE};
use ago::config::AgoPaths;
use ago::error::Result;
use ago::init::{initialize, AgoContext};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;

pub fn run() -> Result<()> {
    let parsed = Cli::try_parse();
    logging::init(parsed.as_ref().map(|cli| cli.verbose).unwrap_or(false));

    // The store is set up before the command line is judged, even for usage errors
    let mut ctx = init_context()?;

    let cli = parsed.unwrap_or_else(|e| exit_on_usage_error(e));
    let Some(command) = cli.command else {
        println!("No argument.");
        println!("{}\n\nFor detail, try ago help", USAGE);
        process::exit(1);
    };

    match command {
        Commands::LsDocs => handle_ls_docs(&ctx),
        Commands::AddDocs { paths } => handle_add_docs(&mut ctx, paths),
        Commands::RmDocs { ids } => handle_rm_docs(&mut ctx, ids),
        Commands::Test { args } => handle_test(&ctx, args),
        Commands::Help => handle_help(&ctx),
    }
}

/// Usage errors and unknown commands exit with status 1; `--help` and
/// `--version` print and exit normally.
fn exit_on_usage_error(e: clap::Error) -> ! {
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        e.exit();
    }
    let _ = e.print();
    process::exit(1);
}

fn init_context() -> Result<AgoContext> {
    initialize(AgoPaths::from_env())
}

fn handle_ls_docs(ctx: &AgoContext) -> Result<()> {
    let result = ctx.api.list_docs();
    print_docs(&result.listed_docs);
    Ok(())
}

fn handle_add_docs(ctx: &mut AgoContext, paths: Vec<PathBuf>) -> Result<()> {
    let result = ctx.api.add_docs(&paths)?;
    print_messages(&result.messages);
    Ok(())
}

/// Per-id failures are printed; the command itself still succeeds.
fn handle_rm_docs(ctx: &mut AgoContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.remove_docs(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_test(ctx: &AgoContext, args: Vec<String>) -> Result<()> {
    print_messages(&ctx.api.test(&args).messages);
    Ok(())
}

fn handle_help(ctx: &AgoContext) -> Result<()> {
    print_messages(&ctx.api.help().messages);
    Ok(())
}
