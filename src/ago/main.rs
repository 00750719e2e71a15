//! # ago CLI
//!
//! The binary is intentionally thin: argument parsing, dispatch, rendering and
//! logging setup live in `cli/`, this file only runs it and turns a returned
//! error into exit status 1.
//!
//! ```text
//! ago ls-docs               # list registered documents as `id: name`
//! ago add-docs a.txt b.txt  # copy files in; stops at the first failure
//! ago rm-docs 0 3           # remove by id; reports failures and keeps going
//! ago test [args ...]       # quiz placeholder
//! ago help
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
