use crate::commands::{CmdMessage, CmdResult};

pub const HELP_TEXT: &str = "Use the source ;)";

pub fn run() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(HELP_TEXT));
    result
}
