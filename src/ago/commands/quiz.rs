//! Placeholder for the vocabulary quiz behind `ago test`. Echoes its arguments.

use crate::commands::{CmdMessage, CmdResult};

pub fn run<A: AsRef<str>>(args: &[A]) -> CmdResult {
    let joined = args
        .iter()
        .map(|a| a.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("do test [{}]", joined)));
    result
}
