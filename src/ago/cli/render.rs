use ago::api::{CmdMessage, MessageLevel};
use ago::model::Document;
use colored::Colorize;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_docs(docs: &[Document]) {
    print!("{}", render_docs(docs));
}

/// One `id: name` line per document, in collection order.
pub(super) fn render_docs(docs: &[Document]) -> String {
    docs.iter().map(|doc| format!("{}\n", doc)).collect()
}
