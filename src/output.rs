use std::fmt::Write as _;

use crate::classify::ErrorInfo;
use crate::proposal::{GroundingSource, ProposalResponse};
use crate::session::SessionView;

const NOTES_PREVIEW_CHARS: usize = 20;

const EMPTY_VIEW: &str =
    "Ready to Write\nEnter a topic and your notes to draft a professional proposal section.\n";

pub fn render_view(view: SessionView<'_>) -> String {
    match view {
        SessionView::Empty => EMPTY_VIEW.to_string(),
        SessionView::Loading => "Generating Proposal...\n".to_string(),
        SessionView::Error(info) => render_error(info),
        SessionView::Result { text, sources } => render_result(text, sources),
    }
}

pub fn render_error(info: &ErrorInfo) -> String {
    format!("[!] {}\n    {}\n", info.title, info.message)
}

pub fn render_result(text: &str, sources: &[GroundingSource]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "── Generated Draft ──");
    let _ = writeln!(out, "{}", text.trim_end());
    if !sources.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Sources & Citations");
        for source in sources {
            let _ = writeln!(out, "  • {} <{}>", source.title, source.uri);
        }
    }
    out
}

pub fn render_history(history: &[ProposalResponse]) -> String {
    if history.is_empty() {
        return "No recent drafts.\n".to_string();
    }
    let mut out = String::new();
    for (index, entry) in history.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {}  [{}]  {}",
            index + 1,
            entry.request().section_topic().trim(),
            entry.timestamp().format("%H:%M"),
            notes_preview(entry.request().user_notes())
        );
    }
    out
}

fn notes_preview(notes: &str) -> String {
    let preview: String = notes
        .chars()
        .take(NOTES_PREVIEW_CHARS)
        .map(|ch| if ch.is_whitespace() { ' ' } else { ch })
        .collect();
    format!("{preview}...")
}

pub fn print_view(view: SessionView<'_>) {
    match view {
        SessionView::Error(_) => eprint!("{}", render_view(view)),
        _ => print!("{}", render_view(view)),
    }
    println!();
}
