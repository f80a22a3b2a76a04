mod command;
mod input;

use anyhow::Result;
use std::io::{self, IsTerminal};

use crate::clipboard;
use crate::config::CREDENTIAL_VARS;
use crate::engine::{Outcome, ProposalEngine};
use crate::output;
use crate::proposal::ProposalRequest;
use crate::session::{ProposalSession, SessionView};

use command::FormInput;
use input::{EditorSource, LineSource, NOTES_HINT, StdioSource, read_notes};

pub async fn run_interactive(
    engine: &ProposalEngine<'_>,
    session: &mut ProposalSession,
    copy: bool,
) -> Result<()> {
    println!("Proposal Genius. Enter a section topic, then your notes. Type /help for commands.");

    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        let mut source = EditorSource::new()?;
        run_form(engine, session, &mut source, copy).await
    } else {
        let mut source = StdioSource::new(io::stdin().lock());
        run_form(engine, session, &mut source, copy).await
    }
}

async fn run_form(
    engine: &ProposalEngine<'_>,
    session: &mut ProposalSession,
    source: &mut dyn LineSource,
    copy: bool,
) -> Result<()> {
    loop {
        let Some(line) = source.read_line("topic> ")? else {
            println!("Good Bye!");
            return Ok(());
        };

        let topic = match command::parse(&line) {
            FormInput::Blank => continue,
            FormInput::Exit => {
                println!("Good Bye!");
                return Ok(());
            }
            FormInput::Help => {
                print_help();
                continue;
            }
            FormInput::History => {
                print!("{}", output::render_history(session.history()));
                continue;
            }
            FormInput::Show(position) => {
                if session.select_history(position - 1).is_some() {
                    output::print_view(session.view());
                } else {
                    eprintln!("no draft #{position} in this session");
                }
                continue;
            }
            FormInput::Copy => {
                clipboard::copy_with_notice(session.current_text().unwrap_or_default());
                continue;
            }
            FormInput::Invalid(message) => {
                eprintln!("{message}");
                continue;
            }
            FormInput::Topic(topic) => topic,
        };
        source.remember(&topic);

        let Some(notes) = read_notes(source)? else {
            println!("Good Bye!");
            return Ok(());
        };
        let request = match ProposalRequest::new(topic, notes) {
            Ok(request) => request,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        output::print_view(SessionView::Loading);
        if let Outcome::Generated(entry) = engine.generate(request, session).await
            && copy
        {
            clipboard::copy_with_notice(entry.response());
        }
        output::print_view(session.view());
    }
}

fn print_help() {
    println!("Type a section topic (e.g. Executive Summary, Methodology, Pricing Strategy),");
    println!("then paste your notes; {NOTES_HINT}.");
    println!();
    println!("  /history     list drafts from this session");
    println!("  /show <n>    redisplay draft n");
    println!("  /copy        copy the current draft to the clipboard");
    println!("  /help        show this help");
    println!("  exit         leave");
    println!();
    println!("The API key is read from {}.", CREDENTIAL_VARS.join(", "));
}
