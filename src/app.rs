use anyhow::{Context, Result, anyhow};
use std::io;

use crate::cli::Cli;
use crate::clipboard;
use crate::config::{self, AgencyProfile, GenerationSettings};
use crate::engine::{Outcome, ProposalEngine};
use crate::interactive;
use crate::llm::GeminiClient;
use crate::output;
use crate::prompt;
use crate::proposal::ProposalRequest;
use crate::session::ProposalSession;

pub async fn run(cli: Cli) -> Result<()> {
    let settings = GenerationSettings::from_cli(&cli)?;
    let agency = AgencyProfile::from_cli(&cli);

    if let (Some(topic), Some(notes)) = (cli.topic.as_deref(), cli.notes.as_deref()) {
        let request = ProposalRequest::new(topic, read_notes_arg(notes)?)?;
        if cli.print_prompt {
            println!("{}", prompt::compose(&request, &agency)?);
            return Ok(());
        }

        let client = GeminiClient::new(settings, agency, config::get_env);
        let engine = ProposalEngine::new(&client);
        let mut session = ProposalSession::new();
        return run_once(&engine, &mut session, request, cli.copy).await;
    }

    let client = GeminiClient::new(settings, agency, config::get_env);
    let engine = ProposalEngine::new(&client);
    let mut session = ProposalSession::new();
    interactive::run_interactive(&engine, &mut session, cli.copy).await
}

async fn run_once(
    engine: &ProposalEngine<'_>,
    session: &mut ProposalSession,
    request: ProposalRequest,
    copy: bool,
) -> Result<()> {
    match engine.generate(request, session).await {
        Outcome::Generated(entry) => {
            print!(
                "{}",
                output::render_result(entry.response(), entry.sources())
            );
            if copy {
                clipboard::copy_with_notice(entry.response());
            }
            Ok(())
        }
        Outcome::Failed(info) => {
            eprint!("{}", output::render_error(info));
            Err(anyhow!("generation failed: {}", info.title))
        }
    }
}

fn read_notes_arg(raw: &str) -> Result<String> {
    if raw != "-" {
        return Ok(raw.to_string());
    }
    io::read_to_string(io::stdin()).with_context(|| "failed to read notes from stdin")
}
