//! quicknotes-client CLI entry point.

use clap::Parser;

use quicknotes_client::cli::notes::{update_request, NotesAction};
use quicknotes_client::cli::{Cli, Commands, OutputFormat};
use quicknotes_client::output::{format_output, pretty};
use quicknotes_client::{ClientError, NoteStore, NotesClient};
use quicknotes_core::note::CreateNoteRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut client = NotesClient::new(&cli.base_url);
    if let Some(token) = &cli.token {
        client = client.with_token(token);
    }

    let Commands::Notes(notes_cmd) = cli.command;
    match notes_cmd.action {
        NotesAction::List { tag, raw } => {
            if raw {
                let notes = client.list_notes(&tag).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&notes, cli.format)),
                    OutputFormat::Pretty => {
                        let refs: Vec<_> = notes.iter().collect();
                        println!("{}", pretty::format_notes(&refs))
                    }
                }
                return Ok(());
            }

            let mut store = NoteStore::new(client);
            for t in &tag {
                store.add_search_tag(t);
            }
            store.load(&[]).await?;

            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&store.visible(), cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        if let Some(filters) = pretty::format_search_tags(store.search_tags()) {
                            println!("{}", filters);
                        }
                    }
                    match store.empty_state() {
                        Some(state) => println!("{}", pretty::format_empty_state(state)),
                        None => println!("{}", pretty::format_notes(&store.visible())),
                    }
                }
            }
        }
        NotesAction::Get { id } => {
            let note = client.get_note(id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&note, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_note(&note)),
            }
        }
        NotesAction::Create {
            title,
            content,
            tag,
        } => {
            let note = client
                .create_note(&CreateNoteRequest::new(title, content).with_tags(tag))
                .await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&note, cli.format)),
                OutputFormat::Pretty => println!("Created:\n{}", pretty::format_note(&note)),
            }
        }
        NotesAction::Update {
            id,
            title,
            content,
            tag,
            clear_tags,
        } => {
            let request = update_request(title, content, tag, clear_tags);
            if request.is_empty() {
                return Err(ClientError::InvalidInput(
                    "nothing to update; pass --title, --content, --tag or --clear-tags"
                        .to_string(),
                )
                .into());
            }

            let note = client.update_note(id, &request).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&note, cli.format)),
                OutputFormat::Pretty => println!("Updated:\n{}", pretty::format_note(&note)),
            }
        }
        NotesAction::Delete { id } => {
            client.delete_note(id).await?;
            if !cli.quiet {
                println!("Deleted note {}", id);
            }
        }
    }

    Ok(())
}
