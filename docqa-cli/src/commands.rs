use crate::cli::{Commands, DocumentCommands};
use anyhow::Context;
use docqa_client::ApiClient;
use std::path::Path;

pub async fn handle(client: &ApiClient, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Documents { command } => handle_documents(client, command).await,
        Commands::Upload { file_path } => {
            let data = std::fs::read(&file_path)
                .with_context(|| format!("failed to read {}", file_path.display()))?;
            let file_name = file_path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("upload.pdf");
            let content_type = mime_for(&file_path);

            let response = client.upload_file(file_name, content_type, data).await?;
            let upload = ApiClient::decode_upload(response).await?;

            println!(
                "Uploaded {} ({}) as document {}",
                upload.file_name,
                format_size(upload.file_size),
                upload.document_id
            );
            Ok(())
        }
        Commands::Questions { document_id } => {
            let questions = client.document_questions(document_id).await?;
            if questions.is_empty() {
                println!("No questions asked against document {document_id} yet.");
            }
            for question in questions {
                println!(
                    "[{}] {}",
                    question.created_at.format("%Y-%m-%d %H:%M"),
                    question.content
                );
                match question.answer {
                    Some(answer) => println!("    -> {}", answer.content),
                    None => println!("    -> (no answer yet)"),
                }
            }
            Ok(())
        }
        Commands::Ask {
            document_id,
            question,
        } => {
            let content = question.join(" ");
            let response = client.ask_question(&content, document_id).await?;
            println!("{}", response.answer);
            Ok(())
        }
        Commands::Stats => {
            let stats = client.user_stats().await?;
            println!("documents: {}", stats.document_count);
            println!("questions: {}", stats.question_count);
            println!(
                "storage:   {} {}",
                stats.total_storage_used, stats.storage_unit
            );
            Ok(())
        }
        Commands::Whoami => {
            let user = client.user_profile().await?;
            println!("email:    {}", user.email);
            if let Some(username) = &user.username {
                println!("username: {username}");
            }
            println!("since:    {}", user.created_at.format("%Y-%m-%d"));
            Ok(())
        }
    }
}

async fn handle_documents(client: &ApiClient, command: DocumentCommands) -> anyhow::Result<()> {
    match command {
        DocumentCommands::List => {
            let documents = client.list_documents().await?;
            if documents.is_empty() {
                println!("No documents uploaded yet.");
            }
            for document in documents {
                println!(
                    "{:>6}  {:>10}  {}  {}",
                    document.id,
                    format_size(document.file_size),
                    document.created_at.format("%Y-%m-%d %H:%M"),
                    document.title.as_deref().unwrap_or(&document.filename)
                );
            }
        }
        DocumentCommands::Show { id } => {
            let document = client.get_document(id).await?;
            println!("id:        {}", document.id);
            println!(
                "title:     {}",
                document.title.as_deref().unwrap_or("(untitled)")
            );
            println!("filename:  {}", document.filename);
            println!("type:      {}", document.file_type);
            println!("size:      {}", format_size(document.file_size));
            println!("url:       {}", document.file_url);
            println!("uploaded:  {}", document.created_at.format("%Y-%m-%d %H:%M"));
            println!("questions: {}", document.questions.len());
        }
        DocumentCommands::Delete { id } => {
            let acknowledgement = client.delete_document(id).await?;
            println!("Deleted document {id}: {acknowledgement}");
        }
    }
    Ok(())
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        // The product is PDF-first; anything unrecognized is sent as PDF and
        // the backend decides whether it can process it.
        _ => "application/pdf",
    }
}

fn format_size(bytes: i64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
