use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docqa")]
#[command(about = "Query your uploaded documents from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List, inspect, and delete uploaded documents
    Documents {
        #[command(subcommand)]
        command: DocumentCommands,
    },
    /// Upload a document
    Upload {
        /// File to upload
        file_path: PathBuf,
    },
    /// Show the questions asked against a document
    Questions {
        document_id: i64,
    },
    /// Ask a question about a document
    Ask {
        document_id: i64,
        /// The question text
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Show aggregate usage statistics
    Stats,
    /// Show the signed-in user profile
    Whoami,
}

#[derive(Subcommand)]
pub enum DocumentCommands {
    List,
    Show { id: i64 },
    Delete { id: i64 },
}
