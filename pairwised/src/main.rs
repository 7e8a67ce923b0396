use clap::{Parser, Subcommand};
use rst_common::with_tokio::tokio;

use prople_pairwised::errors::PairwisedError;
use prople_pairwised::svc::handler::Handler;

#[derive(Parser)]
#[command(name = "pairwised")]
#[command(version = "0.1")]
#[command(long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    #[arg(required = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "did")]
    #[command(about = "Manage local DIDs")]
    Did {
        #[command(subcommand)]
        command: DidCommands,
    },

    #[command(name = "connection")]
    #[command(about = "Run the connection handshake")]
    Connection {
        #[command(subcommand)]
        command: ConnectionCommands,
    },

    #[command(name = "pairwise")]
    #[command(about = "Lookup pairwise relationships")]
    Pairwise {
        #[command(subcommand)]
        command: PairwiseCommands,
    },

    #[command(name = "message")]
    #[command(about = "Send and open authcrypted messages")]
    Message {
        #[command(subcommand)]
        command: MessageCommands,
    },

    #[command(name = "ledger")]
    #[command(about = "Submit signed requests to the ledger")]
    Ledger {
        #[command(subcommand)]
        command: LedgerCommands,
    },
}

#[derive(Subcommand)]
enum DidCommands {
    #[command(about = "Generate a new DID")]
    New,
}

#[derive(Subcommand)]
enum ConnectionCommands {
    #[command(about = "Create a connection request as the inviter")]
    Request,

    #[command(about = "Accept a connection request, the output must be sent back to the inviter")]
    Accept {
        #[arg(short, long, value_name = "JSON")]
        request: String,
    },

    #[command(about = "Complete a connection from the anoncrypted response")]
    Complete {
        #[arg(short, long, value_name = "JSON")]
        response: String,
    },
}

#[derive(Subcommand)]
enum PairwiseCommands {
    Get {
        #[arg(short, long)]
        their_did: String,
    },
    List,
}

#[derive(Subcommand)]
enum MessageCommands {
    Send {
        #[arg(short, long)]
        their_did: String,

        #[arg(short, long)]
        content: String,
    },
    Open {
        #[arg(short, long, value_name = "JSON")]
        message: String,
    },
}

#[derive(Subcommand)]
enum LedgerCommands {
    Publish {
        #[arg(short, long)]
        did: String,
    },
    Submit {
        #[arg(short, long)]
        request: String,

        #[arg(short, long)]
        did: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), PairwisedError> {
    let cli = Cli::parse();
    let config = cli
        .config
        .ok_or(PairwisedError::InputError("missing config file".to_string()))?;

    let handler = Handler::new(config)?;
    let output = match cli.command {
        Commands::Did { command } => match command {
            DidCommands::New => handler.new_did().await?,
        },
        Commands::Connection { command } => match command {
            ConnectionCommands::Request => handler.create_connection_request().await?,
            ConnectionCommands::Accept { request } => {
                handler.accept_connection_request(request).await?
            }
            ConnectionCommands::Complete { response } => {
                handler.complete_connection(response).await?
            }
        },
        Commands::Pairwise { command } => match command {
            PairwiseCommands::Get { their_did } => handler.get_pairwise(their_did).await?,
            PairwiseCommands::List => handler.list_pairwise().await?,
        },
        Commands::Message { command } => match command {
            MessageCommands::Send { their_did, content } => {
                handler.send_message(their_did, content).await?
            }
            MessageCommands::Open { message } => handler.open_message(message).await?,
        },
        Commands::Ledger { command } => match command {
            LedgerCommands::Publish { did } => handler.publish_did(did).await?,
            LedgerCommands::Submit { request, did } => handler.submit_request(request, did).await?,
        },
    };

    println!("{}", output);
    Ok(())
}
