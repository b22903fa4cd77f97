// Career Insights chatbot entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use career_chat_core::brain::prompts::GREETING;
use career_chat_core::fs_manager::DataPaths;
use career_chat_core::llm::{CompletionRequest, LlmClient, OpenRouterClient};
use career_chat_core::models::ChatMessage;
use career_chat_core::telemetry::init_tracing;
use career_chat_core::{ChatConfig, ResponseAssembler, RoleDataset, Transcript};

#[derive(Debug, Parser)]
#[command(name = "career-chat", version, about = "Student career insights chatbot")]
struct Cli {
    /// Role dataset file (overrides CAREER_CHAT_DATASET)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat on stdin (default)
    Chat,
    /// Answer a single message and exit
    Ask {
        /// The message to answer
        message: String,
    },
    /// Send a fixed prompt to the completion endpoint and print the raw outcome
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    let mut config = ChatConfig::from_env().context("invalid configuration")?;
    if let Some(dataset) = cli.dataset {
        config.dataset_path = dataset;
    }

    let client = Arc::new(OpenRouterClient::new(&config).context("invalid completion client settings")?);
    let paths = DataPaths::from_current_dir(&config)?;

    match cli.command.unwrap_or(Command::Chat) {
        Command::Ping => ping(client.as_ref(), &config).await,
        Command::Ask { message } => {
            let assembler = build_assembler(client, &config, &paths)?;
            let reply = assembler.handle(&message).await?;
            println!("intent: {}", reply.intent);
            println!("role:   {}", reply.role.as_deref().unwrap_or("-"));
            println!();
            println!("{}", reply.text);
            Ok(())
        }
        Command::Chat => {
            let assembler = build_assembler(client, &config, &paths)?;
            chat_loop(&assembler, &paths).await
        }
    }
}

fn build_assembler(
    client: Arc<OpenRouterClient>,
    config: &ChatConfig,
    paths: &DataPaths,
) -> Result<ResponseAssembler<OpenRouterClient>> {
    let dataset = RoleDataset::load(paths.dataset_path())
        .with_context(|| format!("cannot start without the role dataset at {:?}", paths.dataset_path()))?;
    Ok(ResponseAssembler::new(Arc::new(dataset), client, config.clone()))
}

async fn chat_loop(assembler: &ResponseAssembler<OpenRouterClient>, paths: &DataPaths) -> Result<()> {
    let mut transcript = Transcript::new();
    info!(
        session_id = %transcript.session_id,
        roles = assembler.dataset().len(),
        root = %paths.root_dir().display(),
        "Chat session started"
    );

    println!("{}", GREETING);
    println!("(commands: /save, /reset, /quit)");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let message = line.trim();

        match message {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                transcript = Transcript::new();
                println!("Started a new session.");
                continue;
            }
            "/save" => {
                paths.init()?;
                match transcript.save(paths.sessions_dir()) {
                    Ok(path) => println!("Saved to {}", path.display()),
                    Err(e) => error!("Failed to save transcript: {}", e),
                }
                continue;
            }
            _ => {}
        }

        transcript.push_user(message);
        let reply = assembler.handle(message).await?;
        println!("\n{}", reply.text);
        transcript.push_assistant(reply.text);
    }

    info!(session_id = %transcript.session_id, messages = transcript.len(), "Chat session ended");
    Ok(())
}

async fn ping(client: &OpenRouterClient, config: &ChatConfig) -> Result<()> {
    let request = CompletionRequest::from_config(
        vec![
            ChatMessage::system("You are a helpful assistant that provides short, structured career advice."),
            ChatMessage::user("Give me 3 short project ideas for a Cloud Engineer beginner."),
        ],
        config,
    );

    match client.complete(request).await {
        Ok(completion) => {
            println!("{}", serde_json::to_string_pretty(&completion.raw)?);
            println!("\n== ASSISTANT ==\n{}", completion.text);
            Ok(())
        }
        Err(e) if e.is_fatal() => Err(e.into()),
        Err(e) => {
            println!("\n== ERROR ==\n{} (kind: {}, status: {:?})", e, e.kind(), e.status());
            Ok(())
        }
    }
}
