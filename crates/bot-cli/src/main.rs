use bot_core::init_logging;
use bot_llm::{HuggingFaceConfig, InferenceClient, DEFAULT_API_BASE, DEFAULT_INFERENCE_MODEL};
use clap::{Parser, Subcommand};
use colored::Colorize;
use url::Url;

const DEFAULT_QUERY: &str = "Hello world, I feel great today!";

#[derive(Parser)]
#[command(name = "bot-cli")]
#[command(about = "Query a Hugging Face inference endpoint")]
#[command(version)]
struct Cli {
    /// Model id on the Hugging Face Hub
    #[arg(long, env = "HF_MODEL", default_value = DEFAULT_INFERENCE_MODEL)]
    model: String,

    /// Inference API base URL
    #[arg(long, env = "HF_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: Url,

    /// Hugging Face access token
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Enable debug mode
    #[arg(long, short, env = "DEBUG", default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one text to the model and print the JSON answer
    Query {
        /// Input text
        #[arg(default_value = DEFAULT_QUERY)]
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            eprintln!("Ignoring unreadable .env file: {}", error);
        }
    }

    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = HuggingFaceConfig::new(cli.token).with_api_base(cli.api_base.as_str());
    config.warn_if_anonymous();
    let client = InferenceClient::new(config).with_model(cli.model);

    match cli.command {
        Commands::Query { text } => query(&client, &text).await,
    }
}

async fn query(client: &InferenceClient, text: &str) -> anyhow::Result<()> {
    log::debug!("POST {}", client.endpoint());

    match client.query(text).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(error) => {
            println!("{}", error.to_string().red());
            std::process::exit(1);
        }
    }
}
