use anyhow::Context;
use bot_core::init_logging;
use bot_llm::{HuggingFaceConfig, DEFAULT_API_BASE, DEFAULT_HUB_BASE};
use bot_server::{run_server, AppState, ServerOptions};
use bot_session::{ChatBot, ChatBotConfig, StrategyPreference, DEFAULT_CHAT_MODEL};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "bot-server")]
#[command(about = "Local web chat interface backed by a Hugging Face conversational model")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value = "7860")]
    port: u16,

    /// Chat model id on the Hugging Face Hub
    #[arg(long, env = "CHAT_MODEL", default_value = DEFAULT_CHAT_MODEL)]
    model: String,

    /// Generation strategy: auto, pipeline or direct
    #[arg(long, env = "CHAT_STRATEGY", default_value = "auto")]
    strategy: StrategyPreference,

    /// Inference API base URL
    #[arg(long, env = "HF_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Hub base URL used to look up model metadata
    #[arg(long, env = "HF_HUB_BASE", default_value = DEFAULT_HUB_BASE)]
    hub_base: String,

    /// Text-generation endpoint used by the direct strategy instead of the hosted model
    #[arg(long, env = "GENERATION_URL")]
    generation_url: Option<String>,

    /// Hugging Face access token
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Do not open the interface in a browser
    #[arg(long)]
    no_browser: bool,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            eprintln!("Ignoring unreadable .env file: {}", error);
        }
    }

    let cli = Cli::parse();
    init_logging(cli.debug);

    log::info!("Starting chatbot server on {}:{}", cli.host, cli.port);
    log::info!("  Model: {}", cli.model);
    log::info!("  Strategy: {}", cli.strategy);
    log::info!("  Inference API: {}", cli.api_base);
    if let Some(url) = &cli.generation_url {
        log::info!("  Generation endpoint: {}", url);
    }

    let hf = HuggingFaceConfig::new(cli.token.clone())
        .with_api_base(&cli.api_base)
        .with_hub_base(&cli.hub_base);
    hf.warn_if_anonymous();

    let mut config = ChatBotConfig::new(hf);
    config.model = cli.model.clone();
    config.preference = cli.strategy;
    config.generation_url = cli.generation_url.clone();

    let bot = ChatBot::initialize(config).await;

    let options = ServerOptions {
        host: cli.host.clone(),
        port: cli.port,
        open_browser: !cli.no_browser,
    };

    if let Err(error) = run_server(AppState::new(bot), options).await {
        log::error!("Error launching interface: {}", error);
        eprintln!("Troubleshooting:");
        eprintln!("  1. Check that port {} is not already in use (try --port)", cli.port);
        eprintln!("  2. Check your network connection to {}", cli.api_base);
        eprintln!("  3. Make sure HF_TOKEN holds a valid access token");
        return Err(error).context("chat server stopped with an error");
    }

    Ok(())
}
