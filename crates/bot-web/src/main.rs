use std::sync::Arc;

use anyhow::Context;
use bot_core::init_logging;
use bot_llm::{HuggingFaceConfig, InferenceClient, DEFAULT_API_BASE, DEFAULT_INFERENCE_MODEL};
use bot_web::{run_server, InferenceAnalyzer, WebState};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bot-web")]
#[command(about = "Symptom checker web form")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Model that analyzes the submitted symptoms
    #[arg(long, env = "HF_MODEL", default_value = DEFAULT_INFERENCE_MODEL)]
    model: String,

    /// Inference API base URL
    #[arg(long, env = "HF_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Hugging Face access token
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    token: Option<String>,
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

    let hf = HuggingFaceConfig::new(cli.token).with_api_base(&cli.api_base);
    hf.warn_if_anonymous();

    let client = InferenceClient::new(hf).with_model(&cli.model);
    log::info!("Symptoms are analyzed by {}", client.endpoint());

    let state = WebState::new(Arc::new(InferenceAnalyzer::new(client)))
        .context("failed to load page templates")?;

    run_server(state, &cli.host, cli.port)
        .await
        .with_context(|| format!("symptom checker failed on {}:{}", cli.host, cli.port))?;

    Ok(())
}
