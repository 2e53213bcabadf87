use anyhow::Context;
use wikirag::{
    cli::{output::Output, run_ask, Cli, Commands, ServeArgs},
    startup,
    utils::logging::init_tracing,
    WikiRagConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = Output::new(!cli.no_color);

    let (mut config, source) = WikiRagConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    init_tracing(&config.server, cli.verbose)?;
    source.report();

    match cli.command.unwrap_or_else(|| Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => {
            args.apply(&mut config);
            let state = startup::initialize(config)
                .await
                .context("Failed knowledge base setup")?;
            startup::serve(state).await?;
        }
        Commands::Ask { question, corpus } => {
            if let Some(corpus) = corpus {
                config.corpus.path = corpus;
            }
            let state = startup::initialize(config)
                .await
                .context("Failed knowledge base setup")?;
            run_ask(&state, &question, &output)
                .await
                .context("Failed to answer question")?;
        }
    }

    Ok(())
}
