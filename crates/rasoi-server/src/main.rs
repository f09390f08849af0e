use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rasoi-server",
    about = "In-memory REST backend for the Rasoi Connect Hub",
    version
)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    rasoi_server::serve(cli.port).await
}
