mod browser;
mod flow;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "lojaprox")]
#[command(about = "Busca a loja mais próxima de um CEP e abre a rota no navegador")]
struct Cli {
    /// CEP de origem (solicitado interativamente quando omitido)
    #[arg(long)]
    cep: Option<String>,

    /// Tipo de loja a procurar (solicitado interativamente quando omitido)
    #[arg(long)]
    tipo: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = lojaprox_core::load_app_config_from_env()?;

    flow::run(&config, cli.cep, cli.tipo).await
}
