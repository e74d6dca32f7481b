use anyhow::Context;
use clap::Parser;
use folio_render::core::ConfigProvider;
use folio_render::utils::{logger, validation::Validate};
use folio_render::{CliConfig, LocalStorage, PageEngine, SiteConfig, SitePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting folio-render");

    match &cli.config {
        Some(path) => {
            let config = SiteConfig::from_file(path)
                .with_context(|| format!("Failed to load config file {}", path))?;
            let site_root = config.site_root().to_string();
            run(config, site_root).await
        }
        None => {
            let site_root = cli.site_root.clone();
            run(cli, site_root).await
        }
    }
}

async fn run<C>(config: C, site_root: String) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate + 'static,
{
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(site_root);
    let pipeline = SitePipeline::new(storage, config);
    let engine = PageEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Page built successfully!");
            println!("📁 Output written to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Page build failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
