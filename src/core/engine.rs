use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives one build pass: fetch, render, publish. A failed data load is the
/// expected degraded path, not a crash: the engine logs it and publishes the
/// fallback page instead.
pub struct PageEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PageEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Building page...");

        let html = match self.pipeline.fetch().await {
            Ok(data) => {
                tracing::info!(
                    "Fetched {} projects, {} contact links",
                    data.projects.len(),
                    data.resume.links.len()
                );
                self.pipeline.render(data).await?
            }
            Err(err) => {
                tracing::error!("Data load failed: {}", err);
                self.pipeline.render_fallback().await?
            }
        };

        let output_path = self.pipeline.publish(html).await?;
        tracing::info!("Page written to {}", output_path);
        Ok(output_path)
    }
}
