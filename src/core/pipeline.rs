use crate::core::lightbox::Lightbox;
use crate::core::loader::JsonFetcher;
use crate::core::locale::{DataPaths, Locale};
use crate::core::{ConfigProvider, PageData, Pipeline, Project, Resume, Storage, StringTable};
use crate::render::i18n::apply_strings;
use crate::render::page::{fill_container, render_lightbox, set_year};
use crate::render::projects::{render_project_grid, FALLBACK_ERROR_HTML};
use crate::render::resume::{render_contact, render_resume};
use crate::utils::error::Result;

pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: JsonFetcher,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            fetcher: JsonFetcher::new(),
        }
    }

    async fn template(&self) -> Result<String> {
        let bytes = self.storage.read_file(self.config.template_path()).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    /// Fan-out over the three data documents, all-or-nothing: the first
    /// failure aborts the join and surfaces as the load error.
    async fn fetch(&self) -> Result<PageData> {
        let locale = Locale::resolve(self.config.locale_override(), self.config.page_path());
        let paths = DataPaths::for_locale(self.config.data_url(), locale);
        tracing::info!("Loading {} data from {}", locale, self.config.data_url());

        let (strings, projects, resume) = tokio::try_join!(
            self.fetcher.fetch::<StringTable>(&paths.strings),
            self.fetcher.fetch::<Vec<Project>>(&paths.projects),
            self.fetcher.fetch::<Resume>(&paths.resume),
        )?;

        Ok(PageData {
            strings,
            projects,
            resume,
        })
    }

    async fn render(&self, data: PageData) -> Result<String> {
        let html = self.template().await?;
        let html = apply_strings(&html, &data.strings);
        let html = fill_container(
            &html,
            "projectGrid",
            &render_project_grid(&data.projects, &data.strings),
        )?;
        let html = fill_container(&html, "resumeBlock", &render_resume(&data.resume, &data.strings))?;
        let html = fill_container(&html, "contactBlock", &render_contact(&data.resume))?;
        let html = fill_container(&html, "lightbox", &render_lightbox(&Lightbox::new()))?;
        set_year(&html)
    }

    /// Degraded page when the data load failed: the grid shows the static
    /// error message, every other container keeps its template default.
    async fn render_fallback(&self) -> Result<String> {
        let html = self.template().await?;
        let html = fill_container(&html, "projectGrid", FALLBACK_ERROR_HTML)?;
        let html = fill_container(&html, "lightbox", &render_lightbox(&Lightbox::new()))?;
        set_year(&html)
    }

    async fn publish(&self, html: String) -> Result<String> {
        let output_path = self.config.output_path();
        tracing::debug!("Writing {} bytes to {}", html.len(), output_path);
        self.storage.write_file(output_path, html.as_bytes()).await?;
        Ok(output_path.to_string())
    }
}
