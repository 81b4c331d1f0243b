use crate::core::controller::{PageController, ViewState};
use crate::core::render::{render_page, PageView};
use crate::domain::ports::{DataProvider, Storage};
use crate::utils::error::Result;
use chrono::Datelike;

/// 產生靜態作品集頁面：載入、（可選）建立範例資料、渲染、寫出
pub struct SiteGenerator<P: DataProvider, S: Storage> {
    controller: PageController<P>,
    storage: S,
    output_file: String,
    bootstrap_on_empty: bool,
}

impl<P: DataProvider, S: Storage> SiteGenerator<P, S> {
    pub fn new(provider: P, storage: S, output_file: &str) -> Self {
        Self {
            controller: PageController::new(provider),
            storage,
            output_file: output_file.to_string(),
            bootstrap_on_empty: false,
        }
    }

    pub fn with_bootstrap(mut self, enabled: bool) -> Self {
        self.bootstrap_on_empty = enabled;
        self
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    /// Returns the location of the written page.
    ///
    /// Provider failures never fail the run; only rendering and storage do.
    pub async fn run(&mut self) -> Result<String> {
        tracing::info!("🚀 Generating portfolio page");
        self.controller.load().await;

        if self.bootstrap_on_empty && *self.controller.state() == ViewState::EmptyProfile {
            match self.controller.bootstrap().await {
                Ok(created) => tracing::info!("🌱 Bootstrap finished with {} records", created),
                Err(e) => tracing::warn!("⚠️ Continuing without sample data: {}", e),
            }
        }

        let state = self.controller.state();
        let view = PageView::from_state(state);
        tracing::debug!("Rendering {} page with sections {:?}", state.name(), view.sections());

        let html = render_page(state, chrono::Utc::now().year())?;
        tracing::debug!("Writing page ({} bytes) to storage", html.len());
        self.storage.write_file(&self.output_file, html.as_bytes()).await?;

        let location = self.storage.location(&self.output_file);
        tracing::info!("📁 Page written to: {}", location);
        Ok(location)
    }
}
