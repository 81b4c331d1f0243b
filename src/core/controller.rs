use crate::core::sample_data::{sample_profile, sample_project, sample_skills};
use crate::domain::model::{Entity, Experience, Profile, Project, Skill};
use crate::domain::ports::DataProvider;
use crate::utils::error::{PortfolioError, Result};

/// Data shown once a profile exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
}

/// 頁面狀態：Loading → EmptyProfile | Loaded
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    EmptyProfile,
    Loaded(Box<Portfolio>),
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::EmptyProfile => "empty",
            ViewState::Loaded(_) => "loaded",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }

    pub fn portfolio(&self) -> Option<&Portfolio> {
        match self {
            ViewState::Loaded(portfolio) => Some(portfolio),
            _ => None,
        }
    }
}

pub struct PageController<P: DataProvider> {
    provider: P,
    state: ViewState,
}

impl<P: DataProvider> PageController<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetches the four record lists concurrently and settles the view state.
    ///
    /// A failing list is logged and treated as empty, so this always ends in
    /// `EmptyProfile` or `Loaded`.
    pub async fn load(&mut self) -> &ViewState {
        self.state = ViewState::Loading;
        tracing::info!("⏳ Loading portfolio data");

        let (profiles, projects, skills, experiences) = tokio::join!(
            fetch_or_empty::<Profile, P>(&self.provider),
            fetch_or_empty::<Project, P>(&self.provider),
            fetch_or_empty::<Skill, P>(&self.provider),
            fetch_or_empty::<Experience, P>(&self.provider),
        );

        if profiles.len() > 1 {
            tracing::warn!(
                "Provider returned {} profiles, using the first one",
                profiles.len()
            );
        }

        self.state = match profiles.into_iter().next() {
            Some(profile) => {
                tracing::info!(
                    "✅ Portfolio loaded: {} projects, {} skills, {} experiences",
                    projects.len(),
                    skills.len(),
                    experiences.len()
                );
                ViewState::Loaded(Box::new(Portfolio {
                    profile,
                    projects,
                    skills,
                    experiences,
                }))
            }
            None => {
                tracing::info!("📭 No profile found, showing welcome page");
                ViewState::EmptyProfile
            }
        };

        &self.state
    }

    /// Seeds one profile, six skills and one project, then reloads.
    ///
    /// Only allowed from `EmptyProfile`. Records are created one after
    /// another with no rollback: on failure the records created so far stay
    /// with the provider, the view state is left untouched and the error
    /// reports how many were created.
    pub async fn bootstrap(&mut self) -> Result<usize> {
        if self.state != ViewState::EmptyProfile {
            return Err(PortfolioError::InvalidStateError {
                action: "create sample data".to_string(),
                state: self.state.name().to_string(),
            });
        }

        tracing::info!("🌱 Creating sample portfolio data");
        let mut created = 0;
        if let Err(e) = self.create_sample_records(&mut created).await {
            tracing::error!(
                "❌ Error creating sample data after {} records: {}",
                created,
                e
            );
            return Err(PortfolioError::BootstrapAborted {
                created,
                message: e.to_string(),
            });
        }

        tracing::info!("🌱 Created {} sample records", created);
        self.load().await;
        Ok(created)
    }

    async fn create_sample_records(&self, created: &mut usize) -> Result<()> {
        self.provider.create(&sample_profile()).await?;
        *created += 1;

        for skill in sample_skills() {
            self.provider.create(&skill).await?;
            *created += 1;
        }

        self.provider.create(&sample_project()).await?;
        *created += 1;

        Ok(())
    }
}

async fn fetch_or_empty<E: Entity, P: DataProvider>(provider: &P) -> Vec<E> {
    let sort = E::KIND.default_sort();
    let result: Result<Vec<E>> = provider.list(sort.as_ref()).await;
    match result {
        Ok(records) => {
            tracing::debug!("Fetched {} {} records", records.len(), E::KIND);
            records
        }
        Err(e) => {
            tracing::warn!("⚠️ Failed to load {} records, treating as empty: {}", E::KIND, e);
            Vec::new()
        }
    }
}
