use crate::core::controller::{Portfolio, ViewState};
use crate::domain::model::{Experience, Profile, Project, Skill, SkillCategory};
use crate::utils::error::Result;
use askama::Template;
use chrono::NaiveDate;
use url::Url;

const MAX_PROFICIENCY: u8 = 5;

/// Command shown on the welcome page to seed sample data.
pub const BOOTSTRAP_COMMAND: &str = "portfolio-page --bootstrap";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Navigation,
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
    Footer,
}

impl Section {
    /// Navigation target, for sections that have one.
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            Section::About => Some("about"),
            Section::Skills => Some("skills"),
            Section::Projects => Some("projects"),
            Section::Experience => Some("experience"),
            Section::Contact => Some("contact"),
            Section::Navigation | Section::Hero | Section::Footer => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Navigation => "Navigation",
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
            Section::Footer => "Footer",
        }
    }
}

/// What the page shows for a given view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Loading,
    Welcome,
    Portfolio(Vec<Section>),
}

impl PageView {
    pub fn from_state(state: &ViewState) -> Self {
        match state {
            ViewState::Loading => PageView::Loading,
            ViewState::EmptyProfile => PageView::Welcome,
            ViewState::Loaded(portfolio) => PageView::Portfolio(visible_sections(portfolio)),
        }
    }

    pub fn sections(&self) -> &[Section] {
        match self {
            PageView::Portfolio(sections) => sections,
            PageView::Loading | PageView::Welcome => &[],
        }
    }
}

/// Profile sections always render; list sections only when their list is non-empty.
pub fn visible_sections(portfolio: &Portfolio) -> Vec<Section> {
    let mut sections = vec![Section::Navigation, Section::Hero, Section::About];
    if !portfolio.skills.is_empty() {
        sections.push(Section::Skills);
    }
    if !portfolio.projects.is_empty() {
        sections.push(Section::Projects);
    }
    if !portfolio.experiences.is_empty() {
        sections.push(Section::Experience);
    }
    sections.push(Section::Contact);
    sections.push(Section::Footer);
    sections
}

#[derive(Template)]
#[template(path = "loading.html")]
struct LoadingTemplate {
    page_title: String,
}

#[derive(Template)]
#[template(path = "welcome.html")]
struct WelcomeTemplate {
    page_title: String,
    bootstrap_command: &'static str,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
struct PortfolioTemplate {
    page_title: String,
    nav_links: Vec<NavLink>,
    profile: ProfileView,
    show_skills: bool,
    skill_groups: Vec<SkillGroupView>,
    show_projects: bool,
    projects: Vec<ProjectView>,
    show_experience: bool,
    experiences: Vec<ExperienceView>,
    footer_year: i32,
}

struct NavLink {
    anchor: &'static str,
    label: &'static str,
}

struct ProfileView {
    full_name: String,
    title: String,
    bio: String,
    about_paragraphs: Vec<String>,
    location: String,
    email: String,
}

struct SkillGroupView {
    label: &'static str,
    skills: Vec<SkillView>,
}

struct SkillView {
    name: String,
    level: u8,
    meter: String,
}

struct ProjectView {
    title: String,
    description: String,
    technologies: Vec<String>,
    featured: bool,
    completed: String,
    project_url: String,
    github_url: String,
}

struct ExperienceView {
    title: String,
    company: String,
    location: String,
    description: String,
    period: String,
}

/// Renders the full HTML document for the current view state.
pub fn render_page(state: &ViewState, footer_year: i32) -> Result<String> {
    let html = match state {
        ViewState::Loading => LoadingTemplate {
            page_title: "Loading portfolio...".to_string(),
        }
        .render()?,
        ViewState::EmptyProfile => WelcomeTemplate {
            page_title: "Welcome to Your Portfolio".to_string(),
            bootstrap_command: BOOTSTRAP_COMMAND,
        }
        .render()?,
        ViewState::Loaded(portfolio) => portfolio_template(portfolio, footer_year).render()?,
    };
    Ok(html)
}

fn portfolio_template(portfolio: &Portfolio, footer_year: i32) -> PortfolioTemplate {
    let sections = visible_sections(portfolio);
    let nav_links = sections
        .iter()
        .filter_map(|section| {
            section.anchor().map(|anchor| NavLink {
                anchor,
                label: section.label(),
            })
        })
        .collect();

    PortfolioTemplate {
        page_title: page_title(&portfolio.profile),
        nav_links,
        profile: profile_view(&portfolio.profile),
        show_skills: sections.contains(&Section::Skills),
        skill_groups: group_skills(&portfolio.skills),
        show_projects: sections.contains(&Section::Projects),
        projects: portfolio.projects.iter().map(project_view).collect(),
        show_experience: sections.contains(&Section::Experience),
        experiences: portfolio.experiences.iter().map(experience_view).collect(),
        footer_year,
    }
}

fn page_title(profile: &Profile) -> String {
    if profile.title.is_empty() {
        profile.full_name.clone()
    } else {
        format!("{} | {}", profile.full_name, profile.title)
    }
}

fn profile_view(profile: &Profile) -> ProfileView {
    ProfileView {
        full_name: profile.full_name.clone(),
        title: profile.title.clone(),
        bio: profile.bio.clone(),
        about_paragraphs: paragraphs(&profile.detailed_about),
        location: profile.location.clone(),
        email: profile.email.clone(),
    }
}

/// Splits text on blank lines.
fn paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

// 依分類分組，保留提供者回傳的順序
fn group_skills(skills: &[Skill]) -> Vec<SkillGroupView> {
    SkillCategory::ORDER
        .iter()
        .filter_map(|category| {
            let members: Vec<SkillView> = skills
                .iter()
                .filter(|skill| skill.category == *category)
                .map(skill_view)
                .collect();
            (!members.is_empty()).then(|| SkillGroupView {
                label: category.label(),
                skills: members,
            })
        })
        .collect()
}

fn skill_view(skill: &Skill) -> SkillView {
    let level = skill.proficiency.min(MAX_PROFICIENCY);
    let filled = usize::from(level);
    let empty = usize::from(MAX_PROFICIENCY - level);
    SkillView {
        name: skill.name.clone(),
        level,
        meter: format!("{}{}", "●".repeat(filled), "○".repeat(empty)),
    }
}

fn project_view(project: &Project) -> ProjectView {
    ProjectView {
        title: project.title.clone(),
        description: project.description.clone(),
        technologies: project.technologies.clone(),
        featured: project.featured,
        completed: project
            .completion_date
            .map(|date| date.format("%B %Y").to_string())
            .unwrap_or_default(),
        project_url: web_link(project.project_url.as_deref()),
        github_url: web_link(project.github_url.as_deref()),
    }
}

/// Keeps only absolute http(s) links; anything else renders no link.
fn web_link(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .and_then(|value| Url::parse(value).ok())
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .map(String::from)
        .unwrap_or_default()
}

fn experience_view(experience: &Experience) -> ExperienceView {
    ExperienceView {
        title: experience.title.clone(),
        company: experience.company.clone(),
        location: experience.location.clone(),
        description: experience.description.clone(),
        period: period(experience),
    }
}

fn month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

fn period(experience: &Experience) -> String {
    let end = match experience.end_date {
        Some(end) if !experience.current => month_year(end),
        _ => "Present".to_string(),
    };
    match experience.start_date {
        Some(start) => format!("{} - {}", month_year(start), end),
        None => end,
    }
}
