use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 資料提供者管理的四種記錄類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Profile,
    Project,
    Skill,
    Experience,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Profile,
        RecordKind::Project,
        RecordKind::Skill,
        RecordKind::Experience,
    ];

    /// Entity name used by the provider in collection URLs.
    pub fn entity_name(&self) -> &'static str {
        match self {
            RecordKind::Profile => "Profile",
            RecordKind::Project => "Project",
            RecordKind::Skill => "Skill",
            RecordKind::Experience => "Experience",
        }
    }

    /// 頁面載入時使用的排序
    pub fn default_sort(&self) -> Option<SortSpec> {
        match self {
            RecordKind::Profile => None,
            RecordKind::Project => Some(SortSpec::descending("completion_date")),
            RecordKind::Skill => Some(SortSpec::ascending("category")),
            RecordKind::Experience => Some(SortSpec::descending("start_date")),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity_name())
    }
}

/// Provider sort string: a field name, prefixed with `-` for descending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub descending: bool,
}

impl SortSpec {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: false,
        }
    }

    pub fn descending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: true,
        }
    }
}

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (field, descending) = match trimmed.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (trimmed, false),
        };

        if field.is_empty() {
            return Err(format!("sort spec '{}' has no field name", s));
        }

        Ok(Self {
            field: field.to_string(),
            descending,
        })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            f.write_str(&self.field)
        }
    }
}

// 提供者可能把欄位送成 null，視同未提供
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `YYYY-MM-DD` or a timestamp starting with it; anything else is no date.
fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let value = value.trim();
        let day = value.get(..10).unwrap_or(value);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }))
}

/// A record type stored by the data provider.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: RecordKind;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub detailed_about: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

impl Entity for Profile {
    const KIND: RecordKind = RecordKind::Profile;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "lenient_date")]
    pub completion_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl Entity for Project {
    const KIND: RecordKind = RecordKind::Project;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Design,
    SoftSkills,
    Tools,
    // 未知分類不應讓整個技能清單解析失敗
    #[default]
    #[serde(other)]
    Other,
}

impl SkillCategory {
    /// Display order of the skill groups.
    pub const ORDER: [SkillCategory; 5] = [
        SkillCategory::Technical,
        SkillCategory::Design,
        SkillCategory::SoftSkills,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Design => "Design",
            SkillCategory::SoftSkills => "Soft Skills",
            SkillCategory::Tools => "Tools",
            SkillCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: SkillCategory,
    #[serde(deserialize_with = "null_as_default")]
    pub proficiency: u8,
}

impl Entity for Skill {
    const KIND: RecordKind = RecordKind::Skill;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    /// Role held at the company.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
}

impl Entity for Experience {
    const KIND: RecordKind = RecordKind::Experience;
}
