use crate::domain::model::{Profile, Project, Skill, SkillCategory};
use chrono::NaiveDate;

pub fn sample_profile() -> Profile {
    Profile {
        full_name: "Krishna Shinde".to_string(),
        title: "Full Stack Developer".to_string(),
        bio: "Passionate developer creating amazing digital experiences.".to_string(),
        detailed_about: "I'm a developer with experience in modern web technologies. I love creating applications that solve real problems and provide great user experiences.\n\nWhen I'm not coding, I enjoy exploring new technologies and working on personal projects.".to_string(),
        location: "Nagpur".to_string(),
        email: "krishnashinde8837@gmail.com".to_string(),
        ..Default::default()
    }
}

pub fn sample_skills() -> Vec<Skill> {
    [
        ("JavaScript", SkillCategory::Technical, 4),
        ("React", SkillCategory::Technical, 4),
        ("Node.js", SkillCategory::Technical, 3),
        ("UI/UX Design", SkillCategory::Design, 3),
        ("Problem Solving", SkillCategory::SoftSkills, 5),
        ("Git", SkillCategory::Tools, 4),
    ]
    .into_iter()
    .map(|(name, category, proficiency)| Skill {
        name: name.to_string(),
        category,
        proficiency,
        ..Default::default()
    })
    .collect()
}

pub fn sample_project() -> Project {
    Project {
        title: "Sample Project".to_string(),
        description: "A great project that showcases my skills and experience.".to_string(),
        technologies: vec![
            "React".to_string(),
            "Node.js".to_string(),
            "MongoDB".to_string(),
        ],
        featured: true,
        completion_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        ..Default::default()
    }
}
