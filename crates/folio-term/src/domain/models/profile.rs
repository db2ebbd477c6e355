//! Static portfolio content rendered by the pages and the console.

use strum_macros::{Display, EnumIter};

pub const GREETING: &str = "Hi, I'm a Web Developer";

pub const WHOAMI: &str =
    "You are a web developer with a passion for creating interactive and engaging web experiences.";

pub const INTRO: &str = "I build fast, accessible and playful web experiences, from pixel-perfect \
interfaces to the APIs that power them.";

pub const ROLES: [&str; 5] = [
    "Web Developer",
    "Frontend Developer",
    "Fullstack Developer",
    "Python Developer",
    "Software Developer",
];

pub const HIGHLIGHTS: [(&str, &str); 4] = [
    ("2+", "Years Experience"),
    ("20+", "Projects Completed"),
    ("10+", "Certifications"),
    ("500+", "Hours of Learning"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
}

const fn skill(name: &'static str, category: SkillCategory) -> Skill {
    Skill { name, category }
}

pub static SKILLS: [Skill; 19] = [
    skill("React.js", SkillCategory::Frontend),
    skill("Next.js", SkillCategory::Frontend),
    skill("Vue.js", SkillCategory::Frontend),
    skill("TypeScript", SkillCategory::Frontend),
    skill("JavaScript", SkillCategory::Frontend),
    skill("HTML & CSS", SkillCategory::Frontend),
    skill("Bootstrap", SkillCategory::Frontend),
    skill("Tailwind CSS", SkillCategory::Frontend),
    skill("Node.js", SkillCategory::Backend),
    skill("Nest.js", SkillCategory::Backend),
    skill("Express.js", SkillCategory::Backend),
    skill("Java", SkillCategory::Backend),
    skill("PostgreSQL", SkillCategory::Database),
    skill("MongoDB", SkillCategory::Database),
    skill("MySQL", SkillCategory::Database),
    skill("Git & GitHub", SkillCategory::Tools),
    skill("Docker", SkillCategory::Tools),
    skill("AWS", SkillCategory::Tools),
    skill("Vercel", SkillCategory::Tools),
];

pub fn skills_in(category: SkillCategory) -> Vec<&'static str> {
    SKILLS
        .iter()
        .filter(|skill| skill.category == category)
        .map(|skill| skill.name)
        .collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ProjectFilter {
    #[default]
    All,
    Frontend,
    Fullstack,
}

impl ProjectFilter {
    pub fn next(&self) -> ProjectFilter {
        match self {
            ProjectFilter::All => ProjectFilter::Frontend,
            ProjectFilter::Frontend => ProjectFilter::Fullstack,
            ProjectFilter::Fullstack => ProjectFilter::All,
        }
    }

    pub fn accepts(&self, project: &Project) -> bool {
        *self == ProjectFilter::All || *self == project.category
    }
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub category: ProjectFilter,
    pub repository: &'static str,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "Medical Prediction System",
        description: "A machine learning-powered web application that predicts breast cancer and diabetes risks using Flask and Scikit-learn. It provides real-time results with a user-friendly interface.",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        category: ProjectFilter::Fullstack,
        repository: "Prediction-System",
    },
    Project {
        title: "Real-time Location Tracking",
        description: "A modern web application built with Vue.js that allows users to share their location with friends and family in real-time.",
        tags: &["React", "TypeScript", "Framer Motion", "Tailwind CSS"],
        category: ProjectFilter::Frontend,
        repository: "Real-Time-Tracker",
    },
    Project {
        title: "GreenBin - Waste Management",
        description: "A modern and efficient web application designed to tackle waste management challenges with technology and sustainability.",
        tags: &["React", "Node.js", "MongoDB", "Express", "Tailwind CSS"],
        category: ProjectFilter::Fullstack,
        repository: "GreenBin",
    },
    Project {
        title: "Certify",
        description: "A comprehensive certificate management and verification system.",
        tags: &["React", "Node.js", "MongoDB", "Express", "JWT", "Typescript", "Next.js"],
        category: ProjectFilter::Fullstack,
        repository: "Certificate-Generator",
    },
    Project {
        title: "Movie Database Application",
        description: "A React-based movie database application to browse and search movies using The Movie Database (TMDB) API, with pagination and detailed movie information.",
        tags: &["React", "TMDB API", "CSS Grid", "Responsive Design"],
        category: ProjectFilter::Frontend,
        repository: "Movie",
    },
    Project {
        title: "AI Q&A Application",
        description: "A full-stack application to ask questions and receive AI-powered responses, with conversation history, rate limiting and Hugging Face integration.",
        tags: &["React", "FastAPI", "SQLite", "Hugging Face API"],
        category: ProjectFilter::Fullstack,
        repository: "ai",
    },
];

pub fn projects(filter: ProjectFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.accepts(p)).collect()
}

pub fn profile_url(user: &str) -> String {
    format!("https://github.com/{user}")
}

pub fn repository_url(user: &str, project: &Project) -> String {
    format!("https://github.com/{user}/{}", project.repository)
}

pub const SOCIAL_LINKS: [(&str, &str); 2] = [
    ("LinkedIn", "https://www.linkedin.com/"),
    ("Twitter", "https://twitter.com/"),
];
