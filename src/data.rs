//! Static portfolio content rendered by the home page sections.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const HERO_SECTION: Section = Section { id: "hero", label: "Home" };
pub const ABOUT_SECTION: Section = Section { id: "about", label: "About" };
pub const SKILLS_SECTION: Section = Section { id: "skills", label: "Skills" };
pub const PROJECTS_SECTION: Section = Section { id: "projects", label: "Projects" };
pub const EXPERIENCE_SECTION: Section = Section { id: "experience", label: "Experience" };
pub const CONTACT_SECTION: Section = Section { id: "contact", label: "Contact" };

/// Page sections in render order; nav links and section anchors both come
/// from these constants.
pub const SECTIONS: &[Section] = &[
    HERO_SECTION,
    ABOUT_SECTION,
    SKILLS_SECTION,
    PROJECTS_SECTION,
    EXPERIENCE_SECTION,
    CONTACT_SECTION,
];

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Alex Morgan",
    title: "Software Engineer",
    tagline: "Building reliable systems and the interfaces on top of them.",
    about: &[
        "I work across the stack, with a bias toward typed, well-tested code.",
        "Lately that means Rust on the server and in the browser.",
    ],
};

#[derive(Clone, Copy, Debug)]
pub struct SkillGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup { name: "Languages", items: &["Rust", "TypeScript", "SQL"] },
    SkillGroup { name: "Web", items: &["Leptos", "Axum", "WebAssembly"] },
    SkillGroup { name: "Infrastructure", items: &["PostgreSQL", "Docker", "CI/CD"] },
];

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Collaborative Board",
        summary: "Real-time whiteboard with a WebSocket frame protocol.",
        tags: &["Rust", "Leptos", "WebSocket"],
        url: None,
    },
    Project {
        name: "Portfolio",
        summary: "This site: a single Leptos page with an adaptive theme.",
        tags: &["Rust", "WASM"],
        url: Some("https://example.com/portfolio"),
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Role {
    pub company: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[Role] = &[
    Role {
        company: "Acme Systems",
        title: "Senior Engineer",
        period: "2022 - present",
        highlights: &["Led the move of the ingest pipeline to Rust."],
    },
    Role {
        company: "Northwind",
        title: "Engineer",
        period: "2018 - 2022",
        highlights: &["Built the customer dashboard and its API."],
    },
];

#[derive(Clone, Copy, Debug)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONTACT: &[ContactLink] = &[
    ContactLink { label: "Email", href: "mailto:alex@example.com" },
    ContactLink { label: "GitHub", href: "https://github.com/example" },
];
