//! Home page sections rendered from `data`.

use leptos::prelude::*;

use crate::data::{
    ABOUT_SECTION, CONTACT, CONTACT_SECTION, EXPERIENCE, EXPERIENCE_SECTION, HERO_SECTION, PROFILE, PROJECTS,
    PROJECTS_SECTION, SKILLS, SKILLS_SECTION,
};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id={HERO_SECTION.id} class="section hero">
            <h1 class="hero__name">{PROFILE.name}</h1>
            <p class="hero__title">{PROFILE.title}</p>
            <p class="hero__tagline">{PROFILE.tagline}</p>
            <a href={format!("#{}", CONTACT_SECTION.id)} class="btn hero__cta">"Get in touch"</a>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id={ABOUT_SECTION.id} class="section about">
            <h2>"About"</h2>
            {PROFILE.about.iter().map(|para| view! { <p>{*para}</p> }).collect_view()}
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id={SKILLS_SECTION.id} class="section skills">
            <h2>"Skills"</h2>
            <div class="skills__groups">
                {SKILLS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="skills__group">
                                <h3>{group.name}</h3>
                                <ul>
                                    {group.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id={PROJECTS_SECTION.id} class="section projects">
            <h2>"Projects"</h2>
            <div class="projects__grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="project-card">
                                <h3>{project.name}</h3>
                                <p>{project.summary}</p>
                                <ul class="project-card__tags">
                                    {project.tags.iter().map(|tag| view! { <li>{*tag}</li> }).collect_view()}
                                </ul>
                                {project
                                    .url
                                    .map(|href| view! { <a href=href class="project-card__link">"View"</a> })}
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id={EXPERIENCE_SECTION.id} class="section experience">
            <h2>"Experience"</h2>
            <ol class="experience__list">
                {EXPERIENCE
                    .iter()
                    .map(|role| {
                        view! {
                            <li class="experience__role">
                                <h3>{role.title} " · " {role.company}</h3>
                                <span class="experience__period">{role.period}</span>
                                <ul>
                                    {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id={CONTACT_SECTION.id} class="section contact">
            <h2>"Contact"</h2>
            <ul class="contact__links">
                {CONTACT
                    .iter()
                    .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
