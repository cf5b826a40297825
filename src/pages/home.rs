//! The single portfolio page.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::sections::{
    AboutSection, ContactSection, ExperienceSection, HeroSection, ProjectsSection, SkillsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="home">
            <HeroSection/>
            <AboutSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <ExperienceSection/>
            <ContactSection/>
        </main>
    }
}
