//! Home page: hero, about, skills, projects, and contact sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `<section>` carries the id of its `content::Section` so the nav bar
//! and the hero buttons can scroll to it.

use leptos::prelude::*;

use crate::components::contact_form::ContactFormPanel;
use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::components::project_card::ProjectCard;
use crate::components::skill_card::SkillCard;
use crate::content::{self, Section};
use crate::util::scroll::scroll_to_section;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <NavBar/>
            <HeroSection/>
            <AboutSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <ContactSection/>
            <Footer/>
        </div>
    }
}

#[component]
fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <div class="section__heading">
            <h2>{title}</h2>
            <div class="section__rule"></div>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="section section--hero">
            <div class="hero">
                <div class="hero__copy">
                    <h1 class="hero__title">
                        {content::HEADLINE}
                        <span class="hero__title-accent">{content::HEADLINE_ACCENT}</span>
                    </h1>
                    <p class="hero__tagline">{content::TAGLINE}</p>
                    <p class="hero__summary">{content::SUMMARY}</p>
                    <div class="hero__actions">
                        <button
                            class="btn btn--primary"
                            on:click=move |_| scroll_to_section(Section::Projects.id())
                        >
                            "View Portfolio"
                        </button>
                        <button
                            class="btn btn--outline"
                            on:click=move |_| scroll_to_section(Section::Contact.id())
                        >
                            "Contact Me"
                        </button>
                    </div>
                </div>
                <div class="hero__portrait">
                    <img src=content::PROFILE_IMAGE alt=content::OWNER_NAME/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="section section--about">
            <SectionHeading title="About Me"/>
            <div class="about">
                <div class="about__copy">
                    <h3>{content::ABOUT_HEADING}</h3>
                    {content::ABOUT_PARAGRAPHS
                        .iter()
                        .map(|paragraph| view! { <p>{*paragraph}</p> })
                        .collect_view()}
                </div>
                <div class="about__highlights">
                    {content::HIGHLIGHTS
                        .iter()
                        .map(|h| {
                            view! {
                                <div class=format!("highlight highlight--{}", h.accent)>
                                    <div class="highlight__value">{h.value}</div>
                                    <div class="highlight__label">{h.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="section section--skills">
            <SectionHeading title="Skills & Expertise"/>
            <div class="skills-grid">
                {content::SKILLS.iter().map(|skill| view! { <SkillCard skill=*skill/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="section section--projects">
            <SectionHeading title="Featured Projects"/>
            <div class="projects-grid">
                {content::PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="section section--contact">
            <SectionHeading title="Get In Touch"/>
            <div class="contact">
                <div class="contact__intro">
                    <h3>"Let's Work Together"</h3>
                    <p>{content::CONTACT_PITCH}</p>
                    <ul class="contact__details">
                        {content::CONTACT_DETAILS
                            .iter()
                            .map(|detail| {
                                view! {
                                    <li class="contact__detail">
                                        <p class="contact__detail-label">{detail.label}</p>
                                        <p class="contact__detail-value">{detail.value}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="contact__social">
                        <a href=content::LINKEDIN_URL class="contact__social-link">"LinkedIn"</a>
                        <a href=content::GITHUB_URL class="contact__social-link">"GitHub"</a>
                    </div>
                </div>
                <div class="contact__panel">
                    <ContactFormPanel/>
                </div>
            </div>
        </section>
    }
}
