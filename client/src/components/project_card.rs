//! Project card with technology chips, impact note, and links.

use leptos::prelude::*;

use crate::content::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <h3 class="project-card__title">{project.title}</h3>
            <p class="project-card__description">{project.description}</p>
            <div class="project-card__techs">
                {project
                    .technologies
                    .iter()
                    .map(|tech| view! { <span class="project-card__tech">{*tech}</span> })
                    .collect_view()}
            </div>
            <div class="project-card__impact">
                <p>"Impact: " {project.impact}</p>
            </div>
            <div class="project-card__links">
                <a href=project.code_url class="project-card__link">"Code"</a>
                <a href=project.demo_url class="project-card__link">"Demo"</a>
            </div>
        </div>
    }
}
