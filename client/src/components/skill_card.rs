//! Skill tile for the skills grid.

use leptos::prelude::*;

use crate::content::Skill;

#[component]
pub fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="skill-card">
            <div class="skill-card__icon" aria-hidden="true">{skill.icon.glyph()}</div>
            <h3 class="skill-card__name">{skill.name}</h3>
            <p class="skill-card__category">{skill.category}</p>
        </div>
    }
}
