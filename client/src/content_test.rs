use std::collections::HashSet;

use super::*;

#[test]
fn section_ids_match_page_anchors() {
    let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
}

#[test]
fn section_labels_are_title_case_ids() {
    for section in Section::ALL {
        assert_eq!(section.label().to_lowercase(), section.id());
    }
}

#[test]
fn skill_names_are_unique() {
    let names: HashSet<_> = SKILLS.iter().map(|s| s.name).collect();
    assert_eq!(names.len(), SKILLS.len());
}

#[test]
fn every_project_lists_technologies() {
    for project in &PROJECTS {
        assert!(!project.technologies.is_empty(), "{}", project.title);
        assert!(!project.impact.is_empty(), "{}", project.title);
    }
}

#[test]
fn skill_icons_have_glyphs() {
    for skill in &SKILLS {
        assert!(!skill.icon.glyph().is_empty(), "{}", skill.name);
    }
}
