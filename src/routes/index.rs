use axum::response::IntoResponse;

use crate::content::{
    EDUCATION, EXPERIENCES, Education, Experience, PROFILE, PROJECTS, Profile, Project, SECTIONS,
    SKILLS, Section,
};
use crate::routes::ContactFormView;
use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub profile: &'static Profile,
    pub sections: &'static [Section],
    pub skills: &'static [&'static str],
    pub projects: &'static [Project],
    pub experiences: &'static [Experience],
    pub education: &'static [Education],
    pub form: ContactFormView,
}

impl IndexTemplate {
    pub fn new(form: ContactFormView) -> Self {
        Self {
            profile: &PROFILE,
            sections: SECTIONS,
            skills: SKILLS,
            projects: PROJECTS,
            experiences: EXPERIENCES,
            education: EDUCATION,
            form,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate::new(ContactFormView::default()))
}
