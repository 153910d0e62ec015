//! Test Helpers

use crate::{
    domain::{
        blocks::NewBlock,
        categories::{Category, NewCategory},
        dishes::NewDish,
        formations::{Formation, NewFormation},
        lessons::{Lesson, NewLesson},
        seo::{Keyword, SeoMetadata},
        technologies::{NewTechnology, Technology},
        tutorials::{NewTutorial, Tutorial},
        users::{NewUser, Role},
    },
    store::Reference,
};

pub(crate) fn seo() -> SeoMetadata {
    SeoMetadata {
        meta_title: "Learn it".to_string(),
        meta_description: "Step by step".to_string(),
        meta_keywords: vec![Keyword {
            id: 1,
            name: "backend".to_string(),
        }],
    }
}

pub(crate) fn new_technology(name: &str, active: bool) -> NewTechnology {
    NewTechnology {
        name: name.to_string(),
        slug: name.to_lowercase(),
        image: String::new(),
        active,
    }
}

pub(crate) fn new_tutorial(title: &str, technologies: Vec<Reference<Technology>>) -> NewTutorial {
    NewTutorial {
        title: title.to_string(),
        slug: "getting-started".to_string(),
        content: "<p>Install the toolchain</p>".to_string(),
        resume: "A first look".to_string(),
        seo: seo(),
        status: true,
        publish: false,
        level: "Beginner".to_string(),
        duration: "2h".to_string(),
        image: String::new(),
        video_url: String::new(),
        technologies,
    }
}

pub(crate) fn new_formation(
    title: &str,
    technologies: Vec<Reference<Technology>>,
    default_technology: Option<Reference<Technology>>,
) -> NewFormation {
    NewFormation {
        title: title.to_string(),
        slug: "backend-track".to_string(),
        content: "<p>Twelve weeks</p>".to_string(),
        resume: "From zero to services".to_string(),
        seo: seo(),
        status: true,
        publish: true,
        level: "Intermediate".to_string(),
        duration: "12w".to_string(),
        image: String::new(),
        technologies,
        default_technology,
    }
}

pub(crate) fn new_lesson(
    title: &str,
    formations: Vec<Reference<Formation>>,
    tutorials: Vec<Reference<Tutorial>>,
) -> NewLesson {
    NewLesson {
        title: title.to_string(),
        slug: "ownership".to_string(),
        content: "<p>Moves and borrows</p>".to_string(),
        resume: "Who owns what".to_string(),
        seo: seo(),
        level: "Beginner".to_string(),
        duration: "45m".to_string(),
        status: true,
        select_formations: formations,
        select_tutorials: tutorials,
    }
}

pub(crate) fn new_block(title: &str, lessons: Vec<Reference<Lesson>>) -> NewBlock {
    NewBlock {
        title: title.to_string(),
        content: "<p>Week one</p>".to_string(),
        duration: "3h".to_string(),
        status: false,
        select_lessons: lessons,
    }
}

pub(crate) fn new_category(title: &str) -> NewCategory {
    NewCategory {
        title: title.to_string(),
    }
}

pub(crate) fn new_dish(name: &str, price: u64, categories: Vec<Reference<Category>>) -> NewDish {
    NewDish {
        name: name.to_string(),
        price,
        image: String::new(),
        select_categs: categories,
    }
}

pub(crate) fn new_user(name: &str, active: bool) -> NewUser {
    NewUser {
        name: name.to_string(),
        surname: "Nguema".to_string(),
        email: format!("{}@example.cm", name.to_lowercase()),
        password: "Secr3t!pass".to_string(),
        phone: "677123456".to_string(),
        status: active,
        image: String::new(),
        role: Role::Customer,
    }
}
