//! Table and JSON output.

use std::io::Write;

use backoffice_app::{
    domain::{
        blocks::Block, categories::Category, dishes::Dish, formations::Formation,
        lessons::Lesson, orders::Order, technologies::Technology, tutorials::Tutorial,
        users::User,
    },
    store::Reference,
};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

/// Records that can be listed as table rows.
pub(crate) trait Listing {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

pub(crate) fn write_table<T: Listing>(out: &mut impl Write, records: &[T]) -> Result<(), String> {
    let mut builder = Builder::default();

    builder.push_record(T::HEADERS.iter().map(|header| (*header).to_string()));

    for record in records {
        builder.push_record(record.cells());
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    writeln!(out, "{table}").map_err(|error| error.to_string())
}

pub(crate) fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|error| format!("failed to encode output: {error}"))?;

    writeln!(out, "{json}").map_err(|error| error.to_string())
}

pub(crate) fn write_line(out: &mut impl Write, line: &str) -> Result<(), String> {
    writeln!(out, "{line}").map_err(|error| error.to_string())
}

fn names<T>(references: &[Reference<T>]) -> String {
    references
        .iter()
        .map(|reference| reference.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn flag(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

impl Listing for Technology {
    const HEADERS: &'static [&'static str] = &["id", "name", "slug", "active", "created"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.slug.clone(),
            flag(self.active),
            self.created_at.to_string(),
        ]
    }
}

impl Listing for Tutorial {
    const HEADERS: &'static [&'static str] =
        &["id", "title", "slug", "level", "published", "technologies"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.slug.clone(),
            self.level.clone(),
            flag(self.publish),
            names(&self.technologies),
        ]
    }
}

impl Listing for Formation {
    const HEADERS: &'static [&'static str] =
        &["id", "title", "slug", "published", "technologies", "default"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.slug.clone(),
            flag(self.publish),
            names(&self.technologies),
            self.default_technology
                .as_ref()
                .map(|technology| technology.name.clone())
                .unwrap_or_default(),
        ]
    }
}

impl Listing for Lesson {
    const HEADERS: &'static [&'static str] =
        &["id", "title", "duration", "formations", "tutorials"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.duration.clone(),
            names(&self.select_formations),
            names(&self.select_tutorials),
        ]
    }
}

impl Listing for Block {
    const HEADERS: &'static [&'static str] = &["id", "title", "duration", "active", "lessons"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.duration.clone(),
            flag(self.status),
            names(&self.select_lessons),
        ]
    }
}

impl Listing for Category {
    const HEADERS: &'static [&'static str] = &["id", "title"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.title.clone()]
    }
}

impl Listing for Dish {
    const HEADERS: &'static [&'static str] = &["id", "name", "price", "categories"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.price.to_string(),
            names(&self.select_categs),
        ]
    }
}

impl Listing for User {
    const HEADERS: &'static [&'static str] = &["id", "name", "surname", "email", "role", "active"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.surname.clone(),
            self.email.clone(),
            format!("{:?}", self.role).to_lowercase(),
            flag(self.status),
        ]
    }
}

impl Listing for Order {
    const HEADERS: &'static [&'static str] =
        &["id", "customer", "status", "items", "total", "delivery"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.summary.status.to_string(),
            self.items
                .iter()
                .map(|item| item.quantity)
                .sum::<u32>()
                .to_string(),
            self.summary.total_price.to_string(),
            self.summary.delivery_fee.to_string(),
        ]
    }
}
