//! Formations

pub mod data;
pub mod records;

pub use data::NewFormation;
pub use records::{Formation, FormationId};

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        store::Reference,
        test::{TestContext, new_formation, new_technology},
    };

    #[tokio::test]
    async fn default_technology_is_labelled_like_the_list() -> TestResult {
        let ctx = TestContext::new();
        let rust = ctx
            .app
            .technologies
            .create(new_technology("Rust", true))
            .await?;

        let formation = ctx
            .app
            .formations
            .create(new_formation(
                "Backend track",
                vec![Reference::to(rust.id.clone()), Reference::to("404")],
                Some(Reference::to(rust.id.clone())),
            ))
            .await?;

        let names: Vec<_> = formation
            .technologies
            .iter()
            .map(|technology| technology.name.as_str())
            .collect();

        assert_eq!(names, vec!["Rust", ""]);
        assert_eq!(
            formation.default_technology,
            Some(Reference {
                id: rust.id,
                name: "Rust".to_string(),
            })
        );

        Ok(())
    }
}
