use std::io::Write;

use backoffice_app::{
    ids::TypedId,
    store::{CollectionService, Entity},
    validation::{Validate, validate_record},
};
use clap::{Args, Subcommand};

use super::{
    input::{merge_top_level, read_json},
    output::{Listing, write_json, write_line, write_table},
};

#[derive(Debug, Args)]
pub(crate) struct CollectionCommand {
    #[command(subcommand)]
    command: CollectionSubcommand,
}

#[derive(Debug, Subcommand)]
enum CollectionSubcommand {
    /// List every record
    List,

    /// Show one record as JSON
    Get(IdArgs),

    /// Add a record from a JSON draft
    Add(AddArgs),

    /// Overwrite fields of a record with a JSON object
    Edit(EditArgs),

    /// Delete a record
    Delete(IdArgs),

    /// Replace the image of a record
    SetImage(SetImageArgs),
}

#[derive(Debug, Args)]
struct IdArgs {
    /// Record id
    #[arg(long)]
    id: String,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Draft as inline JSON or `@path`
    #[arg(long)]
    json: String,
}

#[derive(Debug, Args)]
struct EditArgs {
    /// Record id
    #[arg(long)]
    id: String,

    /// Fields to replace, as inline JSON or `@path`
    #[arg(long)]
    json: String,
}

#[derive(Debug, Args)]
struct SetImageArgs {
    /// Record id
    #[arg(long)]
    id: String,

    /// Image URI or inline-encoded blob
    #[arg(long)]
    image: String,
}

pub(crate) async fn run<E>(
    command: CollectionCommand,
    service: &dyn CollectionService<E>,
    out: &mut impl Write,
) -> Result<(), String>
where
    E: Entity + Listing,
{
    match command.command {
        CollectionSubcommand::List => {
            let records = service.list().await;

            if records.is_empty() {
                return write_line(out, &format!("no {} records", E::COLLECTION));
            }

            write_table(out, &records)
        }
        CollectionSubcommand::Get(args) => {
            let record = service
                .get(TypedId::from(args.id.as_str()))
                .await
                .ok_or_else(|| not_found::<E>(&args.id))?;

            write_json(out, &record)
        }
        CollectionSubcommand::Add(args) => {
            let draft: E::Draft = serde_json::from_value(read_json(&args.json)?)
                .map_err(|error| format!("invalid {} draft: {error}", E::COLLECTION))?;

            draft.validate().map_err(|error| error.to_string())?;

            let record = service
                .create(draft)
                .await
                .map_err(|error| format!("failed to add record: {error}"))?;

            write_json(out, &record)
        }
        CollectionSubcommand::Edit(args) => {
            let id = TypedId::<E>::from(args.id.as_str());

            let current = service
                .get(id.clone())
                .await
                .ok_or_else(|| not_found::<E>(&args.id))?;

            let current = serde_json::to_value(current)
                .map_err(|error| format!("failed to encode record: {error}"))?;

            let record: E = serde_json::from_value(merge_top_level(current, read_json(&args.json)?)?)
                .map_err(|error| format!("invalid {} record: {error}", E::COLLECTION))?;

            validate_record(&record).map_err(|error| error.to_string())?;

            let updated = service
                .update(id, record)
                .await
                .map_err(|error| format!("failed to edit record: {error}"))?
                .ok_or_else(|| not_found::<E>(&args.id))?;

            write_json(out, &updated)
        }
        CollectionSubcommand::Delete(args) => {
            let deleted = service
                .delete(TypedId::from(args.id.as_str()))
                .await
                .map_err(|error| format!("failed to delete record: {error}"))?;

            if deleted {
                write_line(out, &format!("deleted {} {}", E::COLLECTION, args.id))
            } else {
                write_line(out, &not_found::<E>(&args.id))
            }
        }
        CollectionSubcommand::SetImage(args) => {
            let updated = service
                .set_image(TypedId::from(args.id.as_str()), args.image)
                .await
                .map_err(|error| format!("failed to set image: {error}"))?
                .ok_or_else(|| not_found::<E>(&args.id))?;

            write_json(out, &updated)
        }
    }
}

fn not_found<E: Entity>(id: &str) -> String {
    format!("no {} record with id {id}", E::COLLECTION)
}
