use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Look up a stored lab by exact name or id.
    Find(FindArgs),
    /// Synthesize and persist a new lab.
    Create(CreateArgs),
    /// Return the lab with this name, creating it from the given fields if absent.
    Resolve(ResolveArgs),
    /// Full-text search over stored labs.
    Search(SearchArgs),
    /// List the tag vocabulary.
    Tags,
    /// Print JSON Schemas for lab types.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FindArgs {
    /// Lab name (matched exactly after trimming).
    #[arg(required_unless_present = "id")]
    pub name: Option<String>,

    /// Look up by lab id instead of name.
    #[arg(long, conflicts_with = "name")]
    pub id: Option<i64>,

    /// Compare names case-insensitively regardless of configuration.
    #[arg(long)]
    pub ignore_case: bool,
}

/// Lab fields other than the name.
#[derive(Clone, Debug, Default, Args)]
pub struct LabDetailArgs {
    /// What the lab works on (10-2000 characters).
    #[arg(long)]
    pub description: Option<String>,

    /// Hosting department.
    #[arg(long)]
    pub department: Option<String>,

    /// Principal investigator.
    #[arg(long)]
    pub pi: Option<String>,

    /// Lab website.
    #[arg(long)]
    pub url: Option<String>,

    /// Building or room.
    #[arg(long)]
    pub location: Option<String>,

    /// Contact email.
    #[arg(long)]
    pub email: Option<String>,

    /// Mark the lab as not accepting students.
    #[arg(long)]
    pub not_accepting: bool,

    /// Research area (repeatable).
    #[arg(long = "area", value_name = "AREA")]
    pub areas: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Lab name.
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub details: LabDetailArgs,

    /// Read all fields from a JSON file matching the `lab_fields` schema.
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["name", "description", "department", "pi", "url", "location", "email", "not_accepting", "areas"]
    )]
    pub json: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ResolveArgs {
    /// Lab name to look up, and to create under if absent.
    pub name: String,

    #[command(flatten)]
    pub details: LabDetailArgs,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Free-text query.
    pub query: String,

    /// Max results (defaults to `general.default_limit`).
    #[arg(short, long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (lab, lab_fields, tag, tag_name). Lists names when omitted.
    pub type_name: Option<String>,
}
