use anyhow::Context;
use faculty_id::FacultyId;

use super::ExitCode;

#[derive(clap::Args)]
pub struct Args {
    /// The 8-digit faculty ID to decode
    pub id: String,

    /// Print the decoded parts as JSON
    #[arg(long)]
    pub json: bool,
}

fn describe(id: &FacultyId) -> String {
    format!(
        "ID:       {}\nRole:     {} ({})\nBuilding: {} ({})\nOffice:   {}",
        id,
        id.role(),
        id.role().code(),
        id.building(),
        id.building().code(),
        id.office()
    )
}

pub fn main(args: Args) -> anyhow::Result<ExitCode> {
    let id = match faculty_id::decompose(args.id.trim()) {
        Ok(id) => id,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::InvalidId);
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&id).context("Failed to serialize faculty ID")?
        );
    } else {
        println!("{}", describe(&id));
    }
    Ok(ExitCode::Ok)
}
