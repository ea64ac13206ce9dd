use anyhow::Context;
use faculty_id::{Building, FacultyId, OfficeNumber, Role};
use log::debug;

use super::ExitCode;

#[derive(clap::Args)]
pub struct Args {
    /// Role of the ID holder (e.g. "manager", "dean", "professor")
    #[arg(short, long)]
    pub role: Role,

    /// Building whose access rules apply
    #[arg(short, long)]
    pub building: Building,

    /// Three-digit office number (e.g. 215, 001)
    #[arg(short, long)]
    pub office: OfficeNumber,

    /// Print the ID and its parts as JSON
    #[arg(long)]
    pub json: bool,
}

fn render(id: &FacultyId, json: bool) -> anyhow::Result<String> {
    if json {
        serde_json::to_string_pretty(id).context("Failed to serialize faculty ID")
    } else {
        Ok(format!("Your ID number is {id}"))
    }
}

pub fn main(args: Args) -> anyhow::Result<ExitCode> {
    debug!(
        "Composing ID for role {}, building {}, office {}",
        args.role, args.building, args.office
    );
    let id = faculty_id::compose(args.role, args.building, args.office);
    println!("{}", render(&id, args.json)?);
    Ok(ExitCode::Ok)
}
