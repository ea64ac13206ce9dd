use faculty_id::Building;

use super::ExitCode;

#[derive(clap::Args)]
pub struct Args {
    /// Filter buildings by name prefix
    #[arg(short, long)]
    pub name: Option<String>,
}

fn matching_buildings(filter_by_name: Option<&str>) -> Vec<Building> {
    let mut buildings = Building::ALL.to_vec();
    if let Some(name) = filter_by_name {
        let search_name = name.to_lowercase();
        buildings.retain(|building| building.name().to_lowercase().starts_with(&search_name));
    }
    buildings.sort_by(|a, b| Ord::cmp(a.name(), b.name()));
    buildings
}

pub fn main(args: Args) -> anyhow::Result<ExitCode> {
    println!("{:<5} | {}", "Code", "Building");
    for building in matching_buildings(args.name.as_deref()) {
        println!("{:<5} | {}", building.code(), building);
    }
    Ok(ExitCode::Ok)
}
