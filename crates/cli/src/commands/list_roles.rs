use faculty_id::Role;

use super::ExitCode;

#[derive(clap::Args)]
pub struct Args {}

fn role_rows() -> Vec<String> {
    Role::ALL
        .iter()
        .map(|role| format!("{:<5} | {}", role.code(), role))
        .collect()
}

pub fn main(_args: Args) -> anyhow::Result<ExitCode> {
    println!("{:<5} | {}", "Code", "Role");
    for row in role_rows() {
        println!("{row}");
    }
    Ok(ExitCode::Ok)
}
