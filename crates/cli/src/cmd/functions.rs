//! Functions command implementation.

use tabled::{settings::Style, Table, Tabled};

use crate::functions::BUILTINS;

#[derive(Tabled)]
struct FunctionRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

pub fn run() {
    let rows: Vec<FunctionRow> = BUILTINS
        .iter()
        .map(|b| FunctionRow { name: b.name, description: b.description })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
}
