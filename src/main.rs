use clap::{App, Arg};

use budg::{
    load::{self, error::Record},
    model::summary::Breakdown,
    render::table::Table,
};

fn main() {
    let matches = App::new("budg")
        .about("Budgeting income the easy way")
        .arg(
            Arg::with_name("amount")
                .help("total to budget, e.g. $1,234.56")
                .required(true),
        )
        .arg(
            Arg::with_name("plan")
                .short("p")
                .long("plan")
                .takes_value(true)
                .default_value("plan.toml")
                .help("plan file to split the total against"),
        )
        .get_matches();

    let raw = matches.value_of("amount").unwrap();
    let filename = matches.value_of("plan").unwrap();

    let mut errs = Record::new();
    let total = load::amount::parse_dollar(raw, &mut errs);
    let plan = load::read_plan(filename, &mut errs);
    print!("{}", errs);
    match plan {
        Some(plan) => {
            let summary = Breakdown::compute(&plan, total);
            print!("{}", Table::from(&summary));
        }
        None => std::process::exit(1),
    }
}
