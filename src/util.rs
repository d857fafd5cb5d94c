use std::fmt;
use std::str::FromStr;

use clap::ArgMatches;
use num::integer::Integer;

use crate::set::IntegerSet;

pub fn extract_str_arg(matches: &ArgMatches, arg_name: &str) -> String {
    match matches.value_of(arg_name) {
        Some(value) => value.to_string(),
        None => {
            eprintln!("the argument {} is required", arg_name);
            std::process::exit(1);
        }
    }
}

pub fn extract_numeric_arg<T: FromStr>(matches: &ArgMatches, arg_name: &str) -> Result<T, String>
where
    <T as FromStr>::Err: fmt::Display,
{
    extract_str_arg(matches, arg_name)
        .parse::<T>()
        .map_err(|why| format!("failed to parse the argument {}: {}", arg_name, why))
}

/// renders the collection as a bracketed dump, one set per line
pub fn format_integer_sets<E: Integer + Copy + fmt::Display>(sets: &[IntegerSet<E>]) -> String {
    let mut out = String::from("[\n");
    for set in sets.iter() {
        out.push_str("  {");
        for element in set.elements().iter() {
            out.push_str(&format!("{},", element));
        }
        out.push_str("},\n");
    }
    out.push(']');
    out
}
