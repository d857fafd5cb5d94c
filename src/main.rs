use clap::{clap_app, Arg};

use setcard::cardinality::{direct_union_size, inclusion_exclusion_union_size};
use setcard::program_flow::OrExit;
use setcard::simulation::generate_integer_sets;
use setcard::timer::{run_performance_trial, Timer};
use setcard::util::{extract_numeric_arg, format_integer_sets};

fn main() {
    let mut app = clap_app!(setcard =>
        (version: "0.1")
        (about: "computes the union cardinality of randomly generated integer sets, \
                 comparing the direct union against naive inclusion-exclusion")
        (@arg quiet: --quiet -q "do not print the generated test data")
    );
    app = app.arg(
        Arg::with_name("seed")
            .long("seed").takes_value(true).default_value("0")
            .help("The seed for the test data generator")
    );
    app = app.arg(
        Arg::with_name("set_count")
            .long("set-count").short("n").takes_value(true).default_value("10")
            .help("The number of sets to generate")
    );
    app = app.arg(
        Arg::with_name("set_size")
            .long("set-size").short("s").takes_value(true).default_value("10")
            .help("The number of uniform draws collected into each set")
    );
    app = app.arg(
        Arg::with_name("max_element")
            .long("max-element").short("m").takes_value(true).default_value("100")
            .help("Elements are drawn uniformly from [0, max-element]")
    );
    let matches = app.get_matches();

    let seed = extract_numeric_arg::<u64>(&matches, "seed")
        .unwrap_or_exit(Some("failed to extract seed"));
    let set_count = extract_numeric_arg::<usize>(&matches, "set_count")
        .unwrap_or_exit(Some("failed to extract set-count"));
    let set_size = extract_numeric_arg::<usize>(&matches, "set_size")
        .unwrap_or_exit(Some("failed to extract set-size"));
    let max_element = extract_numeric_arg::<i64>(&matches, "max_element")
        .unwrap_or_exit(Some("failed to extract max-element"));

    println!(
        "seed: {}\nset_count: {}\nset_size: {}\nmax_element: {}",
        seed, set_count, set_size, max_element
    );

    let sets = generate_integer_sets(seed, set_count, set_size, max_element)
        .unwrap_or_exit(Some("failed to generate the test data"));
    if !matches.is_present("quiet") {
        println!("{}", format_integer_sets(&sets));
    }

    let mut timer = Timer::new();

    // a no-op trial measuring the overhead of the harness itself
    let (overhead, _) = run_performance_trial(|| {});
    println!(
        "harness overhead (ns) = {}",
        overhead.num_nanoseconds().unwrap_or(0)
    );

    println!("\n=> computing the union cardinality via the direct union");
    let (direct_duration, direct_size) = run_performance_trial(|| direct_union_size(&sets));
    println!(
        "direct_union_size = {} ({} ns)",
        direct_size,
        direct_duration.num_nanoseconds().unwrap_or(0)
    );
    timer.print();

    println!("\n=> computing the union cardinality via inclusion-exclusion");
    let (inclusion_exclusion_duration, inclusion_exclusion_size) =
        run_performance_trial(|| inclusion_exclusion_union_size(&sets));
    println!(
        "inclusion_exclusion_union_size = {} ({} ns)",
        inclusion_exclusion_size,
        inclusion_exclusion_duration.num_nanoseconds().unwrap_or(0)
    );
    timer.print();

    if direct_size as i64 != inclusion_exclusion_size {
        eprintln!(
            "the two strategies disagree: direct union {} vs inclusion-exclusion {}",
            direct_size, inclusion_exclusion_size
        );
        std::process::exit(1);
    }
}
