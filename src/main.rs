// sortcap: an educational integer sorting workbench

mod algorithms;
mod fileio;
mod registry;
mod report;
mod runner;
mod stats;

use std::path::Path;

use registry::SortOrder;
use runner::engine::Session;

fn usage(program: &str) {
    eprintln!("Usage: {} <numbers.txt> [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -a, --algorithm <name>   timsort | quicksort | merge-sort | bubble-sort |");
    eprintln!("                           selection-sort (default: timsort)");
    eprintln!("  -o, --order <order>      ascending | descending (default: ascending)");
    eprintln!("  -s, --save <path>        Write the sorted sequence to <path>");
    eprintln!("  -l, --list               Show the algorithm menu with explanations");
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {} numbers.txt                          # Timsort, ascending",
        program
    );
    eprintln!(
        "  {} numbers.txt -a quicksort -o descending -s sorted.txt",
        program
    );
}

fn main() {
    env_logger::init();

    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program = args.get(0).map(|s| s.as_str()).unwrap_or("sortcap");

    // The menu needs no input file
    if args.iter().any(|arg| arg == "-l" || arg == "--list") {
        println!("{}", report::render_menu());
        return;
    }

    let mut input: Option<&str> = None;
    let mut algorithm: Option<&str> = None;
    let mut order = SortOrder::Ascending;
    let mut save_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-a" | "--algorithm" | "-o" | "--order" | "-s" | "--save" => {
                i += 1;
                let value = match args.get(i) {
                    Some(value) => value.as_str(),
                    None => {
                        eprintln!("Error: Missing value for '{}'", arg);
                        eprintln!();
                        usage(program);
                        std::process::exit(1);
                    }
                };
                match arg {
                    "-a" | "--algorithm" => algorithm = Some(value),
                    "-s" | "--save" => save_path = Some(value),
                    _ => match SortOrder::resolve(value) {
                        Some(resolved) => order = resolved,
                        None => {
                            eprintln!(
                                "Error: Unknown sort order '{}' (use ascending or descending)",
                                value
                            );
                            std::process::exit(1);
                        }
                    },
                }
            }
            _ if arg.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", arg);
                eprintln!();
                usage(program);
                std::process::exit(1);
            }
            _ => {
                if input.is_some() {
                    eprintln!("Error: More than one input file given");
                    eprintln!();
                    usage(program);
                    std::process::exit(1);
                }
                input = Some(arg);
            }
        }
        i += 1;
    }

    let input = match input {
        Some(path) => path,
        None => {
            eprintln!("Error: No input file provided");
            eprintln!();
            usage(program);
            std::process::exit(1);
        }
    };

    let mut session = Session::new();

    if let Err(e) = session.load(Path::new(input)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    eprintln!("Loaded {} integers from {}.", session.numbers().len(), input);

    if let Some(name) = algorithm {
        if let Err(e) = session.select_algorithm(name) {
            eprintln!("Error: {}", e);
            eprintln!("Use --list to see the available algorithms.");
            std::process::exit(1);
        }
    }
    session.select_order(order);

    eprintln!(
        "Sorting with {} ({})...",
        session.algorithm(),
        session.order()
    );
    let rendered = match session.run() {
        Ok(result) => report::render(result),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("{}", rendered);

    if let Some(path) = save_path {
        if let Err(e) = session.save(Path::new(path)) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        eprintln!("Sorted file saved to {}.", path);
    }
}
