use clap::{command, Arg, ArgAction};
use primepool::{common::Report, runner};
use slog::{info, o, Drain};
use std::time::Instant;

fn main() -> primepool::Result<()> {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    let logger = slog::Logger::root(drain, o!());

    let matches = command!()
        .about("Count the primes up to a limit on a fixed pool of workers")
        .args(&[
            Arg::new("limit")
                .long("limit")
                .value_name("LIMIT")
                .help("Upper bound of the search range")
                .required(false),
            Arg::new("chunk")
                .long("chunk")
                .value_name("CHUNK")
                .help("Size of each sub-range handed to a worker")
                .required(false),
            Arg::new("threads")
                .long("threads")
                .value_name("THREADS")
                .help("Number of workers in the pool")
                .required(false),
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the report as a JSON object"),
        ])
        .get_matches();
    let limit: u64 = matches
        .get_one::<String>("limit")
        .map_or(Ok(10_000_000), |x| x.parse())?;
    let chunk: u64 = matches
        .get_one::<String>("chunk")
        .map_or(Ok(100_000), |x| x.parse())?;
    let threads: usize = matches
        .get_one::<String>("threads")
        .map_or(Ok(num_cpus::get()), |x| x.parse())?;
    let version = std::env!("CARGO_PKG_VERSION");

    info!(
        logger,
        "version v{version}: searching up to {limit} in chunks of {chunk} \
        on {threads} workers."
    );

    let started = Instant::now();
    let primes = runner::run(limit, chunk, threads)?;
    let elapsed = started.elapsed();

    let report = Report {
        primes_found: primes.len(),
        largest_prime: primes.last().copied(),
        elapsed_ms: elapsed.as_millis() as u64,
    };

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("Found {} primes <= {}", report.primes_found, limit);
        match report.largest_prime {
            Some(p) => println!("Largest prime: {p}"),
            None => println!("Largest prime: none"),
        }
        println!("Time taken: {elapsed:?}");
    }

    Ok(())
}
