use arena_rbtree::RedBlackTree;
use log::{error, info, LevelFilter};
use rand::Rng;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use structopt::StructOpt;

/// Command line options.
#[derive(Debug, StructOpt)]
#[structopt(name = "arena-rbtree", about = "Builds a red black tree and prints its statistics.")]
pub struct Opt {
    /// Values added to the tree, in order.
    #[structopt(
        long = "values",
        use_delimiter = true,
        default_value = "15,5,1,11,14,8,22,9,3"
    )]
    values: Vec<i64>,

    /// Values removed after every value has been added.
    #[structopt(long = "remove", use_delimiter = true)]
    remove: Vec<i64>,

    /// Number of additional pseudo-random values.
    #[structopt(long = "random", default_value = "0")]
    random: usize,

    #[structopt(long = "seed", default_value = "1")]
    seed: u32,

    #[structopt(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() {
    let opts = Opt::from_args();
    if let Err(err) = TermLogger::init(
        opts.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialize logging: {}", err);
    }

    let mut tree = RedBlackTree::from_values(opts.values.iter().cloned());

    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([opts.seed, 1, 1, 1]);
    for _ in 0..opts.random {
        tree.add(rng.gen_range(-1_000_000, 1_000_000));
    }
    info!("added {} values", tree.len());

    match tree.remove_all(&opts.remove) {
        Ok(removed) => info!("removed {} of {} values", removed, opts.remove.len()),
        Err(err) => {
            error!("removal failed: {}", err);
            std::process::exit(1);
        },
    }

    let mut heights = tree.leaf_black_heights();
    heights.sort();
    heights.dedup();

    println!("count: {}", tree.len());
    match (tree.min(), tree.max()) {
        (Some(min), Some(max)) => println!("min: {}, max: {}", min, max),
        _ => println!("min: -, max: -"),
    }
    println!(
        "level order: {}",
        tree.iter().map(|value| value.to_string()).collect::<Vec<String>>().join(" "),
    );
    println!("distinct leaf black heights: {}", heights.len());
    match tree.validate() {
        Ok(height) => println!("valid, black height {}", height),
        Err(err) => {
            error!("invalid tree: {}", err);
            std::process::exit(1);
        },
    }
}
