//! Times `sort_unstable` over slices of increasing length.
use anyhow::{ensure, Result};
use clap::Parser;
use monotime::{codec, Duration, Instant};

#[derive(Parser, Debug)]
struct Opts {
    /// Number of sorts per slice length
    #[clap(long = "iters", default_value = "1000")]
    iters: u32,

    /// Largest slice length; lengths go up by a factor of 4 starting at 1
    #[clap(long = "max-len", default_value = "256")]
    max_len: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = main_inner() {
        log::error!("Command failed.\n{:?}", e);
        std::process::exit(1);
    }
}

fn main_inner() -> Result<()> {
    let opts = Opts::parse();
    ensure!(opts.iters > 0, "`--iters` must be positive");

    let start = Instant::now();

    let mut array: Vec<usize> = (0..opts.max_len).collect();
    let mut flip = 0;
    let mut len = 1;
    while len <= opts.max_len {
        let t = Instant::now();
        for _ in 0..opts.iters {
            flip = !flip;
            array[..len].sort_unstable_by_key(|x| *x ^ flip);
        }
        let elapsed = t.elapsed();
        let per_iter = Duration::from_nanos(elapsed.as_nanos() / u64::from(opts.iters));
        log::info!("sort [{}]: {} total, {} per sort", len, elapsed, per_iter);
        len *= 4;
    }

    // Hand the start instant through the codec, as if it were persisted
    let mut buf = [0u8; codec::MAX_ENCODED_LEN];
    let num_bytes = codec::encode_into(start, &mut buf)?;
    let restored = codec::decode(&mut buf[..num_bytes])?;
    ensure!(restored == start, "{:?} was restored as {:?}", start, restored);

    log::info!(
        "Finished in {:.6}s (start instant encoded in {} byte(s))",
        restored.elapsed_secs(),
        num_bytes
    );
    Ok(())
}
