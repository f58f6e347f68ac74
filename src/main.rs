use perflog::log_time;
use perflog::logging::{self, LogConfig};

/// CPU-bound example workload: repeated squaring of a seed value.
#[log_time(print_return)]
fn square_repeatedly(seed: u64, rounds: u32) -> u64 {
    let mut value = seed;
    for _ in 0..rounds {
        value = value.wrapping_mul(value).wrapping_add(1);
    }
    value
}

fn main() {
    logging::init(&LogConfig::default().with_request_id());

    let result = square_repeatedly(3, 1_000_000);
    println!("Result: {result}");
}
