use perflog::log_time;

#[log_time(level = "warn", print_return)]
fn labelled(x: i32) -> i32 {
    x * 3
}

#[log_time(level = "TRACE")]
fn case_insensitive_level(x: i32) -> i32 {
    x
}

fn main() {
    assert_eq!(labelled(2), 6);
    assert_eq!(case_insensitive_level(1), 1);
}
