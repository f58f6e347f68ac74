use perflog::log_time;

#[log_time]
fn normal_function(x: i32) -> i32 {
    x + 1
}

fn main() {
    assert_eq!(normal_function(5), 6);
}
