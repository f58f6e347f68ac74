use perflog::log_time;
use std::fmt::Debug;

#[log_time]
fn print_and_return<T: Debug>(x: T) -> T {
    x
}

#[log_time]
fn combine<T, U>(t: T, u: U) -> String
where
    T: Debug,
    U: Debug,
{
    format!("{t:?}{u:?}")
}

fn main() {
    assert_eq!(print_and_return(123), 123);
    assert_eq!(print_and_return("test"), "test");
    assert_eq!(combine(42, "x"), "42\"x\"");
}
