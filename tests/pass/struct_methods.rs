use perflog::log_time;

struct Calculator {
    base: f64,
}

impl Calculator {
    #[log_time]
    pub fn compute(&self, factor: f64) -> f64 {
        self.base * factor
    }

    #[log_time(print_return)]
    pub fn reset(&mut self) {
        self.base = 0.0;
    }
}

fn main() {
    let mut calc = Calculator { base: 2.0 };
    assert_eq!(calc.compute(3.0), 6.0);
    calc.reset();
    assert_eq!(calc.base, 0.0);
}
