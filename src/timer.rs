use colored::Colorize;
use time::{Duration, PreciseTime};

fn bold_print(msg: &String) {
    println!("{}", msg.bold());
}

/// runs the callable once and returns the elapsed wall-clock time along
/// with the callable's result
pub fn run_performance_trial<T, F: FnOnce() -> T>(func: F) -> (Duration, T) {
    let start_time = PreciseTime::now();
    let result = func();
    let end_time = PreciseTime::now();
    (start_time.to(end_time), result)
}

pub struct Timer {
    start_time: PreciseTime,
    last_print_time: PreciseTime,
}

impl Timer {
    pub fn new() -> Timer {
        let now = PreciseTime::now();
        Timer {
            start_time: now,
            last_print_time: now,
        }
    }

    pub fn print(&mut self) {
        let now = PreciseTime::now();
        let elapsed = self.last_print_time.to(now);
        let total_elapsed = self.start_time.to(now);
        bold_print(&format!(
            "Timer since last print: {:.3} sec; since creation: {:.3} sec",
            elapsed.num_milliseconds() as f64 * 1e-3,
            total_elapsed.num_milliseconds() as f64 * 1e-3
        ));
        self.last_print_time = now;
    }
}

#[cfg(test)]
mod tests {
    use super::run_performance_trial;

    #[test]
    fn test_run_performance_trial() {
        let (duration, result) = run_performance_trial(|| 21 * 2);
        assert_eq!(result, 42);
        assert!(duration.num_nanoseconds().unwrap_or(0) >= 0);
    }
}
