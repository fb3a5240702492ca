use thiserror::Error;

/// Total animation length.
pub const DURATION_MS: u32 = 2_000;
/// Time between display updates.
pub const TICK_MS: u32 = 20;

#[derive(Debug, Error, PartialEq)]
#[error("stat value {value:?} does not contain a non-negative integer")]
pub struct InvalidStat {
    pub value: String,
}

/// One milestone figure as shown on the landing page.
///
/// Built from the marketing display string (e.g. `"10,000+"`); separators and
/// the trailing "+" are stripped before animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: u64,
    pub label: String,
}

impl Stat {
    pub fn parse(display: &str, label: &str) -> Result<Stat, InvalidStat> {
        let digits: String = display.chars().filter(|c| c.is_ascii_digit()).collect();
        let value = digits.parse::<u64>().map_err(|_| InvalidStat {
            value: display.to_string(),
        })?;
        Ok(Stat {
            value,
            label: label.to_string(),
        })
    }
}

/// Interpolates from 0 to `target` over a fixed number of ticks.
///
/// Terminal state is absorbing: once the accumulator reaches the target the
/// displayed value snaps to exactly `target` and stays there. The caller owns
/// the timer; `is_done` tells it when to stop ticking.
pub struct CountUp {
    target: u64,
    increment: f64,
    count: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> CountUp {
        let steps = (duration_ms / tick_ms.max(1)).max(1);
        CountUp {
            target,
            increment: target as f64 / steps as f64,
            count: 0.0,
            done: false,
        }
    }

    /// Advances one tick and returns the value to display.
    pub fn tick(&mut self) -> u64 {
        if self.done {
            return self.target;
        }
        self.count += self.increment;
        if self.count >= self.target as f64 {
            self.done = true;
            self.target
        } else {
            self.count.floor() as u64
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Renders a number with comma thousands grouping, e.g. 10000 -> "10,000".
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_terminal(counter: &mut CountUp, max_ticks: usize) -> (Vec<u64>, usize) {
        let mut values = Vec::new();
        for ticks in 1..=max_ticks {
            values.push(counter.tick());
            if counter.is_done() {
                return (values, ticks);
            }
        }
        panic!("animation did not terminate within {} ticks", max_ticks);
    }

    #[test]
    fn terminates_at_exactly_the_target() {
        for target in [1, 7, 450, 999, 1000, 10_000, 123_457] {
            let mut counter = CountUp::new(target, DURATION_MS, TICK_MS);
            let (values, _) = run_to_terminal(&mut counter, 200);
            assert_eq!(*values.last().unwrap(), target);
        }
    }

    #[test]
    fn displayed_values_never_decrease_and_never_overshoot() {
        let mut counter = CountUp::new(450, DURATION_MS, TICK_MS);
        let (values, _) = run_to_terminal(&mut counter, 200);
        let mut previous = 0;
        for value in values {
            assert!(value >= previous);
            assert!(value <= 450);
            previous = value;
        }
    }

    #[test]
    fn reference_stat_takes_exactly_one_hundred_ticks() {
        // 2000ms / 20ms = 100 steps, increment 4.5
        let mut counter = CountUp::new(450, 2_000, 20);
        let (values, ticks) = run_to_terminal(&mut counter, 200);
        assert_eq!(ticks, 100);
        assert_eq!(*values.last().unwrap(), 450);
    }

    #[test]
    fn zero_target_is_terminal_on_first_tick() {
        let mut counter = CountUp::new(0, DURATION_MS, TICK_MS);
        assert_eq!(counter.tick(), 0);
        assert!(counter.is_done());
    }

    #[test]
    fn terminal_state_is_absorbing() {
        let mut counter = CountUp::new(42, DURATION_MS, TICK_MS);
        run_to_terminal(&mut counter, 200);
        for _ in 0..5 {
            assert_eq!(counter.tick(), 42);
            assert!(counter.is_done());
        }
    }

    #[test]
    fn grouping_inserts_comma_separators() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(450), "450");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(10_000), "10,000");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }

    #[test]
    fn parse_strips_separators_and_suffix() {
        let stat = Stat::parse("10,000+", "Nights booked").unwrap();
        assert_eq!(stat.value, 10_000);
        assert_eq!(stat.label, "Nights booked");
        assert_eq!(Stat::parse("450+", "Homes").unwrap().value, 450);
    }

    #[test]
    fn parse_rejects_digit_free_input() {
        assert!(Stat::parse("", "Homes").is_err());
        assert!(Stat::parse("soon", "Homes").is_err());
        let err = Stat::parse("N/A", "Homes").unwrap_err();
        assert_eq!(err.value, "N/A");
    }
}
