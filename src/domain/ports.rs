use chrono::Datelike;

/// Source of the current calendar year.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Reads the year from the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    year: i32,
}

impl FixedClock {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.year
    }
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn search_query(&self) -> &str;
    fn seed_file(&self) -> Option<&str>;
}
