use chrono::{Datelike, Local, Months, NaiveDate};

/// A calendar month, rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::from_date)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether `date` falls in this month (same calendar year and month).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn next(&self) -> Option<Self> {
        self.first_day()
            .and_then(|d| d.checked_add_months(Months::new(1)))
            .map(Self::from_date)
    }

    pub fn prev(&self) -> Option<Self> {
        self.first_day()
            .and_then(|d| d.checked_sub_months(Months::new(1)))
            .map(Self::from_date)
    }

    /// Short English month name, e.g. "Apr".
    pub fn short_name(&self) -> String {
        self.first_day()
            .map(|d| d.format("%b").to_string())
            .unwrap_or_default()
    }
}

impl std::str::FromStr for Month {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Validate by parsing as an actual date
        NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| anyhow::anyhow!("Invalid month '{trimmed}'. Use YYYY-MM (e.g. 2024-01)"))
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
