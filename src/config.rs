use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::models::Month;

/// Runtime settings, read from the environment and then overridden by argv flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// Reference month for budgets and insights. `None` means the current month.
    pub(crate) month: Option<Month>,
    /// CSV file whose transactions replace the demo transactions.
    pub(crate) data_file: Option<PathBuf>,
    /// Seed the store with the demo transactions and budgets.
    pub(crate) demo: bool,
    /// `EnvFilter` directives from `FINDASH_LOG`.
    pub(crate) log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            month: None,
            data_file: None,
            demo: true,
            log_filter: None,
        }
    }
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(month) = lookup("FINDASH_MONTH").filter(|m| !m.trim().is_empty()) {
            config.month = Some(month.parse().context("FINDASH_MONTH")?);
        }
        config.data_file = lookup("FINDASH_DATA")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        if let Some(flag) = lookup("FINDASH_NO_DEMO") {
            config.demo = matches!(flag.trim(), "" | "0" | "false" | "no");
        }
        config.log_filter = lookup("FINDASH_LOG").filter(|f| !f.trim().is_empty());
        Ok(config)
    }

    /// Apply `--month`, `--data` and `--no-demo` and return the remaining arguments.
    pub(crate) fn apply_args(&mut self, args: &[String]) -> Result<Vec<String>> {
        let mut rest = Vec::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--month" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--month needs a value (YYYY-MM)"))?;
                    self.month = Some(value.parse()?);
                }
                "--data" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--data needs a CSV path"))?;
                    self.data_file = Some(PathBuf::from(crate::run::shellexpand(value)));
                }
                "--no-demo" => self.demo = false,
                _ => rest.push(arg.clone()),
            }
        }
        Ok(rest)
    }

    pub(crate) fn reference_month(&self) -> Month {
        self.month.unwrap_or_else(Month::current)
    }
}
