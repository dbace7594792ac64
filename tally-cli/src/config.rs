use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tally_budget::CurrencyTable;

pub fn tally_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tally"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(tally_home()?.join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub budget: BudgetSection,
    /// Entries here are laid over the built-in rub/usd/eur table.
    #[serde(default = "CurrencyTable::empty")]
    pub currencies: CurrencyTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetSection {
    pub cash_limit: f64,
    pub calories_limit: f64,
    pub currency: String,
}

impl Default for BudgetSection {
    fn default() -> Self {
        Self {
            cash_limit: 1000.0,
            calories_limit: 2000.0,
            currency: "rub".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget: BudgetSection::default(),
            currencies: CurrencyTable::default(),
        }
    }
}

impl Config {
    pub fn currency_table(&self) -> CurrencyTable {
        CurrencyTable::default().merged(self.currencies.clone())
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    save_config(path, &Config::default())?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_budget::Currency;

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[budget]
cash_limit = 250.0
"#,
        )
        .unwrap();
        assert_eq!(cfg.budget.cash_limit, 250.0);
        assert_eq!(cfg.budget.calories_limit, 2000.0);
        assert_eq!(cfg.budget.currency, "rub");
        assert_eq!(cfg.currency_table(), CurrencyTable::default());
    }

    #[test]
    fn test_currency_overrides() {
        let cfg: Config = toml::from_str(
            r#"
[currencies.usd]
rate = 90.0
symbol = "$"
"#,
        )
        .unwrap();
        let table = cfg.currency_table();
        assert_eq!(table.get("usd"), Some(&Currency::new(90.0, "$")));
        assert_eq!(table.get("eur"), Some(&Currency::new(70.0, "Euro")));
    }

    #[test]
    fn test_default_config_roundtrips() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_missing_file_is_default() {
        let cfg = load_config(Path::new("/nonexistent/tally/config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
