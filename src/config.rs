use std::convert::TryFrom;
use std::fs::OpenOptions;
use std::io::Read;
use std::path::Path;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{MyResult, StatusCode};
use crate::options::Options;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub capacity: i64,

    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    pub fn to_options(&self) -> MyResult<Options> {
        let mut opt = Options::default();
        opt.capacity = parse_capacity(self.capacity)?;
        if let Some(level) = &self.log_level {
            opt.log_level = parse_level(level)?;
        }
        Ok(opt)
    }
}

fn parse_capacity(capacity: i64) -> MyResult<usize> {
    if capacity <= 0 {
        return err!(StatusCode::InvalidArgument, "capacity must be > 0");
    }
    match usize::try_from(capacity) {
        Ok(v) => Ok(v),
        Err(_) => err!(StatusCode::InvalidArgument, "capacity is too large"),
    }
}

fn parse_level(level: &str) -> MyResult<LevelFilter> {
    match level.parse::<LevelFilter>() {
        Ok(v) => Ok(v),
        Err(_) => err!(
            StatusCode::ConfigError,
            &format!("unknown log level {:?}", level)
        ),
    }
}

pub fn from_str(s: &str) -> MyResult<Config> {
    Ok(toml::from_str(s)?)
}

pub fn from_path<T: AsRef<Path>>(path: T) -> MyResult<Config> {
    if !path.as_ref().exists() {
        return err!(StatusCode::IOError, "cannot find the config file");
    }

    let mut file = OpenOptions::new()
        .read(true)
        .write(false)
        .create(false)
        .open(path.as_ref())?;

    let mut config_str = String::new();
    file.read_to_string(&mut config_str)?;

    from_str(&config_str)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_parse() -> MyResult<()> {
        let toml_str = r#"
capacity = 64
log_level = "debug"
"#;

        let config = from_str(toml_str)?;
        let opt = config.to_options()?;
        assert_eq!(64, opt.capacity);
        assert_eq!(LevelFilter::Debug, opt.log_level);

        Ok(())
    }

    #[test]
    fn test_default_level() -> MyResult<()> {
        let opt = from_str("capacity = 3")?.to_options()?;
        assert_eq!(3, opt.capacity);
        assert_eq!(LevelFilter::Info, opt.log_level);
        Ok(())
    }

    #[test]
    fn test_bad_capacity() {
        for capacity in &["0", "-1", "-100"] {
            let config = from_str(&format!("capacity = {}", capacity)).unwrap();
            let status = config.to_options().err().unwrap();
            assert_eq!(StatusCode::InvalidArgument, status.code);
        }
    }

    #[test]
    fn test_bad_level() {
        let config = from_str("capacity = 3\nlog_level = \"loud\"").unwrap();
        let status = config.to_options().err().unwrap();
        assert_eq!(StatusCode::ConfigError, status.code);
    }

    #[test]
    fn test_malformed() {
        let status = from_str("capacity = ").err().unwrap();
        assert_eq!(StatusCode::ConfigError, status.code);
        let status = from_str("log_level = \"info\"").err().unwrap();
        assert_eq!(StatusCode::ConfigError, status.code);
    }

    #[test]
    fn test_from_path() -> MyResult<()> {
        let status = from_path("/nonexistent/contact-book.toml").err().unwrap();
        assert_eq!(StatusCode::IOError, status.code);

        let path = env::temp_dir().join(format!("contact-book-{}.toml", std::process::id()));
        fs::write(&path, "capacity = 7\n")?;
        let config = from_path(&path);
        fs::remove_file(&path)?;
        assert_eq!(7, config?.to_options()?.capacity);
        Ok(())
    }
}
