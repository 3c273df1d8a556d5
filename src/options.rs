use log::LevelFilter;

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Clone, Debug)]
pub struct Options {
    pub capacity: usize,
    pub log_level: LevelFilter,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            capacity: DEFAULT_CAPACITY,
            log_level: LevelFilter::Info,
        }
    }
}
