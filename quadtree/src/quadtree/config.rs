#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Unused by partitioning.
    pub min_block_size: usize,
    pub max_block_size: usize,
}

impl Config {
    pub const MIN_BLOCK_SIZE: usize = 10;
    pub const MAX_BLOCK_SIZE: usize = 1000;

    pub fn with_max_block_size(max_block_size: usize) -> Self {
        Config {
            max_block_size,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_block_size: Self::MIN_BLOCK_SIZE,
            max_block_size: Self::MAX_BLOCK_SIZE,
        }
    }
}
