use pharmscan::engine::config::DEFAULT_PHARMACOPHORE_SIZE;

pub struct DefaultsConfig {
    pub pharmacophore_size: usize,
    pub top_n: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            pharmacophore_size: DEFAULT_PHARMACOPHORE_SIZE,
            top_n: 10,
        }
    }
}
