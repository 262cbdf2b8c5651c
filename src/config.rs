/// Configuration for a resolution run.
///
/// The core reports conflicts as advisory data; `strict` makes the outer
/// analysis layer fail on any conflict instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub strict: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }
}
