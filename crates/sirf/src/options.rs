use crate::format::MAGIC;

/// Tunables for [`Container::parse_with`](crate::Container::parse_with).
///
/// The defaults accept exactly the containers written by the SIRF packer:
/// magic must be `"SIRF"` and every name must be null-terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Magic value the container header must carry.
    pub magic: u32,

    /// If `false`, the header magic is not compared against [`magic`](Self::magic).
    pub check_magic: bool,

    /// If `false`, the byte after each name is skipped without inspection.
    pub check_terminator: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            check_magic: true,
            check_terminator: true,
        }
    }
}

impl ReadOptions {
    /// Expects `magic` instead of the default [`MAGIC`].
    pub fn with_magic(mut self, magic: u32) -> Self {
        self.magic = magic;
        self.check_magic = true;
        self
    }

    /// Accepts any magic value.
    pub fn skip_magic_check(mut self) -> Self {
        self.check_magic = false;
        self
    }

    /// Skips validation of the name terminator byte.
    pub fn skip_terminator_check(mut self) -> Self {
        self.check_terminator = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict() {
        let opts = ReadOptions::default();
        assert_eq!(opts.magic, MAGIC);
        assert!(opts.check_magic);
        assert!(opts.check_terminator);
    }

    #[test]
    fn builders_toggle_checks() {
        let opts = ReadOptions::default()
            .skip_magic_check()
            .skip_terminator_check();
        assert!(!opts.check_magic);
        assert!(!opts.check_terminator);

        let opts = opts.with_magic(0x5349_5244);
        assert_eq!(opts.magic, 0x5349_5244);
        assert!(opts.check_magic);
    }
}
