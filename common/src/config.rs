/// Target that carries raw report lines rather than log messages.
pub const PRINT_TARGET: &str = "rackmap::print";

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Strips colors from every line written to the terminal.
    pub no_color: bool,
    /// Skips the banner printed before the first header.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// `1` hides info logs and headers, `2` also hides warnings. Report lines
    /// themselves are always printed.
    pub quiet: u8,
}

impl Config {
    /// Default `EnvFilter` directive for the configured quiet level.
    pub fn log_filter(&self) -> String {
        let level = match self.quiet {
            0 => "info",
            1 => "warn",
            _ => "error",
        };
        format!("{level},{PRINT_TARGET}=info")
    }
}
