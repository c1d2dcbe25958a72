pub const TITLE: &str = "Flow Puzzle API";
pub const DESCRIPTION: &str = "Backend API for Flow Puzzle Game";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
