pub mod sanitize;
pub use sanitize::{DesiredType, InputCheck, Sanitize, run_checks};

pub mod terminal;
pub use terminal::Terminal;
