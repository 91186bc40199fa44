pub mod commit;
pub mod help;

pub use commit::*;
pub use help::*;
