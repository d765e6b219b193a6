mod reader;
mod store;
mod types;
mod writer;

pub use reader::ConfigReader;
pub use store::ProfileStore;
pub use types::*;
pub use writer::ConfigWriter;
