pub mod delimited;
pub mod json;
pub mod xlsx;
pub mod yaml;

pub use delimited::CsvWriter;
pub use json::JsonWriter;
pub use xlsx::XlsxWriter;
pub use yaml::YamlWriter;
