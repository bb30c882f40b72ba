mod logger;

pub use logger::Logging;
