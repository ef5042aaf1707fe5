//! Error macros for hopgraph

/// Macro for returning a parse error at a given line
#[macro_export]
macro_rules! bail_parse {
    ($line:expr, $($arg:tt)+) => {
        return Err($crate::error::HopgraphError::parse($line, format!($($arg)+)))
    };
}

