/// Read oracle interface
pub mod oracle;

pub use oracle::ReadOracle;
