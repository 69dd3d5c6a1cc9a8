/// Manifest summary command.
pub mod info;
/// Decoded value dump command.
pub mod print;
/// Directory reconciliation command.
pub mod scan;

#[cfg(test)]
mod test_support;
mod util;
