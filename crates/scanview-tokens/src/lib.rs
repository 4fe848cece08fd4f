//! Token list model for the scanview token visualizer.
//!
//! The host runs the TypeScript scanner and reports each token as a kind and
//! an end offset. This crate turns that stream into the list the visualizer
//! shows:
//! - `ScannedToken` - one `(kind, end)` pair as reported by the host
//! - `TokenInfo` - a token with its formatted kind name
//! - `ScanResults` - the token list, scan errors, spans and selections

pub mod scan_results;
pub use scan_results::{ScanError, ScanReport, ScanResults, ScannedToken, TokenInfo, TokenReport, TokenSpan};
