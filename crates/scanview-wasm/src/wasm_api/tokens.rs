//! Token List APIs
//!
//! The host drives its scanner and feeds each result to a `ScanSession`:
//!
//! ```js
//! const session = new ScanSession(model.getValue());
//! scanner.setOnError((message, length) => session.reportError(message, length));
//! while (session.pushToken(scanner.scan(), scanner.getTextPos())) {}
//! const report = JSON.parse(session.reportJson());
//! ```

use wasm_bindgen::prelude::*;

use scanview_common::LineMap;
use scanview_tokens::{ScanResults, ScannedToken};

/// Token list for one scan of the editor contents.
#[wasm_bindgen]
pub struct ScanSession {
    results: ScanResults,
    source_text: String,
    line_map: LineMap,
}

#[wasm_bindgen]
impl ScanSession {
    #[wasm_bindgen(constructor)]
    pub fn new(source_text: String) -> ScanSession {
        let line_map = LineMap::build(&source_text);
        ScanSession {
            results: ScanResults::default(),
            source_text,
            line_map,
        }
    }

    /// Record the token the scanner just returned. Returns `false` once the
    /// end of file has been recorded.
    #[wasm_bindgen(js_name = pushToken)]
    pub fn push_token(&mut self, kind: u16, end: u32) -> bool {
        self.results.push(ScannedToken::new(kind, end))
    }

    /// Record an error passed to the scanner's error callback.
    #[wasm_bindgen(js_name = reportError)]
    pub fn report_error(&mut self, message: String, length: u32) {
        self.results.push_error(message, length);
    }

    #[wasm_bindgen(getter, js_name = tokenCount)]
    pub fn token_count(&self) -> usize {
        self.results.tokens().len()
    }

    /// Formatted kind of the token at `index`.
    #[wasm_bindgen(js_name = tokenName)]
    pub fn token_name(&self, index: usize) -> Option<String> {
        self.results
            .tokens()
            .get(index)
            .map(|token| token.token.clone())
    }

    /// Editor selection for the token at `index`, as JSON.
    #[wasm_bindgen(js_name = selectionJson)]
    pub fn selection_json(&self, index: usize) -> Option<String> {
        let selection = self.results.selection(index, &self.line_map)?;
        serde_json::to_string(&selection).ok()
    }

    /// The full report (title, tokens, errors) as JSON.
    #[wasm_bindgen(js_name = reportJson)]
    pub fn report_json(&self) -> String {
        let report = self.results.report(&self.source_text);
        serde_json::to_string(&report).unwrap_or_else(|_| "null".to_string())
    }
}

/// Describe a token list given as JSON `[{"kind": .., "end": ..}]`.
///
/// Returns the report as JSON, or `null` if the tokens cannot be parsed.
#[wasm_bindgen(js_name = describeTokens)]
pub fn describe_tokens(tokens_json: &str, source_text: &str) -> String {
    let Ok(results) = ScanResults::from_json(tokens_json) else {
        return "null".to_string();
    };
    serde_json::to_string(&results.report(source_text)).unwrap_or_else(|_| "null".to_string())
}
