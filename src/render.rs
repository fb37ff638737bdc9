//! Token Rendering
//!
//! Formats scanned tokens for the command-line front end.

use crate::scanner::{join_escaped, Token};

/// Output options, filled from command-line flags
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Emit a JSON array instead of one line per token
    pub json: bool,
    /// Show raw spans instead of values in plain output
    pub raw: bool,
    /// Print the rebuilt command line only
    pub escaped: bool,
}

/// Render `tokens` according to `options`. The result has no trailing newline.
pub fn render_tokens(tokens: &[Token], options: &RenderOptions) -> Result<String, serde_json::Error> {
    if options.escaped {
        return Ok(join_escaped(tokens));
    }
    if options.json {
        return serde_json::to_string_pretty(tokens);
    }

    let lines: Vec<String> = tokens
        .iter()
        .map(|token| {
            if options.raw {
                format!("{}\t{:?}", token.kind(), token.raw())
            } else {
                format!("{}\t{}", token.kind(), token.value())
            }
        })
        .collect();
    Ok(lines.join("\n"))
}
