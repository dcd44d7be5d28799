// Response formatting: model markdown subset -> typed blocks -> HTML.
// The subset is exactly what llm_client::prompts::FORMATTING_CONTRACT allows.

pub mod ast;
pub mod html;

pub use ast::parse;
pub use html::render_html;

/// Converts a completion into display markup.
pub fn format_response(text: &str) -> String {
    render_html(&parse(text))
}
