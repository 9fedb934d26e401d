/// Escape text for embedding inside a `<pre>` block.
///
/// `&` must be replaced first: doing it after the other substitutions
/// would double-escape the entities they introduce.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
