use html_escape::encode_text;

/// Shared document shell. Every page loads the client controllers; they only
/// activate when their data hooks are present in the markup.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
        <html lang=\"en\">\n\
        <head>\n\
        <meta charset=\"utf-8\">\n\
        <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
        <title>{} | Resto Reviews</title>\n\
        <link rel=\"stylesheet\" href=\"/assets/css/site.css\">\n\
        <script defer src=\"/assets/js/infinite_scroll.js\"></script>\n\
        <script defer src=\"/assets/js/inline_modal.js\"></script>\n\
        </head>\n\
        <body>\n\
        <main>\n{}\n</main>\n\
        </body>\n\
        </html>\n",
        encode_text(title),
        body
    )
}
