//! HTML rendering for the prediction form.
//!
//! One page serves both routes: `GET /` renders it with an empty result and
//! `POST /computation` renders it with the result filled in. Every user-supplied
//! string is escaped before substitution.

use super::routes::ComputationForm;

const TITLE: &str = "Polynomial regression";

/// Render the form page.
///
/// `form` echoes the submitted values back into the inputs.
pub fn render_page(form: Option<&ComputationForm>, result: &str) -> String {
    let (data, degree, xval) = form
        .map(|f| (f.input_data.as_str(), f.input_degree.as_str(), f.input_xval.as_str()))
        .unwrap_or(("", "", ""));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
</head>
<body>
<h1>{TITLE}</h1>
<p>Enter points as <code>(x1,y1),(x2,y2),...,(xn,yn)</code>, a degree of 1 or higher and the x to predict.</p>
<form action="/computation" method="post">
<label for="input_data">Data:</label>
<input type="text" id="input_data" name="input_data" value="{data}" required>
<label for="input_degree">Degree:</label>
<input type="text" id="input_degree" name="input_degree" value="{degree}" required>
<label for="input_xval">X:</label>
<input type="text" id="input_xval" name="input_xval" value="{xval}" required>
<button type="submit">Submit</button>
</form>
<p>Predicted Y: <output id="result">{result}</output></p>
</body>
</html>
"#,
        data = escape_html(data),
        degree = escape_html(degree),
        xval = escape_html(xval),
        result = escape_html(result),
    )
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Text of the `<output id="result">` element, if present.
pub fn extract_result(html: &str) -> Option<&str> {
    let open = r#"<output id="result">"#;
    let start = html.find(open)? + open.len();
    let len = html[start..].find("</output>")?;
    Some(&html[start..start + len])
}
