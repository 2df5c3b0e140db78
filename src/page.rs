//! The single HTML page: a text box plus source/target language selectors.
//!
//! The same page doubles as the body for 404 and 500 responses.

use std::fmt::Write;

use crate::languages::{Language, LanguageRegistry};

/// Escape text for use inside HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn option(out: &mut String, code: &str, name: &str, selected: bool) {
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        r#"          <option value="{}"{}>{}</option>"#,
        escape_html(code),
        if selected { " selected" } else { "" },
        escape_html(name)
    );
}

/// Render the page with every table entry: all of them in the source
/// selector, all but "auto" in the target selector.
pub fn render_index(registry: &LanguageRegistry) -> String {
    let mut source_options = String::new();
    for lang in registry.list_all() {
        option(
            &mut source_options,
            lang.code,
            lang.name,
            lang.code == Language::AUTO.code(),
        );
    }

    let mut target_options = String::new();
    for lang in registry.list_targets() {
        option(
            &mut target_options,
            lang.code,
            lang.name,
            lang.code == Language::ENGLISH.code(),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Translator</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }}
    .panes {{ display: flex; gap: 1rem; }}
    .pane {{ flex: 1; display: flex; flex-direction: column; gap: .5rem; }}
    textarea {{ min-height: 12rem; font-size: 1rem; }}
    #status {{ min-height: 1.5rem; color: #555; }}
    #status.error {{ color: #b00020; }}
  </style>
</head>
<body>
  <h1>Translator</h1>
  <div class="panes">
    <div class="pane">
      <label for="source">From</label>
      <select id="source" name="source">
{source_options}      </select>
      <textarea id="text" maxlength="5000" placeholder="Enter text"></textarea>
      <button id="detect-btn" type="button">Detect language</button>
    </div>
    <div class="pane">
      <label for="target">To</label>
      <select id="target" name="target">
{target_options}      </select>
      <textarea id="output" readonly></textarea>
      <button id="translate-btn" type="button">Translate</button>
    </div>
  </div>
  <p id="status"></p>
  <script>
    const $ = (id) => document.getElementById(id);
    function showStatus(message, isError) {{
      $("status").textContent = message;
      $("status").className = isError ? "error" : "";
    }}
    async function post(path, body) {{
      const res = await fetch(path, {{
        method: "POST",
        headers: {{ "Content-Type": "application/json" }},
        body: JSON.stringify(body),
      }});
      return res.json();
    }}
    $("translate-btn").addEventListener("click", async () => {{
      const data = await post("/translate", {{
        text: $("text").value, source: $("source").value, target: $("target").value,
      }});
      if (!data.success) {{ showStatus(data.error, true); return; }}
      $("output").value = data.translated_text;
      showStatus("Detected source language: " + data.detected_language, false);
    }});
    $("detect-btn").addEventListener("click", async () => {{
      const data = await post("/detect", {{ text: $("text").value }});
      if (!data.success) {{ showStatus(data.error, true); return; }}
      const pct = Math.round(data.confidence * 100);
      showStatus("Detected language: " + data.language + " (" + pct + "% confidence)", false);
    }});
  </script>
</body>
</html>
"#
    )
}
