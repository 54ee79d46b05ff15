//! Server-rendered HTML for the converter pages.

use std::fmt::Write;

use unitconv_core::{AppResult, Category, ViewState};

use super::PageRenderer;

const STYLE: &str = r#"
  :root{--bg:#0b0c10;--card:#15171c;--text:#e8eef2;--muted:#aab4bf;--accent:#60a5fa;--error:#ef4444;}
  *{box-sizing:border-box} body{margin:0;font-family:system-ui,-apple-system,Segoe UI,Roboto,Inter,Arial,sans-serif;background:var(--bg);color:var(--text);}
  header{padding:18px 20px;border-bottom:1px solid #23262d;background:#0f1116;position:sticky;top:0}
  nav a{color:var(--muted);text-decoration:none;margin-right:14px;padding:8px 10px;border-radius:10px}
  nav a.active{background:var(--card);color:var(--text);border:1px solid #262a33}
  main{max-width:760px;margin:30px auto;padding:0 16px}
  .card{background:var(--card);border:1px solid #23262d;border-radius:16px;padding:20px;box-shadow:0 4px 20px rgba(0,0,0,.25)}
  .row{display:grid;grid-template-columns:1fr 1fr;gap:12px}
  label{font-size:14px;color:var(--muted)}
  input, select{width:100%;margin-top:6px;background:#0f1116;border:1px solid #23262d;color:var(--text);padding:12px 10px;border-radius:12px;outline:none}
  input:focus, select:focus{border-color:var(--accent)}
  button{margin-top:14px;background:var(--accent);border:none;color:#04121f;padding:12px 14px;border-radius:12px;font-weight:600;cursor:pointer}
  .result{margin-top:16px;padding:14px;border-radius:12px;background:#0f1116;border:1px dashed #2a2f39}
  .error{margin-top:12px;color:var(--error)}
  footer{margin:30px auto 40px;max-width:760px;color:var(--muted);font-size:14px;padding:0 16px}
"#;

/// Renders the single-page converter layout: navigation tabs, the form card
/// for the active category, and the result or error line.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Creates a new HTML renderer.
    pub fn new() -> Self {
        Self
    }

    fn write_nav(&self, out: &mut String, active: Category) -> std::fmt::Result {
        out.push_str("  <header>\n    <nav>\n");
        for category in Category::ALL {
            let class = if category == active {
                r#" class="active""#
            } else {
                ""
            };
            writeln!(
                out,
                r#"      <a href="{}"{}>{}</a>"#,
                category.path(),
                class,
                category.title()
            )?;
        }
        out.push_str("    </nav>\n  </header>\n");
        Ok(())
    }

    fn write_card(&self, out: &mut String, view: &ViewState) -> std::fmt::Result {
        let category = view.category;

        writeln!(out, r#"  <div class="card">"#)?;
        writeln!(out, "    <h2>{} Converter</h2>", category.title())?;
        writeln!(
            out,
            r#"    <form method="post" action="{}" target="_self" autocomplete="off" novalidate>"#,
            category.path()
        )?;
        writeln!(
            out,
            r#"      <div class="row">
        <div>
          <label for="value">Value</label>
          <input id="value" name="value" type="text" placeholder="{}" value="{}">
        </div>
        <div>
          <label>&nbsp;</label>
          <button type="submit">Convert</button>
        </div>
      </div>"#,
            escape(view.placeholder()),
            escape(&view.value)
        )?;

        writeln!(out, r#"      <div class="row">"#)?;
        self.write_select(out, "from", "From", view.units, &view.from)?;
        self.write_select(out, "to", "To", view.units, &view.to)?;
        writeln!(out, "      </div>")?;

        if let Some(message) = view.error_message() {
            writeln!(out, r#"      <div class="error">{}</div>"#, escape(&message))?;
        }
        if let Some(result) = view.formatted_result() {
            writeln!(
                out,
                r#"      <div class="result"><strong>Result:</strong> {result}</div>"#
            )?;
        }

        writeln!(out, "    </form>\n  </div>")
    }

    fn write_select(
        &self,
        out: &mut String,
        name: &str,
        label: &str,
        units: &[&str],
        selected: &str,
    ) -> std::fmt::Result {
        writeln!(out, "        <div>")?;
        writeln!(out, r#"          <label for="{name}">{label}</label>"#)?;
        writeln!(out, r#"          <select id="{name}" name="{name}">"#)?;
        for unit in units {
            let marker = if *unit == selected { " selected" } else { "" };
            writeln!(
                out,
                r#"            <option value="{unit}"{marker}>{unit}</option>"#
            )?;
        }
        writeln!(out, "          </select>")?;
        writeln!(out, "        </div>")
    }
}

impl PageRenderer for HtmlRenderer {
    fn render(&self, view: &ViewState) -> AppResult<String> {
        let mut out = String::with_capacity(4096);

        writeln!(
            out,
            r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Unit Converter</title>
<style>{STYLE}</style>
</head>
<body>"#
        )?;
        self.write_nav(&mut out, view.category)?;
        out.push_str("  <main>\n");
        self.write_card(&mut out, view)?;
        out.push_str("  </main>\n");
        writeln!(
            out,
            "  <footer>\n    <div>Server-rendered, no database. Submits to self and displays the result.</div>\n  </footer>\n</body>\n</html>"
        )?;

        Ok(out)
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
