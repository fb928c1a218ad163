//! # Pages
//!
//! Server-rendered HTML for the index, detail, search and browse pages.
//!
//! Every record value passes through [`escape`] before it lands in markup.
use std::fmt::Write;

use axum::http::StatusCode;
use bank::{Record, catalog::PRESIDENT};

use crate::utils::{SearchCategory, detail_path};

pub const INDEX_TITLE: &str = "Presidents Index";
pub const RESULTS_TITLE: &str = "Search Results";

const BOOTSTRAP: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    let title = escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="{BOOTSTRAP}">
</head>
<body>
<div class="container">
<nav class="my-3"><a href="/">Index</a> | <a href="/search">Search</a> | <a href="/browse">Browse</a></nav>
<h1>{title}</h1>
{body}
</div>
</body>
</html>
"#
    )
}

pub fn index_page(title: &str, pairs: &[(&str, &str)]) -> String {
    let mut body = String::from("<ul class=\"list-unstyled\">\n");
    for (id, name) in pairs {
        let _ = writeln!(
            body,
            r#"<li>{id}. <a href="{href}">{name}</a></li>"#,
            id = escape(id),
            href = escape(&detail_path(id)),
            name = escape(name),
        );
    }
    body.push_str("</ul>");

    layout(title, &body)
}

pub fn detail_page(record: &Record, ordinal: &str) -> String {
    let name = record.get(PRESIDENT).unwrap_or_default();

    let mut body = format!(
        "<p class=\"lead\">{} was the {} President of the United States.</p>\n<table class=\"table\">\n",
        escape(name),
        escape(ordinal)
    );
    for (field, value) in record.fields() {
        let _ = writeln!(
            body,
            "<tr><th>{}</th><td>{}</td></tr>",
            escape(field),
            escape(value)
        );
    }
    body.push_str("</table>");

    layout(name, &body)
}

pub fn search_page(selected: SearchCategory, text: &str, message: &str) -> String {
    let mut body = String::from("<form method=\"post\" action=\"/search\">\n<p>Choose a detail to search:</p>\n");
    for category in SearchCategory::ALL {
        let checked = if category == selected { " checked" } else { "" };
        let _ = writeln!(
            body,
            r#"<div class="form-check"><input class="form-check-input" type="radio" name="category" id="{value}" value="{value}"{checked}><label class="form-check-label" for="{value}">{label}</label></div>"#,
            value = escape(category.field()),
            label = escape(category.label()),
        );
    }
    let _ = write!(
        body,
        r#"<label for="text" class="form-label mt-3">Type full or partial text to search for:</label>
<input class="form-control" type="text" id="text" name="text" value="{text}" required>
<button class="btn btn-primary mt-3" type="submit">Search</button>
</form>
"#,
        text = escape(text),
    );
    if !message.is_empty() {
        let _ = writeln!(body, r#"<p class="alert alert-warning mt-3">{}</p>"#, escape(message));
    }

    layout("Search", &body)
}

pub fn browse_page(pairs: &[(&str, &str)]) -> String {
    let mut body = String::from(
        "<form method=\"post\" action=\"/browse\">\n<label for=\"pres_choice\" class=\"form-label\">Select from this list</label>\n<select class=\"form-select\" id=\"pres_choice\" name=\"pres_choice\">\n",
    );
    for (id, name) in pairs {
        let _ = writeln!(
            body,
            r#"<option value="{}">{}</option>"#,
            escape(id),
            escape(name)
        );
    }
    body.push_str("</select>\n<button class=\"btn btn-primary mt-3\" type=\"submit\">Search</button>\n</form>");

    layout(INDEX_TITLE, &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!("<p class=\"alert alert-danger\">{}</p>", escape(message));

    layout(title, &body)
}

#[cfg(test)]
mod tests {
    use bank::parse_records;

    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape("<script>'x'</script>"), "&lt;script&gt;&#39;x&#39;&lt;/script&gt;");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_index_links() {
        let html = index_page(INDEX_TITLE, &[("1", "George Washington"), ("2", "John Adams")]);

        assert!(html.contains("<title>Presidents Index</title>"));
        assert!(html.contains(r#"<a href="/president/1">George Washington</a>"#));
        assert!(html.contains(r#"<a href="/president/2">John Adams</a>"#));
    }

    #[test]
    fn test_detail_escapes_values() {
        let set = parse_records(
            "Presidency,President,College\n3,Thomas Jefferson,College of William & Mary\n",
        )
        .unwrap();
        let html = detail_page(&set.records()[0], "3rd");

        assert!(html.contains("<title>Thomas Jefferson</title>"));
        assert!(html.contains("Thomas Jefferson was the 3rd President"));
        assert!(html.contains("<td>College of William &amp; Mary</td>"));
    }

    #[test]
    fn test_search_form() {
        let html = search_page(SearchCategory::Occupation, "law<yer", "Sorry, no match was found.");

        assert!(html.contains(r#"value="Occupation" checked"#));
        assert!(!html.contains(r#"value="President" checked"#));
        assert!(html.contains(r#"value="law&lt;yer""#));
        assert!(html.contains("Sorry, no match was found."));
    }

    #[test]
    fn test_browse_options() {
        let html = browse_page(&[("16", "Abraham Lincoln")]);

        assert!(html.contains(r#"<select class="form-select" id="pres_choice" name="pres_choice">"#));
        assert!(html.contains(r#"<option value="16">Abraham Lincoln</option>"#));
    }
}
