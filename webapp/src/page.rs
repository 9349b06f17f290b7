//! HTML for the link listing, the not-found page and the LOCKSS manifest.

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn document(title: &str, heading: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
 <head>
  <title>{}</title>
 </head>
 <body>
  <h1>{}</h1>
{body}
 </body>
</html>
"#,
        escape(title),
        escape(heading),
    )
}

pub fn links(collection: &str, urls: &[String]) -> String {
    let items: String = urls
        .iter()
        .map(|url| {
            let url = escape(url);
            format!("    <li><a href=\"{url}\">{url}</a></li>\n")
        })
        .collect();
    let body = format!("  <p>\n   <ul>\n{items}   </ul>\n  </p>");
    document(collection, &format!("Links for {collection}"), &body)
}

pub fn no_records(collection: &str) -> String {
    let body = format!(
        "  <p>The requested collection, \"{}\", contained no matching records.</p>",
        escape(collection)
    );
    document("No Matching Records", "Error!", &body)
}

pub fn failure(collection: &str, message: &str) -> String {
    let body = format!(
        "  <p>Could not list the collection \"{}\": {}</p>",
        escape(collection),
        escape(message)
    );
    document("Harvest Failed", "Error!", &body)
}

pub fn manifest(collection: &str) -> String {
    let collection_html = escape(collection);
    let body = format!(
        "  <p>LOCKSS system has permission to collect, preserve, and serve this Archival Unit.</p>\n  \
         <p><a href=\"/{collection_html}\">Links for {collection_html}</a></p>"
    );
    document(&format!("Manifest for {collection}"), &format!("Manifest for {collection}"), &body)
}
