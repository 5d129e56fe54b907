//! The export and share panel on the detail page.
//!
//! Export links are fetched in the page, turned into a blob and saved through
//! a transient anchor named `data-file`; the outcome is reported as a toast.
//! Without scripts the link still works: the route answers with an attachment,
//! or redirects back with an error toast.
//!
//! Copy buttons write their `data-copy` value to the clipboard and show
//! "Copied!" for [`COPY_ACK`]; each button keeps its own timer.

use std::fmt::Write as _;

use crate::export::{COPY_ACK, ExportFormat, ShareLinks, download_file_name};
use crate::paths;
use crate::sections::{card, escape_html};

pub const EXPORT_OK: &str = "Content exported successfully";
pub const EXPORT_FAILED: &str = "Failed to export content";

pub fn render(content_id: &str, links: &ShareLinks) -> String {
    let mut body = String::from(r#"<div class="export-formats">"#);
    for format in ExportFormat::ALL {
        let _ = write!(
            body,
            r#"<a class="button export-link" href="{}" data-file="{}">Export {}</a>"#,
            escape_html(&paths::export(content_id, format)),
            escape_html(&download_file_name(content_id, format)),
            format.label()
        );
    }
    body.push_str("</div>");

    body.push_str(r#"<div class="share-links">"#);
    body.push_str(&copy_row("Share link", &links.share_url));
    body.push_str(&copy_row("Sitemap", &links.sitemap_url));
    body.push_str("</div>");
    body.push_str(&copy_script());
    body.push_str(&export_script());

    card("export", "Export & Share", &body)
}

fn copy_row(label: &str, value: &str) -> String {
    let value = escape_html(value);
    format!(
        r#"<div class="copy-row"><span class="label">{label}</span><code>{value}</code><button type="button" class="button copy" data-copy="{value}" data-label="Copy">Copy</button></div>"#
    )
}

fn copy_script() -> String {
    format!(
        r#"<script>
document.querySelectorAll("button.copy").forEach(function (button) {{
  var timer = null;
  button.addEventListener("click", function () {{
    navigator.clipboard.writeText(button.dataset.copy).then(function () {{
      button.textContent = "Copied!";
      clearTimeout(timer);
      timer = setTimeout(function () {{ button.textContent = button.dataset.label; }}, {ack});
    }});
  }});
}});
</script>"#,
        ack = COPY_ACK.as_millis()
    )
}

fn export_script() -> String {
    format!(
        r#"<script>
function exportToast(level, message) {{
  var box = document.getElementById("toasts");
  var toast = document.createElement("div");
  toast.className = "toast toast-" + level;
  toast.setAttribute("role", "status");
  toast.textContent = message;
  box.appendChild(toast);
  setTimeout(function () {{ toast.remove(); }}, Number(box.dataset.ttl));
}}
document.querySelectorAll("a.export-link").forEach(function (link) {{
  link.addEventListener("click", function (event) {{
    event.preventDefault();
    fetch(link.href, {{ redirect: "manual" }})
      .then(function (response) {{
        if (!response.ok) {{ throw new Error("export " + response.status); }}
        return response.blob();
      }})
      .then(function (blob) {{
        var url = URL.createObjectURL(blob);
        var anchor = document.createElement("a");
        anchor.href = url;
        anchor.download = link.dataset.file;
        document.body.appendChild(anchor);
        anchor.click();
        anchor.remove();
        URL.revokeObjectURL(url);
        exportToast("success", {ok:?});
      }})
      .catch(function () {{ exportToast("error", {failed:?}); }});
  }});
}});
</script>"#,
        ok = EXPORT_OK,
        failed = EXPORT_FAILED,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> ShareLinks {
        ShareLinks {
            share_url: "http://127.0.0.1:3000/share/c1".to_owned(),
            sitemap_url: "http://localhost:8000/api/sitemap.xml".to_owned(),
        }
    }

    #[test]
    fn offers_every_format_with_download_name() {
        let html = render("c1", &links());
        for format in ExportFormat::ALL {
            assert!(html.contains(&format!(
                r#"href="/content/c1/export/{format}" data-file="content_c1.{format}""#
            )));
        }
        assert!(!html.contains(" download="));
    }

    #[test]
    fn downloads_report_success_and_failure() {
        let html = render("c1", &links());
        assert!(html.contains("URL.createObjectURL(blob)"));
        assert!(html.contains("URL.revokeObjectURL(url)"));
        assert!(html.contains(r#"exportToast("success", "Content exported successfully")"#));
        assert!(html.contains(r#"exportToast("error", "Failed to export content")"#));
    }

    #[test]
    fn copy_buttons_carry_urls_and_revert_after_ack() {
        let html = render("c1", &links());
        assert!(html.contains(r#"data-copy="http://127.0.0.1:3000/share/c1""#));
        assert!(html.contains(r#"data-copy="http://localhost:8000/api/sitemap.xml""#));
        assert!(html.contains("}, 2000);"));
    }
}
