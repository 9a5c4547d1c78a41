//! Fixed document template for rendered documentation pages.
//!
//! The template is deliberately static: a title, exactly one stylesheet
//! link chosen by dark mode, the documentation body, and the link bridge
//! script. Nothing else varies between pages.

use tracing::debug;

use crate::escape::escape_html;
use crate::page::Page;

/// Options the caller resolves from live config at render time.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Selects `doc-dark.css` or `doc-light.css`.
    pub dark_mode: bool,
    /// Base URL the stylesheet link resolves against.
    pub asset_root: String,
}

/// Title of every rendered page.
pub const PAGE_TITLE: &str = "Documentation";

/// JavaScript that bridges marked cross-reference links to the controller.
///
/// Clicks on `<a data-doc-word="..." data-doc-module="...">` elements are
/// intercepted and posted back as a structured search message:
/// `{"method": "search", "params": {"word": ..., "module": ...}}`.
/// Ordinary links are left alone.
pub const LINK_BRIDGE_SCRIPT: &str = r#"
(function() {
    document.addEventListener('click', function(ev) {
        var link = ev.target.closest('a[data-doc-word]');
        if (!link) {
            return;
        }
        ev.preventDefault();
        window.ipc.postMessage(JSON.stringify({
            method: 'search',
            params: {
                word: link.getAttribute('data-doc-word') || '',
                module: link.getAttribute('data-doc-module') || ''
            }
        }));
    });
})();
"#;

/// Render a raw documentation body into a complete page.
///
/// Deterministic pure function: identical `raw_doc` and options produce an
/// identical page. The body comes from the language service's own doc
/// generator and is embedded verbatim; everything interpolated around it
/// is escaped. Callers skip empty bodies entirely instead of rendering a
/// blank page.
pub fn render(raw_doc: &str, options: &RenderOptions) -> Page {
    let stylesheet = stylesheet_href(options);
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{PAGE_TITLE}</title>
<link rel="stylesheet" href="{stylesheet}">
</head>
<body>
{raw_doc}
<script>{LINK_BRIDGE_SCRIPT}</script>
</body>
</html>
"#
    );

    debug!(
        body_len = raw_doc.len(),
        dark_mode = options.dark_mode,
        "rendered documentation page"
    );

    Page {
        html,
        body: raw_doc.to_string(),
    }
}

/// Stylesheet URL for the selected variant, attribute-escaped.
fn stylesheet_href(options: &RenderOptions) -> String {
    let variant = if options.dark_mode {
        "doc-dark.css"
    } else {
        "doc-light.css"
    };
    let root = options.asset_root.trim_end_matches('/');
    escape_html(&format!("{root}/{variant}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(dark_mode: bool) -> RenderOptions {
        RenderOptions {
            dark_mode,
            asset_root: "docview://assets".into(),
        }
    }

    #[test]
    fn render_is_deterministic() {
        let body = "<h1>zip</h1><p>Compresses things.</p>";
        assert_eq!(render(body, &options(true)), render(body, &options(true)));
    }

    #[test]
    fn dark_and_light_differ_only_in_stylesheet() {
        let body = "<h1>zip</h1>";
        let dark = render(body, &options(true));
        let light = render(body, &options(false));

        assert!(dark.html.contains("doc-dark.css"));
        assert!(light.html.contains("doc-light.css"));
        assert_eq!(dark.html.replace("doc-dark.css", "doc-light.css"), light.html);
        assert_eq!(dark.body, light.body);
    }

    #[test]
    fn body_embedded_verbatim() {
        let body = r#"<p>See <a data-doc-word="unzip" data-doc-module="archive">unzip</a>.</p>"#;
        let page = render(body, &options(false));
        assert!(page.html.contains(body));
        assert_eq!(page.body, body);
    }

    #[test]
    fn template_carries_title_and_bridge_script() {
        let page = render("<p>x</p>", &options(false));
        assert!(page.html.contains("<title>Documentation</title>"));
        assert!(page.html.contains(LINK_BRIDGE_SCRIPT));
    }

    #[test]
    fn bridge_script_posts_search_messages() {
        assert!(LINK_BRIDGE_SCRIPT.contains("a[data-doc-word]"));
        assert!(LINK_BRIDGE_SCRIPT.contains("window.ipc.postMessage"));
        assert!(LINK_BRIDGE_SCRIPT.contains("method: 'search'"));
    }

    #[test]
    fn asset_root_is_attribute_escaped() {
        let page = render(
            "<p>x</p>",
            &RenderOptions {
                dark_mode: false,
                asset_root: r#"docview://a"b"#.into(),
            },
        );
        assert!(page.html.contains("docview://a&quot;b/doc-light.css"));
        assert!(!page.html.contains(r#"href="docview://a"b"#));
    }

    #[test]
    fn asset_root_trailing_slash_normalized() {
        let page = render(
            "<p>x</p>",
            &RenderOptions {
                dark_mode: true,
                asset_root: "docview://assets/".into(),
            },
        );
        assert!(page.html.contains("docview://assets/doc-dark.css"));
        assert!(!page.html.contains("assets//doc-dark.css"));
    }
}
