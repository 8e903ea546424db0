use scraper::{ElementRef, Node};

const BLOCK_TAGS: [&str; 17] = [
    "p", "div", "li", "ol", "ul", "h1", "h2", "h3", "h4", "h5", "h6", "section", "article",
    "tr", "table", "blockquote", "pre",
];

fn is_block(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

/// Append the text of `el` to `out`, writing `\n` for `<br>` and around
/// block-level descendants.
pub(super) fn push_block_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                let tag = element.name();
                if tag == "br" {
                    out.push('\n');
                    continue;
                }
                if matches!(tag, "script" | "style" | "noscript") {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    let block = is_block(tag);
                    if block {
                        out.push('\n');
                    }
                    push_block_text(child_el, out);
                    if block {
                        out.push('\n');
                    }
                }
            }
            _ => {}
        }
    }
}
