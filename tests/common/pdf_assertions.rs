use lopdf::{Dictionary, Document as LopdfDocument, Object};
use std::collections::HashSet;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page_num in 1..=doc.get_pages().len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

fn resolve<'a>(doc: &'a LopdfDocument, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// BaseFont names reachable from the page resources.
pub fn extract_font_names(doc: &LopdfDocument) -> HashSet<String> {
    let mut fonts = HashSet::new();
    for page_id in doc.get_pages().values() {
        let Some(fonts_dict) = doc
            .get_dictionary(*page_id)
            .ok()
            .and_then(|page| page.get(b"Resources").ok())
            .and_then(|resources| resolve(doc, resources))
            .and_then(|resources| resources.get(b"Font").ok())
            .and_then(|font| resolve(doc, font))
        else {
            continue;
        };
        for (_, font) in fonts_dict.iter() {
            if let Some(name) = resolve(doc, font)
                .and_then(|font| font.get(b"BaseFont").ok())
                .and_then(|base| base.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(name).to_string());
            }
        }
    }
    fonts
}

/// The link actions on a page as `(subtype, target)`: `("URI", uri)` or
/// `("GoTo", "")`.
pub fn link_actions(doc: &LopdfDocument, page: u32) -> Vec<(String, String)> {
    let Some(page_id) = doc.get_pages().get(&page).copied() else {
        return Vec::new();
    };
    let Ok(Object::Array(annots)) = doc
        .get_dictionary(page_id)
        .and_then(|page| page.get(b"Annots"))
    else {
        return Vec::new();
    };
    annots
        .iter()
        .filter_map(|annot| resolve(doc, annot))
        .filter_map(|annot| annot.get(b"A").ok().and_then(|a| resolve(doc, a)))
        .filter_map(|action| {
            let kind = action.get(b"S").ok()?.as_name().ok()?;
            let target = action
                .get(b"URI")
                .ok()
                .and_then(|uri| uri.as_str().ok())
                .map(|uri| String::from_utf8_lossy(uri).to_string())
                .unwrap_or_default();
            Some((String::from_utf8_lossy(kind).to_string(), target))
        })
        .collect()
}

/// Titles of the top-level outline entries, in order.
pub fn outline_titles(doc: &LopdfDocument) -> Vec<String> {
    let mut titles = Vec::new();
    let Some(mut next) = doc
        .trailer
        .get(b"Root")
        .ok()
        .and_then(|root| resolve(doc, root))
        .and_then(|catalog| catalog.get(b"Outlines").ok())
        .and_then(|outlines| resolve(doc, outlines))
        .and_then(|outlines| outlines.get(b"First").ok())
        .and_then(|first| resolve(doc, first))
    else {
        return titles;
    };
    loop {
        if let Ok(title) = next.get(b"Title").and_then(|t| t.as_str()) {
            titles.push(String::from_utf8_lossy(title).to_string());
        }
        match next.get(b"Next").ok().and_then(|n| resolve(doc, n)) {
            Some(sibling) => next = sibling,
            None => break,
        }
    }
    titles
}

/// The document information dictionary value for `key`.
pub fn info_value(doc: &LopdfDocument, key: &[u8]) -> Option<String> {
    let info = doc.trailer.get(b"Info").ok().and_then(|info| resolve(doc, info))?;
    let value = info.get(key).ok()?.as_str().ok()?;
    Some(String::from_utf8_lossy(value).to_string())
}
