//! Inline run styling and placement shared by headings, paragraphs and list items.

use crate::elements::{PositionedText, Primitive};
use crate::interface::LayoutContext;
use crate::text::{break_lines, TextBuilder};
use crate::LayoutError;
use quire_idf::{InlineRun, StyleTag};
use quire_style::{FontSpec, Stylesheet};
use thiserror::Error;

/// Why a run's style could not be applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InlineStyleError {
    #[error("link '{0}' has no target")]
    MissingLinkTarget(String),
    #[error("link target '{0}' uses an unsupported scheme")]
    UnsupportedLinkTarget(String),
}

/// The font and link target a run is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRun {
    pub font: FontSpec,
    pub href: Option<String>,
}

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "ftp", "file"];

fn validate_href(href: &str) -> Result<(), InlineStyleError> {
    let href = href.trim();
    if href.is_empty() || href == "#" {
        return Err(InlineStyleError::MissingLinkTarget(href.to_string()));
    }
    if href.starts_with('#') {
        return Ok(());
    }
    // A scheme is the part before the first ':' when no '/', '?' or '#' precedes it.
    match href.find(':') {
        Some(colon) if !href[..colon].contains(['/', '?', '#']) => {
            let scheme = href[..colon].to_ascii_lowercase();
            if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                Ok(())
            } else {
                Err(InlineStyleError::UnsupportedLinkTarget(href.to_string()))
            }
        }
        _ => Ok(()),
    }
}

/// Maps a run's style tag onto `base`.
///
/// Any run carrying an href is drawn in the link color. A `Link` run without a
/// usable target is an error; the caller decides how to degrade.
pub fn resolve_run_style(
    run: &InlineRun,
    base: &FontSpec,
    stylesheet: &Stylesheet,
) -> Result<ResolvedRun, InlineStyleError> {
    let mut font = match run.style {
        StyleTag::Plain | StyleTag::Link | StyleTag::Strikethrough => base.clone(),
        StyleTag::Emphasis => base.clone().italic(),
        StyleTag::Strong => base.clone().bold(),
        StyleTag::StrongEmphasis => base.clone().bold().italic(),
        StyleTag::Code => base.clone().with_family(stylesheet.inline_code_family),
    };

    let href = match (&run.href, run.style) {
        (Some(href), _) => {
            validate_href(href)?;
            font = font.with_color(stylesheet.link_color.clone());
            Some(href.trim().to_string())
        }
        (None, StyleTag::Link) => return Err(InlineStyleError::MissingLinkTarget(run.text.clone())),
        (None, _) => None,
    };

    Ok(ResolvedRun { font, href })
}

/// Resolves a run, falling back to the unstyled base font when its style
/// cannot be applied.
pub fn resolve_or_plain(run: &InlineRun, base: &FontSpec, stylesheet: &Stylesheet) -> ResolvedRun {
    resolve_run_style(run, base, stylesheet).unwrap_or_else(|e| {
        log::warn!("Rendering '{}' as plain text: {}", run.text, e);
        ResolvedRun {
            font: base.clone(),
            href: None,
        }
    })
}

/// Wraps `runs` at `width` and places one line at a time at `x`, checking
/// each line against the page bottom before it is emitted.
///
/// Wrapping uses the base font over the concatenated text; each line is then
/// emitted as one `PositionedText` per style segment, positioned after the
/// measured width of the segments before it. Returns the number of lines placed.
pub fn layout_runs(
    ctx: &mut LayoutContext,
    stylesheet: &Stylesheet,
    runs: &[InlineRun],
    base: &FontSpec,
    x: f32,
    width: f32,
    line_height: f32,
) -> Result<usize, LayoutError> {
    let mut builder = TextBuilder::new();
    for run in runs {
        let resolved = resolve_or_plain(run, base, stylesheet);
        builder.push(&run.text, resolved.font, resolved.href);
    }

    let lines = break_lines(builder.content(), base, width);

    for line in &lines {
        ctx.ensure_space(line_height)?;
        let y = ctx.cursor_y();
        for segment in builder.segments_for_line(line) {
            let span = &builder.spans()[segment.span_index];
            ctx.push(Primitive::Text(PositionedText {
                x: x + segment.x_offset,
                y,
                text: segment.text,
                font: span.font.clone(),
                line_height,
                href: span.href.clone(),
            }))?;
        }
        ctx.advance_cursor(line_height);
    }
    Ok(lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_style::FontFamily;

    fn base() -> FontSpec {
        FontSpec::new(FontFamily::Helvetica, 11.0)
    }

    #[test]
    fn test_style_tags_map_to_fonts() {
        let sheet = Stylesheet::default();
        let strong = resolve_run_style(&InlineRun::styled("x", StyleTag::Strong), &base(), &sheet).unwrap();
        assert!(strong.font.is_bold() && !strong.font.is_italic());

        let both =
            resolve_run_style(&InlineRun::styled("x", StyleTag::StrongEmphasis), &base(), &sheet).unwrap();
        assert!(both.font.is_bold() && both.font.is_italic());

        let code = resolve_run_style(&InlineRun::styled("x", StyleTag::Code), &base(), &sheet).unwrap();
        assert_eq!(code.font.family, FontFamily::Courier);

        let struck =
            resolve_run_style(&InlineRun::styled("x", StyleTag::Strikethrough), &base(), &sheet).unwrap();
        assert_eq!(struck.font, base());
    }

    #[test]
    fn test_links_are_colored_and_keep_target() {
        let sheet = Stylesheet::default();
        let link = resolve_run_style(&InlineRun::link("docs", "https://example.com"), &base(), &sheet)
            .unwrap();
        assert_eq!(link.font.color, sheet.link_color);
        assert_eq!(link.href.as_deref(), Some("https://example.com"));

        let internal = resolve_run_style(&InlineRun::link("see", "#setup"), &base(), &sheet).unwrap();
        assert_eq!(internal.href.as_deref(), Some("#setup"));

        let relative = resolve_run_style(&InlineRun::link("up", "../README.md"), &base(), &sheet);
        assert!(relative.is_ok());
    }

    #[test]
    fn test_unusable_links_fall_back_to_plain() {
        let sheet = Stylesheet::default();
        let missing = InlineRun::styled("orphan", StyleTag::Link);
        assert_eq!(
            resolve_run_style(&missing, &base(), &sheet),
            Err(InlineStyleError::MissingLinkTarget("orphan".into()))
        );

        let script = InlineRun::link("click", "javascript:alert(1)");
        assert!(matches!(
            resolve_run_style(&script, &base(), &sheet),
            Err(InlineStyleError::UnsupportedLinkTarget(_))
        ));

        let fallback = resolve_or_plain(&script, &base(), &sheet);
        assert_eq!(fallback.font, base());
        assert_eq!(fallback.href, None);
    }
}
