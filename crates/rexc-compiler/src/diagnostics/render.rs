//! Snippet rendering for parse errors.

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::ParseError;

/// Render a parse error as an annotated source excerpt.
///
/// `path` labels the snippet when the pattern came from a file.
pub fn render_error(source: &str, err: &ParseError, path: Option<&str>) -> String {
    render_with(Renderer::plain(), source, err, path)
}

/// Same as [`render_error`], with ANSI styling.
pub fn render_error_colored(source: &str, err: &ParseError, path: Option<&str>) -> String {
    render_with(Renderer::styled(), source, err, path)
}

fn render_with(renderer: Renderer, source: &str, err: &ParseError, path: Option<&str>) -> String {
    let range = visible_range(err.range, source.len());

    let mut snippet = Snippet::source(source).line_start(1).annotation(
        AnnotationKind::Primary
            .span(range.clone())
            .label(&err.message),
    );

    if let Some(p) = path {
        snippet = snippet.path(p);
    }

    if let Some(related) = &err.related {
        snippet = snippet.annotation(
            AnnotationKind::Context
                .span(visible_range(related.range, source.len()))
                .label(&related.message),
        );
    }

    let mut report: Vec<Group> = vec![Level::ERROR.primary_title(&err.message).element(snippet)];

    if let Some(fix) = &err.fix {
        report.push(
            Level::HELP.secondary_title(&fix.description).element(
                Snippet::source(source)
                    .line_start(1)
                    .patch(Patch::new(range, &fix.replacement)),
            ),
        );
    }

    renderer.render(&report).to_string()
}

/// Zero-width ranges are widened to one byte so the caret is visible.
fn visible_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
