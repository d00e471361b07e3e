use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{
    BytePos, FileName, Globals, SourceMap,
    comments::{Comment, CommentKind, SingleThreadedComments},
};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::comments::{CommentGroup, Position, SourceComments};

/// Parse JS/TS source code and collect its comment groups.
///
/// Comments are grouped the way a reader sees them: consecutive comments that are
/// separated only by whitespace containing at most one line break belong to the
/// same group. Code between two comments always ends a group.
pub fn parse_source(code: String, file_path: &str) -> Result<SourceComments> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: !is_plain_typescript(file_path),
            ..Default::default()
        });

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse source: {:?}", e))?;

        let mut all: Vec<Comment> = {
            let (leading, trailing) = comments.borrow_all();
            leading
                .values()
                .chain(trailing.values())
                .flatten()
                .cloned()
                .collect()
        };
        all.sort_by_key(|cmt| cmt.span.lo);
        all.dedup_by_key(|cmt| cmt.span.lo);

        let src: &str = &source_file.src;
        let groups = group_comments(all, src, source_file.start_pos)
            .into_iter()
            .map(|group| {
                let loc = source_map.lookup_char_pos(group[0].span.lo);
                let position = Position::new(file_path, loc.line, loc.col.0 + 1);
                let lines = group.iter().map(raw_comment_text).collect();
                CommentGroup::new(lines, position)
            })
            .collect();

        Ok(SourceComments {
            file_path: file_path.to_string(),
            groups,
        })
    })
}

/// `.ts` files cannot use JSX (`<T>x` is a type assertion there).
fn is_plain_typescript(file_path: &str) -> bool {
    matches!(
        Path::new(file_path).extension().and_then(|e| e.to_str()),
        Some("ts" | "mts" | "cts")
    )
}

/// Rebuild the comment as written, markers included.
fn raw_comment_text(cmt: &Comment) -> String {
    match cmt.kind {
        CommentKind::Line => format!("//{}", cmt.text),
        CommentKind::Block => format!("/*{}*/", cmt.text),
    }
}

/// Split position-sorted comments into groups.
fn group_comments(comments: Vec<Comment>, src: &str, start_pos: BytePos) -> Vec<Vec<Comment>> {
    let offset = |pos: BytePos| pos.0.saturating_sub(start_pos.0) as usize;

    let mut groups: Vec<Vec<Comment>> = Vec::new();
    for cmt in comments {
        let joins_previous = groups
            .last()
            .and_then(|group| group.last())
            .is_some_and(|prev| is_adjacent(src.get(offset(prev.span.hi)..offset(cmt.span.lo))));

        match groups.last_mut() {
            Some(group) if joins_previous => group.push(cmt),
            _ => groups.push(vec![cmt]),
        }
    }
    groups
}

fn is_adjacent(gap: Option<&str>) -> bool {
    gap.is_some_and(|gap| {
        gap.chars().all(char::is_whitespace) && gap.matches('\n').count() <= 1
    })
}
