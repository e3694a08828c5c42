//! End-to-end masking behavior: the concrete contract scenarios plus the
//! shape-invariance and membership properties.

use litmask::{
    literal_boundaries, literal_spans, strip_literals, strip_literals_with, LineMap, MaskOptions,
    ScannerBackend, SwcBackend,
};

/// Snippets used for the property checks.
const CORPUS: &[&str] = &[
    "",
    "const x = a + b;",
    r#""a" + 'b'"#,
    r#"const s = "one" + 'two';"#,
    r#"const e = "es\"caped\\";"#,
    "`x${1+1}y`",
    "const t = `a${`b${c}d`}e`;",
    "let m = `multi\nline ${x}\ntemplate`;",
    "// process.env.FOO",
    "/* multi\nline */",
    "let c = 1; /* one */ let d = 2; // two",
    "const re = /ab+c/gi;",
    "f(/[/]tricky/, 'arg')",
    "a = b / c",
    "\"unterminated",
    "'open\n'closed'",
    "const s = 'héllo👋';",
    "#!/usr/bin/env node\nconst x = 1;",
];

#[test]
fn test_strings_keep_quotes() {
    assert_eq!(strip_literals(r#""a" + 'b'"#).unwrap(), r#"" " + ' '"#);
}

#[test]
fn test_custom_fill_char() {
    let opts = MaskOptions {
        fill: '_',
        ..MaskOptions::default()
    };
    let masked = strip_literals_with(&ScannerBackend::default(), r#""a" + 'b'"#, &opts).unwrap();
    assert_eq!(masked, r#""_" + '_'"#);
}

#[test]
fn test_template_expression_survives() {
    // Backticks and template text become filler; the `1+1` stays code.
    assert_eq!(strip_literals("`x${1+1}y`").unwrap(), "    1+1   ");
}

#[test]
fn test_line_comment_fully_masked() {
    assert_eq!(strip_literals("// process.env.FOO").unwrap(), " ".repeat(18));
}

#[test]
fn test_block_comment_preserves_newline() {
    let masked = strip_literals("/* multi\nline */").unwrap();
    assert_eq!(masked, format!("{}\n{}", " ".repeat(8), " ".repeat(7)));
}

#[test]
fn test_division_leaves_source_untouched() {
    let src = "a = b / c";
    assert_eq!(strip_literals(src).unwrap(), src);
    assert!(literal_boundaries(src).unwrap().is_empty());
}

#[test]
fn test_unterminated_string_policies_differ_per_backend() {
    let src = "\"unterminated";
    // Hand scanner: best-effort, opener kept, remainder filled.
    assert_eq!(strip_literals(src).unwrap(), format!("\"{}", " ".repeat(12)));
    // Tokenizer adapter: strict rejection.
    assert!(strip_literals_with(&SwcBackend, src, &MaskOptions::default()).is_err());
}

#[test]
fn test_comment_markers_can_be_kept() {
    let opts = MaskOptions {
        keep_comment_markers: true,
        ..MaskOptions::default()
    };
    let masked = strip_literals_with(&ScannerBackend::default(), "/* note */ x", &opts).unwrap();
    assert_eq!(masked, "/*      */ x");
}

#[test]
fn test_shebang_is_masked() {
    let masked = strip_literals("#!/usr/bin/env node\nconst x = 1;").unwrap();
    assert_eq!(masked, format!("{}\nconst x = 1;", " ".repeat(19)));
}

#[test]
fn test_length_and_line_invariance() {
    for src in CORPUS {
        let masked = strip_literals(src).unwrap();
        assert_eq!(
            masked.chars().count(),
            src.chars().count(),
            "length differs for {src:?}",
        );
        assert_eq!(
            LineMap::new(&masked).line_starts(),
            LineMap::new(src).line_starts(),
            "line structure differs for {src:?}",
        );
    }
}

#[test]
fn test_rescan_stays_inside_original_regions() {
    // Masking is not a strict fixed point (string delimiters survive, so a
    // re-scan sees the same blanked strings), but it must never invent a
    // literal region outside the original ones.
    for src in CORPUS {
        let bounds = literal_boundaries(src).unwrap();
        let masked = strip_literals(src).unwrap();
        for ls in literal_spans(&masked).unwrap() {
            for offset in ls.span.start..ls.span.end {
                assert!(
                    bounds.is_literal_at(offset),
                    "re-scan escaped to offset {offset} in {src:?}",
                );
            }
        }
    }
}

#[test]
fn test_membership_matches_region_inspection() {
    let src = r#"const a = "one" + `two ${3} four`; // tail"#;
    let bounds = literal_boundaries(src).unwrap();
    let spans = literal_spans(src).unwrap();
    for offset in 0..(src.chars().count() as u32 + 2) {
        let direct = spans.iter().any(|ls| ls.span.contains(offset));
        assert_eq!(bounds.is_literal_at(offset), direct, "offset {offset}");
    }
}

#[test]
fn test_batch_masks_each_source() {
    let sources = ["const a = 'x';", "// note", "`t${v}`", "plain + code"];
    let results = litmask::strip_literals_batch(&sources);
    assert_eq!(results.len(), sources.len());
    for (src, result) in sources.iter().zip(&results) {
        let masked = result.as_ref().expect("batch entry should mask");
        assert_eq!(masked.chars().count(), src.chars().count());
    }
    assert!(!results[0].as_ref().unwrap().contains('x'));
}
