//! Properties that must hold for every offset of a corpus of well-nested
//! buffers. String literals in the corpus hold no delimiters, since the
//! backward scans do not skip over strings.

use pretty_assertions::assert_eq;
use sexpedit_engine::{
    Delimiter, Form, Span, Text, barf_forward, editing, enclosing_list, scanning, slurp_forward,
};

const CORPUS: &[&str] = &[
    "(foo (bar) baz)",
    "(foo (bar baz) qux)",
    "(defn add [a b]\n  (+ a b))\n\n(add 1 2)",
    "(let [m {:a 1 :b [2 3]}]\n  (get-in m [:b 0]))",
    "(str \"a b\" \"c\" d)",
    "[(x) (y (z w)) ]",
    "{:k (f) :v \"s\"} tail",
    "(a(b)(c))",
    "(()) ( ) []",
    "top level atoms only",
];

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn slurp_is_a_noop_at_top_level() {
    for text in CORPUS {
        for offset in 0..=text.chars().count() {
            if enclosing_list(text, offset).is_none() {
                assert_eq!(slurp_forward(text, offset), None, "{text:?} @ {offset}");
                assert_eq!(barf_forward(text, offset), None, "{text:?} @ {offset}");
            }
        }
    }
}

#[test]
fn slurp_moves_one_delimiter_without_changing_length() {
    for text in CORPUS {
        let len = text.chars().count();
        for offset in 0..=len {
            if let Some(patch) = slurp_forward(text, offset) {
                assert_eq!(patch.text.chars().count(), len, "{text:?} @ {offset}");
                assert_eq!(patch.offset, offset);
            }
        }
    }
}

#[test]
fn barf_adds_at_most_one_separator() {
    for text in CORPUS {
        let len = text.chars().count();
        for offset in 0..=len {
            if let Some(patch) = barf_forward(text, offset) {
                let new_len = patch.text.chars().count();
                assert!(
                    new_len == len || new_len == len + 1,
                    "{text:?} @ {offset} -> {:?}",
                    patch.text
                );
                assert_eq!(patch.offset, offset);
            }
        }
    }
}

#[test]
fn slurp_grows_the_enclosing_list_past_the_sibling() {
    for text in CORPUS {
        let buf = Text::new(text);
        for offset in 0..=buf.len() {
            let Some(patch) = slurp_forward(text, offset) else {
                continue;
            };
            let (list, _) = scanning::enclosing_list(&buf, offset).unwrap();
            let sibling = scanning::sibling_after(&buf, list.end).unwrap().span();

            let grown = enclosing_list(&patch.text, patch.offset).unwrap();
            assert!(
                grown.end >= sibling.end,
                "{text:?} @ {offset}: {grown:?} vs sibling {sibling:?}"
            );
        }
    }
}

#[test]
fn barf_shrinks_the_enclosing_list_by_at_least_the_child() {
    for text in CORPUS {
        let buf = Text::new(text);
        for offset in 0..=buf.len() {
            let Some(patch) = barf_forward(text, offset) else {
                continue;
            };
            let (list, _) = scanning::enclosing_list(&buf, offset).unwrap();
            let child = scanning::last_child_of(&buf, list).unwrap().span();
            let new_close = buf.skip_whitespace_backward(child.start).unwrap() + 1;
            // only offsets that stay inside the shortened list
            if offset > new_close {
                continue;
            }

            let shrunk = enclosing_list(&patch.text, patch.offset).unwrap();
            assert!(
                shrunk.end <= list.end - child.len(),
                "{text:?} @ {offset}: {shrunk:?} vs {list:?} minus {child:?}"
            );
        }
    }
}

#[test]
fn enclosing_list_spans_are_matching_pairs() {
    for text in CORPUS {
        let cs = chars(text);
        for offset in 0..=cs.len() {
            let Some(Span { start, end }) = enclosing_list(text, offset) else {
                continue;
            };
            assert!(start < offset && offset <= end, "{text:?} @ {offset}");
            let kind = Delimiter::from_open(cs[start]).unwrap();
            assert_eq!(cs[end - 1], kind.close(), "{text:?} @ {offset}");
        }
    }
}

#[test]
fn next_form_never_returns_empty_spans() {
    for text in CORPUS {
        let buf = Text::new(text);
        for from in 0..=buf.len() {
            if let Some(form) = scanning::next_form(&buf, from) {
                assert!(!form.span().is_empty(), "{text:?} from {from}");
                if let Form::List(span, kind) = form {
                    assert_eq!(buf.get(span.start), Some(kind.open()));
                    assert_eq!(buf.get(span.end - 1), Some(kind.close()));
                }
            }
        }
    }
}

#[test]
fn commands_match_free_functions() {
    for text in CORPUS {
        let buf = Text::new(text);
        for offset in 0..=buf.len() {
            assert_eq!(
                editing::Cmd::SlurpForward.apply(&buf, offset),
                slurp_forward(text, offset)
            );
            assert_eq!(
                editing::Cmd::BarfForward.apply(&buf, offset),
                barf_forward(text, offset)
            );
        }
    }
}
