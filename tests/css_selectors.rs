//! CSS selector expressions end-to-end, plus translator robustness.

use markup_finder::{
    CssTranslator, DocumentKind, ElementFinder, ExpressionTranslator, TranslateError,
};
use proptest::prelude::*;
use std::rc::Rc;

const PAGE: &str = r#"
<div id="nav">
  <a href="/home" class="item current">home</a>
  <a href="/about" class="item">about</a>
</div>
<div id="footer">
  <a href="/legal">legal</a>
</div>
"#;

fn css_finder(markup: &str) -> ElementFinder {
    ElementFinder::new(markup, DocumentKind::Html, Rc::new(CssTranslator)).unwrap()
}

#[test]
fn class_selector_matches_one_of_many_classes() {
    let page = css_finder(PAGE);
    let current = page.value("a.current").unwrap();
    assert_eq!(current.items(), ["home"]);
}

#[test]
fn id_and_descendant_selector() {
    let page = css_finder(PAGE);
    let nav_links = page.value("#nav a").unwrap();
    assert_eq!(nav_links.items(), ["home", "about"]);
}

#[test]
fn child_combinator() {
    let page = css_finder(PAGE);
    let links = page.value("#footer > a").unwrap();
    assert_eq!(links.items(), ["legal"]);
}

#[test]
fn attribute_selector() {
    let page = css_finder(PAGE);
    let about = page.value("a[href='/about']").unwrap();
    assert_eq!(about.items(), ["about"]);
}

#[test]
fn selector_group_unions_results() {
    let page = css_finder(PAGE);
    let links = page.value("#nav a.current, #footer a").unwrap();
    assert_eq!(links.len(), 2);
}

#[test]
fn sub_finders_inherit_the_translator() {
    let page = css_finder(PAGE);
    let divs = page.object("div").unwrap();
    assert_eq!(divs.len(), 2);
    // CSS selector keeps working inside the nested finder
    let first_links = divs.first().unwrap().value("a").unwrap();
    assert_eq!(first_links.items(), ["home", "about"]);
}

#[test]
fn unsupported_selector_reports_translate_error() {
    let page = css_finder(PAGE);
    let err = page.value("a:first-child").unwrap_err();
    assert!(err.to_string().contains(":first-child"));
}

proptest! {
    #[test]
    fn translator_never_panics(expression in ".{0,48}") {
        let _ = CssTranslator.to_xpath(&expression);
    }

    #[test]
    fn bare_tags_translate_to_descendant_axis(tag in "[a-z][a-z0-9]{0,8}") {
        let xpath = CssTranslator.to_xpath(&tag).unwrap();
        prop_assert_eq!(xpath, format!("//{}", tag));
    }

    #[test]
    fn ids_translate_to_id_predicates(id in "[a-z][a-z0-9_-]{0,8}") {
        let xpath = CssTranslator.to_xpath(&format!("#{id}")).unwrap();
        prop_assert_eq!(xpath, format!("//*[@id='{}']", id));
    }
}

#[test]
fn blank_expression_is_rejected_by_both_translators() {
    assert_eq!(
        CssTranslator.to_xpath(" "),
        Err(TranslateError::EmptyExpression)
    );
}
