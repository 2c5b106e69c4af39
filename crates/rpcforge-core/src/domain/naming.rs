//! Identifier casing helpers shared by every artifact name.
//!
//! All functions here are pure and total. They operate on `char`s rather
//! than bytes so non-ASCII identifiers survive intact, but the rules only
//! treat `.`, `_` and `-` as separators.
//!
//! | Function          | Input            | Output            |
//! |-------------------|------------------|-------------------|
//! | `to_pascal_case`  | `"order.item"`   | `"OrderItem"`     |
//! | `to_upper_snake`  | `"getOrderInfo"` | `"GET_ORDER_INFO"`|
//! | `lower_first`     | `"OrderFacade"`  | `"orderFacade"`   |
//! | `last_segment`    | `"a.b.Consts"`   | `"Consts"`        |

/// Split on `.`, `_` and `-`, upper-case the first character of every
/// non-empty segment and concatenate the segments.
///
/// The remainder of each segment is kept verbatim, so `"orderQuery"` becomes
/// `"OrderQuery"` rather than `"Orderquery"`.
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for segment in s.split(['.', '_', '-']) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

/// Convert an identifier to `UPPER_SNAKE_CASE`.
///
/// ## Rules
///
/// 1. An upper-case character directly after a lower-case one starts a new
///    word (`refundCore` → `REFUND_CORE`).
/// 2. `-` and `.` map to `_`.
/// 3. Every letter is upper-cased.
/// 4. Runs of `_` collapse to a single `_` (`a..b` → `A_B`).
pub fn to_upper_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c == '-' || c == '.' {
            push_underscore(&mut out);
            prev = Some(c);
            continue;
        }

        if c.is_uppercase() && !out.is_empty() && prev.is_some_and(char::is_lowercase) {
            push_underscore(&mut out);
        }

        if c == '_' {
            push_underscore(&mut out);
        } else {
            out.extend(c.to_uppercase());
        }
        prev = Some(c);
    }

    out
}

fn push_underscore(out: &mut String) {
    if !out.ends_with('_') {
        out.push('_');
    }
}

/// Lower-case only the first character. Empty input is returned unchanged.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Substring after the last occurrence of `delimiter`, trimmed.
///
/// Falls back to the whole input when the delimiter is empty, absent, or the
/// tail is blank. Callers holding an optional value use `Option::map`.
pub fn last_segment<'a>(s: &'a str, delimiter: &str) -> &'a str {
    if delimiter.is_empty() {
        return s;
    }

    match s.rfind(delimiter) {
        Some(idx) => {
            let tail = s[idx + delimiter.len()..].trim();
            if tail.is_empty() { s } else { tail }
        }
        None => s,
    }
}

/// Everything before the last `.`; empty when there is no namespace part.
pub fn namespace_of(fq_name: &str) -> &str {
    fq_name.rfind('.').map_or("", |idx| &fq_name[..idx])
}

/// Map a dotted namespace onto a relative directory path (`a.b.c` → `a/b/c`).
pub fn namespace_to_path(namespace: &str) -> std::path::PathBuf {
    namespace
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ---------------------------------------------------------------------
    // to_pascal_case
    // ---------------------------------------------------------------------

    #[test]
    fn pascal_splits_on_all_separators() {
        assert_eq!(to_pascal_case("order"), "Order");
        assert_eq!(to_pascal_case("order.item"), "OrderItem");
        assert_eq!(to_pascal_case("order_item-detail"), "OrderItemDetail");
    }

    #[test]
    fn pascal_skips_empty_segments() {
        assert_eq!(to_pascal_case("..a__b--c."), "ABC");
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("._-"), "");
    }

    #[test]
    fn pascal_keeps_segment_tail_verbatim() {
        assert_eq!(to_pascal_case("queryOrderInfo"), "QueryOrderInfo");
        assert_eq!(to_pascal_case("airlineconfig"), "Airlineconfig");
    }

    // ---------------------------------------------------------------------
    // to_upper_snake
    // ---------------------------------------------------------------------

    #[test]
    fn upper_snake_detects_camel_humps() {
        assert_eq!(to_upper_snake("refundCore"), "REFUND_CORE");
        assert_eq!(to_upper_snake("getOrderInfo"), "GET_ORDER_INFO");
    }

    #[test]
    fn upper_snake_maps_separators() {
        assert_eq!(to_upper_snake("refund.core"), "REFUND_CORE");
        assert_eq!(to_upper_snake("refund-core"), "REFUND_CORE");
        assert_eq!(to_upper_snake("Order_query"), "ORDER_QUERY");
    }

    #[test]
    fn upper_snake_collapses_runs() {
        assert_eq!(to_upper_snake("a..b"), "A_B");
        assert_eq!(to_upper_snake("a_-.b"), "A_B");
        assert_eq!(to_upper_snake("Order__query"), "ORDER_QUERY");
    }

    #[test]
    fn upper_snake_mixed_separators_and_humps() {
        assert_eq!(to_upper_snake("AirlineConfig_queryList"), "AIRLINE_CONFIG_QUERY_LIST");
        assert_eq!(to_upper_snake("order.itemDetail"), "ORDER_ITEM_DETAIL");
    }

    #[test]
    fn upper_snake_does_not_split_acronyms() {
        // Only lower→upper transitions start a word.
        assert_eq!(to_upper_snake("HTTPServer"), "HTTPSERVER");
    }

    #[test]
    fn upper_snake_empty() {
        assert_eq!(to_upper_snake(""), "");
    }

    // ---------------------------------------------------------------------
    // lower_first / last_segment
    // ---------------------------------------------------------------------

    #[test]
    fn lower_first_only_touches_first_char() {
        assert_eq!(lower_first("TreasureServiceProxy"), "treasureServiceProxy");
        assert_eq!(lower_first("a"), "a");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn last_segment_takes_tail() {
        assert_eq!(
            last_segment("com.example.biz.constants.TreasureServiceConstants", "."),
            "TreasureServiceConstants"
        );
    }

    #[test]
    fn last_segment_falls_back_to_input() {
        assert_eq!(last_segment("NoDots", "."), "NoDots");
        assert_eq!(last_segment("trailing.", "."), "trailing.");
        assert_eq!(last_segment("a.b", ""), "a.b");
        assert_eq!(last_segment("", "."), "");
    }

    #[test]
    fn last_segment_propagates_absence() {
        let missing: Option<&str> = None;
        assert_eq!(missing.map(|s| last_segment(s, ".")), None);
    }

    #[test]
    fn namespace_helpers() {
        assert_eq!(namespace_of("a.b.Proxy"), "a.b");
        assert_eq!(namespace_of("Proxy"), "");
        assert_eq!(namespace_to_path("com.acme.x"), PathBuf::from("com/acme/x"));
    }
}
