use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::{Value, json};

pub const ENDPOINT: &str = "https://api.platform.opentargets.org/api/v4/graphql";

pub const TARGET_LINK_BASE: &str = "https://en.wikipedia.org/wiki";

pub const ASSOCIATIONS_QUERY: &str = r#"query lungCarcinomaAssociatedTargets {
  disease(efoId: "EFO_0001071") {
    id
    name
    associatedTargets(page: { index: 0, size: 10 }) {
      count
      rows {
        target {
          id
          approvedSymbol
          approvedName
        }
        score
        datatypeScores {
          id
          score
        }
      }
    }
  }
}"#;

// Path segments and reserved characters are escaped, spaces become %20.
const LINK_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn request_body() -> Value {
    json!({ "query": ASSOCIATIONS_QUERY })
}

pub fn target_link(approved_name: &str) -> String {
    format!(
        "{TARGET_LINK_BASE}/{}",
        utf8_percent_encode(approved_name, LINK_SEGMENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_only_the_query() {
        let body = request_body();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["query"].as_str(), Some(ASSOCIATIONS_QUERY));
    }

    #[test]
    fn query_selects_row_fields() {
        for field in [
            "approvedSymbol",
            "approvedName",
            "datatypeScores",
            "associatedTargets",
        ] {
            assert!(ASSOCIATIONS_QUERY.contains(field), "missing {field}");
        }
    }

    #[test]
    fn link_escapes_spaces_and_slashes() {
        assert_eq!(
            target_link("epidermal growth factor receptor"),
            "https://en.wikipedia.org/wiki/epidermal%20growth%20factor%20receptor"
        );
        assert_eq!(
            target_link("a/b"),
            "https://en.wikipedia.org/wiki/a%2Fb"
        );
    }
}
