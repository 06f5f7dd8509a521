use std::collections::BTreeMap;

use crate::model::{AuthConfig, RequestBody, RequestDescriptor};
use crate::state::request_state::{KeyValuePair, RequestForm};

/// Turn a form snapshot into the descriptor the backend stores and executes.
///
/// Pure: no I/O, and two calls on the same snapshot yield equal descriptors.
pub fn build_request(form: &RequestForm) -> RequestDescriptor {
    let body = form
        .body_type
        .filter(|_| !form.body.is_empty())
        .map(|body_type| RequestBody {
            body_type,
            content: form.body.clone(),
        });

    RequestDescriptor {
        name: format!("Request to {}", form.url),
        method: form.method,
        url: form.url.clone(),
        headers: collect_pairs(&form.headers.rows),
        query_params: collect_pairs(&form.params.rows),
        body,
        auth: AuthConfig::from_fields(form.auth_kind, &form.auth),
    }
}

/// Rows with an empty key or value are dropped; a repeated key keeps the last value.
fn collect_pairs(rows: &[KeyValuePair]) -> BTreeMap<String, String> {
    rows.iter()
        .filter(|p| p.is_complete())
        .map(|p| (p.key.clone(), p.value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuthKind, BodyType, HttpMethod};
    use crate::state::request_state::KvTable;

    fn rows(pairs: &[(&str, &str)]) -> KvTable {
        KvTable::from_rows(pairs.iter().map(|(k, v)| KeyValuePair::new(*k, *v)).collect())
    }

    #[test]
    fn incomplete_rows_are_excluded() {
        let form = RequestForm {
            headers: rows(&[("Accept", "*/*"), ("", "orphan"), ("X-Empty", ""), (" ", " ")]),
            params: rows(&[("q", "rust"), ("page", "")]),
            ..RequestForm::with_url("https://example.com")
        };
        let req = build_request(&form);
        assert_eq!(req.headers.len(), 2);
        assert_eq!(req.headers["Accept"], "*/*");
        assert_eq!(req.headers[" "], " ");
        assert_eq!(req.query_params.len(), 1);
        assert_eq!(req.query_params["q"], "rust");
    }

    #[test]
    fn header_case_is_preserved() {
        let form = RequestForm {
            headers: rows(&[("x-Custom-ID", "7")]),
            ..Default::default()
        };
        assert!(build_request(&form).headers.contains_key("x-Custom-ID"));
    }

    #[test]
    fn body_requires_type_and_content() {
        let mut form = RequestForm::with_url("https://example.com");
        form.body = "{\"a\":1}".into();
        assert_eq!(build_request(&form).body, None);

        form.body_type = Some(BodyType::Json);
        assert_eq!(
            build_request(&form).body,
            Some(RequestBody { body_type: BodyType::Json, content: "{\"a\":1}".into() })
        );

        form.body.clear();
        assert_eq!(build_request(&form).body, None);
    }

    #[test]
    fn auth_attached_only_for_real_kinds() {
        let mut form = RequestForm::default();
        form.auth.token = Some("abc".into());
        assert_eq!(build_request(&form).auth, None);

        form.auth_kind = AuthKind::Bearer;
        assert_eq!(
            build_request(&form).auth,
            Some(AuthConfig::Bearer { token: "abc".into() })
        );
    }

    #[test]
    fn descriptor_is_named_after_url_and_keeps_method() {
        let mut form = RequestForm::with_url("https://api.example.com/users");
        form.method = HttpMethod::Delete;
        let req = build_request(&form);
        assert_eq!(req.name, "Request to https://api.example.com/users");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "https://api.example.com/users");
    }

    #[test]
    fn building_twice_yields_identical_descriptors() {
        let mut form = RequestForm::sample();
        form.body_type = Some(BodyType::Raw);
        form.body = "hello".into();
        form.auth_kind = AuthKind::ApiKey;
        assert_eq!(build_request(&form), build_request(&form));
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let form = RequestForm {
            params: rows(&[("id", "1"), ("id", "2")]),
            ..Default::default()
        };
        assert_eq!(build_request(&form).query_params["id"], "2");
    }
}
