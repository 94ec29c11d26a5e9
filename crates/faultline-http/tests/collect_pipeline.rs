//! Integration tests for the payload-to-collection pipeline

use faultline_core::{ErrorCollection, ErrorRecord};
use faultline_http::{collect_validation_errors, collect_validation_errors_json};
use serde_json::{Value, json};

/// A realistic registration failure as the backend sends it.
fn registration_failure() -> Value {
    json!({
        "success": false,
        "code": "ERROR_VALIDATION",
        "errors": [
            { "message": "access key is required", "path": "accessKey" },
            { "message": "username is already taken", "path": "user.username" },
            { "message": "unknown role", "path": "user.roles.0" },
            { "message": "role may not repeat", "path": "user.roles.1" },
        ],
    })
}

mod single_response {
    use super::*;

    #[test]
    fn test_collected_errors_are_addressable_by_path() {
        let errors = collect_validation_errors(&registration_failure());

        assert!(errors.has("accessKey"));
        assert_eq!(
            errors.last("accessKey").as_deref(),
            Some("access key is required")
        );
        assert_eq!(
            errors.last("user.roles.1").as_deref(),
            Some("role may not repeat")
        );
        assert_eq!(errors.get("user.address"), None);
    }

    #[test]
    fn test_form_sections_navigate_subtrees() {
        let errors = collect_validation_errors(&registration_failure());

        let user = errors.children("user");
        assert_eq!(
            user.last("username").as_deref(),
            Some("username is already taken")
        );

        let roles = user.children("roles");
        assert_eq!(roles.last(0).as_deref(), Some("unknown role"));
        assert_eq!(roles.last(1).as_deref(), Some("role may not repeat"));

        // A section with no errors resolves to the shared empty
        // collection, at any depth.
        let address = errors.children("user.address");
        assert!(address.ptr_eq(&ErrorCollection::empty()));
        assert!(address.ptr_eq(&errors.children("payment")));
    }

    #[test]
    fn test_raw_bodies_follow_the_same_pipeline() {
        let body = registration_failure().to_string();

        let errors = collect_validation_errors_json(&body);
        assert!(errors.children("user").has("username"));

        assert!(
            collect_validation_errors_json("<html>Bad Gateway</html>")
                .all()
                .is_empty()
        );
    }

    #[test]
    fn test_unrecognized_payloads_collect_an_empty_writable_collection() {
        let unauthorized = json!({
            "success": false,
            "code": "ERROR_UNAUTHORIZED",
            "errors": [{ "message": "session expired" }],
        });

        let errors = collect_validation_errors(&unauthorized);
        assert!(errors.all().is_empty());
        assert!(!errors.ptr_eq(&ErrorCollection::empty()));

        // The caller can still layer its own checks on top.
        errors.add_error(&["accessKey"], ErrorRecord::new("access key looks stale"));
        assert!(errors.has("accessKey"));
    }
}

mod merged_responses {
    use super::*;

    #[test]
    fn test_two_responses_answer_one_form() {
        let server = collect_validation_errors(&registration_failure());
        let precheck = ErrorCollection::from_records(vec![
            ErrorRecord::new("access key must be 20 characters").with_path("accessKey"),
            ErrorRecord::new("password is required").with_path("user.password"),
        ]);

        let merged = precheck.merge(&server);

        // Both sources show up, first operand first.
        let access_key = merged.get("accessKey").unwrap();
        assert_eq!(access_key[0].message, "access key must be 20 characters");
        assert_eq!(access_key[1].message, "access key is required");
        assert_eq!(
            merged.last("accessKey").as_deref(),
            Some("access key must be 20 characters")
        );

        // Paths unique to either side resolve too.
        assert!(merged.has("user.password"));
        assert!(merged.children("user.roles").has(0));
    }

    #[test]
    fn test_scoped_response_joins_a_direct_one() {
        // One backend nests field paths under the operation name, the
        // other reports them directly.
        let scoped = collect_validation_errors(&json!({
            "success": false,
            "code": "ERROR_DATA_VALIDATION",
            "errors": [
                { "message": "username is already taken", "path": "AccountQuery.user.username" },
            ],
        }));
        let direct = collect_validation_errors(&json!({
            "success": false,
            "code": "ERROR_VALIDATION",
            "errors": [
                { "message": "email looks malformed", "path": "user.email" },
            ],
        }));

        let errors = scoped.children("AccountQuery").merge(&direct);

        let user = errors.children("user");
        assert_eq!(
            user.last("username").as_deref(),
            Some("username is already taken")
        );
        assert_eq!(user.last("email").as_deref(), Some("email looks malformed"));
    }

    #[test]
    fn test_later_records_reach_existing_merged_views() {
        let server = collect_validation_errors(&registration_failure());
        let local = ErrorCollection::new();
        let merged = local.merge(&server);

        local.add_error(
            &["user", "password"],
            ErrorRecord::new("password needs a capital letter"),
        );

        assert_eq!(
            merged.children("user").last("password").as_deref(),
            Some("password needs a capital letter")
        );
    }
}
