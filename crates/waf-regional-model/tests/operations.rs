//! Operation catalog, service errors and pre-flight validation.

use waf_regional_model::input::{
    CreateRateBasedRuleInput, GetChangeTokenInput, GetSampledRequestsInput, UpdateGeoMatchSetInput,
};
use waf_regional_model::output::{CreateRateBasedRuleOutput, GetChangeTokenOutput};
use waf_regional_model::types::{
    ChangeAction, GeoMatchConstraint, GeoMatchConstraintType, GeoMatchSetUpdate, RateKey,
    TimeWindow,
};
use waf_regional_model::{
    ErrorFault, OperationInput, Shape, TARGET_PREFIX, ViolationKind, WafRegionalError,
    WafRegionalErrorCode, WafRegionalOperation, validate,
};

fn default_output<I: OperationInput>(_input: &I) -> I::Output {
    I::Output::default()
}

#[test]
fn test_should_list_every_operation() {
    assert_eq!(WafRegionalOperation::ALL.len(), 18);
    for op in WafRegionalOperation::ALL {
        assert_eq!(WafRegionalOperation::from_name(op.as_str()), Some(*op));
        assert_eq!(op.to_string(), op.as_str());
        assert!(!op.errors().is_empty(), "{op} declares no errors");
    }
    assert_eq!(WafRegionalOperation::from_name("DeleteWebACL"), None);
}

#[test]
fn test_should_build_target_header() {
    assert_eq!(TARGET_PREFIX, "AWSWAF_Regional_20161128");
    assert_eq!(
        WafRegionalOperation::GetChangeToken.target(),
        "AWSWAF_Regional_20161128.GetChangeToken"
    );
}

#[test]
fn test_should_declare_operation_errors() {
    assert_eq!(
        WafRegionalOperation::GetChangeToken.errors(),
        &[WafRegionalErrorCode::WafInternalErrorException]
    );
    assert!(
        WafRegionalOperation::UpdateRule
            .errors()
            .contains(&WafRegionalErrorCode::WafStaleDataException)
    );
}

#[test]
fn test_should_bind_inputs_to_operations() {
    assert_eq!(
        <CreateRateBasedRuleInput as OperationInput>::OPERATION,
        WafRegionalOperation::CreateRateBasedRule
    );
    assert_eq!(
        <GetSampledRequestsInput as OperationInput>::OPERATION,
        WafRegionalOperation::GetSampledRequests
    );

    let output: CreateRateBasedRuleOutput = default_output(&CreateRateBasedRuleInput::default());
    assert_eq!(output.schema().name, "CreateRateBasedRuleOutput");
    let output: GetChangeTokenOutput = default_output(&GetChangeTokenInput::default());
    assert_eq!(output.change_token(), None);
}

#[test]
fn test_should_parse_error_types() {
    assert_eq!(
        WafRegionalErrorCode::from_type("WAFStaleDataException"),
        WafRegionalErrorCode::WafStaleDataException
    );
    assert_eq!(
        WafRegionalErrorCode::from_type("com.amazonaws.wafregional#WAFNonexistentItemException"),
        WafRegionalErrorCode::WafNonexistentItemException
    );
    assert_eq!(
        WafRegionalErrorCode::from_type(
            "WAFLimitsExceededException:http://internal.amazon.com/coral/com.amazonaws.wafregional/"
        ),
        WafRegionalErrorCode::WafLimitsExceededException
    );

    let unknown = WafRegionalErrorCode::from_type("ThrottlingException");
    assert!(matches!(unknown, WafRegionalErrorCode::Unknown(_)));
    assert_eq!(unknown.as_str(), "ThrottlingException");
    for code in [
        WafRegionalErrorCode::WafStaleDataException,
        WafRegionalErrorCode::WafInternalErrorException,
    ] {
        assert_eq!(WafRegionalErrorCode::from_type(code.as_str()), code);
    }
    assert_eq!(unknown.fault(), ErrorFault::Client);
}

#[test]
fn test_should_classify_faults() {
    assert_eq!(
        WafRegionalErrorCode::WafInternalErrorException.fault(),
        ErrorFault::Server
    );
    assert_eq!(
        WafRegionalErrorCode::WafTagOperationInternalErrorException.fault(),
        ErrorFault::Server
    );
    assert_eq!(
        WafRegionalErrorCode::WafInvalidParameterException.fault(),
        ErrorFault::Client
    );
}

#[test]
fn test_should_render_service_error() {
    let err = WafRegionalError::with_message(
        WafRegionalErrorCode::WafStaleDataException,
        "The change token has already been used.",
    );
    assert_eq!(
        err.to_string(),
        "WAFStaleDataException: The change token has already been used."
    );
    assert_eq!(err.fault(), ErrorFault::Client);

    let bare = WafRegionalError::new(WafRegionalErrorCode::WafInternalErrorException);
    assert_eq!(bare.to_string(), "WAFInternalErrorException");

    let boxed: Box<dyn std::error::Error> = Box::new(bare);
    assert!(boxed.source().is_none());
}

#[test]
fn test_should_validate_complete_request() {
    let input = CreateRateBasedRuleInput::default()
        .with_name("login-limit")
        .with_metric_name("LoginLimit")
        .with_rate_key(RateKey::Ip)
        .with_rate_limit(2000)
        .with_change_token("abcd12f2-46da-4fdb-b8d5-fbd4c466928f");
    assert!(validate(&input).is_ok());

    let err = validate(&input.clone().with_rate_limit(2_000_000_001)).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].path, "RateLimit");
    assert!(matches!(
        err.violations[0].kind,
        ViolationKind::Range {
            actual: 2_000_000_001,
            ..
        }
    ));
}

#[test]
fn test_should_validate_nested_list_items() {
    let constraint = GeoMatchConstraint::default()
        .with_type(GeoMatchConstraintType::Country)
        .with_value("ZZ");
    let update = GeoMatchSetUpdate::default()
        .with_action(ChangeAction::Insert)
        .with_geo_match_constraint(constraint);
    let input = UpdateGeoMatchSetInput::default()
        .with_geo_match_set_id("geo-1")
        .with_change_token("token")
        .with_updates(&[update]);

    let err = validate(&input).unwrap_err();
    let paths: Vec<_> = err.violations.iter().map(|v| v.path.as_str()).collect();
    assert_eq!(paths, vec!["Updates[0].GeoMatchConstraint.Value"]);

    let empty = input.with_updates(&[]);
    let err = validate(&empty).unwrap_err();
    assert!(matches!(
        err.violations[0].kind,
        ViolationKind::Length { actual: 0, .. }
    ));
}

#[test]
fn test_should_require_sampling_window_members() {
    let input = GetSampledRequestsInput::default()
        .with_web_acl_id("acl-1")
        .with_rule_id("rule-1")
        .with_max_items(100)
        .with_time_window(TimeWindow::default());

    let err = validate(&input).unwrap_err();
    let paths: Vec<_> = err.violations.iter().map(|v| v.path.as_str()).collect();
    assert_eq!(paths, vec!["TimeWindow.StartTime", "TimeWindow.EndTime"]);

    let err = validate(&input.with_max_items(501)).unwrap_err();
    assert!(err.violations.iter().any(|v| v.path == "MaxItems"));
}
