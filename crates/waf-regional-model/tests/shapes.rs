//! Behavior of generated shapes: accessors, chaining, rendering, equality
//! and wire format.

use std::hash::{DefaultHasher, Hash, Hasher};

use chrono::{DateTime, TimeDelta, Utc};
use waf_regional_model::input::{
    CreateRateBasedRuleInput, GetSampledRequestsInput, UpdateIPSetInput, UpdateWebACLInput,
};
use waf_regional_model::output::{AssociateWebACLOutput, GetSampledRequestsOutput};
use waf_regional_model::types::{
    ChangeAction, IPSetDescriptor, IPSetDescriptorType, IPSetUpdate, LoggingConfiguration,
    RateKey, Tag, TimeWindow,
};
use waf_regional_model::validate;

fn login_limit() -> CreateRateBasedRuleInput {
    CreateRateBasedRuleInput::default()
        .with_name("login-limit")
        .with_metric_name("LoginLimit")
        .with_rate_key(RateKey::Ip)
        .with_rate_limit(2000)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn tag(key: &str, value: &str) -> Tag {
    Tag::default().with_key(key).with_value(value)
}

#[test]
fn test_should_render_rate_based_rule_in_declaration_order() {
    let input = login_limit();
    assert_eq!(
        input.to_string(),
        "{Name: login-limit,MetricName: LoginLimit,RateKey: IP,RateLimit: 2000}"
    );
    assert_eq!(input.rate_limit(), Some(2000));
}

#[test]
fn test_should_omit_unset_members_from_rendering() {
    let input = CreateRateBasedRuleInput::default().with_name("foo");
    assert_eq!(input.to_string(), "{Name: foo}");
    assert_eq!(CreateRateBasedRuleInput::default().to_string(), "{}");
    assert_eq!(AssociateWebACLOutput::default().to_string(), "{}");
}

#[test]
fn test_should_return_values_unchanged() {
    let mut input = CreateRateBasedRuleInput::default();
    input
        .set_name(Some("rule".to_owned()))
        .set_change_token(Some("token".to_owned()))
        .set_rate_limit(Some(100));
    assert_eq!(input.name(), Some("rule"));
    assert_eq!(input.change_token(), Some("token"));
    assert_eq!(input.rate_limit(), Some(100));

    input.set_name(None);
    assert_eq!(input.name(), None);
}

#[test]
fn test_should_chain_setters_on_the_same_instance() {
    let mut input = CreateRateBasedRuleInput::default();
    let returned = input
        .set_name(Some("x".to_owned()))
        .set_rate_limit(Some(500));
    assert!(std::ptr::eq(std::ptr::from_ref(returned), std::ptr::from_ref(&input)));
}

#[test]
fn test_should_store_canonical_wire_text_for_enum_setter() {
    let typed = CreateRateBasedRuleInput::default().with_rate_key(RateKey::Ip);
    assert_eq!(typed.rate_key().map(RateKey::as_str), Some("IP"));

    let raw = CreateRateBasedRuleInput::default().with_rate_key("IP");
    assert_eq!(raw, typed);
    assert_eq!(raw.rate_key(), Some(&RateKey::Ip));

    let unknown = CreateRateBasedRuleInput::default().with_rate_key("HEADER");
    let key = unknown.rate_key().unwrap();
    assert!(!key.is_known());
    assert_eq!(key.as_str(), "HEADER");
}

#[test]
fn test_should_map_known_text_to_modeled_variant() {
    let parsed = RateKey::from("IP");
    assert_eq!(parsed, RateKey::Ip);
    assert!(parsed.is_known());
    assert_eq!(hash_of(&parsed), hash_of(&RateKey::Ip));
    assert_eq!(RateKey::from(String::from("IP")), RateKey::Ip);

    let decoded: RateKey = serde_json::from_str(r#""IP""#).unwrap();
    assert_eq!(decoded, RateKey::Ip);

    let other = RateKey::from("HEADER");
    assert!(!other.is_known());
    assert_ne!(other, RateKey::from("header"));
    assert_eq!(other, RateKey::from("HEADER".to_owned()));
    assert_eq!(other.to_string(), "HEADER");
}

#[test]
fn test_should_copy_lists_on_assignment() {
    let mut tags = vec![tag("team", "edge")];
    let input = CreateRateBasedRuleInput::default().with_tags(&tags);

    tags.push(tag("env", "prod"));
    tags[0] = tag("team", "core");

    assert_eq!(input.tags(), Some(&[tag("team", "edge")][..]));
}

#[test]
fn test_should_append_to_lists() {
    let input = CreateRateBasedRuleInput::default()
        .with_tags(&[tag("a", "1")])
        .append_tags([tag("b", "2"), tag("c", "3")]);
    let keys: Vec<_> = input.tags().unwrap().iter().filter_map(Tag::key).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);

    let created = CreateRateBasedRuleInput::default().append_tags([tag("a", "1")]);
    assert_eq!(created.tags().map(<[Tag]>::len), Some(1));

    let replaced = input.with_tags(&[tag("z", "9")]);
    assert_eq!(replaced.tags().map(<[Tag]>::len), Some(1));
}

#[test]
fn test_should_compare_and_hash_structurally() {
    let a = login_limit();
    let b = login_limit();
    let c = login_limit().with_rate_limit(3000);

    assert_eq!(a, a.clone());
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);

    let unset = CreateRateBasedRuleInput::default();
    let empty_tags = CreateRateBasedRuleInput::default().with_tags(&[]);
    assert_ne!(unset, empty_tags);
}

#[test]
fn test_should_clear_and_empty_lists_through_setters() {
    let mut input = login_limit();
    input.set_tags(Some(&[]));
    assert_eq!(input.tags(), Some(&[][..]));
    assert_ne!(input, login_limit());
    let json = serde_json::to_string(&input).unwrap();
    assert!(json.ends_with(r#","Tags":[]}"#));

    input.set_tags(Some(&[tag("team", "edge")]));
    assert_eq!(input.tags().map(<[Tag]>::len), Some(1));

    input.set_tags(None);
    assert_eq!(input.tags(), None);
    assert_eq!(input, login_limit());
    assert_eq!(hash_of(&input), hash_of(&login_limit()));
    let json = serde_json::to_string(&input).unwrap();
    assert!(!json.contains("Tags"));
}

#[test]
fn test_should_keep_time_window_as_set() {
    let start: DateTime<Utc> = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let end = start + TimeDelta::hours(1);

    let window = TimeWindow::default()
        .with_start_time(start)
        .with_end_time(end);
    assert_eq!(window.start_time(), Some(start));
    assert_eq!(window.end_time(), Some(end));
    assert_eq!(
        window.to_string(),
        "{StartTime: 2023-11-14T22:13:20Z,EndTime: 2023-11-14T23:13:20Z}"
    );

    let swapped = TimeWindow::default()
        .with_start_time(end)
        .with_end_time(start);
    assert_eq!(swapped.start_time(), Some(end));
    assert!(validate(&swapped).is_ok());
}

#[test]
fn test_should_serialize_with_wire_names() {
    let input = UpdateWebACLInput::default()
        .with_web_acl_id("acl-1")
        .with_change_token("token");
    assert_eq!(
        serde_json::to_string(&input).unwrap(),
        r#"{"WebACLId":"acl-1","ChangeToken":"token"}"#
    );

    assert_eq!(
        serde_json::to_string(&login_limit()).unwrap(),
        r#"{"Name":"login-limit","MetricName":"LoginLimit","RateKey":"IP","RateLimit":2000}"#
    );
}

#[test]
fn test_should_keep_empty_list_distinct_from_unset() {
    let input = UpdateWebACLInput::default().with_updates(&[]);
    assert_eq!(serde_json::to_string(&input).unwrap(), r#"{"Updates":[]}"#);
    assert_eq!(input.to_string(), "{Updates: []}");

    let decoded: UpdateWebACLInput = serde_json::from_str(r#"{"Updates":[]}"#).unwrap();
    assert_eq!(decoded.updates(), Some(&[][..]));
    let output = AssociateWebACLOutput::default();
    assert_eq!(serde_json::to_string(&output).unwrap(), "{}");
}

#[test]
fn test_should_preserve_unknown_enum_text() {
    let json = r#"{"Type":"IPV5","Value":"10.0.0.0/8"}"#;
    let descriptor: IPSetDescriptor = serde_json::from_str(json).unwrap();
    let kind = descriptor.r#type().unwrap();
    assert!(!kind.is_known());
    assert_eq!(kind.as_str(), "IPV5");
    assert_ne!(kind, &IPSetDescriptorType::Ipv4);
    assert_eq!(serde_json::to_string(&descriptor).unwrap(), json);
}

#[test]
fn test_should_decode_nested_update_lists() {
    let json = r#"{
        "IPSetId": "ipset-1",
        "ChangeToken": "token",
        "Updates": [
            {"Action": "INSERT", "IPSetDescriptor": {"Type": "IPV4", "Value": "192.0.2.44/32"}},
            {"Action": "DELETE", "IPSetDescriptor": {"Type": "IPV6", "Value": "1111:0000::/64"}}
        ]
    }"#;
    let input: UpdateIPSetInput = serde_json::from_str(json).unwrap();
    let updates = input.updates().unwrap();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].action(), Some(&ChangeAction::Insert));
    assert_eq!(
        updates[1]
            .ip_set_descriptor()
            .and_then(IPSetDescriptor::r#type),
        Some(&IPSetDescriptorType::Ipv6)
    );

    let expected = UpdateIPSetInput::default()
        .with_ip_set_id("ipset-1")
        .with_change_token("token")
        .with_updates(&[
            IPSetUpdate::default()
                .with_action(ChangeAction::Insert)
                .with_ip_set_descriptor(
                    IPSetDescriptor::default()
                        .with_type(IPSetDescriptorType::Ipv4)
                        .with_value("192.0.2.44/32"),
                ),
            IPSetUpdate::default()
                .with_action("DELETE")
                .with_ip_set_descriptor(
                    IPSetDescriptor::default()
                        .with_type("IPV6")
                        .with_value("1111:0000::/64"),
                ),
        ]);
    assert_eq!(input, expected);
}

#[test]
fn test_should_decode_sampled_requests_with_epoch_timestamps() {
    let json = r#"{
        "SampledRequests": [{
            "Request": {"ClientIP": "192.0.2.1", "Country": "US", "URI": "/login", "Method": "POST", "HTTPVersion": "HTTP/1.1"},
            "Weight": 1,
            "Timestamp": 1700000000,
            "Action": "BLOCK"
        }],
        "PopulationSize": 42,
        "TimeWindow": {"StartTime": 1699990000, "EndTime": 1700000000.5}
    }"#;
    let output: GetSampledRequestsOutput = serde_json::from_str(json).unwrap();
    assert_eq!(output.population_size(), Some(42));

    let sample = &output.sampled_requests().unwrap()[0];
    assert_eq!(sample.weight(), Some(1));
    assert_eq!(sample.action(), Some("BLOCK"));
    assert_eq!(
        sample.timestamp(),
        DateTime::from_timestamp(1_700_000_000, 0)
    );
    assert_eq!(
        sample.request().and_then(|r| r.client_ip()),
        Some("192.0.2.1")
    );

    let window = output.time_window().unwrap();
    assert_eq!(
        window.end_time(),
        DateTime::from_timestamp(1_700_000_000, 500_000_000)
    );

    let encoded = serde_json::to_value(&output).unwrap();
    assert_eq!(encoded["TimeWindow"]["StartTime"], 1_699_990_000);
    assert_eq!(encoded["TimeWindow"]["EndTime"], 1_700_000_000.5);
}

#[test]
fn test_should_build_requests_with_zero_fields() {
    let input = GetSampledRequestsInput::default();
    assert_eq!(input.web_acl_id(), None);
    assert_eq!(input.time_window(), None);
    assert_eq!(serde_json::to_string(&input).unwrap(), "{}");

    let destination = "arn:aws:firehose:us-east-1:123456789012:deliverystream/aws-waf-logs";
    let logging = LoggingConfiguration::default()
        .with_resource_arn("arn:aws:wafregional:us-east-1:123456789012:webacl/acl-1")
        .with_log_destination_configs(&[destination.to_owned()]);
    let destinations = logging.log_destination_configs();
    assert_eq!(destinations.map(<[String]>::len), Some(1));
    assert!(logging.redacted_fields().is_none());
}
