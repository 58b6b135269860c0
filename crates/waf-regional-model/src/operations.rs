//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use crate::error::WafRegionalErrorCode;
use crate::input::{
    AssociateWebACLInput, CreateRateBasedRuleInput, CreateRuleGroupInput, CreateRuleInput,
    CreateWebACLInput, DisassociateWebACLInput, GetChangeTokenInput, GetRateBasedRuleInput,
    GetSampledRequestsInput, GetWebACLForResourceInput, ListLoggingConfigurationsInput,
    PutLoggingConfigurationInput, UpdateGeoMatchSetInput, UpdateIPSetInput,
    UpdateRateBasedRuleInput, UpdateRegexMatchSetInput, UpdateRuleInput, UpdateWebACLInput,
};
use crate::output::{
    AssociateWebACLOutput, CreateRateBasedRuleOutput, CreateRuleGroupOutput, CreateRuleOutput,
    CreateWebACLOutput, DisassociateWebACLOutput, GetChangeTokenOutput, GetRateBasedRuleOutput,
    GetSampledRequestsOutput, GetWebACLForResourceOutput, ListLoggingConfigurationsOutput,
    PutLoggingConfigurationOutput, UpdateGeoMatchSetOutput, UpdateIPSetOutput,
    UpdateRateBasedRuleOutput, UpdateRegexMatchSetOutput, UpdateRuleOutput, UpdateWebACLOutput,
};
use crate::schema::Shape;

/// JSON protocol target prefix of the AWS WAF Regional service.
pub const TARGET_PREFIX: &str = "AWSWAF_Regional_20161128";

/// All supported AWS WAF Regional operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WafRegionalOperation {
    /// Associates a web ACL with a regional resource.
    AssociateWebACL,
    /// Creates a rate-based rule.
    CreateRateBasedRule,
    /// Creates a rule.
    CreateRule,
    /// Creates a rule group.
    CreateRuleGroup,
    /// Creates a web ACL.
    CreateWebACL,
    /// Removes a web ACL from a regional resource.
    DisassociateWebACL,
    /// Returns a change token for the next create, update, or delete request.
    GetChangeToken,
    /// Returns a rate-based rule.
    GetRateBasedRule,
    /// Returns a sample of the web requests that matched a rule within a time window.
    GetSampledRequests,
    /// Returns the web ACL associated with a regional resource, if any.
    GetWebACLForResource,
    /// Returns the logging configurations of the account, one page at a time.
    ListLoggingConfigurations,
    /// Associates a Kinesis Data Firehose stream with a web ACL.
    PutLoggingConfiguration,
    /// Inserts or deletes countries in a geo match set.
    UpdateGeoMatchSet,
    /// Inserts or deletes address ranges in an IP set.
    UpdateIPSet,
    /// Inserts or deletes predicates in a rate-based rule, or changes its rate limit.
    UpdateRateBasedRule,
    /// Inserts or deletes regex match tuples in a regex match set.
    UpdateRegexMatchSet,
    /// Inserts or deletes predicates in a rule.
    UpdateRule,
    /// Inserts or deletes activated rules in a web ACL.
    UpdateWebACL,
}

const ASSOCIATE_WEB_ACL_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafInvalidAccountException,
    WafRegionalErrorCode::WafInvalidParameterException,
    WafRegionalErrorCode::WafNonexistentItemException,
    WafRegionalErrorCode::WafUnavailableEntityException,
];
const CREATE_RATE_BASED_RULE_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafStaleDataException,
    WafRegionalErrorCode::WafInvalidParameterException,
    WafRegionalErrorCode::WafDisallowedNameException,
    WafRegionalErrorCode::WafLimitsExceededException,
    WafRegionalErrorCode::WafTagOperationException,
    WafRegionalErrorCode::WafTagOperationInternalErrorException,
    WafRegionalErrorCode::WafBadRequestException,
];
const CREATE_RULE_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafStaleDataException,
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafDisallowedNameException,
    WafRegionalErrorCode::WafInvalidParameterException,
    WafRegionalErrorCode::WafLimitsExceededException,
    WafRegionalErrorCode::WafTagOperationException,
    WafRegionalErrorCode::WafTagOperationInternalErrorException,
    WafRegionalErrorCode::WafBadRequestException,
];
const CREATE_RULE_GROUP_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafStaleDataException,
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafDisallowedNameException,
    WafRegionalErrorCode::WafLimitsExceededException,
    WafRegionalErrorCode::WafTagOperationException,
    WafRegionalErrorCode::WafTagOperationInternalErrorException,
    WafRegionalErrorCode::WafBadRequestException,
];
const CREATE_WEB_ACL_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafStaleDataException,
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafInvalidAccountException,
    WafRegionalErrorCode::WafDisallowedNameException,
    WafRegionalErrorCode::WafInvalidParameterException,
    WafRegionalErrorCode::WafLimitsExceededException,
    WafRegionalErrorCode::WafTagOperationException,
    WafRegionalErrorCode::WafTagOperationInternalErrorException,
    WafRegionalErrorCode::WafBadRequestException,
];
const DISASSOCIATE_WEB_ACL_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafInvalidAccountException,
    WafRegionalErrorCode::WafInvalidParameterException,
    WafRegionalErrorCode::WafNonexistentItemException,
];
const GET_CHANGE_TOKEN_ERRORS: &[WafRegionalErrorCode] =
    &[WafRegionalErrorCode::WafInternalErrorException];
const GET_RATE_BASED_RULE_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafInvalidAccountException,
    WafRegionalErrorCode::WafNonexistentItemException,
];
const GET_SAMPLED_REQUESTS_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafNonexistentItemException,
    WafRegionalErrorCode::WafInternalErrorException,
];
const GET_WEB_ACL_FOR_RESOURCE_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafInvalidAccountException,
    WafRegionalErrorCode::WafInvalidParameterException,
    WafRegionalErrorCode::WafNonexistentItemException,
    WafRegionalErrorCode::WafUnavailableEntityException,
];
const LIST_LOGGING_CONFIGURATIONS_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafNonexistentItemException,
    WafRegionalErrorCode::WafInvalidParameterException,
];
const PUT_LOGGING_CONFIGURATION_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafNonexistentItemException,
    WafRegionalErrorCode::WafStaleDataException,
    WafRegionalErrorCode::WafServiceLinkedRoleErrorException,
];
const UPDATE_GEO_MATCH_SET_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafStaleDataException,
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafInvalidAccountException,
    WafRegionalErrorCode::WafInvalidOperationException,
    WafRegionalErrorCode::WafInvalidParameterException,
    WafRegionalErrorCode::WafNonexistentContainerException,
    WafRegionalErrorCode::WafNonexistentItemException,
    WafRegionalErrorCode::WafReferencedItemException,
    WafRegionalErrorCode::WafLimitsExceededException,
];
const UPDATE_IP_SET_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafStaleDataException,
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafInvalidAccountException,
    WafRegionalErrorCode::WafInvalidOperationException,
    WafRegionalErrorCode::WafInvalidParameterException,
    WafRegionalErrorCode::WafNonexistentContainerException,
    WafRegionalErrorCode::WafNonexistentItemException,
    WafRegionalErrorCode::WafReferencedItemException,
    WafRegionalErrorCode::WafLimitsExceededException,
];
const UPDATE_RATE_BASED_RULE_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafStaleDataException,
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafInvalidAccountException,
    WafRegionalErrorCode::WafInvalidOperationException,
    WafRegionalErrorCode::WafInvalidParameterException,
    WafRegionalErrorCode::WafNonexistentContainerException,
    WafRegionalErrorCode::WafNonexistentItemException,
    WafRegionalErrorCode::WafReferencedItemException,
    WafRegionalErrorCode::WafLimitsExceededException,
];
const UPDATE_REGEX_MATCH_SET_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafStaleDataException,
    WafRegionalErrorCode::WafDisallowedNameException,
    WafRegionalErrorCode::WafLimitsExceededException,
    WafRegionalErrorCode::WafNonexistentItemException,
    WafRegionalErrorCode::WafNonexistentContainerException,
    WafRegionalErrorCode::WafInvalidOperationException,
    WafRegionalErrorCode::WafInvalidAccountException,
    WafRegionalErrorCode::WafInternalErrorException,
];
const UPDATE_RULE_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafStaleDataException,
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafInvalidAccountException,
    WafRegionalErrorCode::WafInvalidOperationException,
    WafRegionalErrorCode::WafInvalidParameterException,
    WafRegionalErrorCode::WafNonexistentContainerException,
    WafRegionalErrorCode::WafNonexistentItemException,
    WafRegionalErrorCode::WafReferencedItemException,
    WafRegionalErrorCode::WafLimitsExceededException,
];
const UPDATE_WEB_ACL_ERRORS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafStaleDataException,
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafInvalidAccountException,
    WafRegionalErrorCode::WafInvalidOperationException,
    WafRegionalErrorCode::WafInvalidParameterException,
    WafRegionalErrorCode::WafNonexistentContainerException,
    WafRegionalErrorCode::WafNonexistentItemException,
    WafRegionalErrorCode::WafReferencedItemException,
    WafRegionalErrorCode::WafLimitsExceededException,
];

impl WafRegionalOperation {
    /// Every operation, in name order.
    pub const ALL: &[Self] = &[
        Self::AssociateWebACL,
        Self::CreateRateBasedRule,
        Self::CreateRule,
        Self::CreateRuleGroup,
        Self::CreateWebACL,
        Self::DisassociateWebACL,
        Self::GetChangeToken,
        Self::GetRateBasedRule,
        Self::GetSampledRequests,
        Self::GetWebACLForResource,
        Self::ListLoggingConfigurations,
        Self::PutLoggingConfiguration,
        Self::UpdateGeoMatchSet,
        Self::UpdateIPSet,
        Self::UpdateRateBasedRule,
        Self::UpdateRegexMatchSet,
        Self::UpdateRule,
        Self::UpdateWebACL,
    ];

    /// Returns the operation name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssociateWebACL => "AssociateWebACL",
            Self::CreateRateBasedRule => "CreateRateBasedRule",
            Self::CreateRule => "CreateRule",
            Self::CreateRuleGroup => "CreateRuleGroup",
            Self::CreateWebACL => "CreateWebACL",
            Self::DisassociateWebACL => "DisassociateWebACL",
            Self::GetChangeToken => "GetChangeToken",
            Self::GetRateBasedRule => "GetRateBasedRule",
            Self::GetSampledRequests => "GetSampledRequests",
            Self::GetWebACLForResource => "GetWebACLForResource",
            Self::ListLoggingConfigurations => "ListLoggingConfigurations",
            Self::PutLoggingConfiguration => "PutLoggingConfiguration",
            Self::UpdateGeoMatchSet => "UpdateGeoMatchSet",
            Self::UpdateIPSet => "UpdateIPSet",
            Self::UpdateRateBasedRule => "UpdateRateBasedRule",
            Self::UpdateRegexMatchSet => "UpdateRegexMatchSet",
            Self::UpdateRule => "UpdateRule",
            Self::UpdateWebACL => "UpdateWebACL",
        }
    }

    /// Parse an operation name into a WafRegionalOperation.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AssociateWebACL" => Some(Self::AssociateWebACL),
            "CreateRateBasedRule" => Some(Self::CreateRateBasedRule),
            "CreateRule" => Some(Self::CreateRule),
            "CreateRuleGroup" => Some(Self::CreateRuleGroup),
            "CreateWebACL" => Some(Self::CreateWebACL),
            "DisassociateWebACL" => Some(Self::DisassociateWebACL),
            "GetChangeToken" => Some(Self::GetChangeToken),
            "GetRateBasedRule" => Some(Self::GetRateBasedRule),
            "GetSampledRequests" => Some(Self::GetSampledRequests),
            "GetWebACLForResource" => Some(Self::GetWebACLForResource),
            "ListLoggingConfigurations" => Some(Self::ListLoggingConfigurations),
            "PutLoggingConfiguration" => Some(Self::PutLoggingConfiguration),
            "UpdateGeoMatchSet" => Some(Self::UpdateGeoMatchSet),
            "UpdateIPSet" => Some(Self::UpdateIPSet),
            "UpdateRateBasedRule" => Some(Self::UpdateRateBasedRule),
            "UpdateRegexMatchSet" => Some(Self::UpdateRegexMatchSet),
            "UpdateRule" => Some(Self::UpdateRule),
            "UpdateWebACL" => Some(Self::UpdateWebACL),
            _ => None,
        }
    }

    /// Value of the `X-Amz-Target` header for this operation.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}.{}", self.as_str())
    }

    /// Errors the operation declares.
    #[must_use]
    pub fn errors(&self) -> &'static [WafRegionalErrorCode] {
        match self {
            Self::AssociateWebACL => ASSOCIATE_WEB_ACL_ERRORS,
            Self::CreateRateBasedRule => CREATE_RATE_BASED_RULE_ERRORS,
            Self::CreateRule => CREATE_RULE_ERRORS,
            Self::CreateRuleGroup => CREATE_RULE_GROUP_ERRORS,
            Self::CreateWebACL => CREATE_WEB_ACL_ERRORS,
            Self::DisassociateWebACL => DISASSOCIATE_WEB_ACL_ERRORS,
            Self::GetChangeToken => GET_CHANGE_TOKEN_ERRORS,
            Self::GetRateBasedRule => GET_RATE_BASED_RULE_ERRORS,
            Self::GetSampledRequests => GET_SAMPLED_REQUESTS_ERRORS,
            Self::GetWebACLForResource => GET_WEB_ACL_FOR_RESOURCE_ERRORS,
            Self::ListLoggingConfigurations => LIST_LOGGING_CONFIGURATIONS_ERRORS,
            Self::PutLoggingConfiguration => PUT_LOGGING_CONFIGURATION_ERRORS,
            Self::UpdateGeoMatchSet => UPDATE_GEO_MATCH_SET_ERRORS,
            Self::UpdateIPSet => UPDATE_IP_SET_ERRORS,
            Self::UpdateRateBasedRule => UPDATE_RATE_BASED_RULE_ERRORS,
            Self::UpdateRegexMatchSet => UPDATE_REGEX_MATCH_SET_ERRORS,
            Self::UpdateRule => UPDATE_RULE_ERRORS,
            Self::UpdateWebACL => UPDATE_WEB_ACL_ERRORS,
        }
    }
}

impl fmt::Display for WafRegionalOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binds an operation input to its operation and output type.
pub trait OperationInput: Shape {
    /// Output type of the operation.
    type Output: Shape + Default;
    /// The operation this input belongs to.
    const OPERATION: WafRegionalOperation;
}

impl OperationInput for AssociateWebACLInput {
    type Output = AssociateWebACLOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::AssociateWebACL;
}

impl OperationInput for CreateRateBasedRuleInput {
    type Output = CreateRateBasedRuleOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::CreateRateBasedRule;
}

impl OperationInput for CreateRuleInput {
    type Output = CreateRuleOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::CreateRule;
}

impl OperationInput for CreateRuleGroupInput {
    type Output = CreateRuleGroupOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::CreateRuleGroup;
}

impl OperationInput for CreateWebACLInput {
    type Output = CreateWebACLOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::CreateWebACL;
}

impl OperationInput for DisassociateWebACLInput {
    type Output = DisassociateWebACLOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::DisassociateWebACL;
}

impl OperationInput for GetChangeTokenInput {
    type Output = GetChangeTokenOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::GetChangeToken;
}

impl OperationInput for GetRateBasedRuleInput {
    type Output = GetRateBasedRuleOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::GetRateBasedRule;
}

impl OperationInput for GetSampledRequestsInput {
    type Output = GetSampledRequestsOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::GetSampledRequests;
}

impl OperationInput for GetWebACLForResourceInput {
    type Output = GetWebACLForResourceOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::GetWebACLForResource;
}

impl OperationInput for ListLoggingConfigurationsInput {
    type Output = ListLoggingConfigurationsOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::ListLoggingConfigurations;
}

impl OperationInput for PutLoggingConfigurationInput {
    type Output = PutLoggingConfigurationOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::PutLoggingConfiguration;
}

impl OperationInput for UpdateGeoMatchSetInput {
    type Output = UpdateGeoMatchSetOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::UpdateGeoMatchSet;
}

impl OperationInput for UpdateIPSetInput {
    type Output = UpdateIPSetOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::UpdateIPSet;
}

impl OperationInput for UpdateRateBasedRuleInput {
    type Output = UpdateRateBasedRuleOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::UpdateRateBasedRule;
}

impl OperationInput for UpdateRegexMatchSetInput {
    type Output = UpdateRegexMatchSetOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::UpdateRegexMatchSet;
}

impl OperationInput for UpdateRuleInput {
    type Output = UpdateRuleOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::UpdateRule;
}

impl OperationInput for UpdateWebACLInput {
    type Output = UpdateWebACLOutput;
    const OPERATION: WafRegionalOperation = WafRegionalOperation::UpdateWebACL;
}
