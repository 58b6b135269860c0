//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use crate::unknown::UnknownVariantValue;

/// Fault classification of a service error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorFault {
    /// The service rejected the request.
    Client,
    /// The service failed to process a valid request.
    Server,
}

/// Error codes returned by AWS WAF Regional.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WafRegionalErrorCode {
    /// The request was malformed.
    WafBadRequestException,
    /// The name specified is not valid.
    WafDisallowedNameException,
    /// The operation failed because of a system problem, even though the request was valid.
    WafInternalErrorException,
    /// The operation failed because the account is not valid.
    WafInvalidAccountException,
    /// The operation failed because there was nothing to do.
    WafInvalidOperationException,
    /// The operation failed because a parameter value was not valid.
    WafInvalidParameterException,
    /// The operation would exceed the number of objects allowed in the account.
    WafLimitsExceededException,
    /// The operation failed because the object to change does not exist.
    WafNonexistentContainerException,
    /// The operation failed because the referenced object does not exist.
    WafNonexistentItemException,
    /// The object is still referenced by another object.
    WafReferencedItemException,
    /// The service-linked role could not be created.
    WafServiceLinkedRoleErrorException,
    /// The change token has already been used.
    WafStaleDataException,
    /// The tag operation failed.
    WafTagOperationException,
    /// The tag operation failed because of an internal problem.
    WafTagOperationInternalErrorException,
    /// The entity is not available yet.
    WafUnavailableEntityException,
    /// An error code not known to this version of the model.
    Unknown(UnknownVariantValue),
}

/// Codes the service reports as server faults.
const SERVER_FAULTS: &[WafRegionalErrorCode] = &[
    WafRegionalErrorCode::WafInternalErrorException,
    WafRegionalErrorCode::WafTagOperationInternalErrorException,
];

impl WafRegionalErrorCode {
    /// Returns the wire error code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::WafBadRequestException => "WAFBadRequestException",
            Self::WafDisallowedNameException => "WAFDisallowedNameException",
            Self::WafInternalErrorException => "WAFInternalErrorException",
            Self::WafInvalidAccountException => "WAFInvalidAccountException",
            Self::WafInvalidOperationException => "WAFInvalidOperationException",
            Self::WafInvalidParameterException => "WAFInvalidParameterException",
            Self::WafLimitsExceededException => "WAFLimitsExceededException",
            Self::WafNonexistentContainerException => "WAFNonexistentContainerException",
            Self::WafNonexistentItemException => "WAFNonexistentItemException",
            Self::WafReferencedItemException => "WAFReferencedItemException",
            Self::WafServiceLinkedRoleErrorException => "WAFServiceLinkedRoleErrorException",
            Self::WafStaleDataException => "WAFStaleDataException",
            Self::WafTagOperationException => "WAFTagOperationException",
            Self::WafTagOperationInternalErrorException => "WAFTagOperationInternalErrorException",
            Self::WafUnavailableEntityException => "WAFUnavailableEntityException",
            Self::Unknown(code) => code.as_str(),
        }
    }

    /// Parse an error type as returned in `__type` or `X-Amzn-ErrorType`.
    ///
    /// Accepts a bare code, a namespaced `ns#Code` and a `Code:detail` form.
    #[must_use]
    pub fn from_type(error_type: &str) -> Self {
        let code = error_type.rsplit('#').next().unwrap_or(error_type);
        let code = code.split(':').next().unwrap_or(code);
        match code {
            "WAFBadRequestException" => Self::WafBadRequestException,
            "WAFDisallowedNameException" => Self::WafDisallowedNameException,
            "WAFInternalErrorException" => Self::WafInternalErrorException,
            "WAFInvalidAccountException" => Self::WafInvalidAccountException,
            "WAFInvalidOperationException" => Self::WafInvalidOperationException,
            "WAFInvalidParameterException" => Self::WafInvalidParameterException,
            "WAFLimitsExceededException" => Self::WafLimitsExceededException,
            "WAFNonexistentContainerException" => Self::WafNonexistentContainerException,
            "WAFNonexistentItemException" => Self::WafNonexistentItemException,
            "WAFReferencedItemException" => Self::WafReferencedItemException,
            "WAFServiceLinkedRoleErrorException" => Self::WafServiceLinkedRoleErrorException,
            "WAFStaleDataException" => Self::WafStaleDataException,
            "WAFTagOperationException" => Self::WafTagOperationException,
            "WAFTagOperationInternalErrorException" => Self::WafTagOperationInternalErrorException,
            "WAFUnavailableEntityException" => Self::WafUnavailableEntityException,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }

    /// Whether the error is a client or a server fault.
    #[must_use]
    pub fn fault(&self) -> ErrorFault {
        if SERVER_FAULTS.contains(self) {
            ErrorFault::Server
        } else {
            ErrorFault::Client
        }
    }
}

impl fmt::Display for WafRegionalErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error returned by AWS WAF Regional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WafRegionalError {
    /// The error code.
    pub code: WafRegionalErrorCode,
    /// The message returned with the error, if any.
    pub message: Option<String>,
}

impl WafRegionalError {
    /// Create an error without a message.
    #[must_use]
    pub fn new(code: WafRegionalErrorCode) -> Self {
        Self {
            code,
            message: None,
        }
    }

    /// Create an error with a message.
    #[must_use]
    pub fn with_message(code: WafRegionalErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
        }
    }

    /// Whether the error is a client or a server fault.
    #[must_use]
    pub fn fault(&self) -> ErrorFault {
        self.code.fault()
    }
}

impl fmt::Display for WafRegionalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.code),
            None => write!(f, "{}", self.code),
        }
    }
}

impl std::error::Error for WafRegionalError {}
