use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Caller lacks the required privilege (Error code: -4).
    Unauthorized,
    /// Token is not listed for sale (Error code: -5).
    NotForSale,
    /// Attached payment does not match the asking price (Error code: -6).
    WrongPrice,
    /// Deployment deposit does not cover the royalty fee for every minted
    /// token (Error code: -7).
    InsufficientDeposit,
    /// Attached payment does not match the royalty fee (Error code: -8).
    RoyaltyRequired,
    /// Listing price must be greater than zero (Error code: -9).
    InvalidPrice,
    /// Caller does not hold the token (Error code: -10).
    NotOwner,
    /// Token identifier is outside the minted catalog (Error code: -11).
    OutOfRange,
    /// Only account addresses can trade tokens (Error code: -12).
    OnlyAccountAddress,
    /// Failed to invoke a contract (Error code: -13).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -14).
    InvokeTransferError,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to transfer invocations to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
