use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type. Token identifiers are assigned sequentially from
/// zero at initialization, so a `u32` is enough to address the whole catalog.
pub type ContractTokenId = TokenIdU32;

/// Every token in the catalog is unique, an amount is always zero or one.
pub type ContractTokenAmount = TokenAmountU8;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;
