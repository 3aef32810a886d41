use commons::ContractTokenId;
use concordium_std::*;

#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct InitParams {
    /// Absolute royalty amount due on every resale.
    pub royalty_fee: Amount,
    /// Account that receives the royalty fee. Fixed for the lifetime of the
    /// contract.
    pub beneficiary: AccountAddress,
    /// Asking price of each token to mint. The catalog size is the length of
    /// this list and never changes afterwards.
    pub prices: Vec<Amount>,
}

#[derive(Debug, Clone, Copy, SchemaType, Serialize)]
pub struct UpdateRoyaltyFeeParams {
    /// The royalty fee that replaces the current one.
    pub royalty_fee: Amount,
}

#[derive(Debug, Clone, Copy, SchemaType, Serialize)]
pub struct ResellTokenParams {
    /// Token to put back on sale.
    pub token_id: ContractTokenId,
    /// New asking price, must be above zero.
    pub price: Amount,
}

/// Contract configuration summary returned by the `view` function.
#[derive(Debug, SchemaType, Serialize)]
pub struct ViewResult {
    /// Collection name.
    pub name: String,
    /// Collection symbol.
    pub symbol: String,
    /// Base url of the token metadata.
    pub base_url: String,
    /// Account allowed to update the royalty fee.
    pub admin: AccountAddress,
    /// Account that receives the royalty fee on every resale.
    pub beneficiary: AccountAddress,
    /// Absolute royalty amount due on every resale.
    pub royalty_fee: Amount,
    /// Number of tokens minted at initialization.
    pub token_count: u32,
}
