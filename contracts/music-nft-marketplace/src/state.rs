use commons::{ContractResult, ContractTokenId, CustomContractError};
use concordium_cis2::TokenIdU32;
use concordium_std::*;

/// Current holder of a token. The marketplace itself holds every listed
/// token, an account holds a token it bought and did not relist.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub enum Holder {
    Marketplace,
    Account(AccountAddress),
}

/// A single entry of the fixed catalog created at initialization.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct MarketItem {
    /// Token identifier, assigned sequentially from zero on mint.
    pub token_id: ContractTokenId,
    /// Account entitled to the proceeds of the next sale. `None` means the
    /// token was sold and is not listed.
    pub seller: Option<AccountAddress>,
    /// Asking price while listed. Must be above zero.
    pub price: Amount,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Account allowed to update the royalty fee.
    pub admin: AccountAddress,
    /// Account that receives the royalty fee on every resale.
    pub beneficiary: AccountAddress,
    /// Absolute royalty amount due on every resale.
    pub royalty_fee: Amount,
    /// Number of tokens minted at initialization. Never changes afterwards,
    /// token identifiers cover exactly `0..token_count`.
    pub token_count: u32,
    /// The catalog, one entry per minted token.
    pub items: StateMap<ContractTokenId, MarketItem, S>,
    /// Ownership registry, one holder per minted token.
    pub holders: StateMap<ContractTokenId, Holder, S>,
}

// Functions for creating and updating the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a new state with an empty catalog.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        beneficiary: AccountAddress,
        royalty_fee: Amount,
        admin: AccountAddress,
    ) -> Self {
        State {
            admin,
            beneficiary,
            royalty_fee,
            token_count: 0,
            items: state_builder.new_map(),
            holders: state_builder.new_map(),
        }
    }

    /// Mint the next token of the catalog into marketplace custody, listed at
    /// the given price with `seller` entitled to the proceeds.
    pub fn mint_listed(&mut self, seller: AccountAddress, price: Amount) -> ContractTokenId {
        let token_id = TokenIdU32(self.token_count);
        self.items.insert(
            token_id,
            MarketItem {
                token_id,
                seller: Some(seller),
                price,
            },
        );
        self.holders.insert(token_id, Holder::Marketplace);
        self.token_count += 1;
        token_id
    }

    /// Look up a catalog entry, fails with OutOfRange for an unknown id.
    pub fn item(&self, token_id: &ContractTokenId) -> ContractResult<MarketItem> {
        self.items
            .get(token_id)
            .map(|item| *item)
            .ok_or_else(|| CustomContractError::OutOfRange.into())
    }

    /// Look up the current holder of a token, fails with OutOfRange for an
    /// unknown id.
    pub fn holder_of(&self, token_id: &ContractTokenId) -> ContractResult<Holder> {
        self.holders
            .get(token_id)
            .map(|holder| *holder)
            .ok_or_else(|| CustomContractError::OutOfRange.into())
    }

    /// Move custody of a token. Fails with NotOwner unless `from` is the
    /// current holder, making the swap an atomic guarded update.
    pub fn transfer_item(
        &mut self,
        token_id: &ContractTokenId,
        from: Holder,
        to: Holder,
    ) -> ContractResult<()> {
        let mut holder = self
            .holders
            .get_mut(token_id)
            .ok_or(CustomContractError::OutOfRange)?;
        ensure_eq!(*holder, from, CustomContractError::NotOwner.into());
        *holder = to;
        Ok(())
    }

    /// Clear the seller of a listed token and return it. Fails with
    /// NotForSale if the token is already sold.
    pub fn mark_sold(&mut self, token_id: &ContractTokenId) -> ContractResult<AccountAddress> {
        let mut item = self
            .items
            .get_mut(token_id)
            .ok_or(CustomContractError::OutOfRange)?;
        let seller = item.seller.take().ok_or(CustomContractError::NotForSale)?;
        Ok(seller)
    }

    /// Put a sold token back on sale at a new price with a new seller.
    pub fn relist(
        &mut self,
        token_id: &ContractTokenId,
        seller: AccountAddress,
        price: Amount,
    ) -> ContractResult<()> {
        let mut item = self
            .items
            .get_mut(token_id)
            .ok_or(CustomContractError::OutOfRange)?;
        item.seller = Some(seller);
        item.price = price;
        Ok(())
    }

    /// Every listed catalog entry, in token id order.
    pub fn unsold_items(&self) -> Vec<MarketItem> {
        let mut unsold = Vec::new();
        for index in 0..self.token_count {
            if let Some(item) = self.items.get(&TokenIdU32(index)) {
                if item.seller.is_some() {
                    unsold.push(*item);
                }
            }
        }
        unsold
    }

    /// Every catalog entry currently held by `owner`, in token id order.
    pub fn items_held_by(&self, owner: AccountAddress) -> Vec<MarketItem> {
        let mut owned = Vec::new();
        for index in 0..self.token_count {
            let token_id = TokenIdU32(index);
            let held = self
                .holders
                .get(&token_id)
                .map_or(false, |holder| *holder == Holder::Account(owner));
            if held {
                if let Some(item) = self.items.get(&token_id) {
                    owned.push(*item);
                }
            }
        }
        owned
    }
}
