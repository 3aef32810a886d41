use commons::{ContractResult, ContractTokenId, CustomContractError};
use concordium_cis2::{Cis2Event, TokenAmountU8, TransferEvent};
use concordium_std::*;

use crate::constants::*;
use crate::events::*;
use crate::external::*;
use crate::state::{Holder, MarketItem, State};

/// Initialize the marketplace by minting the whole catalog into its own
/// custody, every token listed at its supplied price with the deployer as
/// seller.
///
/// The attached deposit pre-funds one royalty fee per minted token and must
/// equal `royalty_fee * prices.len()` exactly.
///
/// It rejects if:
/// - Fails to parse `InitParams` parameters.
/// - The attached amount does not match the required deposit.
#[init(contract = "MusicNFTMarketplace", parameter = "InitParams", payable)]
fn contract_init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
    amount: Amount,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;

    let deposit = params
        .royalty_fee
        .micro_ccd
        .checked_mul(params.prices.len() as u64)
        .map(Amount::from_micro_ccd)
        .ok_or(CustomContractError::InsufficientDeposit)?;
    ensure_eq!(
        amount,
        deposit,
        CustomContractError::InsufficientDeposit.into()
    );

    let deployer = ctx.init_origin();
    let mut state = State::new(state_builder, params.beneficiary, params.royalty_fee, deployer);
    for price in params.prices {
        state.mint_listed(deployer, price);
    }

    Ok(state)
}

/// Replace the royalty fee charged on every resale.
///
/// It rejects if:
/// - Fails to parse `UpdateRoyaltyFeeParams` parameters.
/// - The sender is not the admin account that deployed the contract.
#[receive(
    mutable,
    contract = "MusicNFTMarketplace",
    name = "updateRoyaltyFee",
    parameter = "UpdateRoyaltyFeeParams"
)]
fn contract_update_royalty_fee<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let params = UpdateRoyaltyFeeParams::deserial(&mut ctx.parameter_cursor())?;

    let state = host.state_mut();
    ensure!(
        ctx.sender().matches_account(&state.admin),
        CustomContractError::Unauthorized.into()
    );

    state.royalty_fee = params.royalty_fee;

    Ok(())
}

/// Buy a listed token. Custody moves from the marketplace to the buyer, the
/// full attached price is forwarded to the seller and the token is marked as
/// sold. No royalty is charged on this leg, the deployment deposit already
/// covers it.
///
/// It rejects if:
/// - The sender is a contract address.
/// - The token id is outside the minted catalog.
/// - The token is not listed for sale.
/// - The attached amount differs from the asking price.
#[receive(
    mutable,
    payable,
    contract = "MusicNFTMarketplace",
    name = "buyToken",
    parameter = "ContractTokenId",
    enable_logger
)]
fn contract_buy_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let buyer = match ctx.sender() {
        Address::Account(addr) => addr,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;

    let item = host.state().item(&token_id)?;
    let seller = item.seller.ok_or(CustomContractError::NotForSale)?;
    ensure_eq!(amount, item.price, CustomContractError::WrongPrice.into());

    let state = host.state_mut();
    state.mark_sold(&token_id)?;
    state.transfer_item(&token_id, Holder::Marketplace, Holder::Account(buyer))?;

    // Log the custody transfer and the sale
    logger.log(&Cis2Event::Transfer(TransferEvent {
        token_id,
        amount: TokenAmountU8(1),
        from: Address::Contract(ctx.self_address()),
        to: Address::Account(buyer),
    }))?;
    logger.log(&MarketEvent::bought(&token_id, &seller, &buyer, item.price))?;

    // Pay the seller the full price
    host.invoke_transfer(&seller, item.price)
        .map_err(CustomContractError::from)?;

    Ok(())
}

/// Put a previously bought token back on sale. Custody returns to the
/// marketplace, the caller becomes the seller at the new price and the
/// attached royalty fee is forwarded to the beneficiary immediately, it never
/// accumulates in the contract balance.
///
/// It rejects if:
/// - The sender is a contract address.
/// - The token id is outside the minted catalog.
/// - The sender does not currently hold the token.
/// - The new price is zero.
/// - The attached amount differs from the current royalty fee.
#[receive(
    mutable,
    payable,
    contract = "MusicNFTMarketplace",
    name = "resellToken",
    parameter = "ResellTokenParams",
    enable_logger
)]
fn contract_resell_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let caller = match ctx.sender() {
        Address::Account(addr) => addr,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };
    let params = ResellTokenParams::deserial(&mut ctx.parameter_cursor())?;

    let holder = host.state().holder_of(&params.token_id)?;
    ensure_eq!(
        holder,
        Holder::Account(caller),
        CustomContractError::NotOwner.into()
    );
    ensure!(
        params.price > Amount::zero(),
        CustomContractError::InvalidPrice.into()
    );
    ensure_eq!(
        amount,
        host.state().royalty_fee,
        CustomContractError::RoyaltyRequired.into()
    );

    let state = host.state_mut();
    state.transfer_item(&params.token_id, Holder::Account(caller), Holder::Marketplace)?;
    state.relist(&params.token_id, caller, params.price)?;

    // Log the custody transfer and the relisting
    logger.log(&Cis2Event::Transfer(TransferEvent {
        token_id: params.token_id,
        amount: TokenAmountU8(1),
        from: Address::Account(caller),
        to: Address::Contract(ctx.self_address()),
    }))?;
    logger.log(&MarketEvent::relisted(&params.token_id, &caller, params.price))?;

    // Forward the royalty to the beneficiary
    let beneficiary = host.state().beneficiary;
    host.invoke_transfer(&beneficiary, amount)
        .map_err(CustomContractError::from)?;

    Ok(())
}

/// View every token currently listed for sale, in token id order.
#[receive(
    contract = "MusicNFTMarketplace",
    name = "getAllUnsoldTokens",
    return_value = "Vec<MarketItem>"
)]
fn contract_get_all_unsold_tokens<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<MarketItem>> {
    Ok(host.state().unsold_items())
}

/// View every token currently held by the sender, in token id order.
///
/// It rejects if:
/// - The sender is a contract address.
#[receive(
    contract = "MusicNFTMarketplace",
    name = "getMyTokens",
    return_value = "Vec<MarketItem>"
)]
fn contract_get_my_tokens<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<MarketItem>> {
    let caller = match ctx.sender() {
        Address::Account(addr) => addr,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    Ok(host.state().items_held_by(caller))
}

/// View the current holder of a token.
///
/// It rejects if:
/// - The token id is outside the minted catalog.
#[receive(
    contract = "MusicNFTMarketplace",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Holder"
)]
fn contract_owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Holder> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;
    host.state().holder_of(&token_id)
}

/// View the collection metadata and royalty configuration.
#[receive(
    contract = "MusicNFTMarketplace",
    name = "view",
    return_value = "ViewResult"
)]
fn contract_view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewResult> {
    let state = host.state();

    Ok(ViewResult {
        name: String::from(NFT_NAME),
        symbol: String::from(NFT_SYMBOL),
        base_url: String::from(TOKEN_METADATA_BASE_URL),
        admin: state.admin,
        beneficiary: state.beneficiary,
        royalty_fee: state.royalty_fee,
        token_count: state.token_count,
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_cis2::TokenIdU32;
    use concordium_std::test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([0u8; 32]);
    const ARTIST: AccountAddress = AccountAddress([1u8; 32]);
    const USER_1: AccountAddress = AccountAddress([2u8; 32]);
    const USER_2: AccountAddress = AccountAddress([3u8; 32]);

    const MARKETPLACE: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    const ROYALTY_FEE: Amount = Amount::from_micro_ccd(10_000);

    fn token(index: u32) -> ContractTokenId {
        TokenIdU32(index)
    }

    /// Catalog prices, 1 to 5 CCD in token id order.
    fn prices() -> Vec<Amount> {
        (1..=5).map(Amount::from_ccd).collect()
    }

    fn deployment_fee() -> Amount {
        Amount::from_micro_ccd(ROYALTY_FEE.micro_ccd * 5)
    }

    /// Deploy the marketplace with five tokens and the exact deposit.
    fn fresh_marketplace() -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ADMIN);

        let params = InitParams {
            royalty_fee: ROYALTY_FEE,
            beneficiary: ARTIST,
            prices: prices(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let state = contract_init(&ctx, &mut state_builder, deployment_fee())
            .expect_report("Contract initialization failed");
        let mut host = TestHost::new(state, state_builder);
        host.set_self_balance(deployment_fee());
        host
    }

    fn buy(
        host: &mut TestHost<State<TestStateApi>>,
        buyer: AccountAddress,
        token_id: ContractTokenId,
        paid: Amount,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(buyer));
        ctx.set_self_address(MARKETPLACE);
        let parameter_bytes = to_bytes(&token_id);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        host.set_self_balance(host.self_balance() + paid);
        contract_buy_token(&ctx, host, paid, &mut logger)
    }

    fn resell(
        host: &mut TestHost<State<TestStateApi>>,
        caller: AccountAddress,
        token_id: ContractTokenId,
        price: Amount,
        paid: Amount,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(caller));
        ctx.set_self_address(MARKETPLACE);
        let params = ResellTokenParams { token_id, price };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        host.set_self_balance(host.self_balance() + paid);
        contract_resell_token(&ctx, host, paid, &mut logger)
    }

    fn my_tokens(
        host: &TestHost<State<TestStateApi>>,
        caller: AccountAddress,
    ) -> Vec<MarketItem> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(caller));
        contract_get_my_tokens(&ctx, host).expect_report("Query rejected")
    }

    /// Test that initialization mints the whole catalog into marketplace
    /// custody, every token listed at its input price.
    #[concordium_test]
    fn test_init() {
        let host = fresh_marketplace();
        let state = host.state();

        claim_eq!(state.token_count, 5, "Catalog size should match the prices");
        claim_eq!(state.admin, ADMIN, "Deployer should be the admin");
        claim_eq!(state.beneficiary, ARTIST, "Beneficiary should be stored");
        claim_eq!(state.royalty_fee, ROYALTY_FEE, "Royalty fee should be stored");

        for (index, price) in prices().into_iter().enumerate() {
            let item = state
                .item(&token(index as u32))
                .expect_report("Minted token is missing");
            claim_eq!(item.token_id, token(index as u32), "Unexpected token id");
            claim_eq!(item.seller, Some(ADMIN), "Deployer should be the seller");
            claim_eq!(item.price, price, "Price should match the input order");
            claim_eq!(
                state
                    .holder_of(&token(index as u32))
                    .expect_report("Minted token has no holder"),
                Holder::Marketplace,
                "Minted tokens should be in marketplace custody"
            );
        }

        claim_eq!(
            host.self_balance(),
            deployment_fee(),
            "Balance should equal the royalty deposit"
        );
    }

    /// Test that a deposit not covering one royalty fee per token is
    /// rejected.
    #[concordium_test]
    fn test_init_insufficient_deposit() {
        let mut state_builder = TestStateBuilder::new();
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ADMIN);

        let params = InitParams {
            royalty_fee: ROYALTY_FEE,
            beneficiary: ARTIST,
            prices: prices(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let err = match contract_init(&ctx, &mut state_builder, ROYALTY_FEE) {
            Ok(_) => fail!("Init with a wrong deposit should reject"),
            Err(err) => err,
        };
        claim_eq!(err, CustomContractError::InsufficientDeposit.into());
    }

    /// Test that buying transfers custody to the buyer, clears the seller,
    /// pays the seller the full price and logs the events.
    #[concordium_test]
    fn test_buy_token() {
        let mut host = fresh_marketplace();
        let price = prices()[0];

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1));
        ctx.set_self_address(MARKETPLACE);
        let parameter_bytes = to_bytes(&token(0));
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        host.set_self_balance(deployment_fee() + price);
        let result = contract_buy_token(&ctx, &mut host, price, &mut logger);
        claim_eq!(result, Ok(()), "Buying a listed token should succeed");

        let item = host
            .state()
            .item(&token(0))
            .expect_report("Token is missing");
        claim_eq!(item.seller, None, "Seller should be cleared after the sale");
        claim_eq!(
            host.state()
                .holder_of(&token(0))
                .expect_report("Token has no holder"),
            Holder::Account(USER_1),
            "Buyer should hold the token"
        );

        claim_eq!(
            host.get_transfers(),
            [(ADMIN, price)],
            "Seller should receive exactly the price"
        );
        claim_eq!(
            host.self_balance(),
            deployment_fee(),
            "Primary sales should leave the deposit untouched"
        );

        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: token(0),
                amount: TokenAmountU8(1),
                from: Address::Contract(MARKETPLACE),
                to: Address::Account(USER_1),
            }))),
            "Expected a custody transfer event"
        );
        claim!(
            logger
                .logs
                .contains(&to_bytes(&MarketEvent::bought(&token(0), &ADMIN, &USER_1, price))),
            "Expected a Bought event"
        );
    }

    /// Test that a sold token can not be bought again.
    #[concordium_test]
    fn test_buy_token_not_for_sale() {
        let mut host = fresh_marketplace();
        buy(&mut host, USER_1, token(0), prices()[0]).expect_report("First buy rejected");

        let result = buy(&mut host, USER_2, token(0), prices()[0]);
        claim_eq!(result, Err(CustomContractError::NotForSale.into()));
    }

    /// Test that the attached amount must match the asking price exactly and
    /// that a failed buy has no observable effect.
    #[concordium_test]
    fn test_buy_token_wrong_price() {
        let mut host = fresh_marketplace();

        let result = buy(&mut host, USER_1, token(1), prices()[0]);
        claim_eq!(result, Err(CustomContractError::WrongPrice.into()));

        let item = host
            .state()
            .item(&token(1))
            .expect_report("Token is missing");
        claim_eq!(item.seller, Some(ADMIN), "Listing should be unchanged");
        claim_eq!(item.price, prices()[1], "Price should be unchanged");
        claim_eq!(
            host.state()
                .holder_of(&token(1))
                .expect_report("Token has no holder"),
            Holder::Marketplace,
            "Custody should be unchanged"
        );
        claim!(host.get_transfers().is_empty(), "No payment should be made");
    }

    /// Test that buying an id outside the catalog is rejected.
    #[concordium_test]
    fn test_buy_token_out_of_range() {
        let mut host = fresh_marketplace();

        let result = buy(&mut host, USER_1, token(99), prices()[0]);
        claim_eq!(result, Err(CustomContractError::OutOfRange.into()));
    }

    /// Test that reselling returns custody to the marketplace, relists at
    /// the new price with the caller as seller and forwards the royalty to
    /// the beneficiary immediately.
    #[concordium_test]
    fn test_resell_token() {
        let mut host = fresh_marketplace();
        buy(&mut host, USER_1, token(0), prices()[0]).expect_report("Buy rejected");

        let resale_price = Amount::from_ccd(2);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1));
        ctx.set_self_address(MARKETPLACE);
        let params = ResellTokenParams {
            token_id: token(0),
            price: resale_price,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        host.set_self_balance(deployment_fee() + ROYALTY_FEE);
        let result = contract_resell_token(&ctx, &mut host, ROYALTY_FEE, &mut logger);
        claim_eq!(result, Ok(()), "Reselling by the holder should succeed");

        let item = host
            .state()
            .item(&token(0))
            .expect_report("Token is missing");
        claim_eq!(item.seller, Some(USER_1), "Caller should become the seller");
        claim_eq!(item.price, resale_price, "Price should be updated");
        claim_eq!(
            host.state()
                .holder_of(&token(0))
                .expect_report("Token has no holder"),
            Holder::Marketplace,
            "Custody should return to the marketplace"
        );

        claim!(
            host.get_transfers().contains(&(ARTIST, ROYALTY_FEE)),
            "Beneficiary should receive exactly the royalty fee"
        );
        claim_eq!(
            host.self_balance(),
            deployment_fee(),
            "The royalty should be forwarded, not retained"
        );

        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: token(0),
                amount: TokenAmountU8(1),
                from: Address::Account(USER_1),
                to: Address::Contract(MARKETPLACE),
            }))),
            "Expected a custody transfer event"
        );
        claim!(
            logger
                .logs
                .contains(&to_bytes(&MarketEvent::relisted(&token(0), &USER_1, resale_price))),
            "Expected a Relisted event"
        );
    }

    /// Test that a zero resale price is rejected with no observable effect.
    #[concordium_test]
    fn test_resell_token_invalid_price() {
        let mut host = fresh_marketplace();
        buy(&mut host, USER_1, token(0), prices()[0]).expect_report("Buy rejected");

        let result = resell(&mut host, USER_1, token(0), Amount::zero(), ROYALTY_FEE);
        claim_eq!(result, Err(CustomContractError::InvalidPrice.into()));

        let item = host
            .state()
            .item(&token(0))
            .expect_report("Token is missing");
        claim_eq!(item.seller, None, "Token should stay unlisted");
        claim_eq!(item.price, prices()[0], "Price should be unchanged");
        claim_eq!(
            host.state()
                .holder_of(&token(0))
                .expect_report("Token has no holder"),
            Holder::Account(USER_1),
            "Custody should be unchanged"
        );
    }

    /// Test that reselling without attaching the royalty fee is rejected
    /// with no observable effect.
    #[concordium_test]
    fn test_resell_token_royalty_required() {
        let mut host = fresh_marketplace();
        buy(&mut host, USER_1, token(0), prices()[0]).expect_report("Buy rejected");

        let result = resell(&mut host, USER_1, token(0), Amount::from_ccd(1), Amount::zero());
        claim_eq!(result, Err(CustomContractError::RoyaltyRequired.into()));

        let item = host
            .state()
            .item(&token(0))
            .expect_report("Token is missing");
        claim_eq!(item.seller, None, "Token should stay unlisted");
        claim_eq!(
            host.state()
                .holder_of(&token(0))
                .expect_report("Token has no holder"),
            Holder::Account(USER_1),
            "Custody should be unchanged"
        );
    }

    /// Test that only the current holder can resell.
    #[concordium_test]
    fn test_resell_token_not_owner() {
        let mut host = fresh_marketplace();
        buy(&mut host, USER_1, token(0), prices()[0]).expect_report("Buy rejected");

        let result = resell(&mut host, USER_2, token(0), Amount::from_ccd(2), ROYALTY_FEE);
        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
    }

    /// Test that the admin can update the royalty fee and the new fee is
    /// visible on the next read.
    #[concordium_test]
    fn test_update_royalty_fee() {
        let mut host = fresh_marketplace();
        let new_fee = Amount::from_micro_ccd(200_000);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(ADMIN));
        let params = UpdateRoyaltyFeeParams { royalty_fee: new_fee };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let result = contract_update_royalty_fee(&ctx, &mut host);
        claim_eq!(result, Ok(()), "Admin should be able to update the fee");

        let view_ctx = TestReceiveContext::empty();
        let view = contract_view(&view_ctx, &host).expect_report("View rejected");
        claim_eq!(view.royalty_fee, new_fee, "New fee should be visible");
    }

    /// Test that a non-admin caller can not update the royalty fee.
    #[concordium_test]
    fn test_update_royalty_fee_unauthorized() {
        let mut host = fresh_marketplace();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1));
        let params = UpdateRoyaltyFeeParams {
            royalty_fee: Amount::from_micro_ccd(200_000),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let result = contract_update_royalty_fee(&ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));

        let view_ctx = TestReceiveContext::empty();
        let view = contract_view(&view_ctx, &host).expect_report("View rejected");
        claim_eq!(view.royalty_fee, ROYALTY_FEE, "Fee should be unchanged");
    }

    /// Test that the unsold view returns exactly the remaining listings in
    /// token id order, independent of the purchase order.
    #[concordium_test]
    fn test_get_all_unsold_tokens() {
        let mut host = fresh_marketplace();
        buy(&mut host, USER_2, token(4), prices()[4]).expect_report("Buy rejected");
        buy(&mut host, USER_1, token(0), prices()[0]).expect_report("Buy rejected");
        buy(&mut host, USER_1, token(1), prices()[1]).expect_report("Buy rejected");

        let ctx = TestReceiveContext::empty();
        let unsold =
            contract_get_all_unsold_tokens(&ctx, &host).expect_report("Query rejected");

        claim_eq!(unsold.len(), 2, "Two tokens should remain listed");
        claim_eq!(unsold[0].token_id, token(2), "Unexpected token id");
        claim_eq!(unsold[1].token_id, token(3), "Unexpected token id");
        claim!(
            unsold.iter().all(|item| item.seller == Some(ADMIN)),
            "Remaining listings should be untouched"
        );
    }

    /// Test that the holdings view is scoped to the caller.
    #[concordium_test]
    fn test_get_my_tokens() {
        let mut host = fresh_marketplace();
        buy(&mut host, USER_1, token(0), prices()[0]).expect_report("Buy rejected");
        buy(&mut host, USER_1, token(1), prices()[1]).expect_report("Buy rejected");
        buy(&mut host, USER_2, token(4), prices()[4]).expect_report("Buy rejected");

        let owned = my_tokens(&host, USER_1);
        claim_eq!(owned.len(), 2, "Buyer should hold both bought tokens");
        claim_eq!(owned[0].token_id, token(0), "Unexpected token id");
        claim_eq!(owned[1].token_id, token(1), "Unexpected token id");

        let owned = my_tokens(&host, USER_2);
        claim_eq!(owned.len(), 1, "Buyer should hold one token");
        claim_eq!(owned[0].token_id, token(4), "Unexpected token id");

        claim_eq!(
            my_tokens(&host, ADMIN).len(),
            0,
            "An account without purchases should hold nothing"
        );
    }

    /// Test the holder lookup on a bought token and an unknown id.
    #[concordium_test]
    fn test_owner_of() {
        let mut host = fresh_marketplace();
        buy(&mut host, USER_1, token(0), prices()[0]).expect_report("Buy rejected");

        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&token(0));
        ctx.set_parameter(&parameter_bytes);
        let holder = contract_owner_of(&ctx, &host).expect_report("Query rejected");
        claim_eq!(holder, Holder::Account(USER_1), "Buyer should be the holder");

        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&token(99));
        ctx.set_parameter(&parameter_bytes);
        let result = contract_owner_of(&ctx, &host);
        claim_eq!(result, Err(CustomContractError::OutOfRange.into()));
    }

    /// Test the configuration view after deployment.
    #[concordium_test]
    fn test_view() {
        let host = fresh_marketplace();

        let ctx = TestReceiveContext::empty();
        let view = contract_view(&ctx, &host).expect_report("View rejected");

        claim_eq!(view.name.as_str(), NFT_NAME, "Unexpected collection name");
        claim_eq!(view.symbol.as_str(), NFT_SYMBOL, "Unexpected symbol");
        claim_eq!(
            view.base_url.as_str(),
            TOKEN_METADATA_BASE_URL,
            "Unexpected base url"
        );
        claim_eq!(view.admin, ADMIN, "Unexpected admin");
        claim_eq!(view.beneficiary, ARTIST, "Unexpected beneficiary");
        claim_eq!(view.royalty_fee, ROYALTY_FEE, "Unexpected royalty fee");
        claim_eq!(view.token_count, 5, "Unexpected catalog size");
    }
}
