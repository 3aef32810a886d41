use commons::{ContractTokenId, BOUGHT_TAG, RELISTED_TAG};
use concordium_std::*;

/// Token bought event data.
#[derive(Debug)]
pub struct BoughtEvent<'a> {
    /// Token identifier.
    pub token_id: &'a ContractTokenId,
    /// Account that listed the token and receives the payment.
    pub seller: &'a AccountAddress,
    /// New token holder.
    pub buyer: &'a AccountAddress,
    /// Price paid.
    pub price: Amount,
}

/// Token relisted event data.
#[derive(Debug)]
pub struct RelistedEvent<'a> {
    /// Token identifier.
    pub token_id: &'a ContractTokenId,
    /// Account that relisted the token.
    pub seller: &'a AccountAddress,
    /// New asking price.
    pub price: Amount,
}

/// Tagged custom event to be serialized for the event log.
#[derive(Debug)]
pub enum MarketEvent<'a> {
    /// Token sold to a buyer.
    Bought(BoughtEvent<'a>),
    /// Token put back on sale by its holder.
    Relisted(RelistedEvent<'a>),
}

impl<'a> MarketEvent<'a> {
    pub fn bought(
        token_id: &'a ContractTokenId,
        seller: &'a AccountAddress,
        buyer: &'a AccountAddress,
        price: Amount,
    ) -> Self {
        Self::Bought(BoughtEvent {
            token_id,
            seller,
            buyer,
            price,
        })
    }

    pub fn relisted(
        token_id: &'a ContractTokenId,
        seller: &'a AccountAddress,
        price: Amount,
    ) -> Self {
        Self::Relisted(RelistedEvent {
            token_id,
            seller,
            price,
        })
    }
}

impl<'a> Serial for BoughtEvent<'a> {
    fn serial<W: Write>(&self, _out: &mut W) -> Result<(), W::Err> { Ok(()) }
}
impl<'a> Serial for RelistedEvent<'a> {
    fn serial<W: Write>(&self, _out: &mut W) -> Result<(), W::Err> { Ok(()) }
}

impl<'a> Serial for MarketEvent<'a> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            MarketEvent::Bought(event) => {
                out.write_u8(BOUGHT_TAG)?;
                event.serial(out)
            }
            MarketEvent::Relisted(event) => {
                out.write_u8(RELISTED_TAG)?;
                event.serial(out)
            }
        }
    }
}
