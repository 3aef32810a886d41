/// Tag prefix of the `Bought` event in the contract event log.
pub const BOUGHT_TAG: u8 = 0;

/// Tag prefix of the `Relisted` event in the contract event log.
pub const RELISTED_TAG: u8 = 1;
