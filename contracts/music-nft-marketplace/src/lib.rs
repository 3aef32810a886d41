//! A music NFT marketplace smart contract.
//!
//! # Description
//! The contract mints a fixed catalog of music NFTs at initialization, all
//! held in its own custody and listed for sale at the prices supplied by the
//! deployer. Tokens cycle between listed and sold: buying transfers custody
//! to the buyer and pays the seller, reselling returns custody to the
//! marketplace and relists at a new price against a fixed royalty payment
//! that is forwarded to the beneficiary immediately.
//!
//! The deployment deposit pre-funds one royalty fee per minted token and must
//! match `royalty_fee * prices.len()` exactly.
#![cfg_attr(not(feature = "std"), no_std)]

mod constants;
mod contract;
mod events;
mod external;
mod state;
