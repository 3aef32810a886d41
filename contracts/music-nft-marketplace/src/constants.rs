/// Collection name reported by the `view` function.
pub const NFT_NAME: &str = "DAppFi";

/// Collection symbol reported by the `view` function.
pub const NFT_SYMBOL: &str = "DAPP";

/// The baseurl for the token metadata, gets appended with the token ID as hex
/// encoding to form the metadata url of a token.
pub const TOKEN_METADATA_BASE_URL: &str =
    "https://bafybeifd5crmyo3cakir4pq3lgnkxdm5txzpl2va26zrvnelbyy257i6wi.ipfs.nftstorage.link/";
