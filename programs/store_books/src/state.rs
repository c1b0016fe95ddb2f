use borsh::{BorshDeserialize, BorshSerialize};

/// State stored in every buy account
#[derive(BorshSerialize, BorshDeserialize, Debug, Default)]
pub struct BuyAccount {
    /// Number of books bought through this account
    pub counter: u32,
}

impl BuyAccount {
    pub const SIZE: usize = 4;
}
