use smartdefi_common::abi::{
    Selector, BURN_AND_RECOVER_SELECTOR, CREATE_TOKEN_SELECTOR, GET_BACKING_SELECTOR,
    GET_FLOOR_PRICE_SELECTOR,
};

/// Methods exposed by the asset-backing precompile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    CreateToken,
    GetBacking,
    BurnAndRecover,
    GetFloorPrice,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::CreateToken,
        Method::GetBacking,
        Method::BurnAndRecover,
        Method::GetFloorPrice,
    ];

    pub fn from_selector(selector: &Selector) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.selector() == *selector)
    }

    pub fn selector(&self) -> Selector {
        match self {
            Self::CreateToken => *CREATE_TOKEN_SELECTOR,
            Self::GetBacking => *GET_BACKING_SELECTOR,
            Self::BurnAndRecover => *BURN_AND_RECOVER_SELECTOR,
            Self::GetFloorPrice => *GET_FLOOR_PRICE_SELECTOR,
        }
    }

    /// Whether the method writes state
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::CreateToken | Self::BurnAndRecover)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateToken => "createAssetBackedToken",
            Self::GetBacking => "getBacking",
            Self::BurnAndRecover => "burnAndRecover",
            Self::GetFloorPrice => "getFloorPrice",
        }
    }
}
